//! Invoice API handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use farmstead_core::InvoiceId;

use crate::db::InvoiceRepository;
use crate::error::AppError;
use crate::models::invoice::{CreateInvoiceInput, Invoice, InvoiceWithLineItems};
use crate::services::InvoiceService;
use crate::state::AppState;

/// Response for a submitted invoice.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInvoiceResponse {
    /// The created invoice.
    pub invoice: Invoice,
    /// One message per aggregate-counter change made by the submission.
    pub stock_updates: Vec<String>,
}

/// Response for the invoice listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInvoicesResponse {
    /// All invoices, newest first.
    pub invoices: Vec<Invoice>,
}

/// Submit a new invoice.
///
/// Validation failures reject the whole submission with a message naming
/// the offending product and unit; nothing is persisted in that case.
///
/// # Errors
///
/// Returns `AppError::Validation` for rejected input and
/// `AppError::Database` when persistence fails.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoiceInput>,
) -> Result<(StatusCode, Json<SubmitInvoiceResponse>), AppError> {
    let submitted = InvoiceService::new(state.pool().clone())
        .submit(input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitInvoiceResponse {
            invoice: submitted.invoice,
            stock_updates: submitted.stock_updates,
        }),
    ))
}

/// List all invoices.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn index(
    State(state): State<AppState>,
) -> Result<Json<ListInvoicesResponse>, AppError> {
    let invoices = InvoiceRepository::new(state.pool()).list().await?;
    Ok(Json(ListInvoicesResponse { invoices }))
}

/// Get one invoice with its line items.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the invoice doesn't exist and
/// `AppError::Database` if the query fails.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<InvoiceWithLineItems>, AppError> {
    let invoice = InvoiceRepository::new(state.pool())
        .get_with_line_items(InvoiceId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {id} not found")))?;

    Ok(Json(invoice))
}
