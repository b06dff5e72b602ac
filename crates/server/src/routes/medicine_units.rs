//! Medicine unit API handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use farmstead_core::{ExpiryStatus, InvoiceId, MedicineUnitId, ProductId};

use crate::db::{MedicineUnitRepository, RepositoryError};
use crate::error::AppError;
use crate::models::medicine_unit::{
    MedicineUnit, MedicineUnitFilter, MedicineUnitWithStatus, UnitSummary,
    UpdateMedicineUnitInput,
};
use crate::state::AppState;
use crate::stock::summarize_units;

/// Query parameters for the unit listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUnitsQuery {
    /// Restrict to one product.
    pub product_id: Option<i32>,
    /// Restrict to one invoice.
    pub invoice_id: Option<i32>,
}

/// Response for the unit listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUnitsResponse {
    /// Units with their derived shelf-life status.
    pub units: Vec<MedicineUnitWithStatus>,
    /// Counts over the listed set.
    pub summary: UnitSummary,
}

/// Request for updating one unit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnitRequest {
    /// Unit to update.
    pub unit_id: i32,
    /// Fields to change.
    pub updates: UpdateMedicineUnitInput,
}

/// Query parameters for deleting one unit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUnitQuery {
    /// Unit to delete.
    pub unit_id: i32,
}

/// List medicine units with derived status and summary counts.
///
/// Status and the summary's expired/expiring-soon counts are classified
/// against today's date on every request.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListUnitsQuery>,
) -> Result<Json<ListUnitsResponse>, AppError> {
    let filter = MedicineUnitFilter {
        product_id: query.product_id.map(ProductId::new),
        invoice_id: query.invoice_id.map(InvoiceId::new),
    };
    let units = MedicineUnitRepository::new(state.pool()).list(filter).await?;

    let today = Utc::now().date_naive();
    let summary = summarize_units(&units, today);
    let units = units.into_iter().map(|unit| with_status(unit, today)).collect();

    Ok(Json(ListUnitsResponse { units, summary }))
}

/// Update one unit's usage/expiration fields.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the unit doesn't exist and
/// `AppError::Database` if the query fails.
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateUnitRequest>,
) -> Result<Json<MedicineUnit>, AppError> {
    let unit_id = request.unit_id;
    let unit = MedicineUnitRepository::new(state.pool())
        .update(MedicineUnitId::new(unit_id), &request.updates)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => {
                AppError::NotFound(format!("medicine unit {unit_id} not found"))
            }
            other => other.into(),
        })?;

    Ok(Json(unit))
}

/// Delete one unit from the ledger.
///
/// The aggregate stock counter is left untouched.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the unit doesn't exist and
/// `AppError::Database` if the query fails.
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<DeleteUnitQuery>,
) -> Result<StatusCode, AppError> {
    let deleted = MedicineUnitRepository::new(state.pool())
        .delete(MedicineUnitId::new(query.unit_id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!(
            "medicine unit {} not found",
            query.unit_id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn with_status(unit: MedicineUnit, today: chrono::NaiveDate) -> MedicineUnitWithStatus {
    let status = ExpiryStatus::classify(unit.expiration_date, today);
    MedicineUnitWithStatus { unit, status }
}
