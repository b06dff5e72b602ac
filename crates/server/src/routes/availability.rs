//! Stock availability API handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use farmstead_core::ProductId;

use crate::error::AppError;
use crate::services::{AvailabilityService, ProductAvailability};
use crate::state::AppState;

/// Query parameters for the availability lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// Product to resolve availability for.
    pub product_id: i32,
}

/// Resolve available stock for one product.
///
/// Unknown products resolve to zero rather than an error; the resolver
/// treats an absent ledger and counter the same as empty ones.
///
/// # Errors
///
/// Returns `AppError::Database` if either store cannot be read.
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ProductAvailability>, AppError> {
    let availability = AvailabilityService::new(state.pool().clone())
        .resolve_for_product(ProductId::new(query.product_id))
        .await?;

    Ok(Json(availability))
}
