//! Medical stock API handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::{MedicalStockRepository, ProductRepository, RepositoryError};
use crate::error::AppError;
use crate::models::medical_stock::{
    AdjustStockInput, MedicalStock, MedicalStockWithProduct, SeedStockInput, StockAction,
};
use crate::state::AppState;

/// Response for the stock listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StocksResponse {
    /// Stock records joined with their product.
    pub stocks: Vec<MedicalStockWithProduct>,
}

/// List all stock records with product details.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<StocksResponse>, AppError> {
    let stocks = MedicalStockRepository::new(state.pool())
        .list_with_products()
        .await?;

    Ok(Json(StocksResponse { stocks }))
}

/// Adjust one stock record by a single count.
///
/// Decrements clamp at zero.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no stock record exists for the product
/// and `AppError::Database` if the query fails.
pub async fn adjust(
    State(state): State<AppState>,
    Json(input): Json<AdjustStockInput>,
) -> Result<Json<MedicalStock>, AppError> {
    let repository = MedicalStockRepository::new(state.pool());
    let result = match input.action {
        StockAction::Increment => repository.increment(input.product_id).await,
        StockAction::Decrement => repository.decrement(input.product_id).await,
    };

    let stock = result.map_err(|e| match e {
        RepositoryError::NotFound => {
            AppError::NotFound(format!("no stock record for product {}", input.product_id))
        }
        other => other.into(),
    })?;

    Ok(Json(stock))
}

/// Create a stock record for a product, typically zeroed.
///
/// Seeding an already-tracked product returns the existing record unchanged.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a negative quantity,
/// `AppError::NotFound` if the product doesn't exist, and
/// `AppError::Database` if the query fails.
pub async fn seed(
    State(state): State<AppState>,
    Json(input): Json<SeedStockInput>,
) -> Result<Json<MedicalStock>, AppError> {
    if input.quantity < 0 {
        return Err(AppError::BadRequest(
            "stock quantity cannot be negative".to_string(),
        ));
    }

    let product = ProductRepository::new(state.pool())
        .get(input.product_id)
        .await?;
    if product.is_none() {
        return Err(AppError::NotFound(format!(
            "product {} not found",
            input.product_id
        )));
    }

    let stock = MedicalStockRepository::new(state.pool())
        .seed(input.product_id, input.quantity)
        .await?;

    Ok(Json(stock))
}
