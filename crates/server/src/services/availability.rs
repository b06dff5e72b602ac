//! Availability resolution service.

use serde::Serialize;
use sqlx::PgPool;
use tracing::{instrument, warn};

use farmstead_core::{AvailabilitySource, ProductId};

use crate::db::{MedicalStockRepository, MedicineUnitRepository};
use crate::error::AppError;
use crate::stock::resolve_available;

/// The resolver's answer for one product, with its working shown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAvailability {
    /// Product the answer is about.
    pub product_id: ProductId,
    /// How many units can be used right now.
    pub available: i64,
    /// Which store the number came from.
    pub source: AvailabilitySource,
    /// How many units the ledger tracks for this product.
    pub tracked_units: usize,
    /// The aggregate counter's value (zero when no record exists).
    pub aggregate_quantity: i32,
}

/// Service resolving available stock across both stores.
pub struct AvailabilityService {
    pool: PgPool,
}

impl AvailabilityService {
    /// Create a new availability service.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve the available quantity for one product.
    ///
    /// Recomputed from both stores on every call; nothing is cached. When
    /// the ledger says zero but the counter disagrees, the counter's value
    /// is returned and the disagreement is logged, never surfaced as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if either store cannot be read.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn resolve_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<ProductAvailability, AppError> {
        let units = MedicineUnitRepository::new(&self.pool)
            .list_for_product(product_id)
            .await?;
        let stock = MedicalStockRepository::new(&self.pool)
            .get_for_product(product_id)
            .await?;

        let aggregate_quantity = stock.map(|record| record.quantity);
        let availability = resolve_available(&units, aggregate_quantity);

        if availability.source == AvailabilitySource::AggregateFallback {
            warn!(
                product_id = %product_id,
                tracked_units = units.len(),
                aggregate_quantity = aggregate_quantity.unwrap_or(0),
                "No usable units in the ledger but the aggregate counter is positive; \
                 reporting the counter value"
            );
        }

        Ok(ProductAvailability {
            product_id,
            available: availability.quantity,
            source: availability.source,
            tracked_units: units.len(),
            aggregate_quantity: aggregate_quantity.unwrap_or(0),
        })
    }
}
