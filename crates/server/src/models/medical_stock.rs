//! Medical stock domain models.
//!
//! Medical stock is the aggregate counter: one integer per product,
//! independent of the per-unit ledger. The two can drift; the availability
//! resolver decides which one to believe at read time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farmstead_core::{MedicalStockId, ProductCategory, ProductId};

/// Aggregate stock record for one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalStock {
    /// Unique stock record ID.
    pub id: MedicalStockId,
    /// Product this counter belongs to.
    pub product_id: ProductId,
    /// Current aggregate quantity; never negative.
    pub quantity: i32,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A stock record with its product's name and category joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalStockWithProduct {
    /// The stock record itself.
    #[serde(flatten)]
    pub stock: MedicalStock,
    /// Product name.
    pub product_name: String,
    /// Product category.
    pub category: ProductCategory,
}

/// Direction of a manual stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockAction {
    /// Add one unit.
    Increment,
    /// Remove one unit; no-op at zero.
    Decrement,
}

/// Input for adjusting a stock counter by one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustStockInput {
    /// Product whose counter to adjust.
    pub product_id: ProductId,
    /// Direction of the adjustment.
    pub action: StockAction,
}

/// Input for seeding a stock record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedStockInput {
    /// Product to seed.
    pub product_id: ProductId,
    /// Initial quantity when no record exists yet.
    pub quantity: i32,
}
