//! Product domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farmstead_core::{ProductCategory, ProductId};

/// A purchasable product (feed, equipment, medicine, ...).
///
/// Products are created implicitly the first time an invoice or a stock
/// seed references their name; identity fields never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name, unique across the farm.
    pub name: String,
    /// Category; `animal_medicine` enables per-unit tracking.
    pub category: ProductCategory,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}
