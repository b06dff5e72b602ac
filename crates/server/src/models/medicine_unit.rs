//! Medicine unit domain models.
//!
//! A medicine unit is one physical box/bottle of veterinary medicine. Units
//! are persisted when an invoice with an `animal_medicine` line item is
//! submitted; before that they exist only as drafts keyed for editing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use farmstead_core::{ExpiryStatus, InvoiceId, MedicineUnitId, ProductId};

/// A persisted medicine unit - one physical box in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineUnit {
    /// Unique unit ID.
    pub id: MedicineUnitId,
    /// Product this unit belongs to.
    pub product_id: ProductId,
    /// Invoice this unit arrived on.
    pub invoice_id: InvoiceId,
    /// Display identifier (e.g., "Amoxicilli-001").
    pub custom_id: String,
    /// Expiration date printed on the box.
    pub expiration_date: NaiveDate,
    /// When the box was first opened, if ever.
    pub first_usage_date: Option<DateTime<Utc>>,
    /// Whether the box has been used up.
    pub is_used: bool,
    /// Whether the box has been marked expired.
    pub is_expired: bool,
    /// What the medicine is good for (free text).
    pub good_for: Option<String>,
    /// Usage instructions (free text).
    pub usage_description: Option<String>,
    /// When the unit was created.
    pub created_at: DateTime<Utc>,
    /// When the unit was last updated.
    pub updated_at: DateTime<Utc>,
}

impl MedicineUnit {
    /// Whether this unit counts toward available stock.
    ///
    /// Availability is decided by the stored flags, not by the expiration
    /// date; a past-date unit nobody marked expired still counts.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !self.is_used && !self.is_expired
    }
}

/// A pre-persistence medicine unit draft.
///
/// Drafts are what invoice submissions carry for each medicine line item.
/// The `draft_key` exists only so editors can key list rows stably while
/// quantity changes reshape the collection; it is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineUnitDraft {
    /// Stable editing key; never stored.
    #[serde(default = "Uuid::new_v4")]
    pub draft_key: Uuid,
    /// Display identifier; generated from the product name.
    pub custom_id: String,
    /// Expiration date; required before submission.
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    /// First usage timestamp, if pre-filled.
    #[serde(default)]
    pub first_usage_date: Option<DateTime<Utc>>,
    /// What the medicine is good for (free text).
    #[serde(default)]
    pub good_for: Option<String>,
    /// Usage instructions (free text).
    #[serde(default)]
    pub usage_description: Option<String>,
}

/// A unit together with its derived shelf-life status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineUnitWithStatus {
    /// The unit itself.
    #[serde(flatten)]
    pub unit: MedicineUnit,
    /// Status derived from the expiration date at read time.
    pub status: ExpiryStatus,
}

/// Partial update for a medicine unit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicineUnitInput {
    /// New used flag.
    pub is_used: Option<bool>,
    /// Explicit first usage timestamp (wins over the automatic stamp).
    pub first_usage_date: Option<DateTime<Utc>>,
    /// New expired flag.
    pub is_expired: Option<bool>,
}

/// Filter criteria for listing medicine units.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedicineUnitFilter {
    /// Filter by product.
    pub product_id: Option<ProductId>,
    /// Filter by invoice.
    pub invoice_id: Option<InvoiceId>,
}

/// Counts over a set of medicine units.
///
/// `available` and `used` come from the stored flags; `expired` and
/// `expiring_soon` are derived from expiration dates at read time, so an
/// unmarked past-date unit shows up in `expired` while still counting as
/// `available`. The drift is deliberate and visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummary {
    /// Total units in the set.
    pub total: usize,
    /// Units with neither flag set.
    pub available: usize,
    /// Units with the used flag set.
    pub used: usize,
    /// Units whose expiration date has passed.
    pub expired: usize,
    /// Units expiring within the warning window.
    pub expiring_soon: usize,
}
