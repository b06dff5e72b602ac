//! Invoice domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use farmstead_core::{InvoiceId, InvoiceLineItemId, ProductCategory, ProductId};

use super::medicine_unit::MedicineUnitDraft;

/// A supplier invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique invoice ID.
    pub id: InvoiceId,
    /// Supplier the invoice came from.
    pub supplier_name: String,
    /// Date printed on the invoice.
    pub invoice_date: NaiveDate,
    /// Optional notes.
    pub notes: Option<String>,
    /// When the invoice was recorded.
    pub created_at: DateTime<Utc>,
    /// When the invoice was last updated.
    pub updated_at: DateTime<Utc>,
}

/// One line of an invoice - a quantity of one product at a price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    /// Unique line item ID.
    pub id: InvoiceLineItemId,
    /// Invoice this line belongs to.
    pub invoice_id: InvoiceId,
    /// Product purchased.
    pub product_id: ProductId,
    /// Number of units purchased.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: Decimal,
    /// When the line was recorded.
    pub created_at: DateTime<Utc>,
}

/// A line item with its product's name and category joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItemWithProduct {
    /// The line item itself.
    #[serde(flatten)]
    pub line_item: InvoiceLineItem,
    /// Product name.
    pub product_name: String,
    /// Product category.
    pub category: ProductCategory,
}

/// An invoice with its line items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceWithLineItems {
    /// The invoice itself.
    #[serde(flatten)]
    pub invoice: Invoice,
    /// Line items on the invoice.
    pub line_items: Vec<InvoiceLineItemWithProduct>,
}

/// Input for submitting a new invoice.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceInput {
    /// Supplier the invoice came from.
    pub supplier_name: String,
    /// Date printed on the invoice.
    pub invoice_date: NaiveDate,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Products purchased on this invoice.
    pub products: Vec<InvoiceProductInput>,
}

/// One product entry on an invoice submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceProductInput {
    /// Product name; the product is found or created by this name.
    pub name: String,
    /// Product category.
    pub category: ProductCategory,
    /// Number of units purchased.
    pub quantity: i32,
    /// Price per unit.
    pub price: Decimal,
    /// Medicine unit drafts; required for `animal_medicine`, one per unit.
    #[serde(default)]
    pub units: Vec<MedicineUnitDraft>,
}

// =============================================================================
// Validated Submission
// =============================================================================
//
// The validation gate in `services::invoices` turns a `CreateInvoiceInput`
// into the types below. The repository only ever sees these, so required
// fields are required by construction and persistence never re-checks.

/// A fully validated invoice, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSubmission {
    /// Supplier the invoice came from.
    pub supplier_name: String,
    /// Date printed on the invoice.
    pub invoice_date: NaiveDate,
    /// Optional notes.
    pub notes: Option<String>,
    /// Validated line entries.
    pub lines: Vec<SubmissionLine>,
}

/// One validated line of an invoice submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionLine {
    /// Product name; found or created at persistence time.
    pub product_name: String,
    /// Product category.
    pub category: ProductCategory,
    /// Number of units purchased.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Validated units; empty unless the category tracks units.
    pub units: Vec<NewMedicineUnit>,
}

/// A validated medicine unit about to enter the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicineUnit {
    /// Display identifier.
    pub custom_id: String,
    /// Expiration date; required past validation.
    pub expiration_date: NaiveDate,
    /// First usage timestamp, if pre-filled.
    pub first_usage_date: Option<DateTime<Utc>>,
    /// What the medicine is good for (free text).
    pub good_for: Option<String>,
    /// Usage instructions (free text).
    pub usage_description: Option<String>,
}

/// Aggregate-counter change recorded while persisting a submission.
#[derive(Debug, Clone)]
pub struct StockBump {
    /// Product whose counter moved.
    pub product_name: String,
    /// Units added by this invoice.
    pub added: i32,
    /// Counter value after the bump.
    pub total: i32,
}
