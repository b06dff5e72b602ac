//! Invoice submission service.
//!
//! Submission is a two-step pipeline: a pure validation gate turns the wire
//! input into an `InvoiceSubmission` (or rejects the whole thing with one
//! message naming the offending product and unit), then the repository
//! persists it in a single transaction. There is no partial commit: either
//! every unit enters the ledger or none do.

use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, instrument};

use crate::db::InvoiceRepository;
use crate::error::AppError;
use crate::models::invoice::{
    CreateInvoiceInput, Invoice, InvoiceSubmission, NewMedicineUnit, StockBump, SubmissionLine,
};

/// Why an invoice submission was rejected.
///
/// Messages are shown to the person filling in the form, so they name the
/// product and the 1-based unit position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceValidationError {
    #[error("supplier name must not be empty")]
    MissingSupplierName,

    #[error("product name must not be empty")]
    MissingProductName,

    #[error("product '{product}': quantity must be at least 1")]
    InvalidQuantity { product: String },

    #[error("product '{product}': price must not be negative")]
    NegativePrice { product: String },

    #[error("product '{product}': expected {expected} units, got {actual}")]
    UnitCountMismatch {
        product: String,
        expected: i32,
        actual: usize,
    },

    #[error("product '{product}', unit {ordinal}: custom ID must not be empty")]
    MissingCustomId { product: String, ordinal: usize },

    #[error("product '{product}', unit {ordinal}: expiration date is required")]
    MissingExpirationDate { product: String, ordinal: usize },
}

/// Result of a successful invoice submission.
#[derive(Debug)]
pub struct SubmittedInvoice {
    /// The created invoice.
    pub invoice: Invoice,
    /// Human-readable description of each aggregate-counter change.
    pub stock_updates: Vec<String>,
}

/// Service orchestrating invoice submission.
pub struct InvoiceService {
    pool: PgPool,
}

impl InvoiceService {
    /// Create a new invoice service.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Validate and persist an invoice submission.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the input fails the gate (nothing
    /// is persisted) and `AppError::Database` when persistence fails.
    #[instrument(skip(self, input), fields(supplier = %input.supplier_name))]
    pub async fn submit(&self, input: CreateInvoiceInput) -> Result<SubmittedInvoice, AppError> {
        let submission = validate_submission(&input)?;

        let repo = InvoiceRepository::new(&self.pool);
        let (invoice, bumps) = repo.create_with_line_items(&submission).await?;

        info!(
            invoice_id = %invoice.id,
            lines = submission.lines.len(),
            "Invoice recorded"
        );

        Ok(SubmittedInvoice {
            invoice,
            stock_updates: bumps.iter().map(format_stock_update).collect(),
        })
    }
}

/// Formats one aggregate-counter change for the submission response.
fn format_stock_update(bump: &StockBump) -> String {
    format!(
        "Added {} x {} to medical stock (now {})",
        bump.added, bump.product_name, bump.total
    )
}

/// The validation gate: checks everything before anything persists.
///
/// Rules, applied in order per product:
/// - supplier and product names must be non-empty;
/// - quantity at least 1, price not negative;
/// - for unit-tracked categories, exactly `quantity` unit drafts, each with
///   a non-empty custom ID and an expiration date.
///
/// Drafts on non-tracked categories are ignored. The first violation wins.
///
/// # Errors
///
/// Returns the violation naming the offending product and unit ordinal.
pub fn validate_submission(
    input: &CreateInvoiceInput,
) -> Result<InvoiceSubmission, InvoiceValidationError> {
    if input.supplier_name.trim().is_empty() {
        return Err(InvoiceValidationError::MissingSupplierName);
    }

    let mut lines = Vec::with_capacity(input.products.len());

    for product in &input.products {
        if product.name.trim().is_empty() {
            return Err(InvoiceValidationError::MissingProductName);
        }
        if product.quantity < 1 {
            return Err(InvoiceValidationError::InvalidQuantity {
                product: product.name.clone(),
            });
        }
        if product.price < Decimal::ZERO {
            return Err(InvoiceValidationError::NegativePrice {
                product: product.name.clone(),
            });
        }

        let mut units = Vec::new();
        if product.category.requires_unit_tracking() {
            let expected = usize::try_from(product.quantity).unwrap_or_default();
            if product.units.len() != expected {
                return Err(InvoiceValidationError::UnitCountMismatch {
                    product: product.name.clone(),
                    expected: product.quantity,
                    actual: product.units.len(),
                });
            }

            units.reserve(product.units.len());
            for (index, draft) in product.units.iter().enumerate() {
                let ordinal = index + 1;
                if draft.custom_id.trim().is_empty() {
                    return Err(InvoiceValidationError::MissingCustomId {
                        product: product.name.clone(),
                        ordinal,
                    });
                }
                let expiration_date = draft.expiration_date.ok_or_else(|| {
                    InvoiceValidationError::MissingExpirationDate {
                        product: product.name.clone(),
                        ordinal,
                    }
                })?;

                units.push(NewMedicineUnit {
                    custom_id: draft.custom_id.clone(),
                    expiration_date,
                    first_usage_date: draft.first_usage_date,
                    good_for: draft.good_for.clone(),
                    usage_description: draft.usage_description.clone(),
                });
            }
        }

        lines.push(SubmissionLine {
            product_name: product.name.clone(),
            category: product.category,
            quantity: product.quantity,
            unit_price: product.price,
            units,
        });
    }

    Ok(InvoiceSubmission {
        supplier_name: input.supplier_name.clone(),
        invoice_date: input.invoice_date,
        notes: input.notes.clone(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use farmstead_core::ProductCategory;

    use crate::models::invoice::InvoiceProductInput;
    use crate::models::medicine_unit::MedicineUnitDraft;

    use super::*;

    fn draft(custom_id: &str, expiration: Option<NaiveDate>) -> MedicineUnitDraft {
        MedicineUnitDraft {
            draft_key: Uuid::new_v4(),
            custom_id: custom_id.to_string(),
            expiration_date: expiration,
            first_usage_date: None,
            good_for: None,
            usage_description: None,
        }
    }

    fn medicine_line(name: &str, quantity: i32, units: Vec<MedicineUnitDraft>) -> InvoiceProductInput {
        InvoiceProductInput {
            name: name.to_string(),
            category: ProductCategory::AnimalMedicine,
            quantity,
            price: Decimal::new(1250, 2),
            units,
        }
    }

    fn input_with(products: Vec<InvoiceProductInput>) -> CreateInvoiceInput {
        CreateInvoiceInput {
            supplier_name: "VetSupply Ltd".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            notes: None,
            products,
        }
    }

    fn expiry() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2027, 3, 1)
    }

    #[test]
    fn test_valid_submission_passes() {
        let input = input_with(vec![medicine_line(
            "Amoxicillin 250mg",
            2,
            vec![draft("Amoxicilli-001", expiry()), draft("Amoxicilli-002", expiry())],
        )]);

        let submission = validate_submission(&input).unwrap();

        assert_eq!(submission.lines.len(), 1);
        assert_eq!(submission.lines[0].units.len(), 2);
        assert_eq!(submission.lines[0].units[0].custom_id, "Amoxicilli-001");
    }

    #[test]
    fn test_empty_supplier_rejected() {
        let mut input = input_with(vec![]);
        input.supplier_name = "   ".to_string();

        assert_eq!(
            validate_submission(&input),
            Err(InvoiceValidationError::MissingSupplierName)
        );
    }

    #[test]
    fn test_missing_expiration_names_product_and_ordinal() {
        let input = input_with(vec![medicine_line(
            "Amoxicillin 250mg",
            2,
            vec![draft("Amoxicilli-001", expiry()), draft("Amoxicilli-002", None)],
        )]);

        let err = validate_submission(&input).unwrap_err();

        assert_eq!(
            err,
            InvoiceValidationError::MissingExpirationDate {
                product: "Amoxicillin 250mg".to_string(),
                ordinal: 2,
            }
        );
        let message = err.to_string();
        assert!(message.contains("Amoxicillin 250mg"));
        assert!(message.contains("unit 2"));
    }

    #[test]
    fn test_blank_custom_id_rejected() {
        let input = input_with(vec![medicine_line(
            "Ivermectin",
            1,
            vec![draft("  ", expiry())],
        )]);

        assert!(matches!(
            validate_submission(&input),
            Err(InvoiceValidationError::MissingCustomId { ordinal: 1, .. })
        ));
    }

    #[test]
    fn test_unit_count_must_match_quantity() {
        let input = input_with(vec![medicine_line(
            "Ivermectin",
            3,
            vec![draft("Ivermectin-001", expiry())],
        )]);

        assert_eq!(
            validate_submission(&input),
            Err(InvoiceValidationError::UnitCountMismatch {
                product: "Ivermectin".to_string(),
                expected: 3,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let input = input_with(vec![medicine_line("Ivermectin", 0, vec![])]);

        assert!(matches!(
            validate_submission(&input),
            Err(InvoiceValidationError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut line = medicine_line("Ivermectin", 1, vec![draft("Ivermectin-001", expiry())]);
        line.price = Decimal::new(-1, 0);
        let input = input_with(vec![line]);

        assert!(matches!(
            validate_submission(&input),
            Err(InvoiceValidationError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_non_medicine_lines_skip_unit_checks() {
        let input = input_with(vec![InvoiceProductInput {
            name: "Hay bale".to_string(),
            category: ProductCategory::AnimalFeed,
            quantity: 40,
            price: Decimal::new(899, 2),
            units: vec![],
        }]);

        let submission = validate_submission(&input).unwrap();

        assert!(submission.lines[0].units.is_empty());
    }

    #[test]
    fn test_first_violation_wins_across_products() {
        let input = input_with(vec![
            medicine_line("Amoxicillin 250mg", 1, vec![draft("Amoxicilli-001", None)]),
            medicine_line("Ivermectin", 0, vec![]),
        ]);

        // The first product's missing date is reported, not the second's
        // quantity.
        assert!(matches!(
            validate_submission(&input),
            Err(InvoiceValidationError::MissingExpirationDate { .. })
        ));
    }
}
