//! Integration tests for the invoice submission validation gate.
//!
//! Submission is all-or-nothing: one bad unit anywhere rejects the whole
//! invoice with a message naming the product and the unit's position. These
//! tests exercise whole-invoice shapes; the per-rule cases live with the
//! service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use farmstead_core::ProductCategory;
use farmstead_server::models::invoice::{CreateInvoiceInput, InvoiceProductInput};
use farmstead_server::models::medicine_unit::MedicineUnitDraft;
use farmstead_server::services::invoices::validate_submission;
use farmstead_server::stock::reconcile_unit_drafts;

fn filled_drafts(product: &str, quantity: usize, expiration: NaiveDate) -> Vec<MedicineUnitDraft> {
    let mut drafts = reconcile_unit_drafts(&[], quantity, product);
    for draft in &mut drafts {
        draft.expiration_date = Some(expiration);
    }
    drafts
}

fn line(
    name: &str,
    category: ProductCategory,
    quantity: i32,
    units: Vec<MedicineUnitDraft>,
) -> InvoiceProductInput {
    InvoiceProductInput {
        name: name.to_string(),
        category,
        quantity,
        price: Decimal::new(899, 2),
        units,
    }
}

fn invoice(products: Vec<InvoiceProductInput>) -> CreateInvoiceInput {
    CreateInvoiceInput {
        supplier_name: "VetSupply Ltd".to_string(),
        invoice_date: NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date"),
        notes: Some("March delivery".to_string()),
        products,
    }
}

fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 30).expect("valid date")
}

// =============================================================================
// Mixed-Category Invoices
// =============================================================================

#[test]
fn test_mixed_invoice_validates_and_keeps_line_order() {
    let input = invoice(vec![
        line(
            "Amoxicillin 250mg",
            ProductCategory::AnimalMedicine,
            2,
            filled_drafts("Amoxicillin 250mg", 2, expiry()),
        ),
        line("Calf Starter Feed", ProductCategory::AnimalFeed, 10, vec![]),
        line("Work Gloves", ProductCategory::General, 3, vec![]),
    ]);

    let submission = validate_submission(&input).expect("valid invoice");

    assert_eq!(submission.supplier_name, "VetSupply Ltd");
    assert_eq!(submission.lines.len(), 3);
    assert_eq!(submission.lines[0].units.len(), 2);
    assert_eq!(submission.lines[0].units[0].custom_id, "Amoxicilli-001");
    // Non-medicine lines carry no units
    assert!(submission.lines[1].units.is_empty());
    assert!(submission.lines[2].units.is_empty());
}

#[test]
fn test_only_medicine_lines_require_units() {
    // A feed line with a quantity but no drafts is fine
    let input = invoice(vec![line(
        "Layer Pellets",
        ProductCategory::AnimalFeed,
        25,
        vec![],
    )]);

    assert!(validate_submission(&input).is_ok());
}

#[test]
fn test_stray_drafts_on_untracked_lines_are_dropped() {
    // Switching a line's category away from medicine can leave drafts behind
    let input = invoice(vec![line(
        "Electric Fence Wire",
        ProductCategory::Equipment,
        1,
        filled_drafts("Electric Fence Wire", 3, expiry()),
    )]);

    let submission = validate_submission(&input).expect("valid invoice");
    assert!(submission.lines[0].units.is_empty());
}

// =============================================================================
// Rejection Messages
// =============================================================================

#[test]
fn test_rejection_names_product_and_unit_position() {
    let mut drafts = filled_drafts("Amoxicillin 250mg", 3, expiry());
    drafts[1].expiration_date = None;

    let input = invoice(vec![line(
        "Amoxicillin 250mg",
        ProductCategory::AnimalMedicine,
        3,
        drafts,
    )]);

    let err = validate_submission(&input).expect_err("missing expiration");
    let message = err.to_string();
    assert!(message.contains("Amoxicillin 250mg"));
    assert!(message.contains("unit 2"));
}

#[test]
fn test_rejection_in_later_line_still_sinks_the_invoice() {
    let mut bad_drafts = filled_drafts("Ivermectin Paste", 2, expiry());
    bad_drafts[0].custom_id = "  ".to_string();

    let input = invoice(vec![
        line(
            "Amoxicillin 250mg",
            ProductCategory::AnimalMedicine,
            1,
            filled_drafts("Amoxicillin 250mg", 1, expiry()),
        ),
        line(
            "Ivermectin Paste",
            ProductCategory::AnimalMedicine,
            2,
            bad_drafts,
        ),
    ]);

    let err = validate_submission(&input).expect_err("blank custom ID");
    assert!(err.to_string().contains("Ivermectin Paste"));
    assert!(err.to_string().contains("unit 1"));
}

#[test]
fn test_draft_count_must_match_quantity() {
    let input = invoice(vec![line(
        "Amoxicillin 250mg",
        ProductCategory::AnimalMedicine,
        3,
        filled_drafts("Amoxicillin 250mg", 2, expiry()),
    )]);

    let err = validate_submission(&input).expect_err("count mismatch");
    let message = err.to_string();
    assert!(message.contains("expected 3"));
    assert!(message.contains("got 2"));
}

// =============================================================================
// Wire-Default Interplay
// =============================================================================

#[test]
fn test_deserialized_input_passes_the_gate() {
    // The exact JSON a frontend submits, drafts built by the reducers there
    let payload = serde_json::json!({
        "supplierName": "VetSupply Ltd",
        "invoiceDate": "2026-03-01",
        "products": [
            {
                "name": "Amoxicillin 250mg",
                "category": "animal_medicine",
                "quantity": 1,
                "price": "8.99",
                "units": [
                    { "customId": "Amoxicilli-001", "expirationDate": "2026-09-30" }
                ]
            }
        ]
    });

    let input: CreateInvoiceInput =
        serde_json::from_value(payload).expect("wire shape deserializes");
    let submission = validate_submission(&input).expect("valid invoice");

    assert_eq!(submission.lines[0].units[0].custom_id, "Amoxicilli-001");
    // Draft keys are generated server-side when the wire omits them
    assert_ne!(input.products[0].units[0].draft_key, Uuid::nil());
}
