//! Wire-format guarantees the frontend relies on.
//!
//! The browser client is not compiled against these types, so the JSON
//! shapes are contracts: camelCase field names, prices as decimal strings,
//! statuses as fixed tokens, and the unit status flattened alongside the
//! unit's own fields. A rename that slips through here breaks the frontend
//! silently.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use farmstead_core::{
    AvailabilitySource, ExpiryStatus, InvoiceId, InvoiceLineItemId, MedicineUnitId, ProductCategory,
    ProductId,
};
use farmstead_server::models::invoice::{Invoice, InvoiceLineItem, InvoiceLineItemWithProduct};
use farmstead_server::models::medicine_unit::{MedicineUnit, MedicineUnitWithStatus, UnitSummary};

fn sample_unit() -> MedicineUnit {
    let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    MedicineUnit {
        id: MedicineUnitId::new(7),
        product_id: ProductId::new(1),
        invoice_id: InvoiceId::new(2),
        custom_id: "Amoxicilli-001".to_string(),
        expiration_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        first_usage_date: None,
        is_used: false,
        is_expired: false,
        good_for: Some("Respiratory infections".to_string()),
        usage_description: None,
        created_at: created,
        updated_at: created,
    }
}

// =============================================================================
// Unit Shapes
// =============================================================================

#[test]
fn test_unit_serializes_camel_case() {
    let value = serde_json::to_value(sample_unit()).expect("serializes");

    assert_eq!(value["customId"], "Amoxicilli-001");
    assert_eq!(value["expirationDate"], "2026-09-30");
    assert_eq!(value["isUsed"], false);
    assert_eq!(value["productId"], 1);
    // snake_case must not leak
    assert!(value.get("custom_id").is_none());
    assert!(value.get("expiration_date").is_none());
}

#[test]
fn test_unit_status_flattens_into_the_unit() {
    let with_status = MedicineUnitWithStatus {
        unit: sample_unit(),
        status: ExpiryStatus::ExpiringSoon,
    };

    let value = serde_json::to_value(with_status).expect("serializes");

    // One flat object: the unit's fields and the status side by side
    assert_eq!(value["customId"], "Amoxicilli-001");
    assert_eq!(value["status"], "expiring_soon");
    assert!(value.get("unit").is_none());
}

#[test]
fn test_status_tokens_are_stable() {
    assert_eq!(
        serde_json::to_value(ExpiryStatus::Expired).unwrap(),
        json!("expired")
    );
    assert_eq!(
        serde_json::to_value(ExpiryStatus::ExpiringSoon).unwrap(),
        json!("expiring_soon")
    );
    assert_eq!(
        serde_json::to_value(ExpiryStatus::Good).unwrap(),
        json!("good")
    );
}

#[test]
fn test_availability_source_tokens_are_stable() {
    assert_eq!(
        serde_json::to_value(AvailabilitySource::Units).unwrap(),
        json!("units")
    );
    assert_eq!(
        serde_json::to_value(AvailabilitySource::Aggregate).unwrap(),
        json!("aggregate")
    );
    assert_eq!(
        serde_json::to_value(AvailabilitySource::AggregateFallback).unwrap(),
        json!("aggregateFallback")
    );
}

#[test]
fn test_summary_serializes_camel_case() {
    let summary = UnitSummary {
        total: 5,
        available: 3,
        used: 2,
        expired: 1,
        expiring_soon: 1,
    };

    let value = serde_json::to_value(summary).expect("serializes");
    assert_eq!(value["expiringSoon"], 1);
    assert_eq!(value["total"], 5);
}

// =============================================================================
// Invoice Shapes
// =============================================================================

#[test]
fn test_line_item_price_travels_as_string() {
    let line_item = InvoiceLineItem {
        id: InvoiceLineItemId::new(4),
        invoice_id: InvoiceId::new(2),
        product_id: ProductId::new(1),
        quantity: 3,
        unit_price: Decimal::new(1250, 2),
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
    };

    let value = serde_json::to_value(line_item).expect("serializes");

    // Decimal as a string, never a float
    assert_eq!(value["unitPrice"], json!("12.50"));
}

#[test]
fn test_line_item_with_product_flattens() {
    let with_product = InvoiceLineItemWithProduct {
        line_item: InvoiceLineItem {
            id: InvoiceLineItemId::new(4),
            invoice_id: InvoiceId::new(2),
            product_id: ProductId::new(1),
            quantity: 3,
            unit_price: Decimal::new(1250, 2),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        },
        product_name: "Amoxicillin 250mg".to_string(),
        category: ProductCategory::AnimalMedicine,
    };

    let value = serde_json::to_value(with_product).expect("serializes");

    assert_eq!(value["productName"], "Amoxicillin 250mg");
    assert_eq!(value["category"], "animal_medicine");
    assert_eq!(value["quantity"], 3);
    assert!(value.get("line_item").is_none());
}

#[test]
fn test_invoice_dates_are_plain_iso() {
    let invoice = Invoice {
        id: InvoiceId::new(2),
        supplier_name: "VetSupply Ltd".to_string(),
        invoice_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        notes: None,
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
    };

    let value = serde_json::to_value(invoice).expect("serializes");

    // The business date has no time component; timestamps do
    assert_eq!(value["invoiceDate"], "2026-03-01");
    assert_eq!(value["supplierName"], "VetSupply Ltd");
    let created = value["createdAt"].as_str().expect("timestamp string");
    assert!(created.starts_with("2026-03-01T09:00:00"));
}

// =============================================================================
// Inbound Defaults
// =============================================================================

#[test]
fn test_category_tokens_deserialize() {
    let categories: Vec<ProductCategory> = serde_json::from_value(json!([
        "animal_medicine",
        "animal_feed",
        "equipment",
        "general"
    ]))
    .expect("all tokens parse");

    assert_eq!(categories.len(), 4);
    assert!(matches!(categories[0], ProductCategory::AnimalMedicine));
}

#[test]
fn test_unknown_category_is_rejected() {
    let result: Result<ProductCategory, _> = serde_json::from_value(json!("vehicle"));
    assert!(result.is_err());
}

#[test]
fn test_id_round_trips_as_bare_number() {
    let value: Value = serde_json::to_value(ProductId::new(42)).expect("serializes");
    assert_eq!(value, json!(42));

    let back: ProductId = serde_json::from_value(json!(42)).expect("deserializes");
    assert_eq!(back, ProductId::new(42));
}
