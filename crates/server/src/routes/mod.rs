//! HTTP route handlers for the farm API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (DB ping)
//!
//! # Invoices
//! POST /invoices               - Submit an invoice (validates, persists units, bumps stock)
//! GET  /invoices               - List invoices
//! GET  /invoices/{id}          - One invoice with line items
//!
//! # Medicine units
//! GET    /medicine-units       - List units with derived status + summary
//!                                (?productId=&invoiceId=)
//! PATCH  /medicine-units       - Update one unit's usage/expiration flags
//! DELETE /medicine-units       - Delete one unit (?unitId=)
//!
//! # Medical stock
//! GET   /medical-stock         - List aggregate counters with product info
//! PATCH /medical-stock         - Increment/decrement one counter
//! POST  /medical-stock         - Seed a counter for a product lacking one
//!
//! # Availability
//! GET  /availability           - Resolved available quantity (?productId=)
//! ```

pub mod availability;
pub mod invoices;
pub mod medical_stock;
pub mod medicine_units;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the invoice routes router.
pub fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(invoices::submit).get(invoices::index))
        .route("/{id}", get(invoices::show))
}

/// Create the medicine unit routes router.
pub fn medicine_unit_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(medicine_units::index)
            .patch(medicine_units::update)
            .delete(medicine_units::remove),
    )
}

/// Create the medical stock routes router.
pub fn medical_stock_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(medical_stock::index)
            .patch(medical_stock::adjust)
            .post(medical_stock::seed),
    )
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/invoices", invoice_routes())
        .nest("/medicine-units", medicine_unit_routes())
        .nest("/medical-stock", medical_stock_routes())
        .route("/availability", get(availability::show))
}
