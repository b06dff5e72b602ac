//! Database operations for the farm `PostgreSQL`.
//!
//! ## Tables
//!
//! - `products` - Purchasable products, unique by name
//! - `invoices` - Supplier invoices
//! - `invoice_line_items` - Quantity/price lines referencing products
//! - `medicine_units` - Per-box ledger for `animal_medicine` products
//! - `medical_stock` - Aggregate quantity counter, one row per product
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p farmstead-cli -- migrate
//! ```
//!
//! Queries use the runtime `sqlx` API with `FromRow` row structs; rows are
//! converted into the domain models from `models/`.

pub mod invoices;
pub mod medical_stock;
pub mod medicine_units;
pub mod products;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use invoices::InvoiceRepository;
pub use medical_stock::MedicalStockRepository;
pub use medicine_units::MedicineUnitRepository;
pub use products::ProductRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., missing product reference).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
