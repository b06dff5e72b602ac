//! Integration tests for Farmstead.
//!
//! # Running Tests
//!
//! ```bash
//! # Logical tests (no database needed)
//! cargo test -p farmstead-integration-tests
//!
//! # API tests (require a running server and database)
//! cargo run -p farmstead-cli -- migrate
//! cargo run -p farmstead-server &
//! cargo test -p farmstead-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `engine_reconciliation` - Unit ID generation and draft array reconciliation
//! - `stock_availability` - Availability resolution and expiration classification
//! - `invoice_validation` - Invoice submission validation
//! - `wire_contracts` - JSON field naming and shape guarantees
//! - `api_endpoints` - HTTP tests against a running server (ignored by default)
