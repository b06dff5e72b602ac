//! Business logic services for the farm API.
//!
//! # Services
//!
//! - `invoices` - Invoice submission: validation gate + atomic persistence
//! - `availability` - Available-quantity resolution across both stock stores

pub mod availability;
pub mod invoices;

pub use availability::{AvailabilityService, ProductAvailability};
pub use invoices::{InvoiceService, InvoiceValidationError, SubmittedInvoice};
