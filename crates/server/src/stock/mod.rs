//! The stock engine: pure logic behind unit tracking and availability.
//!
//! Everything in this module is synchronous and side-effect free; the
//! database is someone else's problem (`db/`, orchestrated by `services/`).
//! Three pieces:
//!
//! 1. **Custom IDs** (`custom_id`) - derive a display identifier for each
//!    physical box from the product name and its position.
//! 2. **Draft reconciliation** (`reconcile`) - reshape a line item's unit
//!    draft collection when its quantity or product name changes.
//! 3. **Availability** (`availability`) - reconcile the per-unit ledger and
//!    the aggregate counter into one "how many can I use" answer, with an
//!    explicit fallback when the two disagree.
//!
//! Time-dependent classification (`ExpiryStatus::classify`) lives in
//! `farmstead-core` and always takes the reference date as a parameter, so
//! every function here is deterministic and testable without a clock.

mod availability;
mod custom_id;
mod reconcile;

pub use availability::{Availability, resolve_available, summarize_units};
pub use custom_id::custom_unit_id;
pub use reconcile::{reconcile_unit_drafts, relabel_unit_drafts};
