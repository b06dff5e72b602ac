//! Domain models for the farm-operations API.
//!
//! Models serialize in camelCase to match the wire format consumed by the
//! browser frontend. Input structs live beside the models they create;
//! route-level request/response wrappers live in `routes/`.

pub mod invoice;
pub mod medical_stock;
pub mod medicine_unit;
pub mod product;
