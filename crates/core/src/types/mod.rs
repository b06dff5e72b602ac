//! Core types for Farmstead.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod status;

pub use category::ProductCategory;
pub use id::*;
pub use status::*;
