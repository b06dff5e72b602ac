//! Farmstead server library.
//!
//! This crate provides the farm-operations API as a library, allowing it to
//! be tested and reused. The binary in `main.rs` wires it to a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod stock;
