//! # Console Client
//!
//! HTTP collection client for the pizza billing backend.
//!
//! This crate provides typed access to the backend's resource collections
//! over HTTP:
//!
//! - **ApiClient**: list/create/update/delete for any [`console_model::Resource`],
//!   plus the per-pizza topping-name lookup
//! - **decode**: lenient, single-place boundary decoding of collection bodies
//!

pub mod client;
pub mod decode;

// Re-export commonly used items at crate root
pub use client::ApiClient;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
