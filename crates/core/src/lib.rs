//! # Console Core
//!
//! Core types, errors, and configuration for the pizza console.
//!
//! This crate provides the foundational building blocks used throughout
//! the console, including:
//!
//! - **Types**: The pizza size enumeration and price helpers
//! - **Errors**: Unified error handling with `ConsoleError` and `ConsoleResult`
//! - **Config**: Backend base-URL configuration with file and override layers
//!

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{ApiConfig, ConsoleConfig, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE};
pub use error::{ConsoleError, ConsoleResult, ResultExt};
pub use types::{PizzaSize, format_price, parse_price};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
