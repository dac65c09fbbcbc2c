//! # Console Model
//!
//! Resource entities, drafts, and validation for the pizza console.
//!
//! The console manages three independent collections (pizza types,
//! toppings, and beverages), all through the same list/create/replace/
//! delete workflow. This crate defines:
//!
//! - **Resource**: the trait tying an entity to its backend collection
//! - **Drafts**: the dialog working copies with client-side validation
//! - **Entities**: wire types matching the billing backend's JSON shapes
//!

pub mod beverage;
pub mod pizza_type;
pub mod resource;
pub mod topping;

// Re-export commonly used items at crate root
pub use beverage::{Beverage, BeverageDraft};
pub use pizza_type::{PizzaType, PizzaTypeDraft};
pub use resource::{Resource, ResourceDraft};
pub use topping::{Topping, ToppingDraft};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
