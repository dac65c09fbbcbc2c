//! Page Components for the pizza console
//!
//! This module contains all the page/view components of the application.
//!
//! ## Available Pages
//!
//! - **LoginPage**: Non-functional login form (no authentication)
//! - **DashboardPage**: Landing page with shortcuts to the screens
//! - **PizzaTypesScreen**: Pizza type CRUD with per-row topping lookups
//! - **ToppingsScreen**: Topping CRUD
//! - **BeveragesScreen**: Beverage CRUD
//! - **InvoicesPage**: Placeholder for the unimplemented invoices area
//!

pub mod beverages;
pub mod dashboard;
pub mod invoices;
pub mod login;
pub mod pizza_types;
pub mod toppings;

// Re-export page components for convenience
pub use beverages::BeveragesScreen;
pub use dashboard::DashboardPage;
pub use invoices::InvoicesPage;
pub use login::LoginPage;
pub use pizza_types::PizzaTypesScreen;
pub use toppings::ToppingsScreen;
