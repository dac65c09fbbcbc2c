//! # Dialog Components
//!
//! This module provides the modal dialogs for the console:
//!
//! - **PizzaTypeDialog**: Create and edit pizza types
//! - **ToppingDialog**: Create and edit toppings
//! - **BeverageDialog**: Create and edit beverages
//! - **ConfirmDeleteDialog**: Confirmation for destructive deletes,
//!   naming the identifier being removed
//!
//! Each editor dialog works directly on its screen controller's draft;
//! the Save/Cancel decisions flow back to the screen through event
//! handlers so the surrounding workflow stays testable.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod beverage_dialog;
pub mod confirm_delete;
pub mod pizza_type_dialog;
pub mod topping_dialog;

// ============================================================================
// Re-exports
// ============================================================================

pub use beverage_dialog::BeverageDialog;
pub use confirm_delete::ConfirmDeleteDialog;
pub use pizza_type_dialog::PizzaTypeDialog;
pub use topping_dialog::ToppingDialog;
