//! # Console UI
//!
//! Dioxus Desktop UI for the pizza console.
//!
//! This crate provides the administrative interface for the pizza-shop
//! billing backend.
//!
//! ## Features
//!
//! - CRUD screens for pizza types, toppings, and beverages
//! - Per-pizza topping lookups resolved independently per row
//! - Dialog-based create/edit with client-side validation
//! - Delete confirmation naming the identifier being removed
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod controller;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use console_client;
pub use console_core;
pub use console_model;

// Re-export main components
pub use app::App;
pub use controller::{
    AlertKind, DialogMode, LoadState, SaveAction, ScreenAlert, ScreenController, ToppingBoard,
    ToppingCell,
};
pub use state::{
    APP_STATE, AppState, Page, StatusLevel, StatusMessage, UiState, init_app_state,
};

// Re-export components
pub use components::{
    BeverageDialog, ConfirmDeleteDialog, PizzaTypeDialog, Select, SelectOption, TextArea,
    TextInput, ToppingDialog,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Pizza Console";

/// Application display title
pub const TITLE: &str = "Pizza Console - Billing Administration";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the pizza console desktop application
///
/// This is the main entry point for the Dioxus desktop app. It stores
/// the resolved configuration in the global state and starts the UI.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     let config = console_core::ConsoleConfig::load_or_default().unwrap_or_default();
///     console_ui::launch(config);
/// }
/// ```
pub fn launch(config: console_core::ConsoleConfig) {
    tracing::info!(
        "Starting {} v{} against {}",
        NAME,
        VERSION,
        config.base_url()
    );

    // Store the resolved configuration before the first render
    init_app_state(config);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    // Configure and launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Pizza Console");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Pizza Console"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".data-table"));
    }
}
