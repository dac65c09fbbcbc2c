//! Application State Management for the pizza console
//!
//! This module provides centralized state management using Dioxus 0.7
//! Signals: the active page, the resolved configuration, and the status
//! bar message. Per-screen collection state lives in each screen's
//! [`crate::controller::ScreenController`], not here.

use std::sync::OnceLock;

use console_core::ConsoleConfig;
use dioxus::prelude::*;

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages/views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Login page (no authentication is performed)
    #[default]
    Login,
    /// Dashboard landing page
    Dashboard,
    /// Pizza types CRUD screen
    PizzaTypes,
    /// Toppings CRUD screen
    Toppings,
    /// Beverages CRUD screen
    Beverages,
    /// Invoices (referenced in navigation, not yet implemented)
    Invoices,
}

impl Page {
    /// Get the display name for this page
    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Login => "Log In",
            Page::Dashboard => "Dashboard",
            Page::PizzaTypes => "Pizza Types",
            Page::Toppings => "Toppings",
            Page::Beverages => "Beverages",
            Page::Invoices => "Invoice",
        }
    }

    /// Get the icon emoji for this page (for sidebar display)
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Login => "🔐",
            Page::Dashboard => "🏠",
            Page::PizzaTypes => "🍕",
            Page::Toppings => "🧀",
            Page::Beverages => "🥤",
            Page::Invoices => "🧾",
        }
    }

    /// Pages listed in the sidebar, in order
    pub fn sidebar() -> &'static [Page] {
        &[
            Page::PizzaTypes,
            Page::Toppings,
            Page::Beverages,
            Page::Invoices,
        ]
    }

    /// Check if this page is shown inside the dashboard shell
    pub fn in_shell(&self) -> bool {
        !matches!(self, Page::Login)
    }
}

// ============================================================================
// Status Messages
// ============================================================================

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (navigation, status bar)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Currently active page
    pub active_page: Page,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Resolved console configuration (backend base URL)
    pub config: ConsoleConfig,
    /// UI state
    pub ui: UiState,
}

impl AppState {
    /// Create new application state, picking up the startup configuration
    pub fn new() -> Self {
        Self {
            config: startup_config(),
            ui: UiState::new(),
        }
    }

    /// Window title, naming the backend the console points at
    pub fn window_title(&self) -> String {
        format!("Pizza Console - {}", self.config.base_url())
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Configuration resolved before the UI runtime starts. The global state
/// signal initializes lazily inside the runtime, so the config is handed
/// over through this cell rather than an early signal write.
static STARTUP_CONFIG: OnceLock<ConsoleConfig> = OnceLock::new();

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Record the resolved configuration for the UI
/// Call this once at app startup, before launching the UI
pub fn init_app_state(config: ConsoleConfig) {
    let _ = STARTUP_CONFIG.set(config);
}

/// The configuration recorded at startup, or defaults if none was set
fn startup_config() -> ConsoleConfig {
    STARTUP_CONFIG.get().cloned().unwrap_or_default()
}

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to access the current page
pub fn use_current_page() -> Page {
    let state = APP_STATE.read();
    state.ui.active_page
}

/// Hook to get the status bar message
pub fn use_status_message() -> Option<StatusMessage> {
    let state = APP_STATE.read();
    state.ui.status_message.clone()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_login() {
        let ui = UiState::new();
        assert_eq!(ui.active_page, Page::Login);
        assert!(!Page::Login.in_shell());
    }

    #[test]
    fn test_navigate() {
        let mut ui = UiState::new();
        ui.navigate(Page::Toppings);
        assert_eq!(ui.active_page, Page::Toppings);
        assert!(Page::Toppings.in_shell());
    }

    #[test]
    fn test_status_message() {
        let mut ui = UiState::new();
        assert!(ui.status_message.is_none());

        ui.set_status("Topping added successfully!", StatusLevel::Success);
        assert_eq!(
            ui.status_message.as_ref().map(|m| m.level),
            Some(StatusLevel::Success)
        );

        ui.clear_status();
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn test_sidebar_pages() {
        let sidebar = Page::sidebar();
        assert_eq!(sidebar.len(), 4);
        assert_eq!(sidebar[0], Page::PizzaTypes);
        assert_eq!(sidebar[3], Page::Invoices);
        assert!(sidebar.iter().all(|p| p.in_shell()));
    }

    #[test]
    fn test_window_title_names_backend() {
        let state = AppState::new();
        assert!(state.window_title().contains("http://localhost:8080"));
    }
}
