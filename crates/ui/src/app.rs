//! Main Application Component for the pizza console
//!
//! This module contains the root Dioxus component. Outside the login
//! page, every screen renders inside the dashboard shell: a header bar,
//! the sidebar navigation, the content region for the active page, and a
//! status bar for operation outcomes.

use dioxus::prelude::*;

use console_client::ApiClient;

use crate::pages::{
    BeveragesScreen, DashboardPage, InvoicesPage, LoginPage, PizzaTypesScreen, ToppingsScreen,
};
use crate::state::{APP_STATE, Page, StatusLevel, use_current_page, use_status_message};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // One HTTP client for the whole app, built from the resolved config
    use_context_provider(|| ApiClient::new(&APP_STATE.read().config));

    use_effect(|| {
        tracing::info!("pizza console UI initialized");
    });

    let page = use_current_page();

    if !page.in_shell() {
        return rsx! {
            div {
                class: "app-container",
                LoginPage {}
            }
        };
    }

    rsx! {
        div {
            class: "app-container",

            // Top header bar
            Header {}

            // Main content area with sidebar
            div {
                class: "app-body",

                // Left sidebar (navigation)
                Sidebar {}

                // Content region hosting the active screen
                main {
                    class: "app-content",
                    MainContent { page }
                }
            }

            // Status bar
            StatusBar {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top header bar with title and backend info
#[component]
fn Header() -> Element {
    let state = APP_STATE.read();
    let base_url = state.config.base_url().to_string();
    drop(state);

    rsx! {
        header {
            class: "app-header",

            button {
                class: "app-header-title",
                onclick: move |_| APP_STATE.write().ui.navigate(Page::Dashboard),
                span { "🍕" }
                span { "Pizza Shop Billing" }
            }

            div {
                class: "app-header-right",
                span { class: "app-header-backend", "{base_url}" }
                button {
                    class: "btn btn-secondary btn-small",
                    onclick: move |_| APP_STATE.write().ui.navigate(Page::Login),
                    "Log out"
                }
            }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Sidebar navigation listing the resource screens
#[component]
fn Sidebar() -> Element {
    let active = APP_STATE.read().ui.active_page;

    rsx! {
        nav {
            class: "app-sidebar",

            ul {
                class: "sidebar-list",
                for page in Page::sidebar().iter().copied() {
                    li {
                        key: "{page.display_name()}",
                        button {
                            class: if page == active {
                                "sidebar-item sidebar-item-active"
                            } else {
                                "sidebar-item"
                            },
                            onclick: move |_| APP_STATE.write().ui.navigate(page),
                            span { class: "sidebar-icon", "{page.icon()}" }
                            span { "{page.display_name()}" }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Content region rendering the active page
#[component]
fn MainContent(page: Page) -> Element {
    match page {
        Page::Dashboard => rsx! { DashboardPage {} },
        Page::PizzaTypes => rsx! { PizzaTypesScreen {} },
        Page::Toppings => rsx! { ToppingsScreen {} },
        Page::Beverages => rsx! { BeveragesScreen {} },
        Page::Invoices => rsx! { InvoicesPage {} },
        Page::Login => rsx! { LoginPage {} },
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar showing the outcome of the last operation
#[component]
fn StatusBar() -> Element {
    let message = use_status_message();

    rsx! {
        footer {
            class: "app-statusbar",

            if let Some(message) = &message {
                span {
                    class: match message.level {
                        StatusLevel::Info => "status status-info",
                        StatusLevel::Success => "status status-success",
                        StatusLevel::Warning => "status status-warning",
                        StatusLevel::Error => "status status-error",
                    },
                    "{message.text}"
                }
                button {
                    class: "alert-dismiss",
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "✕"
                }
            } else {
                span { class: "status status-info", "Ready" }
            }
        }
    }
}
