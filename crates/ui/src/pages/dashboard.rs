//! Dashboard landing page
//!
//! Simple overview shown inside the shell after login, with shortcuts to
//! the three resource screens.

use dioxus::prelude::*;

use crate::state::{APP_STATE, Page};

/// Dashboard landing page component
#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        div {
            class: "screen",

            h2 { class: "screen-title", "Dashboard" }
            p {
                class: "dashboard-lead",
                "Manage the menu of the pizza shop: pizza types, toppings, and beverages."
            }

            div {
                class: "dashboard-cards",
                for page in [Page::PizzaTypes, Page::Toppings, Page::Beverages] {
                    button {
                        key: "{page.display_name()}",
                        class: "dashboard-card",
                        onclick: move |_| APP_STATE.write().ui.navigate(page),
                        span { class: "dashboard-card-icon", "{page.icon()}" }
                        span { class: "dashboard-card-label", "{page.display_name()}" }
                    }
                }
            }
        }
    }
}
