//! Invoices placeholder page
//!
//! The sidebar links here, but invoice management is not implemented in
//! this console; the backend endpoints exist without a screen.

use dioxus::prelude::*;

/// Invoices placeholder component
#[component]
pub fn InvoicesPage() -> Element {
    rsx! {
        div {
            class: "screen",

            h2 { class: "screen-title", "Invoice" }
            p {
                class: "empty-message",
                "Invoice management is not available yet."
            }
        }
    }
}
