//! # Confirm Delete Dialog Component
//!
//! Dialog for confirming destructive delete operations.
//!
//! Deletes are gated behind an explicit confirmation step that names the
//! identifier being removed. The decision flows back through the
//! `on_confirm`/`on_cancel` handlers, so the screens are testable without
//! a window-level prompt.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// The confirmation question, naming the identifier
    pub prompt: String,

    /// Callback when deletion is confirmed
    #[props(default)]
    pub on_confirm: EventHandler<()>,

    /// Callback when the dialog is cancelled
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",

            div {
                class: "dialog dialog-confirm",

                // Header with warning icon
                div {
                    class: "dialog-confirm-header",
                    span { class: "dialog-confirm-icon", "⚠️" }
                    h2 { class: "dialog-title dialog-title-danger", "Confirm Delete" }
                }

                p { class: "dialog-confirm-message", "{props.prompt}" }

                // Actions
                div {
                    class: "dialog-actions",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        onclick: move |_| props.on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
