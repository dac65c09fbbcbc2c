//! # Beverage Dialog Component
//!
//! Dialog for creating and editing beverages.

use dioxus::prelude::*;

use console_model::Beverage;

use crate::components::inputs::TextInput;
use crate::controller::{AlertKind, DialogMode, ScreenController};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct BeverageDialogProps {
    /// The beverages screen controller
    pub controller: Signal<ScreenController<Beverage>>,

    /// Callback when Save is pressed
    #[props(default)]
    pub on_save: EventHandler<()>,

    /// Callback when the dialog is cancelled
    #[props(default)]
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Beverage creation and editing dialog
#[component]
pub fn BeverageDialog(props: BeverageDialogProps) -> Element {
    let mut controller = props.controller;

    let ctrl = controller.read();
    if !ctrl.dialog_open() {
        return rsx! {};
    }
    let editing = ctrl.dialog() == DialogMode::Edit;
    let draft = ctrl.draft().clone();
    let alert = ctrl.alert().cloned();
    let saving = ctrl.is_saving();
    drop(ctrl);

    let title = if editing { "Edit Beverage" } else { "Add New Beverage" };
    let save_label = if editing { "Update Beverage" } else { "Add Beverage" };

    rsx! {
        div {
            class: "dialog-overlay",

            div {
                class: "dialog",

                h2 { class: "dialog-title", "{title}" }

                if let Some(alert) = &alert {
                    div {
                        class: if alert.kind == AlertKind::Validation {
                            "alert alert-validation"
                        } else {
                            "alert alert-error"
                        },
                        "{alert.message}"
                    }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        props.on_save.call(());
                    },

                    TextInput {
                        value: draft.beverage_id.clone(),
                        label: "Beverage ID",
                        required: true,
                        disabled: editing,
                        help_text: if editing { None } else { Some("Unique identifier, e.g. B1".to_string()) },
                        on_change: move |value: String| {
                            controller.write().draft_mut().beverage_id = value;
                        },
                    }

                    TextInput {
                        value: draft.name.clone(),
                        label: "Name",
                        required: true,
                        on_change: move |value: String| {
                            controller.write().draft_mut().name = value;
                        },
                    }

                    TextInput {
                        value: draft.price.clone(),
                        label: "Price",
                        input_type: "number",
                        required: true,
                        on_change: move |value: String| {
                            controller.write().draft_mut().price = value;
                        },
                    }

                    div {
                        class: "dialog-actions",

                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: saving,
                            onclick: move |_| props.on_cancel.call(()),
                            "Cancel"
                        }

                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: saving,
                            if saving { "Saving..." } else { "{save_label}" }
                        }
                    }
                }
            }
        }
    }
}
