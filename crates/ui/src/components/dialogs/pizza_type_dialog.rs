//! # Pizza Type Dialog Component
//!
//! Dialog for creating and editing pizza types: identifier, name, size,
//! base price, and description. The size select always holds a valid
//! size, so only the identifier, name, and price are validated on Save.

use dioxus::prelude::*;

use console_core::PizzaSize;
use console_model::PizzaType;

use crate::components::inputs::{Select, SelectOption, TextArea, TextInput};
use crate::controller::{AlertKind, DialogMode, ScreenController};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct PizzaTypeDialogProps {
    /// The pizza types screen controller
    pub controller: Signal<ScreenController<PizzaType>>,

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

/// Pizza type creation and editing dialog
#[component]
pub fn PizzaTypeDialog(props: PizzaTypeDialogProps) -> Element {
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

    let title = if editing { "Edit Pizza" } else { "Add New Pizza" };
    let save_label = if editing { "Update Pizza" } else { "Add Pizza" };

    let size_options: Vec<SelectOption> = PizzaSize::all()
        .iter()
        .map(|size| SelectOption::new(size.display_name(), size.display_name()))
        .collect();

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
                        value: draft.pizza_type_id.clone(),
                        label: "Pizza ID",
                        required: true,
                        disabled: editing,
                        help_text: if editing { None } else { Some("Unique identifier, e.g. P1".to_string()) },
                        on_change: move |value: String| {
                            controller.write().draft_mut().pizza_type_id = value;
                        },
                    }

                    TextInput {
                        value: draft.name.clone(),
                        label: "Pizza Name",
                        required: true,
                        on_change: move |value: String| {
                            controller.write().draft_mut().name = value;
                        },
                    }

                    Select {
                        value: draft.size.display_name().to_string(),
                        options: size_options,
                        label: "Size",
                        on_change: move |value: String| {
                            if let Some(size) = PizzaSize::parse(&value) {
                                controller.write().draft_mut().size = size;
                            }
                        },
                    }

                    TextInput {
                        value: draft.base_price.clone(),
                        label: "Base Price",
                        input_type: "number",
                        required: true,
                        on_change: move |value: String| {
                            controller.write().draft_mut().base_price = value;
                        },
                    }

                    TextArea {
                        value: draft.description.clone(),
                        label: "Description",
                        rows: 3,
                        on_change: move |value: String| {
                            controller.write().draft_mut().description = value;
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
