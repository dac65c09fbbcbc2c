//! Toppings CRUD screen
//!
//! Fetches the topping collection on mount, renders it as a table, and
//! drives create/edit/delete through the screen controller. After any
//! successful mutation the whole collection is refetched; rows are never
//! patched in place.

use dioxus::prelude::*;

use console_client::ApiClient;
use console_core::format_price;
use console_model::Topping;

use crate::components::dialogs::{ConfirmDeleteDialog, ToppingDialog};
use crate::controller::{AlertKind, SaveAction, ScreenController};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Data Loading
// ============================================================================

/// Fetch the topping collection and replace the cached list
fn reload(client: ApiClient, mut controller: Signal<ScreenController<Topping>>) {
    controller.write().begin_load();
    spawn(async move {
        let result = client.list::<Topping>().await;
        controller.write().finish_load(result);
    });
}

// ============================================================================
// Main Component
// ============================================================================

/// Toppings management screen
#[component]
pub fn ToppingsScreen() -> Element {
    let client = use_context::<ApiClient>();
    let mut controller = use_signal(ScreenController::<Topping>::new);

    // Fetch on mount
    use_effect({
        let client = client.clone();
        move || reload(client.clone(), controller)
    });

    // Save (create or update), then refetch on success
    let on_save = {
        let client = client.clone();
        move |_| {
            let Some((epoch, action)) = controller.write().submit() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                let (result, created) = match &action {
                    SaveAction::Create(entity) => (client.create(entity).await, true),
                    SaveAction::Update { id, entity } => (client.update(id, entity).await, false),
                };
                if controller.write().finish_save(epoch, result) {
                    let message = if created {
                        "Topping added successfully!"
                    } else {
                        "Topping updated successfully!"
                    };
                    APP_STATE.write().ui.set_status(message, StatusLevel::Success);
                    reload(client.clone(), controller);
                }
            });
        }
    };

    // Confirmed delete, then refetch on success
    let on_confirm_delete = {
        let client = client.clone();
        move |_| {
            let Some(id) = controller.write().confirm_delete() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                let result = client.delete::<Topping>(&id).await;
                if controller.write().finish_delete(result) {
                    APP_STATE.write().ui.set_status(
                        format!("Deleted topping with ID: {}", id),
                        StatusLevel::Success,
                    );
                    reload(client.clone(), controller);
                }
            });
        }
    };

    let ctrl = controller.read();
    let items = ctrl.items().to_vec();
    let load_error = ctrl.load_error().map(str::to_string);
    let dialog_open = ctrl.dialog_open();
    let delete_prompt = ctrl.delete_prompt();
    // retryable delete failures surface as a banner above the table
    let screen_alert = if dialog_open {
        None
    } else {
        ctrl.alert()
            .filter(|a| a.kind == AlertKind::Retryable)
            .cloned()
    };
    drop(ctrl);

    rsx! {
        div {
            class: "screen",

            // Header
            div {
                class: "screen-header",
                h2 { class: "screen-title", "Toppings" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| controller.write().open_create(),
                    "Add New Topping"
                }
            }

            if let Some(alert) = &screen_alert {
                div {
                    class: "alert alert-error",
                    span { "{alert.message}" }
                    button {
                        class: "alert-dismiss",
                        onclick: move |_| controller.write().dismiss_alert(),
                        "✕"
                    }
                }
            }

            // Table / empty / error states
            if let Some(error) = &load_error {
                p { class: "load-error", "{error}" }
            } else if items.is_empty() {
                p { class: "empty-message", "No toppings available." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Topping ID" }
                            th { "Name" }
                            th { "Price" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for topping in items.iter() {
                            tr {
                                key: "{topping.topping_id}",
                                td { "{topping.topping_id}" }
                                td { "{topping.name}" }
                                td { {format_price(topping.price)} }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn-icon",
                                        title: "Edit",
                                        onclick: {
                                            let id = topping.topping_id.clone();
                                            move |_| {
                                                controller.write().open_edit(&id);
                                            }
                                        },
                                        "✏️"
                                    }
                                    button {
                                        class: "btn-icon btn-icon-danger",
                                        title: "Delete",
                                        onclick: {
                                            let id = topping.topping_id.clone();
                                            move |_| controller.write().request_delete(id.clone())
                                        },
                                        "🗑️"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Editor dialog
            if dialog_open {
                ToppingDialog {
                    controller,
                    on_save,
                    on_cancel: move |_| controller.write().cancel_dialog(),
                }
            }

            // Delete confirmation
            if let Some(prompt) = delete_prompt {
                ConfirmDeleteDialog {
                    prompt,
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| controller.write().cancel_delete(),
                }
            }
        }
    }
}
