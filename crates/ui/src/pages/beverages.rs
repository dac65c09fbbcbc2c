//! Beverages CRUD screen
//!
//! Structurally identical to the toppings screen: list on mount, dialog
//! for create/edit, confirmed delete, full refetch after every mutation.

use dioxus::prelude::*;

use console_client::ApiClient;
use console_core::format_price;
use console_model::Beverage;

use crate::components::dialogs::{BeverageDialog, ConfirmDeleteDialog};
use crate::controller::{AlertKind, SaveAction, ScreenController};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Data Loading
// ============================================================================

/// Fetch the beverage collection and replace the cached list
fn reload(client: ApiClient, mut controller: Signal<ScreenController<Beverage>>) {
    controller.write().begin_load();
    spawn(async move {
        let result = client.list::<Beverage>().await;
        controller.write().finish_load(result);
    });
}

// ============================================================================
// Main Component
// ============================================================================

/// Beverages management screen
#[component]
pub fn BeveragesScreen() -> Element {
    let client = use_context::<ApiClient>();
    let mut controller = use_signal(ScreenController::<Beverage>::new);

    // Fetch on mount
    use_effect({
        let client = client.clone();
        move || reload(client.clone(), controller)
    });

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
                        "Beverage added successfully!"
                    } else {
                        "Beverage updated successfully!"
                    };
                    APP_STATE.write().ui.set_status(message, StatusLevel::Success);
                    reload(client.clone(), controller);
                }
            });
        }
    };

    let on_confirm_delete = {
        let client = client.clone();
        move |_| {
            let Some(id) = controller.write().confirm_delete() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                let result = client.delete::<Beverage>(&id).await;
                if controller.write().finish_delete(result) {
                    APP_STATE.write().ui.set_status(
                        format!("Deleted beverage with ID: {}", id),
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

            div {
                class: "screen-header",
                h2 { class: "screen-title", "Beverages" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| controller.write().open_create(),
                    "Add New Beverage"
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

            if let Some(error) = &load_error {
                p { class: "load-error", "{error}" }
            } else if items.is_empty() {
                p { class: "empty-message", "No beverages available." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Beverage ID" }
                            th { "Name" }
                            th { "Price" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for beverage in items.iter() {
                            tr {
                                key: "{beverage.beverage_id}",
                                td { "{beverage.beverage_id}" }
                                td { "{beverage.name}" }
                                td { {format_price(beverage.price)} }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn-icon",
                                        title: "Edit",
                                        onclick: {
                                            let id = beverage.beverage_id.clone();
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
                                            let id = beverage.beverage_id.clone();
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

            if dialog_open {
                BeverageDialog {
                    controller,
                    on_save,
                    on_cancel: move |_| controller.write().cancel_dialog(),
                }
            }

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
