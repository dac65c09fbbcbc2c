//! Pizza types CRUD screen
//!
//! On top of the shared list/dialog/delete workflow, this screen resolves
//! each pizza's topping names through one independent lookup per pizza
//! identifier. The lookups run without mutual ordering; each completion
//! writes only its own key on the topping board, and a row shows
//! "Loading..." until its lookup lands. A failed lookup yields an empty
//! topping list for that pizza alone and never blocks the table.

use dioxus::prelude::*;

use console_client::ApiClient;
use console_core::format_price;
use console_model::PizzaType;

use crate::components::dialogs::{ConfirmDeleteDialog, PizzaTypeDialog};
use crate::controller::{AlertKind, SaveAction, ScreenController, ToppingBoard};
use crate::state::{APP_STATE, StatusLevel};

// ============================================================================
// Data Loading
// ============================================================================

/// Fetch the pizza collection, then kick off one topping lookup per pizza
fn reload(
    client: ApiClient,
    mut controller: Signal<ScreenController<PizzaType>>,
    mut board: Signal<ToppingBoard>,
) {
    controller.write().begin_load();
    spawn(async move {
        let result = client.list::<PizzaType>().await;
        let ids: Vec<String> = match &result {
            Ok(items) => items.iter().map(|p| p.pizza_type_id.clone()).collect(),
            Err(_) => Vec::new(),
        };
        controller.write().finish_load(result);

        // Replace the board with pending cells for the current batch,
        // then resolve each id independently, in whatever order the
        // responses arrive.
        board.write().begin(ids.iter().cloned());
        for id in ids {
            let client = client.clone();
            spawn(async move {
                let names = match client.pizza_toppings(&id).await {
                    Ok(names) => names,
                    Err(e) => {
                        tracing::warn!("topping lookup for pizza '{}' failed: {}", id, e);
                        Vec::new()
                    }
                };
                board.write().resolve(&id, names);
            });
        }
    });
}

// ============================================================================
// Main Component
// ============================================================================

/// Pizza types management screen
#[component]
pub fn PizzaTypesScreen() -> Element {
    let client = use_context::<ApiClient>();
    let mut controller = use_signal(ScreenController::<PizzaType>::new);
    let mut board = use_signal(ToppingBoard::new);

    // Fetch on mount
    use_effect({
        let client = client.clone();
        move || reload(client.clone(), controller, board)
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
                        "Pizza added successfully!"
                    } else {
                        "Pizza updated successfully!"
                    };
                    APP_STATE.write().ui.set_status(message, StatusLevel::Success);
                    reload(client.clone(), controller, board);
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
                let result = client.delete::<PizzaType>(&id).await;
                if controller.write().finish_delete(result) {
                    APP_STATE.write().ui.set_status(
                        format!("Deleted pizza with ID: {}", id),
                        StatusLevel::Success,
                    );
                    reload(client.clone(), controller, board);
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

    let board_view = board.read().clone();

    rsx! {
        div {
            class: "screen",

            div {
                class: "screen-header",
                h2 { class: "screen-title", "Pizza Types" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| controller.write().open_create(),
                    "Add New Pizza"
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
                p { class: "empty-message", "No pizzas available." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Pizza ID" }
                            th { "Pizza Name" }
                            th { "Size" }
                            th { "Price" }
                            th { "Description" }
                            th { "Toppings" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for pizza in items.iter() {
                            tr {
                                key: "{pizza.pizza_type_id}",
                                td { "{pizza.pizza_type_id}" }
                                td { "{pizza.name}" }
                                td { "{pizza.size}" }
                                td { {format_price(pizza.base_price)} }
                                td { "{pizza.description}" }
                                td { {board_view.display(&pizza.pizza_type_id)} }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "btn-icon",
                                        title: "Edit",
                                        onclick: {
                                            let id = pizza.pizza_type_id.clone();
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
                                            let id = pizza.pizza_type_id.clone();
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
                PizzaTypeDialog {
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
