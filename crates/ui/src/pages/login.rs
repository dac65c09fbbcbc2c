//! Login page
//!
//! Presentational only: the form performs no authentication and attaches
//! no credentials to any request. Submitting logs the attempt and enters
//! the console.

use dioxus::prelude::*;

use crate::components::inputs::TextInput;
use crate::state::{APP_STATE, Page};

/// Login page component
#[component]
pub fn LoginPage() -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_submit = move |_| {
        tracing::info!("login submitted (no authentication configured)");
        APP_STATE.write().ui.navigate(Page::Dashboard);
    };

    rsx! {
        div {
            class: "login-page",

            div {
                class: "login-card",

                h1 { class: "login-title", "LOG IN" }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        handle_submit(());
                    },

                    TextInput {
                        value: username.read().clone(),
                        placeholder: "username",
                        required: true,
                        on_change: move |value: String| username.set(value),
                    }

                    TextInput {
                        value: password.read().clone(),
                        placeholder: "password",
                        input_type: "password",
                        required: true,
                        on_change: move |value: String| password.set(value),
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        "Login"
                    }
                }
            }
        }
    }
}
