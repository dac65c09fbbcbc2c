//! # Input Components
//!
//! Reusable form input components for the console's dialogs.
//!
//! This module provides the inputs the resource dialogs need:
//! - **TextInput**: Single-line text input (also used for prices)
//! - **TextArea**: Multi-line text input (pizza descriptions)
//! - **Select**: Dropdown selection (pizza sizes)
//!
//! All components share the label / help-text / error layout so the
//! dialogs read uniformly.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, number, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = if props.error.is_some() {
        "field-input field-input-error"
    } else {
        "field-input"
    };

    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    "{label}"
                    if props.required {
                        span { class: "field-required", "*" }
                    }
                }
            }

            // Input
            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(props.value.clone());
                    }
                },
            }

            // Help text or error
            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "field-help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            // Label
            if let Some(label) = &props.label {
                label { class: "field-label", "{label}" }
            }

            // Textarea
            textarea {
                class: "field-input field-textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
                "{props.value}"
            }

            if let Some(help) = &props.help_text {
                p { class: "field-help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option in a Select
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Help text
    #[props(default)]
    pub help_text: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "field-label", "{label}" }
            }

            select {
                class: "field-input field-select",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                for option in props.options.iter() {
                    option {
                        value: "{option.value}",
                        selected: option.value == props.value,
                        "{option.label}"
                    }
                }
            }

            if let Some(help) = &props.help_text {
                p { class: "field-help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_new() {
        let option = SelectOption::new("Small", "Small");
        assert_eq!(option.value, "Small");
        assert_eq!(option.label, "Small");
    }
}
