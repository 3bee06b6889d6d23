use dioxus::prelude::*;

use super::field_error::FieldError;
use crate::utils::validation::field_input_class;

#[derive(Props, PartialEq, Clone)]
pub struct FieldInputProps {
    pub label: String,
    pub required: bool,
    pub value: String,
    pub placeholder: String,
    pub error: Option<String>,
    pub on_change: EventHandler<String>,
}

/// Labeled text input with its inline error line underneath.
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let on_change = props.on_change;
    let input_class = field_input_class(props.error.as_deref());

    rsx! {
        div {
            class: "field-block",
            label {
                class: "field-label",
                "{props.label}"
                if props.required {
                    span { class: "required-mark", "*" }
                }
            }
            input {
                class: input_class,
                r#type: "text",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |event| on_change.call(event.value()),
            }
            FieldError { message: props.error }
        }
    }
}
