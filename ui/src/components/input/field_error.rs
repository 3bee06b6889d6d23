use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

/// Inline validation message rendered under the offending control.
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "field-error",
                "{message}"
            }
        },
        None => rsx! { div {} },
    }
}
