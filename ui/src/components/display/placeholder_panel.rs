use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct PlaceholderPanelProps {
    pub message: String,
}

/// Static body for areas of the widget that are not built out yet.
#[component]
pub fn PlaceholderPanel(props: PlaceholderPanelProps) -> Element {
    rsx! {
        div {
            class: "placeholder-panel",
            "{props.message}"
        }
    }
}
