use dioxus::prelude::*;

use crate::booking::TopTab;

#[derive(Props, PartialEq, Clone)]
pub struct TabBarProps {
    pub active: TopTab,
    pub on_select: EventHandler<TopTab>,
}

/// Top-level navigation across the widget's four areas.
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let active = props.active;
    let on_select = props.on_select;

    rsx! {
        div {
            class: "tab-bar",
            for tab in TopTab::ALL {
                button {
                    r#type: "button",
                    class: if tab == active { "tab-button tab-button-active" } else { "tab-button" },
                    onclick: move |_| on_select.call(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
