use dioxus::prelude::*;

use crate::booking::SubTab;

#[derive(Props, PartialEq, Clone)]
pub struct SubNavProps {
    pub active: SubTab,
    pub cruise_url: String,
    pub on_select: EventHandler<SubTab>,
}

/// Product switcher inside the Book tab.
///
/// Cruise is not a tab here: it renders as an outbound link styled like
/// one, so clicking it navigates instead of changing the selection.
#[component]
pub fn SubNav(props: SubNavProps) -> Element {
    let active = props.active;
    let on_select = props.on_select;

    rsx! {
        div {
            class: "sub-nav",
            for tab in SubTab::SELECTABLE {
                button {
                    r#type: "button",
                    class: if tab == active { "sub-nav-tab sub-nav-tab-active" } else { "sub-nav-tab" },
                    onclick: move |_| on_select.call(tab),
                    "{tab.label()}"
                }
            }
            a {
                class: "sub-nav-link",
                href: "{props.cruise_url}",
                target: "_blank",
                span { "Cruise" }
                span { class: "external-icon", "↗" }
            }
        }
    }
}
