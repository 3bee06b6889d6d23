use dioxus::prelude::*;

use crate::booking::CabinClass;

#[derive(Props, PartialEq, Clone)]
pub struct CabinClassSelectProps {
    pub selected: Option<CabinClass>,
    pub on_change: EventHandler<CabinClass>,
}

/// Dropdown over the cabin classes the search supports.
#[component]
pub fn CabinClassSelect(props: CabinClassSelectProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    let selected_label = selected.map(|class| class.label()).unwrap_or("");

    rsx! {
        select {
            class: "class-select",
            value: "{selected_label}",
            onchange: move |event| {
                if let Some(class) = CabinClass::from_label(&event.value()) {
                    on_change.call(class);
                }
            },
            for class in CabinClass::ALL {
                option {
                    value: "{class.label()}",
                    selected: Some(class) == selected,
                    "{class.label()}"
                }
            }
        }
    }
}
