use dioxus::prelude::*;

use crate::booking::{submit_booking, BookingAction, BookingConfig, BookingState, SubTab, TopTab};
use crate::components::display::PlaceholderPanel;
use crate::components::forms::FlightSearchForm;
use crate::components::layout::{SubNav, TabBar};

#[cfg(feature = "web")]
use crate::components::forms::DATES_FIELD_ID;
#[cfg(feature = "web")]
use crate::console_warn;
#[cfg(feature = "web")]
use crate::services::dom::{event_targets_inside, DocumentListener};
#[cfg(feature = "web")]
use std::rc::Rc;

const FLIGHT_BOOKING_CSS: Asset = asset!("/assets/styling/flight_booking.css");

/// Body of a non-Book top-level tab.
fn top_tab_panel(tab: TopTab) -> Element {
    match tab.placeholder_copy() {
        Some(copy) => rsx! {
            div {
                class: "tab-panel",
                PlaceholderPanel { message: copy.to_string() }
            }
        },
        None => rsx! { div {} },
    }
}

/// Panel for the selected sub-navigation entry inside the Book tab.
fn sub_nav_panel(
    state: Signal<BookingState>,
    dispatch: EventHandler<BookingAction>,
    config: BookingConfig,
) -> Element {
    match state().sub_nav_tab.placeholder_copy() {
        None => rsx! {
            FlightSearchForm {
                state: state,
                dispatch: dispatch,
                config: config,
            }
        },
        Some(copy) => rsx! {
            div {
                class: "sub-nav-panel",
                PlaceholderPanel { message: copy.to_string() }
            }
        },
    }
}

/// The flight booking widget.
///
/// Owns the consolidated [`BookingState`] signal and hands components a
/// dispatch handler, so every interaction funnels through the reducer.
#[component]
pub fn FlightBooking() -> Element {
    let mut state = use_signal(BookingState::default);
    let config = use_hook(BookingConfig::default);

    let dispatch = EventHandler::new(move |action: BookingAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    // Dismiss the date popover when a pointer press lands outside the dates
    // field. The guard lives in the hook, so the document subscription ends
    // exactly when this component unmounts.
    #[cfg(feature = "web")]
    use_hook(move || {
        let attached = DocumentListener::attach("mousedown", move |event| {
            let popover_open = state.peek().date_picker.visible;
            if popover_open && !event_targets_inside(&event, DATES_FIELD_ID) {
                state.with_mut(|s| s.reduce_in_place(BookingAction::CloseDatePicker));
            }
        });
        Rc::new(match attached {
            Ok(listener) => Some(listener),
            Err(err) => {
                console_warn!("Outside-click dismissal unavailable: {}", err);
                None
            }
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FLIGHT_BOOKING_CSS }

        form {
            class: "booking-widget",
            onsubmit: move |event| {
                event.prevent_default();
                let errors = submit_booking(&state().values);
                dispatch.call(BookingAction::SetFieldErrors(errors));
            },

            TabBar {
                active: state().active_tab,
                on_select: move |tab: TopTab| dispatch.call(BookingAction::SelectTab(tab)),
            }

            if state().active_tab == TopTab::Book {
                SubNav {
                    active: state().sub_nav_tab,
                    cruise_url: config.cruise_url.clone(),
                    on_select: move |tab: SubTab| dispatch.call(BookingAction::SelectSubTab(tab)),
                }
                {sub_nav_panel(state, dispatch, config.clone())}
            } else {
                {top_tab_panel(state().active_tab)}
            }
        }
    }
}
