use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::booking::{
    BookingAction, BookingConfig, BookingField, BookingState, CabinClass, TripType,
};
use crate::components::date_picker::DateRangePicker;
use crate::components::forms::CabinClassSelect;
use crate::components::input::{FieldError, FieldInput};
use crate::utils::validation::dates_value_class;

/// DOM id of the dates field container, trigger and popover included. The
/// document mousedown listener treats anything inside it as an inside
/// click and leaves the popover alone.
pub const DATES_FIELD_ID: &str = "booking-dates-field";

#[derive(Props, PartialEq, Clone)]
pub struct FlightSearchFormProps {
    pub state: Signal<BookingState>,
    pub dispatch: EventHandler<BookingAction>,
    pub config: BookingConfig,
}

/// The flight search panel: trip options, route, dates with the popover
/// picker, travelers, cabin class and the footer actions.
#[component]
pub fn FlightSearchForm(props: FlightSearchFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = props.config;

    let values = state().values;
    let errors = state().errors;
    let picker = state().date_picker;

    let has_dates = !values.dates.is_empty();
    let dates_text = if has_dates {
        values.dates.clone()
    } else {
        config.dates_placeholder.clone()
    };

    rsx! {
        div {
            class: "search-options",
            label {
                class: "option-label",
                input {
                    r#type: "radio",
                    name: "trip-type",
                    value: "roundtrip",
                    checked: values.trip_type == TripType::Roundtrip,
                    onchange: move |_| dispatch.call(BookingAction::SetTripType(TripType::Roundtrip)),
                }
                span { "Roundtrip" }
            }
            label {
                class: "option-label",
                input {
                    r#type: "radio",
                    name: "trip-type",
                    value: "one-way",
                    checked: values.trip_type == TripType::OneWay,
                    onchange: move |_| dispatch.call(BookingAction::SetTripType(TripType::OneWay)),
                }
                span { "One-way" }
            }
            label {
                class: "option-label",
                input {
                    r#type: "checkbox",
                    name: "miles",
                    checked: values.book_with_miles,
                    onchange: move |_| dispatch.call(BookingAction::ToggleBookWithMiles),
                }
                span { "Book with miles" }
            }
            label {
                class: "option-label",
                input {
                    r#type: "checkbox",
                    name: "flexible",
                    checked: values.flexible_dates,
                    onchange: move |_| dispatch.call(BookingAction::ToggleFlexibleDates),
                }
                span { "Flexible dates" }
            }
        }

        div {
            class: "field-grid",
            FieldInput {
                label: "From".to_string(),
                required: true,
                value: values.from.clone(),
                placeholder: config.from_placeholder.clone(),
                error: errors.message(BookingField::From).map(String::from),
                on_change: move |from: String| dispatch.call(BookingAction::SetFrom(from)),
            }
            div {
                class: "swap-icon-cell",
                span { class: "swap-icon", "⇄" }
            }
            FieldInput {
                label: "To".to_string(),
                required: true,
                value: values.to.clone(),
                placeholder: config.to_placeholder.clone(),
                error: errors.message(BookingField::To).map(String::from),
                on_change: move |to: String| dispatch.call(BookingAction::SetTo(to)),
            }
        }

        div {
            class: "field-grid",
            div {
                class: "field-block",
                id: DATES_FIELD_ID,
                label {
                    class: "field-label",
                    "Dates"
                    span { class: "required-mark", "*" }
                }
                div {
                    class: "dates-trigger",
                    onclick: move |_| dispatch.call(BookingAction::ToggleDatePicker),
                    span {
                        class: dates_value_class(has_dates),
                        "{dates_text}"
                    }
                    span { class: "dates-icon", "📅" }
                }
                if picker.visible {
                    div {
                        class: "date-popover",
                        DateRangePicker {
                            selection: picker.selection,
                            month: picker.visible_month,
                            on_select_day: move |day: NaiveDate| dispatch.call(BookingAction::SelectDate(day)),
                            on_previous_month: move |_| dispatch.call(BookingAction::ShowPreviousMonth),
                            on_next_month: move |_| dispatch.call(BookingAction::ShowNextMonth),
                        }
                    }
                }
                FieldError { message: errors.message(BookingField::Dates).map(String::from) }
            }
            div { class: "swap-icon-cell" }
            FieldInput {
                label: "Travelers".to_string(),
                required: false,
                value: values.travelers.clone(),
                placeholder: config.travelers_placeholder.clone(),
                on_change: move |travelers: String| dispatch.call(BookingAction::SetTravelers(travelers)),
            }
        }

        div {
            class: "class-row",
            div {
                class: "field-block",
                label {
                    class: "field-label",
                    "Class"
                    span { class: "required-mark", "*" }
                }
                CabinClassSelect {
                    selected: values.class,
                    on_change: move |class: CabinClass| dispatch.call(BookingAction::SetCabinClass(class)),
                }
                FieldError { message: errors.message(BookingField::Class).map(String::from) }
            }
        }

        div {
            class: "form-footer",
            div {
                class: "footer-links",
                a {
                    class: "advanced-search-link",
                    href: "{config.advanced_search_url}",
                    "Advanced search"
                    span { class: "chevron", "›" }
                }
                p {
                    class: "footer-subtext",
                    "(Certificates, multi-city and upgrades)"
                }
                p {
                    class: "footer-fine-print",
                    a {
                        class: "inline-link",
                        href: "{config.bag_rules_url}",
                        "Changed bag rules"
                    }
                    " and "
                    a {
                        class: "inline-link",
                        href: "{config.optional_fees_url}",
                        "fees for optional services"
                    }
                }
            }
            div {
                class: "footer-actions",
                button {
                    r#type: "submit",
                    class: "submit-button",
                    "Find flights"
                }
                a {
                    class: "credits-link",
                    href: "{config.travel_credits_url}",
                    span { class: "credits-icon", "📄" }
                    "Find your travel credits"
                }
            }
        }
    }
}
