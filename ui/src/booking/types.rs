use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::date_range::DateRangeSelection;
use crate::booking::form_validation::{validate_booking, FieldErrors};
use crate::utils::calendar::{current_month_start, next_month, previous_month};

/// Cabin selected in the class dropdown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CabinClass {
    Economy,
    Business,
    #[serde(rename = "First Class")]
    FirstClass,
}

impl CabinClass {
    pub const ALL: [CabinClass; 3] = [
        CabinClass::Economy,
        CabinClass::Business,
        CabinClass::FirstClass,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::Business => "Business",
            CabinClass::FirstClass => "First Class",
        }
    }

    pub fn from_label(label: &str) -> Option<CabinClass> {
        CabinClass::ALL.iter().copied().find(|class| class.label() == label)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripType {
    #[serde(rename = "roundtrip")]
    Roundtrip,
    #[serde(rename = "one-way")]
    OneWay,
}

impl TripType {
    pub fn label(&self) -> &'static str {
        match self {
            TripType::Roundtrip => "Roundtrip",
            TripType::OneWay => "One-way",
        }
    }
}

/// Top-level navigation tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopTab {
    #[default]
    Book,
    FlightStatus,
    CheckIn,
    MyTrips,
}

impl TopTab {
    pub const ALL: [TopTab; 4] = [
        TopTab::Book,
        TopTab::FlightStatus,
        TopTab::CheckIn,
        TopTab::MyTrips,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TopTab::Book => "Book",
            TopTab::FlightStatus => "Flight status",
            TopTab::CheckIn => "Check-in",
            TopTab::MyTrips => "My trips",
        }
    }

    /// Static body copy for the tabs that are placeholders, `None` for the
    /// Book tab which hosts the real form.
    pub fn placeholder_copy(&self) -> Option<&'static str> {
        match self {
            TopTab::Book => None,
            TopTab::FlightStatus => Some("This is my flight status page content."),
            TopTab::CheckIn => Some("This is my check-in page content."),
            TopTab::MyTrips => Some("This is my trips page content."),
        }
    }
}

/// Product switcher inside the Book tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubTab {
    #[default]
    Flight,
    Packages,
    Hotel,
    Car,
    Cruise,
}

impl SubTab {
    /// Sub-tabs rendered as selectable buttons. Cruise is deliberately
    /// absent: it renders as an outbound link, so nothing in the interface
    /// ever selects it.
    pub const SELECTABLE: [SubTab; 4] = [
        SubTab::Flight,
        SubTab::Packages,
        SubTab::Hotel,
        SubTab::Car,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SubTab::Flight => "Flight",
            SubTab::Packages => "Packages",
            SubTab::Hotel => "Hotel",
            SubTab::Car => "Car",
            SubTab::Cruise => "Cruise",
        }
    }

    pub fn placeholder_copy(&self) -> Option<&'static str> {
        match self {
            SubTab::Flight => None,
            SubTab::Packages => Some("This is my packages page content."),
            SubTab::Hotel => Some("This is my hotel page content."),
            SubTab::Car => Some("This is my car page content."),
            SubTab::Cruise => Some("This is my cruise page content."),
        }
    }
}

/// Values the search form submits.
///
/// Serialized field names keep the shape downstream log consumers expect:
/// `tripType`, `miles` and `flexible` rather than the Rust field names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookingFormValues {
    pub from: String,
    pub to: String,
    /// Derived from the picker selection, never typed directly.
    pub dates: String,
    pub travelers: String,
    pub class: Option<CabinClass>,
    #[serde(rename = "tripType")]
    pub trip_type: TripType,
    #[serde(rename = "miles")]
    pub book_with_miles: bool,
    #[serde(rename = "flexible")]
    pub flexible_dates: bool,
}

impl Default for BookingFormValues {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            dates: String::new(),
            travelers: String::new(),
            class: Some(CabinClass::Economy),
            trip_type: TripType::Roundtrip,
            book_with_miles: false,
            flexible_dates: false,
        }
    }
}

/// Visibility and view state of the popover date-range picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePickerState {
    pub visible: bool,
    /// First day of the month the grid currently shows.
    pub visible_month: NaiveDate,
    pub selection: DateRangeSelection,
}

impl Default for DatePickerState {
    fn default() -> Self {
        Self {
            visible: false,
            visible_month: current_month_start(),
            selection: DateRangeSelection::default(),
        }
    }
}

/// Consolidated state for the booking widget.
///
/// Every interaction flows through [`BookingState::reduce_in_place`], so
/// the full behavior of the widget is testable without rendering anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingState {
    pub active_tab: TopTab,
    pub sub_nav_tab: SubTab,
    pub values: BookingFormValues,
    pub date_picker: DatePickerState,
    pub errors: FieldErrors,
}

/// One variant per discrete interface event the widget reacts to.
#[derive(Clone, Debug)]
pub enum BookingAction {
    SelectTab(TopTab),
    SelectSubTab(SubTab),
    SetFrom(String),
    SetTo(String),
    SetTravelers(String),
    SetCabinClass(CabinClass),
    SetTripType(TripType),
    ToggleBookWithMiles,
    ToggleFlexibleDates,
    ToggleDatePicker,
    CloseDatePicker,
    ShowPreviousMonth,
    ShowNextMonth,
    SelectDate(NaiveDate),
    SetFieldErrors(FieldErrors),
}

impl BookingState {
    /// Reduces the state based on an action.
    pub fn reduce_in_place(&mut self, action: BookingAction) {
        match action {
            BookingAction::SelectTab(tab) => {
                self.active_tab = tab;
            }
            BookingAction::SelectSubTab(tab) => {
                self.sub_nav_tab = tab;
            }
            BookingAction::SetFrom(from) => {
                self.values.from = from;
                self.revalidate_after_edit();
            }
            BookingAction::SetTo(to) => {
                self.values.to = to;
                self.revalidate_after_edit();
            }
            BookingAction::SetTravelers(travelers) => {
                self.values.travelers = travelers;
            }
            BookingAction::SetCabinClass(class) => {
                self.values.class = Some(class);
                self.revalidate_after_edit();
            }
            BookingAction::SetTripType(trip_type) => {
                self.values.trip_type = trip_type;
            }
            BookingAction::ToggleBookWithMiles => {
                self.values.book_with_miles = !self.values.book_with_miles;
            }
            BookingAction::ToggleFlexibleDates => {
                self.values.flexible_dates = !self.values.flexible_dates;
            }
            BookingAction::ToggleDatePicker => {
                self.date_picker.visible = !self.date_picker.visible;
            }
            BookingAction::CloseDatePicker => {
                self.date_picker.visible = false;
            }
            BookingAction::ShowPreviousMonth => {
                self.date_picker.visible_month = previous_month(self.date_picker.visible_month);
            }
            BookingAction::ShowNextMonth => {
                self.date_picker.visible_month = next_month(self.date_picker.visible_month);
            }
            BookingAction::SelectDate(day) => {
                self.date_picker.selection.select_day(day);
                // The dates text is only ever written here, derived from
                // the selection.
                self.values.dates = self
                    .date_picker
                    .selection
                    .display_label()
                    .unwrap_or_default();
                self.revalidate_after_edit();
            }
            BookingAction::SetFieldErrors(errors) => {
                self.errors = errors;
            }
        }
    }

    /// Re-runs the schema after an edit, but only once a submit attempt
    /// has surfaced errors. Repaired fields clear without another submit;
    /// untouched forms stay quiet.
    fn revalidate_after_edit(&mut self) {
        if !self.errors.is_empty() {
            self.errors = validate_booking(&self.values);
        }
    }
}
