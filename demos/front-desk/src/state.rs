//! Application state - single source of truth
//!
//! Components receive slices of `AppState` as props. Only the reducer
//! mutates it.

/// Dashboard sections reachable from the summary cards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Rooms,
    Reservations,
    Housekeeping,
    Guests,
}

impl Section {
    /// Card order on the dashboard
    pub const ALL: [Section; 4] = [
        Section::Rooms,
        Section::Reservations,
        Section::Housekeeping,
        Section::Guests,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Rooms => "Rooms",
            Section::Reservations => "Reservations",
            Section::Housekeeping => "Housekeeping",
            Section::Guests => "Guests",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::Rooms => "Room inventory, rates and availability",
            Section::Reservations => "Upcoming arrivals, bookings and cancellations",
            Section::Housekeeping => "Cleaning schedule and room readiness",
            Section::Guests => "Guest profiles and stay history",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Rooms => "R",
            Section::Reservations => "B",
            Section::Housekeeping => "H",
            Section::Guests => "G",
        }
    }
}

/// Which control receives keyboard input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SignOut,
    Card(Section),
    CheckIn,
    CheckOut,
}

impl Focus {
    /// Tab order: header, cards, then the time fields
    const ORDER: [Focus; 7] = [
        Focus::SignOut,
        Focus::Card(Section::Rooms),
        Focus::Card(Section::Reservations),
        Focus::Card(Section::Housekeeping),
        Focus::Card(Section::Guests),
        Focus::CheckIn,
        Focus::CheckOut,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Time fields take text input, so single-letter shortcuts are off
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::CheckIn | Focus::CheckOut)
    }
}

/// Check for a 24-hour `HH:MM` value
pub fn is_valid_time(value: &str) -> bool {
    let Some((hour, minute)) = value.split_once(':') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hour) || !two_digits(minute) {
        return false;
    }
    matches!(
        (hour.parse::<u8>(), minute.parse::<u8>()),
        (Ok(h), Ok(m)) if h <= 23 && m <= 59
    )
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Property name shown in the status line
    pub hotel: String,

    /// Keyboard focus
    pub focus: Focus,

    /// Section opened from a summary card
    pub opened: Option<Section>,

    /// Standard check-in time, `HH:MM` or empty
    pub check_in: String,

    /// Standard check-out time, `HH:MM` or empty
    pub check_out: String,

    /// False after sign-out; settings become read-only
    pub signed_in: bool,

    /// Last status message
    pub status: Option<String>,
}

impl AppState {
    pub fn new(hotel: impl Into<String>, check_in: &str, check_out: &str) -> Self {
        Self {
            hotel: hotel.into(),
            focus: Focus::default(),
            opened: None,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            signed_in: true,
            status: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("Grand Budapest", "15:00", "11:00")
    }
}
