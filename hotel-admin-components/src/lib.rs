//! Components for hotel administration screens
//!
//! Each component implements `Component<A>` and reports user input through
//! callback functions passed in its Props.
//!
//! # Components
//!
//! - [`SummaryCard`] - Clickable tile with icon, title and description
//! - [`HeaderBar`] - Page title with a sign-out control
//! - [`TimeField`] - `HH:MM` input mirroring a parent-owned value
//!
//! # Example
//!
//! ```ignore
//! use hotel_admin_components::{TimeField, TimeFieldProps};
//!
//! // In your render function:
//! let props = TimeFieldProps::new("check-in", &state.check_in, Action::SettingsCheckInChange)
//!     .focused(state.focus == Focus::CheckIn);
//! check_in_field.render(frame, area, props);
//! ```

mod header_bar;
mod summary_card;
mod time_field;

pub use header_bar::{HeaderBar, HeaderBarProps, SIGN_OUT_LABEL, TITLE};
pub use summary_card::{SummaryCard, SummaryCardProps, DRILL_IN};
pub use time_field::{TimeField, TimeFieldProps, EMPTY_DISPLAY};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        HeaderBar, HeaderBarProps, SummaryCard, SummaryCardProps, TimeField, TimeFieldProps,
    };
}
