//! Actions produced by the dashboard components
//!
//! Prefix determines category: SettingsCheckInChange -> "settings_check_in",
//! SessionSignOut -> "session".

use crate::state::Section;
use hotel_admin::ActionSummary;

#[derive(hotel_admin::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Nav category =====
    /// A summary card was activated
    NavOpen(Section),

    // ===== Settings =====
    /// Check-in time field edited
    SettingsCheckInChange(String),

    /// Check-out time field edited
    SettingsCheckOutChange(String),

    // ===== Session =====
    /// Header sign-out control activated
    SessionSignOut,

    // ===== UI category =====
    UiFocusNext,

    UiFocusPrev,

    #[action(category = "ui")]
    UiTerminalResize(u16, u16),

    // ===== Uncategorized =====
    /// Exit the application
    Quit,
}

impl ActionSummary for Action {}
