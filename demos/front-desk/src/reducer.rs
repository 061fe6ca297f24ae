//! Reducer - pure function: (state, action) -> changed
//!
//! The time fields report every edit. The reducer decides whether to keep
//! it; values that are neither `HH:MM` nor empty are dropped, and the field
//! keeps showing the edit until the stored value next changes.

use crate::action::Action;
use crate::state::{is_valid_time, AppState, Focus};

fn apply_time(slot: &mut String, value: String, signed_in: bool) -> bool {
    if !signed_in || *slot == value {
        return false;
    }
    if !value.is_empty() && !is_valid_time(&value) {
        tracing::debug!(value = %value, "Rejected time value");
        return false;
    }
    *slot = value;
    true
}

/// The reducer handles all state transitions
///
/// # Returns
/// `true` if state changed and UI should re-render
pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::NavOpen(section) => {
            if !state.signed_in {
                return false;
            }
            state.opened = Some(section);
            state.focus = Focus::Card(section);
            state.status = Some(format!("Opened {}", section.title()));
            true
        }

        Action::SettingsCheckInChange(value) => {
            apply_time(&mut state.check_in, value, state.signed_in)
        }

        Action::SettingsCheckOutChange(value) => {
            apply_time(&mut state.check_out, value, state.signed_in)
        }

        Action::SessionSignOut => {
            if !state.signed_in {
                return false;
            }
            state.signed_in = false;
            state.opened = None;
            state.status = Some("Signed out".to_string());
            true
        }

        Action::UiFocusNext => {
            state.focus = state.focus.next();
            true
        }

        Action::UiFocusPrev => {
            state.focus = state.focus.prev();
            true
        }

        // Layout is recomputed from the frame area on every draw
        Action::UiTerminalResize(width, height) => {
            tracing::debug!(width, height, "Terminal resized");
            true
        }

        // Quit is handled in the main loop
        Action::Quit => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Section;

    #[test]
    fn test_open_section() {
        let mut state = AppState::default();

        let changed = reducer(&mut state, Action::NavOpen(Section::Housekeeping));

        assert!(changed);
        assert_eq!(state.opened, Some(Section::Housekeeping));
        assert_eq!(state.focus, Focus::Card(Section::Housekeeping));
        assert_eq!(state.status.as_deref(), Some("Opened Housekeeping"));
    }

    #[test]
    fn test_accepts_valid_time() {
        let mut state = AppState::default();

        assert!(reducer(
            &mut state,
            Action::SettingsCheckInChange("14:30".into())
        ));
        assert_eq!(state.check_in, "14:30");

        assert!(!reducer(
            &mut state,
            Action::SettingsCheckInChange("14:30".into())
        ));
    }

    #[test]
    fn test_accepts_cleared_time() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::SettingsCheckOutChange(String::new())));
        assert_eq!(state.check_out, "");
    }

    #[test]
    fn test_rejects_malformed_time() {
        let mut state = AppState::default();

        assert!(!reducer(
            &mut state,
            Action::SettingsCheckOutChange("25:00".into())
        ));
        assert_eq!(state.check_out, "11:00");
    }

    #[test]
    fn test_sign_out() {
        let mut state = AppState::default();
        state.opened = Some(Section::Rooms);

        assert!(reducer(&mut state, Action::SessionSignOut));
        assert!(!state.signed_in);
        assert_eq!(state.opened, None);

        // Second sign-out is a no-op
        assert!(!reducer(&mut state, Action::SessionSignOut));
    }

    #[test]
    fn test_signed_out_state_is_read_only() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SessionSignOut);

        assert!(!reducer(&mut state, Action::NavOpen(Section::Guests)));
        assert!(!reducer(
            &mut state,
            Action::SettingsCheckInChange("16:00".into())
        ));
        assert_eq!(state.check_in, "15:00");
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = AppState::default();

        reducer(&mut state, Action::UiFocusPrev);
        assert_eq!(state.focus, Focus::CheckOut);

        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.focus, Focus::SignOut);
    }

    #[test]
    fn test_terminal_resize_redraws() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::UiTerminalResize(100, 40)));
        assert_eq!(state.focus, Focus::SignOut);
    }

    #[test]
    fn test_action_categories() {
        assert!(Action::SessionSignOut.is_session());
        assert!(Action::UiFocusNext.is_ui());
        assert!(Action::UiTerminalResize(1, 1).is_ui());
        assert_eq!(
            Action::SettingsCheckInChange(String::new()).category(),
            Some("settings_check_in")
        );
        assert_eq!(Action::Quit.category(), None);
    }
}
