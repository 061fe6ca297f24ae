//! Action traits for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions are what component callbacks produce: a click on a summary card,
/// a sign-out request, a new time value. They should be:
/// - Clone: Actions may be logged or sent to more than one handler
/// - Debug: For logging
/// - Send + 'static: The host loop moves them through a tokio channel
///
/// Use `#[derive(Action)]` from `hotel-admin-macros` to auto-implement this trait.
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

/// Category lookup for actions
///
/// Generated by `#[derive(Action)]` together with `#[action(infer_categories)]`.
/// A variant named `SettingsCheckInChange` lands in the `settings_check_in`
/// category. Names without a known verb stay uncategorized unless given an
/// explicit `#[action(category = "...")]`.
pub trait ActionCategory: Action {
    /// Category of this action, `None` when uncategorized
    fn category(&self) -> Option<&'static str>;
}

/// Short, log-friendly description of an action
///
/// Defaults to the `Debug` output. Override for actions that carry
/// large payloads.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
