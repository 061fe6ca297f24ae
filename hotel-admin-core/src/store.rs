//! State container with reducer pattern
//!
//! The parent of the components owns the data they display. It keeps that
//! data in a store and changes it only by dispatching the actions the
//! components' callbacks produce.

use crate::Action;

/// A reducer function that handles actions and mutates state
///
/// Returns `true` if the state changed and a re-render is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Observes every dispatch, around the reducer call
pub trait Middleware<A: Action> {
    /// Called before the reducer sees `action`
    fn before(&mut self, _action: &A) {}

    /// Called once the reducer has run
    fn after(&mut self, action: &A, state_changed: bool);
}

/// State, the reducer that changes it, and a middleware watching both
///
/// # Example
/// ```ignore
/// fn reducer(state: &mut FrontDesk, action: DeskAction) -> bool {
///     match action {
///         DeskAction::CheckInChange(value) => {
///             state.check_in = value;
///             true
///         }
///     }
/// }
///
/// let mut store = Store::new(FrontDesk::default(), reducer, LoggingMiddleware::new());
/// store.dispatch(DeskAction::CheckInChange("15:00".into()));
/// assert_eq!(store.state().check_in, "15:00");
/// ```
pub struct Store<S, A: Action, M: Middleware<A>> {
    state: S,
    reducer: Reducer<S, A>,
    middleware: M,
}

impl<S, A: Action, M: Middleware<A>> Store<S, A, M> {
    pub fn new(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
        }
    }

    /// Run `action` through the middleware and the reducer
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        self.middleware.before(&action);
        let changed = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, changed);
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

/// Logs dispatched actions through `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware {
    /// Also log each action before the reducer runs
    verbose: bool,
}

impl LoggingMiddleware {
    /// Log each action after dispatch, with whether it changed state
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Log before and after dispatch
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.verbose {
            tracing::debug!(action = action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = action.name(), state_changed, "Action processed");
    }
}
