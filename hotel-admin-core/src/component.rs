//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI component that renders from props and emits actions
///
/// Components follow these rules:
/// 1. Props contain ALL read-only data needed for rendering, including the
///    callbacks that turn user input into actions
/// 2. `handle_event` returns actions, never mutates external state
/// 3. `render` is a function of props plus internal UI state
///
/// Internal UI state (the last rendered area for hit-testing, a mirrored
/// input value, the active segment of a time field) can live in `&mut self`.
/// Anything the rest of the application cares about must leave the component
/// as an action.
///
/// # Callbacks
///
/// A callback is a function pointer in the props that builds an action:
/// `on_activate: fn() -> A`, `on_change: fn(String) -> A`. "Invoking the
/// callback" means `handle_event` returns the action it built. Tuple variant
/// constructors such as `Action::CheckInChange` fit `fn(String) -> A`
/// directly, unit variants go through a non-capturing closure
/// (`|| Action::SessionSignOut`).
///
/// # Focus
///
/// Components receive the raw `EventKind`. Whether the component has
/// keyboard focus is decided by the parent and passed through props.
///
/// # Example
///
/// ```ignore
/// use hotel_admin::{Component, EventKind, Frame, Rect};
///
/// struct Occupancy;
///
/// struct OccupancyProps {
///     occupied: u32,
///     is_focused: bool,
/// }
///
/// impl Component<AppAction> for Occupancy {
///     type Props<'a> = OccupancyProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         if !props.is_focused {
///             return None;
///         }
///         if let EventKind::Key(key) = event {
///             if key.code == KeyCode::Char('r') {
///                 return Some(AppAction::OccupancyRefresh);
///             }
///         }
///         None
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = format!("Occupied rooms: {}", props.occupied);
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns any type implementing `IntoIterator<Item = A>`:
    /// - `None` - no actions (most common)
    /// - `Some(action)` - single action
    /// - `[a, b]` or `vec![...]` - multiple actions
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
