//! Core traits and types for the hotel admin terminal UI kit
//!
//! The admin screens are built from small components that render from props
//! and report user input as actions, following a Redux/Elm-inspired
//! architecture.
//!
//! # Core Concepts
//!
//! - **Component**: Renders from props, turns events into actions
//! - **Action**: What a component's callback produced
//! - **Store**: State owned by the parent, changed only by a reducer
//! - **Event polling**: crossterm input forwarded over a tokio channel
//!
//! # Basic Example
//!
//! ```ignore
//! use hotel_admin::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! enum DeskAction {
//!     CheckInChange(String),
//!     SessionSignOut,
//! }
//!
//! #[derive(Default)]
//! struct DeskState {
//!     check_in: String,
//!     signed_out: bool,
//! }
//!
//! fn reducer(state: &mut DeskState, action: DeskAction) -> bool {
//!     match action {
//!         DeskAction::CheckInChange(value) => { state.check_in = value; true }
//!         DeskAction::SessionSignOut => { state.signed_out = true; true }
//!     }
//! }
//!
//! let mut store = Store::new(DeskState::default(), reducer, LoggingMiddleware::new());
//! store.dispatch(DeskAction::CheckInChange("15:00".into()));
//! ```

pub mod action;
pub mod bus;
pub mod component;
pub mod event;
pub mod keybindings;
pub mod store;
pub mod testing;

// Core trait exports
pub use action::{Action, ActionCategory, ActionSummary};
pub use component::Component;

// Event exports
pub use bus::{process_raw_event, spawn_event_poller, RawEvent};
pub use event::EventKind;

// Keybindings exports
pub use keybindings::{format_key_for_display, key_matches, parse_key_string};

// Store exports
pub use store::{LoggingMiddleware, Middleware, Reducer, Store};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

// Testing exports
pub use testing::{
    buffer_to_string_plain, char_key, click, key, mouse, RenderHarness, TestHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary};
    pub use crate::bus::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::component::Component;
    pub use crate::event::EventKind;
    pub use crate::keybindings::{format_key_for_display, key_matches, parse_key_string};
    pub use crate::store::{LoggingMiddleware, Middleware, Reducer, Store};

    // Re-export ratatui types
    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
