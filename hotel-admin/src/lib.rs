//! hotel-admin: terminal UI building blocks for hotel administration screens
//!
//! Components are functions of props. Everything a user does to them comes
//! back as an action for the parent to dispatch.
//!
//! # Example
//! ```ignore
//! use hotel_admin::prelude::*;
//!
//! #[derive(Action, Clone, Debug)]
//! #[action(infer_categories)]
//! enum DeskAction {
//!     NavOpen(Section),
//!     SessionSignOut,
//! }
//! ```

// Re-export everything from core
pub use hotel_admin_core::*;

// Re-export derive macros
pub use hotel_admin_macros::Action;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use hotel_admin_core::{Action, ActionCategory, ActionSummary, Component};

    // Events
    pub use hotel_admin_core::{process_raw_event, spawn_event_poller, EventKind, RawEvent};

    // Keybindings
    pub use hotel_admin_core::{format_key_for_display, key_matches, parse_key_string};

    // Store
    pub use hotel_admin_core::{LoggingMiddleware, Middleware, Reducer, Store};

    // Derive macros
    pub use hotel_admin_macros::Action;

    // Ratatui re-exports
    pub use hotel_admin_core::{Color, Frame, Line, Modifier, Rect, Span, Style, Text};
}
