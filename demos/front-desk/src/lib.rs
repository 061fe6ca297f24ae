//! Front desk: a hotel admin dashboard built from the hotel-admin components
//!
//! Split into a library so the render and reducer tests in `tests/` can
//! reach the state and UI types.

pub mod action;
pub mod reducer;
pub mod state;
pub mod ui;
