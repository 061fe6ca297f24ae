//! Event types delivered to components

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// The event payload handed to `Component::handle_event`
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Scroll event with position and delta
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// Key press, ignoring release and repeat events
    pub fn key_press(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) if key.kind == KeyEventKind::Press => Some(key),
            _ => None,
        }
    }

    /// `Enter` or `Space` without Ctrl/Alt: the keyboard form of a click
    pub fn is_activation_key(&self) -> bool {
        self.key_press().is_some_and(|key| {
            !key.modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                && matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
        })
    }

    /// Position of a left button press, if this is one
    ///
    /// Only the press counts. Release, drag and move events are part of the
    /// same gesture and must not activate anything a second time.
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            EventKind::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => Some((*column, *row)),
            _ => None,
        }
    }

    /// Check for a left button press inside `area`
    pub fn is_left_click_in(&self, area: Rect) -> bool {
        self.left_click()
            .is_some_and(|(column, row)| area.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{click, key, mouse};

    #[test]
    fn test_activation_keys() {
        assert!(EventKind::Key(key("enter")).is_activation_key());
        assert!(EventKind::Key(key("space")).is_activation_key());
        assert!(!EventKind::Key(key("ctrl+enter")).is_activation_key());
        assert!(!EventKind::Key(key("x")).is_activation_key());
    }

    #[test]
    fn test_key_release_is_not_a_press() {
        let mut release = key("enter");
        release.kind = KeyEventKind::Release;
        let event = EventKind::Key(release);
        assert!(event.key_press().is_none());
        assert!(!event.is_activation_key());
    }

    #[test]
    fn test_left_click_in_area() {
        let area = Rect::new(2, 2, 10, 3);
        assert!(click(2, 2).is_left_click_in(area));
        assert!(click(11, 4).is_left_click_in(area));
        assert!(!click(12, 4).is_left_click_in(area));
        assert!(!click(5, 5).is_left_click_in(area));
    }

    #[test]
    fn test_only_left_press_counts() {
        let area = Rect::new(0, 0, 10, 10);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 1, 1);
        let right = mouse(MouseEventKind::Down(MouseButton::Right), 1, 1);
        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1);
        assert!(!up.is_left_click_in(area));
        assert!(!right.is_left_click_in(area));
        assert!(!drag.is_left_click_in(area));
    }
}
