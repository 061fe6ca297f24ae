//! Time-of-day input that mirrors a parent-owned value
//!
//! The parent owns the value (`"HH:MM"`, 24-hour). The field keeps a local
//! copy so edits show up immediately, and reports every edit through
//! `on_change`. The local copy is overwritten only when the parent passes a
//! value different from the one it passed last time, so a parent that
//! ignores an edit leaves it on screen until it next changes the value.

use crossterm::event::{KeyCode, KeyModifiers};
use hotel_admin_core::{Component, EventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Shown in place of an empty value
pub const EMPTY_DISPLAY: &str = "--:--";

/// Props for TimeField component
pub struct TimeFieldProps<'a, A> {
    /// Identifier associating the field with its label and log output
    pub id: &'a str,
    /// Current value owned by the parent, `"HH:MM"` or empty
    pub value: &'a str,
    /// Whether this field has keyboard focus
    pub is_focused: bool,
    /// Disabled fields accept no edits and emit nothing
    pub disabled: bool,
    /// Callback with the edited text
    pub on_change: fn(String) -> A,
}

impl<'a, A> TimeFieldProps<'a, A> {
    /// Props for an enabled, unfocused field
    pub fn new(id: &'a str, value: &'a str, on_change: fn(String) -> A) -> Self {
        Self {
            id,
            value,
            is_focused: false,
            disabled: false,
            on_change,
        }
    }

    pub fn focused(mut self, is_focused: bool) -> Self {
        self.is_focused = is_focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Segment {
    #[default]
    Hour,
    Minute,
}

impl Segment {
    fn max(self) -> u8 {
        match self {
            Segment::Hour => 23,
            Segment::Minute => 59,
        }
    }
}

/// Parse `"HH:MM"` into hour and minute
fn parse_time(value: &str) -> Option<(u8, u8)> {
    let (hour, minute) = value.split_once(':')?;
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hour) || !two_digits(minute) {
        return None;
    }
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

fn format_time(hour: u8, minute: u8) -> String {
    format!("{hour:02}:{minute:02}")
}

/// A two-segment `HH:MM` input
///
/// Keys while focused and enabled:
/// - `Up`/`Down` step the active segment with wrap-around
/// - digits type into the active segment, two digits per segment
/// - `Left`/`Right`/`:` pick the segment
/// - `Backspace`/`Delete` clear the value
///
/// A click on the hour or minute digits selects that segment.
#[derive(Debug, Default)]
pub struct TimeField {
    /// Displayed value
    mirror: String,
    /// External value seen on the previous sync
    last_external: Option<String>,
    segment: Segment,
    /// First digit typed into the active segment, waiting for a second
    pending: Option<u8>,
    /// Screen position of the first hour digit from the last render
    digits_origin: Option<(u16, u16)>,
}

impl TimeField {
    /// Width including border and padding
    pub const WIDTH: u16 = 9;
    pub const HEIGHT: u16 = 3;

    /// Create a new TimeField
    pub fn new() -> Self {
        Self::default()
    }

    /// The value currently displayed
    pub fn value(&self) -> &str {
        &self.mirror
    }

    /// Apply the parent's value if it differs from the previous one
    ///
    /// Returns `true` when the local copy was overwritten. Runs at the start
    /// of every `render` and `handle_event`, so a changed parent value always
    /// lands before the next local edit is processed.
    ///
    /// A parent that accepts an edit passes back the value already on
    /// screen. That is recorded but leaves the local copy and a half-typed
    /// segment alone.
    pub fn sync(&mut self, external: &str) -> bool {
        if self.last_external.as_deref() == Some(external) {
            return false;
        }
        self.last_external = Some(external.to_string());
        if self.mirror == external {
            return false;
        }
        self.mirror.clear();
        self.mirror.push_str(external);
        self.pending = None;
        true
    }

    /// Overwrite the local copy, then build the change action
    fn commit<A>(&mut self, id: &str, value: String, on_change: fn(String) -> A) -> Option<A> {
        tracing::debug!(field = id, value = %value, "Time field edited");
        self.mirror.clone_from(&value);
        Some(on_change(value))
    }

    fn step(&mut self, delta: i16) -> String {
        let (hour, minute) = parse_time(&self.mirror).unwrap_or((0, 0));
        self.pending = None;
        let wrap = |v: u8, max: u8| (v as i16 + delta).rem_euclid(max as i16 + 1) as u8;
        match self.segment {
            Segment::Hour => format_time(wrap(hour, 23), minute),
            Segment::Minute => format_time(hour, wrap(minute, 59)),
        }
    }

    fn type_digit(&mut self, digit: u8) -> String {
        let (hour, minute) = parse_time(&self.mirror).unwrap_or((0, 0));
        let segment = self.segment;
        let max = segment.max();

        let typed = match self.pending.take() {
            Some(first) => {
                self.segment = Segment::Minute;
                (first * 10 + digit).min(max)
            }
            // A digit that cannot start a two-digit value completes the segment
            None if digit > max / 10 => {
                self.segment = Segment::Minute;
                digit
            }
            None => {
                self.pending = Some(digit);
                digit
            }
        };

        match segment {
            Segment::Hour => format_time(typed, minute),
            Segment::Minute => format_time(hour, typed),
        }
    }

    fn select(&mut self, segment: Segment) {
        self.segment = segment;
        self.pending = None;
    }

    fn segment_at(&self, column: u16, row: u16) -> Option<Segment> {
        let (x, y) = self.digits_origin?;
        if row != y {
            return None;
        }
        match column.checked_sub(x)? {
            0 | 1 => Some(Segment::Hour),
            3 | 4 => Some(Segment::Minute),
            _ => None,
        }
    }
}

impl<A> Component<A> for TimeField {
    type Props<'a> = TimeFieldProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.sync(props.value);

        if props.disabled {
            return None;
        }

        if let Some((column, row)) = event.left_click() {
            if let Some(segment) = self.segment_at(column, row) {
                self.select(segment);
            }
            return None;
        }

        if !props.is_focused {
            return None;
        }

        let Some(key) = event.key_press() else {
            return None;
        };
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }

        let edited = match key.code {
            KeyCode::Up => self.step(1),
            KeyCode::Down => self.step(-1),
            KeyCode::Char(c) if c.is_ascii_digit() => self.type_digit(c as u8 - b'0'),
            KeyCode::Backspace | KeyCode::Delete => {
                self.pending = None;
                if self.mirror.is_empty() {
                    return None;
                }
                String::new()
            }
            KeyCode::Left => {
                self.select(Segment::Hour);
                return None;
            }
            KeyCode::Right | KeyCode::Char(':') => {
                self.select(Segment::Minute);
                return None;
            }
            _ => return None,
        };

        self.commit(props.id, edited, props.on_change)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.value);

        let active = props.is_focused && !props.disabled;
        let border = if props.disabled {
            Color::DarkGray
        } else if props.is_focused {
            Color::Cyan
        } else {
            Color::Gray
        };
        let text = if props.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let highlight = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let segment_style = |segment: Segment| {
            if active && self.segment == segment {
                highlight
            } else {
                text
            }
        };

        let line = match parse_time(&self.mirror) {
            Some((hour, minute)) => Line::from(vec![
                Span::styled(format!("{hour:02}"), segment_style(Segment::Hour)),
                Span::styled(":", text),
                Span::styled(format!("{minute:02}"), segment_style(Segment::Minute)),
            ]),
            None if self.mirror.is_empty() => Line::from(vec![
                Span::styled("--", segment_style(Segment::Hour)),
                Span::styled(":", text),
                Span::styled("--", segment_style(Segment::Minute)),
            ]),
            // Whatever the parent supplied, shown as-is
            None => Line::from(Span::styled(self.mirror.clone(), text)),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(1),
            ..inner
        };
        frame.render_widget(Paragraph::new(line), content);

        self.digits_origin = (content.width > 0 && content.height > 0)
            .then_some((content.x, content.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_admin_core::testing::{char_key, click, key, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        CheckIn(String),
    }

    fn props(value: &str) -> TimeFieldProps<'_, TestAction> {
        TimeFieldProps::new("check-in", value, TestAction::CheckIn).focused(true)
    }

    fn press(field: &mut TimeField, k: &str, value: &str) -> Vec<TestAction> {
        field
            .handle_event(&EventKind::Key(key(k)), props(value))
            .into_iter()
            .collect()
    }

    /// Press a key, store what the field reported and render it back
    fn press_and_accept(
        render: &mut RenderHarness,
        field: &mut TimeField,
        k: &str,
        value: &mut String,
    ) -> Vec<TestAction> {
        let actions = press(field, k, value.as_str());
        for action in &actions {
            let TestAction::CheckIn(reported) = action;
            value.clone_from(reported);
        }
        render_field(render, field, value.as_str());
        actions
    }

    fn disabled(value: &str) -> TimeFieldProps<'_, TestAction> {
        props(value).disabled(true)
    }

    fn render_field(render: &mut RenderHarness, field: &mut TimeField, value: &str) -> String {
        render.render_to_string_plain(|frame| {
            let area = Rect::new(0, 0, TimeField::WIDTH, TimeField::HEIGHT);
            field.render(frame, area, props(value));
        })
    }

    #[test]
    fn test_initial_value_displayed() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();

        let output = render_field(&mut render, &mut field, "09:00");

        assert!(output.contains("09:00"));
        assert_eq!(field.value(), "09:00");
    }

    #[test]
    fn test_edit_updates_display_and_emits_once() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();
        render_field(&mut render, &mut field, "11:14");

        assert!(press(&mut field, "right", "11:14").is_empty());
        let actions = press(&mut field, "up", "11:14");

        assert_eq!(actions, vec![TestAction::CheckIn("11:15".into())]);
        assert_eq!(field.value(), "11:15");
    }

    #[test]
    fn test_ignored_edit_stays_until_parent_changes_value() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();
        render_field(&mut render, &mut field, "09:00");

        let actions = press(&mut field, "up", "09:00");
        assert_eq!(actions, vec![TestAction::CheckIn("10:00".into())]);

        // Parent ignored the edit and passes the same value again
        let output = render_field(&mut render, &mut field, "09:00");
        assert!(output.contains("10:00"));

        // Parent supplies a new value: it wins over the local edit
        let output = render_field(&mut render, &mut field, "14:30");
        assert!(output.contains("14:30"));
        assert_eq!(field.value(), "14:30");
    }

    #[test]
    fn test_external_change_applies_before_next_edit() {
        let mut field = TimeField::new();
        field.sync("09:00");

        let actions = press(&mut field, "up", "14:30");

        assert_eq!(actions, vec![TestAction::CheckIn("15:30".into())]);
    }

    #[test]
    fn test_sync_only_on_change() {
        let mut field = TimeField::new();
        assert!(field.sync("09:00"));
        assert!(!field.sync("09:00"));
        assert!(field.sync("10:00"));
        assert!(field.sync("09:00"));
    }

    #[test]
    fn test_step_wraps() {
        let mut field = TimeField::new();
        assert_eq!(
            press(&mut field, "up", "23:59"),
            vec![TestAction::CheckIn("00:59".into())]
        );

        let mut field = TimeField::new();
        press(&mut field, "right", "00:00");
        assert_eq!(
            press(&mut field, "down", "00:00"),
            vec![TestAction::CheckIn("00:59".into())]
        );
    }

    #[test]
    fn test_step_from_empty_starts_at_midnight() {
        let mut field = TimeField::new();
        assert_eq!(
            press(&mut field, "up", ""),
            vec![TestAction::CheckIn("01:00".into())]
        );
    }

    #[test]
    fn test_typing_digits() {
        let mut field = TimeField::new();
        let mut actions = Vec::new();
        for c in ['1', '4', '3', '0'] {
            actions.extend(
                field.handle_event(&EventKind::Key(char_key(c)), props("09:00")),
            );
        }

        assert_eq!(
            actions,
            vec![
                TestAction::CheckIn("01:00".into()),
                TestAction::CheckIn("14:00".into()),
                TestAction::CheckIn("14:03".into()),
                TestAction::CheckIn("14:30".into()),
            ]
        );
        assert_eq!(field.value(), "14:30");
    }

    #[test]
    fn test_typing_digits_into_accepting_parent() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();
        let mut value = "09:00".to_string();
        render_field(&mut render, &mut field, &value);

        let mut reported = Vec::new();
        for k in ["1", "4", "3", "0"] {
            reported.extend(press_and_accept(&mut render, &mut field, k, &mut value));
        }

        assert_eq!(
            reported,
            vec![
                TestAction::CheckIn("01:00".into()),
                TestAction::CheckIn("14:00".into()),
                TestAction::CheckIn("14:03".into()),
                TestAction::CheckIn("14:30".into()),
            ]
        );
        assert_eq!(value, "14:30");
        assert_eq!(field.value(), "14:30");
    }

    #[test]
    fn test_stepping_into_accepting_parent() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();
        let mut value = "23:58".to_string();
        render_field(&mut render, &mut field, &value);

        press_and_accept(&mut render, &mut field, "right", &mut value);
        press_and_accept(&mut render, &mut field, "up", &mut value);
        assert_eq!(value, "23:59");
        press_and_accept(&mut render, &mut field, "up", &mut value);
        assert_eq!(value, "23:00");

        press_and_accept(&mut render, &mut field, "left", &mut value);
        press_and_accept(&mut render, &mut field, "up", &mut value);
        assert_eq!(value, "00:00");
        press_and_accept(&mut render, &mut field, "down", &mut value);
        press_and_accept(&mut render, &mut field, "down", &mut value);
        assert_eq!(value, "22:00");
        assert_eq!(field.value(), "22:00");
    }

    #[test]
    fn test_accepted_value_keeps_half_typed_segment() {
        let mut field = TimeField::new();
        field.sync("09:00");
        press(&mut field, "2", "09:00");

        // Parent echoes the edit back: nothing to overwrite
        assert!(!field.sync("02:00"));
        let actions = press(&mut field, "1", "02:00");

        assert_eq!(actions, vec![TestAction::CheckIn("21:00".into())]);
    }

    #[test]
    fn test_single_digit_hour_advances() {
        let mut field = TimeField::new();
        let first = press(&mut field, "7", "09:00");
        let second = press(&mut field, "6", "09:00");

        assert_eq!(first, vec![TestAction::CheckIn("07:00".into())]);
        assert_eq!(second, vec![TestAction::CheckIn("07:06".into())]);
    }

    #[test]
    fn test_two_digit_entry_clamps() {
        let mut field = TimeField::new();
        press(&mut field, "2", "09:00");
        let actions = press(&mut field, "9", "09:00");

        assert_eq!(actions, vec![TestAction::CheckIn("23:00".into())]);
    }

    #[test]
    fn test_clear() {
        let mut field = TimeField::new();
        assert_eq!(
            press(&mut field, "backspace", "09:00"),
            vec![TestAction::CheckIn(String::new())]
        );
        assert_eq!(field.value(), "");

        // Already empty: nothing to report
        assert!(press(&mut field, "delete", "09:00").is_empty());
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();

        render.render_to_string_plain(|frame| {
            field.render(frame, frame.area(), disabled("09:00"));
        });

        let mut actions = Vec::new();
        for k in ["up", "down", "1", "backspace", "enter"] {
            actions.extend(field.handle_event(&EventKind::Key(key(k)), disabled("09:00")));
        }
        actions.extend(field.handle_event(&click(2, 1), disabled("09:00")));

        assert!(actions.is_empty());
        assert_eq!(field.value(), "09:00");
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut field = TimeField::new();
        let actions: Vec<_> = field
            .handle_event(
                &EventKind::Key(key("up")),
                TimeFieldProps::new("check-in", "09:00", TestAction::CheckIn),
            )
            .into_iter()
            .collect();

        assert!(actions.is_empty());
        assert_eq!(field.value(), "09:00");
    }

    #[test]
    fn test_click_selects_segment_without_emitting() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();
        render_field(&mut render, &mut field, "09:00");

        let (x, y) = render.find_text("00").unwrap();
        let clicked: Vec<_> = field
            .handle_event(&click(x, y), props("09:00"))
            .into_iter()
            .collect();
        assert!(clicked.is_empty());

        let actions = press(&mut field, "up", "09:00");
        assert_eq!(actions, vec![TestAction::CheckIn("09:01".into())]);
    }

    #[test]
    fn test_render_empty_and_unparsed() {
        let mut render = RenderHarness::new(20, 3);
        let mut field = TimeField::new();

        let output = render_field(&mut render, &mut field, "");
        assert!(output.contains(EMPTY_DISPLAY));

        let output = render_field(&mut render, &mut field, "9:5");
        assert!(output.contains("9:5"));
    }

    #[test]
    fn test_modified_keys_ignored() {
        let mut field = TimeField::new();
        assert!(press(&mut field, "ctrl+up", "09:00").is_empty());
        assert!(press(&mut field, "alt+5", "09:00").is_empty());
        assert_eq!(field.value(), "09:00");
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:00"), Some((9, 0)));
        assert_eq!(parse_time("23:59"), Some((23, 59)));
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("9:00"), None);
        assert_eq!(parse_time("+1:00"), None);
        assert_eq!(parse_time(""), None);
    }
}
