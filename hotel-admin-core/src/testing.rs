//! Test utilities for components and hosts
//!
//! - [`key`], [`char_key`]: build `KeyEvent`s
//! - [`click`], [`mouse`]: build mouse `EventKind`s at a cell
//! - [`RenderHarness`]: render into a ratatui `TestBackend` and read the result
//! - [`TestHarness`]: state plus an action channel for host-level tests
//!
//! # Example
//!
//! ```ignore
//! use hotel_admin::testing::{click, RenderHarness};
//!
//! let mut render = RenderHarness::new(40, 3);
//! let mut header = HeaderBar::new();
//! render.render_to_string_plain(|frame| header.render(frame, frame.area(), props()));
//!
//! let (x, y) = render.find_text("Sign out").unwrap();
//! let actions: Vec<_> = header.handle_event(&click(x, y), props()).into_iter().collect();
//! assert_eq!(actions, vec![Action::SessionSignOut]);
//! ```

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};
use tokio::sync::mpsc;

use crate::event::EventKind;
use crate::keybindings::parse_key_string;
use crate::Action;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use hotel_admin_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("q");
/// assert_eq!(k.code, KeyCode::Char('q'));
///
/// let k = key("ctrl+c");
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a mouse `EventKind` of the given kind at a cell.
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Create a left button press at a cell: one discrete click.
pub fn click(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Convert a buffer to plain text, one line per row, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Renders components into an in-memory terminal.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render a frame and return the buffer contents as plain text.
    ///
    /// # Panics
    ///
    /// Panics if drawing to the test backend fails.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let completed = self
            .terminal
            .draw(render)
            .unwrap_or_else(|e| panic!("Failed to draw test frame: {e}"));
        buffer_to_string_plain(completed.buffer)
    }

    /// The buffer of the last rendered frame.
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Find the cell where `needle` starts in the last rendered frame.
    ///
    /// Returns `(column, row)`, scanning rows top to bottom.
    pub fn find_text(&self, needle: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        let area = buffer.area;
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            let mut columns = Vec::new();
            for x in area.left()..area.right() {
                let symbol = buffer[(x, y)].symbol();
                columns.extend(std::iter::repeat(x).take(symbol.len()));
                line.push_str(symbol);
            }
            if let Some(idx) = line.find(needle) {
                return Some((columns[idx], y));
            }
        }
        None
    }
}

/// Generic test harness for hosts.
///
/// Holds the state under test and an action channel. Feed the actions a
/// component returned into [`TestHarness::emit`], then drain them and run
/// them through the reducer.
///
/// # Example
///
/// ```ignore
/// let mut harness = TestHarness::<FrontDeskState, Action>::new(FrontDeskState::default());
/// for action in field.handle_event(&EventKind::Key(key("up")), props) {
///     harness.emit(action);
/// }
/// let changed = harness.dispatch_all(reducer);
/// ```
pub struct TestHarness<S, A: Action> {
    /// The application state under test
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    /// Create a new test harness with the given initial state.
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Emit an action (simulates what a handler would do).
    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Drain all emitted actions into `reducer`, in order.
    ///
    /// Returns `true` if any of them changed the state.
    pub fn dispatch_all(&mut self, reducer: crate::Reducer<S, A>) -> bool {
        let mut changed = false;
        for action in self.drain_emitted() {
            changed |= reducer(&mut self.state, action);
        }
        changed
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
