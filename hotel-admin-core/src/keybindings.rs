//! Key string parsing and display
//!
//! Hosts declare their shortcuts as strings (`"ctrl+c"`, `"shift+tab"`,
//! `"esc"`) and compare incoming events against the parsed form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// Parse a key string like `"q"`, `"esc"`, `"ctrl+p"` or `"shift+tab"`
///
/// Returns `None` for empty or unknown key names.
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();

    if key_str.is_empty() {
        return None;
    }

    // shift+tab arrives from the terminal as BackTab
    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(KeyEvent {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        });
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let mut modifiers = KeyModifiers::empty();
    let key_part = parts.last()?.trim();

    for part in &parts[..parts.len() - 1] {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..].parse().ok()?;
            if !(1..=12).contains(&n) {
                return None;
            }
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Check whether an incoming key event matches a key string
///
/// Compares code and modifiers only, so press/repeat state and keypad
/// flags do not matter.
pub fn key_matches(key: &KeyEvent, key_str: &str) -> bool {
    parse_key_string(key_str)
        .is_some_and(|expected| expected.code == key.code && expected.modifiers == key.modifiers)
}

/// Format a key string for help bars (`"ctrl+c"` -> `"^C"`)
pub fn format_key_for_display(key_str: &str) -> String {
    let key_str = key_str.trim().to_lowercase();

    if key_str == "shift+tab" || key_str == "backtab" {
        return "Shift+Tab".to_string();
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let key_part = parts.last().copied().unwrap_or(key_str.as_str());
    let mut prefix = String::new();

    for part in &parts[..parts.len().saturating_sub(1)] {
        match part.trim() {
            "ctrl" | "control" => prefix.push('^'),
            "shift" => prefix.push_str("Shift+"),
            "alt" => prefix.push_str("Alt+"),
            _ => {}
        }
    }

    let key_display = match key_part {
        "esc" | "escape" => "Esc".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "tab" => "Tab".to_string(),
        "backspace" => "Backspace".to_string(),
        "up" => "Up".to_string(),
        "down" => "Down".to_string(),
        "left" => "Left".to_string(),
        "right" => "Right".to_string(),
        "delete" => "Del".to_string(),
        "space" => "Space".to_string(),
        f if f.len() > 1 && f.starts_with('f') && f[1..].parse::<u8>().is_ok() => {
            f.to_uppercase()
        }
        c if prefix.starts_with('^') => c.to_uppercase(),
        c => c.to_string(),
    };

    format!("{prefix}{key_display}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let result = parse_key_string("q").unwrap();
        assert_eq!(result.code, KeyCode::Char('q'));
        assert_eq!(result.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_parse_ctrl_key() {
        let result = parse_key_string("ctrl+c").unwrap();
        assert_eq!(result.code, KeyCode::Char('c'));
        assert!(result.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_parse_shift_tab() {
        let result = parse_key_string("shift+tab").unwrap();
        assert_eq!(result.code, KeyCode::BackTab);
        assert!(result.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
        assert!(parse_key_string("f13").is_none());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("nonsense").is_none());
    }

    #[test]
    fn test_key_matches() {
        let ctrl_c = parse_key_string("ctrl+c").unwrap();
        assert!(key_matches(&ctrl_c, "ctrl+c"));
        assert!(!key_matches(&ctrl_c, "c"));
    }

    #[test]
    fn test_format_for_display() {
        assert_eq!(format_key_for_display("ctrl+c"), "^C");
        assert_eq!(format_key_for_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_for_display("esc"), "Esc");
        assert_eq!(format_key_for_display("q"), "q");
        assert_eq!(format_key_for_display("f12"), "F12");
    }
}
