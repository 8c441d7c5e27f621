//! Crossterm-to-engine key event adapter.
//!
//! Translates a crossterm [`KeyEvent`] into the backend-neutral
//! [`KeyPress`] the dispatcher consumes. Logical key names follow the
//! conventions combo strings are written in: printable characters as-is,
//! named keys lower-cased ("enter", "esc", "space", "f5"), arrow keys as
//! "arrowup"/"arrowdown"/"arrowleft"/"arrowright". Crossterm reports no
//! physical key code, so `code` stays empty and the letter fallback in the
//! matcher simply never engages here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keymux_core::KeyPress;

/// Convert one crossterm key event. `editable_target` is the host's answer
/// to "was this press aimed at a text-entry surface?" — the adapter cannot
/// know that, only the app does.
pub fn key_press_from_event(key: &KeyEvent, editable_target: bool) -> KeyPress {
    let logical = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Up => "arrowup".to_string(),
        KeyCode::Down => "arrowdown".to_string(),
        KeyCode::Left => "arrowleft".to_string(),
        KeyCode::Right => "arrowright".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        // Media and other exotic keys: no name, matches nothing.
        _ => String::new(),
    };
    KeyPress {
        key: logical,
        code: String::new(),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        meta: key
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META | KeyModifiers::HYPER),
        editable_target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymux_core::matches_key_combo;

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_char_with_modifiers() {
        let press = key_press_from_event(
            &event(KeyCode::Char('a'), KeyModifiers::CONTROL),
            false,
        );
        assert_eq!(press.key, "a");
        assert!(press.ctrl);
        assert!(!press.shift && !press.alt && !press.meta);
        assert!(matches_key_combo(&press, "Ctrl+A"));
    }

    #[test]
    fn test_space_and_escape_names() {
        let space = key_press_from_event(&event(KeyCode::Char(' '), KeyModifiers::NONE), false);
        assert!(matches_key_combo(&space, "Space"));
        let esc = key_press_from_event(&event(KeyCode::Esc, KeyModifiers::NONE), false);
        assert!(matches_key_combo(&esc, "Escape"));
        assert!(matches_key_combo(&esc, "Esc"));
    }

    #[test]
    fn test_super_key_folds_into_meta() {
        let press = key_press_from_event(&event(KeyCode::Char('s'), KeyModifiers::SUPER), false);
        assert!(press.meta);
        // Platform unification: the command key satisfies a Ctrl combo.
        assert!(matches_key_combo(&press, "Ctrl+S"));
    }

    #[test]
    fn test_shifted_letter() {
        let press = key_press_from_event(&event(KeyCode::Char('Z'), KeyModifiers::SHIFT), false);
        assert_eq!(press.key, "Z");
        assert!(press.shift);
        assert!(matches_key_combo(&press, "Shift+Z"));
        assert!(!matches_key_combo(&press, "Z")); // bare combo needs a bare press
    }

    #[test]
    fn test_named_keys() {
        let down = key_press_from_event(&event(KeyCode::Down, KeyModifiers::NONE), false);
        assert!(matches_key_combo(&down, "ArrowDown"));
        let del = key_press_from_event(&event(KeyCode::Delete, KeyModifiers::NONE), false);
        assert!(matches_key_combo(&del, "Delete"));
        let f5 = key_press_from_event(&event(KeyCode::F(5), KeyModifiers::NONE), false);
        assert!(matches_key_combo(&f5, "F5"));
    }

    #[test]
    fn test_editable_flag_passthrough() {
        let press = key_press_from_event(&event(KeyCode::Char('j'), KeyModifiers::NONE), true);
        assert!(press.editable_target);
    }

    #[test]
    fn test_unknown_key_matches_nothing() {
        let press = key_press_from_event(&event(KeyCode::CapsLock, KeyModifiers::NONE), false);
        assert!(press.key.is_empty());
        assert!(!matches_key_combo(&press, "capslock"));
    }
}
