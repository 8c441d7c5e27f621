//! Key-combo parsing and matching.
//!
//! Combo strings are '+'-delimited, case-insensitive, with modifiers in any
//! order: "Ctrl+Shift+Z", "cmd+K", "Esc". Parsing is total — malformed input
//! degrades to a best-effort combo instead of failing, and validation is
//! deferred to match time.

use std::fmt;

use serde::Serialize;

use crate::event::KeyPress;

/// Parsed canonical form of a combo string: a normalized base key plus four
/// independent modifier flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct KeyCombo {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Parse a combo string into its canonical form. Never fails.
///
/// Recognized modifier tokens (case-insensitive): `ctrl`/`control`, `shift`,
/// `alt`, `cmd`/`meta`. Every other token is taken as the base key; when
/// several appear, the last one wins (long-standing quirk, kept as-is).
/// Modifier-only or empty input yields an empty base key, which matches no
/// press.
///
/// # Examples
/// - "Ctrl+Shift+Z" -> ctrl+shift, key "z"
/// - "shift + ctrl + z" -> same combo, order and spacing irrelevant
/// - "cmd+K" -> meta, key "k"
/// - "Escape" -> key "esc"
/// - "Ctrl+" -> ctrl, no base key
pub fn parse_key_combo(input: &str) -> KeyCombo {
    let mut combo = KeyCombo::default();
    for raw in input.split('+') {
        // A lone space token is the space bar, not padding.
        let token = if raw == " " { raw } else { raw.trim() };
        if token.is_empty() {
            continue;
        }
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => combo.ctrl = true,
            "shift" => combo.shift = true,
            "alt" => combo.alt = true,
            "cmd" | "meta" => combo.meta = true,
            _ => combo.key = normalize_key(token),
        }
    }
    combo
}

/// Test a key press against a combo string. Pure convenience wrapper around
/// [`parse_key_combo`] and [`KeyCombo::matches`].
pub fn matches_key_combo(press: &KeyPress, combo: &str) -> bool {
    parse_key_combo(combo).matches(press)
}

/// Normalize a logical key name: the literal space character becomes
/// "space", "escape" becomes "esc", everything else is lower-cased.
pub fn normalize_key(key: &str) -> String {
    if key == " " {
        return "space".to_string();
    }
    let lower = key.to_ascii_lowercase();
    if lower == "escape" {
        "esc".to_string()
    } else {
        lower
    }
}

impl KeyCombo {
    /// Exact-equality match against a press.
    ///
    /// Modifiers are compared exactly, never as subsets: a combo with no
    /// modifiers only matches an unmodified press, and Ctrl+Shift+A does not
    /// satisfy "Ctrl+A". The one unification is ctrl/meta: pressing either
    /// accelerator satisfies a combo requesting either, so "Ctrl+S" fires on
    /// Cmd+S for users on a Command-key platform.
    pub fn matches(&self, press: &KeyPress) -> bool {
        if self.key.is_empty() {
            return false;
        }
        if (self.ctrl || self.meta) != press.ctrl_or_meta() {
            return false;
        }
        if self.shift != press.shift || self.alt != press.alt {
            return false;
        }
        if normalize_key(&press.key) == self.key {
            return true;
        }
        // Letter fallback on the physical code, for layouts where the
        // logical key no longer names the engraved letter.
        code_letter(&press.code).map_or(false, |letter| {
            self.key.len() == 1 && self.key.as_bytes()[0] == letter as u8
        })
    }

    /// True when two combos would fire on the same presses, i.e. same base
    /// key, same shift/alt, and the same ctrl-or-meta accelerator state.
    pub fn conflicts_with(&self, other: &KeyCombo) -> bool {
        !self.key.is_empty()
            && self.key == other.key
            && (self.ctrl || self.meta) == (other.ctrl || other.meta)
            && self.shift == other.shift
            && self.alt == other.alt
    }
}

/// Extract the letter from a "KeyA"-style physical code, lower-cased.
fn code_letter(code: &str) -> Option<char> {
    let rest = code.strip_prefix("Key")?;
    let mut chars = rest.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_alphabetic() {
        return None;
    }
    Some(letter.to_ascii_lowercase())
}

impl fmt::Display for KeyCombo {
    /// Canonical human form: fixed Ctrl/Shift/Alt/Meta order, capitalized
    /// base key ("Ctrl+Shift+Z", "Space").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        if self.meta {
            f.write_str("Meta+")?;
        }
        let mut chars = self.key.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifiers_any_order() {
        let a = parse_key_combo("Ctrl+Shift+Z");
        let b = parse_key_combo("shift + ctrl + z");
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift);
        assert!(!a.alt && !a.meta);
        assert_eq!(a.key, "z");
    }

    #[test]
    fn test_parse_modifier_aliases() {
        assert!(parse_key_combo("control+x").ctrl);
        assert!(parse_key_combo("cmd+x").meta);
        assert!(parse_key_combo("meta+x").meta);
        assert!(parse_key_combo("alt+x").alt);
    }

    #[test]
    fn test_parse_last_base_token_wins() {
        // Two non-modifier tokens: the last one is the base key.
        let combo = parse_key_combo("Ctrl+A+B");
        assert_eq!(combo.key, "b");
        assert!(combo.ctrl);
    }

    #[test]
    fn test_parse_unknown_token_is_base_key() {
        let combo = parse_key_combo("Foo+X");
        assert_eq!(combo.key, "x");
        assert!(!combo.ctrl && !combo.shift && !combo.alt && !combo.meta);
    }

    #[test]
    fn test_parse_degenerate_inputs() {
        assert_eq!(parse_key_combo(""), KeyCombo::default());
        assert_eq!(parse_key_combo("+++"), KeyCombo::default());
        let only_mods = parse_key_combo("Ctrl+Shift");
        assert!(only_mods.key.is_empty());
        assert!(only_mods.ctrl && only_mods.shift);
    }

    #[test]
    fn test_parse_key_normalization() {
        assert_eq!(parse_key_combo("Escape").key, "esc");
        assert_eq!(parse_key_combo("Esc").key, "esc");
        assert_eq!(parse_key_combo("Space").key, "space");
        assert_eq!(parse_key_combo("Ctrl+ ").key, "space"); // literal space bar
        assert_eq!(parse_key_combo("F5").key, "f5");
    }

    #[test]
    fn test_matches_ctrl_meta_unification() {
        let ctrl_a = KeyPress::new("a").with_ctrl();
        let meta_a = KeyPress::new("a").with_meta();
        assert!(matches_key_combo(&ctrl_a, "Ctrl+A"));
        assert!(matches_key_combo(&meta_a, "Ctrl+A")); // either accelerator satisfies
        assert!(matches_key_combo(&ctrl_a, "Cmd+A"));
    }

    #[test]
    fn test_matches_exact_not_subset() {
        let ctrl_a = KeyPress::new("a").with_ctrl();
        assert!(!matches_key_combo(&ctrl_a, "Shift+A"));
        // Extra modifier on the press must not satisfy a narrower combo.
        let ctrl_shift_a = KeyPress::new("A").with_ctrl().with_shift();
        assert!(!matches_key_combo(&ctrl_shift_a, "Ctrl+A"));
        assert!(matches_key_combo(&ctrl_shift_a, "Ctrl+Shift+A"));
    }

    #[test]
    fn test_matches_requires_unmodified_press_for_bare_combo() {
        assert!(matches_key_combo(&KeyPress::new("a"), "A"));
        assert!(!matches_key_combo(&KeyPress::new("a").with_ctrl(), "A"));
        assert!(!matches_key_combo(&KeyPress::new("a").with_shift(), "A"));
    }

    #[test]
    fn test_matches_special_key_normalization() {
        assert!(matches_key_combo(&KeyPress::new(" "), "Space"));
        assert!(matches_key_combo(&KeyPress::new("Escape"), "Esc"));
        assert!(matches_key_combo(&KeyPress::new("esc"), "Escape"));
    }

    #[test]
    fn test_matches_physical_code_fallback() {
        // Remapped layout: logical key says "ф" but the physical key is A.
        let press = KeyPress::new("ф").with_code("KeyA").with_ctrl();
        assert!(matches_key_combo(&press, "Ctrl+A"));
        // Fallback is restricted to single-letter base keys.
        let press = KeyPress::new("ф").with_code("KeyA");
        assert!(!matches_key_combo(&press, "Enter"));
        // Non-letter codes never take the fallback path.
        let press = KeyPress::new("y").with_code("Digit5");
        assert!(!matches_key_combo(&press, "5"));
    }

    #[test]
    fn test_empty_base_key_matches_nothing() {
        let combo = parse_key_combo("Ctrl+");
        assert!(!combo.matches(&KeyPress::new("a").with_ctrl()));
        assert!(!combo.matches(&KeyPress::new("").with_ctrl()));
    }

    #[test]
    fn test_conflicts_with() {
        let ctrl_a = parse_key_combo("Ctrl+A");
        let cmd_a = parse_key_combo("Cmd+A");
        let shift_a = parse_key_combo("Shift+A");
        assert!(ctrl_a.conflicts_with(&cmd_a)); // fire on the same presses
        assert!(!ctrl_a.conflicts_with(&shift_a));
        assert!(!parse_key_combo("Ctrl+").conflicts_with(&parse_key_combo("Ctrl+")));
    }

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(parse_key_combo("shift+ctrl+z").to_string(), "Ctrl+Shift+Z");
        assert_eq!(parse_key_combo("cmd+k").to_string(), "Meta+K");
        assert_eq!(parse_key_combo("Space").to_string(), "Space");
        assert_eq!(parse_key_combo("escape").to_string(), "Esc");
        assert_eq!(parse_key_combo("f5").to_string(), "F5");
    }
}
