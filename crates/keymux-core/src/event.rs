//! Backend-neutral key-press event model.
//!
//! The engine never talks to a terminal or window system directly; hosts
//! translate their native key events into [`KeyPress`] values (see the
//! crossterm adapter in keymux-tui) and feed them to the dispatcher.

/// One observed key press.
///
/// `key` is the logical key as the host reported it ("a", "Escape", " ");
/// it is normalized at match time, so adapters do not have to pre-normalize.
/// `code` is the physical-position code when the backend knows one
/// ("KeyA"-style), used as a fallback for letter keys on remapped layouts;
/// leave it empty otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub code: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    /// True when the press was aimed at a text-entry surface (input line,
    /// editor pane). Dispatch skips such presses wholesale.
    pub editable_target: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_editable_target(mut self) -> Self {
        self.editable_target = true;
        self
    }

    /// Either accelerator key, for the ctrl/meta platform unification.
    pub fn ctrl_or_meta(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let press = KeyPress::new("a").with_ctrl().with_shift();
        assert_eq!(press.key, "a");
        assert!(press.ctrl);
        assert!(press.shift);
        assert!(!press.alt);
        assert!(!press.meta);
        assert!(!press.editable_target);
        assert!(press.code.is_empty());
    }

    #[test]
    fn test_ctrl_or_meta() {
        assert!(KeyPress::new("a").with_ctrl().ctrl_or_meta());
        assert!(KeyPress::new("a").with_meta().ctrl_or_meta());
        assert!(!KeyPress::new("a").with_shift().ctrl_or_meta());
    }
}
