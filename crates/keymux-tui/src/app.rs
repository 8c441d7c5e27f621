//! Demo application state.
//!
//! Shortcut actions outlive any borrow of the UI loop, so everything they
//! touch lives behind [`SharedState`]: the actions capture an `Arc` clone,
//! the loop reads the same handle each frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keymux_core::constants::categories;
use keymux_core::{register_shortcut, KeyPress, Shortcut, ShortcutRegistry, ShortcutSnapshot};
use parking_lot::Mutex;

use crate::keys::key_press_from_event;

const ACTIVITY_CAP: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Input,
}

pub struct ActivityEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

/// State reachable from both the UI loop and registered actions.
pub struct SharedState {
    running: AtomicBool,
    show_panel: AtomicBool,
    pub input: Mutex<String>,
    pub activity: Mutex<Vec<ActivityEntry>>,
}

impl SharedState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            running: AtomicBool::new(true),
            show_panel: AtomicBool::new(true),
            input: Mutex::new(String::new()),
            activity: Mutex::new(Vec::new()),
        })
    }

    pub fn log(&self, text: impl Into<String>) {
        let mut activity = self.activity.lock();
        activity.push(ActivityEntry {
            at: Local::now(),
            text: text.into(),
        });
        if activity.len() > ACTIVITY_CAP {
            let excess = activity.len() - ACTIVITY_CAP;
            activity.drain(..excess);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn panel_visible(&self) -> bool {
        self.show_panel.load(Ordering::SeqCst)
    }

    pub fn toggle_panel(&self) {
        self.show_panel.fetch_xor(true, Ordering::SeqCst);
    }
}

pub struct DemoApp {
    pub shared: Arc<SharedState>,
    pub focus: Focus,
    pub snapshot: Arc<ShortcutSnapshot>,
}

impl DemoApp {
    pub fn new(shared: Arc<SharedState>) -> Self {
        Self {
            shared,
            focus: Focus::List,
            snapshot: ShortcutRegistry::global().snapshot(),
        }
    }

    pub fn refresh_snapshot(&mut self) {
        self.snapshot = ShortcutRegistry::global().snapshot();
    }

    /// One key press, end to end: hard-quit escape hatch, then the
    /// dispatcher, then app-level editing for whatever the dispatcher let
    /// through.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        // Ctrl+C always quits, even if the registry is somehow hosed.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.shared.stop();
            return;
        }

        let press = self.press_for(key);
        if ShortcutRegistry::global().dispatch(&press).handled() {
            return;
        }

        match self.focus {
            Focus::Input => match key.code {
                KeyCode::Esc | KeyCode::Tab => self.focus = Focus::List,
                KeyCode::Enter => {
                    let text = std::mem::take(&mut *self.shared.input.lock());
                    if !text.is_empty() {
                        self.shared.log(format!("submitted: {text}"));
                    }
                }
                KeyCode::Backspace => {
                    self.shared.input.lock().pop();
                }
                KeyCode::Char(c) => {
                    self.shared.input.lock().push(c);
                }
                _ => {}
            },
            Focus::List => {
                if key.code == KeyCode::Tab {
                    self.focus = Focus::Input;
                }
            }
        }
    }

    fn press_for(&self, key: &KeyEvent) -> KeyPress {
        key_press_from_event(key, self.focus == Focus::Input)
    }
}

/// Bind the demo's shortcuts on the global registry.
///
/// The set deliberately exercises the engine's edges on screen: a disabled
/// entry, an always-failing action, and a pair of colliding combos where
/// only the first-ordered one ever fires.
pub fn register_demo_shortcuts(shared: &Arc<SharedState>) {
    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::GLOBAL, "quit", "Ctrl+Q", move || {
            s.stop();
            Ok(())
        })
        .with_description("Quit the demo")
        .with_order(0),
    );

    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::NAVIGATION, "next-pane", "Ctrl+J", move || {
            s.log("focus: next pane");
            Ok(())
        })
        .with_description("Focus next pane")
        .with_order(10),
    );

    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::NAVIGATION, "prev-pane", "Ctrl+K", move || {
            s.log("focus: previous pane");
            Ok(())
        })
        .with_description("Focus previous pane")
        .with_order(11),
    );

    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::VIEW, "toggle-panel", "Ctrl+H", move || {
            s.toggle_panel();
            Ok(())
        })
        .with_description("Show/hide the shortcut panel"),
    );

    // Bare key: fires in list focus, types an 'r' in input focus. The
    // editable-target guard is what keeps those two apart.
    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::VIEW, "refresh", "R", move || {
            s.log("refreshed");
            Ok(())
        })
        .with_description("Refresh (bare key, guarded by focus)"),
    );

    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::EDITING, "clear-input", "Ctrl+U", move || {
            s.input.lock().clear();
            s.log("input cleared");
            Ok(())
        })
        .with_description("Clear the input line"),
    );

    register_shortcut(
        Shortcut::new(categories::EDITING, "disabled-demo", "Ctrl+G", || Ok(()))
            .with_description("Registered but disabled")
            .disabled(),
    );

    register_shortcut(
        Shortcut::new(categories::HELP, "fail-demo", "Ctrl+X", || {
            anyhow::bail!("this action always fails")
        })
        .with_description("Always fails (watch the log)"),
    );

    // Colliding pair: both bound to Ctrl+P, the earlier-ordered one wins.
    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::NAVIGATION, "palette", "Ctrl+P", move || {
            s.log("palette opened (shadowing help/print)");
            Ok(())
        })
        .with_description("Command palette")
        .with_order(20),
    );

    let s = Arc::clone(shared);
    register_shortcut(
        Shortcut::new(categories::HELP, "print", "Ctrl+P", move || {
            s.log("print (never fires, shadowed)");
            Ok(())
        })
        .with_description("Print (shadowed by the palette)")
        .with_order(21),
    );
}
