//! Key-press dispatch policy.
//!
//! Stateless per press: guard, scan, execute-and-stop. The host feeds every
//! key press through [`ShortcutRegistry::dispatch`] and suppresses the
//! event (stops propagating it to widgets) exactly when the outcome is
//! [`DispatchOutcome::handled`].

use crate::event::KeyPress;
use crate::registry::ShortcutRegistry;

/// What a single key press came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The first matching enabled entry ran; the press is consumed.
    Executed { category: String, name: String },
    /// The press targeted a text-entry surface; nothing was scanned.
    SkippedEditable,
    /// No enabled entry matched; the press propagates normally.
    NoMatch,
}

impl DispatchOutcome {
    /// True when the host should suppress the press.
    pub fn handled(&self) -> bool {
        matches!(self, Self::Executed { .. })
    }
}

impl ShortcutRegistry {
    /// Dispatch one key press.
    ///
    /// Presses aimed at editable targets are skipped wholesale — typed
    /// characters are never intercepted. Otherwise the flattened snapshot
    /// is scanned in its total order and the first enabled match executes;
    /// later entries never run, which makes `order` (then insertion order)
    /// the conflict-resolution rule for colliding combos. Action failures
    /// are contained here and the press still counts as handled.
    pub fn dispatch(&self, press: &KeyPress) -> DispatchOutcome {
        if press.editable_target {
            tracing::trace!("Dispatch skipped, press targets an editable surface");
            return DispatchOutcome::SkippedEditable;
        }
        let snapshot = self.snapshot();
        let hit = snapshot
            .all()
            .iter()
            .find(|entry| entry.enabled && entry.combo.matches(press))
            .cloned();
        match hit {
            Some(entry) => {
                tracing::debug!("Dispatching {}/{} for key '{}'", entry.category, entry.name, press.key);
                // Snapshot in hand, lock released: the action may mutate
                // the registry it was dispatched from.
                entry.run_contained();
                DispatchOutcome::Executed {
                    category: entry.category,
                    name: entry.name,
                }
            }
            None => DispatchOutcome::NoMatch,
        }
    }
}
