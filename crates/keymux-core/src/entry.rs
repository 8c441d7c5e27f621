//! Shortcut entries and the registration payload builder.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde::Serialize;

use crate::combo::{parse_key_combo, KeyCombo};

/// A registered callback. Shared, not owned: the registry keeps one handle,
/// the registering caller keeps whatever state the closure captured.
pub type ShortcutAction = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// Registration payload for [`ShortcutRegistry::register`].
///
/// `category` groups related shortcuts; `name` is unique within its
/// category (re-registering the same pair replaces the prior entry).
/// Optional fields follow builder-style:
///
/// ```ignore
/// Shortcut::new("navigation", "next-pane", "Ctrl+J", || { app.focus_next(); Ok(()) })
///     .with_description("Focus the next pane")
///     .with_order(10)
/// ```
///
/// [`ShortcutRegistry::register`]: crate::registry::ShortcutRegistry::register
pub struct Shortcut {
    pub category: String,
    pub name: String,
    pub key_combo: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub order: Option<i64>,
    action: ShortcutAction,
}

impl Shortcut {
    pub fn new<F>(
        category: impl Into<String>,
        name: impl Into<String>,
        key_combo: impl Into<String>,
        action: F,
    ) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            category: category.into(),
            name: name.into(),
            key_combo: key_combo.into(),
            description: None,
            enabled: true,
            order: None,
            action: Arc::new(action),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Register the entry disabled: retained and listed, but it never
    /// matches and cannot be executed until re-registered enabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The combo string is parsed once here; match time only compares.
    pub(crate) fn into_entry(self) -> ShortcutEntry {
        ShortcutEntry {
            combo: parse_key_combo(&self.key_combo),
            category: self.category,
            name: self.name,
            description: self.description,
            enabled: self.enabled,
            order: self.order,
            action: self.action,
        }
    }
}

/// One registered binding, as stored and as exposed through snapshots.
#[derive(Clone, Serialize)]
pub struct ShortcutEntry {
    pub category: String,
    pub name: String,
    pub combo: KeyCombo,
    pub description: Option<String>,
    pub enabled: bool,
    pub order: Option<i64>,
    #[serde(skip_serializing)]
    pub(crate) action: ShortcutAction,
}

impl ShortcutEntry {
    /// Description if present, otherwise the name. What listings show.
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    /// Run the action with failures contained: an `Err` or a panic is
    /// logged with the offending category/name and goes no further.
    pub(crate) fn run_contained(&self) {
        match catch_unwind(AssertUnwindSafe(|| (self.action)())) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::error!(
                    "Shortcut action failed ({}/{}): {:#}",
                    self.category,
                    self.name,
                    err
                );
            }
            Err(_) => {
                tracing::error!(
                    "Shortcut action panicked ({}/{})",
                    self.category,
                    self.name
                );
            }
        }
    }
}

impl fmt::Debug for ShortcutEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutEntry")
            .field("category", &self.category)
            .field("name", &self.name)
            .field("combo", &self.combo)
            .field("description", &self.description)
            .field("enabled", &self.enabled)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
