//! Engine configuration.

use std::time::Duration;

use crate::constants::DEFAULT_NOTIFY_DEBOUNCE;

/// Tuning knobs for a [`ShortcutRegistry`]. Everything is in-memory and
/// process-lifetime; there is no config file behind this.
///
/// [`ShortcutRegistry`]: crate::registry::ShortcutRegistry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Quiet period before change subscribers are notified. Mutations
    /// within the window coalesce into one callback round.
    pub notify_debounce: Duration,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self {
            notify_debounce: DEFAULT_NOTIFY_DEBOUNCE,
        }
    }

    pub fn with_notify_debounce(mut self, delay: Duration) -> Self {
        self.notify_debounce = delay;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}
