//! Shared constants for the shortcut engine.

use std::time::Duration;

/// Default quiet period before change subscribers are notified.
pub const DEFAULT_NOTIFY_DEBOUNCE: Duration = Duration::from_millis(30);

/// Well-known category names.
///
/// Categories are free-form strings; these exist so independent registrars
/// converge on the same partitions without coordinating.
pub mod categories {
    pub const GLOBAL: &str = "global";
    pub const NAVIGATION: &str = "navigation";
    pub const EDITING: &str = "editing";
    pub const VIEW: &str = "view";
    pub const HELP: &str = "help";
}
