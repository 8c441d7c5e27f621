//! Decoupled keyboard-shortcut engine: combo parsing/matching, a
//! category-partitioned registry with a derived sorted snapshot, debounced
//! change notification, and deterministic first-match dispatch.

pub mod combo;
pub mod config;
pub mod constants;
mod debounce;
pub mod dispatch;
pub mod entry;
pub mod event;
pub mod registry;
pub mod snapshot;

pub use combo::{matches_key_combo, normalize_key, parse_key_combo, KeyCombo};
pub use config::RegistryConfig;
pub use dispatch::DispatchOutcome;
pub use entry::{Shortcut, ShortcutAction, ShortcutEntry};
pub use event::KeyPress;
pub use registry::{
    clear_shortcuts, execute_shortcut, get_all_shortcuts, get_shortcut_categories, get_shortcuts,
    has_shortcut, install_global, register_shortcut, unregister_shortcut, ShortcutRegistry,
    SubscriberId,
};
pub use snapshot::{ComboConflict, ShortcutSnapshot};
