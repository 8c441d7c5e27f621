//! Category-partitioned shortcut registry.
//!
//! The registry is the single shared surface between mutually-unaware
//! parties: owners register and unregister bindings, dispatch scans the
//! derived snapshot, displays subscribe for change notification. All
//! operations are total — unknown categories and names come back as empty
//! results or `false`, never errors.
//!
//! Mutations update the live store synchronously and mark the derived
//! snapshot dirty; every read rebuilds on demand, so reads and dispatch
//! observe completed mutations immediately. Only subscriber callbacks are
//! debounced (see [`crate::debounce`]), coalescing registration bursts into
//! a single notification round.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::config::RegistryConfig;
use crate::debounce::Debouncer;
use crate::entry::{Shortcut, ShortcutEntry};
use crate::snapshot::ShortcutSnapshot;

type SubscriberFn = Arc<dyn Fn(Arc<ShortcutSnapshot>) + Send + Sync>;

/// Handle returned by [`ShortcutRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

static NEXT_SUBSCRIBER_ID: AtomicU64 = AtomicU64::new(1);

pub struct ShortcutRegistry {
    shared: Arc<Shared>,
    notifier: Debouncer,
}

struct Shared {
    store: Mutex<Store>,
    subscribers: Mutex<IndexMap<SubscriberId, SubscriberFn>>,
}

#[derive(Default)]
struct Store {
    categories: IndexMap<String, Vec<ShortcutEntry>>,
    snapshot: Arc<ShortcutSnapshot>,
    dirty: bool,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let shared = Arc::new(Shared {
            store: Mutex::new(Store::default()),
            subscribers: Mutex::new(IndexMap::new()),
        });
        let notify_shared = Arc::clone(&shared);
        let notifier = Debouncer::new(config.notify_debounce, move || {
            notify_subscribers(&notify_shared);
        });
        Self { shared, notifier }
    }

    /// The process-wide registry, created lazily on first use.
    ///
    /// Independent, unrelated registrars share this instance so they can
    /// bind shortcuts without wiring a registry through the application.
    pub fn global() -> &'static ShortcutRegistry {
        GLOBAL_REGISTRY.get_or_init(ShortcutRegistry::new)
    }

    /// Create or replace the entry at (category, name).
    ///
    /// A new name appends to its category, creating the category at the end
    /// of the enumeration order if needed. An existing (category, name) is
    /// replaced in place — same slot position, new payload — and only the
    /// latest registration is retained. The combo string is not validated
    /// here; a malformed combo simply never matches.
    pub fn register(&self, shortcut: Shortcut) {
        let entry = shortcut.into_entry();
        let category = entry.category.clone();
        let name = entry.name.clone();
        {
            let mut store = self.shared.store.lock();
            let entries = store.categories.entry(category.clone()).or_default();
            if let Some(slot) = entries.iter_mut().find(|e| e.name == entry.name) {
                *slot = entry;
            } else {
                entries.push(entry);
            }
            store.dirty = true;
        }
        tracing::debug!("Registered shortcut {}/{}", category, name);
        self.notifier.schedule();
    }

    /// Remove the entry if present. Removing the last entry of a category
    /// drops the category from enumeration; it reappears at the end of the
    /// order on its next registration. Unknown keys are a no-op (no change
    /// notification).
    pub fn unregister(&self, category: &str, name: &str) -> bool {
        {
            let mut store = self.shared.store.lock();
            let Some(entries) = store.categories.get_mut(category) else {
                return false;
            };
            let Some(pos) = entries.iter().position(|e| e.name == name) else {
                return false;
            };
            entries.remove(pos);
            if entries.is_empty() {
                store.categories.shift_remove(category);
            }
            store.dirty = true;
        }
        tracing::debug!("Unregistered shortcut {}/{}", category, name);
        self.notifier.schedule();
        true
    }

    pub fn has_shortcut(&self, category: &str, name: &str) -> bool {
        let store = self.shared.store.lock();
        store
            .categories
            .get(category)
            .map_or(false, |entries| entries.iter().any(|e| e.name == name))
    }

    /// One category's entries in sorted order. Empty for unknown categories.
    pub fn get_shortcuts(&self, category: &str) -> Vec<ShortcutEntry> {
        self.snapshot().category(category).to_vec()
    }

    /// Every entry, flattened into the global dispatch order.
    pub fn get_all_shortcuts(&self) -> Vec<ShortcutEntry> {
        self.snapshot().all().to_vec()
    }

    /// Names of categories that currently have at least one entry, in
    /// creation order.
    pub fn get_categories(&self) -> Vec<String> {
        self.snapshot().categories().map(str::to_string).collect()
    }

    /// Drop a whole category at once. Returns how many entries went away
    /// (0 for unknown categories, with no change notification).
    pub fn clear_category(&self, category: &str) -> usize {
        let removed = {
            let mut store = self.shared.store.lock();
            match store.categories.shift_remove(category) {
                Some(entries) => {
                    store.dirty = true;
                    entries.len()
                }
                None => 0,
            }
        };
        if removed > 0 {
            tracing::debug!("Cleared {} shortcuts from category {}", removed, category);
            self.notifier.schedule();
        }
        removed
    }

    /// Invoke an entry's action directly, bypassing key matching.
    ///
    /// Returns false when the entry is absent or disabled, true once the
    /// action was invoked — even if the action then failed; failures are
    /// logged and contained, they never cross this boundary.
    pub fn execute(&self, category: &str, name: &str) -> bool {
        let entry = {
            let store = self.shared.store.lock();
            store
                .categories
                .get(category)
                .and_then(|entries| entries.iter().find(|e| e.name == name))
                .cloned()
        };
        // Run outside the lock so actions may call back into the registry.
        match entry {
            Some(entry) if entry.enabled => {
                entry.run_contained();
                true
            }
            _ => false,
        }
    }

    /// Current derived view, rebuilt lazily when a mutation is pending.
    pub fn snapshot(&self) -> Arc<ShortcutSnapshot> {
        self.shared.current_snapshot()
    }

    /// Register a change subscriber. Callbacks run on the notifier thread,
    /// once per coalesced mutation burst, with the post-burst snapshot.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(Arc<ShortcutSnapshot>) + Send + Sync + 'static,
    {
        let id = SubscriberId(NEXT_SUBSCRIBER_ID.fetch_add(1, Ordering::Relaxed));
        self.shared.subscribers.lock().insert(id, Arc::new(callback));
        id
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.shared.subscribers.lock().shift_remove(&id).is_some()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Shared {
    fn current_snapshot(&self) -> Arc<ShortcutSnapshot> {
        let mut store = self.store.lock();
        if store.dirty {
            store.snapshot = Arc::new(ShortcutSnapshot::build(&store.categories));
            store.dirty = false;
        }
        Arc::clone(&store.snapshot)
    }
}

fn notify_subscribers(shared: &Shared) {
    let snapshot = shared.current_snapshot();
    // Snapshot the subscriber list too; a callback may (un)subscribe.
    let subscribers: Vec<SubscriberFn> = shared.subscribers.lock().values().cloned().collect();
    tracing::trace!("Notifying {} shortcut subscribers", subscribers.len());
    for callback in subscribers {
        if catch_unwind(AssertUnwindSafe(|| callback(Arc::clone(&snapshot)))).is_err() {
            tracing::error!("Shortcut subscriber panicked");
        }
    }
}

static GLOBAL_REGISTRY: OnceLock<ShortcutRegistry> = OnceLock::new();

/// Install the process-wide registry with a non-default config.
///
/// Must run before anything touches [`ShortcutRegistry::global`]; panics if
/// the global registry was already initialized. That is a programmer error
/// that should surface immediately, unlike the permissive lookup paths.
pub fn install_global(config: RegistryConfig) -> &'static ShortcutRegistry {
    let mut installed = false;
    let registry = GLOBAL_REGISTRY.get_or_init(|| {
        installed = true;
        ShortcutRegistry::with_config(config)
    });
    if !installed {
        panic!("global shortcut registry already initialized");
    }
    registry
}

// Convenience wrappers over the global registry, for registrars that have
// no registry handle in scope.

pub fn register_shortcut(shortcut: Shortcut) {
    ShortcutRegistry::global().register(shortcut);
}

pub fn unregister_shortcut(category: &str, name: &str) -> bool {
    ShortcutRegistry::global().unregister(category, name)
}

pub fn has_shortcut(category: &str, name: &str) -> bool {
    ShortcutRegistry::global().has_shortcut(category, name)
}

pub fn get_shortcuts(category: &str) -> Vec<ShortcutEntry> {
    ShortcutRegistry::global().get_shortcuts(category)
}

pub fn get_all_shortcuts() -> Vec<ShortcutEntry> {
    ShortcutRegistry::global().get_all_shortcuts()
}

pub fn get_shortcut_categories() -> Vec<String> {
    ShortcutRegistry::global().get_categories()
}

pub fn clear_shortcuts(category: &str) -> usize {
    ShortcutRegistry::global().clear_category(category)
}

pub fn execute_shortcut(category: &str, name: &str) -> bool {
    ShortcutRegistry::global().execute(category, name)
}
