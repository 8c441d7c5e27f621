//! Immutable derived view of the registry.
//!
//! A snapshot is rebuilt from the live store whenever a reader observes a
//! pending mutation, and is the only form entries are exposed in. Ordering
//! is a deterministic total order:
//! - within a category: ascending `order`, entries without one last,
//!   insertion order as the stable tie-break;
//! - across categories (the flattened list): ascending `order` (missing
//!   last), then category creation order, then insertion order.
//!
//! The flattened order is exactly the order dispatch scans in, which makes
//! it the conflict-resolution rule for colliding combos.

use indexmap::IndexMap;

use crate::entry::ShortcutEntry;

#[derive(Debug, Clone, Default)]
pub struct ShortcutSnapshot {
    categories: IndexMap<String, Vec<ShortcutEntry>>,
    all: Vec<ShortcutEntry>,
}

/// Entries from distinct (category, name) keys that fire on the same
/// presses. `keys` is winner-first: the first entry is the one dispatch
/// actually executes, the rest are shadowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboConflict {
    pub combo: String,
    pub keys: Vec<(String, String)>,
}

fn sort_entries(entries: &mut [ShortcutEntry]) {
    // Stable: equal keys keep their incoming (insertion) order.
    entries.sort_by_key(|e| (e.order.is_none(), e.order));
}

impl ShortcutSnapshot {
    pub(crate) fn build(store: &IndexMap<String, Vec<ShortcutEntry>>) -> Self {
        let mut categories: IndexMap<String, Vec<ShortcutEntry>> =
            IndexMap::with_capacity(store.len());
        for (category, entries) in store {
            let mut sorted = entries.clone();
            sort_entries(&mut sorted);
            categories.insert(category.clone(), sorted);
        }
        let mut all: Vec<ShortcutEntry> = categories.values().flatten().cloned().collect();
        sort_entries(&mut all);
        Self { categories, all }
    }

    /// Category names in creation order, only those with entries.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// One category's entries, sorted. Empty for unknown categories.
    pub fn category(&self, category: &str) -> &[ShortcutEntry] {
        self.categories
            .get(category)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Every entry, flattened into the global dispatch order.
    pub fn all(&self) -> &[ShortcutEntry] {
        &self.all
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&ShortcutEntry> {
        self.categories
            .get(category)?
            .iter()
            .find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Find groups of enabled entries whose combos collide.
    ///
    /// Disabled entries are ignored: they never fire, so they shadow
    /// nothing. Groups come back in dispatch order, winner-first.
    pub fn find_conflicts(&self) -> Vec<ComboConflict> {
        let candidates: Vec<&ShortcutEntry> = self.all.iter().filter(|e| e.enabled).collect();
        let mut taken = vec![false; candidates.len()];
        let mut conflicts = Vec::new();
        for i in 0..candidates.len() {
            if taken[i] {
                continue;
            }
            let mut group = vec![i];
            for j in (i + 1)..candidates.len() {
                if !taken[j] && candidates[i].combo.conflicts_with(&candidates[j].combo) {
                    group.push(j);
                }
            }
            if group.len() > 1 {
                for &idx in &group {
                    taken[idx] = true;
                }
                conflicts.push(ComboConflict {
                    combo: candidates[i].combo.to_string(),
                    keys: group
                        .iter()
                        .map(|&idx| {
                            (candidates[idx].category.clone(), candidates[idx].name.clone())
                        })
                        .collect(),
                });
            }
        }
        conflicts
    }
}
