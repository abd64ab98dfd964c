//! The favorites set: properties unique by id, kept in insertion order.
//!
//! Mutations here are in-memory only; `commands::favorites` pairs each one
//! with a write to the store.

use crate::model::Property;
use crate::store::{KeyValueStore, FAVORITES_KEY};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    entries: Vec<Property>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the favorites slot. A missing or corrupt slot gives an empty set;
    /// duplicate ids in the stored list keep their first occurrence.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let stored: Vec<Property> = store.get(FAVORITES_KEY, Vec::new());
        let mut set = Self::new();
        let stored_len = stored.len();
        for property in stored {
            set.add(property);
        }
        if set.len() != stored_len {
            warn!(
                stored = stored_len,
                kept = set.len(),
                "dropped duplicate favorites from stored list"
            );
        }
        set
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut S) {
        store.set(FAVORITES_KEY, self);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    /// Removes the property when present, appends it otherwise.
    /// Returns `true` when the property is a favorite afterwards.
    pub fn toggle(&mut self, property: &Property) -> bool {
        if self.remove(&property.id) {
            false
        } else {
            self.entries.push(property.clone());
            true
        }
    }

    /// Appends unless the id is already present. Returns whether it was added.
    pub fn add(&mut self, property: Property) -> bool {
        if self.contains(&property.id) {
            return false;
        }
        self.entries.push(property);
        true
    }

    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        self.entries.len() != before
    }

    /// Returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.entries.iter().all(|p| seen.insert(p.id.as_str()))
    }
}
