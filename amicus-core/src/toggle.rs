//! Set of unique keys recording toggle state (favorites, helpful votes).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleSet<K: Ord> {
    items: BTreeSet<K>,
}

impl<K: Ord> Default for ToggleSet<K> {
    fn default() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }
}

impl<K: Ord> ToggleSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.items.contains(key)
    }

    /// Returns false if the key was already present.
    pub fn add(&mut self, key: K) -> bool {
        self.items.insert(key)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.items.remove(key)
    }

    /// Flip membership. Returns true when the key is now present.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.items.remove(&key) {
            false
        } else {
            self.items.insert(key);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.items.iter()
    }
}
