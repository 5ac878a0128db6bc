//! Per-label containers

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Index;

use crate::label::Label;

/// A mapping from [`Label`] to a value, iterated in label declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct LabelMap<T> {
    entries: BTreeMap<Label, T>,
}

impl<T> LabelMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a value, returning the one previously stored for `label`
    pub fn insert(&mut self, label: Label, value: T) -> Option<T> {
        self.entries.insert(label, value)
    }

    pub fn get(&self, label: Label) -> Option<&T> {
        self.entries.get(&label)
    }

    pub fn remove(&mut self, label: Label) -> Option<T> {
        self.entries.remove(&label)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.entries.contains_key(&label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels present in the map, in iteration order
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.entries.keys().copied()
    }

    /// Iterate over `(label, value)` pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (Label, &T)> + '_ {
        self.entries.iter().map(|(label, value)| (*label, value))
    }
}

impl<T> Default for LabelMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Label> for LabelMap<T> {
    type Output = T;

    fn index(&self, label: Label) -> &Self::Output {
        &self.entries[&label]
    }
}

impl<T> FromIterator<(Label, T)> for LabelMap<T> {
    fn from_iter<I: IntoIterator<Item = (Label, T)>>(iter: I) -> Self {
        Self {
            entries: BTreeMap::from_iter(iter),
        }
    }
}

impl<T> Extend<(Label, T)> for LabelMap<T> {
    fn extend<I: IntoIterator<Item = (Label, T)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<T> IntoIterator for LabelMap<T> {
    type Item = (Label, T);
    type IntoIter = btree_map::IntoIter<Label, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
