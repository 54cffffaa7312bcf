//! Insertion-ordered property bags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::value::PropertyValue;

/// An ordered map of case-insensitive keys to values.
///
/// Iteration follows insertion order. Re-inserting an existing key updates
/// the value in place and keeps both its position and original spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    entries: IndexMap<Key, PropertyValue>,
}

impl Properties {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bag with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a bag from key/value pairs.
    ///
    /// ```rust
    /// use bxjdbc_core::{Properties, PropertyValue};
    ///
    /// let props = Properties::of([("cachePrepStmts", true)]);
    /// assert_eq!(props.get("CACHEPREPSTMTS"), Some(&PropertyValue::Bool(true)));
    /// ```
    pub fn of<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<PropertyValue>,
    {
        pairs.into_iter().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(&Key::new(key))
    }

    /// Look up a value mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut PropertyValue> {
        self.entries.get_mut(&Key::new(key))
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&Key::new(key))
    }

    /// Check if a key is present.
    pub fn contains(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or update a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert a value only if the key is absent. Returns `true` if inserted.
    pub fn insert_if_absent(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<PropertyValue>,
    ) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value.into());
        true
    }

    /// Remove a value, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.entries.shift_remove(&Key::new(key))
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &PropertyValue)> {
        self.entries.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }
}

impl<K: Into<Key>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<Key>, V: Into<PropertyValue>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Properties {
    type Item = (Key, PropertyValue);
    type IntoIter = indexmap::map::IntoIter<Key, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a Key, &'a PropertyValue);
    type IntoIter = indexmap::map::Iter<'a, Key, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
