//! Key-sorted map type for YAML mappings.
//!
//! This module provides [`Mapping`], a wrapper around [`BTreeMap`] keyed by
//! `String`. Keys are unique and iteration is in sorted key order, which
//! means the order entries come back out may differ from the order they
//! appeared in the document.
//!
//! ## Why BTreeMap?
//!
//! A sorted store gives:
//!
//! - **Key uniqueness**: duplicate detection is a plain membership test
//! - **Deterministic output**: the printer emits entries in a stable order
//! - **Efficient lookup**: logarithmic `get`/`contains_key`
//!
//! ## Examples
//!
//! ```rust
//! use yamlite::{Element, Item, Mapping};
//!
//! let mut map = Mapping::new();
//! map.insert("name".to_string(), Item::new(Element::from("Alice")));
//! map.insert("age".to_string(), Item::new(Element::from(30)));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").unwrap().value.as_str().unwrap(), "Alice");
//! ```

use crate::Item;
use std::collections::BTreeMap;

/// A key-sorted map of string keys to YAML items.
///
/// Thin wrapper around [`BTreeMap`]; entries iterate in key order
/// regardless of document order.
///
/// # Examples
///
/// ```rust
/// use yamlite::{Element, Item, Mapping};
///
/// let mut map = Mapping::new();
/// map.insert("zebra".to_string(), Item::new(Element::from(1)));
/// map.insert("apple".to_string(), Item::new(Element::from(2)));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["apple", "zebra"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping(BTreeMap<String, Item>);

impl Mapping {
    /// Creates an empty `Mapping`.
    #[must_use]
    pub fn new() -> Self {
        Mapping(BTreeMap::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    pub fn insert(&mut self, key: String, value: Item) -> Option<Item> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> std::collections::btree_map::Keys<'_, String, Item> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in key order.
    pub fn values(&self) -> std::collections::btree_map::Values<'_, String, Item> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the map, in key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Item> {
        self.0.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Item);
    type IntoIter = std::collections::btree_map::IntoIter<String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Item);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Item)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (String, Item)>>(iter: T) -> Self {
        Mapping(BTreeMap::from_iter(iter))
    }
}
