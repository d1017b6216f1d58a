//! Insertion-ordered string-keyed map.
//!
//! Iteration order of units, systems, nets and net members is an observable
//! contract of the parsed model: link enumeration order and the choice of
//! the projection reference unit both depend on first-seen order in the
//! source text. This container makes that ordering explicit instead of
//! leaning on the iteration behavior of a generic map.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// String-keyed map with O(1) lookup and insertion-ordered iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedMap<V> {
    keys: Vec<String>,
    entries: HashMap<String, V>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value, returning the previous value for the key if any.
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if !self.entries.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// First entry in insertion order
    pub fn first(&self) -> Option<(&str, &V)> {
        let key = self.keys.first()?;
        self.entries.get(key).map(|v| (key.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.keys.iter().filter_map(|k| self.entries.get(k))
    }

    /// Values in arbitrary order, for in-place updates
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.keys
            .iter()
            .filter_map(|k| self.entries.get(k).map(|v| (k.as_str(), v)))
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zebra", 1);
        map.insert("alpha", 2);
        map.insert("mike", 3);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zebra", "alpha", "mike"]);
        let values: Vec<i32> = map.values().copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn lookup_and_first() {
        let mut map = OrderedMap::new();
        map.insert("a", 10);
        map.insert("b", 20);

        assert_eq!(map.get("b"), Some(&20));
        assert_eq!(map.get("missing"), None);
        assert_eq!(map.first(), Some(("a", &10)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        let old = map.insert("a", 3);

        assert_eq!(old, Some(1));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&3));
    }

    #[test]
    fn serializes_in_order() {
        let mut map = OrderedMap::new();
        map.insert("z", 1);
        map.insert("a", 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }
}
