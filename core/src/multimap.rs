//! Grouping targets.
//!
//! `group_by`/`group_by_each` populate anything implementing
//! [`MultimapBuilder`], so callers can merge results into a map they already
//! own. [`ListMultimap`] is the default target: every key maps to the values
//! inserted under it, in insertion order.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};

use hashbrown::{Equivalent, HashMap};

/// Accepts `(key, value)` pairs one at a time.
pub trait MultimapBuilder<K, V> {
    fn insert(&mut self, key: K, value: V);
}

/// A multimap whose values are kept per key in insertion order.
pub struct ListMultimap<K, V> {
    map: HashMap<K, Vec<V>>,
    total: usize,
}

impl<K, V> ListMultimap<K, V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            total: 0,
        }
    }

    /// Total number of values across all keys.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.map.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.map.iter().map(|(k, vs)| (k, vs.as_slice()))
    }

    pub fn into_map(self) -> HashMap<K, Vec<V>> {
        self.map
    }
}

impl<K: Hash + Eq, V> ListMultimap<K, V> {
    /// Values stored under `key`, empty if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> &[V]
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.contains_key(key)
    }
}

impl<K: Hash + Eq, V> MultimapBuilder<K, V> for ListMultimap<K, V> {
    fn insert(&mut self, key: K, value: V) {
        self.map.entry(key).or_default().push(value);
        self.total += 1;
    }
}

impl<K, V> Default for ListMultimap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for ListMultimap<K, V> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
            total: self.total,
        }
    }
}

impl<K: Debug, V: Debug> Debug for ListMultimap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for ListMultimap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.map == other.map
    }
}

impl<K: Hash + Eq, V: Eq> Eq for ListMultimap<K, V> {}

// --- Plain maps of vectors as merge targets ---

impl<K: Hash + Eq, V, H: BuildHasher> MultimapBuilder<K, V> for HashMap<K, Vec<V>, H> {
    fn insert(&mut self, key: K, value: V) {
        self.entry(key).or_default().push(value);
    }
}

impl<K: Ord, V> MultimapBuilder<K, V> for BTreeMap<K, Vec<V>> {
    fn insert(&mut self, key: K, value: V) {
        self.entry(key).or_default().push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_keep_insertion_order() {
        let mut m = ListMultimap::new();
        m.insert("odd", 3);
        m.insert("even", 2);
        m.insert("odd", 1);

        assert_eq!(m.get("odd"), &[3, 1]);
        assert_eq!(m.get("even"), &[2]);
        assert_eq!(m.get("none"), &[] as &[i32]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.key_count(), 2);
        assert!(m.contains_key("even"));
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let mut a = ListMultimap::new();
        a.insert(1, 'a');
        a.insert(2, 'b');
        let mut b = ListMultimap::new();
        b.insert(2, 'b');
        b.insert(1, 'a');
        assert_eq!(a, b);

        b.insert(1, 'c');
        assert_ne!(a, b);
    }

    #[test]
    fn test_btree_target() {
        let mut m: BTreeMap<i32, Vec<&str>> = BTreeMap::new();
        MultimapBuilder::insert(&mut m, 1, "x");
        MultimapBuilder::insert(&mut m, 1, "y");
        assert_eq!(m[&1], vec!["x", "y"]);
    }
}
