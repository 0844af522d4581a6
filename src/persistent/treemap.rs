//! Persistent ordered map built on [`BalancedTree`].
//!
//! This module provides [`TreeMap`], an immutable map whose entries are kept
//! in key order under a caller-supplied [`Comparator`].
//!
//! # Overview
//!
//! Each entry is stored as one element of a balanced tree whose comparator
//! looks only at keys. Values never take part in ordering, so two entries
//! with the same key are the same element as far as the tree is concerned.
//!
//! - O(log N) get, insert, remove
//! - O(log N) first/last
//! - O(1) len and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use strata::persistent::TreeMap;
//!
//! let map = TreeMap::new()
//!     .insert(3, "three")
//!     .insert(1, "one")
//!     .insert(2, "two");
//!
//! // Entries are always in key order
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! // Inserting an existing key replaces its value
//! let updated = map.insert(1, "ONE");
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(updated.get(&1), Some(&"ONE"));
//! assert_eq!(updated.len(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use super::{
    BalancedTree, BalancedTreeIntoIterator, BalancedTreeIterator, Comparator, NaturalOrder,
    TreeError,
};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// Entry and Key Ordering
// =============================================================================

/// One key-value pair as stored in the tree.
#[derive(Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Orders entries by key alone.
pub(crate) struct EntryOrder<C>(pub(crate) C);

impl<K, V, C: Comparator<K>> Comparator<Entry<K, V>> for EntryOrder<C> {
    #[inline]
    fn compare(&self, left: &Entry<K, V>, right: &Entry<K, V>) -> Ordering {
        self.0.compare(&left.key, &right.key)
    }
}

// =============================================================================
// TreeMap Definition
// =============================================================================

/// A persistent (immutable) ordered map.
///
/// Keys are ordered by the comparator given at construction; `K` itself does
/// not need to implement `Ord`. The entry count is tracked alongside the
/// tree, so [`len`](Self::len) is O(1).
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `get`          | O(log N)   |
/// | `insert`       | O(log N)   |
/// | `remove`       | O(log N)   |
/// | `contains_key` | O(log N)   |
/// | `first`/`last` | O(log N)   |
/// | `len`          | O(1)       |
/// | `is_empty`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use strata::persistent::{TreeMap, ReverseOrder, NaturalOrder};
///
/// let map = TreeMap::with_comparator(ReverseOrder(NaturalOrder))
///     .insert("a", 1)
///     .insert("c", 3)
///     .insert("b", 2);
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, vec!["c", "b", "a"]);
/// ```
pub struct TreeMap<K, V, C = NaturalOrder> {
    tree: BalancedTree<Entry<K, V>, EntryOrder<C>>,
    length: usize,
}

impl<K, V> TreeMap<K, V, NaturalOrder> {
    /// Creates a new empty map ordered by the key type's `Ord`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Clone + Ord, V: Clone> TreeMap<K, V, NaturalOrder> {
    /// Creates a map containing a single entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeMap;
    ///
    /// let map = TreeMap::singleton(42, "answer");
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&42), Some(&"answer"));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self::new().insert(key, value)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Creates a new empty map ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: BalancedTree::with_comparator(EntryOrder(comparator)),
            length: 0,
        }
    }

    /// Returns the comparator that orders the keys.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.tree.comparator().0
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns an iterator over the entries in key order.
    #[must_use]
    pub fn iter(&self) -> TreeMapIterator<'_, K, V> {
        TreeMapIterator {
            entries: self.tree.iter(),
            remaining: self.length,
        }
    }

    /// Returns an iterator over the keys in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeMap;
    ///
    /// let map: TreeMap<i32, char> = [(2, 'b'), (1, 'a')].into_iter().collect();
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), vec!['a', 'b']);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|entry| (&entry.key, &entry.value))
    }

    /// Reduces the entries in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeMap;
    ///
    /// let map: TreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let total = map.fold(0, |accumulator, _, value| accumulator + value);
    /// assert_eq!(total, 3);
    /// ```
    pub fn fold<B, F>(&self, seed: B, mut function: F) -> B
    where
        F: FnMut(B, &K, &V) -> B,
    {
        self.tree.fold(seed, |accumulator, entry| {
            function(accumulator, &entry.key, &entry.value)
        })
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    fn find_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let comparator = self.comparator();
        self.tree.find_by(|entry| comparator.compare(key, &entry.key))
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeMap;
    ///
    /// let map = TreeMap::new().insert("hello".to_string(), 42);
    /// assert_eq!(map.get(&"hello".to_string()), Some(&42));
    /// assert_eq!(map.get(&"world".to_string()), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_entry(key).map(|entry| &entry.value)
    }

    /// Returns the stored key and value for `key`.
    ///
    /// The stored key is the one first inserted and may differ from `key` in
    /// parts the comparator ignores.
    #[must_use]
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.find_entry(key).map(|entry| (&entry.key, &entry.value))
    }

    /// Like [`get`](Self::get), but reports a missing key as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] when `key` is absent.
    pub fn try_get(&self, key: &K) -> Result<&V, TreeError> {
        self.get(key).ok_or(TreeError::NotFound)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_entry(key).is_some()
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>> TreeMap<K, V, C> {
    /// Inserts an entry, replacing the value if the key is already present.
    ///
    /// A replaced entry keeps the map's length. The stored key is replaced
    /// together with the value.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        if self.contains_key(&key) {
            let comparator = self.comparator();
            let without = self
                .tree
                .delete_by(|entry| comparator.compare(&key, &entry.key));
            Self {
                tree: without.insert(Entry { key, value }),
                length: self.length,
            }
        } else {
            Self {
                tree: self.tree.insert(Entry { key, value }),
                length: self.length + 1,
            }
        }
    }

    /// Removes the entry for `key`, if present.
    ///
    /// Removing an absent key returns an equal map sharing the same tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeMap;
    ///
    /// let map = TreeMap::new().insert(1, "one").insert(2, "two");
    /// let removed = map.remove(&1);
    /// assert_eq!(removed.len(), 1);
    /// assert_eq!(removed.get(&1), None);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub fn remove(&self, key: &K) -> Self {
        if !self.contains_key(key) {
            return self.clone();
        }
        let comparator = self.comparator();
        Self {
            tree: self
                .tree
                .delete_by(|entry| comparator.compare(key, &entry.key)),
            length: self.length - 1,
        }
    }

    /// Combines two maps; on equal keys the value from `other` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeMap;
    ///
    /// let left = TreeMap::new().insert(1, "a").insert(2, "b");
    /// let right = TreeMap::new().insert(2, "B").insert(3, "C");
    /// let merged = left.merge(&right);
    /// assert_eq!(merged.values().copied().collect::<Vec<_>>(), vec!["a", "B", "C"]);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        other.iter().fold(self.clone(), |map, (key, value)| {
            map.insert(key.clone(), value.clone())
        })
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`TreeMap`], in key order.
pub struct TreeMapIterator<'a, K, V> {
    entries: BalancedTreeIterator<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for TreeMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for TreeMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for TreeMapIterator<'_, K, V> {}

/// An owning iterator over the entries of a [`TreeMap`], in key order.
pub struct TreeMapIntoIterator<K, V> {
    entries: BalancedTreeIntoIterator<Entry<K, V>>,
    remaining: usize,
}

impl<K: Clone, V: Clone> Iterator for TreeMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let Entry { key, value } = self.entries.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Clone, V: Clone> ExactSizeIterator for TreeMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K: Clone, V: Clone> FusedIterator for TreeMapIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C> Clone for TreeMap<K, V, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            length: self.length,
        }
    }
}

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C> FromIterator<(K, V)> for TreeMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (key, value) in iter {
            map = map.insert(key, value);
        }
        map
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            *self = self.insert(key, value);
        }
    }
}

impl<K: Clone, V: Clone, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = TreeMapIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        TreeMapIntoIterator {
            remaining: self.length,
            entries: self.tree.into_iter(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = TreeMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K: Hash, V: Hash, C> Hash for TreeMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// A map is treated as a container of its values, with the key type fixed.
impl<K, V, C> TypeConstructor for TreeMap<K, V, C> {
    type Inner = V;
    type WithType<B> = TreeMap<K, B, C>;
}

impl<K: Clone, V: Clone, C> Foldable for TreeMap<K, V, C> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, (_, value)| function(accumulator, value))
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        let mut values: Vec<V> = self.into_iter().map(|(_, value)| value).collect();
        values.reverse();
        values
            .into_iter()
            .fold(init, |accumulator, value| function(value, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>> Semigroup for TreeMap<K, V, C> {
    fn combine(self, other: Self) -> Self {
        self.merge(&other)
    }
}

impl<K: Clone, V: Clone, C: Comparator<K> + Default> Monoid for TreeMap<K, V, C> {
    fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize, C> serde::Serialize for TreeMap<K, V, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct TreeMapVisitor<K, V, C> {
    marker: std::marker::PhantomData<(K, V, C)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::de::Visitor<'de> for TreeMapVisitor<K, V, C>
where
    K: serde::Deserialize<'de> + Clone,
    V: serde::Deserialize<'de> + Clone,
    C: Comparator<K> + Default,
{
    type Value = TreeMap<K, V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = TreeMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map = map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::Deserialize<'de> for TreeMap<K, V, C>
where
    K: serde::Deserialize<'de> + Clone,
    V: serde::Deserialize<'de> + Clone,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(TreeMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
