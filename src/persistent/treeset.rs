//! Persistent ordered set built on [`BalancedTree`].
//!
//! [`TreeSet`] adds an O(1) element count and the usual set algebra on top of
//! the bare tree.
//!
//! # Examples
//!
//! ```rust
//! use strata::persistent::TreeSet;
//!
//! let evens: TreeSet<i32> = [2, 4, 6, 8].into_iter().collect();
//! let small: TreeSet<i32> = [1, 2, 3, 4].into_iter().collect();
//!
//! assert_eq!(evens.union(&small).to_string(), "[1, 2, 3, 4, 6, 8]");
//! assert_eq!(evens.intersection(&small).to_string(), "[2, 4]");
//! assert_eq!(evens.difference(&small).to_string(), "[6, 8]");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use super::{BalancedTree, BalancedTreeIntoIterator, BalancedTreeIterator, Comparator, NaturalOrder};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

// =============================================================================
// TreeSet Definition
// =============================================================================

/// A persistent (immutable) ordered set.
///
/// Elements are ordered by the comparator given at construction. Inserting
/// an element that is already present leaves the set unchanged.
///
/// # Time Complexity
///
/// | Operation      | Complexity   |
/// |----------------|--------------|
/// | `insert`       | O(log N)     |
/// | `remove`       | O(log N)     |
/// | `contains`     | O(log N)     |
/// | `len`          | O(1)         |
/// | `union`        | O(M log N)   |
/// | `intersection` | O(N log M)   |
/// | `difference`   | O(N log M)   |
///
/// # Examples
///
/// ```rust
/// use strata::persistent::TreeSet;
///
/// let set = TreeSet::new().insert(3).insert(1).insert(3);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&1));
/// ```
pub struct TreeSet<A, C = NaturalOrder> {
    tree: BalancedTree<A, C>,
    length: usize,
}

impl<A> TreeSet<A, NaturalOrder> {
    /// Creates an empty set ordered by the element type's `Ord`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<A: Clone + Ord> TreeSet<A, NaturalOrder> {
    /// Creates a set containing one element.
    #[must_use]
    pub fn singleton(element: A) -> Self {
        Self::new().insert(element)
    }
}

impl<A, C> TreeSet<A, C> {
    /// Creates an empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: BalancedTree::with_comparator(comparator),
            length: 0,
        }
    }

    /// Returns the comparator that orders this set.
    #[inline]
    pub fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns an iterator over the elements in order.
    #[must_use]
    pub fn iter(&self) -> TreeSetIterator<'_, A> {
        TreeSetIterator {
            elements: self.tree.iter(),
            remaining: self.length,
        }
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn first(&self) -> Option<&A> {
        self.tree.first()
    }

    /// Returns the largest element.
    #[must_use]
    pub fn last(&self) -> Option<&A> {
        self.tree.last()
    }

    /// Reduces the elements in ascending order.
    pub fn fold<B, F>(&self, seed: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.tree.fold(seed, function)
    }
}

impl<A, C: Comparator<A>> TreeSet<A, C> {
    /// Returns `true` if an equal element is present.
    #[must_use]
    pub fn contains(&self, element: &A) -> bool {
        self.tree.contains(element)
    }

    /// Returns the stored element equal to `element`.
    #[must_use]
    pub fn get(&self, element: &A) -> Option<&A> {
        self.tree.find(element)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeSet;
    ///
    /// let small: TreeSet<i32> = [1, 2].into_iter().collect();
    /// let large: TreeSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.length <= other.length && self.iter().all(|element| other.contains(element))
    }
}

impl<A: Clone, C: Comparator<A>> TreeSet<A, C> {
    /// Adds an element; a present element is left as it is.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn insert(&self, element: A) -> Self {
        let tree = self.tree.insert(element);
        if tree.ptr_eq(&self.tree) {
            return self.clone();
        }
        Self {
            tree,
            length: self.length + 1,
        }
    }

    /// Removes an element; an absent element is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::TreeSet;
    ///
    /// let set: TreeSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.remove(&2).len(), 2);
    /// assert_eq!(set.remove(&9).len(), 3);
    /// ```
    #[must_use]
    pub fn remove(&self, element: &A) -> Self {
        let tree = self.tree.delete(element);
        if tree.ptr_eq(&self.tree) {
            return self.clone();
        }
        Self {
            tree,
            length: self.length - 1,
        }
    }

    /// Elements in either set. Elements of `self` are kept over equal ones
    /// from `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        other
            .iter()
            .fold(self.clone(), |set, element| set.insert(element.clone()))
    }

    /// Elements of `self` that are also in `other`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.retain(|element| other.contains(element))
    }

    /// Elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.retain(|element| !other.contains(element))
    }

    fn retain<P>(&self, mut keep: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.iter().fold(self.clone(), |set, element| {
            if keep(element) {
                set
            } else {
                set.remove(element)
            }
        })
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`TreeSet`], in order.
pub struct TreeSetIterator<'a, A> {
    elements: BalancedTreeIterator<'a, A>,
    remaining: usize,
}

impl<'a, A> Iterator for TreeSetIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for TreeSetIterator<'_, A> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<A> FusedIterator for TreeSetIterator<'_, A> {}

/// An owning iterator over the elements of a [`TreeSet`], in order.
pub struct TreeSetIntoIterator<A> {
    elements: BalancedTreeIntoIterator<A>,
    remaining: usize,
}

impl<A: Clone> Iterator for TreeSetIntoIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A: Clone> ExactSizeIterator for TreeSetIntoIterator<A> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<A: Clone> FusedIterator for TreeSetIntoIterator<A> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A, C> Clone for TreeSet<A, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            length: self.length,
        }
    }
}

impl<A, C: Default> Default for TreeSet<A, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<A: Clone, C: Comparator<A> + Default> FromIterator<A> for TreeSet<A, C> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |set, element| set.insert(element))
    }
}

impl<A: Clone, C: Comparator<A>> Extend<A> for TreeSet<A, C> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        for element in iter {
            *self = self.insert(element);
        }
    }
}

impl<A: Clone, C> IntoIterator for TreeSet<A, C> {
    type Item = A;
    type IntoIter = TreeSetIntoIterator<A>;

    fn into_iter(self) -> Self::IntoIter {
        TreeSetIntoIterator {
            remaining: self.length,
            elements: self.tree.into_iter(),
        }
    }
}

impl<'a, A, C> IntoIterator for &'a TreeSet<A, C> {
    type Item = &'a A;
    type IntoIter = TreeSetIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: PartialEq, C> PartialEq for TreeSet<A, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<A: Eq, C> Eq for TreeSet<A, C> {}

impl<A: Hash, C> Hash for TreeSet<A, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<A: fmt::Debug, C> fmt::Debug for TreeSet<A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display, C> fmt::Display for TreeSet<A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, formatter)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, C> TypeConstructor for TreeSet<A, C> {
    type Inner = A;
    type WithType<B> = TreeSet<B, C>;
}

impl<A: Clone, C> Foldable for TreeSet<A, C> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.tree.fold_right(init, function)
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

impl<A: Clone, C: Comparator<A>> Semigroup for TreeSet<A, C> {
    fn combine(self, other: Self) -> Self {
        self.union(&other)
    }
}

impl<A: Clone, C: Comparator<A> + Default> Monoid for TreeSet<A, C> {
    fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize, C> serde::Serialize for TreeSet<A, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, A, C> serde::Deserialize<'de> for TreeSet<A, C>
where
    A: serde::Deserialize<'de> + Clone,
    C: Comparator<A> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tree = <BalancedTree<A, C> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self {
            length: tree.len(),
            tree,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
