//! Persistent balanced search tree (AA-tree) ordered by a comparator value.
//!
//! This module provides [`BalancedTree`], the core that the ordered map and
//! set adapters are built on.
//!
//! # Overview
//!
//! An AA-tree is a red-black tree in disguise: instead of a color, every node
//! carries an integer level, and only right children may share their parent's
//! level. Two local rotations, `skew` and `split`, repair the tree after an
//! insertion; a five-case `adjust` repairs it after a deletion.
//!
//! - O(log N) insert, delete, find, contains
//! - O(log N) first/last
//! - O(N) len (computed by folding; the adapters track their own sizes)
//! - O(1) `is_empty` and clone
//!
//! Every edit returns a new tree. Nodes off the edited path are shared with
//! the previous version, which stays valid and unchanged.
//!
//! # Examples
//!
//! ```rust
//! use strata::persistent::BalancedTree;
//!
//! let tree: BalancedTree<i32> = [20, 10, 30, 5, 15, 25, 35].into_iter().collect();
//! let trimmed = tree.delete(&20);
//!
//! assert!(tree.contains(&20));          // Original unchanged
//! assert!(!trimmed.contains(&20));      // New version
//! assert_eq!(
//!     trimmed.iter().copied().collect::<Vec<_>>(),
//!     vec![5, 10, 15, 25, 30, 35]
//! );
//! ```

mod delete;
mod insert;
mod iter;
mod node;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

pub use iter::{BalancedTreeIntoIterator, BalancedTreeIterator};
use node::AaTree;

use super::{Comparator, Invariant, NaturalOrder, ReferenceCounter, TreeError};
use crate::typeclass::{Foldable, TypeConstructor};

// =============================================================================
// BalancedTree Definition
// =============================================================================

/// A persistent (immutable) ordered collection based on an AA-tree.
///
/// The order comes from a [`Comparator`] supplied when the tree is created,
/// not from the element type. All versions derived from a tree share its
/// comparator.
///
/// Elements that compare equal are stored once. Inserting an element equal
/// to one already present keeps the stored element and returns a tree that
/// shares the original root; see [`TreeMap`](super::TreeMap) for replacing
/// values.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `insert`       | O(log N)   |
/// | `delete`       | O(log N)   |
/// | `find`         | O(log N)   |
/// | `contains`     | O(log N)   |
/// | `first`/`last` | O(log N)   |
/// | `pop_last`     | O(log N)   |
/// | `len`          | O(N)       |
/// | `is_empty`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use strata::persistent::{BalancedTree, ReverseOrder, NaturalOrder};
///
/// let tree = BalancedTree::with_comparator(ReverseOrder(NaturalOrder))
///     .insert("apple")
///     .insert("banana")
///     .insert("cherry");
///
/// let elements: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(elements, vec!["cherry", "banana", "apple"]);
/// ```
pub struct BalancedTree<A, C = NaturalOrder> {
    root: AaTree<A>,
    comparator: ReferenceCounter<C>,
}

impl<A> BalancedTree<A, NaturalOrder> {
    /// Creates an empty tree ordered by the element type's `Ord`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<A, C> BalancedTree<A, C> {
    /// Creates an empty tree ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: AaTree::Empty,
            comparator: ReferenceCounter::new(comparator),
        }
    }

    /// Wraps a new root with this tree's comparator.
    #[inline]
    fn with_root(&self, root: AaTree<A>) -> Self {
        Self {
            root,
            comparator: ReferenceCounter::clone(&self.comparator),
        }
    }

    /// Returns the comparator that orders this tree.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns `true` if the tree contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the number of elements, counted by folding over the tree.
    ///
    /// # Complexity
    ///
    /// O(N). [`TreeSet`](super::TreeSet) and [`TreeMap`](super::TreeMap)
    /// keep an O(1) count instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.fold(0, |count, _| count + 1)
    }

    /// Reduces the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [3, 1, 2].into_iter().collect();
    /// let digits = tree.fold(String::new(), |mut accumulator, element| {
    ///     accumulator.push_str(&element.to_string());
    ///     accumulator
    /// });
    /// assert_eq!(digits, "123");
    /// ```
    pub fn fold<B, F>(&self, seed: B, function: F) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        self.iter().fold(seed, function)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator keeps an explicit stack no deeper than the tree height.
    #[must_use]
    pub fn iter(&self) -> BalancedTreeIterator<'_, A> {
        BalancedTreeIterator::new(&self.root)
    }

    /// Returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.first(), Some(&1));
    /// assert_eq!(tree.last(), Some(&3));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&A> {
        let mut node = self.root.as_node()?;
        while let Some(left) = node.left.as_node() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest element.
    #[must_use]
    pub fn last(&self) -> Option<&A> {
        let mut node = self.root.as_node()?;
        while let Some(right) = node.right.as_node() {
            node = right;
        }
        Some(&node.key)
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// # Complexity
    ///
    /// O(N)
    #[must_use]
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Level of the root node; 0 for the empty tree.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.root.level()
    }

    /// Returns `true` if both trees share the same root allocation.
    ///
    /// Operations that leave a tree unchanged (inserting a present element,
    /// deleting an absent one) return a tree that is `ptr_eq` to the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(tree.insert(2).ptr_eq(&tree));
    /// assert!(tree.delete(&9).ptr_eq(&tree));
    /// assert!(!tree.insert(4).ptr_eq(&tree));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.root.ptr_eq(&other.root)
    }
}

impl<A, C: Comparator<A>> BalancedTree<A, C> {
    /// Returns the stored element that compares equal to `key`.
    ///
    /// The returned element need not be `key` itself: under a comparator that
    /// only looks at part of an element, it is whatever was stored.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let by_name = |left: &(&str, u32), right: &(&str, u32)| left.0.cmp(right.0);
    /// let tree = BalancedTree::of(by_name, [("ada", 36), ("alan", 41)]);
    ///
    /// assert_eq!(tree.find(&("ada", 0)), Some(&("ada", 36)));
    /// assert_eq!(tree.find(&("grace", 0)), None);
    /// ```
    #[must_use]
    pub fn find(&self, key: &A) -> Option<&A> {
        let comparator = &*self.comparator;
        self.find_by(|element| comparator.compare(key, element))
    }

    /// Descends with a caller-supplied probe instead of a key.
    ///
    /// `probe` is given a stored element and returns where the sought item
    /// lies relative to it (`Less` to go left, `Greater` to go right). The
    /// probe must agree with the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let by_name = |left: &(&str, u32), right: &(&str, u32)| left.0.cmp(right.0);
    /// let tree = BalancedTree::of(by_name, [("ada", 36), ("alan", 41)]);
    ///
    /// let found = tree.find_by(|element| "alan".cmp(element.0));
    /// assert_eq!(found, Some(&("alan", 41)));
    /// ```
    pub fn find_by<P>(&self, mut probe: P) -> Option<&A>
    where
        P: FnMut(&A) -> Ordering,
    {
        let mut tree = &self.root;
        while let AaTree::Node(node) = tree {
            match probe(&node.key) {
                Ordering::Less => tree = &node.left,
                Ordering::Greater => tree = &node.right,
                Ordering::Equal => return Some(&node.key),
            }
        }
        None
    }

    /// Like [`find`](Self::find), but reports a missing element as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] when no element compares equal to `key`.
    pub fn try_find(&self, key: &A) -> Result<&A, TreeError> {
        self.find(key).ok_or(TreeError::NotFound)
    }

    /// Returns `true` if an element equal to `key` is present.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn contains(&self, key: &A) -> bool {
        self.find(key).is_some()
    }

    /// Checks every node against AA1-AA4 and checks that elements ascend
    /// strictly under the comparator.
    ///
    /// Trees built through this API always pass; this is a diagnostic for
    /// tests and for comparators of doubtful totality.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvariantViolated`] naming the first rule broken.
    pub fn validate(&self) -> Result<(), TreeError> {
        check_levels(&self.root)?;
        let mut previous: Option<&A> = None;
        for element in self {
            if let Some(before) = previous
                && self.comparator.compare(before, element) != Ordering::Less
            {
                return Err(TreeError::InvariantViolated {
                    invariant: Invariant::Order,
                    level: 0,
                });
            }
            previous = Some(element);
        }
        Ok(())
    }
}

impl<A: Clone, C: Comparator<A>> BalancedTree<A, C> {
    /// Builds a tree from `elements` by repeated insertion.
    ///
    /// Later duplicates are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::{BalancedTree, NaturalOrder};
    ///
    /// let tree = BalancedTree::of(NaturalOrder, [10, 5, 15, 3, 7, 12, 18]);
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.first(), Some(&3));
    /// ```
    #[must_use]
    pub fn of<I>(comparator: C, elements: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        elements
            .into_iter()
            .fold(Self::with_comparator(comparator), |tree, element| {
                tree.insert(element)
            })
    }

    /// Inserts an element.
    ///
    /// If an equal element is already present the tree is returned
    /// unchanged (sharing the same root) and the stored element is kept.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree = BalancedTree::new().insert(10).insert(10);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub fn insert(&self, element: A) -> Self {
        match insert::insert(&self.root, element, &*self.comparator) {
            Some(root) => self.with_root(root),
            None => self.clone(),
        }
    }

    /// Removes the element equal to `key`, if present.
    ///
    /// Deleting an absent key returns the tree unchanged.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [1, 2, 3].into_iter().collect();
    /// let removed = tree.delete(&2);
    /// assert_eq!(removed.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[must_use]
    pub fn delete(&self, key: &A) -> Self {
        let comparator = &*self.comparator;
        self.delete_by(|element| comparator.compare(key, element))
    }

    /// Removes the element matched by `probe`, if any.
    ///
    /// `probe` follows the same contract as in [`find_by`](Self::find_by).
    #[must_use]
    pub fn delete_by<P>(&self, mut probe: P) -> Self
    where
        P: FnMut(&A) -> Ordering,
    {
        match delete::delete(&self.root, &mut probe) {
            Some(root) => self.with_root(root),
            None => self.clone(),
        }
    }

    /// Removes the largest element, returning the remaining tree and the
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [1, 2, 3].into_iter().collect();
    /// let (rest, largest) = tree.pop_last()?;
    /// assert_eq!(largest, 3);
    /// assert_eq!(rest.len(), 2);
    /// # Ok::<(), strata::persistent::TreeError>(())
    /// ```
    pub fn pop_last(&self) -> Result<(Self, A), TreeError> {
        let (root, maximum) = delete::split_max(&self.root)?;
        Ok((self.with_root(root), maximum))
    }
}

/// Walks the tree checking the level rules at every node.
fn check_levels<A>(tree: &AaTree<A>) -> Result<(), TreeError> {
    let Some(node) = tree.as_node() else {
        return Ok(());
    };
    let level = node.level;
    let violated = |invariant| TreeError::InvariantViolated { invariant, level };

    if level == 0 || node.left.level() + 1 != level {
        return Err(violated(Invariant::Aa1));
    }
    let right_level = node.right.level();
    if right_level != level && right_level + 1 != level {
        return Err(violated(Invariant::Aa2));
    }
    if let Some(right) = node.right.as_node()
        && right.right.level() >= level
    {
        return Err(violated(Invariant::Aa3));
    }
    if level > 1 && (node.left.is_empty() || node.right.is_empty()) {
        return Err(violated(Invariant::Aa4));
    }
    check_levels(&node.left)?;
    check_levels(&node.right)
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A, C> Clone for BalancedTree<A, C> {
    #[inline]
    fn clone(&self) -> Self {
        self.with_root(self.root.clone())
    }
}

impl<A, C: Default> Default for BalancedTree<A, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<A: Clone, C: Comparator<A> + Default> FromIterator<A> for BalancedTree<A, C> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::of(C::default(), iter)
    }
}

impl<A: Clone, C: Comparator<A>> Extend<A> for BalancedTree<A, C> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        for element in iter {
            *self = self.insert(element);
        }
    }
}

impl<A: Clone, C> IntoIterator for BalancedTree<A, C> {
    type Item = A;
    type IntoIter = BalancedTreeIntoIterator<A>;

    fn into_iter(self) -> Self::IntoIter {
        BalancedTreeIntoIterator::new(self.root)
    }
}

impl<'a, A, C> IntoIterator for &'a BalancedTree<A, C> {
    type Item = &'a A;
    type IntoIter = BalancedTreeIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: PartialEq, C> PartialEq for BalancedTree<A, C> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<A: Eq, C> Eq for BalancedTree<A, C> {}

impl<A: Hash, C> Hash for BalancedTree<A, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self {
            element.hash(state);
        }
    }
}

impl<A: fmt::Debug, C> fmt::Debug for BalancedTree<A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display, C> fmt::Display for BalancedTree<A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, C> TypeConstructor for BalancedTree<A, C> {
    type Inner = A;
    type WithType<B> = BalancedTree<B, C>;
}

impl<A: Clone, C> Foldable for BalancedTree<A, C> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        let elements: Vec<A> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize, C> serde::Serialize for BalancedTree<A, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct BalancedTreeVisitor<A, C> {
    marker: std::marker::PhantomData<(A, C)>,
}

#[cfg(feature = "serde")]
impl<'de, A, C> serde::de::Visitor<'de> for BalancedTreeVisitor<A, C>
where
    A: serde::Deserialize<'de> + Clone,
    C: Comparator<A> + Default,
{
    type Value = BalancedTree<A, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut access: S) -> Result<Self::Value, S::Error>
    where
        S: serde::de::SeqAccess<'de>,
    {
        let mut tree = BalancedTree::default();
        while let Some(element) = access.next_element()? {
            tree = tree.insert(element);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, A, C> serde::Deserialize<'de> for BalancedTree<A, C>
where
    A: serde::Deserialize<'de> + Clone,
    C: Comparator<A> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BalancedTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
