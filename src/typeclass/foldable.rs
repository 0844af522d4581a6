//! Foldable type class - reducing a container to a summary value.
//!
//! # Laws
//!
//! For an associative `f`, folding from either end agrees:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! and every fold sees the same elements as `to_list`:
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! The ordered containers fold in ascending comparator order.
//!
//! # Examples
//!
//! ```rust
//! use strata::typeclass::Foldable;
//! use strata::persistent::TreeSet;
//!
//! let set: TreeSet<i32> = [3, 1, 2].into_iter().collect();
//! let digits = set.fold_left(String::new(), |accumulator, element| {
//!     format!("{accumulator}{element}")
//! });
//! assert_eq!(digits, "123");
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// Data structures whose elements can be folded into a single value.
///
/// Only `fold_left` and `fold_right` are required; everything else is
/// derived from `fold_left`. Containers that know their size should override
/// `length` and `is_empty`.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last element to the first.
    ///
    /// ```rust
    /// use strata::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines the results in order.
    ///
    /// ```rust
    /// use strata::typeclass::Foldable;
    /// use strata::persistent::TreeSet;
    ///
    /// let words = vec!["b", "a", "b"];
    /// let distinct: TreeSet<&str> = words.fold_map(TreeSet::singleton);
    /// assert_eq!(distinct.to_string(), "[a, b]");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element, in fold order, that satisfies `predicate`.
    ///
    /// ```rust
    /// use strata::typeclass::Foldable;
    /// use strata::persistent::BalancedTree;
    ///
    /// let tree: BalancedTree<i32> = [5, 1, 9, 4].into_iter().collect();
    /// assert_eq!(tree.find_first(|element| *element > 4), Some(5));
    /// ```
    fn find_first<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone()
            .find_first(|element| predicate(element))
            .is_some()
    }

    /// Returns `true` if every element satisfies `predicate`; vacuously
    /// `true` when empty.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}
