//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use strata::typeclass::Semigroup;
//! use strata::persistent::TreeSet;
//!
//! // Set union
//! let left: TreeSet<i32> = [1, 2].into_iter().collect();
//! let right: TreeSet<i32> = [2, 3].into_iter().collect();
//! assert_eq!(left.combine(right).to_string(), "[1, 2, 3]");
//!
//! // Vec concatenation
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

/// A type with an associative `combine`.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning them first.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every value of an iterator from left to right.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// ```rust
    /// use strata::typeclass::Semigroup;
    /// use strata::persistent::TreeMap;
    ///
    /// let maps = vec![
    ///     TreeMap::singleton(1, "a"),
    ///     TreeMap::singleton(1, "b"),
    ///     TreeMap::singleton(2, "c"),
    /// ];
    /// let merged = TreeMap::reduce_all(maps);
    /// assert_eq!(merged.map(|map| map.to_string()), Some("{1: b, 2: c}".to_string()));
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
