//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use strata::typeclass::{Monoid, Semigroup};
//! use strata::persistent::TreeSet;
//!
//! let set: TreeSet<i32> = [1, 2].into_iter().collect();
//! assert_eq!(TreeSet::empty().combine(set.clone()), set);
//! assert_eq!(String::empty(), "");
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every value of an iterator, starting from [`empty`](Self::empty).
    ///
    /// ```rust
    /// use strata::typeclass::Monoid;
    /// use strata::persistent::TreeSet;
    ///
    /// let sets = vec![TreeSet::singleton(2), TreeSet::singleton(1)];
    /// assert_eq!(TreeSet::combine_all(sets).to_string(), "[1, 2]");
    /// assert!(TreeSet::combine_all(Vec::<TreeSet<i32>>::new()).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_string_identity() {
        let value = String::from("abc");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn test_vec_combine_all() {
        let combined = Vec::combine_all(vec![vec![1], vec![], vec![2, 3]]);
        assert_eq!(combined, vec![1, 2, 3]);
    }
}
