//! Caller-supplied orderings.
//!
//! Trees in this crate never ask their elements to implement `Ord`. Instead a
//! [`Comparator`] value is handed to the tree when it is created and stays
//! with every version derived from it. This lets the same element type live
//! in trees with different orders, and lets an ordered map compare only the
//! key half of its entries.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use strata::persistent::{BalancedTree, Comparator, NaturalOrder, ReverseOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(ReverseOrder(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! // Any closure of the right shape is a comparator too.
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! let tree = BalancedTree::of(by_length, ["ccc", "a", "bb"]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec!["a", "bb", "ccc"]);
//! ```
//!
//! The comparator must be a total order. A comparator that is not gives
//! unspecified (but memory-safe) results; this is not detected at runtime.

use std::cmp::Ordering;
use std::fmt;

/// A total order over `A`, kept as a value alongside a tree's root.
pub trait Comparator<A: ?Sized> {
    /// Compares two elements.
    fn compare(&self, left: &A, right: &A) -> Ordering;
}

impl<A: ?Sized, F> Comparator<A> for F
where
    F: Fn(&A, &A) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &A, right: &A) -> Ordering {
        self(left, right)
    }
}

/// The order given by the element type's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<A: Ord + ?Sized> Comparator<A> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &A, right: &A) -> Ordering {
        left.cmp(right)
    }
}

/// Flips the order of an inner comparator.
///
/// ```rust
/// use strata::persistent::{BalancedTree, ReverseOrder, NaturalOrder};
///
/// let tree = BalancedTree::of(ReverseOrder(NaturalOrder), ["apple", "banana", "cherry"]);
/// let elements: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(elements, vec!["cherry", "banana", "apple"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C = NaturalOrder>(pub C);

impl<A: ?Sized, C: Comparator<A>> Comparator<A> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, left: &A, right: &A) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Names a comparison function so that it can be stored in a struct field
/// with a nameable type.
///
/// Closures are already comparators; `FnOrder` is useful when the tree type
/// has to be written down, e.g. with a plain `fn` pointer.
///
/// ```rust
/// use std::cmp::Ordering;
/// use strata::persistent::{BalancedTree, FnOrder};
///
/// fn by_magnitude(left: &i32, right: &i32) -> Ordering {
///     left.unsigned_abs().cmp(&right.unsigned_abs())
/// }
///
/// type MagnitudeTree = BalancedTree<i32, FnOrder<fn(&i32, &i32) -> Ordering>>;
/// let tree: MagnitudeTree = BalancedTree::of(FnOrder(by_magnitude as fn(&i32, &i32) -> Ordering), [-3, 1, 2]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, -3]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnOrder<F>(pub F);

impl<A: ?Sized, F> Comparator<A> for FnOrder<F>
where
    F: Fn(&A, &A) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &A, right: &A) -> Ordering {
        (self.0)(left, right)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnOrder(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_order(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.compare(&left, &right), expected);
    }

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Less)]
    fn test_reverse_order(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(ReverseOrder(NaturalOrder).compare(&left, &right), expected);
    }

    #[rstest]
    fn test_double_reverse_is_natural() {
        let order = ReverseOrder(ReverseOrder(NaturalOrder));
        assert_eq!(order.compare(&1, &2), Ordering::Less);
    }

    #[rstest]
    fn test_closure_is_comparator() {
        let by_length = |left: &String, right: &String| left.len().cmp(&right.len());
        assert_eq!(
            by_length.compare(&"ab".to_string(), &"abc".to_string()),
            Ordering::Less
        );
    }

    #[rstest]
    fn test_natural_order_on_unsized() {
        assert_eq!(NaturalOrder.compare("apple", "banana"), Ordering::Less);
    }

    #[rstest]
    fn test_fn_order_debug_is_opaque() {
        let order = FnOrder(|left: &i32, right: &i32| left.cmp(right));
        assert_eq!(format!("{order:?}"), "FnOrder(..)");
        assert_eq!(order.compare(&5, &4), Ordering::Greater);
    }
}
