//! Error types for the persistent ordered containers.
//!
//! Every operation on a tree either returns a complete new version or fails
//! before building anything, so these errors never describe a half-applied
//! edit. They only report calls made on input that cannot satisfy them.

use std::fmt;

use thiserror::Error;

/// The structural rules an AA-tree must satisfy at every node.
///
/// `Aa1` through `Aa4` are the level rules; `Order` is the search-tree rule
/// that in-order elements strictly ascend under the tree's comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invariant {
    /// The left child sits exactly one level below its parent.
    Aa1,
    /// The right child sits at the parent's level or one below.
    Aa2,
    /// The right grandchild sits strictly below its grandparent.
    Aa3,
    /// Every node above level one has two children.
    Aa4,
    /// Elements ascend strictly in order.
    Order,
}

impl fmt::Display for Invariant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::Aa1 => "AA1 (left child must be one level lower)",
            Self::Aa2 => "AA2 (right child must be at the same level or one lower)",
            Self::Aa3 => "AA3 (right grandchild must be strictly lower)",
            Self::Aa4 => "AA4 (nodes above level 1 must have two children)",
            Self::Order => "ordering (elements must ascend strictly)",
        };
        formatter.write_str(description)
    }
}

/// Errors reported by [`BalancedTree`](super::BalancedTree) and its adapters.
///
/// # Examples
///
/// ```rust
/// use strata::persistent::{BalancedTree, TreeError};
///
/// let tree: BalancedTree<i32> = BalancedTree::new();
/// assert_eq!(
///     tree.pop_last().unwrap_err(),
///     TreeError::EmptyTree { operation: "pop_last" }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An operation that needs at least one element was called on an empty tree.
    #[error("cannot {operation} on an empty tree")]
    EmptyTree {
        /// The name of the operation that was attempted.
        operation: &'static str,
    },

    /// A lookup that requires a match found nothing.
    #[error("no element matches the requested key")]
    NotFound,

    /// An iterator was asked for an element after it had been drained.
    #[error("iteration exhausted: no elements remain")]
    IterationExhausted,

    /// A structural check found a node breaking one of the tree's rules.
    #[error("invariant {invariant} violated at a node of level {level}")]
    InvariantViolated {
        /// The rule that was broken.
        invariant: Invariant,
        /// The level of the offending node.
        level: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_tree_display() {
        let error = TreeError::EmptyTree {
            operation: "pop_last",
        };
        assert_eq!(format!("{error}"), "cannot pop_last on an empty tree");
    }

    #[rstest]
    #[case(TreeError::NotFound, "no element matches the requested key")]
    #[case(
        TreeError::IterationExhausted,
        "iteration exhausted: no elements remain"
    )]
    fn test_unit_variants_display(#[case] error: TreeError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_invariant_violated_display_names_rule() {
        let error = TreeError::InvariantViolated {
            invariant: Invariant::Aa3,
            level: 2,
        };
        let message = error.to_string();
        assert!(message.starts_with("invariant AA3"));
        assert!(message.ends_with("level 2"));
    }

    #[rstest]
    fn test_tree_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&TreeError::NotFound);
    }
}
