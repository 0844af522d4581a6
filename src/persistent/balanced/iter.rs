//! In-order iterators driven by an explicit stack.
//!
//! The stack holds nodes whose left subtree has been entered but whose own
//! element has not been yielded yet. Its depth never exceeds the tree height,
//! which the AA rules keep logarithmic, so small trees iterate without a heap
//! allocation.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::{AaNode, AaTree};
use crate::persistent::{ReferenceCounter, TreeError};

/// Inline stack capacity; covers any tree with fewer than 2^16 elements.
const INLINE_DEPTH: usize = 32;

/// A borrowing iterator over the elements of a
/// [`BalancedTree`](super::BalancedTree), in ascending comparator order.
///
/// Several iterators may walk the same tree at once. An iterator cannot be
/// restarted; ask the tree for a new one instead.
pub struct BalancedTreeIterator<'a, A> {
    stack: SmallVec<[&'a AaNode<A>; INLINE_DEPTH]>,
}

impl<'a, A> BalancedTreeIterator<'a, A> {
    pub(crate) fn new(root: &'a AaTree<A>) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
        };
        iterator.descend_left(root);
        iterator
    }

    fn descend_left(&mut self, mut tree: &'a AaTree<A>) {
        while let AaTree::Node(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }

    /// Returns the next element, or an error once the iterator is drained.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IterationExhausted`] when no elements remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::persistent::{BalancedTree, TreeError};
    ///
    /// let tree: BalancedTree<i32> = [1].into_iter().collect();
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.try_next(), Ok(&1));
    /// assert_eq!(iterator.try_next(), Err(TreeError::IterationExhausted));
    /// ```
    pub fn try_next(&mut self) -> Result<&'a A, TreeError> {
        self.next().ok_or(TreeError::IterationExhausted)
    }
}

impl<'a, A> Iterator for BalancedTreeIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<A> FusedIterator for BalancedTreeIterator<'_, A> {}

impl<A> Clone for BalancedTreeIterator<'_, A> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

/// An owning iterator over the elements of a
/// [`BalancedTree`](super::BalancedTree), in ascending comparator order.
///
/// Nodes may still be shared with other versions, so elements are cloned out.
pub struct BalancedTreeIntoIterator<A> {
    stack: SmallVec<[ReferenceCounter<AaNode<A>>; INLINE_DEPTH]>,
}

impl<A> BalancedTreeIntoIterator<A> {
    pub(crate) fn new(root: AaTree<A>) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
        };
        iterator.descend_left(root);
        iterator
    }

    fn descend_left(&mut self, mut tree: AaTree<A>) {
        while let AaTree::Node(node) = tree {
            tree = node.left.clone();
            self.stack.push(node);
        }
    }
}

impl<A: Clone> BalancedTreeIntoIterator<A> {
    /// Returns the next element, or an error once the iterator is drained.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::IterationExhausted`] when no elements remain.
    pub fn try_next(&mut self) -> Result<A, TreeError> {
        self.next().ok_or(TreeError::IterationExhausted)
    }
}

impl<A: Clone> Iterator for BalancedTreeIntoIterator<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.clone());
        Some(node.key.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<A: Clone> FusedIterator for BalancedTreeIntoIterator<A> {}
