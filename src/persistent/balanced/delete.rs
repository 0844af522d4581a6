//! Deletion with bottom-up `adjust` repair.
//!
//! Removing an element can drop the level of one child by one. [`adjust`]
//! repairs the parent of such a child; it is applied to every rebuilt node on
//! the way back up, including the nodes rebuilt while extracting the in-order
//! predecessor in [`split_max`].

use std::cmp::Ordering;

use super::node::{AaNode, AaTree, skew, split};
use crate::persistent::TreeError;

/// Removes the element the probe reports as `Equal`.
///
/// `probe` returns where the sought key lies relative to the element it is
/// given. Returns `None` when nothing matches, so the caller can keep the
/// original tree.
pub(crate) fn delete<A, P>(tree: &AaTree<A>, probe: &mut P) -> Option<AaTree<A>>
where
    A: Clone,
    P: FnMut(&A) -> Ordering,
{
    let node = tree.as_node()?;
    match probe(&node.key) {
        Ordering::Less => {
            let left = delete(&node.left, probe)?;
            Some(adjust(node.rebuild(node.level, left, node.right.clone())))
        }
        Ordering::Greater => {
            let right = delete(&node.right, probe)?;
            Some(adjust(node.rebuild(node.level, node.left.clone(), right)))
        }
        Ordering::Equal => Some(remove_node(node)),
    }
}

/// Replaces a matched node with what should stand in its place.
fn remove_node<A: Clone>(node: &AaNode<A>) -> AaTree<A> {
    let AaTree::Node(left) = &node.left else {
        return node.right.clone();
    };
    if node.right.is_empty() {
        return node.left.clone();
    }
    let (left, predecessor) = split_max_node(left);
    adjust(AaTree::node(node.level, left, predecessor, node.right.clone()))
}

/// Removes the maximum element of a subtree, returning the remaining subtree
/// and the removed element.
///
/// # Errors
///
/// Returns [`TreeError::EmptyTree`] when `tree` is empty.
pub(crate) fn split_max<A: Clone>(tree: &AaTree<A>) -> Result<(AaTree<A>, A), TreeError> {
    tree.as_node()
        .map(|node| split_max_node(node))
        .ok_or(TreeError::EmptyTree {
            operation: "pop_last",
        })
}

fn split_max_node<A: Clone>(node: &AaNode<A>) -> (AaTree<A>, A) {
    match &node.right {
        AaTree::Empty => {
            tracing::trace!(
                target: "strata::balanced",
                level = node.level,
                "extracted maximum"
            );
            (node.left.clone(), node.key.clone())
        }
        AaTree::Node(right) => {
            let (right, maximum) = split_max_node(right);
            let rebuilt = adjust(node.rebuild(node.level, node.left.clone(), right));
            (rebuilt, maximum)
        }
    }
}

/// Rebalances a node whose children may sit one level too low after a
/// deletion below it.
///
/// The cases are tried in order; each later case assumes the earlier ones
/// did not apply.
pub(crate) fn adjust<A: Clone>(tree: AaTree<A>) -> AaTree<A> {
    let AaTree::Node(node) = &tree else {
        return tree;
    };
    let level = node.level;
    let left_level = node.left.level();
    let right_level = node.right.level();

    // Case 1: both children within one level.
    if left_level + 1 >= level && right_level + 1 >= level {
        return tree;
    }

    if right_level + 1 < level {
        // Case 2: right too low, left single. Lower the node and fix the
        // left horizontal link that creates.
        if node.left.is_single() {
            trace_case(2, level);
            return skew(node.rebuild(level - 1, node.left.clone(), node.right.clone()));
        }

        // Case 3: right too low, left double. Lift the left child's right
        // child to the top.
        if let AaTree::Node(left) = &node.left
            && let AaTree::Node(left_right) = &left.right
        {
            trace_case(3, level);
            return left_right.rebuild(
                left_right.level + 1,
                left.rebuild(left.level, left.left.clone(), left_right.left.clone()),
                node.rebuild(level - 1, left_right.right.clone(), node.right.clone()),
            );
        }
    } else if right_level < level {
        // Case 4: left too low, right single. Lower the node; its right child
        // becomes horizontal and may need a split.
        trace_case(4, level);
        return split(node.rebuild(level - 1, node.left.clone(), node.right.clone()));
    } else if let AaTree::Node(right) = &node.right
        && let AaTree::Node(right_left) = &right.left
    {
        // Case 5: left too low, right double. Lift the right child's left
        // child to the top and split what remains on the right.
        trace_case(5, level);
        let child_level = if right.left.is_single() {
            right_left.level
        } else {
            right_left.level + 1
        };
        return right_left.rebuild(
            right_left.level + 1,
            node.rebuild(level - 1, node.left.clone(), right_left.left.clone()),
            split(right.rebuild(child_level, right_left.right.clone(), right.right.clone())),
        );
    }

    tracing::error!(
        target: "strata::balanced",
        level,
        left_level,
        right_level,
        "adjust reached a node outside the AA-tree shape"
    );
    if cfg!(debug_assertions) {
        unreachable!("adjust: level {level} node with children at {left_level}/{right_level}");
    }
    tree
}

fn trace_case(case: u8, level: u32) {
    tracing::trace!(target: "strata::balanced", case, level, "adjust rebalanced node");
}
