//! The algebraic tree representation and the two local rotations.
//!
//! A tree is either `Empty` or a reference-counted node carrying a level,
//! two subtrees and one element. Nodes are never changed after they are
//! built: every rotation below allocates the nodes whose fields differ and
//! hands the untouched subtrees over by reference.
//!
//! # Levels
//!
//! Each node caches an integer level (roughly the black height of the
//! equivalent red-black tree); `Empty` has level 0. For a node `N` at level
//! `L`:
//!
//! 1. AA1: `level(left(N)) == L - 1`
//! 2. AA2: `level(right(N))` is `L` (a horizontal link) or `L - 1`
//! 3. AA3: `level(right(right(N))) < L`
//! 4. AA4: if `L > 1`, both children are non-empty
//!
//! [`skew`] removes a left horizontal link and [`split`] removes two chained
//! right horizontal links. Neither recurses.

use super::super::ReferenceCounter;

/// A persistent AA-tree.
pub(crate) enum AaTree<A> {
    /// The empty tree, level 0.
    Empty,
    /// A shared, immutable node.
    Node(ReferenceCounter<AaNode<A>>),
}

/// A single immutable node.
pub(crate) struct AaNode<A> {
    pub(crate) level: u32,
    pub(crate) left: AaTree<A>,
    pub(crate) key: A,
    pub(crate) right: AaTree<A>,
}

impl<A> Clone for AaTree<A> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(ReferenceCounter::clone(node)),
        }
    }
}

impl<A> AaTree<A> {
    /// Allocates a new node.
    #[inline]
    pub(crate) fn node(level: u32, left: Self, key: A, right: Self) -> Self {
        Self::Node(ReferenceCounter::new(AaNode {
            level,
            left,
            key,
            right,
        }))
    }

    /// Allocates a fresh level-1 leaf.
    #[inline]
    pub(crate) fn leaf(key: A) -> Self {
        Self::node(1, Self::Empty, key, Self::Empty)
    }

    /// Returns the node behind this tree, if any.
    #[inline]
    pub(crate) const fn as_node(&self) -> Option<&ReferenceCounter<AaNode<A>>> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(node),
        }
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Level of the root; 0 for the empty tree.
    #[inline]
    pub(crate) fn level(&self) -> u32 {
        self.as_node().map_or(0, |node| node.level)
    }

    /// A node is single when it has no right horizontal link.
    ///
    /// The empty tree is not single.
    #[inline]
    pub(crate) fn is_single(&self) -> bool {
        self.as_node()
            .is_some_and(|node| node.right.level() < node.level)
    }

    /// Whether both trees are the same allocation (or both empty).
    #[inline]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Node(left), Self::Node(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        self.as_node().map_or(0, |node| {
            1 + node.left.height().max(node.right.height())
        })
    }
}

impl<A: Clone> AaNode<A> {
    /// Copies this node's element into a new node with the given shape.
    #[inline]
    pub(crate) fn rebuild(&self, level: u32, left: AaTree<A>, right: AaTree<A>) -> AaTree<A> {
        AaTree::node(level, left, self.key.clone(), right)
    }
}

/// Removes a left horizontal link with a right rotation.
///
/// ```text
///        x                 y
///       / \              /   \
///      y   c     ==>    a     x
///     / \                    / \
///    a   b                  b   c
/// ```
///
/// Applies only when `x` and `y` share a level; any other tree is returned
/// as-is.
pub(crate) fn skew<A: Clone>(tree: AaTree<A>) -> AaTree<A> {
    if let AaTree::Node(node) = &tree
        && let AaTree::Node(left) = &node.left
        && left.level == node.level
    {
        let lowered = node.rebuild(node.level, left.right.clone(), node.right.clone());
        return left.rebuild(node.level, left.left.clone(), lowered);
    }
    tree
}

/// Removes two chained right horizontal links with a left rotation,
/// promoting the middle node one level.
///
/// ```text
///     x                       y
///    / \                    /   \
///   a   y        ==>       x     z
///      / \                / \   / \
///     b   z              a   b c   d
///        / \
///       c   d
/// ```
///
/// Applies only when `x`, `y` and `z` share a level. The `z` subtree is
/// reused unchanged.
pub(crate) fn split<A: Clone>(tree: AaTree<A>) -> AaTree<A> {
    if let AaTree::Node(node) = &tree
        && let AaTree::Node(right) = &node.right
        && right.level == node.level
        && right.right.level() == node.level
    {
        tracing::trace!(
            target: "strata::balanced",
            level = node.level,
            "split promotes middle node"
        );
        let lowered = node.rebuild(node.level, node.left.clone(), right.left.clone());
        return right.rebuild(node.level + 1, lowered, right.right.clone());
    }
    tree
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    /// Collects `(level, key)` pairs in order, for shape assertions.
    pub(crate) fn shape<A: Clone>(tree: &AaTree<A>) -> Vec<(u32, A)> {
        let mut out = Vec::new();
        fn walk<A: Clone>(tree: &AaTree<A>, out: &mut Vec<(u32, A)>) {
            if let AaTree::Node(node) = tree {
                walk(&node.left, out);
                out.push((node.level, node.key.clone()));
                walk(&node.right, out);
            }
        }
        walk(tree, &mut out);
        out
    }

    fn root_key<A: Copy>(tree: &AaTree<A>) -> Option<A> {
        tree.as_node().map(|node| node.key)
    }

    #[rstest]
    fn test_empty_level_is_zero() {
        let tree: AaTree<i32> = AaTree::Empty;
        assert_eq!(tree.level(), 0);
        assert!(tree.is_empty());
        assert!(!tree.is_single());
    }

    #[rstest]
    fn test_leaf_is_single_level_one() {
        let tree = AaTree::leaf(1);
        assert_eq!(tree.level(), 1);
        assert!(tree.is_single());
    }

    #[rstest]
    fn test_horizontal_right_link_is_not_single() {
        let tree = AaTree::node(1, AaTree::Empty, 1, AaTree::leaf(2));
        assert!(!tree.is_single());
    }

    #[rstest]
    fn test_skew_rotates_left_horizontal_link() {
        // 2 at level 1 with left child 1 at level 1
        let tree = AaTree::node(1, AaTree::leaf(1), 2, AaTree::Empty);
        let skewed = skew(tree);
        assert_eq!(root_key(&skewed), Some(1));
        assert_eq!(shape(&skewed), vec![(1, 1), (1, 2)]);
        assert!(skewed.as_node().is_some_and(|node| node.left.is_empty()));
    }

    #[rstest]
    fn test_skew_leaves_valid_tree_alone() {
        let tree = AaTree::node(2, AaTree::leaf(1), 2, AaTree::leaf(3));
        let skewed = skew(tree.clone());
        assert!(skewed.ptr_eq(&tree));
    }

    #[rstest]
    fn test_split_promotes_middle_node() {
        let tree = AaTree::node(
            1,
            AaTree::Empty,
            1,
            AaTree::node(1, AaTree::Empty, 2, AaTree::leaf(3)),
        );
        let split_tree = split(tree);
        assert_eq!(root_key(&split_tree), Some(2));
        assert_eq!(split_tree.level(), 2);
        assert_eq!(shape(&split_tree), vec![(1, 1), (2, 2), (1, 3)]);
    }

    #[rstest]
    fn test_split_reuses_rightmost_subtree() {
        let rightmost = AaTree::leaf(3);
        let tree = AaTree::node(
            1,
            AaTree::Empty,
            1,
            AaTree::node(1, AaTree::Empty, 2, rightmost.clone()),
        );
        let split_tree = split(tree);
        let reused = split_tree
            .as_node()
            .is_some_and(|node| node.right.ptr_eq(&rightmost));
        assert!(reused);
    }

    #[rstest]
    fn test_split_leaves_single_horizontal_link_alone() {
        let tree = AaTree::node(1, AaTree::Empty, 1, AaTree::leaf(2));
        let split_tree = split(tree.clone());
        assert!(split_tree.ptr_eq(&tree));
    }

    #[rstest]
    fn test_height() {
        let tree = AaTree::node(2, AaTree::leaf(1), 2, AaTree::node(1, AaTree::Empty, 3, AaTree::leaf(4)));
        assert_eq!(tree.height(), 3);
        assert_eq!(AaTree::<i32>::Empty.height(), 0);
    }
}
