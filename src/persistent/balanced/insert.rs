//! Insertion with bottom-up `skew` + `split` repair.

use std::cmp::Ordering;

use super::node::{AaTree, skew, split};
use crate::persistent::Comparator;

/// Inserts `element` below `tree`.
///
/// Returns `None` when an equal element is already present; the caller keeps
/// the original tree (and its stored element) in that case, so an existing
/// element is never replaced and nothing is allocated.
///
/// Every rebuilt ancestor passes through `skew` then `split`, which is enough
/// to restore AA1-AA4 along the whole path.
pub(crate) fn insert<A, C>(tree: &AaTree<A>, element: A, comparator: &C) -> Option<AaTree<A>>
where
    A: Clone,
    C: Comparator<A> + ?Sized,
{
    let AaTree::Node(node) = tree else {
        return Some(AaTree::leaf(element));
    };

    let rebuilt = match comparator.compare(&element, &node.key) {
        Ordering::Less => {
            let left = insert(&node.left, element, comparator)?;
            node.rebuild(node.level, left, node.right.clone())
        }
        Ordering::Greater => {
            let right = insert(&node.right, element, comparator)?;
            node.rebuild(node.level, node.left.clone(), right)
        }
        Ordering::Equal => return None,
    };
    Some(split(skew(rebuilt)))
}

#[cfg(test)]
mod tests {
    use super::super::node::tests::shape;
    use super::*;
    use crate::persistent::{NaturalOrder, ReverseOrder};
    use rstest::rstest;

    fn build(elements: &[i32]) -> AaTree<i32> {
        elements.iter().fold(AaTree::Empty, |tree, &element| {
            insert(&tree, element, &NaturalOrder).unwrap_or(tree)
        })
    }

    #[rstest]
    fn test_insert_into_empty_creates_leaf() {
        let tree = build(&[7]);
        assert_eq!(shape(&tree), vec![(1, 7)]);
    }

    #[rstest]
    fn test_ascending_run_is_split() {
        // 1, 2, 3 forms two right horizontal links which split lifts 2.
        let tree = build(&[1, 2, 3]);
        assert_eq!(shape(&tree), vec![(1, 1), (2, 2), (1, 3)]);
    }

    #[rstest]
    fn test_descending_run_is_skewed_then_split() {
        let tree = build(&[3, 2, 1]);
        assert_eq!(shape(&tree), vec![(1, 1), (2, 2), (1, 3)]);
    }

    #[rstest]
    fn test_equal_element_reports_unchanged() {
        let tree = build(&[1, 2, 3]);
        assert!(insert(&tree, 2, &NaturalOrder).is_none());
    }

    #[rstest]
    fn test_insert_respects_comparator() {
        let order = ReverseOrder(NaturalOrder);
        let tree = [1, 2, 3].iter().fold(AaTree::Empty, |tree, &element| {
            insert(&tree, element, &order).unwrap_or(tree)
        });
        let keys: Vec<i32> = shape(&tree).into_iter().map(|(_, key)| key).collect();
        assert_eq!(keys, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_untouched_subtree_is_shared() {
        let tree = build(&[20, 10, 30, 5, 15, 25, 35]);
        let grown = insert(&tree, 40, &NaturalOrder).unwrap_or_else(|| tree.clone());
        let (AaTree::Node(before), AaTree::Node(after)) = (&tree, &grown) else {
            panic!("both trees should be non-empty");
        };
        assert!(before.left.ptr_eq(&after.left));
    }
}
