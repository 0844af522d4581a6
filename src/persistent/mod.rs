//! Persistent (immutable) ordered containers.
//!
//! This module provides a balanced search tree and two adapters on top of it,
//! all of which use structural sharing to keep old versions alive cheaply:
//!
//! - [`BalancedTree`]: Persistent AA-tree ordered by a [`Comparator`] value
//! - [`TreeMap`]: Persistent ordered map (entries ordered by key)
//! - [`TreeSet`]: Persistent ordered set with union/intersection/difference
//!
//! # Structural Sharing
//!
//! An edit rebuilds only the nodes on the path from the root to the edited
//! position. Everything else is shared with the previous version, which
//! remains valid and unchanged.
//!
//! # Examples
//!
//! ## `BalancedTree`
//!
//! ```rust
//! use strata::persistent::BalancedTree;
//!
//! let tree = BalancedTree::new().insert(2).insert(1).insert(3);
//! assert_eq!(tree.first(), Some(&1));
//!
//! // Structural sharing: the original tree is preserved
//! let smaller = tree.delete(&2);
//! assert!(tree.contains(&2));     // Original unchanged
//! assert!(!smaller.contains(&2)); // New version
//! ```
//!
//! ## `TreeMap`
//!
//! ```rust
//! use strata::persistent::TreeMap;
//!
//! let map = TreeMap::new()
//!     .insert("one".to_string(), 1)
//!     .insert("two".to_string(), 2);
//!
//! let updated = map.insert("one".to_string(), 100);
//! assert_eq!(map.get(&"one".to_string()), Some(&1));       // Original unchanged
//! assert_eq!(updated.get(&"one".to_string()), Some(&100)); // New version
//! assert_eq!(updated.len(), 2);
//! ```
//!
//! ## `TreeSet`
//!
//! ```rust
//! use strata::persistent::TreeSet;
//!
//! let set: TreeSet<i32> = [1, 2, 3].into_iter().collect();
//! let other: TreeSet<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!(set.union(&other).len(), 4);        // {1, 2, 3, 4}
//! assert_eq!(set.intersection(&other).len(), 2); // {2, 3}
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod balanced;
mod error;
mod ordering;
mod treemap;
mod treeset;

pub use balanced::BalancedTree;
pub use balanced::BalancedTreeIntoIterator;
pub use balanced::BalancedTreeIterator;
pub use error::Invariant;
pub use error::TreeError;
pub use ordering::Comparator;
pub use ordering::FnOrder;
pub use ordering::NaturalOrder;
pub use ordering::ReverseOrder;
pub use treemap::TreeMap;
pub use treemap::TreeMapIntoIterator;
pub use treemap::TreeMapIterator;
pub use treeset::TreeSet;
pub use treeset::TreeSetIntoIterator;
pub use treeset::TreeSetIterator;

// With shared ownership through `Arc`, every handle crosses threads.
#[cfg(feature = "arc")]
mod thread_safety {
    use super::{BalancedTree, NaturalOrder, ReverseOrder, TreeMap, TreeSet};
    use static_assertions::assert_impl_all;

    assert_impl_all!(BalancedTree<i32>: Send, Sync);
    assert_impl_all!(BalancedTree<String, ReverseOrder<NaturalOrder>>: Send, Sync);
    assert_impl_all!(TreeMap<String, Vec<u8>>: Send, Sync);
    assert_impl_all!(TreeSet<u64>: Send, Sync);
}
