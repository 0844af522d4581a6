//! # strata
//!
//! Persistent ordered containers for Rust, built on an AA-tree whose order
//! is a value supplied by the caller rather than a trait on the elements.
//!
//! ## Overview
//!
//! - **Balanced tree**: [`BalancedTree`](persistent::BalancedTree), a
//!   persistent AA-tree with path-copying edits and explicit-stack iteration
//! - **Comparators**: [`Comparator`](persistent::Comparator) values, including
//!   closures, natural and reversed order
//! - **Adapters**: [`TreeMap`](persistent::TreeMap) and
//!   [`TreeSet`](persistent::TreeSet) with O(1) length
//! - **Type Classes**: `Foldable`, `Semigroup`, `Monoid` over the containers
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `persistent`: Persistent containers (enabled by default)
//! - `arc`: Share nodes through `Arc` so containers are `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for the containers
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let tree = BalancedTree::with_comparator(ReverseOrder(NaturalOrder))
//!     .insert(1)
//!     .insert(3)
//!     .insert(2);
//! assert_eq!(tree.to_string(), "[3, 2, 1]");
//!
//! let total = tree.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, comparators and type classes.
///
/// # Usage
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
