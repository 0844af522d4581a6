//! Type classes shared by the containers.
//!
//! Only the classes the ordered containers implement are provided:
//!
//! - [`TypeConstructor`]: GAT-based higher-kinded type emulation
//! - [`Foldable`]: reduce a container to a summary value
//! - [`Semigroup`]: associative `combine`
//! - [`Monoid`]: `Semigroup` with an identity element
//!
//! `TreeSet` combines by union and `TreeMap` by right-biased merge, so both
//! are monoids whenever their comparator has a `Default`.

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
