//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `TreeSet<_>` directly.
//! [`TypeConstructor`] names the element type of a container and the same
//! container re-applied to another element type, which is enough for
//! [`Foldable`](super::Foldable) to talk about "the elements" of any of them.
//!
//! # Example
//!
//! ```rust
//! use strata::typeclass::TypeConstructor;
//! use strata::persistent::TreeSet;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: TreeSet<i32> = [1, 2, 3].into_iter().collect();
//! let names: TreeSet<String> = emptied(numbers);
//! assert!(names.is_empty());
//! ```

/// A container type viewed as a type constructor applied to `Inner`.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same container holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
