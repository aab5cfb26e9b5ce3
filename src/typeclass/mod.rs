//! The fold protocol shared by the immutable containers.
//!
//! [`Foldable`] reduces any frozen container to a summary value without
//! the caller knowing which container it holds.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::ImmutableList;
//! use frozen::typeclass::Foldable;
//!
//! let total = ImmutableList::of([1, 2, 3]).fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 6);
//! ```

mod foldable;

pub use foldable::Foldable;
