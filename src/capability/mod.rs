//! Capability traits attached to every element type.
//!
//! - [`Equalable`]: value-equality predicates and their negations
//! - [`Fluent`]: membership predicates over slices, iterators, sets and
//!   the immutable containers of this crate
//! - [`NoElement`]: the uninhabited placeholder element type
//!
//! Both traits are implemented for every `PartialEq` type through blanket
//! implementations; nothing needs to opt in.
//!
//! # Examples
//!
//! ```rust
//! use frozen::capability::{Equalable, Fluent};
//!
//! assert!(3_i32.is_equal_to(&3));
//! assert!("b".is_in(["a", "b", "c"]));
//! assert!(10_i32.is_not_in_slice(&[1, 2, 3]));
//! ```

mod equalable;
mod fluent;
mod no_element;

pub use equalable::Equalable;
pub use fluent::Fluent;
pub use no_element::NoElement;
