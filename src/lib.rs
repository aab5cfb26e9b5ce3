//! # frozen
//!
//! Immutable, read-only collections for Rust, with enum-specialized
//! variants and a fold protocol for building them.
//!
//! ## Overview
//!
//! A frozen container is created fully formed by a factory and never
//! changes afterwards. Every holder of a reference sees the same snapshot;
//! `unwrap` hands out a mutable copy instead of the storage itself.
//!
//! - **Containers**: `ImmutableList`, `ImmutableSet`, `ImmutableSortedSet`,
//!   `ImmutableMap` and `Entry`
//! - **Enum containers**: `ImmutableEnumSet`, `ImmutableEnumList`,
//!   `ImmutableEnumMap` over closed `Enumeration` types
//! - **Capabilities**: `Equalable` and `Fluent` value-equality and membership
//!   tests, and the `NoElement` placeholder type
//! - **Collectors**: `CollectorImpl` and `ImmutableCollectors` fold any
//!   iterator (sequential, chunked or parallel) into a frozen container
//!
//! ## Feature Flags
//!
//! - `typeclass`: the `Foldable` fold protocol
//! - `capability`: `Equalable`, `Fluent`, `NoElement`
//! - `immutable`: the containers
//! - `collector`: the fold protocol
//! - `derive`: `#[derive(Enumeration)]`
//! - `serde`: `Serialize`/`Deserialize` and `to_json_string`
//! - `rayon`: parallel collection
//! - `fxhash` / `ahash`: hasher for the hash-backed containers
//! - `full`: Enable all features except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use frozen::prelude::*;
//!
//! let list = ImmutableList::of([3, 1, 2, 3]);
//! let set = list.to_set();
//! assert_eq!(set.len(), 3);
//! assert!(2_i32.is_in_immutable_set(&set));
//!
//! let sorted = ImmutableCollectors::to_immutable_sorted_set().collect(list);
//! assert_eq!(sorted.unwrap(), vec![1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

extern crate self as frozen;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use frozen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CollectionError, MissingPart};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "capability")]
    pub use crate::capability::*;

    #[cfg(feature = "immutable")]
    pub use crate::immutable::*;

    #[cfg(feature = "collector")]
    pub use crate::collector::*;
}

pub mod error;

pub use error::{CollectionError, MissingPart};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "capability")]
pub mod capability;

#[cfg(feature = "immutable")]
pub mod immutable;

#[cfg(feature = "collector")]
pub mod collector;
