//! Immutable (frozen) collections.
//!
//! Every container in this module is built once, by a factory, and never
//! changes afterwards:
//!
//! - [`ImmutableList`]: ordered sequence, duplicates kept
//! - [`ImmutableSet`]: hash set of distinct elements
//! - [`ImmutableSortedSet`]: distinct elements in comparator order
//! - [`ImmutableMap`]: hash map, with [`Entry`] pairs as its entry view
//! - [`ImmutableEnumSet`], [`ImmutableEnumList`], [`ImmutableEnumMap`]:
//!   the same shapes specialized to [`Enumeration`] elements
//!
//! # Snapshots
//!
//! Containers hold their data behind an `Arc`. Cloning a container shares
//! the snapshot; `deep_clone` copies it; `unwrap` returns a mutable copy
//! the caller owns. No operation reaches the frozen storage mutably.
//!
//! # Missing input
//!
//! Sources that may contain gaps are passed as `Option`s to `try_of` (or a
//! builder). The first `None` fails the whole call with a
//! [`CollectionError`](crate::CollectionError); no partial container is
//! ever produced.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::{ImmutableList, ImmutableSet};
//!
//! let list = ImmutableList::of(["ice", "snow", "ice"]);
//! let set: ImmutableSet<&str> = list.to_set();
//! assert_eq!(list.len(), 3);
//! assert_eq!(set.len(), 2);
//!
//! let sorted = set.to_sorted_set();
//! assert_eq!(sorted.first(), Some(&"ice"));
//! ```
//!
//! # Hashing
//!
//! Hash-backed containers use [`HashBuilder`]: `rustc-hash` with the
//! `fxhash` feature, `ahash` with the `ahash` feature, and the standard
//! library's `RandomState` otherwise.

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hasher used by [`ImmutableSet`] and [`ImmutableMap`].
#[cfg(feature = "fxhash")]
pub type HashBuilder = rustc_hash::FxBuildHasher;

/// Hasher used by [`ImmutableSet`] and [`ImmutableMap`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type HashBuilder = ahash::RandomState;

/// Hasher used by [`ImmutableSet`] and [`ImmutableMap`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type HashBuilder = std::collections::hash_map::RandomState;

mod builder;
mod display;
mod element_type;
mod entry;
mod enum_bitset;
mod enum_list;
mod enum_map;
mod enum_set;
mod enumeration;
mod list;
mod macros;
mod map;
mod set;
mod sorted_set;
mod validate;

pub use builder::{ListBuilder, MapBuilder, SetBuilder};
pub use display::DISPLAY_LIMIT;
pub use element_type::ElementType;
pub use entry::Entry;
pub use enum_bitset::{EnumBitSet, EnumBitSetIntoIterator, EnumBitSetIterator};
pub use enum_list::ImmutableEnumList;
pub use enum_map::{ImmutableEnumMap, ImmutableEnumMapIterator};
pub use enum_set::ImmutableEnumSet;
pub use enumeration::Enumeration;
pub use list::{ImmutableList, ImmutableListIntoIterator, ImmutableListIterator};
pub use map::{ImmutableMap, ImmutableMapIterator};
pub use set::{ImmutableSet, ImmutableSetIntoIterator, ImmutableSetIterator};
pub use sorted_set::{Comparator, ImmutableSortedSet, ImmutableSortedSetIterator};

#[cfg(feature = "derive")]
pub use frozen_derive::Enumeration;

static_assertions::assert_impl_all!(ImmutableList<String>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableSet<String>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableSortedSet<String>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableMap<String, String>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableEnumSet<crate::capability::NoElement>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableEnumList<crate::capability::NoElement>: Send, Sync);
static_assertions::assert_impl_all!(ImmutableEnumMap<crate::capability::NoElement, String>: Send, Sync);
