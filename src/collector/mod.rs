//! Folding sequences into immutable containers.
//!
//! A [`CollectorImpl`] describes a fold in four stages:
//!
//! 1. `supply` creates an empty, mutable accumulator
//! 2. `accumulate` folds one element into it
//! 3. `combine` merges two partial accumulators (chunked or parallel folds)
//! 4. `finish` freezes the accumulator into the result
//!
//! [`ImmutableCollectors`] provides a collector for every container in
//! [`crate::immutable`].
//!
//! # Examples
//!
//! ```rust
//! use frozen::collector::ImmutableCollectors;
//!
//! let collector = ImmutableCollectors::to_immutable_sorted_set();
//! let whole = collector.collect([5, 3, 9, 3]);
//! let chunked = collector.collect_chunked([5, 3, 9, 3], 2);
//! assert_eq!(whole, chunked);
//! assert_eq!(whole.unwrap(), vec![3, 5, 9]);
//! ```

mod builder;
mod characteristic;
mod collector_impl;
mod collectors;

pub use builder::CollectorBuilder;
pub use characteristic::Characteristic;
pub use collector_impl::{Accumulator, CollectorImpl, Combiner, Finisher, Supplier};
pub use collectors::ImmutableCollectors;

static_assertions::assert_impl_all!(CollectorImpl<String, Vec<String>, usize>: Send, Sync);
