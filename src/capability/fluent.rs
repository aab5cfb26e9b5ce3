//! Membership predicates.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use super::Equalable;

#[cfg(feature = "immutable")]
use crate::immutable::{
    Enumeration, ImmutableEnumSet, ImmutableList, ImmutableSet, ImmutableSortedSet,
};

/// Membership predicates for any value with value equality.
///
/// Each `is_in*` method returns `true` iff the receiver equals, by the
/// [`Equalable`] contract, at least one candidate. Lookups against hashed,
/// sorted, or enum-keyed containers use their index instead of scanning.
///
/// # Examples
///
/// ```rust
/// use frozen::capability::Fluent;
/// use frozen::immutable::ImmutableList;
///
/// let primes = ImmutableList::of([2, 3, 5, 7]);
/// assert!(5_i32.is_in_list(&primes));
/// assert!(4_i32.is_not_in(primes.iter()));
/// assert!('x'.is_in_values("xyz".chars()));
/// ```
pub trait Fluent: Equalable {
    /// Returns `true` if the receiver equals any candidate.
    fn is_in<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Self>,
        Self: PartialEq + 'a,
    {
        candidates
            .into_iter()
            .any(|candidate| self.is_equal_to(candidate))
    }

    /// Negation of [`Fluent::is_in`].
    fn is_not_in<'a, I>(&self, candidates: I) -> bool
    where
        I: IntoIterator<Item = &'a Self>,
        Self: PartialEq + 'a,
    {
        !self.is_in(candidates)
    }

    /// Returns `true` if the receiver equals any element of the slice.
    fn is_in_slice(&self, candidates: &[Self]) -> bool
    where
        Self: PartialEq + Sized,
    {
        self.is_in(candidates)
    }

    /// Negation of [`Fluent::is_in_slice`].
    fn is_not_in_slice(&self, candidates: &[Self]) -> bool
    where
        Self: PartialEq + Sized,
    {
        !self.is_in_slice(candidates)
    }

    /// Returns `true` if the receiver equals any value of a lazy sequence.
    ///
    /// The sequence is consumed only up to the first match.
    fn is_in_values<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = Self>,
        Self: PartialEq + Sized,
    {
        values.into_iter().any(|value| self.is_equal_to(&value))
    }

    /// Negation of [`Fluent::is_in_values`].
    fn is_not_in_values<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = Self>,
        Self: PartialEq + Sized,
    {
        !self.is_in_values(values)
    }

    /// Returns `true` if the hash set contains the receiver.
    fn is_in_set<S>(&self, set: &HashSet<Self, S>) -> bool
    where
        Self: Hash + Eq + Sized,
        S: BuildHasher,
    {
        set.contains(self)
    }

    /// Negation of [`Fluent::is_in_set`].
    fn is_not_in_set<S>(&self, set: &HashSet<Self, S>) -> bool
    where
        Self: Hash + Eq + Sized,
        S: BuildHasher,
    {
        !self.is_in_set(set)
    }

    /// Returns `true` if the immutable list contains the receiver.
    #[cfg(feature = "immutable")]
    fn is_in_list(&self, list: &ImmutableList<Self>) -> bool
    where
        Self: PartialEq + Sized,
    {
        list.contains(self)
    }

    /// Negation of [`Fluent::is_in_list`].
    #[cfg(feature = "immutable")]
    fn is_not_in_list(&self, list: &ImmutableList<Self>) -> bool
    where
        Self: PartialEq + Sized,
    {
        !self.is_in_list(list)
    }

    /// Returns `true` if the immutable set contains the receiver.
    #[cfg(feature = "immutable")]
    fn is_in_immutable_set(&self, set: &ImmutableSet<Self>) -> bool
    where
        Self: Hash + Eq + Sized,
    {
        set.contains(self)
    }

    /// Negation of [`Fluent::is_in_immutable_set`].
    #[cfg(feature = "immutable")]
    fn is_not_in_immutable_set(&self, set: &ImmutableSet<Self>) -> bool
    where
        Self: Hash + Eq + Sized,
    {
        !self.is_in_immutable_set(set)
    }

    /// Returns `true` if the sorted set contains the receiver.
    #[cfg(feature = "immutable")]
    fn is_in_sorted_set(&self, set: &ImmutableSortedSet<Self>) -> bool
    where
        Self: Sized,
    {
        set.contains(self)
    }

    /// Negation of [`Fluent::is_in_sorted_set`].
    #[cfg(feature = "immutable")]
    fn is_not_in_sorted_set(&self, set: &ImmutableSortedSet<Self>) -> bool
    where
        Self: Sized,
    {
        !self.is_in_sorted_set(set)
    }

    /// Returns `true` if the enum set contains the receiver, in O(1).
    #[cfg(feature = "immutable")]
    fn is_in_enum_set(&self, set: &ImmutableEnumSet<Self>) -> bool
    where
        Self: Enumeration,
    {
        set.contains(*self)
    }

    /// Negation of [`Fluent::is_in_enum_set`].
    #[cfg(feature = "immutable")]
    fn is_not_in_enum_set(&self, set: &ImmutableEnumSet<Self>) -> bool
    where
        Self: Enumeration,
    {
        !self.is_in_enum_set(set)
    }
}

impl<T: ?Sized> Fluent for T {}
