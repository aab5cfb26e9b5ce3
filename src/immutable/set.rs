//! Immutable hash set.
//!
//! This module provides [`ImmutableSet`], a frozen snapshot of a set of
//! distinct elements. Equal elements passed to a factory are collapsed;
//! which of several equal values survives is unspecified.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::ImmutableSet;
//!
//! let set = ImmutableSet::of(["a", "a", "b", "c"]);
//! assert_eq!(set.len(), 3);
//! assert!(set.contains("b"));
//!
//! let other = ImmutableSet::of(["c", "d"]);
//! let merged = ImmutableSet::merge(&set, &other);
//! assert_eq!(merged.len(), 4);
//! ```

use std::any::Any;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::builder::SetBuilder;
use super::display;
use super::element_type::{ElementType, checked_elements};
use super::validate::present_elements;
use super::{HashBuilder, ImmutableList, ImmutableSortedSet};
use crate::error::CollectionError;
use crate::typeclass::Foldable;

type Storage<T> = HashSet<T, HashBuilder>;

// =============================================================================
// ImmutableSet Definition
// =============================================================================

/// An immutable set of distinct elements, backed by a hash table.
///
/// # Time Complexity
///
/// | Operation    | Complexity        |
/// |--------------|-------------------|
/// | `of`         | O(n)              |
/// | `contains`   | O(1) expected     |
/// | `len`        | O(1)              |
/// | `merge`      | O(n + m)          |
/// | `min`/`max`  | O(n)              |
/// | `clone`      | O(1)              |
/// | `deep_clone` | O(n)              |
///
/// # Examples
///
/// ```rust
/// use frozen::immutable::ImmutableSet;
///
/// let set = ImmutableSet::of([3, 1, 2]);
/// assert_eq!(set.min(), Some(&1));
/// assert_eq!(set.find_last(), Some(&3));
/// assert!(set.find_any().is_some());
/// ```
pub struct ImmutableSet<T> {
    elements: Arc<Storage<T>>,
}

impl<T> ImmutableSet<T> {
    /// Returns the number of distinct elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates the elements in unspecified order.
    #[must_use]
    pub fn iter(&self) -> ImmutableSetIterator<'_, T> {
        ImmutableSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns an arbitrary element, or `None` when empty.
    #[must_use]
    pub fn find_any(&self) -> Option<&T> {
        self.elements.iter().next()
    }

    /// Returns the first element in the order given by `comparator`.
    #[must_use]
    pub fn find_first_by<C>(&self, mut comparator: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.elements
            .iter()
            .min_by(|left, right| comparator(*left, *right))
    }

    /// Returns the last element in the order given by `comparator`.
    #[must_use]
    pub fn find_last_by<C>(&self, mut comparator: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.elements
            .iter()
            .max_by(|left, right| comparator(*left, *right))
    }

    /// Visits every element in the order given by `comparator`.
    pub fn for_each_ordered_by<F, C>(&self, mut consumer: F, mut comparator: C)
    where
        F: FnMut(&T),
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut ordered: Vec<&T> = self.elements.iter().collect();
        ordered.sort_by(|left, right| comparator(*left, *right));
        ordered.into_iter().for_each(|element| consumer(element));
    }

    pub(crate) fn from_storage(elements: Storage<T>) -> Self {
        Self {
            elements: Arc::new(elements),
        }
    }
}

impl<T: Hash + Eq> ImmutableSet<T> {
    /// Returns an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_storage(Storage::default())
    }

    /// Creates a set of the distinct `elements`.
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_storage(elements.into_iter().collect())
    }

    /// Creates a set from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullElement`] with the position of the
    /// first `None`; no set is built in that case.
    pub fn try_of<I>(elements: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        present_elements("ImmutableSet", elements).map(Self::of)
    }

    /// Returns a builder that validates its input when built.
    #[must_use]
    pub fn builder() -> SetBuilder<T> {
        SetBuilder::new()
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::immutable::ImmutableSet;
    ///
    /// let set = ImmutableSet::of([String::from("ice")]);
    /// assert!(set.contains("ice"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Returns `true` if every element of this set is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }
}

impl<T: Hash + Eq + 'static> ImmutableSet<T> {
    /// Returns the descriptor of the element type, without an instance.
    #[must_use]
    pub fn element_type() -> ElementType {
        ElementType::of::<T>()
    }

    /// Returns the element type descriptor of this set.
    #[must_use]
    pub fn key(&self) -> ElementType {
        Self::element_type()
    }

    /// Creates a set from type-erased values, checking each one.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::TypeMismatch`] at the first value that is not a `T`.
    /// - [`CollectionError::UnsupportedFactoryCall`] when `T` is the
    ///   `NoElement` placeholder.
    pub fn from_erased<I>(values: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        checked_elements::<T, _>("ImmutableSet::from_erased", values).map(Self::of)
    }
}

impl<T: Clone + Hash + Eq> ImmutableSet<T> {
    /// Creates a set holding copies of the distinct slice elements.
    #[must_use]
    pub fn of_slice(elements: &[T]) -> Self {
        Self::of(elements.iter().cloned())
    }

    /// Returns the union of two sets as a new set.
    ///
    /// The larger snapshot is copied once and the smaller one is added to it.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        let (larger, smaller) = if first.len() >= second.len() {
            (first, second)
        } else {
            (second, first)
        };
        let mut elements = larger.unwrap();
        elements.extend(smaller.iter().cloned());
        Self::from_storage(elements)
    }

    /// Returns the elements present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_storage(self.elements.intersection(&other.elements).cloned().collect())
    }

    /// Returns the elements of this set absent from `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self::from_storage(self.elements.difference(&other.elements).cloned().collect())
    }

    /// Returns a mutable copy of the elements.
    ///
    /// Changing the returned set never affects this one.
    #[must_use]
    pub fn unwrap(&self) -> HashSet<T, HashBuilder> {
        Storage::clone(&self.elements)
    }

    /// Returns a set with its own, independently copied storage.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_storage(self.unwrap())
    }

    /// Converts to a list, in unspecified order.
    #[must_use]
    pub fn to_list(&self) -> ImmutableList<T> {
        ImmutableList::of(self.iter().cloned())
    }

    /// Converts to a sorted set ordered by `comparator`.
    #[must_use]
    pub fn to_sorted_set_by<C>(&self, comparator: C) -> ImmutableSortedSet<T>
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        ImmutableSortedSet::of_by(self.iter().cloned(), comparator)
    }
}

impl<T: Clone + Hash + Ord + 'static> ImmutableSet<T> {
    /// Converts to a sorted set in natural order.
    #[must_use]
    pub fn to_sorted_set(&self) -> ImmutableSortedSet<T> {
        ImmutableSortedSet::of(self.iter().cloned())
    }
}

impl<T: Ord> ImmutableSet<T> {
    /// Returns the smallest element.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.elements.iter().min()
    }

    /// Returns the largest element.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.elements.iter().max()
    }

    /// Returns the first element in natural order.
    #[must_use]
    pub fn find_first(&self) -> Option<&T> {
        self.min()
    }

    /// Returns the last element in natural order.
    #[must_use]
    pub fn find_last(&self) -> Option<&T> {
        self.max()
    }

    /// Visits every element in natural order.
    pub fn for_each_ordered<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.for_each_ordered_by(consumer, T::cmp);
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + fmt::Debug + Ord> ImmutableSet<T> {
    /// Renders the set as a JSON array in ascending order, bounded to
    /// `DISPLAY_LIMIT` characters.
    ///
    /// Falls back to the plain rendering if serialization fails.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        let sorted = display::sorted(self.iter());
        display::render_json(&sorted, || display::render_sequence(&sorted))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of an [`ImmutableSet`].
pub struct ImmutableSetIterator<'a, T> {
    inner: std::collections::hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for ImmutableSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ImmutableSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over copies of the elements of an [`ImmutableSet`].
pub struct ImmutableSetIntoIterator<T> {
    inner: std::collections::hash_set::IntoIter<T>,
}

impl<T> Iterator for ImmutableSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ImmutableSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ImmutableSet<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
        }
    }
}

impl<T: Hash + Eq> Default for ImmutableSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Hash + Eq> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Clone + Hash + Eq> IntoIterator for ImmutableSet<T> {
    type Item = T;
    type IntoIter = ImmutableSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let elements = Arc::try_unwrap(self.elements).unwrap_or_else(|shared| (*shared).clone());
        ImmutableSetIntoIterator {
            inner: elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSet<T> {
    type Item = &'a T;
    type IntoIter = ImmutableSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Hash + Eq> Eq for ImmutableSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Debug + Ord> fmt::Display for ImmutableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_rendered(formatter, &display::render_sorted_sequence(self.iter()))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T: Clone + Hash + Eq> Foldable for ImmutableSet<T> {
    type Element = T;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        // No defined order, so folding right is folding left with flipped arguments.
        self.into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<T: Hash + Eq + Send> rayon::iter::FromParallelIterator<T> for ImmutableSet<T> {
    fn from_par_iter<I>(iter: I) -> Self
    where
        I: rayon::iter::IntoParallelIterator<Item = T>,
    {
        Self::from_storage(<Storage<T> as rayon::iter::FromParallelIterator<T>>::from_par_iter(
            iter,
        ))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableSet<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::of)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_of_deduplicates() {
        let set = ImmutableSet::of(["a", "a", "b", "c"]);
        assert_eq!(set.len(), 3);
        let unwrapped = set.unwrap();
        assert_eq!(unwrapped.len(), 3);
        assert!(["a", "b", "c"].iter().all(|element| unwrapped.contains(element)));
    }

    #[rstest]
    fn test_empty() {
        let set: ImmutableSet<i32> = ImmutableSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.find_any(), None);
        assert_eq!(set.min(), None);
    }

    #[rstest]
    fn test_merge_is_union() {
        let first = ImmutableSet::of([1, 2]);
        let second = ImmutableSet::of([2, 3, 4]);
        let merged = ImmutableSet::merge(&first, &second);
        assert_eq!(merged, ImmutableSet::of([1, 2, 3, 4]));
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);
    }

    #[rstest]
    fn test_unwrap_is_defensive_copy() {
        let set = ImmutableSet::of([1, 2]);
        let mut copy = set.unwrap();
        copy.insert(3);
        copy.remove(&1);
        assert!(set.contains(&1));
        assert!(!set.contains(&3));
    }

    #[rstest]
    fn test_find_first_and_last_by_comparator() {
        let set = ImmutableSet::of(["pear", "fig", "banana"]);
        let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
        assert_eq!(set.find_first_by(by_length), Some(&"fig"));
        assert_eq!(set.find_last_by(by_length), Some(&"banana"));
        assert_eq!(set.find_first(), Some(&"banana"));
        assert_eq!(set.find_last(), Some(&"pear"));
    }

    #[rstest]
    fn test_for_each_ordered() {
        let set = ImmutableSet::of([30, 10, 20]);
        let mut visited = Vec::new();
        set.for_each_ordered(|element| visited.push(*element));
        assert_eq!(visited, vec![10, 20, 30]);
    }

    #[rstest]
    fn test_intersection_and_difference() {
        let first = ImmutableSet::of([1, 2, 3]);
        let second = ImmutableSet::of([2, 3, 4]);
        assert_eq!(first.intersection(&second), ImmutableSet::of([2, 3]));
        assert_eq!(first.difference(&second), ImmutableSet::of([1]));
        assert!(ImmutableSet::of([2]).is_subset(&first));
    }

    #[rstest]
    fn test_display_is_sorted() {
        let set = ImmutableSet::of([3, 1, 2]);
        assert_eq!(format!("{set}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_display_uses_numeric_order() {
        let set = ImmutableSet::of([10, 2, 1, 20]);
        assert_eq!(set.to_string(), "[1, 2, 10, 20]");
    }

    #[rstest]
    fn test_empty_for_distinct_element_types() {
        let numbers: ImmutableSet<i32> = ImmutableSet::empty();
        let words: ImmutableSet<String> = ImmutableSet::empty();
        assert!(numbers.is_empty() && words.is_empty());
        assert_ne!(numbers.key(), words.key());
    }
}
