//! Immutable sorted set.
//!
//! This module provides [`ImmutableSortedSet`], a frozen, ascending
//! snapshot of distinct elements under a total order. The order is either
//! the natural one (`T: Ord`) or a comparator supplied at construction;
//! elements the comparator considers equal are collapsed.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::ImmutableSortedSet;
//!
//! let set = ImmutableSortedSet::of(["c", "a", "b", "a"]);
//! let mut visited = Vec::new();
//! set.for_each(|element| visited.push(*element));
//! assert_eq!(visited, vec!["a", "b", "c"]);
//!
//! let by_length = ImmutableSortedSet::of_by(["ccc", "a", "bb"], |left: &&str, right: &&str| {
//!     left.len().cmp(&right.len())
//! });
//! assert_eq!(by_length.first(), Some(&"a"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::display;
use super::element_type::ElementType;
use super::validate::present_elements;
use super::{ImmutableList, ImmutableSet};
use crate::error::CollectionError;
use crate::typeclass::Foldable;

/// A shareable total order over `T`.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

// =============================================================================
// ImmutableSortedSet Definition
// =============================================================================

/// An immutable set whose elements are kept in ascending comparator order.
///
/// # Time Complexity
///
/// | Operation    | Complexity   |
/// |--------------|--------------|
/// | `of`         | O(n log n)   |
/// | `contains`   | O(log n)     |
/// | `first`      | O(1)         |
/// | `last`       | O(1)         |
/// | `head_set`   | O(log n + k) |
/// | `tail_set`   | O(log n + k) |
/// | `clone`      | O(1)         |
pub struct ImmutableSortedSet<T> {
    elements: Arc<[T]>,
    comparator: Comparator<T>,
}

impl<T> ImmutableSortedSet<T> {
    /// Creates a sorted set ordered by `comparator`.
    ///
    /// Of several elements the comparator considers equal, only the first
    /// one encountered after sorting is kept.
    #[must_use]
    pub fn of_by<I, C>(elements: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = T>,
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::with_comparator(elements, Arc::new(comparator))
    }

    /// Returns an empty sorted set that will order by `comparator`.
    #[must_use]
    pub fn empty_by<C>(comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::of_by(Vec::new(), comparator)
    }

    pub(crate) fn with_comparator<I>(elements: I, comparator: Comparator<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = elements.into_iter().collect();
        elements.sort_by(|left, right| comparator(left, right));
        elements.dedup_by(|right, left| comparator(left, right) == Ordering::Equal);
        Self {
            elements: Arc::from(elements),
            comparator,
        }
    }

    /// Returns the comparator this set is ordered by.
    #[must_use]
    pub fn comparator(&self) -> Comparator<T> {
        Arc::clone(&self.comparator)
    }

    /// Returns the number of elements.
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

    /// Iterates the elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> ImmutableSortedSetIterator<'_, T> {
        ImmutableSortedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Visits every element in ascending order.
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.elements.iter().for_each(consumer);
    }

    /// Returns the smallest element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the smallest element; same as [`ImmutableSortedSet::first`].
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.first()
    }

    /// Returns the largest element; same as [`ImmutableSortedSet::last`].
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.last()
    }

    /// Returns `true` if an element equal to `element` under the
    /// comparator is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements
            .binary_search_by(|probe| (self.comparator)(probe, element))
            .is_ok()
    }

    /// Returns a read-only view of the frozen, ascending elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    fn split_point(&self, bound: &T) -> usize {
        self.elements
            .partition_point(|element| (self.comparator)(element, bound) == Ordering::Less)
    }
}

impl<T: Ord + 'static> ImmutableSortedSet<T> {
    /// Creates a sorted set in natural order.
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::of_by(elements, T::cmp)
    }

    /// Returns an empty sorted set in natural order.
    #[must_use]
    pub fn empty() -> Self {
        Self::of(Vec::new())
    }

    /// Creates a sorted set from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullElement`] with the position of the
    /// first `None`; no set is built in that case.
    pub fn try_of<I>(elements: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        present_elements("ImmutableSortedSet", elements).map(Self::of)
    }
}

impl<T: 'static> ImmutableSortedSet<T> {
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
}

impl<T: Clone> ImmutableSortedSet<T> {
    /// Returns the union of two sorted sets, ordered by `first`'s comparator.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        Self::with_comparator(
            first.iter().chain(second.iter()).cloned(),
            first.comparator(),
        )
    }

    /// Returns the elements strictly below `bound`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::immutable::ImmutableSortedSet;
    ///
    /// let set = ImmutableSortedSet::of([1, 3, 5, 7]);
    /// assert_eq!(set.head_set(&5).unwrap(), vec![1, 3]);
    /// assert_eq!(set.tail_set(&5).unwrap(), vec![5, 7]);
    /// ```
    #[must_use]
    pub fn head_set(&self, bound: &T) -> Self {
        self.slice(..self.split_point(bound))
    }

    /// Returns the elements at or above `bound`.
    #[must_use]
    pub fn tail_set(&self, bound: &T) -> Self {
        self.slice(self.split_point(bound)..)
    }

    /// Returns a mutable copy of the elements, in ascending order.
    #[must_use]
    pub fn unwrap(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Returns a sorted set with its own, independently copied storage.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            elements: Arc::from(self.unwrap()),
            comparator: self.comparator(),
        }
    }

    /// Converts to a list in ascending order.
    #[must_use]
    pub fn to_list(&self) -> ImmutableList<T> {
        ImmutableList::of_slice(&self.elements)
    }

    fn slice<R>(&self, range: R) -> Self
    where
        R: std::slice::SliceIndex<[T], Output = [T]>,
    {
        Self {
            elements: Arc::from(self.elements[range].to_vec()),
            comparator: self.comparator(),
        }
    }
}

impl<T: Clone + Hash + Eq> ImmutableSortedSet<T> {
    /// Converts to a hash set.
    #[must_use]
    pub fn to_set(&self) -> ImmutableSet<T> {
        ImmutableSet::of_slice(&self.elements)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + fmt::Debug> ImmutableSortedSet<T> {
    /// Renders the set as JSON in ascending order, bounded to
    /// `DISPLAY_LIMIT` characters.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        display::render_json(self, || display::render_sequence(self.iter()))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of an [`ImmutableSortedSet`], ascending.
pub struct ImmutableSortedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ImmutableSortedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ImmutableSortedSetIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ImmutableSortedSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ImmutableSortedSet<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            comparator: self.comparator(),
        }
    }
}

impl<T: Ord + 'static> Default for ImmutableSortedSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord + 'static> FromIterator<T> for ImmutableSortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Clone> IntoIterator for ImmutableSortedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.unwrap().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSortedSet<T> {
    type Item = &'a T;
    type IntoIter = ImmutableSortedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two sorted sets are equal when they hold equal elements in the same order.
impl<T: PartialEq> PartialEq for ImmutableSortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ImmutableSortedSet<T> {}

impl<T: Hash> Hash for ImmutableSortedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Display for ImmutableSortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_rendered(formatter, &display::render_sequence(self.iter()))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T: Clone> Foldable for ImmutableSortedSet<T> {
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
        self.into_iter()
            .rev()
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
impl<T: Ord + Send + 'static> rayon::iter::FromParallelIterator<T> for ImmutableSortedSet<T> {
    fn from_par_iter<I>(iter: I) -> Self
    where
        I: rayon::iter::IntoParallelIterator<Item = T>,
    {
        Self::of(<Vec<T> as rayon::iter::FromParallelIterator<T>>::from_par_iter(iter))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableSortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableSortedSet<T>
where
    T: serde::Deserialize<'de> + Ord + 'static,
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
    fn test_for_each_visits_ascending() {
        let set = ImmutableSortedSet::of(["c", "a", "b"]);
        let mut visited = Vec::new();
        set.for_each(|element| visited.push(*element));
        assert_eq!(visited, vec!["a", "b", "c"]);
    }

    #[rstest]
    fn test_duplicates_collapse() {
        let set = ImmutableSortedSet::of([2, 1, 2, 1]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_comparator_equality_collapses() {
        let set = ImmutableSortedSet::of_by(["aa", "bb", "c"], |left: &&str, right: &&str| {
            left.len().cmp(&right.len())
        });
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&"c"));
    }

    #[rstest]
    #[case(3, true)]
    #[case(4, false)]
    fn test_contains(#[case] element: i32, #[case] expected: bool) {
        let set = ImmutableSortedSet::of([1, 3, 5]);
        assert_eq!(set.contains(&element), expected);
    }

    #[rstest]
    fn test_reverse_comparator() {
        let set = ImmutableSortedSet::of_by([1, 3, 2], |left: &i32, right: &i32| right.cmp(left));
        assert_eq!(set.unwrap(), vec![3, 2, 1]);
        assert!(set.contains(&2));
    }

    #[rstest]
    fn test_head_and_tail_sets() {
        let set = ImmutableSortedSet::of([10, 20, 30, 40]);
        assert_eq!(set.head_set(&25).unwrap(), vec![10, 20]);
        assert_eq!(set.tail_set(&20).unwrap(), vec![20, 30, 40]);
        assert!(set.head_set(&10).is_empty());
    }

    #[rstest]
    fn test_merge_keeps_first_comparator() {
        let descending = ImmutableSortedSet::of_by([1, 5], |left: &i32, right: &i32| right.cmp(left));
        let other = ImmutableSortedSet::of([3, 5]);
        let merged = ImmutableSortedSet::merge(&descending, &other);
        assert_eq!(merged.unwrap(), vec![5, 3, 1]);
    }

    #[rstest]
    fn test_deep_clone_equal_but_separate() {
        let set = ImmutableSortedSet::of([1, 2]);
        let copy = set.deep_clone();
        assert_eq!(copy, set);
        assert!(!Arc::ptr_eq(&copy.elements, &set.elements));
    }

    #[rstest]
    fn test_conversions() {
        let set = ImmutableSortedSet::of([3, 1, 2]);
        assert_eq!(set.to_list().as_slice(), &[1, 2, 3]);
        assert_eq!(set.to_set().len(), 3);
    }

    #[rstest]
    fn test_display() {
        let set = ImmutableSortedSet::of([2, 1]);
        assert_eq!(format!("{set}"), "[1, 2]");
    }
}
