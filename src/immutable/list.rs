//! Immutable ordered list.
//!
//! This module provides [`ImmutableList`], a frozen snapshot of an ordered
//! sequence. Duplicates are kept and insertion order is preserved.
//!
//! # Overview
//!
//! - Built only through factories (`of`, `of_slice`, `try_of`, the
//!   builder, or `collect`); there is no in-place update.
//! - `unwrap` hands out a fresh `Vec`, so callers never reach the frozen
//!   storage.
//! - Cloning shares the snapshot; `deep_clone` copies it.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::ImmutableList;
//!
//! let list = ImmutableList::of(["b", "a", "b"]);
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Ok(&"a"));
//!
//! let mut copy = list.unwrap();
//! copy.clear();
//! assert_eq!(list.unwrap(), vec!["b", "a", "b"]);
//! ```

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::builder::ListBuilder;
use super::display;
use super::element_type::{ElementType, checked_elements};
use super::validate::present_elements;
use super::{ImmutableSet, ImmutableSortedSet};
use crate::error::CollectionError;
use crate::typeclass::Foldable;

// =============================================================================
// ImmutableList Definition
// =============================================================================

/// An immutable, ordered sequence that keeps duplicates.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `of`            | O(n)       |
/// | `get`           | O(1)       |
/// | `len`           | O(1)       |
/// | `contains`      | O(n)       |
/// | `clone`         | O(1)       |
/// | `deep_clone`    | O(n)       |
/// | `unwrap`        | O(n)       |
///
/// # Examples
///
/// ```rust
/// use frozen::immutable::ImmutableList;
///
/// let list = ImmutableList::of([3, 1, 2]);
/// let mut visited = Vec::new();
/// list.for_each_ordered(|element| visited.push(*element));
/// assert_eq!(visited, vec![1, 2, 3]);
/// assert_eq!(list.as_slice(), &[3, 1, 2]);
/// ```
pub struct ImmutableList<T> {
    elements: Arc<[T]>,
}

impl<T> ImmutableList<T> {
    /// Returns an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::immutable::ImmutableList;
    ///
    /// let empty: ImmutableList<String> = ImmutableList::empty();
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a list holding `elements` in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::immutable::ImmutableList;
    ///
    /// let list = ImmutableList::of(vec![1, 1, 2]);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(elements.into_iter().collect())
    }

    /// Creates a list from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullElement`] with the position of the
    /// first `None`; no list is built in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::CollectionError;
    /// use frozen::immutable::ImmutableList;
    ///
    /// assert!(ImmutableList::try_of([Some(1), Some(2)]).is_ok());
    /// assert_eq!(
    ///     ImmutableList::try_of([Some(1), None]).unwrap_err(),
    ///     CollectionError::NullElement { index: 1 }
    /// );
    /// ```
    pub fn try_of<I>(elements: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        present_elements("ImmutableList", elements).map(Self::from_vec)
    }

    /// Returns a builder that validates its input when built.
    #[must_use]
    pub fn builder() -> ListBuilder<T> {
        ListBuilder::new()
    }

    pub(crate) fn from_vec(elements: Vec<T>) -> Self {
        Self {
            elements: Arc::from(elements),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if `index` is at or past the end of the list.
    #[inline]
    #[must_use]
    pub fn is_index_out_of_bounds(&self, index: usize) -> bool {
        index >= self.len()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        if self.is_index_out_of_bounds(index) {
            return Err(CollectionError::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        Ok(&self.elements[index])
    }

    /// Returns the first element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns a read-only view of the frozen elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates the elements in order.
    #[must_use]
    pub fn iter(&self) -> ImmutableListIterator<'_, T> {
        ImmutableListIterator {
            inner: self.elements.iter(),
        }
    }

    /// Visits every element in the order given by `comparator`.
    ///
    /// The list itself is left untouched.
    pub fn for_each_ordered_by<F, C>(&self, mut consumer: F, mut comparator: C)
    where
        F: FnMut(&T),
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut ordered: Vec<&T> = self.elements.iter().collect();
        ordered.sort_by(|left, right| comparator(*left, *right));
        ordered.into_iter().for_each(|element| consumer(element));
    }
}

impl<T: 'static> ImmutableList<T> {
    /// Returns the descriptor of the element type, without an instance.
    #[must_use]
    pub fn element_type() -> ElementType {
        ElementType::of::<T>()
    }

    /// Returns the element type descriptor of this list.
    #[must_use]
    pub fn key(&self) -> ElementType {
        Self::element_type()
    }

    /// Creates a list from type-erased values, checking each one.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::TypeMismatch`] at the first value that is not a `T`.
    /// - [`CollectionError::UnsupportedFactoryCall`] when `T` is the
    ///   `NoElement` placeholder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use frozen::immutable::ImmutableList;
    ///
    /// let values: Vec<Box<dyn Any>> = vec![Box::new(1_u32), Box::new(2_u32)];
    /// let list = ImmutableList::<u32>::from_erased(values).unwrap();
    /// assert_eq!(list.as_slice(), &[1, 2]);
    /// ```
    pub fn from_erased<I>(values: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Box<dyn Any>>,
    {
        checked_elements("ImmutableList::from_erased", values).map(Self::from_vec)
    }
}

impl<T: Clone> ImmutableList<T> {
    /// Creates a list holding copies of the slice elements.
    #[must_use]
    pub fn of_slice(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }

    /// Returns a mutable copy of the elements.
    ///
    /// Changing the returned `Vec` never affects this list.
    #[must_use]
    pub fn unwrap(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Returns a list with its own, independently copied storage.
    ///
    /// Elements are cloned one level deep.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_vec(self.unwrap())
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

impl<T: PartialEq> ImmutableList<T> {
    /// Returns `true` if the list holds an element equal to `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Returns the position of the first element equal to `element`.
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == element)
    }

    /// Returns the position of the last element equal to `element`.
    #[must_use]
    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().rposition(|candidate| candidate == element)
    }
}

impl<T: Clone + Hash + Eq> ImmutableList<T> {
    /// Converts to a set, dropping duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::immutable::ImmutableList;
    ///
    /// let list = ImmutableList::of([1, 1, 2]);
    /// assert_eq!(list.to_set().len(), 2);
    /// ```
    #[must_use]
    pub fn to_set(&self) -> ImmutableSet<T> {
        ImmutableSet::of(self.iter().cloned())
    }
}

impl<T: Ord> ImmutableList<T> {
    /// Visits every element in natural order.
    pub fn for_each_ordered<F>(&self, consumer: F)
    where
        F: FnMut(&T),
    {
        self.for_each_ordered_by(consumer, T::cmp);
    }

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
}

impl<T: Clone + Ord + 'static> ImmutableList<T> {
    /// Converts to a sorted set in natural order, dropping duplicates.
    #[must_use]
    pub fn to_sorted_set(&self) -> ImmutableSortedSet<T> {
        ImmutableSortedSet::of(self.iter().cloned())
    }
}

impl<T: Clone + Ord> ImmutableList<T> {
    /// Returns a new list with the elements in natural order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut elements = self.unwrap();
        elements.sort();
        Self::from_vec(elements)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + fmt::Debug> ImmutableList<T> {
    /// Renders the list as JSON, bounded to `DISPLAY_LIMIT` characters.
    ///
    /// Falls back to the plain rendering if serialization fails.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        display::render_json(self, || display::render_sequence(self.iter()))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of an [`ImmutableList`].
pub struct ImmutableListIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ImmutableListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ImmutableListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ImmutableListIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over copies of the elements of an [`ImmutableList`].
pub struct ImmutableListIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for ImmutableListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for ImmutableListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ImmutableListIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
        }
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> AsRef<[T]> for ImmutableList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = ImmutableListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ImmutableListIntoIterator {
            inner: self.unwrap().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = ImmutableListIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Display for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_rendered(formatter, &display::render_sequence(self.iter()))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T: Clone> Foldable for ImmutableList<T> {
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
impl<T: Send> rayon::iter::FromParallelIterator<T> for ImmutableList<T> {
    fn from_par_iter<I>(iter: I) -> Self
    where
        I: rayon::iter::IntoParallelIterator<Item = T>,
    {
        Self::from_vec(<Vec<T> as rayon::iter::FromParallelIterator<T>>::from_par_iter(iter))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for ImmutableList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
