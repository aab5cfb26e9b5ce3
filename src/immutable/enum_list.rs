//! Immutable list of enum constants.
//!
//! [`ImmutableEnumList`] keeps order and duplicates like [`ImmutableList`],
//! and adds a bitset index of the constants it holds so that `contains`
//! is a single bit test.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::display;
use super::element_type::ElementType;
use super::enum_set::check_range;
use super::validate::present_elements;
use super::{EnumBitSet, Enumeration, ImmutableEnumSet, ImmutableList};
use crate::error::CollectionError;
use crate::typeclass::Foldable;

// =============================================================================
// ImmutableEnumList Definition
// =============================================================================

/// An immutable, ordered sequence of enum constants that keeps duplicates.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable::{Enumeration, ImmutableEnumList};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Move { Up, Down, Left, Right }
///
/// impl Enumeration for Move {
///     const VARIANTS: &'static [Self] = &[Self::Up, Self::Down, Self::Left, Self::Right];
///     fn ordinal(self) -> usize { self as usize }
/// }
///
/// let path = ImmutableEnumList::of([Move::Up, Move::Up, Move::Left]);
/// assert_eq!(path.len(), 3);
/// assert!(path.contains(Move::Left));
/// assert!(!path.contains(Move::Down));
/// assert_eq!(path.to_set().len(), 2);
/// ```
pub struct ImmutableEnumList<E> {
    elements: Arc<[E]>,
    members: EnumBitSet<E>,
}

impl<E: Enumeration> ImmutableEnumList<E> {
    /// Returns the empty list.
    #[must_use]
    pub fn none_of() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Returns every constant of `E` once, in ordinal order.
    #[must_use]
    pub fn all_of() -> Self {
        Self::from_vec(E::VARIANTS.to_vec())
    }

    /// Creates a list holding `elements` in iteration order.
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::from_vec(elements.into_iter().collect())
    }

    /// Creates a list from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullElement`] with the position of the
    /// first `None`.
    pub fn try_of<I>(elements: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        present_elements("ImmutableEnumList", elements).map(Self::from_vec)
    }

    /// Returns every constant from `from` to `to`, both inclusive, in
    /// ordinal order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`] when `from` is declared
    /// after `to`.
    pub fn range(from: E, to: E) -> Result<Self, CollectionError> {
        check_range(from, to)?;
        Ok(Self::from_vec(
            E::VARIANTS[from.ordinal()..=to.ordinal()].to_vec(),
        ))
    }

    fn from_vec(elements: Vec<E>) -> Self {
        let members = elements.iter().copied().collect();
        Self {
            elements: Arc::from(elements),
            members,
        }
    }

    /// Returns the number of elements, duplicates included.
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

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<E, CollectionError> {
        self.elements
            .get(index)
            .copied()
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
    }

    /// Returns `true` if the list holds `element`.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: E) -> bool {
        self.members.contains(element)
    }

    /// Returns the position of the first occurrence of `element`.
    #[must_use]
    pub fn index_of(&self, element: E) -> Option<usize> {
        if !self.contains(element) {
            return None;
        }
        self.elements.iter().position(|candidate| *candidate == element)
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<E> {
        self.elements.first().copied()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<E> {
        self.elements.last().copied()
    }

    /// Returns a read-only view of the frozen elements.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// Iterates the elements in list order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, E>> {
        self.elements.iter().copied()
    }

    /// Returns the distinct constants as an enum set.
    #[must_use]
    pub fn to_set(&self) -> ImmutableEnumSet<E> {
        ImmutableEnumSet::from_bits(self.members.clone())
    }

    /// Converts to a general list.
    #[must_use]
    pub fn to_list(&self) -> ImmutableList<E> {
        ImmutableList::of_slice(&self.elements)
    }

    /// Returns a mutable copy of the elements.
    #[must_use]
    pub fn unwrap(&self) -> Vec<E> {
        self.elements.to_vec()
    }

    /// Returns a list with its own, independently copied storage.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            elements: Arc::from(self.unwrap()),
            members: self.members.clone(),
        }
    }

    /// Returns the descriptor of the element type, without an instance.
    #[must_use]
    pub fn element_type() -> ElementType {
        ElementType::of::<E>()
    }

    /// Returns the element type descriptor of this list.
    #[must_use]
    pub fn key(&self) -> ElementType {
        Self::element_type()
    }
}

#[cfg(feature = "serde")]
impl<E: Enumeration + serde::Serialize + fmt::Debug> ImmutableEnumList<E> {
    /// Renders the list as JSON, bounded to `DISPLAY_LIMIT` characters.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        display::render_json(self, || display::render_sequence(self.iter()))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Clone for ImmutableEnumList<E> {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            members: self.members.clone(),
        }
    }
}

impl<E: Enumeration> Default for ImmutableEnumList<E> {
    fn default() -> Self {
        Self::none_of()
    }
}

impl<E: Enumeration> FromIterator<E> for ImmutableEnumList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a, E: Enumeration> IntoIterator for &'a ImmutableEnumList<E> {
    type Item = E;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Enumeration> IntoIterator for ImmutableEnumList<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.unwrap().into_iter()
    }
}

impl<E: PartialEq> PartialEq for ImmutableEnumList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Eq> Eq for ImmutableEnumList<E> {}

impl<E: Hash> Hash for ImmutableEnumList<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<E: fmt::Debug> fmt::Debug for ImmutableEnumList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<E: fmt::Debug> fmt::Display for ImmutableEnumList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_rendered(formatter, &display::render_sequence(self.elements.iter()))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E: Enumeration> Foldable for ImmutableEnumList<E> {
    type Element = E;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, E) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(E, B) -> B,
    {
        self.iter()
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
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for ImmutableEnumList<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for ImmutableEnumList<E>
where
    E: Enumeration + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<E> as serde::Deserialize>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
