//! Immutable set of enum constants.
//!
//! [`ImmutableEnumSet`] is a frozen [`EnumBitSet`]: membership is a single
//! bit test and iteration always follows declaration (ordinal) order.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::{Enumeration, ImmutableEnumSet};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Day { Mon, Tue, Wed, Thu, Fri, Sat, Sun }
//!
//! impl Enumeration for Day {
//!     const VARIANTS: &'static [Self] =
//!         &[Self::Mon, Self::Tue, Self::Wed, Self::Thu, Self::Fri, Self::Sat, Self::Sun];
//!     fn ordinal(self) -> usize { self as usize }
//! }
//!
//! let weekdays = ImmutableEnumSet::range(Day::Mon, Day::Fri).unwrap();
//! let weekend = ImmutableEnumSet::complement_of(&weekdays);
//! assert_eq!(weekend.iter().collect::<Vec<_>>(), vec![Day::Sat, Day::Sun]);
//! assert!(weekdays.contains(Day::Wed));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::display;
use super::element_type::ElementType;
use super::enum_bitset::{EnumBitSetIntoIterator, EnumBitSetIterator};
use super::{EnumBitSet, Enumeration, ImmutableEnumList, ImmutableSet};
use crate::error::CollectionError;
use crate::typeclass::Foldable;

// =============================================================================
// ImmutableEnumSet Definition
// =============================================================================

/// An immutable set of constants of the enumeration `E`.
///
/// # Time Complexity
///
/// | Operation       | Complexity    |
/// |-----------------|---------------|
/// | `contains`      | O(1)          |
/// | `len`           | O(COUNT / 64) |
/// | `merge`         | O(COUNT / 64) |
/// | `complement_of` | O(COUNT / 64) |
pub struct ImmutableEnumSet<E> {
    bits: EnumBitSet<E>,
}

impl<E: Enumeration> ImmutableEnumSet<E> {
    /// Returns the set with no constants.
    #[must_use]
    pub fn none_of() -> Self {
        Self::from_bits(EnumBitSet::new())
    }

    /// Returns the set with every constant of `E`.
    #[must_use]
    pub fn all_of() -> Self {
        Self::from_bits(EnumBitSet::all())
    }

    /// Creates a set of the given constants.
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::from_bits(elements.into_iter().collect())
    }

    /// Creates a set from a nullable source.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullElement`] with the position of the
    /// first `None`.
    pub fn try_of<I>(elements: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        super::validate::present_elements("ImmutableEnumSet", elements).map(Self::of)
    }

    /// Returns every constant from `from` to `to`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidRange`] when `from` is declared
    /// after `to`.
    pub fn range(from: E, to: E) -> Result<Self, CollectionError> {
        check_range(from, to)?;
        let mut bits = EnumBitSet::new();
        bits.insert_range(from, to);
        Ok(Self::from_bits(bits))
    }

    /// Returns the constants of `E` absent from `set`.
    #[must_use]
    pub fn complement_of(set: &Self) -> Self {
        Self::from_bits(set.bits.complement())
    }

    /// Returns the union of two sets.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        let mut bits = first.unwrap();
        bits.union_with(&second.bits);
        Self::from_bits(bits)
    }

    /// Returns the constants present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut bits = self.unwrap();
        bits.intersect_with(&other.bits);
        Self::from_bits(bits)
    }

    /// Returns `true` if `element` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: E) -> bool {
        self.bits.contains(element)
    }

    /// Returns `true` if every constant of this set is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits.is_subset(&other.bits)
    }

    /// Returns the number of constants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the set holds no constants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterates the constants in ordinal order.
    #[must_use]
    pub fn iter(&self) -> EnumBitSetIterator<'_, E> {
        self.bits.iter()
    }

    /// Visits every constant in ordinal order.
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnMut(E),
    {
        self.iter().for_each(consumer);
    }

    /// Returns the constant with the lowest ordinal.
    #[must_use]
    pub fn first(&self) -> Option<E> {
        self.bits.first()
    }

    /// Returns the constant with the highest ordinal.
    #[must_use]
    pub fn last(&self) -> Option<E> {
        self.bits.last()
    }

    /// Returns a mutable copy of the underlying bitset.
    ///
    /// Changing the returned bitset never affects this set.
    #[must_use]
    pub fn unwrap(&self) -> EnumBitSet<E> {
        self.bits.clone()
    }

    /// Returns a set with its own copy of the bitset.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_bits(self.unwrap())
    }

    /// Converts to an enum list in ordinal order.
    #[must_use]
    pub fn to_list(&self) -> ImmutableEnumList<E> {
        ImmutableEnumList::of(self.iter())
    }

    /// Returns the descriptor of the element type, without an instance.
    #[must_use]
    pub fn element_type() -> ElementType {
        ElementType::of::<E>()
    }

    /// Returns the element type descriptor of this set.
    #[must_use]
    pub fn key(&self) -> ElementType {
        Self::element_type()
    }

    pub(crate) fn from_bits(bits: EnumBitSet<E>) -> Self {
        Self { bits }
    }
}

impl<E: Enumeration + Hash> ImmutableEnumSet<E> {
    /// Converts to a hash set.
    #[must_use]
    pub fn to_set(&self) -> ImmutableSet<E> {
        ImmutableSet::of(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<E: Enumeration + serde::Serialize + fmt::Debug> ImmutableEnumSet<E> {
    /// Renders the set as JSON in ordinal order, bounded to
    /// `DISPLAY_LIMIT` characters.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        display::render_json(self, || display::render_sequence(self.iter()))
    }
}

pub(crate) fn check_range<E: Enumeration>(from: E, to: E) -> Result<(), CollectionError> {
    if from.ordinal() > to.ordinal() {
        let error = CollectionError::InvalidRange {
            from: from.ordinal(),
            to: to.ordinal(),
        };
        tracing::debug!(%error, "rejected enum range");
        return Err(error);
    }
    Ok(())
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Clone for ImmutableEnumSet<E> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
        }
    }
}

impl<E: Enumeration> Default for ImmutableEnumSet<E> {
    fn default() -> Self {
        Self::none_of()
    }
}

impl<E: Enumeration> FromIterator<E> for ImmutableEnumSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<E: Enumeration> From<EnumBitSet<E>> for ImmutableEnumSet<E> {
    fn from(bits: EnumBitSet<E>) -> Self {
        Self::from_bits(bits)
    }
}

impl<'a, E: Enumeration> IntoIterator for &'a ImmutableEnumSet<E> {
    type Item = E;
    type IntoIter = EnumBitSetIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Enumeration> IntoIterator for ImmutableEnumSet<E> {
    type Item = E;
    type IntoIter = EnumBitSetIntoIterator<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl<E> PartialEq for ImmutableEnumSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E> Eq for ImmutableEnumSet<E> {}

impl<E> Hash for ImmutableEnumSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E: Enumeration + fmt::Debug> fmt::Debug for ImmutableEnumSet<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.bits, formatter)
    }
}

impl<E: Enumeration + fmt::Debug> fmt::Display for ImmutableEnumSet<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_rendered(formatter, &display::render_sequence(self.iter()))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E: Enumeration> Foldable for ImmutableEnumSet<E> {
    type Element = E;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, E) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(E, B) -> B,
    {
        let elements: Vec<E> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.bits.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: Enumeration + serde::Serialize> serde::Serialize for ImmutableEnumSet<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for ImmutableEnumSet<E>
where
    E: Enumeration + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<E> as serde::Deserialize>::deserialize(deserializer).map(Self::of)
    }
}

// =============================================================================
// Tests
// =============================================================================
