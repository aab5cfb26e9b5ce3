//! Dense, mutable bitset over an [`Enumeration`].
//!
//! [`EnumBitSet`] stores one bit per declared constant, indexed by ordinal.
//! It is the storage behind [`ImmutableEnumSet`](super::ImmutableEnumSet)
//! and the mutable copy handed out by its `unwrap`. Up to 128 constants
//! are stored inline without allocating.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::{EnumBitSet, Enumeration};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Light { Red, Amber, Green }
//!
//! impl Enumeration for Light {
//!     const VARIANTS: &'static [Self] = &[Self::Red, Self::Amber, Self::Green];
//!     fn ordinal(self) -> usize { self as usize }
//! }
//!
//! let mut lights = EnumBitSet::new();
//! assert!(lights.insert(Light::Green));
//! assert!(lights.insert(Light::Red));
//! assert!(!lights.insert(Light::Red));
//! assert_eq!(lights.iter().collect::<Vec<_>>(), vec![Light::Red, Light::Green]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use smallvec::{SmallVec, smallvec};

use super::Enumeration;

const WORD_BITS: usize = u64::BITS as usize;

type Words = SmallVec<[u64; 2]>;

#[inline]
const fn word_count(constants: usize) -> usize {
    constants.div_ceil(WORD_BITS)
}

#[inline]
const fn locate(ordinal: usize) -> (usize, u64) {
    (ordinal / WORD_BITS, 1 << (ordinal % WORD_BITS))
}

// =============================================================================
// EnumBitSet Definition
// =============================================================================

/// A mutable set of enum constants stored as a dense bitset.
///
/// # Time Complexity
///
/// | Operation    | Complexity      |
/// |--------------|-----------------|
/// | `insert`     | O(1)            |
/// | `remove`     | O(1)            |
/// | `contains`   | O(1)            |
/// | `len`        | O(COUNT / 64)   |
/// | `union_with` | O(COUNT / 64)   |
/// | `complement` | O(COUNT / 64)   |
pub struct EnumBitSet<E> {
    words: Words,
    marker: PhantomData<fn() -> E>,
}

impl<E: Enumeration> EnumBitSet<E> {
    /// Creates an empty set sized for every constant of `E`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: smallvec![0; word_count(E::COUNT)],
            marker: PhantomData,
        }
    }

    /// Creates a set containing every constant of `E`.
    #[must_use]
    pub fn all() -> Self {
        let mut set = Self::new();
        set.words.iter_mut().for_each(|word| *word = u64::MAX);
        set.clear_unused_bits();
        set
    }

    /// Adds `element`; returns `true` if it was not already present.
    pub fn insert(&mut self, element: E) -> bool {
        let (word, mask) = locate(element.ordinal());
        let absent = self.words[word] & mask == 0;
        self.words[word] |= mask;
        absent
    }

    /// Removes `element`; returns `true` if it was present.
    pub fn remove(&mut self, element: E) -> bool {
        let (word, mask) = locate(element.ordinal());
        let present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        present
    }

    /// Returns `true` if `element` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: E) -> bool {
        let (word, mask) = locate(element.ordinal());
        self.words[word] & mask != 0
    }

    /// Returns the number of constants in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Returns `true` if the set holds no constants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Removes every constant.
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|word| *word = 0);
    }

    /// Adds every constant whose ordinal lies in `[from, to]`.
    ///
    /// Does nothing when `from > to`.
    pub fn insert_range(&mut self, from: E, to: E) {
        for ordinal in from.ordinal()..=to.ordinal() {
            let (word, mask) = locate(ordinal);
            self.words[word] |= mask;
        }
    }

    /// Adds every constant of `other`.
    pub fn union_with(&mut self, other: &Self) {
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= other_word;
        }
    }

    /// Keeps only the constants also in `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word &= other_word;
        }
    }

    /// Returns the constants of `E` not in this set.
    #[must_use]
    pub fn complement(&self) -> Self {
        let mut result = Self {
            words: self.words.iter().map(|word| !word).collect(),
            marker: PhantomData,
        };
        result.clear_unused_bits();
        result
    }

    /// Returns `true` if every constant of this set is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(word, other_word)| word & !other_word == 0)
    }

    /// Returns the constant with the lowest ordinal.
    #[must_use]
    pub fn first(&self) -> Option<E> {
        self.iter().next()
    }

    /// Returns the constant with the highest ordinal.
    #[must_use]
    pub fn last(&self) -> Option<E> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != 0)
            .and_then(|(index, word)| {
                let bit = WORD_BITS - 1 - word.leading_zeros() as usize;
                E::from_ordinal(index * WORD_BITS + bit)
            })
    }

    /// Iterates the constants in ascending ordinal order.
    #[must_use]
    pub fn iter(&self) -> EnumBitSetIterator<'_, E> {
        EnumBitSetIterator {
            words: &self.words,
            cursor: OrdinalCursor::new(&self.words, self.len()),
            marker: PhantomData,
        }
    }

    fn clear_unused_bits(&mut self) {
        let used = E::COUNT % WORD_BITS;
        if used != 0
            && let Some(last) = self.words.last_mut()
        {
            *last &= (1 << used) - 1;
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Walks set bits of a word slice in ascending order.
#[derive(Clone)]
struct OrdinalCursor {
    word_index: usize,
    current: u64,
    remaining: usize,
}

impl OrdinalCursor {
    fn new(words: &[u64], remaining: usize) -> Self {
        Self {
            word_index: 0,
            current: words.first().copied().unwrap_or(0),
            remaining,
        }
    }

    fn next(&mut self, words: &[u64]) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                self.remaining -= 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            self.word_index += 1;
            self.current = *words.get(self.word_index)?;
        }
    }
}

/// An iterator over the constants of an [`EnumBitSet`], in ordinal order.
pub struct EnumBitSetIterator<'a, E> {
    words: &'a [u64],
    cursor: OrdinalCursor,
    marker: PhantomData<fn() -> E>,
}

impl<E: Enumeration> Iterator for EnumBitSetIterator<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next(self.words).and_then(E::from_ordinal)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<E: Enumeration> ExactSizeIterator for EnumBitSetIterator<'_, E> {}

/// An owning iterator over the constants of an [`EnumBitSet`].
pub struct EnumBitSetIntoIterator<E> {
    words: Words,
    cursor: OrdinalCursor,
    marker: PhantomData<fn() -> E>,
}

impl<E: Enumeration> Iterator for EnumBitSetIntoIterator<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next(&self.words).and_then(E::from_ordinal)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cursor.remaining, Some(self.cursor.remaining))
    }
}

impl<E: Enumeration> ExactSizeIterator for EnumBitSetIntoIterator<E> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Clone for EnumBitSet<E> {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            marker: PhantomData,
        }
    }
}

impl<E: Enumeration> Default for EnumBitSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PartialEq for EnumBitSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl<E> Eq for EnumBitSet<E> {}

impl<E> Hash for EnumBitSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.words.hash(state);
    }
}

impl<E: Enumeration + fmt::Debug> fmt::Debug for EnumBitSet<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<E: Enumeration> FromIterator<E> for EnumBitSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E: Enumeration> Extend<E> for EnumBitSet<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, E: Enumeration> IntoIterator for &'a EnumBitSet<E> {
    type Item = E;
    type IntoIter = EnumBitSetIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Enumeration> IntoIterator for EnumBitSet<E> {
    type Item = E;
    type IntoIter = EnumBitSetIntoIterator<E>;

    fn into_iter(self) -> Self::IntoIter {
        let cursor = OrdinalCursor::new(&self.words, self.len());
        EnumBitSetIntoIterator {
            words: self.words,
            cursor,
            marker: PhantomData,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
