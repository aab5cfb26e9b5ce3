//! Validating builders for the hash and list containers.
//!
//! A builder gathers possibly missing input and checks it once, in
//! `build`. Nothing is frozen until every element (or entry) is present.
//!
//! # Examples
//!
//! ```rust
//! use frozen::CollectionError;
//! use frozen::immutable::ImmutableList;
//!
//! let list = ImmutableList::builder()
//!     .element(1)
//!     .elements([2, 3])
//!     .build()
//!     .unwrap();
//! assert_eq!(list.as_slice(), &[1, 2, 3]);
//!
//! let error = ImmutableList::<i32>::builder()
//!     .element(1)
//!     .nullable(None)
//!     .build()
//!     .unwrap_err();
//! assert_eq!(error, CollectionError::NullElement { index: 1 });
//! ```

use std::hash::Hash;

use super::validate::{present_elements, present_entries};
use super::{ImmutableList, ImmutableMap, ImmutableSet};
use crate::error::CollectionError;

/// Accumulates possibly missing elements for an [`ImmutableList`].
#[derive(Debug, Clone)]
pub struct ListBuilder<T> {
    elements: Vec<Option<T>>,
}

impl<T> ListBuilder<T> {
    pub(crate) const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends one element.
    #[must_use]
    pub fn element(self, element: T) -> Self {
        self.nullable(Some(element))
    }

    /// Appends every element of `elements`.
    #[must_use]
    pub fn elements<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(elements.into_iter().map(Some));
        self
    }

    /// Appends an element that may be missing.
    #[must_use]
    pub fn nullable(mut self, element: Option<T>) -> Self {
        self.elements.push(element);
        self
    }

    /// Freezes the collected elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullElement`] at the first missing element.
    pub fn build(self) -> Result<ImmutableList<T>, CollectionError> {
        present_elements("ListBuilder", self.elements).map(ImmutableList::from_vec)
    }
}

impl<T> Default for ListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates possibly missing elements for an [`ImmutableSet`].
#[derive(Debug, Clone)]
pub struct SetBuilder<T> {
    elements: Vec<Option<T>>,
}

impl<T: Hash + Eq> SetBuilder<T> {
    pub(crate) const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Adds one element.
    #[must_use]
    pub fn element(self, element: T) -> Self {
        self.nullable(Some(element))
    }

    /// Adds every element of `elements`.
    #[must_use]
    pub fn elements<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(elements.into_iter().map(Some));
        self
    }

    /// Adds an element that may be missing.
    #[must_use]
    pub fn nullable(mut self, element: Option<T>) -> Self {
        self.elements.push(element);
        self
    }

    /// Freezes the distinct collected elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullElement`] at the first missing element.
    pub fn build(self) -> Result<ImmutableSet<T>, CollectionError> {
        present_elements("SetBuilder", self.elements).map(ImmutableSet::of)
    }
}

impl<T: Hash + Eq> Default for SetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates possibly incomplete entries for an [`ImmutableMap`].
///
/// # Examples
///
/// ```rust
/// use frozen::{CollectionError, MissingPart};
/// use frozen::immutable::ImmutableMap;
///
/// let map = ImmutableMap::builder()
///     .entry("a", 1)
///     .entries([("b", 2)])
///     .build()
///     .unwrap();
/// assert_eq!(map.len(), 2);
///
/// let error = ImmutableMap::<&str, i32>::builder()
///     .nullable_entry(None, Some(1))
///     .build()
///     .unwrap_err();
/// assert_eq!(error, CollectionError::NullKeyOrValue { index: 0, missing: MissingPart::Key });
/// ```
#[derive(Debug, Clone)]
pub struct MapBuilder<K, V> {
    entries: Vec<(Option<K>, Option<V>)>,
}

impl<K: Hash + Eq, V> MapBuilder<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds one entry; a later entry for the same key wins.
    #[must_use]
    pub fn entry(self, key: K, value: V) -> Self {
        self.nullable_entry(Some(key), Some(value))
    }

    /// Adds every pair of `entries`.
    #[must_use]
    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries
            .extend(entries.into_iter().map(|(key, value)| (Some(key), Some(value))));
        self
    }

    /// Adds an entry whose key or value may be missing.
    #[must_use]
    pub fn nullable_entry(mut self, key: Option<K>, value: Option<V>) -> Self {
        self.entries.push((key, value));
        self
    }

    /// Freezes the collected entries.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullKeyOrValue`] at the first entry with a
    /// missing key or value.
    pub fn build(self) -> Result<ImmutableMap<K, V>, CollectionError> {
        present_entries("MapBuilder", self.entries).map(ImmutableMap::of)
    }
}

impl<K: Hash + Eq, V> Default for MapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingPart;
    use rstest::rstest;

    #[rstest]
    fn test_empty_builders_build_empty_containers() {
        assert!(ListBuilder::<i32>::default().build().unwrap().is_empty());
        assert!(SetBuilder::<i32>::default().build().unwrap().is_empty());
        assert!(MapBuilder::<i32, i32>::default().build().unwrap().is_empty());
    }

    #[rstest]
    fn test_list_builder_keeps_order() {
        let list = ImmutableList::builder()
            .elements(["x", "y"])
            .element("x")
            .build()
            .unwrap();
        assert_eq!(list.as_slice(), &["x", "y", "x"]);
    }

    #[rstest]
    fn test_set_builder_deduplicates_and_rejects_missing() {
        let set = ImmutableSet::builder().elements([1, 1, 2]).build().unwrap();
        assert_eq!(set.len(), 2);

        let error = ImmutableSet::<i32>::builder()
            .element(1)
            .nullable(None)
            .build()
            .unwrap_err();
        assert_eq!(error, CollectionError::NullElement { index: 1 });
    }

    #[rstest]
    fn test_map_builder_reports_missing_value() {
        let error = ImmutableMap::builder()
            .entry("a", 1)
            .nullable_entry(Some("b"), None)
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            CollectionError::NullKeyOrValue {
                index: 1,
                missing: MissingPart::Value
            }
        );
    }
}
