//! Immutable map keyed by enum constants.
//!
//! [`ImmutableEnumMap`] is a direct-mapped table with one slot per
//! constant of the key enumeration. Lookups index the slot by ordinal and
//! iteration follows ordinal order.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::{Enumeration, ImmutableEnumMap};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Coin { Penny, Nickel, Dime }
//!
//! impl Enumeration for Coin {
//!     const VARIANTS: &'static [Self] = &[Self::Penny, Self::Nickel, Self::Dime];
//!     fn ordinal(self) -> usize { self as usize }
//! }
//!
//! let cents = ImmutableEnumMap::of([(Coin::Dime, 10), (Coin::Penny, 1)]);
//! assert_eq!(cents.get(Coin::Dime), Some(&10));
//! assert_eq!(cents.get(Coin::Nickel), None);
//! assert_eq!(cents.values().as_slice(), &[1, 10]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use super::display;
use super::element_type::ElementType;
use super::validate::present_entries;
use super::{EnumBitSet, Entry, Enumeration, ImmutableEnumSet, ImmutableList};
use crate::error::CollectionError;

// =============================================================================
// ImmutableEnumMap Definition
// =============================================================================

/// An immutable map from enum constants to values.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `get`            | O(1)       |
/// | `contains_key`   | O(1)       |
/// | `len`            | O(1)       |
/// | `find_by_value`  | O(COUNT)   |
/// | `iter`           | O(COUNT)   |
pub struct ImmutableEnumMap<K, V> {
    slots: Arc<[Option<V>]>,
    length: usize,
    marker: PhantomData<fn() -> K>,
}

impl<K: Enumeration, V> ImmutableEnumMap<K, V> {
    /// Returns an empty map.
    #[must_use]
    pub fn empty() -> Self {
        Self::of(Vec::new())
    }

    /// Creates a map from key/value pairs.
    ///
    /// When a key repeats, the later value replaces the earlier one.
    #[must_use]
    pub fn of<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut slots: Vec<Option<V>> = std::iter::repeat_with(|| None).take(K::COUNT).collect();
        for (key, value) in entries {
            slots[key.ordinal()] = Some(value);
        }
        Self::from_slots(slots)
    }

    /// Creates a map from a nullable entry source.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullKeyOrValue`] naming the first entry
    /// with a missing key or value.
    pub fn try_of<I>(entries: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (Option<K>, Option<V>)>,
    {
        present_entries("ImmutableEnumMap", entries).map(Self::of)
    }

    pub(crate) fn from_slots(slots: Vec<Option<V>>) -> Self {
        let length = slots.iter().filter(|slot| slot.is_some()).count();
        Self {
            slots: Arc::from(slots),
            length,
            marker: PhantomData,
        }
    }

    /// Returns the number of mapped keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if no key is mapped.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the value mapped to `key`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, key: K) -> Option<&V> {
        self.slots.get(key.ordinal()).and_then(Option::as_ref)
    }

    /// Returns the value mapped to `key`, or `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if `key` is mapped.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Iterates the entries in ordinal order of their keys.
    #[must_use]
    pub fn iter(&self) -> ImmutableEnumMapIterator<'_, K, V> {
        ImmutableEnumMapIterator {
            inner: self.slots.iter().enumerate(),
            remaining: self.length,
            marker: PhantomData,
        }
    }

    /// Returns the mapped keys.
    #[must_use]
    pub fn key_set(&self) -> ImmutableEnumSet<K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns the key type descriptor, without an instance.
    #[must_use]
    pub fn key_type() -> ElementType {
        ElementType::of::<K>()
    }
}

impl<K: Enumeration, V: 'static> ImmutableEnumMap<K, V> {
    /// Returns the value type descriptor, without an instance.
    #[must_use]
    pub fn value_type() -> ElementType {
        ElementType::of::<V>()
    }

    /// Returns the key and value type descriptors of this map.
    #[must_use]
    pub fn key(&self) -> (ElementType, ElementType) {
        (Self::key_type(), Self::value_type())
    }
}

impl<K: Enumeration, V: PartialEq> ImmutableEnumMap<K, V> {
    /// Returns `true` if some key maps to a value equal to `value`.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.iter().any(|(_, candidate)| candidate == value)
    }

    /// Returns every key whose value equals `value`.
    #[must_use]
    pub fn find_by_value(&self, value: &V) -> ImmutableEnumSet<K> {
        let keys: EnumBitSet<K> = self
            .iter()
            .filter(|(_, candidate)| *candidate == value)
            .map(|(key, _)| key)
            .collect();
        ImmutableEnumSet::from(keys)
    }
}

impl<K: Enumeration, V: Clone> ImmutableEnumMap<K, V> {
    /// Returns the values in ordinal order of their keys.
    #[must_use]
    pub fn values(&self) -> ImmutableList<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the entries in ordinal order of their keys.
    #[must_use]
    pub fn entries(&self) -> ImmutableList<Entry<K, V>> {
        self.iter()
            .map(|(key, value)| Entry::new(key, value.clone()))
            .collect()
    }

    /// Returns a mutable copy of the entries, in ordinal order.
    #[must_use]
    pub fn unwrap(&self) -> Vec<(K, V)> {
        self.iter().map(|(key, value)| (key, value.clone())).collect()
    }

    /// Returns a map with its own, independently copied storage.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_slots(self.slots.to_vec())
    }
}

#[cfg(feature = "serde")]
impl<K, V> ImmutableEnumMap<K, V>
where
    K: Enumeration + serde::Serialize + fmt::Debug,
    V: serde::Serialize + fmt::Debug,
{
    /// Renders the map as a JSON object, bounded to `DISPLAY_LIMIT`
    /// characters.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        display::render_json(self, || display::render_entries(self.iter()))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`ImmutableEnumMap`], in ordinal order.
pub struct ImmutableEnumMapIterator<'a, K, V> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<V>>>,
    remaining: usize,
    marker: PhantomData<fn() -> K>,
}

impl<'a, K: Enumeration, V> Iterator for ImmutableEnumMapIterator<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for (ordinal, slot) in self.inner.by_ref() {
            if let Some(value) = slot
                && let Some(key) = K::from_ordinal(ordinal)
            {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Enumeration, V> ExactSizeIterator for ImmutableEnumMapIterator<'_, K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for ImmutableEnumMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            length: self.length,
            marker: PhantomData,
        }
    }
}

impl<K: Enumeration, V> Default for ImmutableEnumMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: Enumeration, V> FromIterator<(K, V)> for ImmutableEnumMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a, K: Enumeration, V> IntoIterator for &'a ImmutableEnumMap<K, V> {
    type Item = (K, &'a V);
    type IntoIter = ImmutableEnumMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V: PartialEq> PartialEq for ImmutableEnumMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<K, V: Eq> Eq for ImmutableEnumMap<K, V> {}

impl<K: Enumeration + fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableEnumMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Enumeration + fmt::Debug, V: fmt::Debug> fmt::Display for ImmutableEnumMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_rendered(formatter, &display::render_entries(self.iter()))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for ImmutableEnumMap<K, V>
where
    K: Enumeration + serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
struct ImmutableEnumMapVisitor<K, V> {
    marker: PhantomData<fn() -> (K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for ImmutableEnumMapVisitor<K, V>
where
    K: Enumeration + serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    type Value = ImmutableEnumMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map keyed by enum constants")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries: Vec<(K, V)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry()? {
            entries.push(entry);
        }
        Ok(ImmutableEnumMap::of(entries))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ImmutableEnumMap<K, V>
where
    K: Enumeration + serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ImmutableEnumMapVisitor {
            marker: PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingPart;
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Planet {
        Mercury,
        Venus,
        Earth,
        Mars,
    }

    impl Enumeration for Planet {
        const VARIANTS: &'static [Self] = &[Self::Mercury, Self::Venus, Self::Earth, Self::Mars];

        fn ordinal(self) -> usize {
            self as usize
        }
    }

    fn moons() -> ImmutableEnumMap<Planet, u32> {
        ImmutableEnumMap::of([
            (Planet::Mars, 2),
            (Planet::Earth, 1),
            (Planet::Mercury, 0),
            (Planet::Venus, 0),
        ])
    }

    #[rstest]
    fn test_iterates_in_ordinal_order() {
        let keys: Vec<Planet> = moons().iter().map(|(key, _)| key).collect();
        assert_eq!(keys, Planet::VARIANTS.to_vec());
    }

    #[rstest]
    fn test_find_by_value() {
        let none = moons().find_by_value(&0);
        assert_eq!(none, ImmutableEnumSet::of([Planet::Mercury, Planet::Venus]));
        assert!(moons().find_by_value(&99).is_empty());
    }

    #[rstest]
    fn test_later_duplicate_overwrites() {
        let map = ImmutableEnumMap::of([(Planet::Earth, 1), (Planet::Earth, 7)]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(Planet::Earth), Some(&7));
    }

    #[rstest]
    fn test_missing_key_is_none() {
        let map: ImmutableEnumMap<Planet, u32> = ImmutableEnumMap::empty();
        assert!(map.is_empty());
        assert_eq!(map.get(Planet::Mars), None);
        assert_eq!(map.get_or(Planet::Mars, &5), &5);
    }

    #[rstest]
    fn test_try_of_rejects_missing_value() {
        let error = ImmutableEnumMap::<Planet, u32>::try_of([(Some(Planet::Mars), None)]).unwrap_err();
        assert_eq!(
            error,
            CollectionError::NullKeyOrValue {
                index: 0,
                missing: MissingPart::Value
            }
        );
    }

    #[rstest]
    fn test_views() {
        let map = ImmutableEnumMap::of([(Planet::Mars, 2), (Planet::Venus, 0)]);
        assert_eq!(map.key_set(), ImmutableEnumSet::of([Planet::Venus, Planet::Mars]));
        assert_eq!(map.values().as_slice(), &[0, 2]);
        assert_eq!(map.entries().first(), Some(&Entry::new(Planet::Venus, 0)));
        assert_eq!(map.unwrap(), vec![(Planet::Venus, 0), (Planet::Mars, 2)]);
    }

    #[rstest]
    fn test_deep_clone_has_own_storage() {
        let map = moons();
        let copy = map.deep_clone();
        assert_eq!(copy, map);
        assert!(!Arc::ptr_eq(&copy.slots, &map.slots));
    }

    #[rstest]
    fn test_display() {
        let map = ImmutableEnumMap::of([(Planet::Mars, 2), (Planet::Earth, 1)]);
        assert_eq!(format!("{map}"), "{Earth: 1, Mars: 2}");
    }
}
