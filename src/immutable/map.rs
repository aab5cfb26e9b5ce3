//! Immutable hash map.
//!
//! [`ImmutableMap`] is a frozen snapshot of key/value associations. Lookups
//! of absent keys answer `None`; they never fail. The derived views
//! (`key_set`, `values`, `entries`, `entry_set`) are fresh immutable
//! containers over copies of the data.
//!
//! # Examples
//!
//! ```rust
//! use frozen::immutable::ImmutableMap;
//!
//! let stock = ImmutableMap::of([("apple", 3), ("pear", 0), ("plum", 3)]);
//! assert_eq!(stock.get("apple"), Some(&3));
//! assert_eq!(stock.get("kiwi"), None);
//!
//! let three = stock.find_by_value(&3);
//! assert_eq!(three.len(), 2);
//! assert!(three.contains(&"plum"));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use super::builder::MapBuilder;
use super::display;
use super::element_type::ElementType;
use super::validate::present_entries;
use super::{Entry, HashBuilder, ImmutableList, ImmutableSet};
use crate::error::CollectionError;

type Storage<K, V> = HashMap<K, V, HashBuilder>;

// =============================================================================
// ImmutableMap Definition
// =============================================================================

/// An immutable map from distinct keys to values, backed by a hash table.
///
/// # Time Complexity
///
/// | Operation        | Complexity    |
/// |------------------|---------------|
/// | `of`             | O(n)          |
/// | `get`            | O(1) expected |
/// | `contains_key`   | O(1) expected |
/// | `contains_value` | O(n)          |
/// | `find_by_value`  | O(n)          |
/// | `clone`          | O(1)          |
pub struct ImmutableMap<K, V> {
    entries: Arc<Storage<K, V>>,
}

impl<K, V> ImmutableMap<K, V> {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in unspecified order.
    #[must_use]
    pub fn iter(&self) -> ImmutableMapIterator<'_, K, V> {
        ImmutableMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Visits every key/value pair in unspecified order.
    pub fn for_each<F>(&self, mut consumer: F)
    where
        F: FnMut(&K, &V),
    {
        self.entries.iter().for_each(|(key, value)| consumer(key, value));
    }

    pub(crate) fn from_storage(entries: Storage<K, V>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl<K: Hash + Eq, V> ImmutableMap<K, V> {
    /// Returns an empty map.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_storage(Storage::default())
    }

    /// Creates a map from key/value pairs.
    ///
    /// When a key repeats, the later value replaces the earlier one.
    #[must_use]
    pub fn of<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_storage(entries.into_iter().collect())
    }

    /// Freezes a snapshot of an existing map.
    #[must_use]
    pub fn from_map<S: BuildHasher>(entries: HashMap<K, V, S>) -> Self {
        Self::of(entries)
    }

    /// Creates a map from a nullable entry source.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NullKeyOrValue`] naming the first entry
    /// with a missing key or value; no map is built in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frozen::{CollectionError, MissingPart};
    /// use frozen::immutable::ImmutableMap;
    ///
    /// let error = ImmutableMap::try_of([(Some("a"), Some(1)), (Some("b"), None)]).unwrap_err();
    /// assert_eq!(
    ///     error,
    ///     CollectionError::NullKeyOrValue { index: 1, missing: MissingPart::Value }
    /// );
    /// ```
    pub fn try_of<I>(entries: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (Option<K>, Option<V>)>,
    {
        present_entries("ImmutableMap", entries).map(Self::of)
    }

    /// Returns a builder that validates its entries when built.
    #[must_use]
    pub fn builder() -> MapBuilder<K, V> {
        MapBuilder::new()
    }

    /// Returns the value mapped to `key`, if any.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns the value mapped to `key`, or `default` when absent.
    #[must_use]
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if `key` is mapped.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }
}

impl<K, V: PartialEq> ImmutableMap<K, V> {
    /// Returns `true` if some key maps to a value equal to `value`.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.entries.values().any(|candidate| candidate == value)
    }
}

impl<K: 'static, V: 'static> ImmutableMap<K, V> {
    /// Returns the descriptor of the key type, without an instance.
    #[must_use]
    pub fn key_type() -> ElementType {
        ElementType::of::<K>()
    }

    /// Returns the descriptor of the value type, without an instance.
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

impl<K: Clone + Hash + Eq, V: PartialEq> ImmutableMap<K, V> {
    /// Returns every key whose value equals `value`.
    ///
    /// This is a linear scan over all entries.
    #[must_use]
    pub fn find_by_value(&self, value: &V) -> ImmutableSet<K> {
        self.entries
            .iter()
            .filter(|(_, candidate)| *candidate == value)
            .map(|(key, _)| key.clone())
            .collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone> ImmutableMap<K, V> {
    /// Returns a mutable copy of the entries.
    ///
    /// Changing the returned map never affects this one.
    #[must_use]
    pub fn unwrap(&self) -> HashMap<K, V, HashBuilder> {
        Storage::clone(&self.entries)
    }

    /// Returns a map with its own, independently copied storage.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_storage(self.unwrap())
    }

    /// Returns the keys as a set.
    #[must_use]
    pub fn key_set(&self) -> ImmutableSet<K> {
        self.entries.keys().cloned().collect()
    }

    /// Returns the values, in unspecified order, duplicates kept.
    #[must_use]
    pub fn values(&self) -> ImmutableList<V> {
        self.entries.values().cloned().collect()
    }

    /// Returns the entries as a list, in unspecified order.
    #[must_use]
    pub fn entries(&self) -> ImmutableList<Entry<K, V>> {
        self.iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone + Hash + Eq> ImmutableMap<K, V> {
    /// Returns the entries as a set.
    #[must_use]
    pub fn entry_set(&self) -> ImmutableSet<Entry<K, V>> {
        self.iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(feature = "serde")]
impl<K, V> ImmutableMap<K, V>
where
    K: serde::Serialize + Hash + Eq + Ord + fmt::Debug,
    V: serde::Serialize + fmt::Debug,
{
    /// Renders the map as a JSON object in ascending key order, bounded
    /// to `DISPLAY_LIMIT` characters.
    ///
    /// Keys that do not serialize as JSON object keys fall back to the
    /// plain rendering.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        let ordered: std::collections::BTreeMap<&K, &V> = self.iter().collect();
        display::render_json(&ordered, || display::render_entries(&ordered))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`ImmutableMap`].
pub struct ImmutableMapIterator<'a, K, V> {
    inner: std::collections::hash_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for ImmutableMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ImmutableMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for ImmutableMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K: Hash + Eq, V> Default for ImmutableMap<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<K: Hash + Eq, V> FromIterator<Entry<K, V>> for ImmutableMap<K, V> {
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        Self::of(iter.into_iter().map(Entry::into_parts))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> From<HashMap<K, V, S>> for ImmutableMap<K, V> {
    fn from(entries: HashMap<K, V, S>) -> Self {
        Self::from_map(entries)
    }
}

impl<'a, K, V> IntoIterator for &'a ImmutableMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ImmutableMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for ImmutableMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for ImmutableMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ImmutableMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Debug + Ord, V: fmt::Debug> fmt::Display for ImmutableMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_rendered(formatter, &display::render_sorted_entries(self.iter()))
    }
}

// =============================================================================
// Rayon Support
// =============================================================================

#[cfg(feature = "rayon")]
impl<K: Hash + Eq + Send, V: Send> rayon::iter::FromParallelIterator<(K, V)>
    for ImmutableMap<K, V>
{
    fn from_par_iter<I>(iter: I) -> Self
    where
        I: rayon::iter::IntoParallelIterator<Item = (K, V)>,
    {
        Self::of(<Vec<(K, V)> as rayon::iter::FromParallelIterator<(K, V)>>::from_par_iter(iter))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for ImmutableMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ImmutableMap<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Storage<K, V> as serde::Deserialize>::deserialize(deserializer).map(Self::from_storage)
    }
}

// =============================================================================
// Tests
// =============================================================================
