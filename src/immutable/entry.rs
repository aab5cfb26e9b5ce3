//! Immutable key/value pairs.
//!
//! [`Entry`] is the element type of [`ImmutableMap::entries`] and
//! [`ImmutableMap::entry_set`]. It carries comparator factories for ordering
//! entries by key or by value.
//!
//! [`ImmutableMap::entries`]: super::ImmutableMap::entries
//! [`ImmutableMap::entry_set`]: super::ImmutableMap::entry_set

use std::cmp::Ordering;
use std::fmt;

/// An immutable key/value pair.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable::Entry;
///
/// let mut entries = vec![Entry::new("b", 1), Entry::new("a", 2)];
/// entries.sort_by(Entry::comparing_by_key());
/// assert_eq!(entries[0].key(), &"a");
///
/// entries.sort_by(Entry::comparing_by_value());
/// assert_eq!(entries[0].value(), &1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry into its key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Orders entries by key with `comparator`.
    pub fn comparing_by_key_with<C>(comparator: C) -> impl Fn(&Self, &Self) -> Ordering
    where
        C: Fn(&K, &K) -> Ordering,
    {
        move |left, right| comparator(&left.key, &right.key)
    }

    /// Orders entries by value with `comparator`.
    pub fn comparing_by_value_with<C>(comparator: C) -> impl Fn(&Self, &Self) -> Ordering
    where
        C: Fn(&V, &V) -> Ordering,
    {
        move |left, right| comparator(&left.value, &right.value)
    }
}

impl<K: Ord, V> Entry<K, V> {
    /// Orders entries by the natural order of their keys.
    pub fn comparing_by_key() -> impl Fn(&Self, &Self) -> Ordering {
        Self::comparing_by_key_with(K::cmp)
    }
}

impl<K, V: Ord> Entry<K, V> {
    /// Orders entries by the natural order of their values.
    pub fn comparing_by_value() -> impl Fn(&Self, &Self) -> Ordering {
        Self::comparing_by_value_with(V::cmp)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}={:?}", self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_accessors_and_parts() {
        let entry = Entry::new("key", 7);
        assert_eq!(entry.key(), &"key");
        assert_eq!(entry.value(), &7);
        assert_eq!(entry.into_parts(), ("key", 7));
    }

    #[rstest]
    fn test_from_tuple() {
        let entry: Entry<&str, i32> = ("a", 1).into();
        assert_eq!(entry, Entry::new("a", 1));
    }

    #[rstest]
    fn test_comparing_by_key_with_reverse() {
        let mut entries = vec![Entry::new(1, "x"), Entry::new(3, "y"), Entry::new(2, "z")];
        entries.sort_by(Entry::comparing_by_key_with(|left: &i32, right: &i32| right.cmp(left)));
        let keys: Vec<i32> = entries.iter().map(|entry| *entry.key()).collect();
        assert_eq!(keys, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_comparing_by_value() {
        let mut entries = vec![Entry::new("a", 3), Entry::new("b", 1)];
        entries.sort_by(Entry::comparing_by_value());
        assert_eq!(entries[0].key(), &"b");
    }

    #[rstest]
    fn test_debug_rendering() {
        assert_eq!(format!("{:?}", Entry::new("a", 1)), "\"a\"=1");
    }
}
