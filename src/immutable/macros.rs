//! Construction macros for the immutable containers.
//!
//! Each macro accepts any number of elements and expands to the matching
//! `of` factory; with no elements it expands to `empty` (or `none_of`).

/// Creates an [`ImmutableList`](crate::immutable::ImmutableList) from a
/// list of elements.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable_list;
/// use frozen::immutable::ImmutableList;
///
/// let list = immutable_list![3, 1, 3];
/// assert_eq!(list.as_slice(), &[3, 1, 3]);
///
/// let empty: ImmutableList<i32> = immutable_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! immutable_list {
    () => {
        $crate::immutable::ImmutableList::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::immutable::ImmutableList::of([$($element),+])
    };
}

/// Creates an [`ImmutableSet`](crate::immutable::ImmutableSet) from a list
/// of elements; duplicates collapse.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable_set;
///
/// let set = immutable_set!["a", "b", "a"];
/// assert_eq!(set.len(), 2);
/// ```
#[macro_export]
macro_rules! immutable_set {
    () => {
        $crate::immutable::ImmutableSet::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::immutable::ImmutableSet::of([$($element),+])
    };
}

/// Creates an [`ImmutableSortedSet`](crate::immutable::ImmutableSortedSet)
/// in natural order.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable_sorted_set;
///
/// let set = immutable_sorted_set![3, 1, 2, 1];
/// assert_eq!(set.unwrap(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! immutable_sorted_set {
    () => {
        $crate::immutable::ImmutableSortedSet::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::immutable::ImmutableSortedSet::of([$($element),+])
    };
}

/// Creates an [`ImmutableMap`](crate::immutable::ImmutableMap) from
/// `key => value` pairs. A repeated key keeps its last value.
///
/// # Examples
///
/// ```rust
/// use frozen::immutable_map;
///
/// let map = immutable_map! {
///     "one" => 1,
///     "two" => 2,
/// };
/// assert_eq!(map.get("two"), Some(&2));
/// ```
#[macro_export]
macro_rules! immutable_map {
    () => {
        $crate::immutable::ImmutableMap::empty()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::immutable::ImmutableMap::of([$(($key, $value)),+])
    };
}

/// Creates an [`ImmutableEnumSet`](crate::immutable::ImmutableEnumSet)
/// from enum constants.
///
/// # Examples
///
/// ```rust
/// use frozen::{enum_set, enumeration};
///
/// enumeration! {
///     pub enum Flag { Read, Write, Execute }
/// }
///
/// let flags = enum_set![Flag::Execute, Flag::Read];
/// assert_eq!(flags.iter().collect::<Vec<_>>(), vec![Flag::Read, Flag::Execute]);
/// ```
#[macro_export]
macro_rules! enum_set {
    () => {
        $crate::immutable::ImmutableEnumSet::none_of()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::immutable::ImmutableEnumSet::of([$($element),+])
    };
}

/// Declares a field-less enum and implements
/// [`Enumeration`](crate::immutable::Enumeration) for it.
///
/// The enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `PartialOrd` and `Ord`; do not derive them again. Ordinals follow
/// declaration order.
///
/// # Examples
///
/// ```rust
/// use frozen::enumeration;
/// use frozen::immutable::Enumeration;
///
/// enumeration! {
///     /// Compass points.
///     pub enum Direction { North, East, South, West }
/// }
///
/// assert_eq!(Direction::COUNT, 4);
/// assert_eq!(Direction::South.ordinal(), 2);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $visibility:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $visibility enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::immutable::Enumeration for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }
        }
    };
}
