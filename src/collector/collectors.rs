//! Ready-made collectors for every immutable container.
//!
//! Set and map combiners merge the smaller accumulator into the larger one.
//! Sequence combiners append the right partition to the left, so the left
//! partition's elements always come first.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use super::{Characteristic, CollectorImpl};
use crate::immutable::{
    EnumBitSet, Enumeration, HashBuilder, ImmutableEnumList, ImmutableEnumMap, ImmutableEnumSet,
    ImmutableList, ImmutableMap, ImmutableSet, ImmutableSortedSet,
};

/// Constructors for collectors that produce immutable containers.
///
/// # Examples
///
/// ```rust
/// use frozen::collector::ImmutableCollectors;
///
/// let words = ["ice", "snow", "ice", "hail"];
///
/// let list = ImmutableCollectors::to_immutable_list().collect(words);
/// assert_eq!(list.len(), 4);
///
/// let set = ImmutableCollectors::to_immutable_set().collect(words);
/// assert_eq!(set.len(), 3);
///
/// let lengths = ImmutableCollectors::to_immutable_map(
///     |word: &&str| *word,
///     |word: &&str| word.len(),
///     |first, _| first,
/// )
/// .collect(words);
/// assert_eq!(lengths.get("hail"), Some(&4));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmutableCollectors;

impl ImmutableCollectors {
    /// Collects into an [`ImmutableList`] in encounter order.
    #[must_use]
    pub fn to_immutable_list<T: 'static>() -> CollectorImpl<T, Vec<T>, ImmutableList<T>> {
        CollectorImpl::new(
            Vec::new,
            Vec::push,
            concatenate,
            ImmutableList::from_vec,
            [],
        )
    }

    /// Collects the distinct elements into an [`ImmutableSet`].
    #[must_use]
    pub fn to_immutable_set<T>() -> CollectorImpl<T, HashSet<T, HashBuilder>, ImmutableSet<T>>
    where
        T: Hash + Eq + 'static,
    {
        CollectorImpl::new(
            HashSet::default,
            |accumulator: &mut HashSet<T, HashBuilder>, element| {
                accumulator.insert(element);
            },
            |left: HashSet<T, HashBuilder>, right: HashSet<T, HashBuilder>| {
                let (mut larger, smaller) = larger_first(left, right, HashSet::len);
                larger.extend(smaller);
                larger
            },
            ImmutableSet::from_storage,
            [Characteristic::Unordered],
        )
    }

    /// Collects into an [`ImmutableSortedSet`] in natural order.
    #[must_use]
    pub fn to_immutable_sorted_set<T>() -> CollectorImpl<T, Vec<T>, ImmutableSortedSet<T>>
    where
        T: Ord + 'static,
    {
        CollectorImpl::new(
            Vec::new,
            Vec::push,
            concatenate,
            ImmutableSortedSet::of,
            [Characteristic::Unordered],
        )
    }

    /// Collects into an [`ImmutableSortedSet`] ordered by `comparator`.
    #[must_use]
    pub fn to_immutable_sorted_set_by<T, C>(
        comparator: C,
    ) -> CollectorImpl<T, Vec<T>, ImmutableSortedSet<T>>
    where
        T: 'static,
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let comparator: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync> = Arc::new(comparator);
        CollectorImpl::new(
            Vec::new,
            Vec::push,
            concatenate,
            move |accumulator: Vec<T>| {
                ImmutableSortedSet::with_comparator(accumulator, Arc::clone(&comparator))
            },
            [Characteristic::Unordered],
        )
    }

    /// Collects into an [`ImmutableMap`], deriving each entry from an element.
    ///
    /// When two elements produce the same key, `merge(earlier, later)`
    /// decides the value.
    #[must_use]
    pub fn to_immutable_map<T, K, V, KF, VF, MF>(
        key_mapper: KF,
        value_mapper: VF,
        merge: MF,
    ) -> CollectorImpl<T, HashMap<K, V, HashBuilder>, ImmutableMap<K, V>>
    where
        T: 'static,
        K: Hash + Eq + 'static,
        V: 'static,
        KF: Fn(&T) -> K + Send + Sync + 'static,
        VF: Fn(&T) -> V + Send + Sync + 'static,
        MF: Fn(V, V) -> V + Send + Sync + 'static,
    {
        let merge = Arc::new(merge);
        let accumulate_merge = Arc::clone(&merge);
        CollectorImpl::new(
            HashMap::default,
            move |accumulator: &mut HashMap<K, V, HashBuilder>, element: T| {
                let key = key_mapper(&element);
                let value = value_mapper(&element);
                let merged = match accumulator.remove(&key) {
                    Some(earlier) => accumulate_merge(earlier, value),
                    None => value,
                };
                accumulator.insert(key, merged);
            },
            move |left: HashMap<K, V, HashBuilder>, right: HashMap<K, V, HashBuilder>| {
                merge_maps(left, right, merge.as_ref())
            },
            ImmutableMap::from_storage,
            [Characteristic::Unordered],
        )
    }

    /// Collects the distinct constants into an [`ImmutableEnumSet`].
    #[must_use]
    pub fn to_immutable_enum_set<E: Enumeration>()
    -> CollectorImpl<E, EnumBitSet<E>, ImmutableEnumSet<E>> {
        CollectorImpl::new(
            EnumBitSet::new,
            |accumulator: &mut EnumBitSet<E>, element| {
                accumulator.insert(element);
            },
            |mut left: EnumBitSet<E>, right: EnumBitSet<E>| {
                left.union_with(&right);
                left
            },
            ImmutableEnumSet::from_bits,
            [Characteristic::Unordered],
        )
    }

    /// Collects constants into an [`ImmutableEnumList`] in encounter order.
    #[must_use]
    pub fn to_immutable_enum_list<E: Enumeration>()
    -> CollectorImpl<E, Vec<E>, ImmutableEnumList<E>> {
        CollectorImpl::new(
            Vec::new,
            Vec::push,
            concatenate,
            ImmutableEnumList::of,
            [],
        )
    }

    /// Collects into an [`ImmutableEnumMap`], deriving each entry from an
    /// element.
    ///
    /// When two elements produce the same key, `merge(earlier, later)`
    /// decides the value.
    #[must_use]
    pub fn to_immutable_enum_map<T, K, V, KF, VF, MF>(
        key_mapper: KF,
        value_mapper: VF,
        merge: MF,
    ) -> CollectorImpl<T, Vec<Option<V>>, ImmutableEnumMap<K, V>>
    where
        T: 'static,
        K: Enumeration,
        V: 'static,
        KF: Fn(&T) -> K + Send + Sync + 'static,
        VF: Fn(&T) -> V + Send + Sync + 'static,
        MF: Fn(V, V) -> V + Send + Sync + 'static,
    {
        let merge = Arc::new(merge);
        let accumulate_merge = Arc::clone(&merge);
        CollectorImpl::new(
            || std::iter::repeat_with(|| None).take(K::COUNT).collect(),
            move |slots: &mut Vec<Option<V>>, element: T| {
                let ordinal = key_mapper(&element).ordinal();
                let value = value_mapper(&element);
                slots[ordinal] = Some(match slots[ordinal].take() {
                    Some(earlier) => accumulate_merge(earlier, value),
                    None => value,
                });
            },
            move |left: Vec<Option<V>>, right: Vec<Option<V>>| {
                tracing::trace!(slots = left.len(), "combining enum map accumulators");
                left.into_iter()
                    .zip(right)
                    .map(|slot| match slot {
                        (Some(earlier), Some(later)) => Some(merge(earlier, later)),
                        (earlier, later) => earlier.or(later),
                    })
                    .collect()
            },
            ImmutableEnumMap::from_slots,
            [Characteristic::Unordered],
        )
    }
}

/// Returns the pair ordered larger-first.
fn larger_first<A, F>(left: A, right: A, size: F) -> (A, A)
where
    F: Fn(&A) -> usize,
{
    let (left_size, right_size) = (size(&left), size(&right));
    let absorbed_into = if left_size >= right_size { "left" } else { "right" };
    tracing::trace!(left_size, right_size, absorbed_into, "combining accumulators");
    if left_size >= right_size {
        (left, right)
    } else {
        (right, left)
    }
}

/// Concatenates two sequence accumulators, left elements first.
fn concatenate<T>(mut left: Vec<T>, mut right: Vec<T>) -> Vec<T> {
    tracing::trace!(
        left_size = left.len(),
        right_size = right.len(),
        absorbed_into = "left",
        "combining sequence accumulators"
    );
    left.reserve(right.len());
    left.append(&mut right);
    left
}

/// Merges two map accumulators; on a shared key the left value is the
/// earlier one.
fn merge_maps<K, V, M>(
    left: HashMap<K, V, HashBuilder>,
    right: HashMap<K, V, HashBuilder>,
    merge: &M,
) -> HashMap<K, V, HashBuilder>
where
    K: Hash + Eq,
    M: Fn(V, V) -> V + ?Sized,
{
    let left_is_larger = left.len() >= right.len();
    let (mut larger, smaller) = larger_first(left, right, HashMap::len);
    for (key, value) in smaller {
        let merged = match larger.remove(&key) {
            Some(existing) if left_is_larger => merge(existing, value),
            Some(existing) => merge(value, existing),
            None => value,
        };
        larger.insert(key, merged);
    }
    larger
}
