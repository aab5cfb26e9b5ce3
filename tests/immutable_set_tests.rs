#![cfg(feature = "immutable")]
//! Integration tests for `ImmutableSet` and `ImmutableSortedSet`.

use std::any::Any;
use std::collections::HashSet;

use frozen::capability::NoElement;
use frozen::immutable::{ImmutableList, ImmutableSet, ImmutableSortedSet};
use frozen::{CollectionError, immutable_set, immutable_sorted_set};
use rstest::rstest;

// =============================================================================
// ImmutableSet
// =============================================================================

#[rstest]
fn test_duplicates_are_collapsed() {
    let set = immutable_set![4, 4, 2, 4];
    assert_eq!(set.len(), 2);
    assert_eq!(set, ImmutableSet::of([2, 4]));
}

#[rstest]
fn test_try_of_and_builder_reject_missing() {
    assert_eq!(
        ImmutableSet::try_of([Some("a"), None]).unwrap_err(),
        CollectionError::NullElement { index: 1 }
    );
    let error = ImmutableSet::<&str>::builder()
        .nullable(None)
        .element("b")
        .build()
        .unwrap_err();
    assert_eq!(error, CollectionError::NullElement { index: 0 });
}

#[rstest]
fn test_merge_is_union() {
    let left = ImmutableSet::of([1, 2, 3]);
    let right = ImmutableSet::of([3, 4]);
    let merged = ImmutableSet::merge(&left, &right);
    assert_eq!(merged, ImmutableSet::of([1, 2, 3, 4]));
    assert_eq!(ImmutableSet::merge(&right, &left), merged);
    assert_eq!(left.len(), 3);
}

#[rstest]
fn test_set_algebra() {
    let left = ImmutableSet::of([1, 2, 3]);
    let right = ImmutableSet::of([2, 3, 4]);
    assert_eq!(left.intersection(&right), ImmutableSet::of([2, 3]));
    assert_eq!(left.difference(&right), ImmutableSet::of([1]));
    assert!(ImmutableSet::of([2]).is_subset(&left));
}

#[rstest]
fn test_natural_and_comparator_queries() {
    let set = ImmutableSet::of(["pear", "fig", "banana"]);
    assert_eq!(set.min(), Some(&"banana"));
    assert_eq!(set.max(), Some(&"pear"));
    assert_eq!(set.find_first(), Some(&"banana"));
    assert_eq!(set.find_last(), Some(&"pear"));
    assert_eq!(
        set.find_first_by(|left, right| left.len().cmp(&right.len())),
        Some(&"fig")
    );
    assert_eq!(
        set.find_last_by(|left, right| left.len().cmp(&right.len())),
        Some(&"banana")
    );
}

#[rstest]
fn test_find_any() {
    assert!(ImmutableSet::of([7]).find_any() == Some(&7));
    assert_eq!(ImmutableSet::<i32>::empty().find_any(), None);
}

#[rstest]
fn test_for_each_ordered() {
    let set = ImmutableSet::of([3, 1, 2]);
    let mut ascending = Vec::new();
    set.for_each_ordered(|element| ascending.push(*element));
    assert_eq!(ascending, vec![1, 2, 3]);

    let mut descending = Vec::new();
    set.for_each_ordered_by(|element| descending.push(*element), |left, right| right.cmp(left));
    assert_eq!(descending, vec![3, 2, 1]);
}

#[rstest]
fn test_unwrap_is_isolated() {
    let set = ImmutableSet::of([1, 2]);
    let mut copy = set.unwrap();
    copy.clear();
    assert_eq!(set.len(), 2);
    assert_eq!(set.unwrap().len(), 2);
}

#[rstest]
fn test_conversions() {
    let set = ImmutableSet::of([2, 1]);
    let mut listed = set.to_list().unwrap();
    listed.sort_unstable();
    assert_eq!(listed, vec![1, 2]);
    assert_eq!(set.to_sorted_set().unwrap(), vec![1, 2]);
    assert_eq!(set.deep_clone(), set);
}

#[rstest]
fn test_from_erased_into_placeholder_is_unsupported() {
    let values: Vec<Box<dyn Any>> = Vec::new();
    let error = ImmutableSet::<NoElement>::from_erased(values).unwrap_err();
    assert!(matches!(
        error,
        CollectionError::UnsupportedFactoryCall { .. }
    ));
}

#[rstest]
fn test_contains_with_borrowed_form() {
    let set: ImmutableSet<String> = ["ice".to_string()].into_iter().collect();
    assert!(set.contains("ice"));
    let owned: HashSet<String, _> = set.unwrap();
    assert!(owned.contains("ice"));
}

// =============================================================================
// ImmutableSortedSet
// =============================================================================

#[rstest]
fn test_sorted_iteration() {
    let set = immutable_sorted_set![9, 3, 6, 3];
    let visited: Vec<i32> = set.iter().copied().collect();
    assert_eq!(visited, vec![3, 6, 9]);
    assert_eq!(set.min(), Some(&3));
    assert_eq!(set.max(), Some(&9));
}

#[rstest]
fn test_sorted_set_with_case_insensitive_comparator() {
    let set = ImmutableSortedSet::of_by(["b", "A", "a", "C"], |left: &&str, right: &&str| {
        left.to_lowercase().cmp(&right.to_lowercase())
    });
    assert_eq!(set.len(), 3);
    assert!(set.contains(&"B"));
    assert_eq!(set.last(), Some(&"C"));
}

#[rstest]
fn test_sorted_set_ranges() {
    let set = ImmutableSortedSet::of(1..=10);
    assert_eq!(set.head_set(&4).unwrap(), vec![1, 2, 3]);
    assert_eq!(set.tail_set(&8).unwrap(), vec![8, 9, 10]);
    assert_eq!(set.tail_set(&11).len(), 0);
}

#[rstest]
fn test_sorted_set_merge_and_conversions() {
    let merged = ImmutableSortedSet::merge(
        &ImmutableSortedSet::of([5, 1]),
        &ImmutableSortedSet::of([3, 1]),
    );
    assert_eq!(merged.unwrap(), vec![1, 3, 5]);
    assert_eq!(merged.to_list(), ImmutableList::of([1, 3, 5]));
    assert_eq!(merged.to_set(), ImmutableSet::of([1, 3, 5]));
}

#[rstest]
fn test_empty_sorted_sets() {
    let natural: ImmutableSortedSet<i32> = ImmutableSortedSet::empty();
    let custom = ImmutableSortedSet::empty_by(|left: &i32, right: &i32| right.cmp(left));
    assert!(natural.is_empty());
    assert!(custom.is_empty());
    assert_eq!(natural.first(), None);
}
