#![cfg(feature = "immutable")]
//! Integration tests for `ImmutableList`.
//!
//! Covers construction, the all-or-nothing handling of missing elements,
//! bounds-checked access, conversions, and copy isolation.

use std::any::Any;

use frozen::immutable::{ElementType, ImmutableList, ImmutableSortedSet};
use frozen::typeclass::Foldable;
use frozen::{CollectionError, immutable_list};
use rstest::{fixture, rstest};

#[fixture]
fn letters() -> ImmutableList<&'static str> {
    immutable_list!["c", "a", "b", "a"]
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_factories_agree(letters: ImmutableList<&'static str>) {
    let from_of = ImmutableList::of(["c", "a", "b", "a"]);
    let from_slice = ImmutableList::of_slice(&["c", "a", "b", "a"]);
    let from_iterator: ImmutableList<&str> = ["c", "a", "b", "a"].into_iter().collect();
    assert_eq!(letters, from_of);
    assert_eq!(letters, from_slice);
    assert_eq!(letters, from_iterator);
}

#[rstest]
#[case(vec![None], 0)]
#[case(vec![Some(1), Some(2), None], 2)]
#[case(vec![Some(1), None, Some(3), None], 1)]
fn test_try_of_reports_first_missing(#[case] source: Vec<Option<i32>>, #[case] index: usize) {
    assert_eq!(
        ImmutableList::try_of(source).unwrap_err(),
        CollectionError::NullElement { index }
    );
}

#[rstest]
fn test_try_of_all_present() {
    let list = ImmutableList::try_of([Some(1), Some(2)]).unwrap();
    assert_eq!(list.as_slice(), &[1, 2]);
}

#[rstest]
fn test_from_erased_checks_every_value() {
    let values: Vec<Box<dyn Any>> = vec![Box::new(1_u8), Box::new(2_u8)];
    let list = ImmutableList::<u8>::from_erased(values).unwrap();
    assert_eq!(list.as_slice(), &[1, 2]);

    let mixed: Vec<Box<dyn Any>> = vec![Box::new(1_u8), Box::new("two")];
    assert_eq!(
        ImmutableList::<u8>::from_erased(mixed).unwrap_err(),
        CollectionError::TypeMismatch {
            expected: "u8",
            index: 1
        }
    );
}

#[rstest]
fn test_empty_lists_of_different_types_are_both_empty() {
    let strings: ImmutableList<String> = ImmutableList::empty();
    let numbers: ImmutableList<u64> = ImmutableList::empty();
    assert!(strings.is_empty());
    assert_eq!(numbers.len(), 0);
    assert_ne!(strings.key(), numbers.key());
}

// =============================================================================
// Access
// =============================================================================

#[rstest]
#[case(0, false)]
#[case(3, false)]
#[case(4, true)]
#[case(usize::MAX, true)]
fn test_bounds(letters: ImmutableList<&'static str>, #[case] index: usize, #[case] out: bool) {
    assert_eq!(letters.is_index_out_of_bounds(index), out);
    assert_eq!(letters.get(index).is_err(), out);
}

#[rstest]
fn test_out_of_bounds_error(letters: ImmutableList<&'static str>) {
    assert_eq!(
        letters.get(9),
        Err(CollectionError::IndexOutOfBounds {
            index: 9,
            length: 4
        })
    );
}

#[rstest]
fn test_search(letters: ImmutableList<&'static str>) {
    assert!(letters.contains(&"b"));
    assert!(!letters.contains(&"z"));
    assert_eq!(letters.index_of(&"a"), Some(1));
    assert_eq!(letters.last_index_of(&"a"), Some(3));
    assert_eq!(letters.first(), Some(&"c"));
    assert_eq!(letters.last(), Some(&"a"));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_to_set_deduplicates(letters: ImmutableList<&'static str>) {
    let set = letters.to_set();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&"a"));
}

#[rstest]
fn test_to_sorted_set_orders(letters: ImmutableList<&'static str>) {
    assert_eq!(letters.to_sorted_set().unwrap(), vec!["a", "b", "c"]);
    let reversed: ImmutableSortedSet<&str> =
        letters.to_sorted_set_by(|left: &&str, right: &&str| right.cmp(left));
    assert_eq!(reversed.unwrap(), vec!["c", "b", "a"]);
}

#[rstest]
fn test_conversions_keep_element_type(letters: ImmutableList<&'static str>) {
    let expected = ElementType::of::<&str>();
    assert_eq!(letters.key(), expected);
    assert_eq!(letters.to_set().key(), expected);
    assert_eq!(letters.deep_clone().key(), expected);
}

#[rstest]
fn test_ordered_iteration_does_not_reorder_list(letters: ImmutableList<&'static str>) {
    let mut visited = Vec::new();
    letters.for_each_ordered(|letter| visited.push(*letter));
    assert_eq!(visited, vec!["a", "a", "b", "c"]);
    assert_eq!(letters.as_slice(), &["c", "a", "b", "a"]);
    assert_eq!(letters.min(), Some(&"a"));
    assert_eq!(letters.max(), Some(&"c"));
}

// =============================================================================
// Isolation
// =============================================================================

#[rstest]
fn test_unwrap_copies_are_independent(letters: ImmutableList<&'static str>) {
    let mut first = letters.unwrap();
    first.push("z");
    first[0] = "y";
    assert_eq!(letters.unwrap(), vec!["c", "a", "b", "a"]);
    assert_eq!(letters.len(), 4);
}

#[rstest]
fn test_deep_clone_equals_original(letters: ImmutableList<&'static str>) {
    let copy = letters.deep_clone();
    assert_eq!(copy, letters);
    drop(letters);
    assert_eq!(copy.len(), 4);
}

#[rstest]
fn test_fold_left(letters: ImmutableList<&'static str>) {
    let joined = letters.fold_left(String::new(), |mut text, letter| {
        text.push_str(letter);
        text
    });
    assert_eq!(joined, "caba");
}
