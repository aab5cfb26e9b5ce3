#![cfg(feature = "collector")]
//! Integration tests for `CollectorImpl` and `ImmutableCollectors`.

use frozen::collector::{Characteristic, CollectorImpl, ImmutableCollectors};
use frozen::immutable::{
    ImmutableEnumList, ImmutableEnumMap, ImmutableEnumSet, ImmutableList, ImmutableMap,
    ImmutableSet,
};
use frozen::{CollectionError, enum_set, enumeration};
use rstest::rstest;

enumeration! {
    pub enum Suit { Clubs, Diamonds, Hearts, Spades }
}

// =============================================================================
// CollectorImpl
// =============================================================================

#[rstest]
fn test_custom_collector_runs_every_stage() {
    let joined = CollectorImpl::<&str, String, String>::new(
        String::new,
        |text: &mut String, word: &str| {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(word);
        },
        |mut left: String, right: String| {
            if !left.is_empty() && !right.is_empty() {
                left.push(' ');
            }
            left.push_str(&right);
            left
        },
        |text: String| text.to_uppercase(),
        [],
    );
    assert_eq!(joined.collect(["cold", "as", "ice"]), "COLD AS ICE");
    assert_eq!(joined.collect_chunked(["cold", "as", "ice"], 2), "COLD AS ICE");
    assert!(joined.is_ordered());
    assert!(!joined.is_identity_finish());
}

#[rstest]
fn test_manual_protocol_matches_collect() {
    let collector = ImmutableCollectors::to_immutable_list();
    let mut left = collector.supply();
    collector.accumulate(&mut left, 1);
    collector.accumulate(&mut left, 2);
    let mut right = collector.supply();
    collector.accumulate(&mut right, 3);
    let combined = collector.combine(left, right);
    assert_eq!(collector.finish(combined), collector.collect([1, 2, 3]));
}

#[rstest]
fn test_builder_reports_first_missing_stage() {
    let error = CollectorImpl::<i32, i32, i32>::builder()
        .supplier(|| 0)
        .accumulator(|sum, element| *sum += element)
        .finisher(|sum| sum)
        .build()
        .unwrap_err();
    assert_eq!(error, CollectionError::NullArgument { argument: "combiner" });
}

#[rstest]
fn test_builder_characteristics() {
    let collector = CollectorImpl::<i32, i32, i32>::builder()
        .supplier(|| 0)
        .accumulator(|sum, element| *sum += element)
        .combiner(|left, right| left + right)
        .finisher(|sum| sum)
        .characteristics([Characteristic::Unordered, Characteristic::Concurrent])
        .build()
        .unwrap();
    assert!(collector.is_concurrent());
    assert!(!collector.is_ordered());
    assert_eq!(collector.collect(1..=4), 10);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(100)]
fn test_chunked_list_keeps_encounter_order(#[case] chunk_size: usize) {
    let collector = ImmutableCollectors::to_immutable_list();
    let list = collector.collect_chunked(0..10, chunk_size);
    assert_eq!(list.unwrap(), (0..10).collect::<Vec<_>>());
}

#[rstest]
fn test_collector_is_reusable() {
    let collector = ImmutableCollectors::to_immutable_set();
    let first = collector.collect([1, 2]);
    let second = collector.collect([3]);
    assert_eq!(first, ImmutableSet::of([1, 2]));
    assert_eq!(second, ImmutableSet::of([3]));
}

// =============================================================================
// ImmutableCollectors
// =============================================================================

#[rstest]
fn test_to_immutable_list() {
    let list = ImmutableCollectors::to_immutable_list().collect("frost".chars());
    assert_eq!(list, ImmutableList::of(['f', 'r', 'o', 's', 't']));
    assert!(ImmutableCollectors::to_immutable_list::<u8>().characteristics().is_empty());
}

#[rstest]
fn test_to_immutable_set_is_unordered() {
    let collector = ImmutableCollectors::to_immutable_set();
    assert!(collector.characteristics().contains(Characteristic::Unordered));
    assert_eq!(collector.collect_chunked([1, 1, 2, 3, 2], 2).len(), 3);
}

#[rstest]
fn test_to_immutable_sorted_set_variants() {
    let natural = ImmutableCollectors::to_immutable_sorted_set().collect([3, 1, 2, 1]);
    assert_eq!(natural.unwrap(), vec![1, 2, 3]);

    let descending = ImmutableCollectors::to_immutable_sorted_set_by(|left: &i32, right: &i32| {
        right.cmp(left)
    })
    .collect_chunked([3, 1, 2, 1], 1);
    assert_eq!(descending.unwrap(), vec![3, 2, 1]);
}

#[rstest]
fn test_to_immutable_map_merges_duplicate_keys() {
    let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
    let by_initial = ImmutableCollectors::to_immutable_map(
        |word: &&str| word.chars().next().unwrap_or_default(),
        |_: &&str| 1_usize,
        |earlier, later| earlier + later,
    );
    let expected = ImmutableMap::of([('a', 2), ('b', 2), ('c', 1)]);
    assert_eq!(by_initial.collect(words), expected);
    assert_eq!(by_initial.collect_chunked(words, 2), expected);
}

#[rstest]
fn test_to_immutable_map_merge_sees_earlier_first() {
    let first_seen = ImmutableCollectors::to_immutable_map(
        |pair: &(char, i32)| pair.0,
        |pair: &(char, i32)| pair.1,
        |earlier, _later| earlier,
    );
    let map = first_seen.collect_chunked([('x', 1), ('y', 2), ('x', 3), ('x', 4)], 1);
    assert_eq!(map.get(&'x'), Some(&1));
}

#[rstest]
fn test_enum_collectors() {
    let cards = [Suit::Spades, Suit::Hearts, Suit::Spades];

    let set = ImmutableCollectors::to_immutable_enum_set().collect(cards);
    assert_eq!(set, enum_set![Suit::Hearts, Suit::Spades]);
    assert_eq!(
        ImmutableCollectors::to_immutable_enum_set().collect_chunked(cards, 1),
        ImmutableEnumSet::of(cards)
    );

    let list = ImmutableCollectors::to_immutable_enum_list().collect_chunked(cards, 2);
    assert_eq!(list, ImmutableEnumList::of(cards));

    let counts = ImmutableCollectors::to_immutable_enum_map(
        |suit: &Suit| *suit,
        |_: &Suit| 1_u32,
        |earlier, later| earlier + later,
    )
    .collect_chunked(cards, 1);
    assert_eq!(counts, ImmutableEnumMap::of([(Suit::Hearts, 1), (Suit::Spades, 2)]));
}

#[cfg(feature = "rayon")]
#[rstest]
fn test_parallel_collection_matches_sequential() {
    use rayon::prelude::*;

    let collector = ImmutableCollectors::to_immutable_list();
    let parallel = collector.collect_parallel((0..5_000).into_par_iter());
    assert_eq!(parallel, collector.collect(0..5_000));

    let set = ImmutableCollectors::to_immutable_set()
        .collect_parallel((0..5_000).into_par_iter().map(|value| value % 7));
    assert_eq!(set.len(), 7);
}
