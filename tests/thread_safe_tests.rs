#![cfg(feature = "immutable")]
//! Integration tests for sharing immutable containers across threads.
//!
//! Containers are `Send + Sync` snapshots: every thread reads the same
//! contents, and copies handed out by `unwrap` never leak back.

use std::sync::Arc;
use std::thread;

use frozen::enumeration;
use frozen::immutable::{ImmutableEnumSet, ImmutableList, ImmutableMap, ImmutableSet};
use rstest::rstest;

enumeration! {
    pub enum Lane { Left, Middle, Right }
}

#[rstest]
fn test_list_shared_between_threads() {
    let list: ImmutableList<u32> = (0..1_000).collect();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = list.clone();
            thread::spawn(move || shared.iter().copied().sum::<u32>())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), 499_500);
    }
}

#[rstest]
fn test_unwrapped_copies_stay_local() {
    let set = Arc::new(ImmutableSet::of([1, 2, 3]));
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let shared = Arc::clone(&set);
            thread::spawn(move || {
                let mut copy = shared.unwrap();
                copy.insert(100 + offset);
                copy.len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), 4);
    }
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_map_and_enum_set_read_concurrently() {
    let map = ImmutableMap::of([("ice", 0), ("water", 50)]);
    let lanes = ImmutableEnumSet::of([Lane::Left, Lane::Right]);
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(map.get("water"), Some(&50));
                assert!(!lanes.contains(Lane::Middle));
            });
        }
    });
}
