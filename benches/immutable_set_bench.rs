//! Benchmark for the set containers.
//!
//! Compares ImmutableSet, ImmutableSortedSet and ImmutableEnumSet lookups
//! against the standard HashSet and BTreeSet.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use frozen::enumeration;
use frozen::immutable::{ImmutableEnumSet, ImmutableSet, ImmutableSortedSet};
use std::collections::{BTreeSet, HashSet};
use std::hint::black_box;

enumeration! {
    enum Permission {
        Read, Write, Execute, Delete, Share, Admin, Audit, Export,
    }
}

// =============================================================================
// Construction Benchmark
// =============================================================================

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_construction");

    for size in [100, 1000, 10000] {
        let source: Vec<u32> = (0..size).map(|index| index % (size / 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("ImmutableSet", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(ImmutableSet::of(source.iter().copied())));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ImmutableSortedSet", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(ImmutableSortedSet::of(source.iter().copied())));
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.iter().copied().collect::<BTreeSet<u32>>()));
        });
    }

    group.finish();
}

// =============================================================================
// Membership Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_contains");

    for size in [100, 1000, 10000] {
        let immutable: ImmutableSet<u32> = (0..size).collect();
        let sorted: ImmutableSortedSet<u32> = (0..size).collect();
        let standard: HashSet<u32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("ImmutableSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for value in (0..size).step_by(7) {
                        black_box(immutable.contains(&value));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ImmutableSortedSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for value in (0..size).step_by(7) {
                        black_box(sorted.contains(&value));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for value in (0..size).step_by(7) {
                    black_box(standard.contains(&value));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Enum Set Benchmark
// =============================================================================

fn benchmark_enum_set(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("enum_set");

    let granted = ImmutableEnumSet::of([Permission::Read, Permission::Share, Permission::Audit]);
    let hashed: HashSet<Permission> = granted.iter().collect();

    group.bench_function("ImmutableEnumSet_contains", |bencher| {
        bencher.iter(|| black_box(granted.contains(black_box(Permission::Audit))));
    });

    group.bench_function("HashSet_contains", |bencher| {
        bencher.iter(|| black_box(hashed.contains(black_box(&Permission::Audit))));
    });

    group.bench_function("ImmutableEnumSet_complement", |bencher| {
        bencher.iter(|| black_box(ImmutableEnumSet::complement_of(&granted)));
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_contains,
    benchmark_enum_set
);

criterion_main!(benches);
