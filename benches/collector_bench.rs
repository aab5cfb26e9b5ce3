//! Benchmark for the collectors.
//!
//! Compares collecting through ImmutableCollectors, sequentially and in
//! chunks, against a plain `Iterator::collect`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use frozen::collector::ImmutableCollectors;
use frozen::immutable::ImmutableList;
use std::hint::black_box;

// =============================================================================
// List Collector Benchmark
// =============================================================================

fn benchmark_list_collector(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect_list");
    let collector = ImmutableCollectors::to_immutable_list();

    for size in [1000, 10000, 100_000] {
        group.bench_with_input(BenchmarkId::new("collect", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(collector.collect(0..black_box(size))));
        });

        group.bench_with_input(
            BenchmarkId::new("collect_chunked_1024", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(collector.collect_chunked(0..black_box(size), 1024)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("FromIterator", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box((0..black_box(size)).collect::<ImmutableList<i32>>()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Map Collector Benchmark
// =============================================================================

fn benchmark_map_collector(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("collect_map");
    let collector = ImmutableCollectors::to_immutable_map(
        |element: &u64| element % 128,
        |element: &u64| *element,
        |earlier, later| earlier + later,
    );

    for size in [1000, 10000, 100_000] {
        group.bench_with_input(BenchmarkId::new("collect", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(collector.collect(0..black_box(size))));
        });

        group.bench_with_input(
            BenchmarkId::new("collect_chunked_1024", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(collector.collect_chunked(0..black_box(size), 1024)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_list_collector, benchmark_map_collector);

criterion_main!(benches);
