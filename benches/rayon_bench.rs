//! Benchmark for parallel collection with rayon.
//!
//! Parallel collection pays for thread coordination and one combine per
//! worker, so it only wins when each element costs real work. The mapping
//! step below performs a few hundred mixing rounds per element.
//!
//! Requires the `rayon` feature to be enabled.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use frozen::collector::ImmutableCollectors;
use rayon::prelude::*;
use std::hint::black_box;

/// Mixes `input` for a fixed number of rounds.
#[inline(never)]
fn mix(input: u64) -> u64 {
    let mut state = input ^ 0x9e37_79b9_7f4a_7c15;
    for round in 0..256 {
        state = state.rotate_left(13) ^ state.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        state = state.wrapping_add(round);
    }
    state
}

// =============================================================================
// Sequential vs Parallel Benchmark
// =============================================================================

fn benchmark_parallel_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("parallel_collect");
    let list = ImmutableCollectors::to_immutable_list();
    let set = ImmutableCollectors::to_immutable_set();

    for size in [1000_u64, 10000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("list_sequential", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(list.collect((0..size).map(mix))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("list_parallel", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(list.collect_parallel((0..size).into_par_iter().map(mix))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("set_parallel", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    black_box(set.collect_parallel((0..size).into_par_iter().map(|value| mix(value) % 4096)))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_parallel_collect);

criterion_main!(benches);
