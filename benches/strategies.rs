//! Benchmarks comparing the three partition engines.
//!
//! The powerset and plain refinement engines are only run on small sets; the
//! memoized engine is also measured on larger ones.

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use set_partition_lattice::{powerset, Strategy};

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("partitions");
    group.sample_size(10);
    for n in 3..=6u32 {
        let set: BTreeSet<u32> = (1..=n).collect();
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), n), &set, |b, set| {
                b.iter(|| strategy.enumerate(black_box(set)))
            });
        }
    }
    for n in 7..=8u32 {
        let set: BTreeSet<u32> = (1..=n).collect();
        group.bench_with_input(BenchmarkId::new(Strategy::MemoizedRefinement.name(), n), &set, |b, set| {
            b.iter(|| Strategy::MemoizedRefinement.enumerate(black_box(set)))
        });
    }
    group.finish();
}

fn bench_powerset(c: &mut Criterion) {
    let mut group = c.benchmark_group("powerset");
    for n in [4u32, 8, 12] {
        let set: BTreeSet<u32> = (1..=n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &set, |b, set| {
            b.iter(|| powerset(black_box(set)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engines, bench_powerset);
criterion_main!(benches);
