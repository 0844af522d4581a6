//! Benchmark for TreeMap and TreeSet vs standard BTreeMap and BTreeSet.
//!
//! Covers map upserts and the set algebra built on repeated insertion.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;
use strata::persistent::{TreeMap, TreeSet};

// =============================================================================
// Map upsert Benchmark
// =============================================================================

fn benchmark_map_upsert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_upsert");

    for size in [100, 1000, 10000] {
        let map: TreeMap<i32, i32> = (0..size).map(|key| (key, key)).collect();
        let standard: BTreeMap<i32, i32> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut current = map.clone();
                for key in 0..size {
                    current = current.insert(black_box(key), black_box(key * 2));
                }
                black_box(current)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut current = standard.clone();
                for key in 0..size {
                    current.insert(black_box(key), black_box(key * 2));
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Map get Benchmark
// =============================================================================

fn benchmark_map_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_get");

    for size in [100, 1000, 10000] {
        let map: TreeMap<i32, i32> = (0..size).map(|key| (key, key * 2)).collect();
        let standard: BTreeMap<i32, i32> = (0..size).map(|key| (key, key * 2)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = map.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = standard.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Set algebra Benchmark
// =============================================================================

fn benchmark_set_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra");

    for size in [100, 1000] {
        let left: TreeSet<i32> = (0..size).collect();
        let right: TreeSet<i32> = (size / 2..size + size / 2).collect();
        let standard_left: BTreeSet<i32> = (0..size).collect();
        let standard_right: BTreeSet<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("TreeSet/union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(&right)));
        });

        group.bench_with_input(
            BenchmarkId::new("TreeSet/intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.intersection(&right)));
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet/union", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    standard_left
                        .union(&standard_right)
                        .copied()
                        .collect::<BTreeSet<i32>>(),
                )
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BTreeSet/intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    black_box(
                        standard_left
                            .intersection(&standard_right)
                            .copied()
                            .collect::<BTreeSet<i32>>(),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_upsert,
    benchmark_map_get,
    benchmark_set_algebra
);
criterion_main!(benches);
