//! Benchmark for BalancedTree vs standard BTreeSet.
//!
//! Measures the cost of path copying against the in-place standard set for
//! insertion, lookup, deletion and in-order iteration.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use std::hint::black_box;
use strata::persistent::{BalancedTree, NaturalOrder, ReverseOrder};

const SIZES: [i32; 3] = [100, 1000, 10000];

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tree_insert");

    for size in SIZES {
        group.bench_with_input(
            BenchmarkId::new("BalancedTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = BalancedTree::new();
                    for index in 0..size {
                        tree = tree.insert(black_box(index));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BalancedTree/reverse", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = BalancedTree::with_comparator(ReverseOrder(NaturalOrder));
                    for index in 0..size {
                        tree = tree.insert(black_box(index));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = BTreeSet::new();
                for index in 0..size {
                    set.insert(black_box(index));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tree_contains");

    for size in SIZES {
        let tree: BalancedTree<i32> = (0..size).collect();
        let standard: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("BalancedTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut hits = 0;
                    for key in 0..size {
                        hits += i32::from(tree.contains(&black_box(key)));
                    }
                    black_box(hits)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for key in 0..size {
                    hits += i32::from(standard.contains(&black_box(key)));
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// delete Benchmark
// =============================================================================

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tree_delete");

    for size in SIZES {
        let tree: BalancedTree<i32> = (0..size).collect();
        let standard: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("BalancedTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut current = tree.clone();
                    for key in 0..size {
                        current = current.delete(&black_box(key));
                    }
                    black_box(current)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut current = standard.clone();
                for key in 0..size {
                    current.remove(&black_box(key));
                }
                black_box(current)
            });
        });
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tree_iteration");

    for size in SIZES {
        let tree: BalancedTree<i32> = (0..size).collect();
        let standard: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("BalancedTree", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree.iter().fold(0i64, |sum, &element| sum + i64::from(element))));
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(standard.iter().fold(0i64, |sum, &element| sum + i64::from(element)))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_delete,
    benchmark_iteration
);
criterion_main!(benches);
