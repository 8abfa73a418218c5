//! Benchmark for RedBlackTree vs standard BTreeSet.
//!
//! Compares the persistent red-black tree against Rust's standard BTreeSet
//! for common operations, plus the cost of keeping every version alive.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use persistent_rbtree::persistent::RedBlackTree;
use std::collections::BTreeSet;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::new();
                    for index in 0..size {
                        tree = tree.insert(black_box(index));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = BTreeSet::new();
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [100, 1000, 10000] {
        let persistent_tree: RedBlackTree<i32> = (0..size).collect();
        let standard_set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for element in 0..size {
                        if persistent_tree.contains(&black_box(element)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for element in 0..size {
                        if standard_set.contains(&black_box(element)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// iter Benchmark
// =============================================================================

fn benchmark_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iter");

    for size in [100, 1000, 10000] {
        let persistent_tree: RedBlackTree<i32> = (0..size).collect();
        let standard_set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum: i64 = persistent_tree.iter().map(|&element| i64::from(element)).sum();
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let sum: i64 = standard_set.iter().map(|&element| i64::from(element)).sum();
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Version History Benchmark
// =============================================================================

fn benchmark_version_history(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("version_history");

    for size in [100, 1000] {
        // Every intermediate version is retained
        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut versions = Vec::with_capacity(size + 1);
                    versions.push(RedBlackTree::new());
                    for index in 0..size {
                        let next = versions[index].insert(black_box(index));
                        versions.push(next);
                    }
                    black_box(versions)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet_clone", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut versions = Vec::with_capacity(size + 1);
                    versions.push(BTreeSet::new());
                    for index in 0..size {
                        let mut next = versions[index].clone();
                        next.insert(black_box(index));
                        versions.push(next);
                    }
                    black_box(versions)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_iter,
    benchmark_version_history
);
criterion_main!(benches);
