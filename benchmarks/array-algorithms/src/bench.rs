//! Sorting and searching benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of every sort method (100 to 5K elements)
//! - Input shapes: random, sorted, reverse-sorted, few unique values
//! - Binary vs linear search
//!
//! Quadratic sorts are capped at smaller sizes to keep runs short.

use array_algorithms::prelude::*;
use array_algorithms_benchmarks::{
    generate_few_unique, generate_random, generate_reversed, generate_sorted,
};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn max_size(method: SortMethod) -> usize {
    match method {
        SortMethod::Merge | SortMethod::Quick => 5_000,
        _ => 1_000,
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");

    for method in SortMethod::ALL {
        for size in [100, 1_000, 5_000] {
            if size > max_size(method) {
                continue;
            }
            let data = generate_random(size, 42);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(method.name(), size), &data, |b, data| {
                b.iter_batched(
                    || data.clone(),
                    |mut v| {
                        method.apply(&mut v);
                        black_box(v)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_input_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_shapes");
    let size = 1_000;

    let shapes = [
        ("random", generate_random(size, 7)),
        ("sorted", generate_sorted(size)),
        ("reversed", generate_reversed(size)),
        ("few_unique", generate_few_unique(size, 7)),
    ];

    for method in SortMethod::ALL {
        for (shape, data) in &shapes {
            group.bench_with_input(BenchmarkId::new(method.name(), shape), data, |b, data| {
                b.iter_batched(
                    || data.clone(),
                    |mut v| {
                        method.apply(&mut v);
                        black_box(v)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1_000, 100_000] {
        let data = generate_sorted(size);
        let target = (size as i32) * 3 / 4;

        group.bench_with_input(BenchmarkId::new("binary", size), &data, |b, data| {
            b.iter(|| binary_search(black_box(data), black_box(&target)))
        });
        group.bench_with_input(BenchmarkId::new("linear", size), &data, |b, data| {
            b.iter(|| linear_search(black_box(data), black_box(&target)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalability, bench_input_shapes, bench_search);
criterion_main!(benches);
