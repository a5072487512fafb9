//! Reproducible input generators for the benchmarks.

use rand::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform random integers.
pub fn generate_random(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

/// Already ascending data.
pub fn generate_sorted(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

/// Descending data (quick sort's worst case).
pub fn generate_reversed(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

/// Many duplicates drawn from a handful of values.
pub fn generate_few_unique(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..8)).collect()
}
