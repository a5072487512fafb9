#![cfg(feature = "dev")]
//! Tests for the in-place sorting algorithms.
//!
//! These tests verify:
//! - Ascending order and permutation of the input
//! - Empty, single-element and duplicate-heavy inputs
//! - Stability of merge, insertion and bubble sort
//! - Lomuto partitioning
//! - Sortedness queries
//!
//! ## Test Organization
//!
//! 1. **Reference Scenario** - The classic seven-element array
//! 2. **Edge Cases** - Empty, single, duplicates, extremes
//! 3. **Stability** - Equal keys keep their input order
//! 4. **Partition** - Lomuto pivot placement
//! 5. **Queries** - is_sorted / first_descent

use array_algorithms::internals::algorithms::sort::{
    bubble_sort, first_descent, insertion_sort, is_sorted, lomuto_partition, merge_sort,
    quick_sort, selection_sort,
};

// ============================================================================
// Helper Functions
// ============================================================================

type SortFn = fn(&mut [i32]);

fn all_sorts() -> [(&'static str, SortFn); 5] {
    [
        ("bubble", bubble_sort::<i32>),
        ("selection", selection_sort::<i32>),
        ("insertion", insertion_sort::<i32>),
        ("merge", merge_sort::<i32>),
        ("quick", quick_sort::<i32>),
    ]
}

/// Sort a copy of `input` with every algorithm and compare against `slice::sort`.
fn check_all(input: &[i32]) {
    let mut expected = input.to_vec();
    expected.sort();

    for (name, sort) in all_sorts() {
        let mut data = input.to_vec();
        sort(&mut data);
        assert_eq!(data, expected, "{name} sort failed on {input:?}");
    }
}

// ============================================================================
// Reference Scenario Tests
// ============================================================================

/// Test the reference array with every sort.
#[test]
fn test_sort_reference_array() {
    let input = [64, 34, 25, 12, 22, 11, 90];

    for (name, sort) in all_sorts() {
        let mut data = input;
        sort(&mut data);
        assert_eq!(data, [11, 12, 22, 25, 34, 64, 90], "{name} sort");
    }
}

/// Test sorting reverse-ordered input.
///
/// This is the worst case for quick sort with a last-element pivot.
#[test]
fn test_sort_reverse_order() {
    let input: Vec<i32> = (0..500).rev().collect();
    check_all(&input);
}

/// Test sorting already sorted input leaves it unchanged.
#[test]
fn test_sort_already_sorted() {
    let input: Vec<i32> = (0..500).collect();

    for (name, sort) in all_sorts() {
        let mut data = input.clone();
        sort(&mut data);
        assert_eq!(data, input, "{name} sort should be a no-op");
    }
}

/// Test sorting a large pseudo-random sequence.
#[test]
fn test_sort_pseudo_random() {
    let mut state: u32 = 42;
    let input: Vec<i32> = (0..2_000)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state % 1_000) as i32 - 500
        })
        .collect();

    check_all(&input);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test empty input.
#[test]
fn test_sort_empty() {
    check_all(&[]);
}

/// Test single-element input.
#[test]
fn test_sort_single() {
    check_all(&[7]);
}

/// Test two elements in both orders.
#[test]
fn test_sort_two_elements() {
    check_all(&[2, 1]);
    check_all(&[1, 2]);
}

/// Test many duplicates.
#[test]
fn test_sort_duplicates() {
    check_all(&[3, 1, 3, 1, 2, 2, 3, 1]);
    check_all(&[5, 5, 5, 5]);
}

/// Test negative values and integer extremes.
#[test]
fn test_sort_extremes() {
    check_all(&[i32::MAX, -1, i32::MIN, 0, 1, i32::MIN, i32::MAX]);
}

/// Test that sorts work on sub-slices without touching the rest.
#[test]
fn test_sort_subslice() {
    for (name, sort) in all_sorts() {
        let mut data = [9, 4, 3, 2, 1, 0];
        sort(&mut data[1..5]);
        assert_eq!(data, [9, 1, 2, 3, 4, 0], "{name} sort");
    }
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Element sorted by key only; the tag records input order.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i32,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

fn assert_stable(data: &[Tagged]) {
    for w in data.windows(2) {
        assert!(w[0].key <= w[1].key, "Keys should be ascending");
        if w[0].key == w[1].key {
            assert!(w[0].tag < w[1].tag, "Equal keys should keep input order");
        }
    }
}

/// Test merge sort stability.
#[test]
fn test_merge_sort_stable() {
    let mut data = tagged(&[2, 1, 2, 1, 3, 1, 2, 3, 3, 1]);
    merge_sort(&mut data);
    assert_stable(&data);
}

/// Test insertion and bubble sort stability.
#[test]
fn test_quadratic_stable_sorts() {
    let keys = [5, 3, 5, 3, 1, 5, 1];

    let mut data = tagged(&keys);
    insertion_sort(&mut data);
    assert_stable(&data);

    let mut data = tagged(&keys);
    bubble_sort(&mut data);
    assert_stable(&data);
}

/// Test merge sort stability when all keys are equal.
#[test]
fn test_merge_sort_all_equal_keeps_order() {
    let mut data = tagged(&[4; 9]);
    merge_sort(&mut data);

    let tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
    assert_eq!(tags, (0..9).collect::<Vec<_>>());
}

// ============================================================================
// Partition Tests
// ============================================================================

/// Test Lomuto partition places the last element at its final position.
#[test]
fn test_lomuto_partition() {
    let mut data = [7, 2, 9, 1, 5];
    let p = lomuto_partition(&mut data);

    assert_eq!(p, 2, "Pivot 5 has two smaller elements");
    assert_eq!(data[p], 5);
    assert!(data[..p].iter().all(|&v| v < 5));
    assert!(data[p + 1..].iter().all(|&v| v >= 5));
}

/// Test Lomuto partition with a minimal pivot.
#[test]
fn test_lomuto_partition_min_pivot() {
    let mut data = [3, 2, 1];
    let p = lomuto_partition(&mut data);

    assert_eq!(p, 0);
    assert_eq!(data[0], 1);
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test sortedness queries.
#[test]
fn test_is_sorted_and_first_descent() {
    assert!(is_sorted::<i32>(&[]));
    assert!(is_sorted(&[1]));
    assert!(is_sorted(&[1, 1, 2]));
    assert!(!is_sorted(&[1, 3, 2]));

    assert_eq!(first_descent(&[1, 3, 2, 0]), Some(1));
    assert_eq!(first_descent(&[1, 2, 3]), None);
}
