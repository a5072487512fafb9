//! In-place comparison sorts.
//!
//! ## Purpose
//!
//! This module implements five textbook sorts over mutable slices: bubble,
//! selection, insertion, merge and quick sort. All of them sort ascending and
//! leave the slice holding a permutation of its original contents.
//!
//! ## Design notes
//!
//! * **Quadratic sorts**: Bubble sort stops after the first pass without a
//!   swap, so sorted input costs a single pass.
//! * **Merge sort**: Top-down, splitting at the midpoint. Only the left half is
//!   copied out before merging; the right half is merged in place, which is
//!   safe because the write cursor never overtakes the right read cursor.
//! * **Quick sort**: Lomuto partition with the last element as pivot. The
//!   smaller side is sorted recursively and the larger side iteratively, so
//!   the stack depth is O(log n) even when the running time degrades to
//!   O(n^2) on sorted or reverse-sorted input.
//!
//! ## Invariants
//!
//! * Every sort accepts empty and single-element slices.
//! * Sorting an already sorted slice leaves it unchanged.
//! * Merge sort is stable (ties keep the left-half element first). Bubble and
//!   insertion sort are stable as implemented; selection and quick sort are not.
//!
//! ## Non-goals
//!
//! * Descending order or custom comparators.
//! * Competing with `slice::sort` on performance.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem;

// ============================================================================
// Quadratic Sorts
// ============================================================================

/// Bubble sort with early exit. O(n^2) worst case, O(n) on sorted input.
pub fn bubble_sort<T: Ord>(seq: &mut [T]) {
    let n = seq.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        // The last `pass` elements are already in their final place
        for j in 0..n - pass - 1 {
            if seq[j] > seq[j + 1] {
                seq.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Selection sort. Always O(n^2) comparisons, at most n - 1 swaps.
pub fn selection_sort<T: Ord>(seq: &mut [T]) {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if seq[j] < seq[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            seq.swap(i, min_index);
        }
    }
}

/// Insertion sort. O(n^2) worst case, O(n) on sorted input.
pub fn insertion_sort<T: Ord + Copy>(seq: &mut [T]) {
    for i in 1..seq.len() {
        let key = seq[i];
        let mut j = i;
        // Shift larger elements of seq[..i] one slot to the right
        while j > 0 && seq[j - 1] > key {
            seq[j] = seq[j - 1];
            j -= 1;
        }
        seq[j] = key;
    }
}

// ============================================================================
// Divide and Conquer Sorts
// ============================================================================

/// Stable top-down merge sort. O(n log n) time, O(n) auxiliary space.
pub fn merge_sort<T: Ord + Copy>(seq: &mut [T]) {
    let n = seq.len();
    if n <= 1 {
        return;
    }

    let mid = n / 2;
    merge_sort(&mut seq[..mid]);
    merge_sort(&mut seq[mid..]);
    merge(seq, mid);
}

/// Merge the sorted runs `seq[..mid]` and `seq[mid..]`.
fn merge<T: Ord + Copy>(seq: &mut [T], mid: usize) {
    // Runs already in order need no merge
    if seq[mid - 1] <= seq[mid] {
        return;
    }

    let left: Vec<T> = seq[..mid].to_vec();
    let (mut i, mut j, mut k) = (0, mid, 0);

    while i < left.len() && j < seq.len() {
        // `<=` takes the left element on ties, which keeps the merge stable
        if left[i] <= seq[j] {
            seq[k] = left[i];
            i += 1;
        } else {
            seq[k] = seq[j];
            j += 1;
        }
        k += 1;
    }

    // Leftover right-run elements are already in place
    while i < left.len() {
        seq[k] = left[i];
        i += 1;
        k += 1;
    }
}

/// Quick sort with Lomuto partitioning. Average O(n log n), worst O(n^2).
pub fn quick_sort<T: Ord + Copy>(mut seq: &mut [T]) {
    while seq.len() > 1 {
        let pivot_index = lomuto_partition(seq);
        let (left, right) = mem::take(&mut seq).split_at_mut(pivot_index);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            seq = right;
        } else {
            quick_sort(right);
            seq = left;
        }
    }
}

/// Partition around the last element and return the pivot's final index.
///
/// Afterwards every element before the pivot is `< pivot` and every element
/// after it is `>= pivot`.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub fn lomuto_partition<T: Ord + Copy>(seq: &mut [T]) -> usize {
    let high = seq.len() - 1;
    let pivot = seq[high];
    let mut store = 0;

    for j in 0..high {
        if seq[j] < pivot {
            seq.swap(store, j);
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}

// ============================================================================
// Queries
// ============================================================================

/// Position of the first descent, i.e. the first `i` with `seq[i] > seq[i + 1]`.
///
/// Returns `None` when the sequence is sorted ascending.
#[inline]
pub fn first_descent<T: Ord>(seq: &[T]) -> Option<usize> {
    seq.windows(2).position(|w| w[0] > w[1])
}

/// Check whether the sequence is sorted ascending.
#[inline]
pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    first_descent(seq).is_none()
}
