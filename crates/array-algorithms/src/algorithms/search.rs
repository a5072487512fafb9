//! Search over sequences.
//!
//! ## Purpose
//!
//! This module provides the two classic lookups: binary search over a sorted
//! sequence and linear search over any sequence.
//!
//! ## Design notes
//!
//! * **Sentinel**: Absence is reported as `None`, never as an error.
//! * **Unchecked precondition**: `binary_search` assumes ascending order and
//!   does not verify it. Unsorted input gives an unspecified (but memory-safe)
//!   answer; use the `Searcher` builder with `require_sorted()` to reject it.
//! * **Half-open bisection**: The window is `[left, right)`, so no index ever
//!   underflows.
//!
//! ## Invariants
//!
//! * `binary_search` returns `Some(i)` only if `seq[i] == *target`.
//! * `linear_search` returns the smallest matching index.

// External dependencies
use core::cmp::Ordering;

/// Binary search over an ascending sequence. O(log n).
///
/// With duplicates, returns whichever matching index the midpoint bisection
/// reaches first.
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    let mut left = 0;
    let mut right = seq.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match seq[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    None
}

/// Linear search from the left. O(n).
#[inline]
pub fn linear_search<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|v| v == target)
}

/// Membership test by linear scan.
#[inline]
pub fn contains<T: PartialEq>(seq: &[T], target: &T) -> bool {
    linear_search(seq, target).is_some()
}
