//! Whole-sequence aggregates and in-place reversal.
//!
//! These helpers return `None` on empty input instead of reading out of
//! bounds, and `sum` reports overflow as `None`.

// External dependencies
use num_traits::PrimInt;

/// Sum of all elements, or `None` if the sum overflows `T`.
///
/// The sum of an empty sequence is zero.
pub fn sum<T: PrimInt>(seq: &[T]) -> Option<T> {
    seq.iter()
        .try_fold(T::zero(), |acc, &v| acc.checked_add(&v))
}

/// Arithmetic mean as `f64`, or `None` for an empty sequence.
///
/// Accumulates in `f64`, so it never overflows.
pub fn average<T: PrimInt>(seq: &[T]) -> Option<f64> {
    if seq.is_empty() {
        return None;
    }
    let total: f64 = seq.iter().filter_map(|v| v.to_f64()).sum();
    Some(total / seq.len() as f64)
}

/// Smallest element, or `None` for an empty sequence.
#[inline]
pub fn min<T: Ord + Copy>(seq: &[T]) -> Option<T> {
    seq.iter().copied().min()
}

/// Largest element, or `None` for an empty sequence.
#[inline]
pub fn max<T: Ord + Copy>(seq: &[T]) -> Option<T> {
    seq.iter().copied().max()
}

/// Reverse the sequence in place with two converging cursors.
pub fn reverse<T>(seq: &mut [T]) {
    if seq.is_empty() {
        return;
    }
    let (mut start, mut end) = (0, seq.len() - 1);
    while start < end {
        seq.swap(start, end);
        start += 1;
        end -= 1;
    }
}
