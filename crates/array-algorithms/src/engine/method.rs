//! Algorithm selection enums.
//!
//! ## Purpose
//!
//! This module names the available sort and search algorithms so they can be
//! chosen at runtime, listed, and described.
//!
//! ## Key concepts
//!
//! | Sort      | Average    | Worst      | Stable |
//! |-----------|------------|------------|--------|
//! | Bubble    | O(n^2)     | O(n^2)     | yes    |
//! | Selection | O(n^2)     | O(n^2)     | no     |
//! | Insertion | O(n^2)     | O(n^2)     | yes    |
//! | Merge     | O(n log n) | O(n log n) | yes    |
//! | Quick     | O(n log n) | O(n^2)     | no     |
//!
//! Quick sort hits its worst case on sorted and reverse-sorted input because
//! the pivot is always the last element.

// Internal dependencies
use crate::algorithms::search::{binary_search, linear_search};
use crate::algorithms::sort::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

// ============================================================================
// Sort Method
// ============================================================================

/// In-place sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMethod {
    /// Adjacent swaps with early exit.
    Bubble,

    /// Repeated selection of the minimum.
    Selection,

    /// Insertion into a growing sorted prefix.
    Insertion,

    /// Stable top-down merge sort.
    ///
    /// This is the default.
    #[default]
    Merge,

    /// Lomuto quick sort with the last element as pivot.
    Quick,
}

impl SortMethod {
    /// Every sort method, in the order they are usually presented.
    pub const ALL: [SortMethod; 5] = [
        SortMethod::Bubble,
        SortMethod::Selection,
        SortMethod::Insertion,
        SortMethod::Merge,
        SortMethod::Quick,
    ];

    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the sort method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            SortMethod::Bubble => "Bubble",
            SortMethod::Selection => "Selection",
            SortMethod::Insertion => "Insertion",
            SortMethod::Merge => "Merge",
            SortMethod::Quick => "Quick",
        }
    }

    /// Whether equal elements keep their relative input order.
    #[inline]
    pub const fn is_stable(&self) -> bool {
        matches!(
            self,
            SortMethod::Bubble | SortMethod::Insertion | SortMethod::Merge
        )
    }

    /// Average-case time complexity.
    #[inline]
    pub const fn average_case(&self) -> &'static str {
        match self {
            SortMethod::Merge | SortMethod::Quick => "O(n log n)",
            _ => "O(n^2)",
        }
    }

    /// Worst-case time complexity.
    #[inline]
    pub const fn worst_case(&self) -> &'static str {
        match self {
            SortMethod::Merge => "O(n log n)",
            _ => "O(n^2)",
        }
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Sort the sequence in place with this method.
    #[inline]
    pub fn apply<T: Ord + Copy>(&self, seq: &mut [T]) {
        match self {
            SortMethod::Bubble => bubble_sort(seq),
            SortMethod::Selection => selection_sort(seq),
            SortMethod::Insertion => insertion_sort(seq),
            SortMethod::Merge => merge_sort(seq),
            SortMethod::Quick => quick_sort(seq),
        }
    }
}

// ============================================================================
// Search Method
// ============================================================================

/// Lookup algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMethod {
    /// Left-to-right scan; works on any sequence.
    ///
    /// This is the default.
    #[default]
    Linear,

    /// Midpoint bisection; requires ascending input.
    Binary,
}

impl SearchMethod {
    /// Get the name of the search method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            SearchMethod::Linear => "Linear",
            SearchMethod::Binary => "Binary",
        }
    }

    /// Whether the method is only correct on ascending input.
    #[inline]
    pub const fn requires_sorted(&self) -> bool {
        matches!(self, SearchMethod::Binary)
    }

    /// Time complexity.
    #[inline]
    pub const fn complexity(&self) -> &'static str {
        match self {
            SearchMethod::Linear => "O(n)",
            SearchMethod::Binary => "O(log n)",
        }
    }

    /// Look up `target` with this method.
    #[inline]
    pub fn apply<T: Ord>(&self, seq: &[T], target: &T) -> Option<usize> {
        match self {
            SearchMethod::Linear => linear_search(seq, target),
            SearchMethod::Binary => binary_search(seq, target),
        }
    }
}
