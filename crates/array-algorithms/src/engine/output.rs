//! Outcome types returned by the fluent API.
//!
//! ## Purpose
//!
//! This module defines `SortOutcome` and `SearchOutcome`, small reports that
//! describe what a sort or search call did. Sorted data stays in the caller's
//! slice; the outcome only carries metadata.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Both types implement `Display` for console output.
//! * **Sentinels**: `SearchOutcome` exposes both `Option<usize>` and the
//!   signed `-1` convention.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::engine::method::{SearchMethod, SortMethod};
use crate::primitives::sentinel::to_signed_index;

// ============================================================================
// Sort Outcome
// ============================================================================

/// Report of a single sort call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    /// Algorithm that was selected.
    pub method: SortMethod,

    /// Number of elements in the sequence.
    pub len: usize,

    /// Whether the input was already in ascending order.
    pub already_sorted: bool,

    /// Whether the algorithm was skipped because the input was already sorted.
    pub skipped: bool,
}

impl SortOutcome {
    /// Check if the algorithm actually ran.
    pub fn ran(&self) -> bool {
        !self.skipped
    }
}

impl Display for SortOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Method:     {} Sort", self.method.name())?;
        writeln!(f, "  Elements:   {}", self.len)?;
        writeln!(
            f,
            "  Stable:     {}",
            if self.method.is_stable() { "yes" } else { "no" }
        )?;
        writeln!(
            f,
            "  Complexity: {} average, {} worst",
            self.method.average_case(),
            self.method.worst_case()
        )?;
        if self.skipped {
            write!(f, "  Input:      already sorted (skipped)")
        } else if self.already_sorted {
            write!(f, "  Input:      already sorted")
        } else {
            write!(f, "  Input:      unsorted")
        }
    }
}

// ============================================================================
// Search Outcome
// ============================================================================

/// Report of a single search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Algorithm that was selected.
    pub method: SearchMethod,

    /// Number of elements searched.
    pub len: usize,

    /// Index of a matching element, or `None` if absent.
    pub index: Option<usize>,
}

impl SearchOutcome {
    /// Check if the target was found.
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }

    /// Index as a signed integer, `-1` when the target is absent.
    pub fn signed_index(&self) -> isize {
        to_signed_index(self.index)
    }
}

impl Display for SearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.index {
            Some(i) => write!(f, "{} Search - found at index: {}", self.method.name(), i),
            None => write!(
                f,
                "{} Search - not found among {} elements",
                self.method.name(),
                self.len
            ),
        }
    }
}
