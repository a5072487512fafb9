//! Execution engine for sort and search calls.
//!
//! ## Purpose
//!
//! This module runs a selected algorithm against a caller-owned sequence,
//! applying the options collected by the builders (sorted fast path,
//! sortedness validation) and emitting `tracing` events.
//!
//! ## Design notes
//!
//! * **Fast path**: With `skip_if_sorted`, an O(n) scan avoids running a
//!   quadratic sort (or quick sort's worst case) on sorted input.
//! * **Silent precondition**: Without `require_sorted`, binary search runs on
//!   whatever it is given. Debug builds log a warning when the input is
//!   unsorted; release builds skip the scan to keep the search O(log n).
//!
//! ## Non-goals
//!
//! * This module does not own or copy the sequence.
//! * This module does not install a tracing subscriber.

// External dependencies
use tracing::{debug, trace, warn};

// Internal dependencies
use crate::algorithms::sort::is_sorted;
use crate::engine::method::{SearchMethod, SortMethod};
use crate::engine::output::{SearchOutcome, SortOutcome};
use crate::engine::validator::Validator;
use crate::primitives::errors::AlgoError;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved sort configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    /// Algorithm to run.
    pub method: SortMethod,

    /// Skip the algorithm when the input is already sorted.
    pub skip_if_sorted: bool,
}

/// Resolved search configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Algorithm to run.
    pub method: SearchMethod,

    /// Reject unsorted input instead of searching it.
    pub require_sorted: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for configured sort and search calls.
pub struct Executor;

impl Executor {
    /// Sort `seq` in place according to `config`.
    pub fn sort<T: Ord + Copy>(config: &SortConfig, seq: &mut [T]) -> SortOutcome {
        let method = config.method;
        let already_sorted = is_sorted(seq);
        let skipped = config.skip_if_sorted && already_sorted;

        if skipped {
            trace!(method = method.name(), len = seq.len(), "input already sorted, skipping");
        } else {
            debug!(
                method = method.name(),
                len = seq.len(),
                already_sorted,
                "sorting sequence"
            );
            method.apply(seq);
        }

        SortOutcome {
            method,
            len: seq.len(),
            already_sorted,
            skipped,
        }
    }

    /// Search `seq` for `target` according to `config`.
    pub fn search<T: Ord>(
        config: &SearchConfig,
        seq: &[T],
        target: &T,
    ) -> Result<SearchOutcome, AlgoError> {
        let method = config.method;

        if method.requires_sorted() {
            if config.require_sorted {
                Validator::validate_sorted(seq)?;
            } else if cfg!(debug_assertions) && !is_sorted(seq) {
                warn!(
                    method = method.name(),
                    len = seq.len(),
                    "searching unsorted input; result is unspecified"
                );
            }
        }

        let index = method.apply(seq, target);
        debug!(
            method = method.name(),
            len = seq.len(),
            found = index.is_some(),
            "search finished"
        );

        Ok(SearchOutcome {
            method,
            len: seq.len(),
            index,
        })
    }
}
