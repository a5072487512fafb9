//! High-level API for sorting and searching.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. It implements fluent
//! builders for choosing an algorithm and its options, producing validated
//! models that can be applied to any number of sequences.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Configuration is checked when `.build()` is called.
//! * **Reusable**: Models are `Copy` and hold no sequence data.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortBuilder`] via `Sorter::new()` (or a [`SearchBuilder`]
//!    via `Searcher::new()`).
//! 2. Chain configuration methods (`.method()`, `.skip_if_sorted()`, ...).
//! 3. Call `.build()` to get a [`SortModel`] / [`SearchModel`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::{Executor, SearchConfig, SortConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::method::{SearchMethod, SortMethod};
pub use crate::engine::output::{SearchOutcome, SortOutcome};
pub use crate::primitives::errors::AlgoError;

// ============================================================================
// Sort Builder
// ============================================================================

/// Fluent builder for configuring a sort.
#[derive(Debug, Clone, Default)]
pub struct SortBuilder {
    /// Sorting algorithm (default: Merge).
    pub method: Option<SortMethod>,

    /// Skip the algorithm when the input is already sorted.
    pub skip_if_sorted: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            skip_if_sorted: None,
            duplicate_param: None,
        }
    }

    /// Set the sorting algorithm.
    pub fn method(mut self, method: SortMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Check for sorted input first and leave it untouched.
    pub fn skip_if_sorted(mut self) -> Self {
        self.skip_if_sorted = Some(true);
        self
    }

    /// Validate the configuration and produce a reusable model.
    pub fn build(self) -> Result<SortModel, AlgoError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(SortModel {
            config: SortConfig {
                method: self.method.unwrap_or_default(),
                skip_if_sorted: self.skip_if_sorted.unwrap_or(false),
            },
        })
    }
}

/// Validated sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortModel {
    config: SortConfig,
}

impl SortModel {
    /// The selected algorithm.
    pub fn method(&self) -> SortMethod {
        self.config.method
    }

    /// Sort `seq` in place.
    pub fn sort<T: Ord + Copy>(&self, seq: &mut [T]) -> SortOutcome {
        Executor::sort(&self.config, seq)
    }

    /// Sort a copy of `seq`, leaving the input untouched.
    pub fn sorted<T: Ord + Copy>(&self, seq: &[T]) -> (Vec<T>, SortOutcome) {
        let mut copy = seq.to_vec();
        let outcome = self.sort(&mut copy);
        (copy, outcome)
    }
}

// ============================================================================
// Search Builder
// ============================================================================

/// Fluent builder for configuring a search.
#[derive(Debug, Clone, Default)]
pub struct SearchBuilder {
    /// Search algorithm (default: Linear).
    pub method: Option<SearchMethod>,

    /// Reject unsorted input (Binary only).
    pub require_sorted: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SearchBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            require_sorted: None,
            duplicate_param: None,
        }
    }

    /// Set the search algorithm.
    pub fn method(mut self, method: SearchMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Verify ascending order before searching (Binary only).
    pub fn require_sorted(mut self) -> Self {
        self.require_sorted = Some(true);
        self
    }

    /// Validate the configuration and produce a reusable model.
    pub fn build(self) -> Result<SearchModel, AlgoError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let method = self.method.unwrap_or_default();
        let require_sorted = self.require_sorted.unwrap_or(false);
        Validator::validate_search_options(method, require_sorted)?;

        Ok(SearchModel {
            config: SearchConfig {
                method,
                require_sorted,
            },
        })
    }
}

/// Validated search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchModel {
    config: SearchConfig,
}

impl SearchModel {
    /// The selected algorithm.
    pub fn method(&self) -> SearchMethod {
        self.config.method
    }

    /// Look up `target` in `seq`.
    ///
    /// Fails only when `require_sorted` was set and `seq` is not ascending.
    pub fn find<T: Ord>(&self, seq: &[T], target: &T) -> Result<SearchOutcome, AlgoError> {
        Executor::search(&self.config, seq, target)
    }
}
