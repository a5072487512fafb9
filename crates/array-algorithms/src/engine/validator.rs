//! Input validation for sequences, scalars and builder configuration.
//!
//! ## Purpose
//!
//! This module provides the checks that the fluent API runs before
//! dispatching to the raw algorithms. The raw functions never validate;
//! callers opt in to validation through the builders or call these
//! functions directly.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Cost**: Sortedness is an O(n) scan, so it only runs when requested.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or otherwise repair invalid inputs.

// Internal dependencies
use crate::algorithms::sort::first_descent;
use crate::engine::method::SearchMethod;
use crate::primitives::errors::AlgoError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sequences and configuration.
///
/// All methods return `Result<(), AlgoError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sequence Validation
    // ========================================================================

    /// Validate that the sequence is sorted ascending.
    ///
    /// Reports the first position where an element exceeds its successor.
    pub fn validate_sorted<T: Ord>(seq: &[T]) -> Result<(), AlgoError> {
        match first_descent(seq) {
            Some(index) => Err(AlgoError::UnsortedInput { index }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate that the search method can honor the sortedness requirement.
    pub fn validate_search_options(
        method: SearchMethod,
        require_sorted: bool,
    ) -> Result<(), AlgoError> {
        if require_sorted && !method.requires_sorted() {
            return Err(AlgoError::UnsupportedFeature {
                method: method.name(),
                feature: "require_sorted",
            });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), AlgoError> {
        if let Some(parameter) = duplicate {
            return Err(AlgoError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
