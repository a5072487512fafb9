//! Error types for sequence algorithm operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by the validated entry
//! points of the crate: the checked number-theory functions, the
//! [`Validator`](crate::engine::validator::Validator), and the fluent
//! builders.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending position or operation name.
//! * **No-std**: Uses only `&'static str` payloads, so no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Precondition violations**: Unsorted input, negative input.
//! 2. **Arithmetic limits**: Results that do not fit the integer type.
//! 3. **Builder misuse**: Duplicate parameters or options the method cannot honor.
//!
//! ## Non-goals
//!
//! * The raw algorithm functions never return this type; they use sentinels.
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for validated sequence and number-theory operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgoError {
    /// The sequence is not sorted in ascending order.
    UnsortedInput {
        /// First position `i` where `seq[i] > seq[i + 1]`.
        index: usize,
    },

    /// A number-theory operation received a negative argument.
    NegativeInput(&'static str),

    /// The result does not fit in the integer type.
    Overflow(&'static str),

    /// The selected method cannot honor the requested option.
    UnsupportedFeature {
        /// Name of the method (e.g., "Linear").
        method: &'static str,
        /// Name of the unsupported option.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AlgoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnsortedInput { index } => write!(
                f,
                "Input is not sorted: element {index} is greater than element {}",
                index + 1
            ),
            Self::NegativeInput(op) => write!(f, "Negative input to {op}"),
            Self::Overflow(op) => write!(f, "Integer overflow in {op}"),
            Self::UnsupportedFeature { method, feature } => {
                write!(f, "{method} method does not support {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(f, "Parameter '{parameter}' was set multiple times")
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for AlgoError {}
