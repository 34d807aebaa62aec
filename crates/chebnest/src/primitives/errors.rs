//! Error types for nested Chebyshev set construction.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! nested extrema sets: input validation, builder misuse, and failures of the
//! extrema primitive.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., expected vs. actual batch size).
//! * **Deferred**: Builder misuse is recorded during configuration and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Negative, fractional, non-finite or oversized exactness.
//! 2. **Builder validation**: Missing or duplicated parameters.
//! 3. **Primitive contract**: Zero counts and failures reported by the extrema primitive.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for nested set construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ChebnestError {
    /// Exactness is negative, fractional or not finite.
    InvalidExactness(String),

    /// Exactness exceeds the supported maximum.
    ExactnessTooLarge {
        /// Exactness requested.
        got: usize,
        /// Largest supported exactness.
        max: usize,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The extrema primitive was asked for a non-positive number of points.
    InvalidPrimitiveCount(usize),

    /// The extrema primitive failed for a valid count.
    PrimitiveFailure(String),

    /// A level batch does not fill the index range reserved for it.
    BatchSizeMismatch {
        /// Level being built.
        level: usize,
        /// Number of Smolyak indices reserved for the level.
        expected: usize,
        /// Number of points the batch generator returned.
        got: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ChebnestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidExactness(msg) => {
                write!(f, "Invalid exactness: {msg} (must be a non-negative integer)")
            }
            Self::ExactnessTooLarge { got, max } => {
                write!(f, "Exactness too large: {got} (must be at most {max})")
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidPrimitiveCount(count) => {
                write!(f, "Invalid extrema count: {count} (must be > 0)")
            }
            Self::PrimitiveFailure(msg) => write!(f, "Extrema primitive failed: {msg}"),
            Self::BatchSizeMismatch {
                level,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Batch size mismatch at level {level}: expected {expected} points, got {got}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ChebnestError {}
