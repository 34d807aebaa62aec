//! Input validation for nested set construction.
//!
//! ## Purpose
//!
//! This module validates the exactness level and the builder configuration,
//! and checks the consistency of each level batch against its index block.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Conversions**: Integer and floating-point exactness values are
//!   converted to `usize` here, so callers see one error for `-1` and `1.5`.
//!
//! ## Invariants
//!
//! * A validated exactness is at most `MAX_EXACTNESS`.
//! * A build in precision `T` never exceeds `max_exactness_for::<T>()`.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not round or clamp invalid inputs.
//! * This module does not build point sets.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::fmt::Display;
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::math::chebyshev::max_exactness_for;
use crate::primitives::errors::ChebnestError;
use crate::primitives::levels::MAX_EXACTNESS;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for exactness values and builder configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Exactness Validation
    // ========================================================================

    /// Validate that an exactness level is within the supported range.
    pub fn validate_exactness(exactness: usize) -> Result<(), ChebnestError> {
        if exactness > MAX_EXACTNESS {
            return Err(ChebnestError::ExactnessTooLarge {
                got: exactness,
                max: MAX_EXACTNESS,
            });
        }
        Ok(())
    }

    /// Validate that the points of `exactness` stay distinct in precision `T`.
    pub fn validate_resolution<T: Float>(exactness: usize) -> Result<(), ChebnestError> {
        let max = max_exactness_for::<T>();
        if exactness > max {
            return Err(ChebnestError::ExactnessTooLarge {
                got: exactness,
                max,
            });
        }
        Ok(())
    }

    /// Convert an integer exactness to `usize`, rejecting negative values.
    ///
    /// Non-negative values beyond `usize` saturate and fail the upper bound.
    pub fn integer_exactness<I>(value: I) -> Result<usize, ChebnestError>
    where
        I: ToPrimitive + Display,
    {
        let exactness = match value.to_usize() {
            Some(exactness) => exactness,
            None if value.to_u128().is_some() => usize::MAX,
            None => return Err(ChebnestError::InvalidExactness(format!("{value}"))),
        };
        Self::validate_exactness(exactness)?;
        Ok(exactness)
    }

    /// Convert a floating-point exactness to `usize`.
    ///
    /// Rejects non-finite, negative and fractional values.
    pub fn float_exactness<T: Float>(value: T) -> Result<usize, ChebnestError> {
        let as_f64 = value.to_f64().unwrap_or(f64::NAN);
        let invalid = || ChebnestError::InvalidExactness(format!("{as_f64}"));

        if !value.is_finite() || value < T::zero() || value.fract() != T::zero() {
            return Err(invalid());
        }

        let exactness = value.to_usize().unwrap_or(usize::MAX);
        Self::validate_exactness(exactness)?;
        Ok(exactness)
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that a required parameter was provided.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, ChebnestError> {
        value.ok_or(ChebnestError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ChebnestError> {
        if let Some(param) = duplicate_param {
            return Err(ChebnestError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Batch Validation
    // ========================================================================

    /// Validate that a level batch fills the index block reserved for it.
    pub fn validate_batch(level: usize, expected: usize, got: usize) -> Result<(), ChebnestError> {
        if expected != got {
            return Err(ChebnestError::BatchSizeMismatch {
                level,
                expected,
                got,
            });
        }
        Ok(())
    }
}
