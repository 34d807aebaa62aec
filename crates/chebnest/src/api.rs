//! High-level API for nested Chebyshev set construction.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the one-call
//! [`build_nested_set`] function and the fluent [`NestedSetBuilder`] for
//! choosing precision and the extrema primitive.
//!
//! ## Design notes
//!
//! * **Ergonomic**: `build_nested_set(3)` covers the common `f64` case.
//! * **Validated**: Exactness is validated on conversion; builder misuse is
//!   recorded and reported when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`NestedSetBuilder`] via `NestedSetBuilder::new()`.
//! 2. Set `.exactness()` and optionally `.primitive()`.
//! 3. Call `.build()` to obtain a [`NestedSet`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{NestedSetConfig, NestedSetExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::extrema::{
    expected_batch_len, generate_new_extrema, generate_new_extrema_signed,
    generate_new_extrema_with,
};
pub use crate::engine::output::NestedSet;
pub use crate::math::chebyshev::{
    ChebyshevFirstKind, ExtremaFn, ExtremaPrimitive, chebyshev_extrema, largest_extremum,
    max_exactness_for,
};
pub use crate::primitives::errors::ChebnestError;
pub use crate::primitives::levels::MAX_EXACTNESS;
pub use crate::primitives::sorting::SortedPoints;

// ============================================================================
// Exactness Conversion
// ============================================================================

/// Values accepted as an exactness level.
///
/// Integers must be non-negative; floats must also be finite and integral.
pub trait Exactness {
    /// Convert to a validated exactness level.
    fn to_exactness(self) -> Result<usize, ChebnestError>;
}

macro_rules! impl_integer_exactness {
    ($($t:ty),*) => {
        $(
            impl Exactness for $t {
                #[inline]
                fn to_exactness(self) -> Result<usize, ChebnestError> {
                    Validator::integer_exactness(self)
                }
            }
        )*
    };
}

impl_integer_exactness!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Exactness for f32 {
    #[inline]
    fn to_exactness(self) -> Result<usize, ChebnestError> {
        Validator::float_exactness(self)
    }
}

impl Exactness for f64 {
    #[inline]
    fn to_exactness(self) -> Result<usize, ChebnestError> {
        Validator::float_exactness(self)
    }
}

// ============================================================================
// One-Call Entry Point
// ============================================================================

/// Build the nested Chebyshev extrema set up to `exactness`.
///
/// Returns the maximum order, the Smolyak index block of each level and the
/// points in index order.
///
/// # Errors
///
/// [`ChebnestError::InvalidExactness`] for negative or fractional input and
/// [`ChebnestError::ExactnessTooLarge`] above `max_exactness_for::<f64>()`.
pub fn build_nested_set<E: Exactness>(exactness: E) -> Result<NestedSet<f64>, ChebnestError> {
    let config = NestedSetConfig {
        exactness: exactness.to_exactness()?,
    };
    NestedSetExecutor::new().run(&config)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for nested set construction.
#[derive(Debug, Clone)]
pub struct NestedSetBuilder<T> {
    /// Finest refinement level.
    pub exactness: Option<usize>,

    /// Custom extrema primitive (default: Chebyshev first kind).
    pub primitive: Option<ExtremaFn<T>>,

    /// Conversion error from `.exactness()`, reported at build time.
    #[doc(hidden)]
    pub exactness_error: Option<ChebnestError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for NestedSetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> NestedSetBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            exactness: None,
            primitive: None,
            exactness_error: None,
            duplicate_param: None,
        }
    }

    /// Set the exactness level.
    pub fn exactness<E: Exactness>(mut self, exactness: E) -> Self {
        if self.exactness.is_some() || self.exactness_error.is_some() {
            self.duplicate_param = Some("exactness");
        }
        match exactness.to_exactness() {
            Ok(value) => self.exactness = Some(value),
            Err(err) => self.exactness_error = Some(err),
        }
        self
    }

    /// Replace the extrema primitive used for orders above 2.
    pub fn primitive(mut self, primitive: ExtremaFn<T>) -> Self {
        if self.primitive.is_some() {
            self.duplicate_param = Some("primitive");
        }
        self.primitive = Some(primitive);
        self
    }

    /// Validate the configuration and build the nested set.
    pub fn build(self) -> Result<NestedSet<T>, ChebnestError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if let Some(err) = self.exactness_error {
            return Err(err);
        }

        let config = NestedSetConfig {
            exactness: Validator::validate_required(self.exactness, "exactness")?,
        };

        match self.primitive {
            Some(primitive) => NestedSetExecutor::with_primitive(primitive).run(&config),
            None => NestedSetExecutor::new().run(&config),
        }
    }
}

// ============================================================================
// Convenience
// ============================================================================

/// Points of every level up to `exactness`, one `Vec` per level.
///
/// # Errors
///
/// Same as [`build_nested_set`].
pub fn level_batches<E: Exactness>(exactness: E) -> Result<Vec<Vec<f64>>, ChebnestError> {
    let set = build_nested_set(exactness)?;
    Ok((0..set.num_levels())
        .filter_map(|level| set.level_points(level).map(<[f64]>::to_vec))
        .collect())
}
