//! Chebyshev points of the first kind.
//!
//! ## Purpose
//!
//! This module provides the extrema primitive consumed by the batch
//! generator: `count` Chebyshev points of the first kind, in ascending order.
//!
//! ## Key concepts
//!
//! The points are the roots of `T_n` with `n = count`:
//!
//! ```text
//! x_k = cos((2k + 1) * pi / (2n)),   k = n-1, ..., 0
//! ```
//!
//! Every root of `T_n` is an extremum of `T_{2n}` that is not an extremum of
//! `T_n`, so these are exactly the extrema a doubling step adds.
//!
//! ## Invariants
//!
//! * Output has exactly `count` values, strictly ascending, in (-1, 1).
//! * Output is exactly symmetric about zero; odd counts contain an exact `0`.
//! * The open interval only holds while `cos(pi / (2n))` rounds below `1`;
//!   [`max_exactness_for`] reports the last level where it does.
//!
//! ## Non-goals
//!
//! * This module does not evaluate Chebyshev polynomials.
//! * This module does not produce the endpoints -1 and 1.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ChebnestError;
use crate::primitives::levels::{MAX_EXACTNESS, order_for_level};

// ============================================================================
// Primitive Seam
// ============================================================================

/// Signature for a custom extrema primitive.
pub type ExtremaFn<T> = fn(usize) -> Result<Vec<T>, ChebnestError>;

/// Source of the new points introduced by a doubling step.
///
/// Implementations must return `count` ascending values for `count > 0`.
pub trait ExtremaPrimitive<T> {
    /// Return `count` points in ascending order.
    fn extrema(&self, count: usize) -> Result<Vec<T>, ChebnestError>;
}

/// Default primitive: Chebyshev points of the first kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChebyshevFirstKind;

impl<T: Float> ExtremaPrimitive<T> for ChebyshevFirstKind {
    #[inline]
    fn extrema(&self, count: usize) -> Result<Vec<T>, ChebnestError> {
        chebyshev_extrema(count)
    }
}

impl<T, F> ExtremaPrimitive<T> for F
where
    F: Fn(usize) -> Result<Vec<T>, ChebnestError>,
{
    #[inline]
    fn extrema(&self, count: usize) -> Result<Vec<T>, ChebnestError> {
        self(count)
    }
}

// ============================================================================
// Point Generation
// ============================================================================

/// Return the `count` Chebyshev points of the first kind in ascending order.
///
/// Mirrored pairs are computed once, so `x[j] == -x[count - 1 - j]` holds
/// bit for bit.
pub fn chebyshev_extrema<T: Float>(count: usize) -> Result<Vec<T>, ChebnestError> {
    if count == 0 {
        return Err(ChebnestError::InvalidPrimitiveCount(count));
    }

    let pi = cast::<T>(PI)?;
    let two_n = cast::<T>((2 * count) as f64)?;
    let half = count / 2;

    let mut points = vec![T::zero(); count];
    for j in 0..half {
        let value = (cast::<T>((2 * j + 1) as f64)? * pi / two_n).cos();
        points[j] = -value;
        points[count - 1 - j] = value;
    }
    // Odd counts keep the exact zero written above at `points[half]`.

    Ok(points)
}

/// Largest point returned for `count`, `cos(pi / (2 * count))`.
///
/// Bit-identical to the last element of `chebyshev_extrema(count)`.
pub fn largest_extremum<T: Float>(count: usize) -> Result<T, ChebnestError> {
    if count == 0 {
        return Err(ChebnestError::InvalidPrimitiveCount(count));
    }
    let pi = cast::<T>(PI)?;
    let two_n = cast::<T>((2 * count) as f64)?;
    Ok((T::one() * pi / two_n).cos())
}

// ============================================================================
// Precision Limit
// ============================================================================

/// Largest exactness whose points stay distinct in `T`.
///
/// Points crowd towards the endpoints, so the first collision is always the
/// largest new point of a level rounding onto `1` or onto the largest point
/// of the level below. Only one cosine per level is evaluated.
///
/// ```text
/// f32: 13    f64: 28
/// ```
pub fn max_exactness_for<T: Float>() -> usize {
    let mut inner = T::zero();
    for level in 2..=MAX_EXACTNESS {
        match largest_extremum::<T>(order_for_level(level) / 2) {
            Ok(x) if x > inner && x < T::one() => inner = x,
            _ => return level - 1,
        }
    }
    MAX_EXACTNESS
}

#[inline]
fn cast<T: Float>(value: f64) -> Result<T, ChebnestError> {
    T::from(value).ok_or_else(|| {
        ChebnestError::PrimitiveFailure(format!("{value} is not representable"))
    })
}
