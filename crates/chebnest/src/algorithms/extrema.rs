//! Extremum batches for a single refinement level.
//!
//! ## Purpose
//!
//! This module computes the extrema a Chebyshev order adds on top of every
//! lower order of the doubling sequence `0, 2, 4, 8, ...`. Each batch is
//! ascending and never repeats a point emitted for a smaller order.
//!
//! ## Design notes
//!
//! * **Small-order table**: Orders 0 and 2 are served from a fixed table
//!   (`[0]` and `[-1, 1]`). The primitive cannot produce the endpoints and
//!   cannot accept a zero count.
//! * **General path**: Any other order `m` asks the primitive for
//!   `ceil(m / 2)` points and returns them unmodified.
//! * **Generics**: Generic over `Float` types and over the primitive.
//!
//! ## Key concepts
//!
//! ```text
//! order:  0    2        4              8
//! batch:  [0]  [-1, 1]  [-c1, c1]      [-c3, -c2, c2, c3]
//!         table         primitive(2)   primitive(4)
//! ```
//!
//! ## Invariants
//!
//! * Batch length is `expected_batch_len(order)`.
//! * The primitive is never called with a count of zero.
//!
//! ## Non-goals
//!
//! * This module does not assign Smolyak indices (handled by the engine).
//! * This module does not deduplicate against arbitrary point sets; disjointness
//!   follows from the doubling sequence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::chebyshev::{ChebyshevFirstKind, ExtremaPrimitive};
use crate::primitives::errors::ChebnestError;

// ============================================================================
// Small-Order Table
// ============================================================================

/// Batch for the orders the primitive cannot serve.
#[inline]
fn small_order_batch<T: Float>(order: usize) -> Option<Vec<T>> {
    match order {
        0 => Some(vec![T::zero()]),
        2 => Some(vec![-T::one(), T::one()]),
        _ => None,
    }
}

/// Number of points `generate_new_extrema` returns for `order`.
#[inline]
pub fn expected_batch_len(order: usize) -> usize {
    match order {
        0 => 1,
        2 => 2,
        _ => order.div_ceil(2),
    }
}

// ============================================================================
// Batch Generation
// ============================================================================

/// New extrema introduced at `order`, in ascending order.
pub fn generate_new_extrema<T: Float>(order: usize) -> Result<Vec<T>, ChebnestError> {
    generate_new_extrema_with(order, &ChebyshevFirstKind)
}

/// New extrema introduced at `order`, drawing general batches from `primitive`.
///
/// Primitive failures are returned unchanged.
pub fn generate_new_extrema_with<T, P>(order: usize, primitive: &P) -> Result<Vec<T>, ChebnestError>
where
    T: Float,
    P: ExtremaPrimitive<T> + ?Sized,
{
    if let Some(batch) = small_order_batch(order) {
        return Ok(batch);
    }

    // order >= 1 here, so the count is at least 1
    primitive.extrema(order.div_ceil(2))
}

/// Signed entry point: negative orders yield the root batch `[0]`.
pub fn generate_new_extrema_signed<T: Float>(order: i64) -> Result<Vec<T>, ChebnestError> {
    match usize::try_from(order) {
        Ok(order) => generate_new_extrema(order),
        Err(_) => Ok(vec![T::zero()]),
    }
}
