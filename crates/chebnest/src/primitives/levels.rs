//! Level, polynomial order and Smolyak index arithmetic.
//!
//! ## Purpose
//!
//! This module maps refinement levels to Chebyshev polynomial orders and to
//! the block of Smolyak indices each level owns. It is pure integer
//! arithmetic shared by the batch generator, the executor and the result type.
//!
//! ## Key concepts
//!
//! * **Order doubling**: `order(0) = 0`, `order(L) = 2^L` for `L >= 1`.
//! * **Index blocks**: level 0 owns index 0; level `L >= 1` owns
//!   `order(L-1)+1 ..= order(L)`.
//! * **Basis count**: a set built up to `max_order` has `max_order + 1` indices.
//!
//! ```text
//! level:   0 | 1     | 2     | 3           | 4
//! order:   0 | 2     | 4     | 8           | 16
//! indices: 0 | 1..=2 | 3..=4 | 5..=8       | 9..=16
//! ```
//!
//! ## Invariants
//!
//! * Index blocks of consecutive levels are contiguous and disjoint.
//! * The block of level `L` has exactly `expected_batch_len(order(L))` indices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::RangeInclusive;

// ============================================================================
// Constants
// ============================================================================

/// Largest exactness accepted by the builder.
///
/// `2^30 + 1` points is already several gigabytes of `f64`.
pub const MAX_EXACTNESS: usize = 30;

// ============================================================================
// Order Arithmetic
// ============================================================================

/// Maximum Chebyshev order introduced at `level`.
#[inline]
pub fn order_for_level(level: usize) -> usize {
    if level == 0 { 0 } else { 1usize << level }
}

/// Orders of every level from 0 through `exactness`, ascending.
pub fn orders_through(exactness: usize) -> Vec<usize> {
    (0..=exactness).map(order_for_level).collect()
}

/// Number of Smolyak indices (and basis functions) for orders `0..=max_order`.
#[inline]
pub fn index_count(max_order: usize) -> usize {
    max_order + 1
}

// ============================================================================
// Index Blocks
// ============================================================================

/// Smolyak indices introduced at `level`.
#[inline]
pub fn index_range(level: usize) -> RangeInclusive<usize> {
    match level {
        0 => 0..=0,
        _ => (order_for_level(level - 1) + 1)..=order_for_level(level),
    }
}

/// Level that introduced the Smolyak index `index`.
///
/// Level `L >= 1` is the smallest level whose order reaches `index`.
#[inline]
pub fn level_of_index(index: usize) -> usize {
    match index {
        0 => 0,
        1 => 1,
        _ => index.next_power_of_two().trailing_zeros() as usize,
    }
}
