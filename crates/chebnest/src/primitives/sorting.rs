//! Sorting utilities for nested point sets.
//!
//! ## Purpose
//!
//! Points of a nested set are stored in index order (grouped by level). This
//! module produces the value-sorted view of those points together with the
//! permutation back to Smolyak indices.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so equal values keep index order.
//! * **Fast path**: Already-sorted input is copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted values are non-decreasing.
//! * The index mapping is a valid permutation of `0..n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Points sorted by value.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedPoints<T> {
    /// Point values in ascending order.
    pub values: Vec<T>,

    /// Smolyak index of each sorted value: `indices[sorted_pos] = index`.
    pub indices: Vec<usize>,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort points by value in ascending order, remembering their indices.
#[inline]
pub fn sort_by_value<T: Float>(points: &[T]) -> SortedPoints<T> {
    let n = points.len();

    if points.windows(2).all(|w| w[0] <= w[1]) {
        return SortedPoints {
            values: points.to_vec(),
            indices: (0..n).collect(),
        };
    }

    let mut pairs: Vec<(T, usize)> = points.iter().copied().zip(0..n).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedPoints {
        values: pairs.iter().map(|p| p.0).collect(),
        indices: pairs.iter().map(|p| p.1).collect(),
    }
}
