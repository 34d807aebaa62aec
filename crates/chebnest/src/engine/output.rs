//! Output types for nested set construction.
//!
//! ## Purpose
//!
//! This module defines `NestedSet`, the result of building nested Chebyshev
//! extrema up to an exactness level: the maximum order, the Smolyak index
//! block of every level, and the points in index order.
//!
//! ## Design notes
//!
//! * **Index order**: `points[i]` is the point with Smolyak index `i`. Points
//!   are grouped by level of introduction, not sorted by value.
//! * **Queries**: Per-level and per-index lookups are derived from the index
//!   arithmetic instead of being stored.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `points.len() == max_order + 1`.
//! * `level_groups` are contiguous, disjoint and cover `0..points.len()`.
//! * Within one level group the points are ascending.
//!
//! ## Non-goals
//!
//! * This module does not generate points; it only stores and queries them.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::ops::RangeInclusive;
use num_traits::Float;

// Internal dependencies
use crate::primitives::levels::{index_count, level_of_index, order_for_level, orders_through};
use crate::primitives::sorting::{SortedPoints, sort_by_value};

// ============================================================================
// Result Structure
// ============================================================================

/// Nested Chebyshev extrema with their Smolyak index blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedSet<T> {
    /// Chebyshev order of the finest level.
    pub max_order: usize,

    /// Smolyak indices introduced at each level, in level order.
    pub level_groups: Vec<RangeInclusive<usize>>,

    /// Points in Smolyak index order.
    pub points: Vec<T>,
}

impl<T: Float> NestedSet<T> {
    // ========================================================================
    // Shape Queries
    // ========================================================================

    /// Exactness level the set was built for.
    pub fn exactness(&self) -> usize {
        self.level_groups.len().saturating_sub(1)
    }

    /// Number of refinement levels (`exactness + 1`).
    pub fn num_levels(&self) -> usize {
        self.level_groups.len()
    }

    /// Number of points (equal to the number of Smolyak indices).
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of basis functions for orders `0..=max_order`.
    pub fn basis_count(&self) -> usize {
        index_count(self.max_order)
    }

    /// Chebyshev order of every level, ascending.
    pub fn orders(&self) -> Vec<usize> {
        orders_through(self.exactness())
    }

    // ========================================================================
    // Level Queries
    // ========================================================================

    /// Smolyak indices introduced at `level`.
    pub fn level_group(&self, level: usize) -> Option<&RangeInclusive<usize>> {
        self.level_groups.get(level)
    }

    /// Points introduced at `level`, ascending.
    pub fn level_points(&self, level: usize) -> Option<&[T]> {
        let group = self.level_groups.get(level)?;
        self.points.get(*group.start()..=*group.end())
    }

    /// Chebyshev order of `level`, if the set reaches it.
    pub fn level_order(&self, level: usize) -> Option<usize> {
        (level < self.num_levels()).then(|| order_for_level(level))
    }

    // ========================================================================
    // Index Queries
    // ========================================================================

    /// Point with Smolyak index `index`.
    pub fn point(&self, index: usize) -> Option<T> {
        self.points.get(index).copied()
    }

    /// Level that introduced Smolyak index `index`.
    pub fn level_of_index(&self, index: usize) -> Option<usize> {
        (index < self.points.len()).then(|| level_of_index(index))
    }

    /// `(index, level, point)` for every Smolyak index, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.level_groups
            .iter()
            .enumerate()
            .flat_map(|(level, group)| group.clone().map(move |index| (index, level)))
            .zip(self.points.iter().copied())
            .map(|((index, level), point)| (index, level, point))
    }

    /// All points sorted by value, with their Smolyak indices.
    ///
    /// For exactness `L >= 1` the values are the extrema `cos(k*pi / 2^L)`.
    pub fn sorted_points(&self) -> SortedPoints<T> {
        sort_by_value(&self.points)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for NestedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Exactness:  {}", self.exactness())?;
        writeln!(f, "  Max order:  {}", self.max_order)?;
        writeln!(f, "  Points:     {}", self.points.len())?;
        writeln!(f)?;

        writeln!(f, "Nested Points:")?;
        writeln!(f, "{:>8} {:>6} {:>14}", "Index", "Level", "Point")?;
        writeln!(f, "{:-<width$}", "", width = 30)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.points.len();
        let show_all = n <= 20;

        let mut prev_idx = 0;
        for (index, level, point) in self.iter() {
            if !show_all && (10..n - 10).contains(&index) {
                continue;
            }
            if index > 0 && index != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = index;

            writeln!(f, "{:>8} {:>6} {:>14.8}", index, level, point)?;
        }

        Ok(())
    }
}
