#![cfg(feature = "dev")]
//! Tests for the nested set result type.
//!
//! These tests verify the queries and formatting of `NestedSet`:
//! - Shape queries (exactness, levels, counts, orders)
//! - Level and index lookups
//! - The value-sorted view
//! - Display output
//!
//! ## Test Organization
//!
//! 1. **Shape Queries** - Sizes and orders
//! 2. **Level Queries** - Groups, points and orders per level
//! 3. **Index Queries** - Point and level by index, iteration
//! 4. **Sorted View** - Value ordering and index permutation
//! 5. **Display** - Summary and table formatting

use approx::assert_relative_eq;
use core::f64::consts::PI;

use chebnest::internals::engine::executor::{NestedSetConfig, NestedSetExecutor};
use chebnest::internals::engine::output::NestedSet;
use chebnest::internals::primitives::sorting::sort_by_value;

// ============================================================================
// Helper Functions
// ============================================================================

fn run(exactness: usize) -> NestedSet<f64> {
    NestedSetExecutor::new()
        .run(&NestedSetConfig { exactness })
        .unwrap()
}

// ============================================================================
// Shape Query Tests
// ============================================================================

/// Test shape queries for a small set.
#[test]
fn test_shape_queries() {
    let set = run(4);

    assert_eq!(set.exactness(), 4);
    assert_eq!(set.num_levels(), 5);
    assert_eq!(set.num_points(), 17);
    assert_eq!(set.basis_count(), 17);
    assert_eq!(set.orders(), vec![0, 2, 4, 8, 16]);
}

/// Test the root-only set.
#[test]
fn test_shape_queries_root() {
    let set = run(0);

    assert_eq!(set.exactness(), 0);
    assert_eq!(set.num_levels(), 1);
    assert_eq!(set.basis_count(), set.num_points());
    assert_eq!(set.orders(), vec![0]);
}

// ============================================================================
// Level Query Tests
// ============================================================================

/// Test per-level groups and points.
#[test]
fn test_level_points() {
    let set = run(3);

    assert_eq!(set.level_group(1), Some(&(1..=2)));
    assert_eq!(set.level_points(0), Some(&[0.0][..]));
    assert_eq!(set.level_points(1), Some(&[-1.0, 1.0][..]));
    assert_eq!(set.level_points(3).map(<[f64]>::len), Some(4));
    assert_eq!(set.level_points(4), None);
    assert_eq!(set.level_group(4), None);
}

/// Test per-level orders.
#[test]
fn test_level_order() {
    let set = run(3);

    assert_eq!(set.level_order(0), Some(0));
    assert_eq!(set.level_order(3), Some(8));
    assert_eq!(set.level_order(4), None);
}

// ============================================================================
// Index Query Tests
// ============================================================================

/// Test point and level lookups by Smolyak index.
#[test]
fn test_index_queries() {
    let set = run(4);

    assert_eq!(set.point(0), Some(0.0));
    assert_eq!(set.point(1), Some(-1.0));
    assert_eq!(set.point(17), None);

    assert_eq!(set.level_of_index(0), Some(0));
    assert_eq!(set.level_of_index(4), Some(2));
    assert_eq!(set.level_of_index(16), Some(4));
    assert_eq!(set.level_of_index(17), None);
}

/// Test iteration yields `(index, level, point)` in index order.
#[test]
fn test_iter() {
    let set = run(2);
    let rows: Vec<(usize, usize, f64)> = set.iter().collect();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], (0, 0, 0.0));
    assert_eq!(rows[1], (1, 1, -1.0));
    assert_eq!(rows[2], (2, 1, 1.0));
    assert_eq!((rows[3].0, rows[3].1), (3, 2));
    assert_relative_eq!(rows[4].2, 0.5f64.sqrt(), epsilon = 1e-15);
}

/// Test iteration agrees with the index lookups.
#[test]
fn test_iter_matches_lookups() {
    let set = run(6);
    for (index, level, point) in set.iter() {
        assert_eq!(set.level_of_index(index), Some(level));
        assert_eq!(set.point(index), Some(point));
    }
}

// ============================================================================
// Sorted View Tests
// ============================================================================

/// Test the sorted view is the full extrema grid of `T_{2^L}`.
#[test]
fn test_sorted_points_are_extrema_grid() {
    let set = run(3);
    let sorted = set.sorted_points();

    assert_eq!(sorted.values.len(), 9);
    for (j, &value) in sorted.values.iter().enumerate() {
        let expected = ((8 - j) as f64 * PI / 8.0).cos();
        assert_relative_eq!(value, expected, epsilon = 1e-14);
    }
}

/// Test the sorted view remembers Smolyak indices.
#[test]
fn test_sorted_points_indices() {
    let set = run(3);
    let sorted = set.sorted_points();

    assert_eq!(sorted.indices, vec![1, 5, 3, 6, 0, 7, 4, 8, 2]);
    for (value, index) in sorted.values.iter().zip(sorted.indices.iter()) {
        assert_eq!(set.point(*index), Some(*value));
    }
}

/// Test already-sorted input takes the identity permutation.
#[test]
fn test_sort_by_value_sorted_input() {
    let sorted = sort_by_value(&[-1.0f64, 0.0, 1.0][..]);

    assert_eq!(sorted.values, vec![-1.0, 0.0, 1.0]);
    assert_eq!(sorted.indices, vec![0, 1, 2]);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary and table for a small set.
#[test]
fn test_display_small() {
    let output = format!("{}", run(2));

    assert!(output.contains("Exactness:  2"));
    assert!(output.contains("Max order:  4"));
    assert!(output.contains("Points:     5"));
    assert!(output.contains("Nested Points:"));
    assert!(output.contains("-0.70710678"));
    assert!(!output.contains("..."));
}

/// Test large sets elide the middle rows.
#[test]
fn test_display_large_elides_rows() {
    let output = format!("{}", run(5));

    assert!(output.contains("Points:     33"));
    assert!(output.contains("..."));
    assert_eq!(output.lines().filter(|l| l.trim() == "...").count(), 1);
}
