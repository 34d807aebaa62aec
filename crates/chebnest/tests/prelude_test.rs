#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for
//! typical use of the crate without further imports.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Workflows** - Complete builds with prelude imports only

use chebnest::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test the one-call entry point is available.
#[test]
fn test_prelude_build_nested_set() {
    let result = build_nested_set(2);
    assert!(result.is_ok(), "Basic build should work with prelude imports");
}

/// Test the builder and result type are available.
#[test]
fn test_prelude_builder() {
    let set: NestedSet<f64> = NestedSetBuilder::new().exactness(1).build().unwrap();
    assert_eq!(set.max_order, 2);
}

/// Test the primitive seam is available.
#[test]
fn test_prelude_primitive() {
    let via_trait: Vec<f64> = ChebyshevFirstKind.extrema(3).unwrap();
    assert_eq!(via_trait, chebyshev_extrema::<f64>(3).unwrap());

    let custom: ExtremaFn<f64> = chebyshev_extrema::<f64>;
    let set = NestedSetBuilder::new()
        .exactness(2)
        .primitive(custom)
        .build()
        .unwrap();
    assert_eq!(set, build_nested_set(2).unwrap());
}

/// Test the batch generator and conversions are available.
#[test]
fn test_prelude_batches() {
    assert_eq!(generate_new_extrema::<f64>(2).unwrap(), vec![-1.0, 1.0]);
    assert_eq!(level_batches(1).unwrap(), vec![vec![0.0], vec![-1.0, 1.0]]);
    assert_eq!(4u16.to_exactness(), Ok(4));
    assert!(MAX_EXACTNESS > 0);
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test error handling with prelude types.
#[test]
fn test_prelude_errors() {
    match build_nested_set(-1) {
        Err(ChebnestError::InvalidExactness(_)) => {}
        other => panic!("expected InvalidExactness, got {other:?}"),
    }
}

/// Test the sorted view with prelude types.
#[test]
fn test_prelude_sorted_points() {
    let set = build_nested_set(2).unwrap();
    let sorted: SortedPoints<f64> = set.sorted_points();

    assert_eq!(sorted.indices, vec![1, 3, 0, 4, 2]);
}
