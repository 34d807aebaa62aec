#![cfg(all(feature = "dev", feature = "tracing"))]
//! Tests for builds with structured logging compiled in.
//!
//! These tests exercise the `tracing` events of the executor. Without an
//! installed subscriber the events are discarded, so the results must match
//! the reference tables exactly.
//!
//! ## Test Organization
//!
//! 1. **Instrumented Builds** - Reference results with events enabled

use chebnest::internals::engine::executor::{NestedSetConfig, NestedSetExecutor};
use chebnest::internals::engine::output::NestedSet;

// ============================================================================
// Instrumented Build Tests
// ============================================================================

/// Test an instrumented build still yields the reference table.
#[test]
fn test_traced_build_reference() {
    let set: NestedSet<f64> = NestedSetExecutor::new()
        .run(&NestedSetConfig { exactness: 1 })
        .unwrap();

    assert_eq!(set.level_groups, vec![0..=0, 1..=2]);
    assert_eq!(set.points, vec![0.0, -1.0, 1.0]);
}

/// Test every level emits without disturbing the index blocks.
#[test]
fn test_traced_build_levels() {
    let set: NestedSet<f32> = NestedSetExecutor::new()
        .run(&NestedSetConfig { exactness: 6 })
        .unwrap();

    assert_eq!(set.num_levels(), 7);
    assert_eq!(set.num_points(), 65);
}
