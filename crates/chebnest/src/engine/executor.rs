//! Execution engine for nested set construction.
//!
//! ## Purpose
//!
//! This module drives the batch generator once per level, from level 0 up to
//! the requested exactness, and assembles the three parallel outputs: the
//! maximum order, the per-level Smolyak index blocks and the concatenated
//! points.
//!
//! ## Design notes
//!
//! * Each level reserves its index block from the order arithmetic first,
//!   then the batch generator fills it.
//! * A batch that does not fill its block aborts the build; no partial
//!   result is returned.
//! * Generic over `Float` types and over the extrema primitive.
//!
//! ## Invariants
//!
//! * Levels are processed in increasing order.
//! * Index `i + 1` is never assigned at an earlier level than index `i`.
//! * Identical configurations yield bit-identical results.
//!
//! ## Non-goals
//!
//! * This module does not convert user input (handled by `validator`).
//! * This module does not build multi-dimensional index sets.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::extrema::generate_new_extrema_with;
use crate::engine::output::NestedSet;
use crate::engine::validator::Validator;
use crate::math::chebyshev::{ChebyshevFirstKind, ExtremaPrimitive};
use crate::primitives::errors::ChebnestError;
use crate::primitives::levels::{index_count, index_range, orders_through};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a single nested set build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedSetConfig {
    /// Finest refinement level to build.
    pub exactness: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Builds nested sets from an extrema primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedSetExecutor<P = ChebyshevFirstKind> {
    primitive: P,
}

impl NestedSetExecutor<ChebyshevFirstKind> {
    /// Executor backed by Chebyshev points of the first kind.
    pub fn new() -> Self {
        Self {
            primitive: ChebyshevFirstKind,
        }
    }
}

impl<P> NestedSetExecutor<P> {
    /// Executor backed by a custom primitive.
    pub fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    /// Build the nested set described by `config`.
    pub fn run<T>(&self, config: &NestedSetConfig) -> Result<NestedSet<T>, ChebnestError>
    where
        T: Float,
        P: ExtremaPrimitive<T>,
    {
        let exactness = config.exactness;
        Validator::validate_exactness(exactness)?;
        Validator::validate_resolution::<T>(exactness)?;

        let orders = orders_through(exactness);
        let max_order = orders.last().copied().unwrap_or(0);

        let mut level_groups = Vec::with_capacity(orders.len());
        let mut points = Vec::with_capacity(index_count(max_order));

        for (level, &order) in orders.iter().enumerate() {
            let group = index_range(level);
            let batch = generate_new_extrema_with(order, &self.primitive)?;
            Validator::validate_batch(level, group.end() - group.start() + 1, batch.len())?;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                level,
                order,
                first_index = *group.start(),
                last_index = *group.end(),
                "appended level batch"
            );

            points.extend(batch);
            level_groups.push(group);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            exactness,
            max_order,
            points = points.len(),
            "built nested Chebyshev set"
        );

        Ok(NestedSet {
            max_order,
            level_groups,
            points,
        })
    }
}
