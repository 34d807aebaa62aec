//! # chebnest — Nested Chebyshev Extrema for Smolyak Sparse Grids
//!
//! Nested one-dimensional point sets built from the extrema of Chebyshev
//! polynomials of the first kind, with the Smolyak index bookkeeping that
//! sparse-grid interpolation and quadrature build upon.
//!
//! ## What is a nested Chebyshev set?
//!
//! Level `L` of the set holds the extrema of `T_m` with `m = 2^L` (level 0
//! holds the single root point `0`). Because every extremum of `T_m` is also an
//! extremum of `T_{2m}`, each level only has to add the points that are new.
//! Every point receives a Smolyak index the first time it appears, and the
//! indices of one level form a contiguous block:
//!
//! ```text
//! level  order  indices  new points
//!   0      0    0        0
//!   1      2    1..=2    -1, 1
//!   2      4    3..=4    -0.7071, 0.7071
//!   3      8    5..=8    -0.9239, -0.3827, 0.3827, 0.9239
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use chebnest::prelude::*;
//!
//! let set = build_nested_set(2)?;
//!
//! assert_eq!(set.max_order, 4);
//! assert_eq!(set.level_groups, vec![0..=0, 1..=2, 3..=4]);
//! assert_eq!(set.points.len(), 5);
//!
//! println!("{}", set);
//! # Result::<(), ChebnestError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Exactness:  2
//!   Max order:  4
//!   Points:     5
//!
//! Nested Points:
//!    Index  Level          Point
//! ------------------------------
//!        0      0     0.00000000
//!        1      1    -1.00000000
//!        2      1     1.00000000
//!        3      2    -0.70710678
//!        4      2     0.70710678
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use chebnest::prelude::*;
//!
//! let set = NestedSetBuilder::<f32>::new()
//!     .exactness(3)
//!     .build()?;
//!
//! assert_eq!(set.level_points(3).map(<[f32]>::len), Some(4));
//! # Result::<(), ChebnestError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Negative and fractional exactness values are rejected before any point is
//! computed:
//!
//! ```rust
//! use chebnest::prelude::*;
//!
//! assert!(matches!(build_nested_set(-1), Err(ChebnestError::InvalidExactness(_))));
//! assert!(matches!(build_nested_set(1.5), Err(ChebnestError::InvalidExactness(_))));
//! ```
//!
//! Levels finer than the float type can resolve are rejected as well, since
//! their outermost points would round onto the endpoints:
//!
//! ```rust
//! use chebnest::prelude::*;
//!
//! let limit = max_exactness_for::<f32>();
//! let res = NestedSetBuilder::<f32>::new().exactness(limit + 1).build();
//! assert!(matches!(res, Err(ChebnestError::ExactnessTooLarge { .. })));
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! chebnest = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, each build emits one `debug` event and
//! one `trace` event per level.
//!
//! ## References
//!
//! - Smolyak, S. A. (1963). "Quadrature and interpolation formulas for tensor products of certain classes of functions"
//! - Barthelmann, V., Novak, E., Ritter, K. (2000). "High dimensional polynomial interpolation on sparse grids"
//! - Judd, K. L., Maliar, L., Maliar, S., Valero, R. (2014). "Smolyak method for solving dynamic economic models"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and index arithmetic.
mod primitives;

// Layer 2: Math - the Chebyshev point primitive.
mod math;

// Layer 3: Algorithms - per-level extremum batches.
mod algorithms;

// Layer 4: Engine - orchestration, validation and results.
mod engine;

// High-level API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        ChebnestError, ChebyshevFirstKind, Exactness, ExtremaFn, ExtremaPrimitive, MAX_EXACTNESS,
        NestedSet, NestedSetBuilder, SortedPoints, build_nested_set, chebyshev_extrema,
        expected_batch_len, generate_new_extrema, generate_new_extrema_signed,
        generate_new_extrema_with, largest_extremum, level_batches, max_exactness_for,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
