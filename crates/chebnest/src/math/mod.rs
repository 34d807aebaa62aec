//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric building block of the crate: the
//! Chebyshev point primitive and the trait seam through which the batch
//! generator consumes it.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Chebyshev points of the first kind.
pub mod chebyshev;
