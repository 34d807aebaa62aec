//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error type, the level/order/index
//! arithmetic and small data utilities used throughout the crate. It has
//! zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Level, order and Smolyak index arithmetic.
pub mod levels;

/// Value-sorted views of point sets.
pub mod sorting;
