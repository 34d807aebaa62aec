//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates nested set construction by driving the batch
//! generator level by level and assigning Smolyak indices. It also owns input
//! validation and the result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Level-by-level execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for nested set construction.
pub mod output;
