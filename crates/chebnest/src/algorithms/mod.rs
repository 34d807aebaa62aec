//! Layer 3: Algorithms
//!
//! This layer implements the per-level extremum batch generation. It contains
//! the nesting logic of the crate but is orchestrated by the engine layer.

// Extremum batches for one refinement level.
pub mod extrema;
