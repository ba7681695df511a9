//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks shared by both
//! transforms:
//! - Boundary replication geometry (emission delay, tail extension)
//! - Order-statistic selection for the median
//!
//! These are reusable functions with no filter-specific state.
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

/// Boundary replication geometry.
pub mod boundary;

/// Order-statistic selection.
pub mod selection;
