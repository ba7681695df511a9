//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the filtering process: validating parameters,
//! driving the shared sliding-window skeleton over the input sequence, and
//! packaging results.
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

/// Shared sliding-window execution skeleton.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for filter operations.
pub mod output;
