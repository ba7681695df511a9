//! Reduction strategy interface for the sliding-window skeleton.
//!
//! ## Purpose
//!
//! Both transforms follow the same seed → slide → emit-deferred → tail-extend
//! shape; only the per-window statistic differs. This module defines the
//! [`WindowReducer`] trait the engine drives, plus the [`FilterKind`] enum
//! the public API uses to pick a strategy.
//!
//! ## Key concepts
//!
//! * **seed**: reset state for a window filled with replicas of the first
//!   sample.
//! * **advance**: account for one slide as an `(incoming, outgoing)` pair,
//!   enabling O(1) incremental statistics.
//! * **evaluate**: produce the output value for the current window contents;
//!   strategies that cannot update incrementally read the window here.
//!
//! ## Invariants
//!
//! * The engine calls `seed` exactly once, then alternates `advance` and
//!   (after the emission delay) `evaluate` for every slide.
//! * `evaluate` must be deterministic given the window contents.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::sequence::Sample;
use crate::primitives::window::SlidingWindow;

// ============================================================================
// Reducer Trait
// ============================================================================

/// Per-window reduction strategy driven by the filter engine.
pub trait WindowReducer<T: Sample> {
    /// Reset state for a window holding `filter_len` replicas of `first`.
    fn seed(&mut self, first: T, filter_len: usize);

    /// Account for one slide: `incoming` entered the window, `outgoing`
    /// retired from it.
    fn advance(&mut self, incoming: T, outgoing: T);

    /// Produce the output value for the current window contents.
    fn evaluate(&mut self, window: &SlidingWindow<T>) -> T;
}

// ============================================================================
// Filter Kind
// ============================================================================

/// Statistic computed over each window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// Arithmetic mean of the window (linear smoothing).
    #[default]
    Mean,

    /// Rank-`filter_len / 2` element of the window (rank-order smoothing).
    Median,
}

impl Display for FilterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Mean => write!(f, "moving average"),
            Self::Median => write!(f, "moving median"),
        }
    }
}
