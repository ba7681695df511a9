//! High-level API for running-window filtering.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the free functions
//! [`moving_average`] and [`moving_median`] for one-shot use, and a fluent
//! [`FilterBuilder`] for configuring a reusable [`MovingFilter`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `build()` is called, so a
//!   constructed filter is always valid.
//! * **Type-Safe**: Transforms are generic over `Sample` element types and
//!   `Sequence` input containers.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FilterBuilder`] via `Filter::new()`.
//! 2. Chain configuration methods (`.filter_len()`, `.kind()`).
//! 3. Call `.build()` to validate and obtain a [`MovingFilter`].
//! 4. Call `.apply(&samples)` as often as needed; each call is a fresh,
//!    side-effect-free pass.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::average::RunningMean;
use crate::algorithms::median::RankMedian;
use crate::engine::executor::FilterExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::reducer::FilterKind;
pub use crate::engine::output::FilterOutput;
pub use crate::primitives::errors::FilterError;
pub use crate::primitives::sequence::{Sample, Sequence};

// ============================================================================
// Free Functions
// ============================================================================

/// Smooth `input` with a moving average of width `filter_len`.
///
/// The output has exactly the length of the input; boundaries are handled by
/// replicating the first and last samples. Fails with
/// [`FilterError::InvalidFilterLength`] when `filter_len` is zero.
pub fn moving_average<T: Sample>(input: &[T], filter_len: usize) -> Result<Vec<T>, FilterError> {
    Validator::validate_filter_len(filter_len)?;
    Ok(FilterExecutor::run(
        input,
        filter_len,
        &mut RunningMean::default(),
    ))
}

/// Smooth `input` with a moving median of width `filter_len`.
///
/// Same shape as [`moving_average`], but each output is the
/// rank-`filter_len / 2` element of the window, making the filter robust to
/// single-sample outliers. Fails with [`FilterError::InvalidFilterLength`]
/// when `filter_len` is zero.
pub fn moving_median<T: Sample>(input: &[T], filter_len: usize) -> Result<Vec<T>, FilterError> {
    Validator::validate_filter_len(filter_len)?;
    Ok(FilterExecutor::run(
        input,
        filter_len,
        &mut RankMedian::default(),
    ))
}

// ============================================================================
// Filter Builder
// ============================================================================

/// Fluent builder for configuring a running-window filter.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    /// Window width (positive).
    pub filter_len: Option<usize>,

    /// Statistic to compute per window.
    pub kind: Option<FilterKind>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl FilterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            filter_len: None,
            kind: None,
            duplicate_param: None,
        }
    }

    /// Set the window width.
    pub fn filter_len(mut self, filter_len: usize) -> Self {
        if self.filter_len.is_some() {
            self.duplicate_param = Some("filter_len");
        }
        self.filter_len = Some(filter_len);
        self
    }

    /// Set the statistic computed per window.
    pub fn kind(mut self, kind: FilterKind) -> Self {
        if self.kind.is_some() {
            self.duplicate_param = Some("kind");
        }
        self.kind = Some(kind);
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<MovingFilter, FilterError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let filter_len = self.filter_len.unwrap_or(3);
        Validator::validate_filter_len(filter_len)?;

        Ok(MovingFilter {
            filter_len,
            kind: self.kind.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Moving Filter Processor
// ============================================================================

/// A validated running-window filter, reusable across inputs.
#[derive(Debug, Clone, Copy)]
pub struct MovingFilter {
    filter_len: usize,
    kind: FilterKind,
}

impl MovingFilter {
    /// Window width the filter runs with.
    pub fn filter_len(&self) -> usize {
        self.filter_len
    }

    /// Statistic the filter computes.
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Filter `input`, producing one output sample per input position.
    ///
    /// Each call is a fresh, deterministic pass; the filter holds no state
    /// across calls, so one filter may serve concurrent callers.
    pub fn apply<T, S>(&self, input: &S) -> Result<FilterOutput<T>, FilterError>
    where
        T: Sample,
        S: Sequence<T> + ?Sized,
    {
        let samples = match self.kind {
            FilterKind::Mean => {
                FilterExecutor::run(input, self.filter_len, &mut RunningMean::default())
            }
            FilterKind::Median => {
                FilterExecutor::run(input, self.filter_len, &mut RankMedian::default())
            }
        };

        Ok(FilterOutput {
            samples,
            filter_len: self.filter_len,
            kind: self.kind,
        })
    }
}
