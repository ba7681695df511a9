//! Shared execution skeleton for running-window filters.
//!
//! ## Purpose
//!
//! This module provides the single sliding-window loop both transforms run
//! through: seed the window with boundary replicas, slide it across the real
//! input, defer emission until the window is centered, and extend past the
//! tail with replicas of the last sample. The per-window statistic is a
//! pluggable [`WindowReducer`] strategy.
//!
//! ## Key concepts
//!
//! * **Seed**: the window starts holding `filter_len` copies of the first
//!   sample, modeling replication beyond the left boundary.
//! * **Deferred emission**: the first `half_len` slides produce no output;
//!   the slide that brings the window's center over input position 0 produces
//!   output position 0.
//! * **Tail extension**: after the real input is exhausted, replicas of the
//!   last sample keep the window moving until every input position has an
//!   output.
//!
//! ## Invariants
//!
//! * The window retires its oldest element on every slide, so its width is
//!   `filter_len` throughout and an incremental accumulator always matches
//!   the true window sum.
//! * Output length equals input length for every input, including sequences
//!   shorter than `half_len`.
//! * Output index `i` is the statistic of the window centered (with left
//!   bias for even widths) on input index `i`.
//!
//! ## Non-goals
//!
//! * This module does not validate `filter_len` (handled by `validator`).
//! * This module does not choose the statistic (handled by the API layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::reducer::WindowReducer;
use crate::math::boundary::{half_len, replicate_ends};
use crate::primitives::sequence::{Sample, Sequence};
use crate::primitives::window::SlidingWindow;

// ============================================================================
// Filter Executor
// ============================================================================

/// Driver for the seed → slide → emit-deferred → tail-extend pass.
pub struct FilterExecutor;

impl FilterExecutor {
    /// Slide a `filter_len`-wide window across `input`, applying `reducer`
    /// at every emitting step.
    ///
    /// Returns one output sample per input position. `filter_len` must have
    /// been validated as positive by the caller.
    pub fn run<T, S, R>(input: &S, filter_len: usize, reducer: &mut R) -> Vec<T>
    where
        T: Sample,
        S: Sequence<T> + ?Sized,
        R: WindowReducer<T>,
    {
        debug_assert!(filter_len > 0, "run: filter_len must be validated upstream");

        let n = input.len();
        let mut output = Vec::with_capacity(n);

        let (first, last) = match replicate_ends(input) {
            Some(ends) => ends,
            None => return output,
        };

        let delay = half_len(filter_len);
        let mut window = SlidingWindow::seeded(first, filter_len);
        reducer.seed(first, filter_len);

        // Slide across the real input, withholding output until the window
        // has advanced half_len positions past the seed.
        for pos in 0..n {
            let incoming = input.get(pos);
            let outgoing = window.slide(incoming);
            reducer.advance(incoming, outgoing);

            if pos >= delay {
                output.push(reducer.evaluate(&window));
            }
        }

        // Tail extension: feed replicas of the last sample until every input
        // position has produced an output. Runs half_len times whenever the
        // input is longer than half_len.
        while output.len() < n {
            let outgoing = window.slide(last);
            reducer.advance(last, outgoing);
            output.push(reducer.evaluate(&window));
        }

        output
    }
}
