//! Layer 3: Algorithms
//!
//! This layer implements the per-window reduction strategies: the running
//! sum behind the moving average and the rank selection behind the moving
//! median. Both plug into the sliding-window skeleton orchestrated by the
//! engine layer.

// Reduction strategy interface and filter kind selection.
pub mod reducer;

// Running-sum reducer for the moving average.
pub mod average;

// Rank-selection reducer for the moving median.
pub mod median;
