//! Output types for filter operations.
//!
//! ## Purpose
//!
//! This module defines the `FilterOutput` struct which carries the filtered
//! samples together with the parameters that produced them.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Sample` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `samples` has exactly the length of the input sequence it was produced
//!   from; index `i` corresponds to input index `i`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::reducer::FilterKind;
use crate::primitives::sequence::Sample;

// ============================================================================
// Result Structure
// ============================================================================

/// Filtered sample sequence together with the filter parameters used.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput<T> {
    /// Filtered samples, index-aligned with the input sequence.
    pub samples: Vec<T>,

    /// Window width the filter ran with.
    pub filter_len: usize,

    /// Statistic that produced the samples.
    pub kind: FilterKind,
}

impl<T: Sample> FilterOutput<T> {
    /// Number of output samples (equals the input length).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the output holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the output, keeping only the filtered samples.
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Sample + Display> Display for FilterOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Filter:        {}", self.kind)?;
        writeln!(f, "  Filter length: {}", self.filter_len)?;
        writeln!(f, "  Data points:   {}", self.samples.len())?;
        writeln!(f)?;

        writeln!(f, "Filtered Data:")?;
        writeln!(f, "{:>8} {:>12}", "Index", "Value")?;
        writeln!(f, "{:-<21}", "")?;

        // Show first 10 and last 10 rows when there are more than 20 points.
        let n = self.samples.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>8} {:>12}", idx, self.samples[idx])?;
        }

        Ok(())
    }
}
