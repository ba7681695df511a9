//! Order-statistic selection for the median transform.
//!
//! ## Purpose
//!
//! This module selects the rank-`k` element of a window copy: the value that
//! would sit at index `k` if the slice were fully sorted. The median filter
//! asks for rank `filter_len / 2` on every step.
//!
//! ## Design notes
//!
//! * **Partial selection**: Uses `select_nth_unstable_by`, which partitions
//!   in linear time instead of sorting the whole window.
//! * **Total order**: Samples are only `PartialOrd`; incomparable pairs
//!   (float NaN) compare as equal. The result is deterministic for any given
//!   window contents.
//!
//! ## Non-goals
//!
//! * Incremental rank structures; each call works on the current window copy
//!   alone.

// External dependencies
use core::cmp::Ordering::Equal;

// Internal dependencies
use crate::primitives::sequence::Sample;

/// Select the rank-`rank` smallest element of `values`, reordering the slice
/// around it.
#[inline]
pub fn rank_element<T: Sample>(values: &mut [T], rank: usize) -> T {
    debug_assert!(
        rank < values.len(),
        "rank_element: rank must be within the slice"
    );

    let (_, nth, _) = values.select_nth_unstable_by(rank, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    *nth
}
