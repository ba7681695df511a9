//! Rank-selection reducer for the moving median transform.
//!
//! ## Purpose
//!
//! Recomputes the rank-`filter_len / 2` order statistic of the window on
//! every slide. The window contents are copied into a recycled scratch slot
//! and partially selected in place, O(w) per step with no incremental rank
//! structure.
//!
//! ## Design notes
//!
//! * **Deterministic**: ties break arbitrarily but consistently; the result
//!   is always the true rank element of the current window contents.
//! * **Allocation**: the scratch slot is cleared between steps, never
//!   deallocated, so one transform call allocates at most once.

// Internal dependencies
use crate::algorithms::reducer::WindowReducer;
use crate::math::boundary::half_len;
use crate::math::selection::rank_element;
use crate::primitives::buffer::Slot;
use crate::primitives::sequence::Sample;
use crate::primitives::window::SlidingWindow;

/// Moving-median reduction strategy.
#[derive(Debug, Clone)]
pub struct RankMedian<T> {
    // Rank of the element reported as the median.
    rank: usize,

    // Recycled sortable copy of the window contents.
    scratch: Slot<T>,
}

impl<T> Default for RankMedian<T> {
    fn default() -> Self {
        Self {
            rank: 0,
            scratch: Slot::default(),
        }
    }
}

impl<T: Sample> WindowReducer<T> for RankMedian<T> {
    fn seed(&mut self, _first: T, filter_len: usize) {
        self.rank = half_len(filter_len);
        self.scratch.clear();
        if self.scratch.capacity() < filter_len {
            self.scratch.as_vec_mut().reserve(filter_len);
        }
    }

    #[inline]
    fn advance(&mut self, _incoming: T, _outgoing: T) {
        // Rank selection reads the full window in evaluate; nothing to
        // maintain incrementally.
    }

    #[inline]
    fn evaluate(&mut self, window: &SlidingWindow<T>) -> T {
        window.copy_into(self.scratch.as_vec_mut());
        rank_element(self.scratch.as_vec_mut(), self.rank)
    }
}
