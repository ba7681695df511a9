//! Sliding window storage for running-window filters.
//!
//! This module provides the fixed-width window over the boundary-adjusted
//! sample stream. The window is seeded entirely with replicas of the first
//! real sample, then advanced one sample at a time; each advance retires the
//! oldest element so the width stays constant for the whole pass.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::VecDeque;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::sequence::Sample;

/// Fixed-width multiset of the most recent boundary-adjusted samples.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    // Arrival-ordered contents, oldest at the front.
    buf: VecDeque<T>,
}

impl<T: Sample> SlidingWindow<T> {
    /// Create a window filled with `filter_len` replicas of `first`.
    ///
    /// Seeding with replicas models a left boundary where the window is
    /// entirely filled with copies of the first real sample.
    pub fn seeded(first: T, filter_len: usize) -> Self {
        debug_assert!(filter_len > 0, "seeded: filter_len must be at least 1");

        let mut buf = VecDeque::with_capacity(filter_len + 1);
        for _ in 0..filter_len {
            buf.push_back(first);
        }
        Self { buf }
    }

    /// Advance by one sample: admit `incoming`, return the retiring element.
    #[inline]
    pub fn slide(&mut self, incoming: T) -> T {
        debug_assert!(!self.buf.is_empty(), "slide: window must be seeded");

        self.buf.push_back(incoming);
        self.buf.pop_front().unwrap_or(incoming)
    }

    /// Current window width.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if the window holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Copy the window contents into `dst` in arrival order, reusing its
    /// capacity.
    #[inline]
    pub fn copy_into(&self, dst: &mut Vec<T>) {
        dst.clear();
        let (head, tail) = self.buf.as_slices();
        dst.extend_from_slice(head);
        dst.extend_from_slice(tail);
    }
}
