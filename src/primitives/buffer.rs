//! Scratch buffer management for per-step selection.
//!
//! ## Purpose
//!
//! The median reducer rebuilds a sortable copy of the window on every step.
//! Allocating that copy fresh each time would dominate the cost of the
//! transform, so this module provides a reusable slot that is cleared, never
//! deallocated, between steps.
//!
//! ## Invariants
//!
//! * Capacity is monotonically increasing within one transform call; the slot
//!   stabilizes at the window width after the first step.
//!
//! ## Non-goals
//!
//! * Sharing buffers across transform calls or threads (each reducer owns its
//!   own slot).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};

/// A reusable vector slot with capacity that survives clearing.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
