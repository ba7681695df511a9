//! Sample element and sequence abstractions.
//!
//! ## Purpose
//!
//! This module defines the two traits the transforms are written against:
//! [`Sample`] bounds the element type, and [`Sequence`] abstracts the input
//! container as an index-addressable, known-length run of samples so the core
//! is decoupled from any specific container representation.
//!
//! ## Design notes
//!
//! * **Blanket Sample**: `Sample` is a bound alias; every qualifying type
//!   implements it automatically.
//! * **By-value access**: Elements are `Copy`, so `Sequence::get` returns an
//!   owned value rather than a reference.
//!
//! ## Key concepts
//!
//! * **Sample**: arithmetic (`+`, `-`, `/`), a zero identity, a partial order,
//!   and cheap copying. Satisfied by the primitive integer and float types.
//! * **Sequence**: random access by index plus a known length. The transforms
//!   never mutate a sequence.
//!
//! ## Invariants
//!
//! * `get(i)` is defined for all `i < len()`.
//!
//! ## Non-goals
//!
//! * This module does not support lazily evaluated or unbounded sequences.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{Num, NumCast};

// ============================================================================
// Sample Trait
// ============================================================================

/// Element bound for filterable samples.
///
/// Requires arithmetic with a zero identity (`Num`), conversion from the
/// window width (`NumCast`), an ordering for rank selection, and `Copy`.
pub trait Sample: Num + NumCast + PartialOrd + Copy {}

impl<T> Sample for T where T: Num + NumCast + PartialOrd + Copy {}

// ============================================================================
// Sequence Trait
// ============================================================================

/// A finite, ordered, random-accessible run of samples.
pub trait Sequence<T: Sample> {
    /// Number of samples in the sequence.
    fn len(&self) -> usize;

    /// Check if the sequence holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at `index`.
    ///
    /// Implementations may panic when `index >= len()`; the engine only asks
    /// for in-range positions.
    fn get(&self, index: usize) -> T;
}

impl<T: Sample> Sequence<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Sample> Sequence<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}
