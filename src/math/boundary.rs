//! Boundary replication geometry for running-window filters.
//!
//! ## Purpose
//!
//! A centered window of width `w` reaches `w / 2` positions beyond each end
//! of a finite sequence. This module encodes the replication policy that
//! fills those positions: the first real sample is replicated before the
//! sequence and the last real sample after it, instead of shrinking the
//! window or reflecting samples.
//!
//! ## Key concepts
//!
//! * **half length**: `filter_len / 2` with integer truncation. It is both
//!   the emission delay at the head of the pass and the number of extension
//!   steps at the tail.
//! * **Left bias**: for even `filter_len` the truncation makes the window
//!   asymmetric by one sample. This is the documented, reproducible behavior
//!   of the transforms, preserved deliberately rather than corrected to a
//!   symmetric window.
//!
//! ## Non-goals
//!
//! * Alternative padding policies (reflection, zero fill). Replication is the
//!   contract of both transforms.

// Internal dependencies
use crate::primitives::sequence::{Sample, Sequence};

/// Emission delay at the head and extension length at the tail.
#[inline]
pub fn half_len(filter_len: usize) -> usize {
    filter_len / 2
}

/// Replication pad values for a sequence: `(first, last)`, or `None` when
/// the sequence is empty and no padding is defined.
#[inline]
pub fn replicate_ends<T, S>(input: &S) -> Option<(T, T)>
where
    T: Sample,
    S: Sequence<T> + ?Sized,
{
    if input.is_empty() {
        return None;
    }
    Some((input.get(0), input.get(input.len() - 1)))
}
