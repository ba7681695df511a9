//! Running-sum reducer for the moving average transform.
//!
//! ## Purpose
//!
//! Maintains the sum of the current window as an accumulator updated in O(1)
//! per slide: each step adds the incoming sample and subtracts the retiring
//! one, so the accumulator always equals the sum of the window contents,
//! including while the window still holds boundary replicas.
//!
//! ## Numeric semantics
//!
//! `evaluate` divides by the window width converted into the element type:
//! truncating division for integral types, exact division for floats. No
//! rounding correction is applied beyond the type's native division. The
//! accumulator has the element type; callers filtering narrow integers over
//! wide windows should widen the element type themselves.

// Internal dependencies
use crate::algorithms::reducer::WindowReducer;
use crate::primitives::sequence::Sample;
use crate::primitives::window::SlidingWindow;

/// Moving-average reduction strategy.
#[derive(Debug, Clone)]
pub struct RunningMean<T> {
    // Sum of the current window contents.
    sum: T,

    // Window width converted into the element type, cached for division.
    width: T,
}

impl<T: Sample> Default for RunningMean<T> {
    fn default() -> Self {
        Self {
            sum: T::zero(),
            width: T::one(),
        }
    }
}

impl<T: Sample> WindowReducer<T> for RunningMean<T> {
    fn seed(&mut self, first: T, filter_len: usize) {
        self.width = T::from(filter_len).unwrap();
        self.sum = first * self.width;
    }

    #[inline]
    fn advance(&mut self, incoming: T, outgoing: T) {
        self.sum = self.sum + incoming - outgoing;
    }

    #[inline]
    fn evaluate(&mut self, _window: &SlidingWindow<T>) -> T {
        self.sum / self.width
    }
}
