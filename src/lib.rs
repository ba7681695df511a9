//! # runfilt: boundary-corrected running-window filters
//!
//! Two sliding-window transforms over finite numeric sample sequences:
//!
//! * **Moving average**: linear smoothing via a running sum, O(1) per step.
//! * **Moving median**: rank-order smoothing via per-step selection, O(w)
//!   per step, robust to outliers and impulse noise.
//!
//! Both transforms replicate the first and last samples beyond the sequence
//! boundaries so that the output has exactly the same length as the input and
//! every output value is produced by a full-width, correctly centered window.
//!
//! ## Quick Start
//!
//! ### Free functions
//!
//! ```rust
//! use runfilt::prelude::*;
//!
//! let samples = vec![5.0, 3.0, 8.0, 9.0, 2.0, 7.0, 4.0];
//!
//! let averaged = moving_average(&samples, 3)?;
//! let medianed = moving_median(&samples, 3)?;
//!
//! assert_eq!(averaged.len(), samples.len());
//! assert_eq!(medianed.len(), samples.len());
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ### Builder form
//!
//! ```rust
//! use runfilt::prelude::*;
//!
//! let samples = vec![5, 3, 8, 9, 2, 7, 4, 6, 1, 0, 3, 5, 2];
//!
//! let filter = Filter::new()
//!     .filter_len(3)      // Window width (must be positive)
//!     .kind(Median)       // Mean or Median
//!     .build()?;
//!
//! let output = filter.apply(&samples)?;
//! assert_eq!(output.len(), samples.len());
//!
//! println!("{}", output);
//! # Result::<(), FilterError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible entry point returns `Result<_, FilterError>`. The single
//! invalid configuration is a zero filter length, rejected before any window
//! state is built; empty inputs are valid and yield empty outputs.
//!
//! ```rust
//! use runfilt::prelude::*;
//!
//! let samples = vec![1.0, 2.0, 3.0];
//! assert!(moving_average(&samples, 0).is_err());
//! assert!(moving_median::<f64>(&[], 5).unwrap().is_empty());
//! ```
//!
//! ## Element types
//!
//! The transforms are generic over [`prelude::Sample`]: any `Copy` type with
//! arithmetic, a zero identity, and a partial order qualifies (`i32`, `i64`,
//! `f32`, `f64`, ...). Division by the window width uses the element type's
//! native division, so integral types truncate exactly as the type does.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! runfilt = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure boundary and selection functions.
mod math;

// Layer 3: Algorithms - the per-window reduction strategies.
mod algorithms;

// Layer 4: Engine - the shared sliding-window skeleton and validation.
mod engine;

// High-level fluent API for running-window filtering.
mod api;

// Standard runfilt prelude.
pub mod prelude {
    pub use crate::api::{
        moving_average, moving_median, FilterBuilder as Filter, FilterError, FilterKind,
        FilterKind::{Mean, Median},
        FilterOutput, MovingFilter, Sample, Sequence,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
