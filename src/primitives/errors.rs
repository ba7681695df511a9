//! Error types for running-window filter operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when configuring
//! or invoking the moving average and moving median transforms.
//!
//! ## Design notes
//!
//! * **Deferred**: Builder misconfiguration is caught and surfaced at `build()`.
//! * **No-std**: Variants carry only `'static` context, so no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: A zero filter length is rejected before any
//!    window state is built; no partial output is ever produced.
//! 2. **Builder constraints**: Each builder parameter may be set at most once.
//!
//! ## Invariants
//!
//! * Empty input sequences are *not* an error; they produce empty outputs.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for running-window filter operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// The filter length must be a positive integer; zero produces no window.
    InvalidFilterLength,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidFilterLength => {
                write!(f, "Invalid filter length: 0 (must be greater than 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FilterError {}
