//! Input validation for filter configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions for filter parameters.
//! Validation runs before any window state is built, so an invalid
//! configuration never produces partial output.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Deterministic**: Validation is side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not validate sample values; every finite sequence,
//!   including the empty one, is a valid input to the transforms.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::FilterError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for filter configuration.
///
/// Provides static methods returning `Result<(), FilterError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the window width parameter.
    pub fn validate_filter_len(filter_len: usize) -> Result<(), FilterError> {
        if filter_len == 0 {
            return Err(FilterError::InvalidFilterLength);
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), FilterError> {
        if let Some(parameter) = duplicate_param {
            return Err(FilterError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
