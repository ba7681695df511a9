#![cfg(feature = "dev")]
//! Tests for boundary replication geometry.
//!
//! These tests verify the half-length truncation rule and the replication
//! pad values used at both ends of a pass.
//!
//! ## Test Organization
//!
//! 1. **Half Length** - truncating division, parity behavior
//! 2. **Replication Ends** - pad values, empty sequences

use runfilt::internals::math::boundary::{half_len, replicate_ends};

// ============================================================================
// Half Length Tests
// ============================================================================

/// Test half length truncation for odd and even widths.
///
/// Even widths truncate (4 / 2 = 2 reaches two left, one right), producing
/// the documented left bias; this rule must not be "corrected" to a
/// symmetric split.
#[test]
fn test_half_len_truncation() {
    assert_eq!(half_len(1), 0);
    assert_eq!(half_len(2), 1);
    assert_eq!(half_len(3), 1);
    assert_eq!(half_len(4), 2);
    assert_eq!(half_len(5), 2);
    assert_eq!(half_len(50), 25);
    assert_eq!(half_len(51), 25);
}

// ============================================================================
// Replication End Tests
// ============================================================================

/// Test pad values for a non-empty sequence.
#[test]
fn test_replicate_ends_values() {
    let input = [5, 3, 8, 9, 2];

    let (first, last) = replicate_ends(&input[..]).unwrap();

    assert_eq!(first, 5, "head padding replicates the first sample");
    assert_eq!(last, 2, "tail padding replicates the last sample");
}

/// Test that a single-sample sequence pads with itself at both ends.
#[test]
fn test_replicate_ends_single() {
    let (first, last) = replicate_ends(&[42.0][..]).unwrap();

    assert_eq!(first, 42.0);
    assert_eq!(last, 42.0);
}

/// Test that the empty sequence has no pad values.
#[test]
fn test_replicate_ends_empty() {
    let input: &[f64] = &[];

    assert!(replicate_ends(input).is_none());
}
