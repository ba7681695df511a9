//! Tests for the public filtering API.
//!
//! These tests verify the documented contract of both transforms:
//! - Output length always equals input length
//! - Zero filter length is rejected before any processing
//! - Boundary replication semantics at both ends
//! - Median robustness against single-sample outliers
//!
//! ## Test Organization
//!
//! 1. **Contract Properties** - length, errors, empty input, identity
//! 2. **Concrete Scenarios** - exact expected outputs
//! 3. **Builder Workflows** - configuration, defaults, duplicate detection

use approx::assert_relative_eq;

use runfilt::prelude::*;

// ============================================================================
// Contract Property Tests
// ============================================================================

/// Test that output length equals input length for both transforms.
///
/// Verifies the length contract across odd and even widths, including widths
/// larger than the input.
#[test]
fn test_length_preservation() {
    let input: Vec<f64> = (0..37).map(|i| (i as f64 * 0.3).sin()).collect();

    for filter_len in [1, 2, 3, 4, 7, 16, 37, 50, 100] {
        let averaged = moving_average(&input, filter_len).unwrap();
        let medianed = moving_median(&input, filter_len).unwrap();

        assert_eq!(
            averaged.len(),
            input.len(),
            "average length must match input for filter_len={filter_len}"
        );
        assert_eq!(
            medianed.len(),
            input.len(),
            "median length must match input for filter_len={filter_len}"
        );
    }
}

/// Test that a zero filter length fails for any input.
///
/// Verifies the single error condition, including on empty input.
#[test]
fn test_zero_filter_len_rejected() {
    let input = vec![1.0, 2.0, 3.0];

    assert_eq!(
        moving_average(&input, 0),
        Err(FilterError::InvalidFilterLength)
    );
    assert_eq!(
        moving_median(&input, 0),
        Err(FilterError::InvalidFilterLength)
    );
    assert_eq!(
        moving_average::<f64>(&[], 0),
        Err(FilterError::InvalidFilterLength)
    );
    assert_eq!(
        moving_median::<f64>(&[], 0),
        Err(FilterError::InvalidFilterLength)
    );
}

/// Test that empty input produces empty output.
///
/// Verifies that emptiness is a valid, non-erroring case for any width.
#[test]
fn test_empty_input() {
    for filter_len in [1, 3, 10] {
        assert!(moving_average::<i32>(&[], filter_len).unwrap().is_empty());
        assert!(moving_median::<i32>(&[], filter_len).unwrap().is_empty());
    }
}

/// Test that constant input yields constant output.
///
/// Verifies that boundary replication never distorts a flat signal, for both
/// transforms and both parities of the width.
#[test]
fn test_constant_input() {
    let input = vec![7.0; 20];

    for filter_len in [1, 2, 3, 4, 5, 19, 20, 21] {
        let averaged = moving_average(&input, filter_len).unwrap();
        let medianed = moving_median(&input, filter_len).unwrap();

        assert!(
            averaged.iter().all(|&v| v == 7.0),
            "average of a constant signal must stay constant for filter_len={filter_len}"
        );
        assert!(
            medianed.iter().all(|&v| v == 7.0),
            "median of a constant signal must stay constant for filter_len={filter_len}"
        );
    }
}

/// Test that filter_len = 1 is the identity transform.
///
/// Verifies that a width-1 window (half length 0) passes samples through.
#[test]
fn test_width_one_identity() {
    let input = vec![5, 3, 8, 9, 2, 7, 4, 6, 1, 0, 3, 5, 2];

    assert_eq!(moving_average(&input, 1).unwrap(), input);
    assert_eq!(moving_median(&input, 1).unwrap(), input);
}

/// Test inputs shorter than the emission delay.
///
/// Verifies the tail extension stops at exactly one output per input
/// position even when half the window exceeds the input length.
#[test]
fn test_input_shorter_than_delay() {
    let input = vec![10.0, 20.0];

    let averaged = moving_average(&input, 10).unwrap();
    let medianed = moving_median(&input, 10).unwrap();

    assert_eq!(averaged.len(), 2);
    assert_eq!(medianed.len(), 2);

    // 8 replicas of 10 plus two 20s, then 7 replicas plus three 20s.
    assert_relative_eq!(averaged[0], 12.0, epsilon = 1e-12);
    assert_relative_eq!(averaged[1], 13.0, epsilon = 1e-12);
    assert_eq!(medianed, vec![10.0, 10.0]);
}

/// Test single-sample input.
#[test]
fn test_single_sample() {
    assert_eq!(moving_average(&[42], 5).unwrap(), vec![42]);
    assert_eq!(moving_median(&[42], 5).unwrap(), vec![42]);
}

// ============================================================================
// Concrete Scenario Tests
// ============================================================================

/// Test the exact integer scenario with width 3.
///
/// Verifies boundary replication at both ends: output 0 averages the window
/// [5, 5, 3] (one replica of the first sample), not an unpadded window.
#[test]
fn test_concrete_scenario_average() {
    let input = vec![5, 3, 8, 9, 2, 7, 4, 6, 1, 0, 3, 5, 2];

    let averaged = moving_average(&input, 3).unwrap();

    assert_eq!(averaged.len(), 13);
    assert_eq!(averaged[0], (5 + 5 + 3) / 3);
    assert_eq!(averaged, vec![4, 5, 6, 6, 6, 4, 5, 3, 2, 1, 2, 3, 3]);
}

/// Test the exact integer scenario with width 3 for the median.
///
/// Verifies per-window rank selection including the replicated tail window
/// [5, 2, 2].
#[test]
fn test_concrete_scenario_median() {
    let input = vec![5, 3, 8, 9, 2, 7, 4, 6, 1, 0, 3, 5, 2];

    let medianed = moving_median(&input, 3).unwrap();

    assert_eq!(medianed.len(), 13);
    assert_eq!(medianed, vec![5, 5, 8, 8, 7, 4, 6, 4, 1, 1, 3, 3, 2]);
}

/// Test integer division truncation.
///
/// Verifies that averaging integral samples truncates exactly as the element
/// type's native division does.
#[test]
fn test_integer_truncation() {
    // Window [1, 2] sums to 3; 3 / 2 truncates to 1.
    let averaged = moving_average(&[1, 2, 2], 2).unwrap();
    assert_eq!(averaged, vec![1, 2, 2]);
}

/// Test float averaging against hand-computed windows.
#[test]
fn test_float_average() {
    let input = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    let averaged = moving_average(&input, 3).unwrap();

    let expected = [4.0 / 3.0, 2.0, 3.0, 4.0, 14.0 / 3.0];
    for (got, want) in averaged.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

/// Test the left-biased asymmetry of even widths.
///
/// Verifies that half length truncates (4 / 2 = 2), so the window reaches two
/// positions left and one right of each output index.
#[test]
fn test_even_width_left_bias() {
    let input = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

    let averaged = moving_average(&input, 4).unwrap();
    let medianed = moving_median(&input, 4).unwrap();

    let expected = [1.75, 2.5, 3.5, 4.5, 5.25, 5.75];
    for (got, want) in averaged.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }

    // Rank 2 of the 4-wide window.
    assert_eq!(medianed, vec![2.0, 3.0, 4.0, 5.0, 6.0, 6.0]);
}

/// Test median rejection of a single-sample outlier.
///
/// A lone spike of 200 in a flat signal of 100 must never survive a width-50
/// median, while the average shows a detectable bump.
#[test]
fn test_outlier_rejection() {
    let mut input = vec![100; 255];
    input[127] = 200;

    let medianed = moving_median(&input, 50).unwrap();
    let averaged = moving_average(&input, 50).unwrap();

    assert_eq!(medianed.len(), 255);
    assert!(
        medianed.iter().all(|&v| v == 100),
        "median must reject the single-sample spike entirely"
    );

    let peak = *averaged.iter().max().unwrap();
    assert_eq!(
        peak, 102,
        "average must smear the spike across the window: (49*100 + 200) / 50"
    );
    assert!(averaged.iter().any(|&v| v > 100));
}

// ============================================================================
// Builder Workflow Tests
// ============================================================================

/// Test the builder against the free functions.
///
/// Verifies that a configured filter produces exactly the free-function
/// output for both kinds.
#[test]
fn test_builder_matches_free_functions() {
    let input = vec![5, 3, 8, 9, 2, 7, 4, 6, 1, 0, 3, 5, 2];

    let mean_output = Filter::new()
        .filter_len(3)
        .kind(Mean)
        .build()
        .unwrap()
        .apply(&input)
        .unwrap();
    let median_output = Filter::new()
        .filter_len(3)
        .kind(Median)
        .build()
        .unwrap()
        .apply(&input)
        .unwrap();

    assert_eq!(mean_output.samples, moving_average(&input, 3).unwrap());
    assert_eq!(median_output.samples, moving_median(&input, 3).unwrap());
    assert_eq!(mean_output.filter_len, 3);
    assert_eq!(median_output.kind, FilterKind::Median);
}

/// Test builder defaults.
///
/// Verifies that an unconfigured builder produces a valid width-3 mean
/// filter.
#[test]
fn test_builder_defaults() {
    let filter = Filter::new().build().unwrap();

    assert_eq!(filter.filter_len(), 3);
    assert_eq!(filter.kind(), FilterKind::Mean);
}

/// Test that the builder rejects a zero width at build time.
#[test]
fn test_builder_rejects_zero_width() {
    let result = Filter::new().filter_len(0).build();

    assert_eq!(result.unwrap_err(), FilterError::InvalidFilterLength);
}

/// Test duplicate parameter detection.
///
/// Verifies that setting the same parameter twice surfaces at build().
#[test]
fn test_builder_duplicate_parameter() {
    let result = Filter::new().filter_len(3).filter_len(5).build();

    assert_eq!(
        result.unwrap_err(),
        FilterError::DuplicateParameter {
            parameter: "filter_len"
        }
    );

    let result = Filter::new().kind(Mean).kind(Median).build();
    assert_eq!(
        result.unwrap_err(),
        FilterError::DuplicateParameter { parameter: "kind" }
    );
}

/// Test that one filter is reusable across inputs and calls.
#[test]
fn test_filter_reuse() {
    let filter = Filter::new().filter_len(3).kind(Median).build().unwrap();

    let a = filter.apply(&vec![1, 2, 3]).unwrap();
    let b = filter.apply(&vec![9, 8, 7, 6]).unwrap();

    assert_eq!(a.len(), 3);
    assert_eq!(b.len(), 4);

    // Repeat call on the same input is identical (no retained state).
    let a2 = filter.apply(&vec![1, 2, 3]).unwrap();
    assert_eq!(a.samples, a2.samples);
}

/// Test the output summary renderer.
#[test]
fn test_output_display() {
    let input = vec![5.0, 3.0, 8.0, 9.0, 2.0];
    let output = Filter::new()
        .filter_len(3)
        .kind(Median)
        .build()
        .unwrap()
        .apply(&input)
        .unwrap();

    let rendered = format!("{}", output);

    assert!(rendered.contains("Data points:   5"));
    assert!(rendered.contains("moving median"));
    assert!(rendered.contains("Filtered Data:"));
}

/// Test error Display formatting.
#[test]
fn test_error_display() {
    assert_eq!(
        format!("{}", FilterError::InvalidFilterLength),
        "Invalid filter length: 0 (must be greater than 0)"
    );
    assert!(format!(
        "{}",
        FilterError::DuplicateParameter { parameter: "kind" }
    )
    .contains("'kind'"));
}
