//! runfilt Filtering Examples
//!
//! This example demonstrates the two transforms on a small integer trace:
//! - One-shot filtering through the free functions
//! - The fluent builder with the summary renderer
//! - Median robustness against a single-sample spike

use runfilt::prelude::*;

fn main() -> Result<(), FilterError> {
    println!("{}", "=".repeat(60));
    println!("runfilt Filtering Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_free_functions()?;
    example_2_builder()?;
    example_3_spike_rejection()?;

    Ok(())
}

/// Example 1: One-shot filtering
/// Applies both transforms to the same trace through the free functions.
fn example_1_free_functions() -> Result<(), FilterError> {
    println!("Example 1: Free Functions");
    println!("{}", "-".repeat(60));

    let data = vec![5, 3, 8, 9, 2, 7, 4, 6, 1, 0, 3, 5, 2];
    let filter_len = 3;

    let averaged = moving_average(&data, filter_len)?;
    let medianed = moving_median(&data, filter_len)?;

    println!("Original Data:               {:?}", data);
    println!("Moving Average Filtered:     {:?}", averaged);
    println!("Moving Median Filtered:      {:?}", medianed);

    println!();
    Ok(())
}

/// Example 2: Builder form
/// Configures a reusable filter and prints the formatted output summary.
fn example_2_builder() -> Result<(), FilterError> {
    println!("Example 2: Builder");
    println!("{}", "-".repeat(60));

    let data = vec![5.0, 3.0, 8.0, 9.0, 2.0, 7.0, 4.0, 6.0, 1.0, 0.0];

    let filter = Filter::new().filter_len(5).kind(Median).build()?;
    let output = filter.apply(&data)?;

    println!("{}", output);
    Ok(())
}

/// Example 3: Spike rejection
/// Shows the median ignoring an impulse that the average smears.
fn example_3_spike_rejection() -> Result<(), FilterError> {
    println!("Example 3: Spike Rejection");
    println!("{}", "-".repeat(60));

    // Flat signal with a single-sample spike in the middle.
    let mut data = vec![100; 21];
    data[10] = 200;
    let filter_len = 5;

    let averaged = moving_average(&data, filter_len)?;
    let medianed = moving_median(&data, filter_len)?;

    println!("Original Data:               {:?}", data);
    println!("Moving Average Filtered:     {:?}", averaged);
    println!("Moving Median Filtered:      {:?}", medianed);
    println!();
    println!(
        "Average peak: {} / Median peak: {}",
        averaged.iter().max().unwrap(),
        medianed.iter().max().unwrap()
    );

    println!();
    Ok(())
}
