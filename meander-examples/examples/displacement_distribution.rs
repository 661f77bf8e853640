//! # Final Displacement Distribution
//!
//! Runs 1000 independent 1000-step walks, bins the end-to-end distances
//! and their squares, and prints both histograms alongside the mean-square
//! displacement. A plotting consumer would render the same histograms on
//! linear, semi-log, or log-log axes.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example displacement_distribution --release
//! ```

use meander_components::walk::{self, Displacement};
use meander_core::RandomSource;
use meander_stats::{Histogram, mean_square_displacement};

/// Steps per walk.
const NUM_STEPS: usize = 1000;

/// Independent walks in the batch.
const NUM_WALKS: usize = 1000;

/// Histogram bins.
const BINS: usize = 30;

fn main() {
    let mut source = RandomSource::from_entropy();

    let batch = walk::final_displacements(NUM_STEPS, NUM_WALKS, &mut source)
        .expect("counts are positive");
    let r_squared: Vec<f64> = batch.iter().map(Displacement::radius_squared).collect();

    let msd = mean_square_displacement(&batch).expect("the batch is non-empty");
    println!("{NUM_WALKS} walks of {NUM_STEPS} steps");
    println!("mean-square displacement {msd:.1} (2N = {})", 2 * NUM_STEPS);
    println!();

    let r: Vec<f64> = r_squared.iter().map(|value| value.sqrt()).collect();
    let histogram = Histogram::with_bins(&r, BINS).expect("r values are finite");
    println!("r distribution:");
    print_histogram(&histogram);
    println!();

    let histogram = Histogram::with_bins(&r_squared, BINS).expect("r² values are finite");
    println!("r² distribution:");
    print_histogram(&histogram);
}

fn print_histogram(histogram: &Histogram) {
    let peak = histogram.counts().iter().copied().max().unwrap_or(1).max(1);

    for (pair, count) in histogram.edges().windows(2).zip(histogram.counts()) {
        let bar = "#".repeat((count * 40 / peak) as usize);
        println!("{:>9.0} ..{:>9.0} | {count:>4} {bar}", pair[0], pair[1]);
    }
}
