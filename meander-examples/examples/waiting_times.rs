//! # Waiting Times Between Heads
//!
//! Flips a biased coin (8% heads) and studies the number of tails between
//! consecutive heads: once for a short run of 1000 flips, once for a
//! million. Prints the empirical mean and standard deviation against the
//! geometric and exponential predictions, plus the head of the waiting-time
//! histogram.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example waiting_times --release
//! ```

use meander_components::coin;
use meander_core::RandomSource;
use meander_stats::{Histogram, waiting_time_summary};

/// Seed shared by both runs.
const SEED: u64 = 42;

/// Probability of heads on each flip.
const P_HEAD: f64 = 0.08;

/// Histogram rows to print before eliding the tail.
const MAX_ROWS: usize = 25;

fn main() {
    let mut source = RandomSource::seeded(SEED);

    run_experiment("Task 1: 1000 coin flips", 1_000, &mut source);
    println!();
    run_experiment("Task 2: 1,000,000 coin flips", 1_000_000, &mut source);
}

fn run_experiment(title: &str, n_flips: usize, source: &mut RandomSource) {
    println!("{title}");

    let flips = coin::flip_sequence(n_flips, P_HEAD, source).expect("parameters are valid");
    let waits = coin::waiting_times(&flips);
    let summary = waiting_time_summary(&waits, P_HEAD).expect("the bias is valid");

    if summary.has_samples() {
        println!("  experimental mean {:.2}", summary.mean);
        println!("  experimental std  {:.2}", summary.std_dev);
    } else {
        println!("  fewer than two heads, no waiting times observed");
    }
    println!("  theoretical mean (geometric)   {:.2}", summary.geometric_mean);
    println!("  theoretical mean (exponential) {:.2}", summary.exponential_mean);

    let histogram = Histogram::integer(&waits);
    println!("  waiting-time counts:");
    for (wait, &count) in histogram.counts().iter().enumerate().take(MAX_ROWS) {
        println!("  {wait:>4} | {count}");
    }
    if histogram.counts().len() > MAX_ROWS {
        println!("  ... {} longer bins elided", histogram.counts().len() - MAX_ROWS);
    }
}
