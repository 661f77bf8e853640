//! # Mean-Square Displacement Scaling
//!
//! Measures the mean-square displacement at several step counts, fits the
//! proportionality MSD = k·N through the origin, and prints the fitted k
//! next to the diffusive expectation k = 2 for a two-dimensional unit-step
//! walk.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example msd_scaling --release
//! ```

use meander_components::walk;
use meander_core::RandomSource;
use meander_stats::{fit_proportionality, mean_square_displacement};

/// Step counts to scan.
const STEP_COUNTS: [usize; 4] = [1000, 2000, 3000, 4000];

/// Independent walks per step count.
const NUM_WALKS: usize = 1000;

fn main() {
    let mut source = RandomSource::from_entropy();

    let mut msd = Vec::with_capacity(STEP_COUNTS.len());
    for &num_steps in &STEP_COUNTS {
        let batch = walk::final_displacements(num_steps, NUM_WALKS, &mut source)
            .expect("counts are positive");
        msd.push(mean_square_displacement(&batch).expect("the batch is non-empty"));
    }

    let steps: Vec<f64> = STEP_COUNTS.iter().map(|&n| n as f64).collect();
    let k = fit_proportionality(&steps, &msd).expect("the scan is non-degenerate");

    println!("{:>8} {:>12} {:>12}", "N", "MSD", "2N");
    for (&num_steps, &measured) in STEP_COUNTS.iter().zip(&msd) {
        println!("{num_steps:>8} {measured:>12.1} {:>12}", 2 * num_steps);
    }
    println!();
    println!("least-squares fit: MSD = {k:.3} * N");
    println!("diffusive expectation: MSD = 2 * N");
}
