//! # Random Walk Traces
//!
//! Builds one 1000-step trajectory, then four more, and prints a summary
//! of each. A plotting consumer would receive the same `Vec<Position>` and
//! render the path with start and end markers.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example walk_trace
//! ```

use meander_components::walk::{self, Position};
use meander_core::RandomSource;

/// Steps per trajectory.
const NUM_STEPS: usize = 1000;

/// Additional traces after the first.
const NUM_TRACES: usize = 4;

fn main() {
    let mut source = RandomSource::from_entropy();

    let path = walk::trajectory(NUM_STEPS, &mut source).expect("step count is positive");
    describe("Single trace", &path);

    for i in 1..=NUM_TRACES {
        let path = walk::trajectory(NUM_STEPS, &mut source).expect("step count is positive");
        describe(&format!("Trace {i}"), &path);
    }
}

fn describe(label: &str, path: &[Position]) {
    let start = path.first().expect("a trajectory is never empty");
    let end = path.last().expect("a trajectory is never empty");
    let distance = ((end.x * end.x + end.y * end.y) as f64).sqrt();

    println!("{label}: {} positions", path.len());
    println!("  start ({}, {})", start.x, start.y);
    println!("  end   ({}, {})", end.x, end.y);
    println!("  end-to-end distance {distance:.1}");
}
