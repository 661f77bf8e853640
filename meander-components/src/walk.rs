//! Two-dimensional unit random walks.
//!
//! A walk takes independent ±1 steps along each axis. [`trajectory`] builds
//! the full path of one walk; [`final_displacements`] collects only the end
//! points of many walks, which is all the aggregate statistics need.

use meander_core::{Categorical, RandomSource, SampleError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position visited by a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// The end point of one walk relative to its origin.
///
/// Equivalently, the per-axis sum of all the walk's steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Displacement {
    pub x: i64,
    pub y: i64,
}

impl Displacement {
    /// Squared Euclidean magnitude, x² + y².
    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        let x = self.x as f64;
        let y = self.y as f64;
        x * x + y * y
    }
}

/// Errors from the walk operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WalkError {
    #[error("a walk needs at least one step")]
    NoSteps,

    #[error("at least one walk is required")]
    NoWalks,

    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Builds the full path of one walk of `num_steps` steps.
///
/// Steps along x are drawn first, then steps along y, and the running
/// cumulative sums are combined into positions starting from the origin.
/// The result has length `num_steps + 1`, begins at (0, 0), and consecutive
/// positions differ by exactly one unit along each axis.
///
/// # Errors
///
/// Returns [`WalkError::NoSteps`] when `num_steps` is zero.
pub fn trajectory(num_steps: usize, source: &mut RandomSource) -> Result<Vec<Position>, WalkError> {
    if num_steps == 0 {
        return Err(WalkError::NoSteps);
    }

    let steps = Categorical::unit_steps();
    let x_steps = steps.sample(num_steps, source)?;
    let y_steps = steps.sample(num_steps, source)?;

    let mut path = Vec::with_capacity(num_steps + 1);
    let mut position = Position { x: 0, y: 0 };
    path.push(position);

    for (dx, dy) in x_steps.into_iter().zip(y_steps) {
        position.x += dx;
        position.y += dy;
        path.push(position);
    }

    Ok(path)
}

/// Collects the final displacements of `num_walks` independent walks of
/// `num_steps` steps each.
///
/// Only the per-axis step sums are accumulated; no trajectory is
/// materialized and no per-walk allocation happens, so batches in the
/// millions of draws stay cheap.
///
/// # Errors
///
/// Returns [`WalkError::NoSteps`] when `num_steps` is zero and
/// [`WalkError::NoWalks`] when `num_walks` is zero.
pub fn final_displacements(
    num_steps: usize,
    num_walks: usize,
    source: &mut RandomSource,
) -> Result<Vec<Displacement>, WalkError> {
    if num_steps == 0 {
        return Err(WalkError::NoSteps);
    }
    if num_walks == 0 {
        return Err(WalkError::NoWalks);
    }

    let steps = Categorical::unit_steps();
    let mut batch = Vec::with_capacity(num_walks);

    for _ in 0..num_walks {
        let mut x = 0;
        let mut y = 0;
        for _ in 0..num_steps {
            x += steps.draw(source);
        }
        for _ in 0..num_steps {
            y += steps.draw(source);
        }
        batch.push(Displacement { x, y });
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_starts_at_the_origin() {
        let mut source = RandomSource::seeded(5);

        let path = trajectory(100, &mut source).unwrap();

        assert_eq!(path.len(), 101);
        assert_eq!(path[0], Position { x: 0, y: 0 });
    }

    #[test]
    fn trajectory_moves_one_unit_per_axis_per_step() {
        let mut source = RandomSource::seeded(5);

        let path = trajectory(1_000, &mut source).unwrap();

        for pair in path.windows(2) {
            assert_eq!((pair[1].x - pair[0].x).abs(), 1);
            assert_eq!((pair[1].y - pair[0].y).abs(), 1);
        }
    }

    #[test]
    fn trajectory_rejects_zero_steps() {
        let mut source = RandomSource::seeded(5);

        let result = trajectory(0, &mut source);

        assert_eq!(result.unwrap_err(), WalkError::NoSteps);
    }

    #[test]
    fn final_displacements_rejects_zero_counts() {
        let mut source = RandomSource::seeded(5);

        assert_eq!(
            final_displacements(0, 10, &mut source).unwrap_err(),
            WalkError::NoSteps
        );
        assert_eq!(
            final_displacements(10, 0, &mut source).unwrap_err(),
            WalkError::NoWalks
        );
    }

    #[test]
    fn final_displacements_returns_one_entry_per_walk() {
        let mut source = RandomSource::seeded(5);

        let batch = final_displacements(50, 200, &mut source).unwrap();

        assert_eq!(batch.len(), 200);
    }

    #[test]
    fn displacement_components_are_bounded_with_matching_parity() {
        let num_steps = 7_i64;
        let mut source = RandomSource::seeded(13);

        let batch = final_displacements(7, 500, &mut source).unwrap();

        for displacement in batch {
            for component in [displacement.x, displacement.y] {
                assert!(component.abs() <= num_steps);
                assert_eq!((component - num_steps) % 2, 0);
            }
        }
    }

    #[test]
    fn walks_are_reproducible_for_a_fixed_seed() {
        let mut a = RandomSource::seeded(99);
        let mut b = RandomSource::seeded(99);

        assert_eq!(
            trajectory(64, &mut a).unwrap(),
            trajectory(64, &mut b).unwrap()
        );
        assert_eq!(
            final_displacements(32, 16, &mut a).unwrap(),
            final_displacements(32, 16, &mut b).unwrap()
        );
    }

    #[test]
    fn different_seeds_give_different_walks() {
        let mut a = RandomSource::seeded(1);
        let mut b = RandomSource::seeded(2);

        assert_ne!(
            trajectory(256, &mut a).unwrap(),
            trajectory(256, &mut b).unwrap()
        );
    }

    #[test]
    fn radius_squared_combines_both_axes() {
        let displacement = Displacement { x: 3, y: -4 };

        assert_eq!(displacement.radius_squared(), 25.0);
    }
}
