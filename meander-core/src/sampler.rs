use rand::distr::{Distribution, weighted::WeightedIndex};
use thiserror::Error;

use crate::RandomSource;

/// Tolerance used when checking that probabilities sum to 1.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-9;

/// A validated categorical distribution over a finite outcome set.
///
/// Construction checks the probability vector once; drawing afterwards
/// cannot fail. Weighted selection itself is delegated to
/// [`WeightedIndex`].
///
/// # Examples
///
/// ```
/// use meander_core::{Categorical, RandomSource};
///
/// let mut source = RandomSource::seeded(0);
/// let die = Categorical::new(vec![1, 2, 3], vec![0.5, 0.25, 0.25]).unwrap();
///
/// let rolls = die.sample(100, &mut source).unwrap();
/// assert_eq!(rolls.len(), 100);
/// assert!(rolls.iter().all(|roll| (1..=3).contains(roll)));
/// ```
#[derive(Debug, Clone)]
pub struct Categorical<T> {
    outcomes: Vec<T>,
    index: WeightedIndex<f64>,
}

/// Errors from constructing or drawing from a [`Categorical`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    #[error("at least one outcome is required")]
    NoOutcomes,

    #[error("got {outcomes} outcomes but {probabilities} probabilities")]
    LengthMismatch {
        outcomes: usize,
        probabilities: usize,
    },

    #[error("probability {value} at index {index} is not a finite non-negative number")]
    InvalidProbability { index: usize, value: f64 },

    #[error("probabilities sum to {sum}, expected 1")]
    SumNotOne { sum: f64 },

    #[error("success probability must lie strictly between 0 and 1, got {0}")]
    SuccessProbability(f64),

    #[error("sample count must be positive")]
    ZeroCount,

    #[error(transparent)]
    Weights(#[from] rand::distr::weighted::Error),
}

impl<T: Copy> Categorical<T> {
    /// Creates a distribution over `outcomes` with the given probabilities.
    ///
    /// # Errors
    ///
    /// Returns an error when `outcomes` is empty, the two vectors differ in
    /// length, any probability is negative or non-finite, or the
    /// probabilities do not sum to 1 within floating tolerance.
    pub fn new(outcomes: Vec<T>, probabilities: Vec<f64>) -> Result<Self, SampleError> {
        if outcomes.is_empty() {
            return Err(SampleError::NoOutcomes);
        }
        if outcomes.len() != probabilities.len() {
            return Err(SampleError::LengthMismatch {
                outcomes: outcomes.len(),
                probabilities: probabilities.len(),
            });
        }
        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p < 0.0)
        {
            return Err(SampleError::InvalidProbability { index, value });
        }

        let sum: f64 = probabilities.iter().sum();
        if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(SampleError::SumNotOne { sum });
        }

        let index = WeightedIndex::new(&probabilities)?;

        Ok(Self { outcomes, index })
    }

    /// Draws a single outcome.
    pub fn draw(&self, source: &mut RandomSource) -> T {
        self.outcomes[self.index.sample(source)]
    }

    /// Draws `count` independent outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::ZeroCount`] when `count` is zero.
    pub fn sample(&self, count: usize, source: &mut RandomSource) -> Result<Vec<T>, SampleError> {
        if count == 0 {
            return Err(SampleError::ZeroCount);
        }

        Ok((0..count).map(|_| self.draw(source)).collect())
    }
}

impl Categorical<i64> {
    /// The fair ±1 step distribution of the unit random walk.
    #[must_use]
    pub fn unit_steps() -> Self {
        // Known-good arguments, unwrap is safe.
        Self::new(vec![-1, 1], vec![0.5, 0.5]).unwrap()
    }
}

impl Categorical<bool> {
    /// A biased coin that lands heads (`true`) with probability `p_head`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::SuccessProbability`] unless `p_head` lies
    /// strictly between 0 and 1.
    pub fn coin(p_head: f64) -> Result<Self, SampleError> {
        if !(p_head > 0.0 && p_head < 1.0) {
            return Err(SampleError::SuccessProbability(p_head));
        }

        // Validated above, unwrap is safe.
        Ok(Self::new(vec![false, true], vec![1.0 - p_head, p_head]).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_outcomes() {
        let result = Categorical::<i64>::new(vec![], vec![]);
        assert_eq!(result.unwrap_err(), SampleError::NoOutcomes);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let result = Categorical::new(vec![-1, 1], vec![1.0]);
        assert_eq!(
            result.unwrap_err(),
            SampleError::LengthMismatch {
                outcomes: 2,
                probabilities: 1,
            }
        );
    }

    #[test]
    fn rejects_negative_probability() {
        let result = Categorical::new(vec![0, 1], vec![1.2, -0.2]);
        assert_eq!(
            result.unwrap_err(),
            SampleError::InvalidProbability {
                index: 1,
                value: -0.2,
            }
        );
    }

    #[test]
    fn rejects_probabilities_that_do_not_sum_to_one() {
        let result = Categorical::new(vec![0, 1], vec![0.5, 0.4]);
        assert!(matches!(result.unwrap_err(), SampleError::SumNotOne { .. }));
    }

    #[test]
    fn accepts_sums_within_tolerance() {
        let result = Categorical::new(vec![0, 1], vec![0.3, 0.7 + 1e-12]);
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_zero_sample_count() {
        let steps = Categorical::unit_steps();
        let mut source = RandomSource::seeded(0);

        let result = steps.sample(0, &mut source);
        assert_eq!(result.unwrap_err(), SampleError::ZeroCount);
    }

    #[test]
    fn unit_steps_draws_both_directions() {
        let steps = Categorical::unit_steps();
        let mut source = RandomSource::seeded(3);

        let draws = steps.sample(1_000, &mut source).unwrap();

        assert!(draws.iter().all(|step| *step == -1 || *step == 1));
        assert!(draws.contains(&-1));
        assert!(draws.contains(&1));
    }

    #[test]
    fn coin_rejects_degenerate_bias() {
        for p_head in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let result = Categorical::coin(p_head);
            assert!(matches!(
                result.unwrap_err(),
                SampleError::SuccessProbability(_)
            ));
        }
    }

    #[test]
    fn coin_bias_shows_in_long_run_frequency() {
        let coin = Categorical::coin(0.08).unwrap();
        let mut source = RandomSource::seeded(11);

        let flips = coin.sample(100_000, &mut source).unwrap();
        let heads = flips.iter().filter(|&&flip| flip).count();

        // Expected 8000 heads with a standard deviation of about 86.
        assert!((7_500..8_500).contains(&heads), "got {heads} heads");
    }

    #[test]
    fn sampling_is_reproducible_for_a_fixed_seed() {
        let steps = Categorical::unit_steps();

        let mut a = RandomSource::seeded(21);
        let mut b = RandomSource::seeded(21);

        assert_eq!(
            steps.sample(64, &mut a).unwrap(),
            steps.sample(64, &mut b).unwrap()
        );
    }
}
