//! Biased coin flips and the waiting times between successes.
//!
//! A flip sequence is a run of independent biased coin tosses;
//! [`waiting_times`] reduces one to the number of tails strictly between
//! each adjacent pair of heads.

use meander_core::{Categorical, RandomSource, SampleError};
use thiserror::Error;

/// Errors from generating a flip sequence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoinError {
    #[error("at least one flip is required")]
    NoFlips,

    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Flips a biased coin `n_flips` times; `true` is heads.
///
/// # Errors
///
/// Returns [`CoinError::NoFlips`] when `n_flips` is zero, and a sampling
/// error unless `p_head` lies strictly between 0 and 1.
pub fn flip_sequence(
    n_flips: usize,
    p_head: f64,
    source: &mut RandomSource,
) -> Result<Vec<bool>, CoinError> {
    if n_flips == 0 {
        return Err(CoinError::NoFlips);
    }

    let coin = Categorical::coin(p_head)?;
    Ok(coin.sample(n_flips, source)?)
}

/// Counts the tails strictly between each adjacent pair of heads.
///
/// The result has one entry fewer than the number of heads, in order of
/// occurrence. Fewer than two heads yield an empty sequence, which is a
/// valid outcome rather than an error. A single linear scan over the flips,
/// so million-flip sequences are fine.
#[must_use]
pub fn waiting_times(flips: &[bool]) -> Vec<u64> {
    let mut waits = Vec::new();
    let mut previous_head: Option<usize> = None;

    for (position, &flip) in flips.iter().enumerate() {
        if flip {
            if let Some(previous) = previous_head {
                waits.push((position - previous - 1) as u64);
            }
            previous_head = Some(position);
        }
    }

    waits
}
