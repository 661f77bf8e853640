use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::descriptive;

/// Empirical and theoretical statistics for a waiting-time sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitingTimeSummary {
    /// Mean of the observed waiting times; NaN when none were observed.
    pub mean: f64,
    /// Population standard deviation of the observed waiting times; NaN
    /// when none were observed.
    pub std_dev: f64,
    /// Expected waiting time under the discrete (geometric) model,
    /// (1 − p) / p.
    pub geometric_mean: f64,
    /// Expected waiting time under the continuous (exponential) model,
    /// 1 / p.
    pub exponential_mean: f64,
}

impl WaitingTimeSummary {
    /// Whether the empirical fields are backed by at least one
    /// observation. When this is false, `mean` and `std_dev` hold the NaN
    /// sentinel and must not be used.
    #[must_use]
    pub fn has_samples(&self) -> bool {
        !self.mean.is_nan()
    }
}

/// Error returned when the success probability is not in (0, 1).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("success probability must lie strictly between 0 and 1, got {0}")]
pub struct ProbabilityError(pub f64);

/// Summarizes observed waiting times against the closed-form predictions
/// for success probability `p`.
///
/// An empty sequence is a valid input (fewer than two successes occurred);
/// the empirical fields then hold the NaN sentinel and
/// [`WaitingTimeSummary::has_samples`] returns false.
///
/// # Errors
///
/// Returns [`ProbabilityError`] unless `p` lies strictly between 0 and 1.
pub fn waiting_time_summary(
    waiting_times: &[u64],
    p: f64,
) -> Result<WaitingTimeSummary, ProbabilityError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ProbabilityError(p));
    }

    let values: Vec<f64> = waiting_times.iter().map(|&wait| wait as f64).collect();

    Ok(WaitingTimeSummary {
        mean: descriptive::mean(&values),
        std_dev: descriptive::std_dev(&values),
        geometric_mean: (1.0 - p) / p,
        exponential_mean: 1.0 / p,
    })
}
