use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binned counts for a batch of scalar observations.
///
/// This is the hand-off format for an external distribution renderer:
/// counts only, with the bin boundaries alongside. Normalization, log
/// scaling, and drawing are the renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

/// Errors from [`Histogram::with_bins`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistogramError {
    #[error("at least one value is required")]
    NoValues,

    #[error("at least one bin is required")]
    ZeroBins,

    #[error("value at index {index} is not finite")]
    NonFinite { index: usize },
}

impl Histogram {
    /// Bins `values` into `bins` uniform intervals spanning their range.
    ///
    /// The final bin is closed on the right so the maximum value is
    /// counted. When all values coincide, the range widens to one unit
    /// around them.
    ///
    /// # Errors
    ///
    /// Returns an error when `values` is empty, `bins` is zero, or any
    /// value is NaN or infinite.
    pub fn with_bins(values: &[f64], bins: usize) -> Result<Self, HistogramError> {
        if values.is_empty() {
            return Err(HistogramError::NoValues);
        }
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(HistogramError::NonFinite { index });
        }

        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        for &value in values {
            low = low.min(value);
            high = high.max(value);
        }
        if low == high {
            low -= 0.5;
            high += 0.5;
        }

        let width = (high - low) / bins as f64;
        let edges = (0..=bins).map(|i| low + width * i as f64).collect();

        let mut counts = vec![0; bins];
        for &value in values {
            let bin = (((value - low) / width) as usize).min(bins - 1);
            counts[bin] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Unit-width bins covering 0 through the largest value, for integer
    /// data such as waiting times.
    ///
    /// An empty input yields a single empty bin.
    #[must_use]
    pub fn integer(values: &[u64]) -> Self {
        let bins = values.iter().max().map_or(1, |&max| max as usize + 1);
        let edges = (0..=bins).map(|i| i as f64).collect();

        let mut counts = vec![0; bins];
        for &value in values {
            counts[value as usize] += 1;
        }

        Self { edges, counts }
    }

    /// The bin boundaries; one more than the number of bins.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Observation counts per bin.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of binned observations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
