use thiserror::Error;

/// Errors from [`fit_proportionality`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FitError {
    #[error("both sequences must be non-empty")]
    Empty,

    #[error("got {xs} abscissa values but {ys} ordinate values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("the abscissa values are all zero, the slope is undefined")]
    ZeroDenominator,
}

/// Least-squares slope of `y = k·x` forced through the origin.
///
/// For parallel sequences xᵢ and yᵢ the slope is
/// k = Σ(xᵢ·yᵢ) / Σ(xᵢ²), the closed-form minimizer of the squared
/// residuals.
///
/// # Errors
///
/// Returns [`FitError::Empty`] or [`FitError::LengthMismatch`] when the
/// sequences are not equal-length and non-empty, and
/// [`FitError::ZeroDenominator`] when Σ(xᵢ²) is zero, where the slope
/// would otherwise silently be NaN.
pub fn fit_proportionality(xs: &[f64], ys: &[f64]) -> Result<f64, FitError> {
    if xs.is_empty() || ys.is_empty() {
        return Err(FitError::Empty);
    }
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let cross: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let denominator: f64 = xs.iter().map(|x| x * x).sum();

    if denominator == 0.0 {
        return Err(FitError::ZeroDenominator);
    }

    Ok(cross / denominator)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn recovers_an_exact_proportionality() {
        let k = fit_proportionality(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();

        assert_relative_eq!(k, 2.0);
    }

    #[test]
    fn balances_scatter_around_the_slope() {
        // Points (1, 1.5) and (1, 2.5) straddle y = 2x.
        let k = fit_proportionality(&[1.0, 1.0], &[1.5, 2.5]).unwrap();

        assert_relative_eq!(k, 2.0);
    }

    #[test]
    fn rejects_empty_sequences() {
        assert_eq!(fit_proportionality(&[], &[]).unwrap_err(), FitError::Empty);
        assert_eq!(
            fit_proportionality(&[], &[1.0]).unwrap_err(),
            FitError::Empty
        );
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert_eq!(
            fit_proportionality(&[1.0, 2.0], &[1.0]).unwrap_err(),
            FitError::LengthMismatch { xs: 2, ys: 1 }
        );
    }

    #[test]
    fn rejects_an_all_zero_abscissa() {
        assert_eq!(
            fit_proportionality(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err(),
            FitError::ZeroDenominator
        );
    }
}
