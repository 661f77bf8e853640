/// Arithmetic mean of `values`.
///
/// Returns NaN for an empty slice; callers that cannot tolerate the
/// sentinel should check for emptiness first.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of `values` (divides by the count, not
/// the count minus one).
///
/// Returns NaN for an empty slice.
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let center = mean(values);
    let variance = values
        .iter()
        .map(|value| {
            let deviation = value - center;
            deviation * deviation
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}
