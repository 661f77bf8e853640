use meander_components::walk::Displacement;
use thiserror::Error;

/// Error returned when asked to average an empty displacement batch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot average an empty displacement batch")]
pub struct EmptyBatchError;

/// Mean of the squared displacement magnitude, ⟨x² + y²⟩, over `batch`.
///
/// For two-dimensional unit-step walks of N steps this converges toward
/// 2·N as the batch grows.
///
/// # Errors
///
/// Returns [`EmptyBatchError`] when `batch` is empty, where the mean would
/// otherwise silently be NaN.
pub fn mean_square_displacement(batch: &[Displacement]) -> Result<f64, EmptyBatchError> {
    if batch.is_empty() {
        return Err(EmptyBatchError);
    }

    let total: f64 = batch.iter().map(Displacement::radius_squared).sum();

    Ok(total / batch.len() as f64)
}
