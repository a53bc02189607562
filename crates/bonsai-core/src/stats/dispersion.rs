//! Dispersion measures: sample variance and standard deviation.

use num_traits::{Float, One};

use super::mean::sum;
use crate::{
    error::{ensure_len, Result},
    types::{Numeric, Real},
};

/// Computes the sample variance `Σ(xᵢ − x̄)² / (n − 1)`.
///
/// Two-pass algorithm: the mean is computed once, then the squared
/// deviations are accumulated against it. The single-pass
/// `E[X²] − E[X]²` shortcut is not used.
///
/// # Errors
/// [`StatsError::TooFewSamples`](crate::StatsError::TooFewSamples) when
/// `data.len() < 2`.
///
/// # Example
/// ```
/// use bonsai_core::stats::variance;
/// let v = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-12);
/// ```
pub fn variance<T: Numeric>(data: &[T]) -> Result<T::Real> {
    ensure_len("variance", data.len(), 2)?;
    let n = T::Real::from_count(data.len());
    let mean = sum(data) / n;
    let gaps: T::Real = data
        .iter()
        .map(|&x| {
            let d = x.to_real() - mean;
            d * d
        })
        .sum();
    Ok(gaps / (n - T::Real::one()))
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// Same as [`variance`].
pub fn std_deviation<T: Numeric>(data: &[T]) -> Result<T::Real> {
    variance(data).map(Float::sqrt)
}
