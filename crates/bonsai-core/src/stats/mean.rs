//! Central-tendency measures: arithmetic, geometric and harmonic means.
//!
//! Integer inputs aggregate in `f64`; float inputs aggregate in their own
//! width. Accumulation is a single left-to-right pass.

use num_traits::{Float, One};

use crate::{
    error::{ensure_len, Result},
    numerical::nroot,
    types::{Numeric, Real},
};

/// Left-to-right sum in the aggregation float.
#[inline]
pub(crate) fn sum<T: Numeric>(data: &[T]) -> T::Real {
    data.iter().map(|&x| x.to_real()).sum()
}

/// Computes the arithmetic mean `Σxᵢ / n`.
///
/// A single-element slice returns that element directly, which is
/// bit-identical to `x / 1`.
///
/// # Errors
/// [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) when `data` is empty.
///
/// # Example
/// ```
/// use bonsai_core::stats::arithmetic_mean;
/// assert_eq!(arithmetic_mean(&[1, 2, 3, 4]).unwrap(), 2.5);
/// assert_eq!(arithmetic_mean(&[1.5f32, 2.5]).unwrap(), 2.0f32);
/// ```
pub fn arithmetic_mean<T: Numeric>(data: &[T]) -> Result<T::Real> {
    ensure_len("arithmetic mean", data.len(), 1)?;
    if let [only] = data {
        return Ok(only.to_real());
    }
    Ok(sum(data) / T::Real::from_count(data.len()))
}

/// Computes the geometric mean as `round((Πxᵢ)^(1/n))`.
///
/// The product starts from the multiplicative identity. The result is
/// rounded to the nearest integer value for every input width, floats
/// included (see [`nroot`]). A negative product with an even `n` yields NaN.
///
/// # Errors
/// [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) when `data` is empty.
///
/// # Example
/// ```
/// use bonsai_core::stats::geometric_mean;
/// assert_eq!(geometric_mean(&[2.0, 8.0]).unwrap(), 4.0);
/// ```
pub fn geometric_mean<T: Numeric>(data: &[T]) -> Result<T::Real> {
    ensure_len("geometric mean", data.len(), 1)?;
    let product = data
        .iter()
        .fold(T::Real::one(), |acc, &x| acc * x.to_real());
    Ok(nroot(product, T::Real::from_count(data.len())))
}

/// Computes the harmonic mean `n / Σ(1/xᵢ)`.
///
/// Zero elements are not trapped: the reciprocal sum follows IEEE-754, so
/// the result may be `0`, `±∞` or NaN.
///
/// # Errors
/// [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) when `data` is empty.
///
/// # Example
/// ```
/// use bonsai_core::stats::harmonic_mean;
/// let h: f64 = harmonic_mean(&[1i32, 2, 4]).unwrap();
/// assert!((h - 12.0 / 7.0).abs() < 1e-12);
/// ```
pub fn harmonic_mean<T: Numeric>(data: &[T]) -> Result<T::Real> {
    ensure_len("harmonic mean", data.len(), 1)?;
    let reciprocal_sum: T::Real = data.iter().map(|&x| x.to_real().recip()).sum();
    Ok(T::Real::from_count(data.len()) / reciprocal_sum)
}
