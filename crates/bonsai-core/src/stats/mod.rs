//! Summary statistics over finite numeric sequences.
//!
//! Every function takes a borrowed slice and is generic over
//! [`Numeric`], so `i8` through `u64`, `isize`/`usize`, `f32` and `f64`
//! each get a monomorphized implementation. The [`Statistics`] extension
//! trait exposes the same operations as methods on slices, arrays and
//! vectors.

pub mod dispersion;
pub mod factorial;
pub mod mean;
pub mod mode;

pub use dispersion::{std_deviation, variance};
pub use factorial::{factorial, factorial_with, factorials, OverflowPolicy, MAX_EXACT_FACTORIAL};
pub use mean::{arithmetic_mean, geometric_mean, harmonic_mean};
pub use mode::{mode, mode_of, MODE_MIN_SAMPLES};

pub use crate::numerical::{are_similar, nroot};

use crate::{error::Result, types::Numeric};

/// Method-call access to the aggregation functions.
///
/// # Example
/// ```
/// use bonsai_core::stats::Statistics;
///
/// let samples = vec![2u16, 4, 4, 4, 5, 5, 7, 9];
/// assert_eq!(samples.arithmetic_mean().unwrap(), 5.0);
/// assert_eq!(samples.mode().unwrap(), 4);
/// ```
pub trait Statistics<T: Numeric> {
    /// See [`arithmetic_mean`].
    fn arithmetic_mean(&self) -> Result<T::Real>;
    /// See [`geometric_mean`].
    fn geometric_mean(&self) -> Result<T::Real>;
    /// See [`harmonic_mean`].
    fn harmonic_mean(&self) -> Result<T::Real>;
    /// See [`variance`].
    fn variance(&self) -> Result<T::Real>;
    /// See [`std_deviation`].
    fn std_deviation(&self) -> Result<T::Real>;
    /// See [`mode`].
    fn mode(&self) -> Result<T>;
    /// See [`mode_of`].
    fn mode_of(&self) -> Option<T>;
}

impl<T: Numeric> Statistics<T> for [T] {
    fn arithmetic_mean(&self) -> Result<T::Real> {
        mean::arithmetic_mean(self)
    }

    fn geometric_mean(&self) -> Result<T::Real> {
        mean::geometric_mean(self)
    }

    fn harmonic_mean(&self) -> Result<T::Real> {
        mean::harmonic_mean(self)
    }

    fn variance(&self) -> Result<T::Real> {
        dispersion::variance(self)
    }

    fn std_deviation(&self) -> Result<T::Real> {
        dispersion::std_deviation(self)
    }

    fn mode(&self) -> Result<T> {
        mode::mode(self)
    }

    fn mode_of(&self) -> Option<T> {
        mode::mode_of(self)
    }
}
