//! Small floating-point helpers shared by the aggregation functions and
//! by callers writing tolerance-based assertions.

use num_traits::Float;

/// Returns `true` when `first` and `second` differ by at most `delta`.
///
/// Any NaN operand makes the comparison false.
///
/// # Example
/// ```
/// use bonsai_core::numerical::are_similar;
/// assert!(are_similar(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!are_similar(1.0, 1.1, 0.05));
/// ```
#[inline]
pub fn are_similar<F: Float>(first: F, second: F, delta: F) -> bool {
    (second - first).abs() <= delta
}

/// Rounded `n`-th root: `round(value^(1/n))`.
///
/// The result is always rounded to the nearest integer value, which is
/// the library-wide policy for [`geometric_mean`](crate::stats::geometric_mean).
#[inline]
pub fn nroot<F: Float>(value: F, n: F) -> F {
    value.powf(n.recip()).round()
}
