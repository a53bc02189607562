//! Factorial in 64-bit signed arithmetic with a selectable overflow policy.

use crate::error::{ensure_len, Result, StatsError};

/// Largest argument whose factorial fits in an `i64`.
pub const MAX_EXACT_FACTORIAL: i64 = 20;

/// Smallest argument whose wrapped factorial is zero (`v₂(66!) = 64`).
const WRAPPING_ZERO_FROM: i64 = 66;

/// What [`factorial_with`] does when the product leaves the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Fail with [`StatsError::Overflow`].
    #[default]
    Checked,
    /// Two's-complement wraparound, the raw unguarded 64-bit multiplication.
    Wrapping,
    /// Clamp at `i64::MAX`.
    Saturating,
}

/// Computes `n!` with checked arithmetic.
///
/// # Errors
/// - [`StatsError::NegativeInput`] when `n < 0`.
/// - [`StatsError::Overflow`] when `n > 20`.
///
/// # Example
/// ```
/// use bonsai_core::stats::factorial;
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<i64> {
    factorial_with(n, OverflowPolicy::Checked)
}

/// Computes `n!` under the given overflow policy.
///
/// # Errors
/// - [`StatsError::NegativeInput`] when `n < 0`, whatever the policy.
/// - [`StatsError::Overflow`] when the policy is [`OverflowPolicy::Checked`]
///   and `n!` does not fit in an `i64`.
pub fn factorial_with(n: i64, policy: OverflowPolicy) -> Result<i64> {
    if n < 0 {
        log::debug!("factorial: rejected negative argument {n}");
        return Err(StatsError::negative_input(n));
    }
    match policy {
        OverflowPolicy::Checked => (1..=n)
            .try_fold(1i64, i64::checked_mul)
            .ok_or_else(|| {
                log::debug!("factorial: {n}! overflows i64");
                StatsError::overflow(n)
            }),
        OverflowPolicy::Wrapping if n >= WRAPPING_ZERO_FROM => Ok(0),
        OverflowPolicy::Wrapping => Ok((1..=n).fold(1i64, i64::wrapping_mul)),
        OverflowPolicy::Saturating if n > MAX_EXACT_FACTORIAL => Ok(i64::MAX),
        OverflowPolicy::Saturating => Ok((1..=n).fold(1i64, i64::saturating_mul)),
    }
}

/// Computes the checked factorial of every element.
///
/// # Errors
/// - [`StatsError::EmptyInput`] when `numbers` is empty.
/// - The first error raised by [`factorial`]; no partial result is returned.
pub fn factorials(numbers: &[i64]) -> Result<Vec<i64>> {
    ensure_len("factorial", numbers.len(), 1)?;
    numbers.iter().map(|&n| factorial(n)).collect()
}
