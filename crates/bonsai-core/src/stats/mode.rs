//! Most-frequent-value selection.
//!
//! Ties are broken deterministically: among values sharing the highest
//! frequency, the one that appears first in the input wins. A later value
//! replaces the current winner only when its count is strictly greater.

use std::collections::HashMap;

use crate::{
    error::{ensure_len, Result, StatsError},
    types::Numeric,
};

/// Minimum number of samples accepted by [`mode`].
pub const MODE_MIN_SAMPLES: usize = 3;

/// Returns the most frequent value of `data`, or `None` when it is empty.
///
/// Unlike [`mode`] this accepts sequences of any length. Floats are
/// compared by bit pattern with `-0.0 == 0.0` and all NaNs equal; the
/// returned value is the first-seen representative.
///
/// # Example
/// ```
/// use bonsai_core::stats::mode_of;
/// assert_eq!(mode_of(&[3, 1, 1, 3]), Some(3));
/// assert_eq!(mode_of::<i32>(&[]), None);
/// ```
pub fn mode_of<T: Numeric>(data: &[T]) -> Option<T> {
    let mut counts: HashMap<T::Key, usize> = HashMap::with_capacity(data.len());
    for &x in data {
        *counts.entry(x.key()).or_insert(0) += 1;
    }

    // Walking the input in order visits candidates in first-seen order.
    let mut best: Option<(T, usize)> = None;
    for &x in data {
        let count = counts.get(&x.key()).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((x, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Returns the most frequent value of `data`.
///
/// # Errors
/// [`StatsError::TooFewSamples`] when `data.len() < 3`.
///
/// # Example
/// ```
/// use bonsai_core::stats::mode;
/// assert_eq!(mode(&[1, 1, 2, 3]).unwrap(), 1);
/// assert!(mode(&[1, 1]).is_err());
/// ```
pub fn mode<T: Numeric>(data: &[T]) -> Result<T> {
    ensure_len("mode", data.len(), MODE_MIN_SAMPLES)?;
    mode_of(data).ok_or_else(|| StatsError::empty_input("mode"))
}
