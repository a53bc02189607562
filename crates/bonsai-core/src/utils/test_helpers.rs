//! Reference implementations and consistency checks shared by tests.

#![cfg(any(test, feature = "test-utils"))]

use std::ops::RangeInclusive;

use crate::range::{DoubleRange, IntRange};

/// Mixed sample with repeated values.
pub const SAMPLE_DOUBLES: [f64; 9] = [1.0, 5.0, 3.0, 2.0, 1.0, 6.0, 4.0, 5.0, 7.0];

/// Arithmetic mean of [`SAMPLE_DOUBLES`] (34 / 9).
pub const SAMPLE_MEAN: f64 = 34.0 / 9.0;

/// Textbook mean, for comparison against the library.
pub fn naive_mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Textbook two-pass sample variance.
pub fn naive_variance(data: &[f64]) -> f64 {
    let mean = naive_mean(data);
    data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

/// Number of times `value` occurs in `data`.
pub fn occurrences<T: PartialEq>(data: &[T], value: &T) -> usize {
    data.iter().filter(|x| *x == value).count()
}

/// Highest occurrence count of any element in `data`.
pub fn max_occurrences<T: PartialEq>(data: &[T]) -> usize {
    data.iter().map(|x| occurrences(data, x)).max().unwrap_or(0)
}

/// Members of `range` found by probing every integer in `window`.
pub fn brute_force_members(range: &IntRange, window: RangeInclusive<i32>) -> Vec<i32> {
    window.filter(|&k| range.is_in_range(k)).collect()
}

/// Whether every value `range.iter()` yields is a member, in strictly
/// ascending unit steps.
pub fn int_iteration_is_consistent(range: &IntRange) -> bool {
    let values: Vec<i32> = range.iter().collect();
    values.iter().all(|&v| range.is_in_range(v))
        && values.windows(2).all(|w| i64::from(w[1]) - i64::from(w[0]) == 1)
        && values.len() == range.len()
}

/// Whether every value stepping through `range` yields is a member, in
/// strictly ascending order.
pub fn step_iteration_is_consistent(range: &DoubleRange, step: f64) -> bool {
    match range.iter_step(step) {
        Ok(iter) => {
            let values: Vec<f64> = iter.collect();
            values.iter().all(|&v| range.is_in_range(v)) && values.windows(2).all(|w| w[0] < w[1])
        }
        Err(_) => false,
    }
}
