//! Interval with both endpoints present, plus its integer and float
//! enumerations.

use std::fmt;

use super::bounds::{above_lower, below_upper};
use super::iter::{IntRangeIter, StepIter};
use crate::error::{Result, StatsError};

/// Closed-over-endpoints interval: both bounds are always present.
///
/// Same membership rules and defaults as [`Range`](super::Range). The
/// [`IntRange`] and [`DoubleRange`] specializations add enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedRange<T> {
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

/// 32-bit integer range.
pub type IntRange = BoundedRange<i32>;

/// Double-precision float range.
pub type DoubleRange = BoundedRange<f64>;

impl<T: PartialOrd + Copy> BoundedRange<T> {
    /// Start building a range over `lower..upper`, lower inclusive and
    /// upper exclusive unless changed.
    pub fn builder(lower: T, upper: T) -> BoundedRangeBuilder<T> {
        BoundedRangeBuilder {
            lower,
            upper,
            lower_inclusive: true,
            upper_inclusive: false,
        }
    }

    /// Half-open range `[lower, upper)`.
    pub fn new(lower: T, upper: T) -> Self {
        Self::builder(lower, upper).build()
    }

    /// Closed range `[lower, upper]`.
    pub fn closed(lower: T, upper: T) -> Self {
        Self::builder(lower, upper).upper_inclusive(true).build()
    }

    /// Lower bound.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Replace the lower bound.
    pub fn set_lower(&mut self, lower: T) {
        self.lower = lower;
    }

    /// Replace the upper bound.
    pub fn set_upper(&mut self, upper: T) {
        self.upper = upper;
    }

    /// Whether the lower bound itself is a member.
    pub fn is_lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    /// Whether the upper bound itself is a member.
    pub fn is_upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    /// Set whether the lower bound itself is a member.
    pub fn set_lower_inclusive(&mut self, inclusive: bool) {
        self.lower_inclusive = inclusive;
    }

    /// Set whether the upper bound itself is a member.
    pub fn set_upper_inclusive(&mut self, inclusive: bool) {
        self.upper_inclusive = inclusive;
    }

    /// Tests membership under both bound constraints.
    pub fn is_in_range(&self, x: T) -> bool {
        above_lower(&x, &self.lower, self.lower_inclusive)
            && below_upper(&x, &self.upper, self.upper_inclusive)
    }
}

impl BoundedRange<i32> {
    /// First and last members, widened so `i32::MIN`/`i32::MAX` endpoints
    /// cannot overflow. `start > end` means empty.
    fn effective_bounds(&self) -> (i64, i64) {
        let start = i64::from(self.lower) + i64::from(!self.lower_inclusive);
        let end = i64::from(self.upper) - i64::from(!self.upper_inclusive);
        (start, end)
    }

    /// Ascending iterator over exactly the integers `k` with
    /// `is_in_range(k)`. Each call starts over.
    ///
    /// # Example
    /// ```
    /// use bonsai_core::range::IntRange;
    ///
    /// let half_open = IntRange::new(0, 5);
    /// assert_eq!(half_open.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    ///
    /// let closed = IntRange::closed(1, 3);
    /// assert_eq!(closed.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> IntRangeIter {
        let (start, end) = self.effective_bounds();
        log::trace!("iterating {self}: {start}..={end}");
        IntRangeIter::new(start, end)
    }

    /// Number of integers in the range.
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    /// Whether no integer is in the range.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `consumer` with every member in ascending order.
    pub fn for_each<F: FnMut(i32)>(&self, consumer: F) {
        self.iter().for_each(consumer);
    }
}

impl<'a> IntoIterator for &'a BoundedRange<i32> {
    type Item = i32;
    type IntoIter = IntRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BoundedRange<f64> {
    /// Lazy iterator from the effective lower bound, advancing by `step`.
    ///
    /// The first candidate is `lower` (or `lower + step` when the lower
    /// bound is exclusive). Candidates are `start + k·step` up to the
    /// effective upper bound (`upper`, or `upper - step` when exclusive).
    /// A candidate that rounds outside the range, or onto a value already
    /// emitted, is skipped. Because of rounding the last value may or may
    /// not equal the nominal upper bound. Each call starts over.
    ///
    /// # Errors
    /// - [`StatsError::InvalidStep`] when `step` is not finite and strictly
    ///   positive, or is too small to change a value at the largest bound
    ///   magnitude.
    /// - [`StatsError::NonFiniteBound`] when either bound is infinite or NaN.
    ///
    /// # Example
    /// ```
    /// use bonsai_core::range::DoubleRange;
    ///
    /// let r = DoubleRange::closed(0.0, 1.0);
    /// let values: Vec<f64> = r.iter_step(0.25).unwrap().collect();
    /// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn iter_step(&self, step: f64) -> Result<StepIter> {
        if !(step.is_finite() && step > 0.0) {
            log::debug!("iter_step: rejected step {step}");
            return Err(StatsError::invalid_step(step));
        }
        if let Some(bound) = [self.lower, self.upper].into_iter().find(|b| !b.is_finite()) {
            log::debug!("iter_step: rejected {self} with non-finite bound {bound}");
            return Err(StatsError::non_finite_bound(bound));
        }
        let magnitude = self.lower.abs().max(self.upper.abs());
        if magnitude + step == magnitude {
            log::debug!("iter_step: step {step} is absorbed at magnitude {magnitude}");
            return Err(StatsError::invalid_step(step));
        }
        let start = if self.lower_inclusive {
            self.lower
        } else {
            self.lower + step
        };
        let end = if self.upper_inclusive {
            self.upper
        } else {
            self.upper - step
        };
        log::trace!("iterating {self}: from {start} to {end} by {step}");
        Ok(StepIter::new(*self, start, end, step))
    }

    /// Calls `consumer` with every value produced by [`iter_step`](Self::iter_step).
    ///
    /// # Errors
    /// Same as [`iter_step`](Self::iter_step).
    pub fn for_each<F: FnMut(f64)>(&self, consumer: F, step: f64) -> Result<()> {
        self.iter_step(step)?.for_each(consumer);
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for BoundedRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.lower_inclusive { '[' } else { '(' };
        let close = if self.upper_inclusive { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.lower, self.upper)
    }
}

/// Builder for [`BoundedRange`].
#[derive(Debug, Clone, Copy)]
pub struct BoundedRangeBuilder<T> {
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl<T: PartialOrd + Copy> BoundedRangeBuilder<T> {
    /// Set lower-bound inclusivity (default `true`).
    pub fn lower_inclusive(mut self, inclusive: bool) -> Self {
        self.lower_inclusive = inclusive;
        self
    }

    /// Set upper-bound inclusivity (default `false`).
    pub fn upper_inclusive(mut self, inclusive: bool) -> Self {
        self.upper_inclusive = inclusive;
        self
    }

    /// Build the range.
    pub fn build(self) -> BoundedRange<T> {
        BoundedRange {
            lower: self.lower,
            upper: self.upper,
            lower_inclusive: self.lower_inclusive,
            upper_inclusive: self.upper_inclusive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_int_range_half_open() {
        let r = IntRange::new(0, 5);
        assert!(r.is_in_range(0));
        assert!(r.is_in_range(4));
        assert!(!r.is_in_range(5));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(r.len(), 5);
    }

    #[test]
    fn test_int_range_closed() {
        let r = IntRange::closed(1, 3);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_int_range_open() {
        let r = IntRange::builder(1, 5).lower_inclusive(false).build();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_int_range_empty_and_single() {
        assert!(IntRange::new(3, 3).is_empty());
        assert!(IntRange::builder(3, 4).lower_inclusive(false).build().is_empty());
        assert!(IntRange::closed(5, 1).is_empty());
        assert_eq!(IntRange::closed(3, 3).iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(IntRange::new(3, 4).iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_int_range_extreme_bounds() {
        let top = IntRange::closed(i32::MAX - 1, i32::MAX);
        assert_eq!(top.iter().collect::<Vec<_>>(), vec![i32::MAX - 1, i32::MAX]);

        let bottom = IntRange::builder(i32::MIN, i32::MIN + 2)
            .lower_inclusive(false)
            .upper_inclusive(true)
            .build();
        assert_eq!(bottom.iter().collect::<Vec<_>>(), vec![i32::MIN + 1, i32::MIN + 2]);

        let nothing = IntRange::builder(i32::MAX, i32::MAX)
            .lower_inclusive(false)
            .build();
        assert!(nothing.is_empty());

        assert_eq!(IntRange::closed(i32::MIN, i32::MIN + 9).len(), 10);
    }

    #[test]
    fn test_int_range_for_each_and_into_iter() {
        let r = IntRange::closed(-2, 2);
        let mut seen = Vec::new();
        r.for_each(|x| seen.push(x));
        assert_eq!(seen, vec![-2, -1, 0, 1, 2]);

        let mut total = 0;
        for x in &r {
            total += x;
        }
        assert_eq!(total, 0);
    }

    #[test]
    fn test_int_range_is_restartable() {
        let r = IntRange::new(0, 3);
        let first: Vec<i32> = r.iter().collect();
        let second: Vec<i32> = r.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_int_range_iteration_agrees_with_membership() {
        for (lower_inclusive, upper_inclusive) in
            [(true, true), (true, false), (false, true), (false, false)]
        {
            let r = IntRange::builder(-3, 4)
                .lower_inclusive(lower_inclusive)
                .upper_inclusive(upper_inclusive)
                .build();
            let expected: Vec<i32> = (-10..=10).filter(|&k| r.is_in_range(k)).collect();
            assert_eq!(r.iter().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_double_range_closed() {
        let r = DoubleRange::closed(0.0, 2.0);
        let values: Vec<f64> = r.iter_step(0.5).unwrap().collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_double_range_half_open() {
        let r = DoubleRange::new(0.0, 2.0);
        let values: Vec<f64> = r.iter_step(0.5).unwrap().collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_double_range_exclusive_lower() {
        let r = DoubleRange::builder(0.0, 1.0)
            .lower_inclusive(false)
            .upper_inclusive(true)
            .build();
        let values: Vec<f64> = r.iter_step(0.25).unwrap().collect();
        assert_eq!(values, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_double_range_drift_stays_in_range() {
        let r = DoubleRange::closed(0.0, 1.0);
        let values: Vec<f64> = r.iter_step(0.1).unwrap().collect();
        assert!(values.len() == 10 || values.len() == 11);
        assert!(values.iter().all(|&v| r.is_in_range(v)));
        assert!((values[values.len() - 1] - 1.0).abs() <= 0.1 + 1e-12);
    }

    #[test]
    fn test_double_range_invalid_step() {
        let r = DoubleRange::closed(0.0, 1.0);
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                r.iter_step(step),
                Err(StatsError::InvalidStep { .. })
            ));
        }
        assert!(r.for_each(|_| {}, 0.0).is_err());
    }

    #[test]
    fn test_double_range_infinite_bounds_are_rejected() {
        let below = DoubleRange::closed(f64::NEG_INFINITY, 0.0);
        assert_eq!(
            below.iter_step(1.0).unwrap_err(),
            StatsError::non_finite_bound(f64::NEG_INFINITY)
        );
        let above = DoubleRange::new(0.0, f64::INFINITY);
        assert_eq!(
            above.iter_step(1.0).unwrap_err(),
            StatsError::non_finite_bound(f64::INFINITY)
        );
        assert!(matches!(
            DoubleRange::closed(f64::NAN, 1.0).iter_step(1.0),
            Err(StatsError::NonFiniteBound { .. })
        ));
        assert!(below.for_each(|_| {}, 1.0).is_err());

        // Membership still works for unbounded sides.
        assert!(below.is_in_range(-1e308));
    }

    #[test]
    fn test_double_range_absorbed_step_is_rejected() {
        let r = DoubleRange::closed(1e20, 2e20);
        assert_eq!(r.iter_step(1.0).unwrap_err(), StatsError::invalid_step(1.0));
        let negative = DoubleRange::closed(-1e20, 0.0);
        assert_eq!(
            negative.iter_step(1.0).unwrap_err(),
            StatsError::invalid_step(1.0)
        );
        assert!(r.iter_step(1e5).is_ok());
    }

    #[test]
    fn test_double_range_for_each() {
        let r = DoubleRange::closed(1.0, 2.0);
        let mut sum = 0.0;
        r.for_each(|x| sum += x, 0.5).unwrap();
        assert_eq!(sum, 4.5);
    }

    #[test]
    fn test_double_range_empty() {
        let inverted = DoubleRange::closed(2.0, 1.0);
        assert_eq!(inverted.iter_step(0.1).unwrap().count(), 0);
        let degenerate = DoubleRange::new(1.0, 1.0);
        assert_eq!(degenerate.iter_step(0.1).unwrap().count(), 0);
    }

    #[test]
    fn test_setters() {
        let mut r = IntRange::new(0, 5);
        r.set_lower(2);
        r.set_upper(4);
        r.set_upper_inclusive(true);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
        r.set_lower_inclusive(false);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!((r.lower(), r.upper()), (2, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(IntRange::new(0, 5).to_string(), "[0, 5)");
        assert_eq!(DoubleRange::closed(0.5, 1.0).to_string(), "[0.5, 1]");
    }
}
