//! Interval with optional endpoints.

use std::fmt;

use super::bounded::BoundedRange;

/// `true` when `x` is on the admitted side of a lower bound.
#[inline]
pub(crate) fn above_lower<T: PartialOrd>(x: &T, lower: &T, inclusive: bool) -> bool {
    if inclusive {
        x >= lower
    } else {
        x > lower
    }
}

/// `true` when `x` is on the admitted side of an upper bound.
#[inline]
pub(crate) fn below_upper<T: PartialOrd>(x: &T, upper: &T, inclusive: bool) -> bool {
    if inclusive {
        x <= upper
    } else {
        x < upper
    }
}

/// One-dimensional interval with independently optional, independently
/// inclusive endpoints.
///
/// An absent bound means the range is unbounded on that side. The default
/// shape is half-open, `[lower, upper)`. `lower <= upper` is expected but
/// not enforced; an inverted range simply contains nothing.
///
/// `Range` is a plain `Copy` value with no interior mutability. Share it
/// across threads by copying it, or guard a shared instance with a lock of
/// your own.
///
/// # Example
/// ```
/// use bonsai_core::range::Range;
///
/// let r = Range::builder().lower(0).upper(5).build();
/// assert!(r.is_in_range(0));
/// assert!(!r.is_in_range(5));
///
/// let at_least_two = Range::builder().lower(2.0).lower_inclusive(false).build();
/// assert!(at_least_two.is_in_range(1e300));
/// assert!(!at_least_two.is_in_range(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    lower: Option<T>,
    upper: Option<T>,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl<T: PartialOrd + Copy> Range<T> {
    /// Start building a range. Both bounds start absent, lower inclusive,
    /// upper exclusive.
    pub fn builder() -> RangeBuilder<T> {
        RangeBuilder::default()
    }

    /// Half-open range `[lower, upper)`.
    pub fn new(lower: T, upper: T) -> Self {
        Self::builder().lower(lower).upper(upper).build()
    }

    /// Range containing every comparable value.
    pub fn unbounded() -> Self {
        Self::builder().build()
    }

    /// Lower bound, `None` when unbounded below.
    pub fn lower(&self) -> Option<T> {
        self.lower
    }

    /// Upper bound, `None` when unbounded above.
    pub fn upper(&self) -> Option<T> {
        self.upper
    }

    /// Replace the lower bound.
    pub fn set_lower(&mut self, lower: Option<T>) {
        self.lower = lower;
    }

    /// Replace the upper bound.
    pub fn set_upper(&mut self, upper: Option<T>) {
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
    ///
    /// Absent bounds are always satisfied. Values that do not compare
    /// (NaN) fail every present bound.
    pub fn is_in_range(&self, x: T) -> bool {
        self.lower
            .as_ref()
            .is_none_or(|lower| above_lower(&x, lower, self.lower_inclusive))
            && self
                .upper
                .as_ref()
                .is_none_or(|upper| below_upper(&x, upper, self.upper_inclusive))
    }

    /// Converts to a [`BoundedRange`], or `None` when either bound is absent.
    pub fn to_bounded(&self) -> Option<BoundedRange<T>> {
        let (lower, upper) = (self.lower?, self.upper?);
        Some(
            BoundedRange::builder(lower, upper)
                .lower_inclusive(self.lower_inclusive)
                .upper_inclusive(self.upper_inclusive)
                .build(),
        )
    }
}

impl<T: PartialOrd + Copy> Default for Range<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: PartialOrd + Copy> From<BoundedRange<T>> for Range<T> {
    fn from(bounded: BoundedRange<T>) -> Self {
        Self::builder()
            .lower(bounded.lower())
            .upper(bounded.upper())
            .lower_inclusive(bounded.is_lower_inclusive())
            .upper_inclusive(bounded.is_upper_inclusive())
            .build()
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(lower) if self.lower_inclusive => write!(f, "[{lower}, ")?,
            Some(lower) => write!(f, "({lower}, ")?,
            None => write!(f, "(-∞, ")?,
        }
        match &self.upper {
            Some(upper) if self.upper_inclusive => write!(f, "{upper}]"),
            Some(upper) => write!(f, "{upper})"),
            None => write!(f, "+∞)"),
        }
    }
}

/// Builder for [`Range`].
#[derive(Debug, Clone, Copy)]
pub struct RangeBuilder<T> {
    lower: Option<T>,
    upper: Option<T>,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl<T> Default for RangeBuilder<T> {
    fn default() -> Self {
        Self {
            lower: None,
            upper: None,
            lower_inclusive: true,
            upper_inclusive: false,
        }
    }
}

impl<T: PartialOrd + Copy> RangeBuilder<T> {
    /// Set the lower bound.
    pub fn lower(mut self, lower: T) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Set the upper bound.
    pub fn upper(mut self, upper: T) -> Self {
        self.upper = Some(upper);
        self
    }

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
    pub fn build(self) -> Range<T> {
        Range {
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

    #[test]
    fn test_default_shape_is_half_open() {
        let r = Range::new(0, 5);
        assert!(r.is_lower_inclusive());
        assert!(!r.is_upper_inclusive());
        assert!(r.is_in_range(0));
        assert!(r.is_in_range(4));
        assert!(!r.is_in_range(5));
        assert!(!r.is_in_range(-1));
    }

    #[test]
    fn test_all_inclusivity_combinations() {
        let cases = [
            (true, true, [false, true, true, true, false]),
            (true, false, [false, true, true, false, false]),
            (false, true, [false, false, true, true, false]),
            (false, false, [false, false, true, false, false]),
        ];
        for (lower_inclusive, upper_inclusive, expected) in cases {
            let r = Range::builder()
                .lower(1)
                .upper(3)
                .lower_inclusive(lower_inclusive)
                .upper_inclusive(upper_inclusive)
                .build();
            let got: Vec<bool> = (0..=4).map(|x| r.is_in_range(x)).collect();
            assert_eq!(got, expected, "{r}");
        }
    }

    #[test]
    fn test_unbounded_sides() {
        assert!(Range::<i64>::unbounded().is_in_range(i64::MIN));
        assert!(Range::<i64>::default().is_in_range(i64::MAX));

        let below = Range::builder().upper(10u32).upper_inclusive(true).build();
        assert!(below.is_in_range(0));
        assert!(below.is_in_range(10));
        assert!(!below.is_in_range(11));

        let above = Range::builder().lower(-1.5).lower_inclusive(false).build();
        assert!(!above.is_in_range(-1.5));
        assert!(above.is_in_range(f64::INFINITY));
    }

    #[test]
    fn test_nan_is_never_in_a_bounded_range() {
        assert!(!Range::new(0.0, 1.0).is_in_range(f64::NAN));
        assert!(Range::<f64>::unbounded().is_in_range(f64::NAN));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let r = Range::builder().lower(5).upper(1).upper_inclusive(true).build();
        assert!((-10..10).all(|x| !r.is_in_range(x)));
    }

    #[test]
    fn test_setters() {
        let mut r = Range::new(0, 5);
        r.set_upper(Some(10));
        r.set_upper_inclusive(true);
        assert!(r.is_in_range(10));
        r.set_lower(None);
        assert!(r.is_in_range(-100));
        r.set_lower(Some(3));
        r.set_lower_inclusive(false);
        assert!(!r.is_in_range(3));
        assert_eq!(r.lower(), Some(3));
        assert_eq!(r.upper(), Some(10));
    }

    #[test]
    fn test_copies_are_independent() {
        let original = Range::new(0, 5);
        let mut copy = original;
        copy.set_upper(Some(50));
        assert_eq!(original.upper(), Some(5));
        assert_eq!(copy.upper(), Some(50));
    }

    #[test]
    fn test_to_bounded() {
        let r = Range::builder().lower(1).upper(3).upper_inclusive(true).build();
        let bounded = r.to_bounded().unwrap();
        assert_eq!(bounded.lower(), 1);
        assert_eq!(bounded.upper(), 3);
        assert!(bounded.is_upper_inclusive());
        assert_eq!(Range::from(bounded), r);

        assert!(Range::builder().lower(1).build().to_bounded().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::new(0, 5).to_string(), "[0, 5)");
        let r = Range::builder()
            .lower(1.5)
            .upper(2.5)
            .lower_inclusive(false)
            .upper_inclusive(true)
            .build();
        assert_eq!(r.to_string(), "(1.5, 2.5]");
        assert_eq!(Range::<i32>::unbounded().to_string(), "(-∞, +∞)");
    }
}
