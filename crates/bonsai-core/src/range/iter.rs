//! Lazy iterators produced by [`IntRange`](super::IntRange) and
//! [`DoubleRange`](super::DoubleRange).

use std::iter::FusedIterator;

use super::bounded::DoubleRange;

/// Ascending iterator over the members of an [`IntRange`](super::IntRange).
///
/// Bounds are held as `i64` so stepping past `i32::MAX` cannot overflow.
#[derive(Debug, Clone)]
pub struct IntRangeIter {
    front: i64,
    back: i64,
}

impl IntRangeIter {
    pub(crate) fn new(start: i64, end: i64) -> Self {
        Self {
            front: start,
            back: end,
        }
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.back - self.front + 1).unwrap_or(0)
    }
}

impl Iterator for IntRangeIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.front > self.back {
            return None;
        }
        let value = i32::try_from(self.front).ok()?;
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for IntRangeIter {
    fn next_back(&mut self) -> Option<i32> {
        if self.front > self.back {
            return None;
        }
        let value = i32::try_from(self.back).ok()?;
        self.back -= 1;
        Some(value)
    }
}

impl ExactSizeIterator for IntRangeIter {}

impl FusedIterator for IntRangeIter {}

/// Stepping iterator over a [`DoubleRange`].
///
/// The `k`-th candidate is `start + k·step`, computed directly rather than
/// by repeated addition. Candidates that fall outside the range or do not
/// exceed the previous value are skipped. Iteration ends at the first
/// candidate above the effective upper bound.
///
/// Bounds are finite and the step moves the largest bound, so candidates
/// pass the end after finitely many indices.
#[derive(Debug, Clone)]
pub struct StepIter {
    range: DoubleRange,
    start: f64,
    end: f64,
    step: f64,
    index: u64,
    last: Option<f64>,
    done: bool,
}

impl StepIter {
    pub(crate) fn new(range: DoubleRange, start: f64, end: f64, step: f64) -> Self {
        Self {
            range,
            start,
            end,
            step,
            index: 0,
            last: None,
            done: false,
        }
    }
}

impl Iterator for StepIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        while !self.done {
            let value = self.start + self.step * self.index as f64;
            if value > self.end {
                self.done = true;
                break;
            }
            self.index += 1;
            let advanced = self.last.is_none_or(|last| value > last);
            if advanced && self.range.is_in_range(value) {
                self.last = Some(value);
                return Some(value);
            }
        }
        None
    }
}

impl FusedIterator for StepIter {}
