//! One-dimensional intervals with configurable endpoint inclusivity.
//!
//! - [`Range`]: generic over any `PartialOrd + Copy` type, each bound
//!   optional.
//! - [`BoundedRange`]: both bounds required. [`IntRange`] enumerates its
//!   integers, [`DoubleRange`] steps through its values.
//!
//! Both default to the half-open shape `[lower, upper)`.

pub mod bounded;
pub mod bounds;
pub mod iter;

pub use bounded::{BoundedRange, BoundedRangeBuilder, DoubleRange, IntRange};
pub use bounds::{Range, RangeBuilder};
pub use iter::{IntRangeIter, StepIter};
