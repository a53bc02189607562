//! Core numeric traits, aggregation functions and interval types.
//!
//! This crate provides small, pure building blocks for summarizing
//! numeric data and describing intervals. Nothing here performs I/O,
//! holds global state or spawns threads.
//!
//! # Key Concepts
//!
//! - **Aggregation**: arithmetic/geometric/harmonic means, sample variance,
//!   standard deviation, mode and factorial over borrowed slices
//! - **Numeric widths**: every function is generic over [`Numeric`], so all
//!   8/16/32/64-bit integers and both float widths are supported with no
//!   runtime dispatch
//! - **Ranges**: intervals with independently inclusive endpoints,
//!   membership tests and lazy enumeration
//!
//! # Modules
//!
//! - [`error`]: Error type for input validation failures
//! - [`numerical`]: Tolerance comparison and rounded roots
//! - [`range`]: Interval types and their iterators
//! - [`stats`]: Aggregation functions and the [`Statistics`](stats::Statistics) trait
//! - [`types`]: Numeric traits

pub mod error;
pub mod numerical;
pub mod range;
pub mod stats;
pub mod types;
pub mod utils;

// Re-export commonly used items at the crate root
pub use error::{Result, StatsError};
pub use types::{Numeric, Real};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use bonsai_core::prelude::*;
///
/// assert_eq!(arithmetic_mean(&[1, 2, 3]).unwrap(), 2.0);
/// assert!(IntRange::new(0, 5).is_in_range(4));
/// ```
pub mod prelude {
    pub use crate::error::{Result, StatsError};
    pub use crate::numerical::{are_similar, nroot};
    pub use crate::range::{
        BoundedRange, BoundedRangeBuilder, DoubleRange, IntRange, IntRangeIter, Range,
        RangeBuilder, StepIter,
    };
    pub use crate::stats::{
        arithmetic_mean, factorial, factorial_with, factorials, geometric_mean, harmonic_mean,
        mode, mode_of, std_deviation, variance, OverflowPolicy, Statistics,
    };
    pub use crate::types::{Numeric, Real};
}
