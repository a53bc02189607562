//! Error types for aggregation and range operations.
//!
//! Every failure reported by this crate is an input-validation failure:
//! it is raised synchronously, carries no partial result and is never
//! retried internally.

use thiserror::Error;

/// Errors that can occur while aggregating a numeric sequence or
/// enumerating a range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The input sequence is empty.
    ///
    /// Raised by operations that need at least one element, such as the
    /// arithmetic, geometric and harmonic means.
    #[error("Cannot compute {operation} of an empty sequence")]
    EmptyInput {
        /// Name of the operation that rejected the input
        operation: &'static str,
    },

    /// The input sequence has fewer elements than the statistic requires.
    #[error("Too few samples for {operation}: expected >= {required}, got {actual}")]
    TooFewSamples {
        /// Name of the operation that rejected the input
        operation: &'static str,
        /// Minimum number of elements required
        required: usize,
        /// Number of elements supplied
        actual: usize,
    },

    /// Factorial was requested for a negative argument.
    #[error("Cannot compute factorial of a negative number ({value})")]
    NegativeInput {
        /// The rejected argument
        value: i64,
    },

    /// Checked factorial exceeded the range of `i64`.
    #[error("Factorial of {value} overflows a 64-bit signed integer")]
    Overflow {
        /// The argument whose factorial overflowed
        value: i64,
    },

    /// A floating-point range was enumerated with an unusable step.
    ///
    /// The step must be finite, strictly positive and large enough to move
    /// a value at the range's largest bound magnitude.
    #[error("Range step must be finite, strictly positive and not absorbed by the bounds, got {step}")]
    InvalidStep {
        /// The rejected step
        step: f64,
    },

    /// A floating-point range with an infinite or NaN bound was enumerated.
    #[error("Cannot step through a range with a non-finite bound ({bound})")]
    NonFiniteBound {
        /// The offending bound
        bound: f64,
    },
}

impl StatsError {
    /// Create an EmptyInput error for the named operation.
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create a TooFewSamples error.
    pub fn too_few_samples(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::TooFewSamples {
            operation,
            required,
            actual,
        }
    }

    /// Create a NegativeInput error.
    pub fn negative_input(value: i64) -> Self {
        Self::NegativeInput { value }
    }

    /// Create an Overflow error.
    pub fn overflow(value: i64) -> Self {
        Self::Overflow { value }
    }

    /// Create an InvalidStep error.
    pub fn invalid_step(step: f64) -> Self {
        Self::InvalidStep { step }
    }

    /// Create a NonFiniteBound error.
    pub fn non_finite_bound(bound: f64) -> Self {
        Self::NonFiniteBound { bound }
    }
}

/// Result type alias for operations that can produce a [`StatsError`].
pub type Result<T> = std::result::Result<T, StatsError>;

/// Checks that `data` holds at least `required` elements.
///
/// `required == 1` maps to [`StatsError::EmptyInput`], larger minimums to
/// [`StatsError::TooFewSamples`].
pub(crate) fn ensure_len(operation: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual >= required {
        return Ok(());
    }
    log::debug!("{operation}: rejected input of length {actual}, need {required}");
    if required == 1 {
        Err(StatsError::empty_input(operation))
    } else {
        Err(StatsError::too_few_samples(operation, required, actual))
    }
}
