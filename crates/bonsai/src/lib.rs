//! # bonsai
//!
//! Small numeric aggregation library: means, variance, standard deviation,
//! mode, factorial and intervals with inclusive/exclusive endpoints.
//!
//! ## Quick Start
//!
//! ```
//! use bonsai::prelude::*;
//!
//! let samples = [1.0, 5.0, 3.0, 2.0, 1.0, 6.0, 4.0, 5.0, 7.0];
//! let mean = arithmetic_mean(&samples)?;
//! assert!(are_similar(mean, 34.0 / 9.0, 1e-15));
//! assert_eq!(samples.mode()?, 1.0);
//!
//! let digits = IntRange::new(0, 10);
//! assert_eq!(digits.iter().sum::<i32>(), 45);
//! # Ok::<(), bonsai::StatsError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for ranges and [`OverflowPolicy`](stats::OverflowPolicy)

// Re-export all public items from the core crate
pub use bonsai_core::*;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bonsai_core::prelude::*;
}
