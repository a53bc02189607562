//! Utility functions and helper types.

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helpers;
