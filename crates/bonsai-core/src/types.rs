//! Numeric traits shared by the aggregation functions.
//!
//! [`Numeric`] is implemented for every primitive integer and float width.
//! Each width names the floating-point type it aggregates in through
//! [`Numeric::Real`]: integers aggregate in `f64`, `f32` stays in `f32` and
//! `f64` stays in `f64`. All functions are generic over these traits, so
//! every width gets its own monomorphized fast path.

use num_traits::{Float, One, ToPrimitive, Zero};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::Sum;

/// Floating-point type used to accumulate aggregates (`f32` or `f64`).
pub trait Real: Float + Sum + Debug + Display + Default + Send + Sync + 'static {
    /// Convert an element count.
    fn from_count(n: usize) -> Self;
}

impl Real for f32 {
    fn from_count(n: usize) -> Self {
        n as f32
    }
}

impl Real for f64 {
    fn from_count(n: usize) -> Self {
        n as f64
    }
}

/// Trait for element types accepted by the aggregation functions.
///
/// Combines ordering, the additive and multiplicative identities and a
/// lossless-as-possible conversion into the aggregation float.
pub trait Numeric:
    Copy + PartialOrd + Zero + One + ToPrimitive + Debug + Display + Send + Sync + 'static
{
    /// Floating-point type this width aggregates in.
    type Real: Real;

    /// Hashable identity used to count occurrences in [`mode`](crate::stats::mode).
    ///
    /// Integers use themselves. Floats use their bit pattern, with `-0.0`
    /// folded onto `0.0` and every NaN folded onto the canonical NaN.
    type Key: Hash + Eq + Copy;

    /// Convert into the aggregation float.
    fn to_real(self) -> Self::Real;

    /// Hashable identity of this value.
    fn key(self) -> Self::Key;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Real = f64;
                type Key = $t;

                #[inline]
                fn to_real(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn key(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_numeric_float {
    ($($t:ty => $bits:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Real = $t;
                type Key = $bits;

                #[inline]
                fn to_real(self) -> $t {
                    self
                }

                #[inline]
                fn key(self) -> $bits {
                    if self == 0.0 {
                        0
                    } else if self.is_nan() {
                        <$t>::NAN.to_bits()
                    } else {
                        self.to_bits()
                    }
                }
            }
        )*
    };
}

impl_numeric_float!(f32 => u32, f64 => u64);
