//! Time primitives for active values
//!
//! Kairos does not fix a unit system. Any type can serve as a time line as
//! long as it forms an ordered affine space:
//! - `Time` is a point: `Time - Time = Duration`, `Time + Duration = Time`
//! - `Duration` is a difference: an additive group scalable by `f64`
//!
//! `f32` and `f64` implement both traits and are the reference
//! representation.

use std::fmt::Debug;
use std::ops::{Neg, Sub};

use num_traits::{NumCast, ToPrimitive, Zero};

/// A difference between two points in time.
pub trait Duration:
    Copy + PartialOrd + Debug + Send + Sync + 'static + Zero + Sub<Output = Self> + Neg<Output = Self> + NumCast
{
    /// Multiply by a scalar
    fn scale(self, factor: f64) -> Self;

    /// Convert from any numeric representation
    #[inline]
    fn from_numeric<N: ToPrimitive>(n: N) -> Option<Self> {
        <Self as NumCast>::from(n)
    }

    /// Convert to any numeric representation
    #[inline]
    fn to_numeric<N: NumCast>(self) -> Option<N> {
        N::from(self)
    }
}

/// A point on a totally ordered time line.
pub trait Time: Copy + PartialOrd + Debug + Send + Sync + 'static + NumCast {
    /// The difference type of this time line
    type Duration: Duration;

    /// Reference instant, used where the absolute placement is immaterial
    fn origin() -> Self;

    /// `self + by`
    fn offset(self, by: Self::Duration) -> Self;

    /// `self - earlier`
    fn since(self, earlier: Self) -> Self::Duration;

    /// Convert from any numeric representation
    #[inline]
    fn from_numeric<N: ToPrimitive>(n: N) -> Option<Self> {
        <Self as NumCast>::from(n)
    }

    /// Convert to any numeric representation
    #[inline]
    fn to_numeric<N: NumCast>(self) -> Option<N> {
        N::from(self)
    }
}

macro_rules! float_time {
    ($($t:ty),*) => {
        $(
            impl Duration for $t {
                #[inline]
                fn scale(self, factor: f64) -> Self {
                    self * factor as $t
                }
            }

            impl Time for $t {
                type Duration = $t;

                #[inline]
                fn origin() -> Self {
                    0.0
                }

                #[inline]
                fn offset(self, by: $t) -> Self {
                    self + by
                }

                #[inline]
                fn since(self, earlier: Self) -> $t {
                    self - earlier
                }
            }
        )*
    };
}

float_time!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affine_arithmetic() {
        let t = 2.5f64;
        let d = 4.0f64.since(t);
        assert_eq!(d, 1.5);
        assert_eq!(t.offset(d), 4.0);
        assert_eq!(t.offset(-d), 1.0);
        assert_eq!(f64::origin(), 0.0);
    }

    #[test]
    fn test_duration_scale() {
        assert_eq!(3.0f64.scale(2.0), 6.0);
        assert_eq!(3.0f32.scale(0.5), 1.5);
        assert_eq!(f64::zero().scale(10.0), 0.0);
    }

    #[test]
    fn test_numeric_conversion() {
        assert_eq!(<f64 as Time>::from_numeric(7u8), Some(7.0));
        assert_eq!(<f32 as Duration>::from_numeric(-3i64), Some(-3.0));
        assert_eq!(Time::to_numeric::<i32>(9.0f64), Some(9));
        assert_eq!(Duration::to_numeric::<u8>(-1.0f64), None);
    }
}
