use std::fmt::Display;
use std::ops::Neg;

use num_traits::{AsPrimitive, Float, Num};

use super::float_cmp::Tolerance;

/// Coordinate type of every shape in the crate.
///
/// Integer scalars are *exact*: [`Scalar::coord_eq`] is plain `==`.
/// Floating-point scalars are *approximate*: they implement [`ApproxScalar`]
/// and compare through their [`ApproxScalar::DEFAULT_TOLERANCE`].
pub trait Scalar:
    nalgebra::Scalar + Copy + PartialOrd + Display + Num + Neg<Output = Self> + AsPrimitive<f64>
{
    /// Equality used for coordinates and orientation tests.
    fn coord_eq(self, other: Self) -> bool;

    /// Conversion to `f64`, used by length and intersection queries.
    fn as_f64(self) -> f64 {
        self.as_()
    }
}

/// Floating-point scalar carrying its own comparison policy.
pub trait ApproxScalar: Scalar + Float {
    /// Tolerance applied by [`Scalar::coord_eq`].
    const DEFAULT_TOLERANCE: Tolerance<Self>;
}

macro_rules! impl_exact_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn coord_eq(self, other: Self) -> bool {
                self == other
            }
        }
    )*};
}

macro_rules! impl_approx_scalar {
    ($($t:ty => $eps:expr),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn coord_eq(self, other: Self) -> bool {
                Self::DEFAULT_TOLERANCE.close_enough(self, other)
            }
        }

        impl ApproxScalar for $t {
            const DEFAULT_TOLERANCE: Tolerance<Self> = Tolerance { abs: $eps, rel: $eps };
        }
    )*};
}

impl_exact_scalar!(i32, i64);
impl_approx_scalar!(f32 => 1e-7, f64 => 1e-10);

/// Common type of two scalars, the result type of mixed arithmetic.
///
/// Follows the ladder `i32 < i64 < f32 < f64`: combining an integer with a float
/// yields the float, two integers or two floats yield the wider one.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar;

    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {$(
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
            fn promote(self) -> $out {
                self as $out
            }

            #[inline]
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
            fn promote_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }
        }
    )*};
}

impl_promote! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_scalars_compare_bitwise() {
        assert!(7_i32.coord_eq(7));
        assert!(!7_i64.coord_eq(8));
    }

    #[test]
    fn approx_scalars_use_type_tolerance() {
        assert!(0.1_f64.coord_eq(0.3 - 0.2));
        assert!(!0.1_f64.coord_eq(0.100_001));
        assert!((1.1_f32 + 1.1).coord_eq(2.2));
        assert!(!1.0_f32.coord_eq(1.001));
    }

    #[test]
    fn promotion_follows_ladder() {
        let a: f32 = <i32 as Promote<f32>>::promote(3);
        let b: f64 = <f32 as Promote<f64>>::promote_rhs(0.5);
        let c: i64 = <i64 as Promote<i32>>::promote_rhs(-4);
        assert!(a.coord_eq(3.0));
        assert!(b.coord_eq(0.5));
        assert_eq!(c, -4);
    }

    fn sum_in_common_type<A: Promote<B>, B: Scalar>(a: A, b: B) -> <A as Promote<B>>::Output {
        a.promote() + A::promote_rhs(b)
    }

    #[test]
    fn promotion_through_generic_bounds() {
        assert_eq!(sum_in_common_type(2_i32, 3_i64), 5_i64);
        assert!(sum_in_common_type(1_i64, 0.5_f32).coord_eq(1.5));
        assert!(sum_in_common_type(0.25_f32, 0.5_f64).coord_eq(0.75));
    }

    #[test]
    fn as_f64_widens() {
        assert!((3_i32.as_f64() - 3.0).abs() < f64::EPSILON);
        assert!((0.5_f32.as_f64() - 0.5).abs() < f64::EPSILON);
    }
}
