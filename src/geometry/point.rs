use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::math::{Promote, Scalar};

/// A position in the plane.
///
/// Equality is exact for integer scalars and tolerance-based for floats,
/// see [`Scalar::coord_eq`].
#[derive(Debug, Clone, Copy)]
pub struct Point<T: Scalar>(nalgebra::Point2<T>);

impl<T: Scalar> Point<T> {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self(nalgebra::Point2::new(x, y))
    }

    #[must_use]
    pub fn x(&self) -> T {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.0.y
    }

    /// Converts both coordinates to the common type of `T` and `S`.
    #[must_use]
    pub fn promote<S: Scalar>(self) -> Point<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        Point::new(
            <T as Promote<S>>::promote(self.x()),
            <T as Promote<S>>::promote(self.y()),
        )
    }

    /// Multiplies both coordinates by `s`, in the common type of `T` and `S`.
    #[must_use]
    pub fn scale<S: Scalar>(self, s: S) -> Point<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        let s = <T as Promote<S>>::promote_rhs(s);
        let p = self.promote::<S>();
        Point::new(p.x() * s, p.y() * s)
    }

    /// Both coordinates converted to `f64`.
    #[must_use]
    pub fn to_f64(self) -> Point<f64> {
        Point::new(self.x().as_f64(), self.y().as_f64())
    }
}

impl<T: Scalar> Default for Point<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Scalar> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x().coord_eq(other.x()) && self.y().coord_eq(other.y())
    }
}

impl<T: Scalar> From<nalgebra::Point2<T>> for Point<T> {
    fn from(p: nalgebra::Point2<T>) -> Self {
        Self(p)
    }
}

impl<T: Scalar> From<Point<T>> for nalgebra::Point2<T> {
    fn from(p: Point<T>) -> Self {
        p.0
    }
}

impl<T: Scalar> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> Neg for Point<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl<T, S> Add<Point<S>> for Point<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Point<<T as Promote<S>>::Output>;

    fn add(self, rhs: Point<S>) -> Self::Output {
        let lhs = self.promote::<S>();
        Point::new(
            lhs.x() + <T as Promote<S>>::promote_rhs(rhs.x()),
            lhs.y() + <T as Promote<S>>::promote_rhs(rhs.y()),
        )
    }
}

impl<T, S> Sub<Point<S>> for Point<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Point<<T as Promote<S>>::Output>;

    fn sub(self, rhs: Point<S>) -> Self::Output {
        self + (-rhs)
    }
}

impl<T, S> Mul<S> for Point<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Point<<T as Promote<S>>::Output>;

    fn mul(self, s: S) -> Self::Output {
        self.scale(s)
    }
}

macro_rules! impl_scalar_mul_point {
    ($($s:ty),*) => {$(
        impl<T> Mul<Point<T>> for $s
        where
            T: Promote<$s>,
        {
            type Output = Point<<T as Promote<$s>>::Output>;

            fn mul(self, p: Point<T>) -> Self::Output {
                p.scale(self)
            }
        }
    )*};
}

impl_scalar_mul_point!(i32, i64, f32, f64);

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl<T> AbsDiffEq for Point<T>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x().abs_diff_eq(&other.x(), epsilon) && self.y().abs_diff_eq(&other.y(), epsilon)
    }
}

impl<T> RelativeEq for Point<T>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x().relative_eq(&other.x(), epsilon, max_relative)
            && self.y().relative_eq(&other.y(), epsilon, max_relative)
    }
}
