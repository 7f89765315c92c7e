use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::math::{Promote, Scalar};

use super::Point;

/// A displacement from the origin, stored by its end point.
///
/// Algebraically identical to [`Point`]; kept as a separate type because a
/// vector has direction and magnitude but no absolute position.
#[derive(Debug, Clone, Copy)]
pub struct Vector<T: Scalar>(nalgebra::Vector2<T>);

impl<T: Scalar> Vector<T> {
    /// Creates the vector from the origin to `(x, y)`.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self(nalgebra::Vector2::new(x, y))
    }

    #[must_use]
    pub fn x(&self) -> T {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.0.y
    }

    /// The point this vector reaches when drawn from the origin.
    #[must_use]
    pub fn end(&self) -> Point<T> {
        Point::new(self.x(), self.y())
    }

    /// z-component of the cross product of `self` and `other` seen as 3D vectors.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> T {
        self.x() * other.y() - self.y() * other.x()
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Euclidean norm, always computed in `f64`.
    #[must_use]
    pub fn euclidean_norm(&self) -> f64 {
        self.to_nalgebra_f64().norm()
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector has no direction and yields NaN components.
    #[must_use]
    pub fn normalized(&self) -> Vector<f64> {
        let v = self.to_nalgebra_f64();
        Vector::from(v / v.norm())
    }

    /// Converts both components to the common type of `T` and `S`.
    #[must_use]
    pub fn promote<S: Scalar>(self) -> Vector<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        Vector::from(self.end().promote::<S>())
    }

    /// Multiplies both components by `s`, in the common type of `T` and `S`.
    #[must_use]
    pub fn scale<S: Scalar>(self, s: S) -> Vector<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        Vector::from(self.end().scale(s))
    }

    fn to_nalgebra_f64(self) -> nalgebra::Vector2<f64> {
        nalgebra::Vector2::new(self.x().as_f64(), self.y().as_f64())
    }
}

/// Cross product of two vectors of possibly different scalar types.
#[must_use]
pub fn cross<T, S>(a: &Vector<T>, b: &Vector<S>) -> <T as Promote<S>>::Output
where
    T: Promote<S>,
    S: Scalar,
{
    a.promote::<S>()
        .cross(&Vector::new(T::promote_rhs(b.x()), T::promote_rhs(b.y())))
}

/// Dot product of two vectors of possibly different scalar types.
#[must_use]
pub fn dot<T, S>(a: &Vector<T>, b: &Vector<S>) -> <T as Promote<S>>::Output
where
    T: Promote<S>,
    S: Scalar,
{
    a.promote::<S>()
        .dot(&Vector::new(T::promote_rhs(b.x()), T::promote_rhs(b.y())))
}

impl<T: Scalar> Default for Vector<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.end() == other.end()
    }
}

impl<T: Scalar> From<Point<T>> for Vector<T> {
    fn from(p: Point<T>) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl<T: Scalar> From<nalgebra::Vector2<T>> for Vector<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self(v)
    }
}

impl<T: Scalar> From<Vector<T>> for nalgebra::Vector2<T> {
    fn from(v: Vector<T>) -> Self {
        v.0
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl<T, S> Add<Vector<S>> for Vector<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Vector<<T as Promote<S>>::Output>;

    fn add(self, rhs: Vector<S>) -> Self::Output {
        Vector::from(self.end() + rhs.end())
    }
}

impl<T, S> Sub<Vector<S>> for Vector<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Vector<<T as Promote<S>>::Output>;

    fn sub(self, rhs: Vector<S>) -> Self::Output {
        Vector::from(self.end() - rhs.end())
    }
}

impl<T, S> Mul<S> for Vector<T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Vector<<T as Promote<S>>::Output>;

    fn mul(self, s: S) -> Self::Output {
        self.scale(s)
    }
}

macro_rules! impl_scalar_mul_vector {
    ($($s:ty),*) => {$(
        impl<T> Mul<Vector<T>> for $s
        where
            T: Promote<$s>,
        {
            type Output = Vector<<T as Promote<$s>>::Output>;

            fn mul(self, v: Vector<T>) -> Self::Output {
                v.scale(self)
            }
        }
    )*};
}

impl_scalar_mul_vector!(i32, i64, f32, f64);

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(start=(0,0), end={})", self.end())
    }
}

impl<T> AbsDiffEq for Vector<T>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.end().abs_diff_eq(&other.end(), epsilon)
    }
}

impl<T> RelativeEq for Vector<T>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.end().relative_eq(&other.end(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn construction() {
        assert_eq!(Vector::new(5.3, 2.9).end(), Point::new(5.3, 2.9));
        assert_eq!(Vector::new(3_i32, 2).end(), Point::new(3, 2));

        let far = Point::new(1_000_000_i64, 2_147_483_648);
        assert_eq!(Vector::from(far).end(), far);
    }

    #[test]
    fn dot_product() {
        let v1 = Vector::new(-6_i32, 8);
        let v2 = Vector::new(5_i32, 12);
        assert_eq!(v1.dot(&v2), 66);

        let v3 = Vector::new(-7_i32, 48);
        let v4 = Vector::new(0.3_f64, 0.04);
        assert_relative_eq!(dot(&v3, &v4), -0.18, epsilon = 1e-10);
        assert_relative_eq!(dot(&v4, &v3), -0.18, epsilon = 1e-10);
    }

    #[test]
    fn cross_product() {
        let v1a = Vector::new(35.8_f32, 1.0);
        let v1b = Vector::new(1_i32, 0);
        assert_relative_eq!(cross(&v1a, &v1b), -1.0_f32, epsilon = 1e-7);

        assert_eq!(Vector::new(2_i32, 3).cross(&Vector::new(5, 6)), -3);

        let v3a = Vector::new(-7_i32, 48);
        let v3b = Vector::new(0.3_f64, 0.04);
        assert_relative_eq!(cross(&v3a, &v3b), -14.68, epsilon = 1e-10);
    }

    #[test]
    fn euclidean_norm() {
        assert_relative_eq!(Vector::new(3_i32, 4).euclidean_norm(), 5.0);
        assert_relative_eq!(Vector::new(1.0_f32, 0.0).euclidean_norm(), 1.0);
        assert_relative_eq!(
            Vector::new(2.1_f64, 3.2).euclidean_norm(),
            3.827_531_841_80,
            epsilon = 1e-10
        );
    }

    #[test]
    fn scaling() {
        let vf = Vector::new(1.1_f32, 1.1);
        let vd = Vector::new(3.3_f64, 3.3);
        let vi = Vector::new(3_i32, 3);

        assert_eq!(vf * 2_i32, Vector::new(2.2_f32, 2.2));
        assert_eq!(0.5_f64 * vi, Vector::new(1.5, 1.5));
        assert_eq!(2_i32 * vd * 0.5_f64, vd);
    }

    #[test]
    fn add_and_subtract() {
        let a = Vector::new(1_i32, 2);
        let b = Vector::new(0.5_f64, -0.5);
        assert_eq!(a + b, Vector::new(1.5, 1.5));
        assert_eq!(a - b, Vector::new(0.5, 2.5));
        assert_eq!(-a, Vector::new(-1, -2));
    }

    #[test]
    fn normalization() {
        assert_eq!(Vector::new(3_i32, 4).normalized(), Vector::new(0.6, 0.8));
        assert_eq!(Vector::new(1.0_f32, 0.0).normalized(), Vector::new(1.0, 0.0));
        assert_abs_diff_eq!(
            Vector::new(2.1_f64, 3.2).normalized(),
            Vector::new(0.548_656_441_48, 0.836_047_910_83),
            epsilon = 1e-10
        );
        assert_eq!(
            Vector::new(31_121_i32, 31_123).normalized(),
            Vector::new(0.707_084_060_341_452, 0.707_129_501_301_597_4)
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(Vector::new(2_i32, -1).to_string(), "(start=(0,0), end=(2, -1))");
    }
}
