use std::fmt;

use crate::math::{ApproxScalar, Scalar, Tolerance};

use super::{Point, Vector};

/// Side of a directed line on which a point lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter-clockwise of the direction of travel.
    Left,
    /// Clockwise of the direction of travel.
    Right,
    /// On the infinite line through the segment.
    Collinear,
}

/// A directed line segment from `start` to `end`.
///
/// Both endpoints are stored as vectors from the origin, which lets the
/// orientation predicates work directly with cross products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar> {
    start: Vector<T>,
    end: Vector<T>,
}

impl<T: Scalar> Segment<T> {
    #[must_use]
    pub fn new(start: Vector<T>, end: Vector<T>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn from_points(start: Point<T>, end: Point<T>) -> Self {
        Self::new(start.into(), end.into())
    }

    #[must_use]
    pub fn from_coords(start_x: T, start_y: T, end_x: T, end_y: T) -> Self {
        Self::new(Vector::new(start_x, start_y), Vector::new(end_x, end_y))
    }

    #[must_use]
    pub fn start(&self) -> &Vector<T> {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &Vector<T> {
        &self.end
    }

    /// The same segment travelled in the opposite direction.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Displacement from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vector<T> {
        Vector::new(
            self.end.x() - self.start.x(),
            self.end.y() - self.start.y(),
        )
    }

    /// Euclidean length, in `f64` whatever the scalar type.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().euclidean_norm()
    }

    /// `start.x - end.x`.
    #[must_use]
    pub fn diff_x(&self) -> T {
        self.start.x() - self.end.x()
    }

    /// `start.y - end.y`.
    #[must_use]
    pub fn diff_y(&self) -> T {
        self.start.y() - self.end.y()
    }

    /// Twice the signed area of the triangle (origin, start, end).
    #[must_use]
    pub fn double_signed_area(&self) -> T {
        self.start.cross(&self.end)
    }

    /// Twice the signed area of the triangle (start, end, p).
    ///
    /// Positive when `p` is left of `start -> end`, negative when right and
    /// zero when the three points are collinear.
    #[must_use]
    pub fn line_determinant(&self, p: &Point<T>) -> T {
        let p = Vector::from(*p);
        self.double_signed_area() + p.cross(&self.start) + self.end.cross(&p)
    }

    /// Classifies `p` against the line through this segment.
    ///
    /// Collinearity is decided first with the scalar's own equality, so for
    /// floats a determinant within tolerance of zero is never `Left` or `Right`.
    #[must_use]
    pub fn orientation(&self, p: &Point<T>) -> Orientation {
        let det = self.line_determinant(p);
        if det.coord_eq(T::zero()) {
            Orientation::Collinear
        } else if det > T::zero() {
            Orientation::Left
        } else {
            Orientation::Right
        }
    }

    #[must_use]
    pub fn is_left_of(&self, p: &Point<T>) -> bool {
        self.orientation(p) == Orientation::Left
    }

    #[must_use]
    pub fn is_right_of(&self, p: &Point<T>) -> bool {
        self.orientation(p) == Orientation::Right
    }

    /// Whether `p` lies on the infinite line through this segment.
    #[must_use]
    pub fn is_on_line(&self, p: &Point<T>) -> bool {
        self.orientation(p) == Orientation::Collinear
    }

    /// Whether the segment rises across `y = axis_y`.
    ///
    /// Half-open: `end` strictly above the axis, `start` on or below it. A
    /// scanline through a shared polygon vertex is thus counted once only.
    /// Always `false` for horizontal segments.
    #[must_use]
    pub fn straddles_horizontal(&self, axis_y: T) -> bool {
        self.end.y() - axis_y > T::zero() && self.start.y() - axis_y <= T::zero()
    }

    /// Straddle test in either direction of travel.
    #[must_use]
    pub fn crosses_horizontal(&self, axis_y: T) -> bool {
        self.straddles_horizontal(axis_y) || self.swapped().straddles_horizontal(axis_y)
    }

    /// x-coordinate where the line through this segment meets `y = axis_y`.
    ///
    /// Infinite or NaN for horizontal segments; guard with
    /// [`Segment::crosses_horizontal`] before use.
    #[must_use]
    pub fn horizontal_intersect_x(&self, axis_y: T) -> f64 {
        let numerator = axis_y * self.diff_x() - self.double_signed_area();
        numerator.as_f64() / self.diff_y().as_f64()
    }
}

impl<T: ApproxScalar> Segment<T> {
    /// Like [`Segment::is_on_line`] but with a caller-supplied tolerance.
    #[must_use]
    pub fn is_on_line_within(&self, p: &Point<T>, tolerance: Tolerance<T>) -> bool {
        tolerance.close_enough(self.line_determinant(p), T::zero())
    }
}

impl<T: Scalar> Default for Segment<T> {
    fn default() -> Self {
        Self::new(Vector::default(), Vector::default())
    }
}

impl<T: Scalar> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(start={}, end={})", self.start.end(), self.end.end())
    }
}
