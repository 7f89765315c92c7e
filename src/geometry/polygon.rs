use std::fmt;

use tracing::{debug, trace};

use crate::error::{PlanarError, PolygonError, Result};
use crate::math::Scalar;

use super::{Point, Segment};

/// A closed polygon given by its vertices in traversal order.
///
/// Edges are implicit: vertex `i` connects to vertex `(i + 1) % n`. The
/// vertex count is fixed at construction, only the positions of individual
/// vertices can be edited afterwards. A polygon is deliberately not `Clone`;
/// move it or borrow it.
#[derive(Debug)]
pub struct Polygon<T: Scalar> {
    vertices: Vec<Point<T>>,
}

impl<T: Scalar> Polygon<T> {
    /// Creates a polygon from its vertex cycle.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::InvalidPolygon` if `vertices` is empty.
    pub fn new(vertices: Vec<Point<T>>) -> Result<Self> {
        if vertices.is_empty() {
            debug!("rejected polygon without vertices");
            return Err(
                PolygonError::InvalidPolygon("a polygon needs at least one vertex".into()).into(),
            );
        }
        Ok(Self { vertices })
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    /// Consumes the polygon, handing back its vertex storage.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Point<T>> {
        self.vertices
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if `index >= vertex_count()`.
    pub fn vertex(&self, index: usize) -> Result<&Point<T>> {
        let len = self.vertices.len();
        self.vertices
            .get(index)
            .ok_or_else(|| PolygonError::IndexOutOfRange { index, len }.into())
    }

    /// Returns the vertex at `index` for in-place editing.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if `index >= vertex_count()`.
    pub fn vertex_mut(&mut self, index: usize) -> Result<&mut Point<T>> {
        let len = self.vertices.len();
        self.vertices
            .get_mut(index)
            .ok_or_else(|| PolygonError::IndexOutOfRange { index, len }.into())
    }

    /// Replaces the vertex at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if `index >= vertex_count()`.
    pub fn set_vertex(&mut self, index: usize, point: Point<T>) -> Result<Point<T>> {
        let slot = self.vertex_mut(index)?;
        Ok(std::mem::replace(slot, point))
    }

    /// Iterates over the edges, closing the cycle from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        (0..self.vertices.len())
            .map(move |i| Segment::from_points(self.vertices[i], self.vertices[self.next_index(i)]))
    }

    /// Signed turn at vertex `center`: twice the signed area of the triangle
    /// (previous, center, next).
    ///
    /// Positive for a left (counter-clockwise) turn, negative for a right turn,
    /// zero when the three vertices are collinear.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if `center >= vertex_count()`.
    pub fn signed_angle(&self, center: usize) -> Result<T> {
        self.vertex(center)?;
        Ok(self.turn_at(center))
    }

    /// Twice the signed area (shoelace formula). Positive for counter-clockwise winding.
    ///
    /// # Panics
    ///
    /// Integer scalars are not widened: with `i32` the products of two
    /// coordinates must fit in `i32` (|coordinate| below about 32 000), and
    /// overflow panics in debug builds. Use `i64` for larger coordinates.
    #[must_use]
    pub fn double_signed_area(&self) -> T {
        self.edges()
            .fold(T::zero(), |acc, edge| acc + edge.double_signed_area())
    }

    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.double_signed_area() >= T::zero()
    }

    /// Enclosed area, independent of the winding direction.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.double_signed_area().as_f64().abs() * 0.5
    }

    /// Whether every non-degenerate vertex turns the same way.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let mut turn_left = None;
        for i in 0..self.vertices.len() {
            let angle = self.turn_at(i);
            if angle.coord_eq(T::zero()) {
                continue;
            }
            let left = angle > T::zero();
            match turn_left {
                None => turn_left = Some(left),
                Some(expected) if expected != left => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Even-odd containment test.
    ///
    /// Casts a ray from `p` towards `+x` and counts the edges it crosses. Each
    /// edge is tested with the half-open straddle rule in both directions, so a
    /// ray through a vertex is counted once. Points on the lower or left
    /// boundary count as inside, points on the upper or right boundary as
    /// outside.
    ///
    /// # Panics
    ///
    /// Same range limit as [`Polygon::double_signed_area`]: integer
    /// coordinates are multiplied in their own type, so `i32` overflow
    /// panics in debug builds.
    #[must_use]
    pub fn point_inside(&self, p: &Point<T>) -> bool {
        let axis_y = p.y();
        let px = p.x().as_f64();
        let crossings = self
            .edges()
            .filter(|edge| edge.crosses_horizontal(axis_y))
            .filter(|edge| edge.horizontal_intersect_x(axis_y) - px > 0.0)
            .count();
        trace!(x = %p.x(), y = %p.y(), crossings, "ray cast");
        crossings % 2 == 1
    }

    fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.vertices.len()
    }

    fn prev_index(&self, i: usize) -> usize {
        let n = self.vertices.len();
        (i + n - 1) % n
    }

    fn turn_at(&self, center: usize) -> T {
        let prev = self.vertices[self.prev_index(center)];
        let next = self.vertices[self.next_index(center)];
        Segment::from_points(prev, self.vertices[center]).line_determinant(&next)
    }
}

impl<T: Scalar> TryFrom<Vec<Point<T>>> for Polygon<T> {
    type Error = PlanarError;

    fn try_from(vertices: Vec<Point<T>>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl<T: Scalar> fmt::Display for Polygon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "v{i}: {v}")?;
        }
        write!(f, "]")
    }
}
