pub mod error;
pub mod geometry;
pub mod math;

pub use error::{PlanarError, PolygonError, Result};
pub use geometry::{Orientation, Point, Polygon, Segment, Vector};
pub use math::{ApproxScalar, Scalar, Tolerance};
