mod point;
mod polygon;
mod segment;
mod vector;

pub use point::Point;
pub use polygon::Polygon;
pub use segment::{Orientation, Segment};
pub use vector::{cross, dot, Vector};
