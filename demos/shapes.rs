//! Builds a handful of sample shapes and prints them.
//!
//! ```text
//! cargo run --example shapes
//! RUST_LOG=planar=trace cargo run --example shapes   # show ray-cast traces
//! ```

use planar::{Point, Polygon, Segment, Vector};
use tracing::info;

fn main() -> planar::Result<()> {
    // Default: WARN for everything, INFO for planar and this demo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shapes=info".parse().unwrap_or_default())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let p1 = Point::new(1_i32, 2);
    let p2 = Point::new(0.3_f64, 5.8);
    let p3: Point<f64> = p1 + p2;

    let v1 = Vector::from(p2);
    let v2 = v1 * 2_i32;

    let pol1 = Polygon::new(vec![
        Point::new(-3.4_f32, 0.4),
        Point::new(2.0, -0.5),
        Point::new(-1.6, -0.5),
    ])?;
    let s1 = Segment::from_coords(1_i32, 0, 5, 0);
    let s2 = Segment::from_coords(-3.4_f32, 0.4, 2.0, -0.5);
    let s3 = Segment::from_coords(1.0_f32, 2.0, 3.0, 4.0).swapped();

    println!("Point {p3}");
    println!("Vector {v2}");
    println!("Polygon {pol1}");
    println!("Segment {s1}");
    println!("Swapped segment {s3}");
    println!("Segment<f32> length {}", s2.length());

    let probe = Point::new(-2.0_f32, 0.0);
    info!(
        area = pol1.area(),
        ccw = pol1.is_counter_clockwise(),
        inside = pol1.point_inside(&probe),
        "triangle summary"
    );
    Ok(())
}
