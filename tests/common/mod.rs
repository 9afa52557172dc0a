#![allow(dead_code, clippy::unwrap_used)]

use euclis::geometry::{
    Circle, Ellipse, MultiShape, OrientedRectangle, Parallelogram, Path, Rectangle, RoundRectangle, Segment,
    Triangle,
};
use euclis::{Point2, Shape, Vector2, WindingRule};
use tracing_subscriber::EnvFilter;

/// Routes the crate's tracing output to the test harness.
///
/// Set `RUST_LOG=euclis=trace` to see the intersection dispatch.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Closed polygon through `points`.
pub fn polygon(rule: WindingRule, points: &[(f64, f64)]) -> Path {
    let mut path = Path::new(rule);
    path.move_to(Point2::new(points[0].0, points[0].1));
    for &(x, y) in &points[1..] {
        path.line_to(Point2::new(x, y)).unwrap();
    }
    path.close_path().unwrap();
    path
}

/// One shape of every kind, spread around the origin with some overlap.
pub fn sample_shapes() -> Vec<Shape> {
    let mut curved = Path::new(WindingRule::NonZero);
    curved.move_to(Point2::new(-6.0, 4.0));
    curved.quad_to(Point2::new(-3.0, 9.0), Point2::new(0.0, 4.0)).unwrap();
    curved
        .curve_to(Point2::new(-1.0, 2.0), Point2::new(-5.0, 2.0), Point2::new(-6.0, 4.0))
        .unwrap();
    curved.close_path().unwrap();

    let mut multi = MultiShape::new();
    multi.add(Circle::from_coords(6.0, -6.0, 1.5));
    multi.add(Segment::from_coords(-8.0, -8.0, -3.0, -6.0));

    vec![
        Segment::from_coords(-4.0, -3.0, 5.0, 2.0).into(),
        Rectangle::from_coords(1.0, 1.0, 4.0, 3.0).into(),
        Circle::from_coords(-2.0, 0.5, 2.0).into(),
        Ellipse::new(5.0, 8.0, 5.0, 10.0).unwrap().into(),
        Triangle::from_coords(5.0, 8.0, -10.0, 1.0, -1.0, -2.0).into(),
        RoundRectangle::new(-7.0, -5.0, 6.0, 4.0, 1.5, 1.0).unwrap().into(),
        OrientedRectangle::new(Point2::new(3.0, -3.0), Vector2::new(2.0, 1.0), 2.5, 1.0)
            .unwrap()
            .into(),
        Parallelogram::from_half_axes(Point2::new(-4.0, 6.0), Vector2::new(2.0, 0.0), Vector2::new(1.0, 1.5))
            .unwrap()
            .into(),
        polygon(WindingRule::EvenOdd, &[(-8.0, 0.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0)]).into(),
        curved.into(),
        multi.into(),
    ]
}

/// Deterministic mover points covering the sample area.
pub fn sample_points() -> Vec<Point2> {
    let mut points = Vec::new();
    for i in 0..29 {
        for j in 0..29 {
            let x = -12.3 + f64::from(i) * 0.87;
            let y = -11.9 + f64::from(j) * 0.93;
            points.push(Point2::new(x, y));
        }
    }
    points
}
