#![allow(clippy::unwrap_used)]

mod common;

use approx::assert_relative_eq;
use common::{init_tracing, polygon};
use euclis::geometry::{Ellipse, Segment, Triangle};
use euclis::math::intersect_2d::{segment_segment_intersection_factor, segment_segment_intersection_point};
use euclis::{Point2, Shape2d, WindingRule};

fn reference_ellipse() -> Ellipse {
    Ellipse::new(5.0, 8.0, 5.0, 10.0).unwrap()
}

fn reference_triangle() -> Triangle {
    Triangle::from_coords(5.0, 8.0, -10.0, 1.0, -1.0, -2.0)
}

#[test]
fn ellipse_closest_point_and_distances() {
    init_tracing();
    let ellipse = reference_ellipse();
    let origin = Point2::origin();
    let closest = ellipse.closest_point_to(&origin);
    assert_relative_eq!(closest.x, 6.58303, epsilon = 1e-4);
    assert_relative_eq!(closest.y, 8.34848, epsilon = 1e-4);
    assert_relative_eq!(ellipse.distance(&origin), 10.63171, epsilon = 1e-4);
    assert_relative_eq!(ellipse.distance_squared(&origin), 113.03335, epsilon = 1e-3);
}

#[test]
fn triangle_containment_and_orientation() {
    init_tracing();
    let triangle = reference_triangle();
    assert!(triangle.contains(&Point2::origin()));
    assert!(!triangle.contains(&Point2::new(11.0, 10.0)));
    assert!(triangle.is_ccw());
    assert!(!Triangle::from_coords(5.0, 8.0, -1.0, -2.0, -10.0, 1.0).is_ccw());
}

#[test]
fn segment_against_ellipse() {
    init_tracing();
    let ellipse = reference_ellipse();
    let reaching = Segment::from_coords(5.0, -4.0, 11.0, 18.0);
    let short = Segment::from_coords(5.0, -4.0, 11.0, 13.0);
    assert!(reaching.intersects(&ellipse));
    assert!(ellipse.intersects(&reaching));
    assert!(!short.intersects(&ellipse));
    assert!(!ellipse.intersects(&short));
}

#[test]
fn segment_segment_factor() {
    init_tracing();
    let u = segment_segment_intersection_factor(0.0, 0.0, 10.0, 0.0, 5.0, -5.0, 5.0, 5.0).unwrap();
    assert_relative_eq!(u, 0.5);
    let p = segment_segment_intersection_point(0.0, 0.0, 10.0, 0.0, 5.0, -5.0, 5.0, 5.0).unwrap();
    assert_relative_eq!(p.x, 5.0);
    assert_relative_eq!(p.y, 0.0);
    let a = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
    let b = Segment::from_coords(5.0, -5.0, 5.0, 5.0);
    assert_eq!(a.intersection_point(&b), Some(Point2::new(5.0, 0.0)));
}

#[test]
fn even_odd_path_against_triangle() {
    init_tracing();
    let path = polygon(WindingRule::EvenOdd, &[(-8.0, 0.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0)]);
    let triangle = reference_triangle();
    assert!(path.intersects(&triangle));
    assert!(triangle.intersects(&path));
}
