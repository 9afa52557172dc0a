#![allow(clippy::unwrap_used)]

mod common;

use approx::assert_abs_diff_eq;
use common::{init_tracing, sample_points, sample_shapes};
use euclis::geometry::{Circle, Rectangle};
use euclis::{PathElement, Shape, Shape2d, Transform2d, Vector2};

// ── Symmetry ───────────────────────────────────────────────

#[test]
fn intersection_is_symmetric() {
    init_tracing();
    let shapes = sample_shapes();
    for a in &shapes {
        for b in &shapes {
            assert_eq!(a.intersects(b), b.intersects(a), "{} / {}", a.kind(), b.kind());
        }
    }
}

#[test]
fn intersection_is_symmetric_under_motion() {
    init_tracing();
    let shapes = sample_shapes();
    let movers: Vec<Shape> = vec![
        Circle::from_coords(0.0, 0.0, 0.75).into(),
        Rectangle::from_coords(-0.5, -0.5, 0.5, 0.5).into(),
    ];
    for step in 0..24 {
        let offset = Vector2::new(-11.0 + f64::from(step), 7.5 - 0.6 * f64::from(step));
        for mover in &movers {
            let mut moved = mover.clone();
            moved.translate(&offset);
            for shape in &shapes {
                assert_eq!(
                    shape.intersects(&moved),
                    moved.intersects(shape),
                    "{} / {} at {offset:?}",
                    shape.kind(),
                    moved.kind()
                );
            }
        }
    }
}

#[test]
fn every_shape_meets_itself() {
    init_tracing();
    for shape in sample_shapes() {
        assert!(shape.intersects(&shape), "{}", shape.kind());
    }
}

// ── Bounding boxes ─────────────────────────────────────────

#[test]
fn bounding_box_covers_contained_points() {
    init_tracing();
    for shape in sample_shapes() {
        let mut bounds = shape.to_bounding_box();
        bounds.inflate(1e-9, 1e-9);
        for p in sample_points().iter().filter(|p| shape.contains(p)) {
            assert!(bounds.contains(p), "{} at {p}", shape.kind());
        }
    }
}

// ── Closest points and distances ───────────────────────────

#[test]
fn closest_point_is_idempotent() {
    init_tracing();
    for shape in sample_shapes() {
        for p in sample_points() {
            let closest = shape.closest_point_to(&p);
            let again = shape.closest_point_to(&closest);
            assert_abs_diff_eq!(again.x, closest.x, epsilon = 1e-6);
            assert_abs_diff_eq!(again.y, closest.y, epsilon = 1e-6);
        }
    }
}

#[test]
fn distance_matches_closest_point() {
    init_tracing();
    for shape in sample_shapes() {
        for p in sample_points() {
            let closest = shape.closest_point_to(&p);
            let distance = shape.distance(&p);
            assert_abs_diff_eq!(distance, (p - closest).norm(), epsilon = 1e-9);
            assert_abs_diff_eq!(shape.distance_squared(&p), distance * distance, epsilon = 1e-6);
            assert!(shape.distance_linf(&p) <= distance + 1e-9);
            assert!(shape.distance_l1(&p) + 1e-9 >= distance);
        }
    }
}

#[test]
fn farthest_point_is_not_closer_than_closest() {
    init_tracing();
    for shape in sample_shapes() {
        for p in sample_points() {
            let near = shape.distance(&p);
            let far = (shape.farthest_point_to(&p) - p).norm();
            assert!(far + 1e-9 >= near, "{} at {p}", shape.kind());
        }
    }
}

// ── Transforms ─────────────────────────────────────────────

fn coordinates(elements: impl Iterator<Item = PathElement>) -> Vec<f64> {
    elements
        .flat_map(|element| element.points())
        .flat_map(|p| [p.x, p.y])
        .collect()
}

#[test]
fn identity_transform_keeps_outline() {
    init_tracing();
    let identity = Transform2d::identity();
    for shape in sample_shapes() {
        let plain = coordinates(shape.path_iterator(None));
        let replayed = coordinates(shape.path_iterator(Some(&identity)));
        assert_eq!(plain.len(), replayed.len(), "{}", shape.kind());
        for (a, b) in plain.iter().zip(&replayed) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }
}

#[test]
fn translation_keeps_kind_and_moves_bounds() {
    init_tracing();
    let shift = Transform2d::translation(3.0, -2.0);
    for shape in sample_shapes() {
        let image = shape.create_transformed_shape(&shift);
        assert_eq!(image.kind(), shape.kind());
        let (before, after) = (shape.to_bounding_box(), image.to_bounding_box());
        assert_abs_diff_eq!(after.min_x(), before.min_x() + 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(after.max_y(), before.max_y() - 2.0, epsilon = 1e-9);
    }
}

#[test]
fn rotated_images_follow_the_transform() {
    init_tracing();
    let rotation = Transform2d::rotation(0.7);
    for shape in sample_shapes() {
        let image = shape.create_transformed_shape(&rotation);
        for p in sample_points().iter().filter(|p| shape.contains(p)) {
            let q = rotation.transform_point(p);
            assert!(image.distance(&q) < 0.15, "{} at {p}", shape.kind());
        }
    }
}
