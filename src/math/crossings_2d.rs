//! Per-edge crossing counts for ray-casting tests.
//!
//! A crossing count is the signed number of times path edges cross the ray
//! leaving a query point towards `+x`: upward edges add `1`, downward edges
//! subtract `1`. The shape variants return [`SHAPE_INTERSECTS`] as soon as the
//! edge touches the shape, since no count is meaningful in that case.

use super::intersect_2d::{
    intersects_circle_segment, intersects_convex_polygon_segment, intersects_ellipse_segment,
    intersects_rectangle_segment, intersects_segment_segment_with_ends,
};
use super::Point2;

/// Sentinel returned when an edge directly meets the queried shape.
pub const SHAPE_INTERSECTS: i32 = i32::MIN;

/// Crossings of the ray from `(px, py)` towards `+x` with the edge
/// `(x0, y0) -> (x1, y1)`.
///
/// The edge's vertical span is half-open so a ray through a shared vertex is
/// counted once.
#[must_use]
pub fn point_crossings_for_segment(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> i32 {
    if (py < y0 && py < y1) || (py >= y0 && py >= y1) {
        return 0;
    }
    if px >= x0 && px >= x1 {
        return 0;
    }
    let direction = if y0 < y1 { 1 } else { -1 };
    if px < x0 && px < x1 {
        return direction;
    }
    let x_intercept = x0 + (py - y0) * (x1 - x0) / (y1 - y0);
    if px >= x_intercept {
        0
    } else {
        direction
    }
}

/// Adds the edge's crossings for a shape that does not touch it, probing
/// from a reference point of the shape.
fn add_reference_crossings(crossings: i32, reference: &Point2, x0: f64, y0: f64, x1: f64, y1: f64) -> i32 {
    crossings.saturating_add(point_crossings_for_segment(reference.x, reference.y, x0, y0, x1, y1))
}

/// Crossings contributed by the edge `(x0, y0) -> (x1, y1)` for the segment
/// `(sx0, sy0) -> (sx1, sy1)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn segment_crossings_for_segment(
    crossings: i32,
    sx0: f64,
    sy0: f64,
    sx1: f64,
    sy1: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    if crossings == SHAPE_INTERSECTS {
        return crossings;
    }
    if intersects_segment_segment_with_ends(sx0, sy0, sx1, sy1, x0, y0, x1, y1) {
        return SHAPE_INTERSECTS;
    }
    add_reference_crossings(crossings, &Point2::new(sx0, sy0), x0, y0, x1, y1)
}

/// Crossings contributed by the edge for the closed rectangle.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn rectangle_crossings_for_segment(
    crossings: i32,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    if crossings == SHAPE_INTERSECTS {
        return crossings;
    }
    if intersects_rectangle_segment(rxmin, rymin, rxmax, rymax, x0, y0, x1, y1) {
        return SHAPE_INTERSECTS;
    }
    add_reference_crossings(crossings, &Point2::new(rxmin, rymin), x0, y0, x1, y1)
}

/// Crossings contributed by the edge for the closed disk.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn circle_crossings_for_segment(
    crossings: i32,
    cx: f64,
    cy: f64,
    radius: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    if crossings == SHAPE_INTERSECTS {
        return crossings;
    }
    if intersects_circle_segment(cx, cy, radius, x0, y0, x1, y1) {
        return SHAPE_INTERSECTS;
    }
    add_reference_crossings(crossings, &Point2::new(cx, cy), x0, y0, x1, y1)
}

/// Crossings contributed by the edge for the solid ellipse.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn ellipse_crossings_for_segment(
    crossings: i32,
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    if crossings == SHAPE_INTERSECTS {
        return crossings;
    }
    if intersects_ellipse_segment(cx, cy, a, b, x0, y0, x1, y1) {
        return SHAPE_INTERSECTS;
    }
    add_reference_crossings(crossings, &Point2::new(cx, cy), x0, y0, x1, y1)
}

/// Crossings contributed by the edge for the closed convex polygon.
#[must_use]
pub fn convex_polygon_crossings_for_segment(
    crossings: i32,
    vertices: &[Point2],
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    if crossings == SHAPE_INTERSECTS {
        return crossings;
    }
    let Some(reference) = vertices.first() else {
        return crossings;
    };
    if intersects_convex_polygon_segment(vertices, x0, y0, x1, y1) {
        return SHAPE_INTERSECTS;
    }
    add_reference_crossings(crossings, reference, x0, y0, x1, y1)
}

/// Crossings of the edge with the two rays leaving the rectangle's bottom
/// and top sides towards `+x`, in half units.
///
/// Only an edge entering the open interior of the rectangle yields
/// [`SHAPE_INTERSECTS`]; edges running along the border are counted. A full
/// winding around the rectangle adds `2`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn rectangle_interior_crossings_for_segment(
    crossings: i32,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> i32 {
    if crossings == SHAPE_INTERSECTS {
        return crossings;
    }
    if (y0 >= rymax && y1 >= rymax) || (y0 <= rymin && y1 <= rymin) || (x0 <= rxmin && x1 <= rxmin) {
        return crossings;
    }
    if x0 >= rxmax && x1 >= rxmax {
        return crossings + vertical_span_crossings(rymin, rymax, y0, y1);
    }
    let strictly_inside = |x: f64, y: f64| x > rxmin && x < rxmax && y > rymin && y < rymax;
    if strictly_inside(x0, y0) || strictly_inside(x1, y1) {
        return SHAPE_INTERSECTS;
    }
    // Clip the edge to the rectangle's vertical span.
    let mut xi0 = x0;
    if y0 < rymin {
        xi0 += (rymin - y0) * (x1 - x0) / (y1 - y0);
    } else if y0 > rymax {
        xi0 += (rymax - y0) * (x1 - x0) / (y1 - y0);
    }
    let mut xi1 = x1;
    if y1 < rymin {
        xi1 += (rymin - y1) * (x0 - x1) / (y0 - y1);
    } else if y1 > rymax {
        xi1 += (rymax - y1) * (x0 - x1) / (y0 - y1);
    }
    if xi0 <= rxmin && xi1 <= rxmin {
        return crossings;
    }
    if xi0 >= rxmax && xi1 >= rxmax {
        return crossings + vertical_span_crossings(rymin, rymax, y0, y1);
    }
    SHAPE_INTERSECTS
}

fn vertical_span_crossings(rymin: f64, rymax: f64, y0: f64, y1: f64) -> i32 {
    let mut count = 0;
    if y0 < y1 {
        if y0 <= rymin {
            count += 1;
        }
        if y1 >= rymax {
            count += 1;
        }
    } else if y1 < y0 {
        if y1 <= rymin {
            count -= 1;
        }
        if y0 >= rymax {
            count -= 1;
        }
    }
    count
}
