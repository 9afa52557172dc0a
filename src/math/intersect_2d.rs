//! Intersection factors and pairwise intersection predicates on raw coordinates.
//!
//! All shapes are closed sets: touching borders count as an intersection.
//! Ellipses are given by center and semi-axes; rectangles by their min/max
//! corners; convex polygons by their vertices in either orientation.

use super::distance_2d::{
    closest_point_convex_polygon_point, closest_point_solid_ellipse_point,
    convex_polygon_contains_point, distance_squared_segment_point,
};
use super::predicates_2d::{ccw, clip_segment_to_rectangle, side_line_point, UncertainIntersection};
use super::{Point2, Vector2};

/// Factor `u` on the first line where the lines `(x1, y1)-(x2, y2)` and
/// `(x3, y3)-(x4, y4)` meet, solving `P1 + u (P2 - P1) = P3 + v (P4 - P3)`.
///
/// Returns `None` when the determinant is exactly zero (parallel lines).
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn line_line_intersection_factor(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Option<f64> {
    line_line_factors(x1, y1, x2, y2, x3, y3, x4, y4).map(|(u, _)| u)
}

/// Both factors `(u, v)` of the line-line intersection.
#[allow(clippy::too_many_arguments)]
fn line_line_factors(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Option<(f64, f64)> {
    let (d1x, d1y) = (x2 - x1, y2 - y1);
    let (d2x, d2y) = (x4 - x3, y4 - y3);
    let det = d1x * d2y - d1y * d2x;
    if det == 0.0 {
        return None;
    }
    let (wx, wy) = (x3 - x1, y3 - y1);
    let u = (wx * d2y - wy * d2x) / det;
    let v = (wx * d1y - wy * d1x) / det;
    Some((u, v))
}

/// Point where the two infinite lines meet, or `None` if they are parallel.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn line_line_intersection_point(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Option<Point2> {
    let u = line_line_intersection_factor(x1, y1, x2, y2, x3, y3, x4, y4)?;
    Some(Point2::new(x1 + u * (x2 - x1), y1 + u * (y2 - y1)))
}

/// Factor on the first segment where the two segments cross.
///
/// Returns `None` for parallel segments or when either factor leaves `[0, 1]`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn segment_segment_intersection_factor(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Option<f64> {
    let (u, v) = line_line_factors(x1, y1, x2, y2, x3, y3, x4, y4)?;
    ((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)).then_some(u)
}

/// Point where the two segments cross, if any.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn segment_segment_intersection_point(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Option<Point2> {
    let u = segment_segment_intersection_factor(x1, y1, x2, y2, x3, y3, x4, y4)?;
    Some(Point2::new(x1 + u * (x2 - x1), y1 + u * (y2 - y1)))
}

/// Whether the projections of two collinear segments overlap on a stretch of
/// positive length, measured along the longer one.
#[allow(clippy::too_many_arguments)]
fn collinear_spans_overlap(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) -> bool {
    let a = Vector2::new(x2 - x1, y2 - y1);
    let b = Vector2::new(x4 - x3, y4 - y3);
    let axis = if a.norm_squared() >= b.norm_squared() { a } else { b };
    if axis.norm_squared() == 0.0 {
        return false;
    }
    let project = |x: f64, y: f64| (x - x1) * axis.x + (y - y1) * axis.y;
    let (a0, a1) = (0.0_f64, project(x2, y2));
    let (b0, b1) = (project(x3, y3), project(x4, y4));
    let (amin, amax) = (a0.min(a1), a0.max(a1));
    let (bmin, bmax) = (b0.min(b1), b0.max(b1));
    amax > bmin && bmax > amin
}

/// First half of the robust test: can segment B meet segment A, ends included?
#[allow(clippy::too_many_arguments)]
pub(crate) fn segment_segment_with_ends_hint(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> UncertainIntersection {
    if x1 == x2 && y1 == y2 {
        // A single point is placed by the swapped half, unless B is one too.
        let b_is_other_point = x3 == x4 && y3 == y4 && (x3 != x1 || y3 != y1);
        return if b_is_other_point {
            UncertainIntersection::No
        } else {
            UncertainIntersection::Perhaps
        };
    }
    let side1 = side_line_point(x1, y1, x2, y2, x3, y3);
    let side2 = side_line_point(x1, y1, x2, y2, x4, y4);
    if side1 * side2 > 0 {
        return UncertainIntersection::No;
    }
    if side1 == 0 && side2 == 0 {
        // Both ends are on A's line; only their position along it matters.
        let along3 = ccw(x1, y1, x2, y2, x3, y3, f64::INFINITY);
        let along4 = ccw(x1, y1, x2, y2, x4, y4, f64::INFINITY);
        return if along3 == along4 && along3 != 0 {
            UncertainIntersection::No
        } else {
            UncertainIntersection::Perhaps
        };
    }
    UncertainIntersection::Perhaps
}

/// First half of the robust test: can segment B cross the interior of segment A?
#[allow(clippy::too_many_arguments)]
pub(crate) fn segment_segment_without_ends_hint(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> UncertainIntersection {
    let side1 = side_line_point(x1, y1, x2, y2, x3, y3);
    let side2 = side_line_point(x1, y1, x2, y2, x4, y4);
    if side1 == 0 && side2 == 0 {
        return if collinear_spans_overlap(x1, y1, x2, y2, x3, y3, x4, y4) {
            UncertainIntersection::Perhaps
        } else {
            UncertainIntersection::No
        };
    }
    if side1 * side2 >= 0 {
        return UncertainIntersection::No;
    }
    UncertainIntersection::Perhaps
}

/// Whether the two segments share at least one point, ends included.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_segment_segment_with_ends(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    segment_segment_with_ends_hint(x1, y1, x2, y2, x3, y3, x4, y4).is_possible()
        && segment_segment_with_ends_hint(x3, y3, x4, y4, x1, y1, x2, y2).is_possible()
}

/// Whether the two segments cross in their open interiors.
///
/// Touching at an end does not count; collinear segments intersect when
/// their overlap has a positive length.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_segment_segment_without_ends(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    segment_segment_without_ends_hint(x1, y1, x2, y2, x3, y3, x4, y4).is_possible()
        && segment_segment_without_ends_hint(x3, y3, x4, y4, x1, y1, x2, y2).is_possible()
}

/// Whether the segment `(x1, y1)-(x2, y2)` meets the infinite line through
/// `(x3, y3)` and `(x4, y4)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_segment_line(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    side_line_point(x3, y3, x4, y4, x1, y1) * side_line_point(x3, y3, x4, y4, x2, y2) <= 0
}

// ── containment ──

/// Whether the rectangle contains `(px, py)`, borders included.
#[must_use]
pub fn rectangle_contains_point(rxmin: f64, rymin: f64, rxmax: f64, rymax: f64, px: f64, py: f64) -> bool {
    px >= rxmin && px <= rxmax && py >= rymin && py <= rymax
}

/// Whether the first rectangle fully contains the second one.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn rectangle_contains_rectangle(
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    sxmin: f64,
    symin: f64,
    sxmax: f64,
    symax: f64,
) -> bool {
    sxmin >= rxmin && sxmax <= rxmax && symin >= rymin && symax <= rymax
}

/// Whether the disk contains `(px, py)`, border included.
#[must_use]
pub fn circle_contains_point(cx: f64, cy: f64, radius: f64, px: f64, py: f64) -> bool {
    (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius
}

/// Whether the triangle contains `(px, py)`, borders included.
///
/// Each directed edge must see the point on the same side as the triangle's
/// own orientation, or on the edge line.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn triangle_contains_point(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    px: f64,
    py: f64,
) -> bool {
    let orientation = side_line_point(x1, y1, x2, y2, x3, y3);
    if orientation == 0 {
        let vertices = [Point2::new(x1, y1), Point2::new(x2, y2), Point2::new(x3, y3)];
        return convex_polygon_contains_point(&vertices, &Point2::new(px, py));
    }
    [
        side_line_point(x1, y1, x2, y2, px, py),
        side_line_point(x2, y2, x3, y3, px, py),
        side_line_point(x3, y3, x1, y1, px, py),
    ]
    .iter()
    .all(|&side| side == 0 || side == orientation)
}

// ── pairwise predicates ──

/// Whether the two rectangles share at least one point.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_rectangle_rectangle(
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    sxmin: f64,
    symin: f64,
    sxmax: f64,
    symax: f64,
) -> bool {
    rxmin <= sxmax && sxmin <= rxmax && rymin <= symax && symin <= rymax
}

/// Whether the segment meets the rectangle (Cohen–Sutherland clipping).
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_rectangle_segment(
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    clip_segment_to_rectangle(x1, y1, x2, y2, rxmin, rymin, rxmax, rymax).is_some()
}

/// Whether the two disks share at least one point.
#[must_use]
pub fn intersects_circle_circle(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64) -> bool {
    let r = r1 + r2;
    (x2 - x1).powi(2) + (y2 - y1).powi(2) <= r * r
}

/// Whether the disk meets the rectangle (Arvo's box-sphere test in 2D).
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_circle_rectangle(
    cx: f64,
    cy: f64,
    radius: f64,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
) -> bool {
    let dx = if cx < rxmin {
        cx - rxmin
    } else if cx > rxmax {
        cx - rxmax
    } else {
        0.0
    };
    let dy = if cy < rymin {
        cy - rymin
    } else if cy > rymax {
        cy - rymax
    } else {
        0.0
    };
    dx * dx + dy * dy <= radius * radius
}

/// Whether the disk meets the segment.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_circle_segment(cx: f64, cy: f64, radius: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    distance_squared_segment_point(x1, y1, x2, y2, cx, cy) <= radius * radius
}

/// Whether the disk meets the solid ellipse.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_circle_ellipse(cx: f64, cy: f64, radius: f64, ex: f64, ey: f64, a: f64, b: f64) -> bool {
    let closest = closest_point_solid_ellipse_point(ex, ey, a, b, cx, cy);
    (closest.x - cx).powi(2) + (closest.y - cy).powi(2) <= radius * radius
}

/// Axis segment of a flat ellipse.
fn flat_ellipse_segment(cx: f64, cy: f64, a: f64, b: f64) -> (f64, f64, f64, f64) {
    let (hx, hy) = (a.max(0.0), b.max(0.0));
    (cx - hx, cy - hy, cx + hx, cy + hy)
}

fn is_flat_ellipse(a: f64, b: f64) -> bool {
    a <= 0.0 || b <= 0.0
}

/// Whether the segment meets the solid ellipse.
///
/// The plane is scaled so that the ellipse becomes the unit disk.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_ellipse_segment(cx: f64, cy: f64, a: f64, b: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    if is_flat_ellipse(a, b) {
        let (ex1, ey1, ex2, ey2) = flat_ellipse_segment(cx, cy, a, b);
        return intersects_segment_segment_with_ends(ex1, ey1, ex2, ey2, x1, y1, x2, y2);
    }
    let (ux1, uy1) = ((x1 - cx) / a, (y1 - cy) / b);
    let (ux2, uy2) = ((x2 - cx) / a, (y2 - cy) / b);
    distance_squared_segment_point(ux1, uy1, ux2, uy2, 0.0, 0.0) <= 1.0
}

/// Whether the rectangle meets the solid ellipse.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_ellipse_rectangle(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
) -> bool {
    if is_flat_ellipse(a, b) {
        let (ex1, ey1, ex2, ey2) = flat_ellipse_segment(cx, cy, a, b);
        return intersects_rectangle_segment(rxmin, rymin, rxmax, rymax, ex1, ey1, ex2, ey2);
    }
    intersects_circle_rectangle(
        0.0,
        0.0,
        1.0,
        (rxmin - cx) / a,
        (rymin - cy) / b,
        (rxmax - cx) / a,
        (rymax - cy) / b,
    )
}

/// Whether the two solid ellipses share at least one point.
///
/// The first ellipse is scaled to the unit disk, which keeps the second one
/// axis-aligned; the test then compares the distance from the origin to the
/// second ellipse against the unit radius.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_ellipse_ellipse(
    cx1: f64,
    cy1: f64,
    a1: f64,
    b1: f64,
    cx2: f64,
    cy2: f64,
    a2: f64,
    b2: f64,
) -> bool {
    if is_flat_ellipse(a1, b1) {
        let (x1, y1, x2, y2) = flat_ellipse_segment(cx1, cy1, a1, b1);
        return intersects_ellipse_segment(cx2, cy2, a2, b2, x1, y1, x2, y2);
    }
    let closest = closest_point_solid_ellipse_point(
        (cx2 - cx1) / a1,
        (cy2 - cy1) / b1,
        a2 / a1,
        b2 / b1,
        0.0,
        0.0,
    );
    closest.coords.norm_squared() <= 1.0
}

/// Projection interval of the vertices on `axis`.
fn project_on_axis(vertices: &[Point2], axis: &Vector2) -> (f64, f64) {
    vertices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        let d = v.coords.dot(axis);
        (min.min(d), max.max(d))
    })
}

/// Candidate separating axes: edge normals and edge directions.
///
/// Normals alone decide non-degenerate convex polygons; directions settle
/// flat polygons lying on a common line.
fn separating_axes(vertices: &[Point2]) -> impl Iterator<Item = Vector2> + '_ {
    let n = vertices.len();
    (0..n).flat_map(move |i| {
        let d = vertices[(i + 1) % n] - vertices[i];
        [Vector2::new(-d.y, d.x), d]
    })
}

/// Whether the two closed convex polygons share at least one point
/// (separating axis theorem).
#[must_use]
pub fn intersects_convex_polygon_convex_polygon(a: &[Point2], b: &[Point2]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let mut tested = false;
    for axis in separating_axes(a).chain(separating_axes(b)) {
        if axis.norm_squared() == 0.0 {
            continue;
        }
        tested = true;
        let (amin, amax) = project_on_axis(a, &axis);
        let (bmin, bmax) = project_on_axis(b, &axis);
        if amax < bmin || bmax < amin {
            return false;
        }
    }
    // Without any axis both polygons collapse onto single points.
    tested || a[0] == b[0]
}

/// Whether the segment meets the closed convex polygon.
#[must_use]
pub fn intersects_convex_polygon_segment(vertices: &[Point2], x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    intersects_convex_polygon_convex_polygon(vertices, &[Point2::new(x1, y1), Point2::new(x2, y2)])
}

/// Whether the rectangle meets the closed convex polygon.
#[must_use]
pub fn intersects_convex_polygon_rectangle(
    vertices: &[Point2],
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
) -> bool {
    let corners = [
        Point2::new(rxmin, rymin),
        Point2::new(rxmax, rymin),
        Point2::new(rxmax, rymax),
        Point2::new(rxmin, rymax),
    ];
    intersects_convex_polygon_convex_polygon(vertices, &corners)
}

/// Whether the disk meets the closed convex polygon.
#[must_use]
pub fn intersects_convex_polygon_circle(vertices: &[Point2], cx: f64, cy: f64, radius: f64) -> bool {
    if vertices.is_empty() {
        return false;
    }
    let center = Point2::new(cx, cy);
    let closest = closest_point_convex_polygon_point(vertices, &center);
    (closest - center).norm_squared() <= radius * radius
}

/// Whether the solid ellipse meets the closed convex polygon.
#[must_use]
pub fn intersects_convex_polygon_ellipse(vertices: &[Point2], cx: f64, cy: f64, a: f64, b: f64) -> bool {
    if is_flat_ellipse(a, b) {
        let (x1, y1, x2, y2) = flat_ellipse_segment(cx, cy, a, b);
        return intersects_convex_polygon_segment(vertices, x1, y1, x2, y2);
    }
    let scaled: Vec<Point2> = vertices
        .iter()
        .map(|v| Point2::new((v.x - cx) / a, (v.y - cy) / b))
        .collect();
    intersects_convex_polygon_circle(&scaled, 0.0, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn line_line_perpendicular() {
        let u = line_line_intersection_factor(0.0, 0.0, 1.0, 0.0, 0.5, -1.0, 0.5, 1.0);
        assert_abs_diff_eq!(u.unwrap_or(f64::NAN), 0.5);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        assert!(line_line_intersection_factor(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0).is_none());
        assert!(line_line_intersection_point(0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0).is_none());
    }

    #[test]
    fn line_line_outside_segments() {
        let p = line_line_intersection_point(0.0, 0.0, 1.0, 0.0, 5.0, 1.0, 5.0, 2.0);
        assert_eq!(p, Some(Point2::new(5.0, 0.0)));
        assert!(segment_segment_intersection_factor(0.0, 0.0, 1.0, 0.0, 5.0, 1.0, 5.0, 2.0).is_none());
    }

    #[test]
    fn segment_factor_reference() {
        let u = segment_segment_intersection_factor(0.0, 0.0, 10.0, 0.0, 5.0, -5.0, 5.0, 5.0);
        assert_eq!(u, Some(0.5));
        let p = segment_segment_intersection_point(0.0, 0.0, 10.0, 0.0, 5.0, -5.0, 5.0, 5.0);
        assert_eq!(p, Some(Point2::new(5.0, 0.0)));
    }

    #[test]
    fn segment_segment_crossing() {
        assert!(intersects_segment_segment_with_ends(0.0, 0.0, 2.0, 2.0, 0.0, 2.0, 2.0, 0.0));
        assert!(intersects_segment_segment_without_ends(0.0, 0.0, 2.0, 2.0, 0.0, 2.0, 2.0, 0.0));
    }

    #[test]
    fn segment_segment_no_crossing() {
        assert!(!intersects_segment_segment_with_ends(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0));
        // Lines cross, segments do not.
        assert!(!intersects_segment_segment_with_ends(0.0, 0.0, 1.0, 0.0, 2.0, -1.0, 2.0, 1.0));
    }

    #[test]
    fn touching_ends_depend_on_variant() {
        // T-junction: the second segment ends on the first one.
        assert!(intersects_segment_segment_with_ends(0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 1.0, 1.0));
        assert!(!intersects_segment_segment_without_ends(0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 1.0, 1.0));
        // Shared end point.
        assert!(intersects_segment_segment_with_ends(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 1.0));
        assert!(!intersects_segment_segment_without_ends(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn collinear_segments() {
        assert!(intersects_segment_segment_with_ends(0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 3.0, 0.0));
        assert!(intersects_segment_segment_without_ends(0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 3.0, 0.0));
        // End to end.
        assert!(intersects_segment_segment_with_ends(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 3.0, 0.0));
        assert!(!intersects_segment_segment_without_ends(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 3.0, 0.0));
        // Disjoint on the same line.
        assert!(!intersects_segment_segment_with_ends(0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn collinear_segments_any_direction() {
        // Reversed and nested.
        assert!(intersects_segment_segment_with_ends(0.0, 0.0, 4.0, 4.0, 3.0, 3.0, 1.0, 1.0));
        // Covering both ends.
        assert!(intersects_segment_segment_with_ends(1.0, 1.0, 2.0, 2.0, 4.0, 4.0, -1.0, -1.0));
        // Beyond either end.
        assert!(!intersects_segment_segment_with_ends(0.0, 0.0, 4.0, 4.0, 6.0, 6.0, 5.0, 5.0));
        assert!(!intersects_segment_segment_with_ends(0.0, 0.0, 4.0, 4.0, -3.0, -3.0, -1.0, -1.0));
        // Touching the first end from behind.
        assert!(intersects_segment_segment_with_ends(0.0, 0.0, 4.0, 4.0, -1.0, -1.0, 0.0, 0.0));
        assert!(!intersects_segment_segment_without_ends(0.0, 0.0, 4.0, 4.0, -1.0, -1.0, 0.0, 0.0));
    }

    #[test]
    fn degenerate_segments() {
        // A point on a segment.
        assert!(intersects_segment_segment_with_ends(1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0));
        // A point beside a segment's line span.
        assert!(!intersects_segment_segment_with_ends(3.0, 0.0, 3.0, 0.0, 0.0, 0.0, 2.0, 0.0));
        // A point off the segment line.
        assert!(!intersects_segment_segment_with_ends(1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 2.0, 0.0));
        // Two distinct points.
        assert!(!intersects_segment_segment_with_ends(0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0));
        assert!(intersects_segment_segment_with_ends(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn segment_line() {
        assert!(intersects_segment_line(0.0, -1.0, 0.0, 1.0, -5.0, 0.0, -4.0, 0.0));
        assert!(!intersects_segment_line(0.0, 1.0, 1.0, 2.0, -5.0, 0.0, -4.0, 0.0));
    }

    #[test]
    fn triangle_containment_both_orientations() {
        assert!(triangle_contains_point(5.0, 8.0, -10.0, 1.0, -1.0, -2.0, 0.0, 0.0));
        assert!(!triangle_contains_point(5.0, 8.0, -10.0, 1.0, -1.0, -2.0, 11.0, 10.0));
        assert!(triangle_contains_point(5.0, 8.0, -1.0, -2.0, -10.0, 1.0, 0.0, 0.0));
        // A vertex is inside.
        assert!(triangle_contains_point(5.0, 8.0, -1.0, -2.0, -10.0, 1.0, -1.0, -2.0));
    }

    #[test]
    fn rectangles() {
        assert!(intersects_rectangle_rectangle(0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0));
        assert!(!intersects_rectangle_rectangle(0.0, 0.0, 1.0, 1.0, 1.5, 0.0, 2.0, 1.0));
        assert!(rectangle_contains_rectangle(0.0, 0.0, 4.0, 4.0, 1.0, 1.0, 2.0, 2.0));
        assert!(!rectangle_contains_rectangle(0.0, 0.0, 4.0, 4.0, 3.0, 3.0, 5.0, 5.0));
        assert!(intersects_rectangle_segment(0.0, 0.0, 1.0, 1.0, -1.0, -1.0, 2.0, 2.0));
        assert!(!intersects_rectangle_segment(0.0, 0.0, 1.0, 1.0, 2.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn circles() {
        assert!(intersects_circle_circle(0.0, 0.0, 1.0, 2.0, 0.0, 1.0));
        assert!(!intersects_circle_circle(0.0, 0.0, 1.0, 2.1, 0.0, 1.0));
        assert!(intersects_circle_rectangle(0.0, 0.0, 1.0, 0.5, 0.5, 2.0, 2.0));
        assert!(!intersects_circle_rectangle(0.0, 0.0, 1.0, 0.8, 0.8, 2.0, 2.0));
        assert!(intersects_circle_segment(0.0, 0.0, 1.0, -2.0, 1.0, 2.0, 1.0));
        assert!(!intersects_circle_segment(0.0, 0.0, 1.0, -2.0, 1.1, 2.0, 1.1));
        assert!(circle_contains_point(0.0, 0.0, 1.0, 0.6, 0.8));
    }

    #[test]
    fn ellipse_segment_reference() {
        // Ellipse [x=5, y=8, w=5, h=10].
        assert!(intersects_ellipse_segment(7.5, 13.0, 2.5, 5.0, 5.0, -4.0, 11.0, 18.0));
        assert!(!intersects_ellipse_segment(7.5, 13.0, 2.5, 5.0, 5.0, -4.0, 11.0, 13.0));
    }

    #[test]
    fn ellipse_pairs() {
        assert!(intersects_ellipse_ellipse(0.0, 0.0, 2.0, 1.0, 2.9, 0.0, 1.0, 1.0));
        assert!(!intersects_ellipse_ellipse(0.0, 0.0, 2.0, 1.0, 0.0, 3.0, 2.0, 1.5));
        assert!(intersects_ellipse_ellipse(0.0, 0.0, 2.0, 1.0, 0.0, 2.4, 2.0, 1.5));
        // One ellipse inside the other.
        assert!(intersects_ellipse_ellipse(0.0, 0.0, 5.0, 5.0, 0.5, 0.5, 1.0, 0.5));
        assert!(intersects_ellipse_rectangle(0.0, 0.0, 2.0, 1.0, 1.5, 0.0, 3.0, 1.0));
        assert!(!intersects_ellipse_rectangle(0.0, 0.0, 2.0, 1.0, 1.5, 0.8, 3.0, 1.0));
        assert!(intersects_circle_ellipse(4.0, 0.0, 2.1, 0.0, 0.0, 2.0, 1.0));
        assert!(!intersects_circle_ellipse(4.0, 0.0, 1.9, 0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn flat_ellipse_pairs() {
        assert!(intersects_ellipse_segment(0.0, 0.0, 2.0, 0.0, 1.0, -1.0, 1.0, 1.0));
        assert!(!intersects_ellipse_segment(0.0, 0.0, 2.0, 0.0, 3.0, -1.0, 3.0, 1.0));
        assert!(intersects_ellipse_ellipse(0.0, 0.0, 0.0, 2.0, 0.0, 3.0, 1.0, 1.0));
    }

    #[test]
    fn convex_polygons() {
        let tri = [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(0.0, 4.0)];
        let far = [Point2::new(3.0, 3.0), Point2::new(5.0, 3.0), Point2::new(5.0, 5.0)];
        let near = [Point2::new(2.0, 2.0), Point2::new(5.0, 3.0), Point2::new(5.0, 5.0)];
        assert!(!intersects_convex_polygon_convex_polygon(&tri, &far));
        assert!(intersects_convex_polygon_convex_polygon(&tri, &near));
        assert!(intersects_convex_polygon_segment(&tri, 1.0, 1.0, 10.0, 10.0));
        assert!(!intersects_convex_polygon_segment(&tri, 3.0, 3.0, 10.0, 10.0));
        assert!(intersects_convex_polygon_rectangle(&tri, 1.0, 1.0, 2.0, 2.0));
        assert!(!intersects_convex_polygon_rectangle(&tri, 2.5, 2.5, 3.0, 3.0));
        assert!(intersects_convex_polygon_circle(&tri, 3.0, 3.0, 1.5));
        assert!(!intersects_convex_polygon_circle(&tri, 3.0, 3.0, 1.4));
        assert!(intersects_convex_polygon_ellipse(&tri, 3.0, 3.0, 2.0, 0.5));
        assert!(!intersects_convex_polygon_ellipse(&tri, 4.0, 4.0, 2.0, 0.5));
    }

    #[test]
    fn collinear_flat_polygons() {
        let a = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let b = [Point2::new(2.0, 0.0), Point2::new(3.0, 0.0)];
        let c = [Point2::new(0.5, 0.0), Point2::new(3.0, 0.0)];
        assert!(!intersects_convex_polygon_convex_polygon(&a, &b));
        assert!(intersects_convex_polygon_convex_polygon(&a, &c));
    }

    #[test]
    fn point_polygons() {
        let a = [Point2::new(1.0, 1.0)];
        let b = [Point2::new(1.0, 1.0)];
        let c = [Point2::new(2.0, 1.0)];
        assert!(intersects_convex_polygon_convex_polygon(&a, &b));
        assert!(!intersects_convex_polygon_convex_polygon(&a, &c));
    }
}
