//! Closest-point, farthest-point and distance computations on raw coordinates.

use super::predicates_2d::side_line_point;
use super::{Point2, TOLERANCE};

/// Upper bound on bisection steps when solving for ellipse extremal points.
///
/// Bisection on doubles stops as soon as the midpoint equals an end, which
/// happens long before this cap.
pub const MAX_ROOT_ITERATIONS: usize = 1100;

/// Projection factor of `(px, py)` on the line through `(x1, y1)` and `(x2, y2)`.
///
/// `0` maps to the first point and `1` to the second. Degenerate segments
/// yield `0`.
#[must_use]
pub fn segment_point_projection_factor(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return 0.0;
    }
    ((px - x1) * dx + (py - y1) * dy) / len_sq
}

/// Returns the point of the segment closest to `(px, py)`.
#[must_use]
pub fn closest_point_segment_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> Point2 {
    let t = segment_point_projection_factor(x1, y1, x2, y2, px, py).clamp(0.0, 1.0);
    Point2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1))
}

/// Returns the end of the segment farthest from `(px, py)`.
///
/// Ties resolve to the first end.
#[must_use]
pub fn farthest_point_segment_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> Point2 {
    let d1 = (px - x1).powi(2) + (py - y1).powi(2);
    let d2 = (px - x2).powi(2) + (py - y2).powi(2);
    if d2 > d1 {
        Point2::new(x2, y2)
    } else {
        Point2::new(x1, y1)
    }
}

/// Returns the squared distance from `(px, py)` to the segment.
#[must_use]
pub fn distance_squared_segment_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> f64 {
    let closest = closest_point_segment_point(x1, y1, x2, y2, px, py);
    (px - closest.x).powi(2) + (py - closest.y).powi(2)
}

/// Returns the minimum distance from `(px, py)` to the segment.
#[must_use]
pub fn distance_segment_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> f64 {
    distance_squared_segment_point(x1, y1, x2, y2, px, py).sqrt()
}

/// Returns the squared distance from `(px, py)` to the infinite line through the two points.
#[must_use]
pub fn distance_squared_line_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> f64 {
    let t = segment_point_projection_factor(x1, y1, x2, y2, px, py);
    let qx = x1 + t * (x2 - x1);
    let qy = y1 + t * (y2 - y1);
    (px - qx).powi(2) + (py - qy).powi(2)
}

/// Returns the point of the solid rectangle closest to `(px, py)`.
#[must_use]
pub fn closest_point_rectangle_point(
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    px: f64,
    py: f64,
) -> Point2 {
    Point2::new(px.clamp(rxmin, rxmax), py.clamp(rymin, rymax))
}

/// Returns the corner of the rectangle farthest from `(px, py)`.
#[must_use]
pub fn farthest_point_rectangle_point(
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    px: f64,
    py: f64,
) -> Point2 {
    let x = if px <= (rxmin + rxmax) * 0.5 { rxmax } else { rxmin };
    let y = if py <= (rymin + rymax) * 0.5 { rymax } else { rymin };
    Point2::new(x, y)
}

/// Signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_polygon(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns whether the closed convex polygon contains `p`, borders included.
///
/// The polygon may be given in either orientation. A polygon with zero area
/// contains only the points of its edges.
#[must_use]
pub fn convex_polygon_contains_point(vertices: &[Point2], p: &Point2) -> bool {
    let n = vertices.len();
    if n == 0 {
        return false;
    }
    let area = signed_area_polygon(vertices);
    if area.abs() <= TOLERANCE * TOLERANCE {
        return polygon_edges(vertices)
            .any(|(a, b)| distance_squared_segment_point(a.x, a.y, b.x, b.y, p.x, p.y) <= TOLERANCE * TOLERANCE);
    }
    let expected = if area > 0.0 { 1 } else { -1 };
    polygon_edges(vertices).all(|(a, b)| {
        let side = side_line_point(a.x, a.y, b.x, b.y, p.x, p.y);
        side == 0 || side == expected
    })
}

/// Returns the point of the solid convex polygon closest to `p`.
#[must_use]
pub fn closest_point_convex_polygon_point(vertices: &[Point2], p: &Point2) -> Point2 {
    if vertices.is_empty() || convex_polygon_contains_point(vertices, p) {
        return *p;
    }
    closest_point_polygon_boundary_point(vertices, p)
}

/// Returns the point on the polygon outline closest to `p`.
#[must_use]
pub fn closest_point_polygon_boundary_point(vertices: &[Point2], p: &Point2) -> Point2 {
    let mut best = vertices.first().copied().unwrap_or(*p);
    let mut best_dist = f64::INFINITY;
    for (a, b) in polygon_edges(vertices) {
        let candidate = closest_point_segment_point(a.x, a.y, b.x, b.y, p.x, p.y);
        let d = (candidate - p).norm_squared();
        if d < best_dist {
            best_dist = d;
            best = candidate;
        }
    }
    best
}

/// Returns the vertex farthest from `p`.
#[must_use]
pub fn farthest_point_polygon_point(vertices: &[Point2], p: &Point2) -> Point2 {
    let mut best = vertices.first().copied().unwrap_or(*p);
    let mut best_dist = f64::NEG_INFINITY;
    for v in vertices {
        let d = (v - p).norm_squared();
        if d > best_dist {
            best_dist = d;
            best = *v;
        }
    }
    best
}

/// Iterates over the closed sequence of polygon edges.
pub(crate) fn polygon_edges(vertices: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> {
    let n = vertices.len();
    (0..n).map(move |i| (&vertices[i], &vertices[(i + 1) % n]))
}

/// Returns whether the solid axis-aligned ellipse contains `(px, py)`.
///
/// `(a, b)` are the horizontal and vertical semi-axes. Flat ellipses contain
/// the points of their axis segment.
#[must_use]
pub fn ellipse_contains_point(cx: f64, cy: f64, a: f64, b: f64, px: f64, py: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    if a <= 0.0 || b <= 0.0 {
        let (hx, hy) = (a.max(0.0), b.max(0.0));
        return distance_squared_segment_point(cx - hx, cy - hy, cx + hx, cy + hy, px, py)
            <= TOLERANCE * TOLERANCE;
    }
    let nx = dx / a;
    let ny = dy / b;
    nx * nx + ny * ny <= 1.0
}

/// Closest point on the ellipse outline to `(px, py)`.
///
/// The ellipse is treated as an infinitely thin curve, so points inside are
/// projected onto the border too.
#[must_use]
pub fn closest_point_shallow_ellipse_point(cx: f64, cy: f64, a: f64, b: f64, px: f64, py: f64) -> Point2 {
    let dx = px - cx;
    let dy = py - cy;
    let sx = if dx < 0.0 { -1.0 } else { 1.0 };
    let sy = if dy < 0.0 { -1.0 } else { 1.0 };
    let (qx, qy) = if a >= b {
        closest_point_first_quadrant(a, b, dx.abs(), dy.abs())
    } else {
        let (qy, qx) = closest_point_first_quadrant(b, a, dy.abs(), dx.abs());
        (qx, qy)
    };
    Point2::new(cx + sx * qx, cy + sy * qy)
}

/// Closest point of the solid ellipse to `(px, py)`; points inside are their own closest point.
#[must_use]
pub fn closest_point_solid_ellipse_point(cx: f64, cy: f64, a: f64, b: f64, px: f64, py: f64) -> Point2 {
    if ellipse_contains_point(cx, cy, a, b, px, py) {
        return Point2::new(px, py);
    }
    closest_point_shallow_ellipse_point(cx, cy, a, b, px, py)
}

/// Farthest point of the ellipse from `(px, py)`.
#[must_use]
pub fn farthest_point_ellipse_point(cx: f64, cy: f64, a: f64, b: f64, px: f64, py: f64) -> Point2 {
    let dx = px - cx;
    let dy = py - cy;
    let sx = if dx < 0.0 { -1.0 } else { 1.0 };
    let sy = if dy < 0.0 { -1.0 } else { 1.0 };
    // The farthest point lies in the quadrant opposite to the query point.
    let (qx, qy) = if a >= b {
        farthest_point_first_quadrant(a, b, dx.abs(), dy.abs())
    } else {
        let (qy, qx) = farthest_point_first_quadrant(b, a, dy.abs(), dx.abs());
        (qx, qy)
    };
    Point2::new(cx + sx * qx, cy + sy * qy)
}

/// Closest point on the ellipse `(x/e0)^2 + (y/e1)^2 = 1` to `(y0, y1)`.
///
/// Requires `e0 >= e1 >= 0` and `y0, y1 >= 0`; the result lies in the same quadrant.
fn closest_point_first_quadrant(e0: f64, e1: f64, y0: f64, y1: f64) -> (f64, f64) {
    if e1 <= 0.0 {
        return (y0.min(e0.max(0.0)), 0.0);
    }
    if y1 > 0.0 {
        if y0 > 0.0 {
            let z0 = y0 / e0;
            let z1 = y1 / e1;
            let g = z0 * z0 + z1 * z1 - 1.0;
            if g == 0.0 {
                return (y0, y1);
            }
            let r0 = (e0 / e1).powi(2);
            let s = closest_point_root(r0, z0, z1, g);
            (r0 * y0 / (s + r0), y1 / (s + 1.0))
        } else {
            (0.0, e1)
        }
    } else {
        let numer0 = e0 * y0;
        let denom0 = e0 * e0 - e1 * e1;
        if numer0 < denom0 {
            let xde0 = numer0 / denom0;
            (e0 * xde0, e1 * (1.0 - xde0 * xde0).max(0.0).sqrt())
        } else {
            (e0, 0.0)
        }
    }
}

/// Bisection for the Lagrange parameter of the closest point.
fn closest_point_root(r0: f64, z0: f64, z1: f64, g: f64) -> f64 {
    let n0 = r0 * z0;
    let mut s0 = z1 - 1.0;
    let mut s1 = if g < 0.0 { 0.0 } else { n0.hypot(z1) - 1.0 };
    let mut s = 0.0;
    for _ in 0..MAX_ROOT_ITERATIONS {
        s = 0.5 * (s0 + s1);
        if s == s0 || s == s1 {
            return s;
        }
        let ratio0 = n0 / (s + r0);
        let ratio1 = z1 / (s + 1.0);
        let value = ratio0 * ratio0 + ratio1 * ratio1 - 1.0;
        if value > 0.0 {
            s0 = s;
        } else if value < 0.0 {
            s1 = s;
        } else {
            return s;
        }
    }
    tracing::trace!(s, "ellipse closest-point bisection hit the iteration cap");
    s
}

/// Farthest point on the ellipse `(x/e0)^2 + (y/e1)^2 = 1` from `(y0, y1)`,
/// returned with coordinates relative to the quadrant of the query point
/// (negative values lie in the opposite quadrant).
///
/// Requires `e0 >= e1 >= 0` and `y0, y1 >= 0`.
fn farthest_point_first_quadrant(e0: f64, e1: f64, y0: f64, y1: f64) -> (f64, f64) {
    if e1 <= 0.0 {
        return (-e0.max(0.0), 0.0);
    }
    if y0 <= 0.0 {
        // The query point sits on the minor axis line; the distance along the
        // outline is a concave function of the minor coordinate.
        let denom = e0 * e0 - e1 * e1;
        if denom > 0.0 && y1 * e1 <= denom {
            let y = -y1 * e1 * e1 / denom;
            let x = e0 * (1.0 - (y / e1).powi(2)).max(0.0).sqrt();
            return (x, y);
        }
        if y1 > 0.0 {
            return (0.0, -e1);
        }
        return (e0, 0.0);
    }

    // Solve sum((e_i * y_i / (s - e_i^2))^2) = 1 for s > e0^2, which is strictly decreasing.
    let g = |s: f64| {
        let t0 = e0 * y0 / (s - e0 * e0);
        let t1 = e1 * y1 / (s - e1 * e1);
        t0 * t0 + t1 * t1 - 1.0
    };
    let mut lo = e0 * e0;
    let mut hi = e0 * e0 + std::f64::consts::SQRT_2 * (e0 * y0 + e1 * y1);
    let mut s = hi;
    for _ in 0..MAX_ROOT_ITERATIONS {
        s = 0.5 * (lo + hi);
        if s == lo || s == hi {
            break;
        }
        let value = g(s);
        if value > 0.0 {
            lo = s;
        } else if value < 0.0 {
            hi = s;
        } else {
            break;
        }
    }
    let u0 = e0 * e0 * y0 / (s - e0 * e0);
    let u1 = e1 * e1 * y1 / (s - e1 * e1);
    (-u0, -u1)
}
