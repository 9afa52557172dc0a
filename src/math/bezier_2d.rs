//! Quadratic and cubic Bézier helpers.

use super::distance_2d::distance_squared_segment_point;
use super::Point2;

/// Distance of the cubic control points from the ends when approximating a
/// quarter circle of radius 1: `4 * (sqrt(2) - 1) / 3`.
pub const CTRL_POINT_DISTANCE: f64 = 0.552_284_749_830_793_3;

/// Evaluates the quadratic curve at `t`.
#[must_use]
pub fn quad_point(p0: &Point2, p1: &Point2, p2: &Point2, t: f64) -> Point2 {
    let u = 1.0 - t;
    Point2::from(p0.coords * (u * u) + p1.coords * (2.0 * u * t) + p2.coords * (t * t))
}

/// Evaluates the cubic curve at `t`.
#[must_use]
pub fn cubic_point(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2, t: f64) -> Point2 {
    let u = 1.0 - t;
    Point2::from(
        p0.coords * (u * u * u)
            + p1.coords * (3.0 * u * u * t)
            + p2.coords * (3.0 * u * t * t)
            + p3.coords * (t * t * t),
    )
}

/// Splits the quadratic curve at `t = 0.5` (de Casteljau).
#[must_use]
pub fn split_quad(p0: &Point2, p1: &Point2, p2: &Point2) -> ([Point2; 3], [Point2; 3]) {
    let a = nalgebra::center(p0, p1);
    let b = nalgebra::center(p1, p2);
    let m = nalgebra::center(&a, &b);
    ([*p0, a, m], [m, b, *p2])
}

/// Splits the cubic curve at `t = 0.5` (de Casteljau).
#[must_use]
pub fn split_cubic(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
) -> ([Point2; 4], [Point2; 4]) {
    let a = nalgebra::center(p0, p1);
    let b = nalgebra::center(p1, p2);
    let c = nalgebra::center(p2, p3);
    let ab = nalgebra::center(&a, &b);
    let bc = nalgebra::center(&b, &c);
    let m = nalgebra::center(&ab, &bc);
    ([*p0, a, ab, m], [m, bc, c, *p3])
}

/// Squared distance of the control point from the chord.
#[must_use]
pub fn quad_flatness_squared(p0: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    distance_squared_segment_point(p0.x, p0.y, p2.x, p2.y, p1.x, p1.y)
}

/// Squared distance of the farther control point from the chord.
#[must_use]
pub fn cubic_flatness_squared(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    distance_squared_segment_point(p0.x, p0.y, p3.x, p3.y, p1.x, p1.y)
        .max(distance_squared_segment_point(p0.x, p0.y, p3.x, p3.y, p2.x, p2.y))
}

/// Parameters in `(0, 1)` where one coordinate of the quadratic curve reaches an extremum.
#[must_use]
pub fn quad_extrema_params(p0: &Point2, p1: &Point2, p2: &Point2) -> Vec<f64> {
    let mut params = Vec::with_capacity(2);
    for axis in 0..2 {
        let (a, b, c) = (p0[axis], p1[axis], p2[axis]);
        let denom = a - 2.0 * b + c;
        if denom != 0.0 {
            let t = (a - b) / denom;
            if t > 0.0 && t < 1.0 {
                params.push(t);
            }
        }
    }
    params
}

/// Parameters in `(0, 1)` where one coordinate of the cubic curve reaches an extremum.
#[must_use]
pub fn cubic_extrema_params(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> Vec<f64> {
    let mut params = Vec::with_capacity(4);
    for axis in 0..2 {
        let (v0, v1, v2, v3) = (p0[axis], p1[axis], p2[axis], p3[axis]);
        // Derivative / 3: a t^2 + b t + c.
        let a = -v0 + 3.0 * v1 - 3.0 * v2 + v3;
        let b = 2.0 * (v0 - 2.0 * v1 + v2);
        let c = v1 - v0;
        for t in quadratic_roots(a, b, c) {
            if t > 0.0 && t < 1.0 {
                params.push(t);
            }
        }
    }
    params
}

/// Real roots of `a t^2 + b t + c`, degrading to the linear case when `a` is zero.
fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < 1e-12 {
        if b.abs() < 1e-12 {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    let sqrt = disc.sqrt();
    vec![(-b - sqrt) / (2.0 * a), (-b + sqrt) / (2.0 * a)]
}

/// Exact axis-aligned bounds of the quadratic curve.
#[must_use]
pub fn quad_bounds(p0: &Point2, p1: &Point2, p2: &Point2) -> (Point2, Point2) {
    let mut min = p0.inf(p2);
    let mut max = p0.sup(p2);
    for t in quad_extrema_params(p0, p1, p2) {
        let p = quad_point(p0, p1, p2, t);
        min = min.inf(&p);
        max = max.sup(&p);
    }
    (min, max)
}

/// Exact axis-aligned bounds of the cubic curve.
#[must_use]
pub fn cubic_bounds(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2) -> (Point2, Point2) {
    let mut min = p0.inf(p3);
    let mut max = p0.sup(p3);
    for t in cubic_extrema_params(p0, p1, p2, p3) {
        let p = cubic_point(p0, p1, p2, p3, t);
        min = min.inf(&p);
        max = max.sup(&p);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn quad_evaluation_and_split() {
        let (a, b, c) = (p(0.0, 0.0), p(1.0, 2.0), p(2.0, 0.0));
        let mid = quad_point(&a, &b, &c, 0.5);
        assert_abs_diff_eq!(mid.x, 1.0);
        assert_abs_diff_eq!(mid.y, 1.0);
        let (left, right) = split_quad(&a, &b, &c);
        assert_eq!(left[2], mid);
        assert_eq!(right[0], mid);
        assert_eq!(right[2], c);
    }

    #[test]
    fn cubic_split_matches_evaluation() {
        let (a, b, c, d) = (p(0.0, 0.0), p(0.0, 3.0), p(4.0, 3.0), p(4.0, 0.0));
        let (left, _) = split_cubic(&a, &b, &c, &d);
        let mid = cubic_point(&a, &b, &c, &d, 0.5);
        assert_abs_diff_eq!(left[3].x, mid.x);
        assert_abs_diff_eq!(left[3].y, mid.y);
        // A quarter of the left half maps to t = 0.125 on the whole curve.
        let q = cubic_point(&left[0], &left[1], &left[2], &left[3], 0.25);
        let r = cubic_point(&a, &b, &c, &d, 0.125);
        assert_abs_diff_eq!(q.x, r.x, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, r.y, epsilon = 1e-12);
    }

    #[test]
    fn flatness_of_straight_curves_is_zero() {
        assert_abs_diff_eq!(quad_flatness_squared(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0)), 0.0);
        assert_abs_diff_eq!(
            cubic_flatness_squared(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, -2.0), &p(3.0, 0.0)),
            4.0
        );
    }

    #[test]
    fn quad_bounds_include_apex() {
        let (min, max) = quad_bounds(&p(0.0, 0.0), &p(1.0, 2.0), &p(2.0, 0.0));
        assert_abs_diff_eq!(min.y, 0.0);
        assert_abs_diff_eq!(max.y, 1.0);
        assert_abs_diff_eq!(max.x, 2.0);
    }

    #[test]
    fn cubic_bounds_are_tighter_than_control_points() {
        let (min, max) = cubic_bounds(&p(0.0, 0.0), &p(0.0, 4.0), &p(4.0, 4.0), &p(4.0, 0.0));
        assert_abs_diff_eq!(min.x, 0.0);
        assert_abs_diff_eq!(max.x, 4.0);
        assert_abs_diff_eq!(max.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn quarter_circle_constant() {
        let k = CTRL_POINT_DISTANCE;
        let mid = cubic_point(&p(1.0, 0.0), &p(1.0, k), &p(k, 1.0), &p(0.0, 1.0), 0.5);
        assert_abs_diff_eq!(mid.coords.norm(), 1.0, epsilon = 1e-9);
    }
}
