//! Point and vector primitives on top of `nalgebra`.
//!
//! `Point2` and `Vector2` stay distinct types: a point minus a point is a
//! vector, a point plus a vector is a point, and two points cannot be added.

use super::{Point2, Vector2, TOLERANCE};

/// Dot product of `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn dot_product(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * x2 + y1 * y2
}

/// Perpendicular (2D cross) product of `(x1, y1)` and `(x2, y2)`.
///
/// Positive when the second vector is counter-clockwise from the first.
#[must_use]
pub fn perp_product(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * y2 - y1 * x2
}

/// Signed angle in `(-pi, pi]` to rotate `(x1, y1)` onto `(x2, y2)`.
///
/// Returns `0` when either vector has zero length.
#[must_use]
pub fn signed_angle(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let len1 = x1.hypot(y1);
    let len2 = x2.hypot(y2);
    if len1 == 0.0 || len2 == 0.0 {
        return 0.0;
    }
    perp_product(x1, y1, x2, y2).atan2(dot_product(x1, y1, x2, y2))
}

/// Returns whether the two vectors are collinear within [`TOLERANCE`].
#[must_use]
pub fn is_collinear_vectors(x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    perp_product(x1, y1, x2, y2).abs() <= TOLERANCE
}

/// Returns whether the two vectors are orthogonal within [`TOLERANCE`].
#[must_use]
pub fn is_orthogonal_vectors(x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    dot_product(x1, y1, x2, y2).abs() <= TOLERANCE
}

/// Extra vector operations used throughout the kernel.
pub trait Vector2Ext {
    /// Perpendicular product `self.x * other.y - self.y * other.x`.
    fn perp_product(&self, other: &Vector2) -> f64;

    /// Signed angle from `self` to `other`, in `(-pi, pi]`.
    fn signed_angle(&self, other: &Vector2) -> f64;

    /// Returns the vector rotated counter-clockwise by `angle` radians.
    fn rotated(&self, angle: f64) -> Vector2;

    /// Returns the vector rotated counter-clockwise by a quarter turn.
    fn orthogonal(&self) -> Vector2;

    /// Returns whether `self` and `other` are collinear.
    fn is_collinear_with(&self, other: &Vector2) -> bool;

    /// Returns whether `self` and `other` are orthogonal.
    fn is_orthogonal_to(&self, other: &Vector2) -> bool;

    /// Returns whether the vector has unit length.
    fn is_unit(&self) -> bool;
}

impl Vector2Ext for Vector2 {
    fn perp_product(&self, other: &Vector2) -> f64 {
        perp_product(self.x, self.y, other.x, other.y)
    }

    fn signed_angle(&self, other: &Vector2) -> f64 {
        signed_angle(self.x, self.y, other.x, other.y)
    }

    fn rotated(&self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    fn orthogonal(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    fn is_collinear_with(&self, other: &Vector2) -> bool {
        is_collinear_vectors(self.x, self.y, other.x, other.y)
    }

    fn is_orthogonal_to(&self, other: &Vector2) -> bool {
        is_orthogonal_vectors(self.x, self.y, other.x, other.y)
    }

    fn is_unit(&self) -> bool {
        (self.norm_squared() - 1.0).abs() <= TOLERANCE
    }
}

/// Extra point operations used throughout the kernel.
pub trait Point2Ext {
    /// Manhattan distance `|dx| + |dy|`.
    fn distance_l1(&self, other: &Point2) -> f64;

    /// Chebyshev distance `max(|dx|, |dy|)`.
    fn distance_linf(&self, other: &Point2) -> f64;

    /// Returns the point moved by `(dx, dy)`.
    fn translated(&self, dx: f64, dy: f64) -> Point2;
}

impl Point2Ext for Point2 {
    fn distance_l1(&self, other: &Point2) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    fn distance_linf(&self, other: &Point2) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    fn translated(&self, dx: f64, dy: f64) -> Point2 {
        Point2::new(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn perp_sign_follows_turn_direction() {
        assert!(perp_product(1.0, 0.0, 0.0, 1.0) > 0.0);
        assert!(perp_product(0.0, 1.0, 1.0, 0.0) < 0.0);
        assert_abs_diff_eq!(perp_product(2.0, 4.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn signed_angle_quarter_turns() {
        assert_abs_diff_eq!(signed_angle(1.0, 0.0, 0.0, 1.0), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_angle(0.0, 1.0, 1.0, 0.0), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_angle(1.0, 0.0, -1.0, 0.0), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_angle(0.0, 0.0, -1.0, 0.0), 0.0);
    }

    #[test]
    fn rotation_and_orthogonal_agree() {
        let v = Vector2::new(3.0, 1.0);
        let r = v.rotated(FRAC_PI_2);
        let o = v.orthogonal();
        assert_abs_diff_eq!(r.x, o.x, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, o.y, epsilon = 1e-12);
        assert!(v.is_orthogonal_to(&o));
    }

    #[test]
    fn collinearity() {
        let v = Vector2::new(1.0, 2.0);
        assert!(v.is_collinear_with(&Vector2::new(-2.0, -4.0)));
        assert!(!v.is_collinear_with(&Vector2::new(2.0, 1.0)));
    }

    #[test]
    fn unit_detection() {
        assert!(Vector2::new(0.6, 0.8).is_unit());
        assert!(!Vector2::new(1.0, 1.0).is_unit());
    }

    #[test]
    fn l1_distance_sums_absolute_deltas() {
        // Each axis contributes its own absolute delta, summed outside any nesting.
        let a = Point2::new(1.0, -2.0);
        let b = Point2::new(-3.0, 5.0);
        assert_abs_diff_eq!(a.distance_l1(&b), 11.0);
        assert_abs_diff_eq!(a.distance_linf(&b), 7.0);
    }

    #[test]
    fn translated_point() {
        let p = Point2::new(1.0, 1.0).translated(2.0, -3.0);
        assert_abs_diff_eq!(p.x, 3.0);
        assert_abs_diff_eq!(p.y, -2.0);
    }
}
