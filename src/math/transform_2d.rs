use nalgebra::Affine2;

use super::{Matrix3, Point2, Vector2, TOLERANCE};

/// A 2D affine transform.
///
/// Maps `(x, y)` to `(m00 * x + m01 * y + m02, m10 * x + m11 * y + m12)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2d {
    affine: Affine2<f64>,
}

impl Default for Transform2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Affine2<f64>> for Transform2d {
    fn from(affine: Affine2<f64>) -> Self {
        Self { affine }
    }
}

impl Transform2d {
    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            affine: Affine2::identity(),
        }
    }

    /// Creates a transform from the six affine coefficients (row-major).
    #[must_use]
    pub fn from_matrix(m00: f64, m01: f64, m02: f64, m10: f64, m11: f64, m12: f64) -> Self {
        #[rustfmt::skip]
        let matrix = Matrix3::new(
            m00, m01, m02,
            m10, m11, m12,
            0.0, 0.0, 1.0,
        );
        Self {
            affine: Affine2::from_matrix_unchecked(matrix),
        }
    }

    /// A pure translation by `(dx, dy)`.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::from_matrix(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    /// A counter-clockwise rotation by `angle` radians around the origin.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_matrix(cos, -sin, 0.0, sin, cos, 0.0)
    }

    /// A scaling by `(sx, sy)` around the origin.
    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::from_matrix(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    /// A shear: `x' = x + shx * y`, `y' = shy * x + y`.
    #[must_use]
    pub fn shear(shx: f64, shy: f64) -> Self {
        Self::from_matrix(1.0, shx, 0.0, shy, 1.0, 0.0)
    }

    /// Returns the transform that applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Transform2d) -> Self {
        Self {
            affine: next.affine * self.affine,
        }
    }

    /// Returns the inverse transform, or `None` if the matrix is singular.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        self.affine.try_inverse().map(|affine| Self { affine })
    }

    /// Returns the underlying homogeneous matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        self.affine.matrix()
    }

    /// Returns the translation part of the transform.
    #[must_use]
    pub fn translation_part(&self) -> Vector2 {
        let m = self.matrix();
        Vector2::new(m[(0, 2)], m[(1, 2)])
    }

    /// Returns whether the linear part is the identity.
    #[must_use]
    pub fn is_translation_only(&self) -> bool {
        let m = self.matrix();
        (m[(0, 0)] - 1.0).abs() <= TOLERANCE
            && m[(0, 1)].abs() <= TOLERANCE
            && m[(1, 0)].abs() <= TOLERANCE
            && (m[(1, 1)] - 1.0).abs() <= TOLERANCE
    }

    /// Returns whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_translation_only() && self.translation_part().norm() <= TOLERANCE
    }

    /// Transforms a point.
    #[must_use]
    pub fn transform_point(&self, point: &Point2) -> Point2 {
        self.affine.transform_point(point)
    }

    /// Transforms a vector; the translation is ignored.
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector2) -> Vector2 {
        self.affine.transform_vector(vector)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn translation_moves_points_not_vectors() {
        let t = Transform2d::translation(2.0, -1.0);
        let p = t.transform_point(&Point2::new(1.0, 1.0));
        assert_abs_diff_eq!(p.x, 3.0);
        assert_abs_diff_eq!(p.y, 0.0);
        let v = t.transform_vector(&Vector2::new(1.0, 1.0));
        assert_abs_diff_eq!(v.x, 1.0);
        assert_abs_diff_eq!(v.y, 1.0);
        assert!(t.is_translation_only());
        assert!(!t.is_identity());
    }

    #[test]
    fn rotation_quarter_turn() {
        let t = Transform2d::rotation(FRAC_PI_2);
        let p = t.transform_point(&Point2::new(1.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
        assert!(!t.is_translation_only());
    }

    #[test]
    fn composition_order() {
        // Scale first, then translate.
        let t = Transform2d::scale(2.0, 3.0).then(&Transform2d::translation(1.0, 1.0));
        let p = t.transform_point(&Point2::new(1.0, 1.0));
        assert_abs_diff_eq!(p.x, 3.0);
        assert_abs_diff_eq!(p.y, 4.0);
    }

    #[test]
    fn inverse_round_trip() {
        let t = Transform2d::rotation(0.3)
            .then(&Transform2d::shear(0.5, 0.0))
            .then(&Transform2d::translation(4.0, -2.0));
        let inv = t.try_inverse().unwrap();
        let p = Point2::new(-1.5, 7.25);
        let back = inv.transform_point(&t.transform_point(&p));
        assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-9);
        assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-9);
    }

    #[test]
    fn singular_transform_has_no_inverse() {
        assert!(Transform2d::scale(0.0, 1.0).try_inverse().is_none());
    }

    #[test]
    fn default_is_identity() {
        assert!(Transform2d::default().is_identity());
    }
}
