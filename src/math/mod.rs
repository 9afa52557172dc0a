pub mod bezier_2d;
pub mod crossings_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod predicates_2d;
pub mod transform_2d;
pub mod vector_2d;

pub use transform_2d::Transform2d;
pub use vector_2d::{Point2Ext, Vector2Ext};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous matrix backing 2D affine transforms.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns whether `value` is zero within [`TOLERANCE`].
#[must_use]
pub fn is_epsilon_zero(value: f64) -> bool {
    value.abs() <= TOLERANCE
}

/// Returns whether `a` and `b` are equal within [`TOLERANCE`].
#[must_use]
pub fn is_epsilon_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Size of the unit in the last place of `value`.
#[must_use]
pub fn ulp(value: f64) -> f64 {
    let magnitude = value.abs();
    if !magnitude.is_finite() {
        return f64::NAN;
    }
    let next = f64::from_bits(magnitude.to_bits() + 1);
    next - magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulp_of_one_is_machine_epsilon() {
        assert!((ulp(1.0) - f64::EPSILON).abs() < f64::MIN_POSITIVE);
        assert!((ulp(-1.0) - f64::EPSILON).abs() < f64::MIN_POSITIVE);
    }

    #[test]
    fn ulp_of_zero_is_smallest_subnormal() {
        assert!(ulp(0.0) > 0.0);
        assert!(ulp(0.0) < f64::MIN_POSITIVE);
    }

    #[test]
    fn epsilon_helpers() {
        assert!(is_epsilon_zero(1e-12));
        assert!(!is_epsilon_zero(1e-6));
        assert!(is_epsilon_equal(1.0, 1.0 + 1e-11));
        assert!(!is_epsilon_equal(1.0, 1.0001));
    }
}
