//! Factories producing points, vectors and path elements.
//!
//! Path iterators, flattening and the path builder never construct
//! coordinates directly; they go through a [`GeomFactory`] so that the
//! coordinate representation can be chosen by the caller.

use crate::math::{Point2, Vector2};
use crate::path::PathElement;

/// Default ratio used to approximate splines by line segments.
pub const DEFAULT_SPLINE_APPROXIMATION_RATIO: f64 = 0.1;

/// Creates geometric primitives for a coordinate representation.
pub trait GeomFactory {
    /// Creates a point.
    fn new_point(&self, x: f64, y: f64) -> Point2;

    /// Creates a vector.
    fn new_vector(&self, x: f64, y: f64) -> Vector2;

    /// Maximum distance between a curve and the segments approximating it.
    fn spline_approximation_ratio(&self) -> f64 {
        DEFAULT_SPLINE_APPROXIMATION_RATIO
    }

    /// Normalizes an existing point into this factory's representation.
    fn convert_point(&self, point: &Point2) -> Point2 {
        self.new_point(point.x, point.y)
    }

    /// Creates a move-to element.
    fn new_move_path_element(&self, to: &Point2) -> PathElement {
        PathElement::MoveTo {
            to: self.convert_point(to),
        }
    }

    /// Creates a line-to element.
    fn new_line_path_element(&self, from: &Point2, to: &Point2) -> PathElement {
        PathElement::LineTo {
            from: self.convert_point(from),
            to: self.convert_point(to),
        }
    }

    /// Creates a quadratic curve element.
    fn new_quad_path_element(&self, from: &Point2, ctrl: &Point2, to: &Point2) -> PathElement {
        PathElement::QuadTo {
            from: self.convert_point(from),
            ctrl: self.convert_point(ctrl),
            to: self.convert_point(to),
        }
    }

    /// Creates a cubic curve element.
    fn new_curve_path_element(
        &self,
        from: &Point2,
        ctrl1: &Point2,
        ctrl2: &Point2,
        to: &Point2,
    ) -> PathElement {
        PathElement::CurveTo {
            from: self.convert_point(from),
            ctrl1: self.convert_point(ctrl1),
            ctrl2: self.convert_point(ctrl2),
            to: self.convert_point(to),
        }
    }

    /// Creates a close element going back to the start of the sub-path.
    fn new_close_path_element(&self, from: &Point2, to: &Point2) -> PathElement {
        PathElement::Close {
            from: self.convert_point(from),
            to: self.convert_point(to),
        }
    }
}

/// Double-precision factory; coordinates are kept as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGeomFactory;

impl GeomFactory for DefaultGeomFactory {
    fn new_point(&self, x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn new_vector(&self, x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }
}

/// Factory snapping every coordinate to the nearest integer.
///
/// Useful when replaying shapes on a pixel grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerGeomFactory;

impl GeomFactory for IntegerGeomFactory {
    fn new_point(&self, x: f64, y: f64) -> Point2 {
        Point2::new(x.round(), y.round())
    }

    fn new_vector(&self, x: f64, y: f64) -> Vector2 {
        Vector2::new(x.round(), y.round())
    }

    fn spline_approximation_ratio(&self) -> f64 {
        0.5
    }
}
