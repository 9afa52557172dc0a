use std::borrow::Cow;

use crate::error::{ensure_non_negative, GeometryError, Result};
use crate::factory::GeomFactory;
use crate::math::distance_2d::{
    closest_point_convex_polygon_point, convex_polygon_contains_point, farthest_point_polygon_point,
};
use crate::math::{Point2, Transform2d, Vector2, Vector2Ext, TOLERANCE};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::{Path, Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// A solid parallelogram: a center, two non-collinear unit axes and the
/// half-length along each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallelogram {
    center: Point2,
    first_axis: Vector2,
    first_extent: f64,
    second_axis: Vector2,
    second_extent: f64,
}

impl Parallelogram {
    /// Creates a parallelogram. The axes are normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if an axis is null,
    /// [`GeometryError::NegativeValue`] if an extent is negative, and
    /// [`GeometryError::Degenerate`] if the axes are collinear.
    pub fn new(
        center: Point2,
        first_axis: Vector2,
        first_extent: f64,
        second_axis: Vector2,
        second_extent: f64,
    ) -> Result<Self> {
        let first_extent = ensure_non_negative("first_extent", first_extent)?;
        let second_extent = ensure_non_negative("second_extent", second_extent)?;
        let first_axis = unit_axis(&first_axis)?;
        let second_axis = unit_axis(&second_axis)?;
        if first_axis.perp_product(&second_axis).abs() <= TOLERANCE {
            return Err(GeometryError::Degenerate("parallelogram axes are collinear".into()).into());
        }
        Ok(Self {
            center,
            first_axis,
            first_extent,
            second_axis,
            second_extent,
        })
    }

    /// Creates a parallelogram from its center and two half-axis vectors
    /// whose lengths are the extents.
    ///
    /// # Errors
    ///
    /// Same as [`Parallelogram::new`].
    pub fn from_half_axes(center: Point2, first: Vector2, second: Vector2) -> Result<Self> {
        Self::new(center, first, first.norm(), second, second.norm())
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn first_axis(&self) -> &Vector2 {
        &self.first_axis
    }

    #[must_use]
    pub fn first_extent(&self) -> f64 {
        self.first_extent
    }

    #[must_use]
    pub fn second_axis(&self) -> &Vector2 {
        &self.second_axis
    }

    #[must_use]
    pub fn second_extent(&self) -> f64 {
        self.second_extent
    }

    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// Corners, starting at `center - first - second` and going through
    /// `center + first - second`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let u = self.first_axis * self.first_extent;
        let v = self.second_axis * self.second_extent;
        let c = self.center;
        [c - u - v, c + u - v, c + u + v, c - u + v]
    }

    /// Transforms the parallelogram in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform flattens the parallelogram onto a
    /// line; the shape is then left unchanged.
    pub fn transform(&mut self, transform: &Transform2d) -> Result<()> {
        *self = self.transformed(transform)?;
        Ok(())
    }

    fn transformed(&self, transform: &Transform2d) -> Result<Self> {
        Self::from_half_axes(
            transform.transform_point(&self.center),
            transform.transform_vector(&(self.first_axis * self.first_extent)),
            transform.transform_vector(&(self.second_axis * self.second_extent)),
        )
    }

    pub(crate) fn commands(&self) -> Vec<Command> {
        let [a, b, c, d] = self.corners();
        vec![
            Command::Move(a),
            Command::Line(b),
            Command::Line(c),
            Command::Line(d),
            Command::Close,
        ]
    }
}

fn unit_axis(axis: &Vector2) -> Result<Vector2> {
    axis.try_normalize(0.0).ok_or_else(|| GeometryError::ZeroVector.into())
}

impl Shape2d for Parallelogram {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Parallelogram
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Parallelogram(self)
    }

    fn is_empty(&self) -> bool {
        self.first_extent <= 0.0 || self.second_extent <= 0.0
    }

    fn contains(&self, point: &Point2) -> bool {
        convex_polygon_contains_point(&self.corners(), point)
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        closest_point_convex_polygon_point(&self.corners(), point)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        farthest_point_polygon_point(&self.corners(), point)
    }

    fn to_bounding_box(&self) -> Rectangle {
        let u = self.first_axis * self.first_extent;
        let v = self.second_axis * self.second_extent;
        let half = Vector2::new(u.x.abs() + v.x.abs(), u.y.abs() + v.y.abs());
        Rectangle::from_corners(self.center - half, self.center + half)
    }

    fn translate(&mut self, vector: &Vector2) {
        self.center += vector;
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        match self.transformed(transform) {
            Ok(image) => Shape::Parallelogram(image),
            Err(_) => Shape::Path(Path::from_path_iterator(self.path_iterator(Some(transform)))),
        }
    }

    fn path_iterator_with_factory<'a>(
        &'a self,
        transform: Option<&Transform2d>,
        factory: &'a dyn GeomFactory,
    ) -> Box<dyn PathIterator + 'a> {
        Box::new(ShapePathIterator::new(
            Cow::Owned(self.commands()),
            WindingRule::NonZero,
            transform,
            factory,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::EuclisError;

    fn sheared() -> Parallelogram {
        Parallelogram::from_half_axes(Point2::new(0.0, 0.0), Vector2::new(2.0, 0.0), Vector2::new(1.0, 1.0))
            .unwrap()
    }

    #[test]
    fn invalid_axes_are_rejected() {
        let c = Point2::origin();
        assert!(matches!(
            Parallelogram::new(c, Vector2::zeros(), 1.0, Vector2::y(), 1.0),
            Err(EuclisError::Geometry(GeometryError::ZeroVector))
        ));
        assert!(matches!(
            Parallelogram::new(c, Vector2::x(), 1.0, Vector2::new(-2.0, 0.0), 1.0),
            Err(EuclisError::Geometry(GeometryError::Degenerate(_)))
        ));
        assert!(Parallelogram::new(c, Vector2::x(), -1.0, Vector2::y(), 1.0).is_err());
    }

    #[test]
    fn corners_and_containment() {
        let p = sheared();
        let [a, b, c, d] = p.corners();
        assert_abs_diff_eq!(a.x, -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.y, 1.0, epsilon = 1e-12);
        assert!(p.contains(&Point2::new(2.0, 0.5)));
        assert!(!p.contains(&Point2::new(-2.0, 0.5)));
    }

    #[test]
    fn bounding_box() {
        let bb = sheared().to_bounding_box();
        assert_abs_diff_eq!(bb.min_x(), -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max_x(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.min_y(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max_y(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn closest_and_farthest() {
        let p = sheared();
        let inside = Point2::new(0.5, 0.0);
        assert_eq!(p.closest_point_to(&inside), inside);
        let c = p.closest_point_to(&Point2::new(0.0, 3.0));
        assert_abs_diff_eq!(c.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-12);
        let f = p.farthest_point_to(&Point2::new(5.0, 2.0));
        assert_abs_diff_eq!(f.x, -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn transform_in_place() {
        let mut p = sheared();
        p.transform(&Transform2d::scale(2.0, 2.0)).unwrap();
        assert_abs_diff_eq!(p.first_extent(), 4.0, epsilon = 1e-12);
        let before = p;
        assert!(p.transform(&Transform2d::scale(1.0, 0.0)).is_err());
        assert_eq!(p, before);
    }

    #[test]
    fn flattening_transform_yields_path() {
        let image = sheared().create_transformed_shape(&Transform2d::scale(1.0, 0.0));
        assert_eq!(image.kind(), ShapeKind::Path);
    }
}
