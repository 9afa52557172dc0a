use std::borrow::Cow;

use nalgebra::Matrix2;

use crate::error::{ensure_non_negative, GeometryError, Result};
use crate::factory::GeomFactory;
use crate::math::{Point2, Transform2d, Vector2, Vector2Ext};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::{Parallelogram, Path, Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// A rectangle rotated in the plane: a center, a unit axis `r`, the
/// orthogonal axis `s = r⊥`, and the half-length along each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedRectangle {
    center: Point2,
    axis: Vector2,
    first_extent: f64,
    second_extent: f64,
}

impl OrientedRectangle {
    /// Creates an oriented rectangle; `axis` is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `axis` is null and
    /// [`GeometryError::NegativeValue`] if an extent is negative.
    pub fn new(center: Point2, axis: Vector2, first_extent: f64, second_extent: f64) -> Result<Self> {
        let first_extent = ensure_non_negative("first_extent", first_extent)?;
        let second_extent = ensure_non_negative("second_extent", second_extent)?;
        let axis = axis.try_normalize(0.0).ok_or(GeometryError::ZeroVector)?;
        Ok(Self {
            center,
            axis,
            first_extent,
            second_extent,
        })
    }

    /// Smallest box enclosing `points` whose axes are the principal axes of
    /// the point cloud.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `points` is empty.
    pub fn from_point_cloud<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Result<Self> {
        let points: Vec<&Point2> = points.into_iter().collect();
        if points.is_empty() {
            return Err(GeometryError::Degenerate("empty point cloud".into()).into());
        }
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let mean = points.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords) / n;
        let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
        for p in &points {
            let d = p.coords - mean;
            sxx += d.x * d.x;
            sxy += d.x * d.y;
            syy += d.y * d.y;
        }
        let eigen = Matrix2::new(sxx, sxy, sxy, syy).symmetric_eigen();
        let major = if eigen.eigenvalues[0] >= eigen.eigenvalues[1] { 0 } else { 1 };
        let axis = eigen
            .eigenvectors
            .column(major)
            .into_owned()
            .try_normalize(0.0)
            .unwrap_or_else(Vector2::x);
        let other = axis.orthogonal();

        let (mut min_r, mut max_r) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_s, mut max_s) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &points {
            let r = p.coords.dot(&axis);
            let s = p.coords.dot(&other);
            min_r = min_r.min(r);
            max_r = max_r.max(r);
            min_s = min_s.min(s);
            max_s = max_s.max(s);
        }
        let center = Point2::from(axis * ((min_r + max_r) / 2.0) + other * ((min_s + max_s) / 2.0));
        tracing::debug!(points = points.len(), ?axis, "fitted oriented rectangle");
        Ok(Self {
            center,
            axis,
            first_extent: (max_r - min_r) / 2.0,
            second_extent: (max_s - min_s) / 2.0,
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Unit vector of the first axis.
    #[must_use]
    pub fn first_axis(&self) -> &Vector2 {
        &self.axis
    }

    /// Unit vector of the second axis, a quarter turn from the first.
    #[must_use]
    pub fn second_axis(&self) -> Vector2 {
        self.axis.orthogonal()
    }

    #[must_use]
    pub fn first_extent(&self) -> f64 {
        self.first_extent
    }

    #[must_use]
    pub fn second_extent(&self) -> f64 {
        self.second_extent
    }

    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// Changes the first axis; the second follows.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `axis` is null.
    pub fn set_first_axis(&mut self, axis: Vector2) -> Result<()> {
        self.axis = axis.try_normalize(0.0).ok_or(GeometryError::ZeroVector)?;
        Ok(())
    }

    /// Changes both extents at once.
    ///
    /// # Errors
    ///
    /// Returns an error if an extent is negative; the shape is left unchanged.
    pub fn set_extents(&mut self, first_extent: f64, second_extent: f64) -> Result<()> {
        let first_extent = ensure_non_negative("first_extent", first_extent)?;
        let second_extent = ensure_non_negative("second_extent", second_extent)?;
        self.first_extent = first_extent;
        self.second_extent = second_extent;
        Ok(())
    }

    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let (u, v) = self.half_axes();
        let c = self.center;
        [c - u - v, c + u - v, c + u + v, c - u + v]
    }

    fn half_axes(&self) -> (Vector2, Vector2) {
        (self.axis * self.first_extent, self.second_axis() * self.second_extent)
    }

    /// Coordinates of `point` in the rectangle's local frame.
    fn local(&self, point: &Point2) -> (f64, f64) {
        let d = point - self.center;
        (d.dot(&self.axis), d.dot(&self.second_axis()))
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

impl Shape2d for OrientedRectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::OrientedRectangle
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::OrientedRectangle(self)
    }

    fn is_empty(&self) -> bool {
        self.first_extent <= 0.0 || self.second_extent <= 0.0
    }

    fn contains(&self, point: &Point2) -> bool {
        let (r, s) = self.local(point);
        r.abs() <= self.first_extent && s.abs() <= self.second_extent
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        let (r, s) = self.local(point);
        if r.abs() <= self.first_extent && s.abs() <= self.second_extent {
            return *point;
        }
        let r = r.clamp(-self.first_extent, self.first_extent);
        let s = s.clamp(-self.second_extent, self.second_extent);
        self.center + self.axis * r + self.second_axis() * s
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        let (r, s) = self.local(point);
        let r = if r <= 0.0 { self.first_extent } else { -self.first_extent };
        let s = if s <= 0.0 { self.second_extent } else { -self.second_extent };
        self.center + self.axis * r + self.second_axis() * s
    }

    fn to_bounding_box(&self) -> Rectangle {
        let (u, v) = self.half_axes();
        let half = Vector2::new(u.x.abs() + v.x.abs(), u.y.abs() + v.y.abs());
        Rectangle::from_corners(self.center - half, self.center + half)
    }

    fn translate(&mut self, vector: &Vector2) {
        self.center += vector;
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        if transform.is_translation_only() {
            let mut image = *self;
            image.translate(&transform.translation_part());
            return Shape::OrientedRectangle(image);
        }
        let (u, v) = self.half_axes();
        let image = Parallelogram::from_half_axes(
            transform.transform_point(&self.center),
            transform.transform_vector(&u),
            transform.transform_vector(&v),
        );
        match image {
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
