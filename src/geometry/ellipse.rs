use std::borrow::Cow;

use crate::error::{ensure_non_negative, Result};
use crate::factory::GeomFactory;
use crate::math::distance_2d::{
    closest_point_shallow_ellipse_point, closest_point_solid_ellipse_point, ellipse_contains_point,
    farthest_point_ellipse_point,
};
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::circle::ellipse_commands;
use super::{Path, Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// An axis-aligned solid ellipse, stored as its bounding corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    min: Point2,
    max: Point2,
}

impl Ellipse {
    /// Creates the ellipse inscribed in the rectangle with lower corner
    /// `(x, y)` and the given size.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        let width = ensure_non_negative("width", width)?;
        let height = ensure_non_negative("height", height)?;
        Ok(Self {
            min: Point2::new(x, y),
            max: Point2::new(x + width, y + height),
        })
    }

    /// Like [`Ellipse::new`], but a negative size extends the ellipse towards
    /// lower coordinates instead of failing.
    #[must_use]
    pub fn with_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Point2::new(x, y), Point2::new(x + width, y + height))
    }

    /// Creates the ellipse inscribed in the rectangle spanned by two corners.
    #[must_use]
    pub fn from_corners(p1: Point2, p2: Point2) -> Self {
        Self {
            min: p1.inf(&p2),
            max: p1.sup(&p2),
        }
    }

    /// Creates an ellipse from its center and its semi-axes, taken as absolute values.
    #[must_use]
    pub fn from_center(center: Point2, semi_x: f64, semi_y: f64) -> Self {
        let half = Vector2::new(semi_x.abs(), semi_y.abs());
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[must_use]
    pub fn min(&self) -> &Point2 {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &Point2 {
        &self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Horizontal and vertical semi-axes.
    #[must_use]
    pub fn semi_axes(&self) -> (f64, f64) {
        (self.width() / 2.0, self.height() / 2.0)
    }

    /// Replaces the ellipse by the one inscribed in the rectangle spanned by two corners.
    pub fn set_from_corners(&mut self, p1: Point2, p2: Point2) {
        *self = Self::from_corners(p1, p2);
    }

    /// Changes the width, keeping the left side.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is negative.
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        let width = ensure_non_negative("width", width)?;
        self.max.x = self.min.x + width;
        Ok(())
    }

    /// Changes the height, keeping the bottom side.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is negative.
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        let height = ensure_non_negative("height", height)?;
        self.max.y = self.min.y + height;
        Ok(())
    }

    /// Closest point on the outline, even for points inside the ellipse.
    #[must_use]
    pub fn closest_point_shallow(&self, point: &Point2) -> Point2 {
        let c = self.center();
        let (a, b) = self.semi_axes();
        closest_point_shallow_ellipse_point(c.x, c.y, a, b, point.x, point.y)
    }

    pub(crate) fn commands(&self) -> Vec<Command> {
        let (a, b) = self.semi_axes();
        ellipse_commands(&self.center(), a, b)
    }
}

impl Shape2d for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Ellipse(self)
    }

    fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    fn contains(&self, point: &Point2) -> bool {
        let c = self.center();
        let (a, b) = self.semi_axes();
        ellipse_contains_point(c.x, c.y, a, b, point.x, point.y)
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        let c = self.center();
        let (a, b) = self.semi_axes();
        closest_point_solid_ellipse_point(c.x, c.y, a, b, point.x, point.y)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        let c = self.center();
        let (a, b) = self.semi_axes();
        farthest_point_ellipse_point(c.x, c.y, a, b, point.x, point.y)
    }

    fn to_bounding_box(&self) -> Rectangle {
        Rectangle::from_corners(self.min, self.max)
    }

    fn translate(&mut self, vector: &Vector2) {
        self.min += vector;
        self.max += vector;
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        if transform.is_translation_only() {
            let mut image = *self;
            image.translate(&transform.translation_part());
            return Shape::Ellipse(image);
        }
        Shape::Path(Path::from_path_iterator(self.path_iterator(Some(transform))))
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
