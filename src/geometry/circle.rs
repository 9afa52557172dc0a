use std::borrow::Cow;

use crate::error::{ensure_non_negative, Result};
use crate::factory::GeomFactory;
use crate::math::bezier_2d::CTRL_POINT_DISTANCE;
use crate::math::intersect_2d::circle_contains_point;
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::{Path, Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// A disk given by its center and a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a circle. A negative radius is stored as its absolute value.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    #[must_use]
    pub fn from_coords(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(Point2::new(cx, cy), radius)
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// Changes the radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = ensure_non_negative("radius", radius)?;
        Ok(())
    }

    /// Replaces center and radius at once.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative; the circle is left unchanged.
    pub fn set(&mut self, center: Point2, radius: f64) -> Result<()> {
        let radius = ensure_non_negative("radius", radius)?;
        self.center = center;
        self.radius = radius;
        Ok(())
    }

    /// Four cubic arcs, counter-clockwise from the rightmost point.
    pub(crate) fn commands(&self) -> Vec<Command> {
        ellipse_commands(&self.center, self.radius, self.radius)
    }
}

/// Outline of an axis-aligned ellipse as four cubic arcs.
pub(crate) fn ellipse_commands(center: &Point2, a: f64, b: f64) -> Vec<Command> {
    let (kx, ky) = (a * CTRL_POINT_DISTANCE, b * CTRL_POINT_DISTANCE);
    let (cx, cy) = (center.x, center.y);
    let p = Point2::new;
    vec![
        Command::Move(p(cx + a, cy)),
        Command::Curve(p(cx + a, cy + ky), p(cx + kx, cy + b), p(cx, cy + b)),
        Command::Curve(p(cx - kx, cy + b), p(cx - a, cy + ky), p(cx - a, cy)),
        Command::Curve(p(cx - a, cy - ky), p(cx - kx, cy - b), p(cx, cy - b)),
        Command::Curve(p(cx + kx, cy - b), p(cx + a, cy - ky), p(cx + a, cy)),
        Command::Close,
    ]
}

impl Shape2d for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Circle(self)
    }

    fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    fn contains(&self, point: &Point2) -> bool {
        circle_contains_point(self.center.x, self.center.y, self.radius, point.x, point.y)
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        let v = point - self.center;
        let d = v.norm();
        if d <= self.radius {
            return *point;
        }
        self.center + v * (self.radius / d)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        let v = self.center - point;
        let d = v.norm();
        if d == 0.0 {
            // Every border point is at the same distance.
            return self.center + Vector2::new(self.radius, 0.0);
        }
        self.center + v * (self.radius / d)
    }

    fn to_bounding_box(&self) -> Rectangle {
        let r = Vector2::new(self.radius, self.radius);
        Rectangle::from_corners(self.center - r, self.center + r)
    }

    fn translate(&mut self, vector: &Vector2) {
        self.center += vector;
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        if transform.is_translation_only() {
            let mut image = *self;
            image.translate(&transform.translation_part());
            return Shape::Circle(image);
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
