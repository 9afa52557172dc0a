use std::borrow::Cow;

use crate::error::{ensure_non_negative, Result};
use crate::factory::GeomFactory;
use crate::math::distance_2d::{closest_point_rectangle_point, farthest_point_rectangle_point};
use crate::math::intersect_2d::{rectangle_contains_point, rectangle_contains_rectangle};
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::{Parallelogram, Path, Shape, Shape2d, ShapeKind, ShapeRef};

/// An axis-aligned rectangle. Always satisfies `min <= max` on both axes.
///
/// Also serves as the bounding box type of every shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    min: Point2,
    max: Point2,
}

impl Rectangle {
    /// Creates a rectangle from its lower corner and its size.
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

    /// Creates the rectangle spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(p1: Point2, p2: Point2) -> Self {
        Self {
            min: p1.inf(&p2),
            max: p1.sup(&p2),
        }
    }

    /// Creates the rectangle spanned by two opposite corners given as coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_corners(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Smallest rectangle enclosing all `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let mut rectangle = Self {
            min: first,
            max: first,
        };
        for p in points {
            rectangle.add_point(p);
        }
        Some(rectangle)
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
    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.y
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

    /// Corners in counter-clockwise order, starting at the lower-left one.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Replaces the rectangle by the one spanned by two opposite corners.
    pub fn set_from_corners(&mut self, p1: Point2, p2: Point2) {
        *self = Self::from_corners(p1, p2);
    }

    /// Sets the lower x bound; moving it past the upper bound swaps them.
    pub fn set_min_x(&mut self, x: f64) {
        if x > self.max.x {
            self.min.x = self.max.x;
            self.max.x = x;
        } else {
            self.min.x = x;
        }
    }

    /// Sets the lower y bound; moving it past the upper bound swaps them.
    pub fn set_min_y(&mut self, y: f64) {
        if y > self.max.y {
            self.min.y = self.max.y;
            self.max.y = y;
        } else {
            self.min.y = y;
        }
    }

    /// Sets the upper x bound; moving it below the lower bound swaps them.
    pub fn set_max_x(&mut self, x: f64) {
        if x < self.min.x {
            self.max.x = self.min.x;
            self.min.x = x;
        } else {
            self.max.x = x;
        }
    }

    /// Sets the upper y bound; moving it below the lower bound swaps them.
    pub fn set_max_y(&mut self, y: f64) {
        if y < self.min.y {
            self.max.y = self.min.y;
            self.min.y = y;
        } else {
            self.max.y = y;
        }
    }

    /// Changes the width, keeping the lower x bound.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is negative.
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        let width = ensure_non_negative("width", width)?;
        self.max.x = self.min.x + width;
        Ok(())
    }

    /// Changes the height, keeping the lower y bound.
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is negative.
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        let height = ensure_non_negative("height", height)?;
        self.max.y = self.min.y + height;
        Ok(())
    }

    /// Smallest rectangle enclosing both rectangles.
    #[must_use]
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Common part of both rectangles, if they overlap or touch.
    #[must_use]
    pub fn intersection(&self, other: &Rectangle) -> Option<Rectangle> {
        let min = self.min.sup(&other.min);
        let max = self.max.inf(&other.max);
        (min.x <= max.x && min.y <= max.y).then_some(Self { min, max })
    }

    /// Grows the rectangle to include `point`.
    pub fn add_point(&mut self, point: &Point2) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Moves every side outwards by `dx` horizontally and `dy` vertically.
    ///
    /// Negative amounts shrink the rectangle; an axis shrunk past its center
    /// collapses onto the center.
    pub fn inflate(&mut self, dx: f64, dy: f64) {
        let center = self.center();
        self.min.x -= dx;
        self.max.x += dx;
        if self.min.x > self.max.x {
            self.min.x = center.x;
            self.max.x = center.x;
        }
        self.min.y -= dy;
        self.max.y += dy;
        if self.min.y > self.max.y {
            self.min.y = center.y;
            self.max.y = center.y;
        }
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

impl Shape2d for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Rectangle(self)
    }

    fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    fn contains(&self, point: &Point2) -> bool {
        rectangle_contains_point(self.min.x, self.min.y, self.max.x, self.max.y, point.x, point.y)
    }

    fn contains_rectangle(&self, rectangle: &Rectangle) -> bool {
        rectangle_contains_rectangle(
            self.min.x,
            self.min.y,
            self.max.x,
            self.max.y,
            rectangle.min.x,
            rectangle.min.y,
            rectangle.max.x,
            rectangle.max.y,
        )
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        closest_point_rectangle_point(self.min.x, self.min.y, self.max.x, self.max.y, point.x, point.y)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        farthest_point_rectangle_point(self.min.x, self.min.y, self.max.x, self.max.y, point.x, point.y)
    }

    fn to_bounding_box(&self) -> Rectangle {
        *self
    }

    fn translate(&mut self, vector: &Vector2) {
        self.min += vector;
        self.max += vector;
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        if transform.is_translation_only() {
            let mut image = *self;
            image.translate(&transform.translation_part());
            return Shape::Rectangle(image);
        }
        let center = transform.transform_point(&self.center());
        let half_width = transform.transform_vector(&Vector2::new(self.width() / 2.0, 0.0));
        let half_height = transform.transform_vector(&Vector2::new(0.0, self.height() / 2.0));
        match Parallelogram::from_half_axes(center, half_width, half_height) {
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
