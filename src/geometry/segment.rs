use std::borrow::Cow;

use crate::error::{GeometryError, Result};
use crate::factory::GeomFactory;
use crate::math::distance_2d::{
    closest_point_segment_point, distance_squared_segment_point, farthest_point_segment_point,
};
use crate::math::intersect_2d::{
    intersects_segment_segment_without_ends, segment_segment_intersection_point,
};
use crate::math::predicates_2d::clip_segment_to_rectangle;
use crate::math::{Point2, Transform2d, Vector2, TOLERANCE};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::{Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
}

impl Default for Segment {
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::origin())
    }
}

impl Segment {
    /// Creates a segment from its two ends.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Creates a segment from raw coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Replaces both ends at once.
    pub fn set(&mut self, p1: Point2, p2: Point2) {
        self.p1 = p1;
        self.p2 = p2;
    }

    pub fn set_p1(&mut self, p1: Point2) {
        self.p1 = p1;
    }

    pub fn set_p2(&mut self, p2: Point2) {
        self.p2 = p2;
    }

    /// Vector from the first end to the second.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2 - self.p1
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Point at parameter `t`, `0` being the first end and `1` the second.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `t` is outside `[0, 1]`.
    pub fn interpolate(&self, t: f64) -> Result<Point2> {
        if !(0.0..=1.0).contains(&t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(self.p1 + self.direction() * t)
    }

    /// Point where the two segments cross, or `None` when they are parallel or
    /// their lines meet outside either segment.
    #[must_use]
    pub fn intersection_point(&self, other: &Segment) -> Option<Point2> {
        segment_segment_intersection_point(
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, other.p1.x, other.p1.y, other.p2.x, other.p2.y,
        )
    }

    /// Whether the two segments cross in their interiors, ends excluded.
    #[must_use]
    pub fn crosses(&self, other: &Segment) -> bool {
        intersects_segment_segment_without_ends(
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, other.p1.x, other.p1.y, other.p2.x, other.p2.y,
        )
    }

    /// Part of the segment inside the rectangle.
    #[must_use]
    pub fn clip_to_rectangle(&self, rectangle: &Rectangle) -> Option<Segment> {
        let (min, max) = (rectangle.min(), rectangle.max());
        clip_segment_to_rectangle(self.p1.x, self.p1.y, self.p2.x, self.p2.y, min.x, min.y, max.x, max.y)
            .map(|(a, b)| Segment::new(a, b))
    }

    /// Transforms both ends in place.
    pub fn transform(&mut self, transform: &Transform2d) {
        self.p1 = transform.transform_point(&self.p1);
        self.p2 = transform.transform_point(&self.p2);
    }

    pub(crate) fn commands(&self) -> Vec<Command> {
        vec![Command::Move(self.p1), Command::Line(self.p2)]
    }
}

impl Shape2d for Segment {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Segment
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Segment(self)
    }

    fn is_empty(&self) -> bool {
        self.p1 == self.p2
    }

    fn contains(&self, point: &Point2) -> bool {
        distance_squared_segment_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, point.x, point.y)
            <= TOLERANCE * TOLERANCE
    }

    fn contains_rectangle(&self, rectangle: &Rectangle) -> bool {
        rectangle.is_empty() && rectangle.corners().iter().all(|c| self.contains(c))
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        closest_point_segment_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, point.x, point.y)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        farthest_point_segment_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, point.x, point.y)
    }

    fn to_bounding_box(&self) -> Rectangle {
        Rectangle::from_corners(self.p1, self.p2)
    }

    fn translate(&mut self, vector: &Vector2) {
        self.p1 += vector;
        self.p2 += vector;
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        let mut image = *self;
        image.transform(transform);
        Shape::Segment(image)
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
