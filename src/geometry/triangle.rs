use std::borrow::Cow;

use crate::factory::GeomFactory;
use crate::math::distance_2d::{
    closest_point_convex_polygon_point, farthest_point_polygon_point, signed_area_polygon,
};
use crate::math::intersect_2d::triangle_contains_point;
use crate::math::predicates_2d::side_line_point;
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::{Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// A solid triangle. The vertex order is kept as given; its orientation is
/// reported by [`Triangle::is_ccw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::origin(), Point2::origin())
    }
}

impl Triangle {
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { vertices: [p1, p2, p3] }
    }

    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2), Point2::new(x3, y3))
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.vertices[0]
    }

    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.vertices[1]
    }

    #[must_use]
    pub fn p3(&self) -> &Point2 {
        &self.vertices[2]
    }

    /// Replaces the three vertices at once.
    pub fn set(&mut self, p1: Point2, p2: Point2, p3: Point2) {
        self.vertices = [p1, p2, p3];
    }

    /// Whether the vertices turn counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        let [a, b, c] = self.vertices;
        side_line_point(a.x, a.y, b.x, b.y, c.x, c.y) > 0
    }

    /// Area, positive for counter-clockwise vertices.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_polygon(&self.vertices)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).norm() + (c - b).norm() + (a - c).norm()
    }

    #[must_use]
    pub fn centroid(&self) -> Point2 {
        let [a, b, c] = self.vertices;
        Point2::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Transforms the vertices in place.
    pub fn transform(&mut self, transform: &Transform2d) {
        for v in &mut self.vertices {
            *v = transform.transform_point(v);
        }
    }

    pub(crate) fn commands(&self) -> Vec<Command> {
        let [a, b, c] = self.vertices;
        vec![Command::Move(a), Command::Line(b), Command::Line(c), Command::Close]
    }
}

impl Shape2d for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Triangle(self)
    }

    fn is_empty(&self) -> bool {
        let [a, b, c] = self.vertices;
        side_line_point(a.x, a.y, b.x, b.y, c.x, c.y) == 0
    }

    fn contains(&self, point: &Point2) -> bool {
        let [a, b, c] = self.vertices;
        triangle_contains_point(a.x, a.y, b.x, b.y, c.x, c.y, point.x, point.y)
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        closest_point_convex_polygon_point(&self.vertices, point)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        farthest_point_polygon_point(&self.vertices, point)
    }

    fn to_bounding_box(&self) -> Rectangle {
        let [a, b, c] = self.vertices;
        Rectangle::from_corners(a.inf(&b).inf(&c), a.sup(&b).sup(&c))
    }

    fn translate(&mut self, vector: &Vector2) {
        for v in &mut self.vertices {
            *v += vector;
        }
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        let mut image = *self;
        image.transform(transform);
        Shape::Triangle(image)
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
