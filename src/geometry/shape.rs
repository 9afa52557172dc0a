use crate::factory::GeomFactory;
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::PathIterator;

use super::{
    Circle, Ellipse, MultiShape, OrientedRectangle, Parallelogram, Path, Rectangle, RoundRectangle, Segment,
    Shape2d, ShapeKind, ShapeRef, Triangle,
};

/// Owned shape of any kind.
#[derive(Debug, Clone)]
pub enum Shape {
    Segment(Segment),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    RoundRectangle(RoundRectangle),
    OrientedRectangle(OrientedRectangle),
    Parallelogram(Parallelogram),
    Path(Path),
    MultiShape(MultiShape),
}

/// Forwards an expression to the concrete shape held by a [`Shape`].
macro_rules! dispatch {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            Shape::Segment($s) => $body,
            Shape::Rectangle($s) => $body,
            Shape::Circle($s) => $body,
            Shape::Ellipse($s) => $body,
            Shape::Triangle($s) => $body,
            Shape::RoundRectangle($s) => $body,
            Shape::OrientedRectangle($s) => $body,
            Shape::Parallelogram($s) => $body,
            Shape::Path($s) => $body,
            Shape::MultiShape($s) => $body,
        }
    };
}

impl Shape {
    /// The held shape as a trait object.
    #[must_use]
    pub fn as_shape(&self) -> &dyn Shape2d {
        dispatch!(self, s => s)
    }

    /// The held shape as a mutable trait object.
    pub fn as_shape_mut(&mut self) -> &mut dyn Shape2d {
        dispatch!(self, s => s)
    }
}

impl Shape2d for Shape {
    fn kind(&self) -> ShapeKind {
        dispatch!(self, s => s.kind())
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        dispatch!(self, s => s.as_shape_ref())
    }

    fn is_empty(&self) -> bool {
        dispatch!(self, s => s.is_empty())
    }

    fn contains(&self, point: &Point2) -> bool {
        dispatch!(self, s => s.contains(point))
    }

    fn contains_rectangle(&self, rectangle: &Rectangle) -> bool {
        dispatch!(self, s => s.contains_rectangle(rectangle))
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        dispatch!(self, s => s.closest_point_to(point))
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        dispatch!(self, s => s.farthest_point_to(point))
    }

    fn distance_squared(&self, point: &Point2) -> f64 {
        dispatch!(self, s => s.distance_squared(point))
    }

    fn to_bounding_box(&self) -> Rectangle {
        dispatch!(self, s => s.to_bounding_box())
    }

    fn translate(&mut self, vector: &Vector2) {
        dispatch!(self, s => s.translate(vector));
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        dispatch!(self, s => s.create_transformed_shape(transform))
    }

    fn path_iterator_with_factory<'a>(
        &'a self,
        transform: Option<&Transform2d>,
        factory: &'a dyn GeomFactory,
    ) -> Box<dyn PathIterator + 'a> {
        dispatch!(self, s => s.path_iterator_with_factory(transform, factory))
    }
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from!(
    Segment,
    Rectangle,
    Circle,
    Ellipse,
    Triangle,
    RoundRectangle,
    OrientedRectangle,
    Parallelogram,
    Path,
    MultiShape,
);
