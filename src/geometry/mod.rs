//! Typed 2D shapes sharing the [`Shape2d`] capability contract.

mod circle;
mod ellipse;
mod intersect;
mod multi_shape;
mod oriented_rectangle;
mod parallelogram;
mod path;
mod rectangle;
mod round_rectangle;
mod segment;
mod shape;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use multi_shape::{MultiShape, ShapeId};
pub use oriented_rectangle::OrientedRectangle;
pub use parallelogram::Parallelogram;
pub use path::Path;
pub use rectangle::Rectangle;
pub use round_rectangle::RoundRectangle;
pub use segment::Segment;
pub use shape::Shape;
pub use triangle::Triangle;

use std::fmt;

use crate::factory::{DefaultGeomFactory, GeomFactory};
use crate::math::{Point2, Point2Ext, Transform2d, Vector2};
use crate::path::PathIterator;

/// Discriminant of the ten shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
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
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Segment => "segment",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
            Self::RoundRectangle => "round rectangle",
            Self::OrientedRectangle => "oriented rectangle",
            Self::Parallelogram => "parallelogram",
            Self::Path => "path",
            Self::MultiShape => "multi-shape",
        };
        f.write_str(name)
    }
}

/// Borrowed view of any concrete shape, used for pairwise dispatch.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Segment(&'a Segment),
    Rectangle(&'a Rectangle),
    Circle(&'a Circle),
    Ellipse(&'a Ellipse),
    Triangle(&'a Triangle),
    RoundRectangle(&'a RoundRectangle),
    OrientedRectangle(&'a OrientedRectangle),
    Parallelogram(&'a Parallelogram),
    Path(&'a Path),
    MultiShape(&'a MultiShape),
}

impl<'a> ShapeRef<'a> {
    /// Kind of the referenced shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.as_shape().kind()
    }

    /// The referenced shape as a trait object.
    #[must_use]
    pub fn as_shape(&self) -> &'a dyn Shape2d {
        match *self {
            Self::Segment(s) => s,
            Self::Rectangle(s) => s,
            Self::Circle(s) => s,
            Self::Ellipse(s) => s,
            Self::Triangle(s) => s,
            Self::RoundRectangle(s) => s,
            Self::OrientedRectangle(s) => s,
            Self::Parallelogram(s) => s,
            Self::Path(s) => s,
            Self::MultiShape(s) => s,
        }
    }
}

/// Capabilities shared by every 2D shape.
///
/// Shapes are closed point sets: borders belong to the shape, and touching
/// shapes intersect.
pub trait Shape2d {
    /// Kind of the shape.
    fn kind(&self) -> ShapeKind;

    /// Borrowed view used for pairwise dispatch.
    fn as_shape_ref(&self) -> ShapeRef<'_>;

    /// Whether the shape has zero measure (zero radius, coincident ends, ...).
    fn is_empty(&self) -> bool;

    /// Whether the shape contains the point.
    fn contains(&self, point: &Point2) -> bool;

    /// Whether the shape fully contains the rectangle.
    ///
    /// The default checks the four corners, which is exact for convex shapes.
    fn contains_rectangle(&self, rectangle: &Rectangle) -> bool {
        rectangle.corners().iter().all(|corner| self.contains(corner))
    }

    /// Point of the shape closest to `point`; points inside are returned as is.
    fn closest_point_to(&self, point: &Point2) -> Point2;

    /// Point of the shape farthest from `point`.
    fn farthest_point_to(&self, point: &Point2) -> Point2;

    /// Squared Euclidean distance to `point`; zero inside.
    fn distance_squared(&self, point: &Point2) -> f64 {
        (self.closest_point_to(point) - point).norm_squared()
    }

    /// Euclidean distance to `point`; zero inside.
    fn distance(&self, point: &Point2) -> f64 {
        self.distance_squared(point).sqrt()
    }

    /// Manhattan distance between `point` and its closest point.
    fn distance_l1(&self, point: &Point2) -> f64 {
        self.closest_point_to(point).distance_l1(point)
    }

    /// Chebyshev distance between `point` and its closest point.
    fn distance_linf(&self, point: &Point2) -> f64 {
        self.closest_point_to(point).distance_linf(point)
    }

    /// Smallest axis-aligned rectangle enclosing the shape.
    fn to_bounding_box(&self) -> Rectangle;

    /// Moves the shape by `vector`.
    fn translate(&mut self, vector: &Vector2);

    /// Image of the shape under `transform`.
    ///
    /// Pure translations keep the kind; other transforms may change it (a
    /// rotated rectangle becomes a parallelogram, a sheared circle a path).
    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape;

    /// Outline of the shape, built with `factory`, optionally transformed.
    fn path_iterator_with_factory<'a>(
        &'a self,
        transform: Option<&Transform2d>,
        factory: &'a dyn GeomFactory,
    ) -> Box<dyn PathIterator + 'a>;

    /// Outline of the shape, optionally transformed.
    fn path_iterator(&self, transform: Option<&Transform2d>) -> Box<dyn PathIterator + '_> {
        self.path_iterator_with_factory(transform, &DefaultGeomFactory)
    }

    /// Whether the two shapes share at least one point. Symmetric.
    fn intersects(&self, other: &dyn Shape2d) -> bool {
        intersect::intersects(self.as_shape_ref(), other.as_shape_ref())
    }
}
