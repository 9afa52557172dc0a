use slotmap::SlotMap;

use crate::error::{GeometryError, Result};
use crate::factory::GeomFactory;
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::{MultiPathIterator, PathIterator, WindingRule};

use super::{Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

slotmap::new_key_type! {
    /// Identifier of a child shape inside a [`MultiShape`].
    pub struct ShapeId;
}

/// A group of shapes acting as their union.
///
/// Children are owned by the group and addressed by generational ids, so a
/// removed child's id never resolves to a later one. Iteration follows the
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct MultiShape {
    shapes: SlotMap<ShapeId, Shape>,
    order: Vec<ShapeId>,
}

impl MultiShape {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child and returns its id.
    pub fn add(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let id = self.shapes.insert(shape.into());
        self.order.push(id);
        id
    }

    /// Removes a child and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ShapeNotFound`] if `id` is not a child.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape> {
        let shape = self.shapes.remove(id).ok_or(GeometryError::ShapeNotFound)?;
        self.order.retain(|other| *other != id);
        Ok(shape)
    }

    /// Returns a child.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ShapeNotFound`] if `id` is not a child.
    pub fn get(&self, id: ShapeId) -> Result<&Shape> {
        self.shapes.get(id).ok_or_else(|| GeometryError::ShapeNotFound.into())
    }

    /// Returns a child for modification.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ShapeNotFound`] if `id` is not a child.
    pub fn get_mut(&mut self, id: ShapeId) -> Result<&mut Shape> {
        self.shapes.get_mut(id).ok_or_else(|| GeometryError::ShapeNotFound.into())
    }

    /// Children with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> + '_ {
        self.order.iter().filter_map(|id| self.shapes.get(*id).map(|shape| (*id, shape)))
    }

    /// Children in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.iter().map(|(_, shape)| shape)
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Removes every child.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }
}

/// Picks the candidate point minimizing (or maximizing) its squared
/// distance to `point`.
fn pick(candidates: impl Iterator<Item = Point2>, point: &Point2, farthest: bool) -> Option<Point2> {
    let key = |p: &Point2| (p - point).norm_squared();
    if farthest {
        candidates.max_by(|a, b| key(a).total_cmp(&key(b)))
    } else {
        candidates.min_by(|a, b| key(a).total_cmp(&key(b)))
    }
}

impl Shape2d for MultiShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::MultiShape
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::MultiShape(self)
    }

    fn is_empty(&self) -> bool {
        self.shapes().all(Shape2d::is_empty)
    }

    fn contains(&self, point: &Point2) -> bool {
        self.shapes().any(|shape| shape.contains(point))
    }

    /// Conservative: only a rectangle fully inside one child is reported.
    fn contains_rectangle(&self, rectangle: &Rectangle) -> bool {
        self.shapes().any(|shape| shape.contains_rectangle(rectangle))
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        pick(self.shapes().map(|shape| shape.closest_point_to(point)), point, false).unwrap_or(*point)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        pick(self.shapes().map(|shape| shape.farthest_point_to(point)), point, true).unwrap_or(*point)
    }

    fn to_bounding_box(&self) -> Rectangle {
        self.shapes()
            .map(Shape2d::to_bounding_box)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default()
    }

    fn translate(&mut self, vector: &Vector2) {
        for shape in self.shapes.values_mut() {
            shape.translate(vector);
        }
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        let mut image = self.clone();
        for shape in image.shapes.values_mut() {
            *shape = shape.create_transformed_shape(transform);
        }
        Shape::MultiShape(image)
    }

    fn path_iterator_with_factory<'a>(
        &'a self,
        transform: Option<&Transform2d>,
        factory: &'a dyn GeomFactory,
    ) -> Box<dyn PathIterator + 'a> {
        let parts = self
            .shapes()
            .map(|shape| shape.path_iterator_with_factory(transform, factory))
            .collect();
        Box::new(MultiPathIterator::new(parts, WindingRule::NonZero))
    }
}
