use crate::error::{PathError, Result};
use crate::factory::{DefaultGeomFactory, GeomFactory};
use crate::math::bezier_2d::{cubic_bounds, quad_bounds};
use crate::math::crossings_2d::SHAPE_INTERSECTS;
use crate::math::distance_2d::closest_point_segment_point;
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::crossings::{
    auto_closed_edges, crossings_from_point, crossings_from_rectangle_interior, flattened_edges, CrossingMode,
};
use crate::path::{
    Command, FlatteningParams, FlatteningPathIterator, PathElement, PathFlags, PathIterator, StoredPathIterator,
    WindingRule,
};

use super::{Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// A general outline made of sub-paths of lines and Bézier curves, filled
/// according to its winding rule.
///
/// ```
/// use euclis::geometry::{Path, Shape2d};
/// use euclis::math::Point2;
///
/// let mut path = Path::default();
/// path.move_to(Point2::new(0.0, 0.0));
/// path.line_to(Point2::new(4.0, 0.0)).unwrap();
/// path.line_to(Point2::new(0.0, 4.0)).unwrap();
/// path.close_path().unwrap();
/// assert!(path.contains(&Point2::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<Command>,
    winding_rule: WindingRule,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new(winding_rule: WindingRule) -> Self {
        Self {
            commands: Vec::new(),
            winding_rule,
        }
    }

    /// Records every element of `iterator`, keeping its winding rule.
    #[must_use]
    pub fn from_path_iterator(iterator: impl PathIterator) -> Self {
        let winding_rule = iterator.winding_rule();
        let commands = iterator
            .map(|element| match element {
                PathElement::MoveTo { to } => Command::Move(to),
                PathElement::LineTo { to, .. } => Command::Line(to),
                PathElement::QuadTo { ctrl, to, .. } => Command::Quad(ctrl, to),
                PathElement::CurveTo { ctrl1, ctrl2, to, .. } => Command::Curve(ctrl1, ctrl2, to),
                PathElement::Close { .. } => Command::Close,
            })
            .collect();
        Self {
            commands,
            winding_rule,
        }
    }

    #[must_use]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        self.winding_rule = winding_rule;
    }

    /// Starts a new sub-path. A move-to directly following another one
    /// replaces it.
    pub fn move_to(&mut self, point: Point2) {
        if let Some(Command::Move(last)) = self.commands.last_mut() {
            *last = point;
        } else {
            self.commands.push(Command::Move(point));
        }
    }

    /// Draws a line from the current point.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no current point.
    pub fn line_to(&mut self, point: Point2) -> Result<()> {
        self.ensure_current_point()?;
        self.commands.push(Command::Line(point));
        Ok(())
    }

    /// Draws a quadratic curve from the current point.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no current point.
    pub fn quad_to(&mut self, ctrl: Point2, point: Point2) -> Result<()> {
        self.ensure_current_point()?;
        self.commands.push(Command::Quad(ctrl, point));
        Ok(())
    }

    /// Draws a cubic curve from the current point.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no current point.
    pub fn curve_to(&mut self, ctrl1: Point2, ctrl2: Point2, point: Point2) -> Result<()> {
        self.ensure_current_point()?;
        self.commands.push(Command::Curve(ctrl1, ctrl2, point));
        Ok(())
    }

    /// Closes the current sub-path. Closing twice in a row has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if the path has no current point.
    pub fn close_path(&mut self) -> Result<()> {
        self.ensure_current_point()?;
        if !matches!(self.commands.last(), Some(Command::Close)) {
            self.commands.push(Command::Close);
        }
        Ok(())
    }

    fn ensure_current_point(&self) -> Result<()> {
        if self.commands.is_empty() {
            tracing::debug!("drawing requested on a path without current point");
            return Err(PathError::MissingMoveTo.into());
        }
        Ok(())
    }

    /// Point the next drawing element starts from.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2> {
        match self.commands.last()? {
            Command::Close => self.commands.iter().rev().find_map(|c| match c {
                Command::Move(p) => Some(*p),
                _ => None,
            }),
            command => command.end_point(),
        }
    }

    /// Removes the last element; returns whether there was one.
    pub fn remove_last(&mut self) -> bool {
        self.commands.pop().is_some()
    }

    /// Moves the end point of the last element. A trailing close has no
    /// end point of its own and is left unchanged; returns whether a point moved.
    pub fn set_last_point(&mut self, point: Point2) -> bool {
        match self.commands.last_mut() {
            Some(Command::Move(p) | Command::Line(p) | Command::Quad(_, p) | Command::Curve(_, _, p)) => {
                *p = point;
                true
            }
            Some(Command::Close) | None => false,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of stored points, control points included.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.commands.iter().map(|c| c.points().len()).sum()
    }

    /// Stored points in drawing order, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.commands.iter().flat_map(Command::points)
    }

    /// Stored point at `index`, in the order of [`Path::points`].
    ///
    /// # Errors
    ///
    /// Returns [`PathError::IndexOutOfBounds`] if `index >= point_count()`.
    pub fn point_at(&self, index: usize) -> Result<Point2> {
        self.points().nth(index).ok_or_else(|| {
            PathError::IndexOutOfBounds {
                index,
                len: self.point_count(),
            }
            .into()
        })
    }

    /// Length of the flattened outline, explicit closes included.
    #[must_use]
    pub fn length(&self) -> f64 {
        flattened_edges(self.iter(None)).iter().map(|(a, b)| (b - a).norm()).sum()
    }

    #[must_use]
    pub fn is_polyline(&self) -> bool {
        self.flags().polyline
    }

    #[must_use]
    pub fn is_curved(&self) -> bool {
        self.flags().curved
    }

    #[must_use]
    pub fn is_multi_parts(&self) -> bool {
        self.flags().multi_parts
    }

    #[must_use]
    pub fn is_polygon(&self) -> bool {
        self.flags().polygon
    }

    fn flags(&self) -> PathFlags {
        PathFlags::from_commands(&self.commands)
    }

    /// Restartable iterator over the stored elements.
    #[must_use]
    pub fn iter(&self, transform: Option<&Transform2d>) -> StoredPathIterator<'_> {
        StoredPathIterator::new(&self.commands, self.winding_rule, transform, &DefaultGeomFactory)
    }

    /// Iterator over the elements with curves replaced by line segments.
    #[must_use]
    pub fn flattened_iter(&self) -> FlatteningPathIterator<'_, StoredPathIterator<'_>> {
        let iter = self.iter(None);
        let params = FlatteningParams::from_iterator(&iter);
        FlatteningPathIterator::new(iter, params, &DefaultGeomFactory)
    }

    /// Box enclosing every stored point, control points included.
    #[must_use]
    pub fn to_bounding_box_with_ctrl_points(&self) -> Rectangle {
        let points: Vec<Point2> = self.points().collect();
        Rectangle::from_points(&points).unwrap_or_default()
    }

    /// Transforms every stored point in place.
    pub fn transform(&mut self, transform: &Transform2d) {
        for command in &mut self.commands {
            *command = command.map_points(|p| transform.transform_point(p));
        }
    }
}

impl Shape2d for Path {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Path
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Path(self)
    }

    fn is_empty(&self) -> bool {
        !self.iter(None).any(|element| element.is_drawable())
    }

    fn contains(&self, point: &Point2) -> bool {
        let crossings = crossings_from_point(self.iter(None), point.x, point.y, CrossingMode::AutoClose);
        crossings == SHAPE_INTERSECTS || self.winding_rule.is_inside(crossings)
    }

    fn contains_rectangle(&self, rectangle: &Rectangle) -> bool {
        let (min, max) = (rectangle.min(), rectangle.max());
        let crossings = crossings_from_rectangle_interior(
            self.iter(None),
            min.x,
            min.y,
            max.x,
            max.y,
            CrossingMode::AutoClose,
        );
        crossings != SHAPE_INTERSECTS && self.winding_rule.is_inside_half_units(crossings)
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        if self.contains(point) {
            return *point;
        }
        let mut best = self.current_point().unwrap_or(*point);
        let mut best_distance = (best - point).norm_squared();
        for (a, b) in auto_closed_edges(self.iter(None)) {
            let candidate = closest_point_segment_point(a.x, a.y, b.x, b.y, point.x, point.y);
            let distance = (candidate - point).norm_squared();
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        let mut best = *point;
        let mut best_distance = f64::NEG_INFINITY;
        for element in self.flattened_iter() {
            let candidate = element.to_point();
            let distance = (candidate - point).norm_squared();
            if distance > best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }

    /// Exact box of the outline: curves contribute their extrema, not their
    /// control points.
    fn to_bounding_box(&self) -> Rectangle {
        let mut bounds: Option<Rectangle> = None;
        let mut include = |min: Point2, max: Point2| {
            let b = Rectangle::from_corners(min, max);
            bounds = Some(bounds.map_or(b, |r| r.union(&b)));
        };
        for element in self.iter(None) {
            match element {
                PathElement::MoveTo { to } => include(to, to),
                PathElement::LineTo { from, to } | PathElement::Close { from, to } => include(from, to),
                PathElement::QuadTo { from, ctrl, to } => {
                    let (min, max) = quad_bounds(&from, &ctrl, &to);
                    include(min, max);
                }
                PathElement::CurveTo {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => {
                    let (min, max) = cubic_bounds(&from, &ctrl1, &ctrl2, &to);
                    include(min, max);
                }
            }
        }
        bounds.unwrap_or_default()
    }

    fn translate(&mut self, vector: &Vector2) {
        for command in &mut self.commands {
            *command = command.map_points(|p| p + vector);
        }
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        let mut image = self.clone();
        image.transform(transform);
        Shape::Path(image)
    }

    fn path_iterator_with_factory<'a>(
        &'a self,
        transform: Option<&Transform2d>,
        factory: &'a dyn GeomFactory,
    ) -> Box<dyn PathIterator + 'a> {
        Box::new(StoredPathIterator::new(&self.commands, self.winding_rule, transform, factory))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::EuclisError;
    use crate::path::RestartablePathIterator;

    fn square(rule: WindingRule) -> Path {
        let mut path = Path::new(rule);
        path.move_to(Point2::new(0.0, 0.0));
        path.line_to(Point2::new(4.0, 0.0)).unwrap();
        path.line_to(Point2::new(4.0, 4.0)).unwrap();
        path.line_to(Point2::new(0.0, 4.0)).unwrap();
        path.close_path().unwrap();
        path
    }

    /// Outer square with an inner square drawn in the same direction.
    fn nested(rule: WindingRule) -> Path {
        let mut path = square(rule);
        path.move_to(Point2::new(1.0, 1.0));
        path.line_to(Point2::new(3.0, 1.0)).unwrap();
        path.line_to(Point2::new(3.0, 3.0)).unwrap();
        path.line_to(Point2::new(1.0, 3.0)).unwrap();
        path.close_path().unwrap();
        path
    }

    // ── building ──

    #[test]
    fn drawing_without_move_fails() {
        let mut path = Path::default();
        assert!(matches!(
            path.line_to(Point2::new(1.0, 1.0)),
            Err(EuclisError::Path(PathError::MissingMoveTo))
        ));
        assert!(path.close_path().is_err());
        assert!(path.quad_to(Point2::origin(), Point2::origin()).is_err());
    }

    #[test]
    fn consecutive_moves_collapse() {
        let mut path = Path::default();
        path.move_to(Point2::new(1.0, 1.0));
        path.move_to(Point2::new(2.0, 2.0));
        assert_eq!(path.element_count(), 1);
        assert_eq!(path.current_point(), Some(Point2::new(2.0, 2.0)));
    }

    #[test]
    fn point_access() {
        let mut path = Path::default();
        path.move_to(Point2::new(0.0, 0.0));
        path.quad_to(Point2::new(1.0, 2.0), Point2::new(2.0, 0.0)).unwrap();
        assert_eq!(path.point_count(), 3);
        assert_eq!(path.point_at(1).unwrap(), Point2::new(1.0, 2.0));
        assert!(matches!(
            path.point_at(3),
            Err(EuclisError::Path(PathError::IndexOutOfBounds { index: 3, len: 3 }))
        ));
        assert!(path.set_last_point(Point2::new(3.0, 0.0)));
        assert_eq!(path.current_point(), Some(Point2::new(3.0, 0.0)));
        assert!(path.remove_last());
        assert_eq!(path.point_count(), 1);
        path.clear();
        assert!(path.is_empty());
        assert!(!path.remove_last());
    }

    #[test]
    fn current_point_after_close_is_the_sub_path_start() {
        let path = square(WindingRule::NonZero);
        assert_eq!(path.current_point(), Some(Point2::new(0.0, 0.0)));
    }

    #[test]
    fn flags() {
        let closed = square(WindingRule::NonZero);
        assert!(closed.is_polygon());
        assert!(!closed.is_polyline());
        assert!(nested(WindingRule::NonZero).is_multi_parts());

        let mut open = Path::default();
        open.move_to(Point2::origin());
        open.line_to(Point2::new(1.0, 0.0)).unwrap();
        open.line_to(Point2::new(1.0, 1.0)).unwrap();
        assert!(open.is_polyline());
        open.curve_to(Point2::new(1.0, 2.0), Point2::new(2.0, 2.0), Point2::new(2.0, 1.0)).unwrap();
        assert!(open.is_curved());
        assert!(!open.is_polyline());
    }

    // ── geometry ──

    #[test]
    fn winding_rules_decide_holes() {
        let hole = Point2::new(2.0, 2.0);
        assert!(nested(WindingRule::NonZero).contains(&hole));
        assert!(!nested(WindingRule::EvenOdd).contains(&hole));
        assert!(nested(WindingRule::EvenOdd).contains(&Point2::new(0.5, 2.0)));
    }

    #[test]
    fn border_points_are_contained() {
        let path = square(WindingRule::EvenOdd);
        assert!(path.contains(&Point2::new(4.0, 2.0)));
        assert!(path.contains(&Point2::new(0.0, 0.0)));
        assert!(!path.contains(&Point2::new(4.5, 2.0)));
    }

    #[test]
    fn open_paths_are_closed_for_containment() {
        let mut path = Path::default();
        path.move_to(Point2::new(0.0, 0.0));
        path.line_to(Point2::new(4.0, 0.0)).unwrap();
        path.line_to(Point2::new(4.0, 4.0)).unwrap();
        assert!(path.contains(&Point2::new(3.0, 1.0)));
        assert!(!path.contains(&Point2::new(1.0, 3.0)));
    }

    #[test]
    fn rectangle_containment() {
        let path = square(WindingRule::NonZero);
        assert!(path.contains_rectangle(&Rectangle::from_coords(1.0, 1.0, 2.0, 2.0)));
        assert!(path.contains_rectangle(&Rectangle::from_coords(0.0, 0.0, 4.0, 4.0)));
        assert!(!path.contains_rectangle(&Rectangle::from_coords(3.0, 3.0, 5.0, 5.0)));
        assert!(!nested(WindingRule::EvenOdd).contains_rectangle(&Rectangle::from_coords(0.5, 0.5, 3.5, 3.5)));
    }

    #[test]
    fn closest_and_farthest() {
        let path = square(WindingRule::NonZero);
        assert_eq!(path.closest_point_to(&Point2::new(2.0, 2.0)), Point2::new(2.0, 2.0));
        assert_eq!(path.closest_point_to(&Point2::new(6.0, 2.0)), Point2::new(4.0, 2.0));
        assert_abs_diff_eq!(path.distance(&Point2::new(2.0, -3.0)), 3.0);
        assert_eq!(path.farthest_point_to(&Point2::new(-1.0, -1.0)), Point2::new(4.0, 4.0));
    }

    #[test]
    fn closest_point_of_open_path_uses_closing_edge() {
        let mut open = Path::default();
        open.move_to(Point2::new(0.0, 0.0));
        open.line_to(Point2::new(10.0, 0.0)).unwrap();
        open.line_to(Point2::new(10.0, 10.0)).unwrap();
        let closest = open.closest_point_to(&Point2::new(0.0, 10.0));
        assert_abs_diff_eq!(closest.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(closest.y, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(open.length(), 20.0);
    }

    #[test]
    fn bounding_boxes() {
        let mut path = Path::default();
        path.move_to(Point2::new(0.0, 0.0));
        path.quad_to(Point2::new(1.0, 2.0), Point2::new(2.0, 0.0)).unwrap();
        let exact = path.to_bounding_box();
        assert_abs_diff_eq!(exact.max_y(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(exact.max_x(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(path.to_bounding_box_with_ctrl_points().max_y(), 2.0);
        assert_eq!(Path::default().to_bounding_box(), Rectangle::default());
    }

    #[test]
    fn length_of_closed_polygon() {
        assert_abs_diff_eq!(square(WindingRule::NonZero).length(), 16.0);
    }

    #[test]
    fn transform_and_translate() {
        let mut path = square(WindingRule::NonZero);
        path.translate(&Vector2::new(1.0, 1.0));
        assert_eq!(path.to_bounding_box(), Rectangle::from_coords(1.0, 1.0, 5.0, 5.0));
        path.transform(&Transform2d::scale(2.0, 1.0));
        assert_eq!(path.to_bounding_box(), Rectangle::from_coords(2.0, 1.0, 10.0, 5.0));
    }

    #[test]
    fn stored_iterator_restarts() {
        let path = square(WindingRule::EvenOdd);
        let mut it = path.iter(None);
        let first: Vec<_> = it.by_ref().collect();
        assert!(it.next_element().is_err());
        let again: Vec<_> = it.restart_iterations().collect();
        assert_eq!(first, again);
        assert_eq!(path.iter(None).winding_rule(), WindingRule::EvenOdd);
    }

    #[test]
    fn round_trip_through_iterator() {
        let path = nested(WindingRule::EvenOdd);
        assert_eq!(Path::from_path_iterator(path.iter(None)), path);
    }
}
