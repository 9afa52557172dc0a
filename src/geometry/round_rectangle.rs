use std::borrow::Cow;

use crate::error::{ensure_non_negative, Result};
use crate::factory::GeomFactory;
use crate::math::bezier_2d::CTRL_POINT_DISTANCE;
use crate::math::{Point2, Transform2d, Vector2};
use crate::path::{Command, PathIterator, ShapePathIterator, WindingRule};

use super::{Ellipse, Path, Rectangle, Shape, Shape2d, ShapeKind, ShapeRef};

/// An axis-aligned rectangle whose corners are quarter ellipses.
///
/// `arc_width` and `arc_height` are the horizontal and vertical radii of the
/// corners. They are stored as given and clamped to half the size when read,
/// so resizing the rectangle never leaves overlapping corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundRectangle {
    bounds: Rectangle,
    arc_width: f64,
    arc_height: f64,
}

/// The solid pieces a round rectangle decomposes into: two overlapping core
/// rectangles (a horizontal and a vertical band) and the four corner ellipses.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RoundRectanglePieces {
    pub(crate) bands: [Rectangle; 2],
    pub(crate) corners: [Ellipse; 4],
}

impl RoundRectangle {
    /// Creates a round rectangle with lower corner `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a size or a corner radius is negative.
    pub fn new(x: f64, y: f64, width: f64, height: f64, arc_width: f64, arc_height: f64) -> Result<Self> {
        let bounds = Rectangle::new(x, y, width, height)?;
        Self::from_bounds(bounds, arc_width, arc_height)
    }

    /// Creates a round rectangle fitting in `bounds`.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner radius is negative.
    pub fn from_bounds(bounds: Rectangle, arc_width: f64, arc_height: f64) -> Result<Self> {
        Ok(Self {
            bounds,
            arc_width: ensure_non_negative("arc_width", arc_width)?,
            arc_height: ensure_non_negative("arc_height", arc_height)?,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// Horizontal corner radius, at most half the width.
    #[must_use]
    pub fn arc_width(&self) -> f64 {
        self.arc_width.min(self.width() / 2.0)
    }

    /// Vertical corner radius, at most half the height.
    #[must_use]
    pub fn arc_height(&self) -> f64 {
        self.arc_height.min(self.height() / 2.0)
    }

    /// Changes the horizontal corner radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `arc_width` is negative.
    pub fn set_arc_width(&mut self, arc_width: f64) -> Result<()> {
        self.arc_width = ensure_non_negative("arc_width", arc_width)?;
        Ok(())
    }

    /// Changes the vertical corner radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `arc_height` is negative.
    pub fn set_arc_height(&mut self, arc_height: f64) -> Result<()> {
        self.arc_height = ensure_non_negative("arc_height", arc_height)?;
        Ok(())
    }

    /// Replaces the bounds and both radii at once.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is negative; the shape is left unchanged.
    pub fn set(&mut self, bounds: Rectangle, arc_width: f64, arc_height: f64) -> Result<()> {
        *self = Self::from_bounds(bounds, arc_width, arc_height)?;
        Ok(())
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    pub(crate) fn pieces(&self) -> RoundRectanglePieces {
        let (rx, ry) = (self.arc_width(), self.arc_height());
        let (min, max) = (*self.bounds.min(), *self.bounds.max());
        let ellipse = |cx: f64, cy: f64| Ellipse::from_center(Point2::new(cx, cy), rx, ry);
        RoundRectanglePieces {
            bands: [
                Rectangle::from_coords(min.x, min.y + ry, max.x, max.y - ry),
                Rectangle::from_coords(min.x + rx, min.y, max.x - rx, max.y),
            ],
            corners: [
                ellipse(min.x + rx, min.y + ry),
                ellipse(max.x - rx, min.y + ry),
                ellipse(max.x - rx, max.y - ry),
                ellipse(min.x + rx, max.y - ry),
            ],
        }
    }

    /// Straight sides joined by cubic corners, counter-clockwise from the
    /// bottom side.
    pub(crate) fn commands(&self) -> Vec<Command> {
        let (rx, ry) = (self.arc_width(), self.arc_height());
        let (kx, ky) = (rx * CTRL_POINT_DISTANCE, ry * CTRL_POINT_DISTANCE);
        let (min, max) = (*self.bounds.min(), *self.bounds.max());
        let p = Point2::new;
        vec![
            Command::Move(p(min.x + rx, min.y)),
            Command::Line(p(max.x - rx, min.y)),
            Command::Curve(p(max.x - rx + kx, min.y), p(max.x, min.y + ry - ky), p(max.x, min.y + ry)),
            Command::Line(p(max.x, max.y - ry)),
            Command::Curve(p(max.x, max.y - ry + ky), p(max.x - rx + kx, max.y), p(max.x - rx, max.y)),
            Command::Line(p(min.x + rx, max.y)),
            Command::Curve(p(min.x + rx - kx, max.y), p(min.x, max.y - ry + ky), p(min.x, max.y - ry)),
            Command::Line(p(min.x, min.y + ry)),
            Command::Curve(p(min.x, min.y + ry - ky), p(min.x + rx - kx, min.y), p(min.x + rx, min.y)),
            Command::Close,
        ]
    }
}

impl Shape2d for RoundRectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RoundRectangle
    }

    fn as_shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::RoundRectangle(self)
    }

    fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    fn contains(&self, point: &Point2) -> bool {
        let pieces = self.pieces();
        pieces.bands.iter().any(|band| band.contains(point))
            || pieces.corners.iter().any(|corner| corner.contains(point))
    }

    fn closest_point_to(&self, point: &Point2) -> Point2 {
        let pieces = self.pieces();
        let bands = pieces.bands.iter().map(|band| band.closest_point_to(point));
        let corners = pieces.corners.iter().map(|corner| corner.closest_point_to(point));
        bands
            .chain(corners)
            .min_by(|a, b| (a - point).norm_squared().total_cmp(&(b - point).norm_squared()))
            .unwrap_or(*point)
    }

    fn farthest_point_to(&self, point: &Point2) -> Point2 {
        self.pieces()
            .corners
            .iter()
            .map(|corner| corner.farthest_point_to(point))
            .max_by(|a, b| (a - point).norm_squared().total_cmp(&(b - point).norm_squared()))
            .unwrap_or(*point)
    }

    fn to_bounding_box(&self) -> Rectangle {
        self.bounds
    }

    fn translate(&mut self, vector: &Vector2) {
        self.bounds.translate(vector);
    }

    fn create_transformed_shape(&self, transform: &Transform2d) -> Shape {
        if transform.is_translation_only() {
            let mut image = *self;
            image.translate(&transform.translation_part());
            return Shape::RoundRectangle(image);
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn rounded() -> RoundRectangle {
        RoundRectangle::new(0.0, 0.0, 10.0, 6.0, 2.0, 2.0).unwrap()
    }

    #[test]
    fn radii_are_clamped_on_read() {
        let mut r = RoundRectangle::new(0.0, 0.0, 4.0, 2.0, 3.0, 3.0).unwrap();
        assert_abs_diff_eq!(r.arc_width(), 2.0);
        assert_abs_diff_eq!(r.arc_height(), 1.0);
        r.set_bounds(Rectangle::from_coords(0.0, 0.0, 10.0, 10.0));
        assert_abs_diff_eq!(r.arc_width(), 3.0);
        assert!(r.set_arc_width(-1.0).is_err());
        assert!(RoundRectangle::new(0.0, 0.0, 1.0, 1.0, -0.5, 0.0).is_err());
    }

    #[test]
    fn corners_are_rounded() {
        let r = rounded();
        assert!(r.contains(&Point2::new(5.0, 3.0)));
        assert!(r.contains(&Point2::new(0.0, 3.0)));
        assert!(r.contains(&Point2::new(1.0, 1.0)));
        assert!(!r.contains(&Point2::new(0.2, 0.2)));
        assert!(!r.contains(&Point2::new(11.0, 3.0)));
    }

    #[test]
    fn closest_point_on_a_corner() {
        let r = rounded();
        let c = r.closest_point_to(&Point2::new(-1.0, -1.0));
        let expected = 2.0 - 2.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(c.x, expected, epsilon = 1e-6);
        assert_abs_diff_eq!(c.y, expected, epsilon = 1e-6);
        assert_eq!(r.closest_point_to(&Point2::new(5.0, -4.0)), Point2::new(5.0, 0.0));
    }

    #[test]
    fn farthest_point_is_on_the_opposite_corner() {
        let r = rounded();
        let f = r.farthest_point_to(&Point2::new(0.0, 0.0));
        assert!(f.x > 8.0 && f.y > 4.0);
        assert!(r.distance(&f) < 1e-9);
    }

    #[test]
    fn outline_alternates_sides_and_corners() {
        let r = rounded();
        let elements: Vec<_> = r.path_iterator(None).collect();
        assert_eq!(elements.len(), 10);
        assert_eq!(elements.iter().filter(|e| e.is_curved()).count(), 4);
        assert_eq!(elements[0].to_point(), Point2::new(2.0, 0.0));
    }

    #[test]
    fn rotation_yields_path() {
        let image = rounded().create_transformed_shape(&Transform2d::rotation(0.5));
        assert_eq!(image.kind(), ShapeKind::Path);
    }
}
