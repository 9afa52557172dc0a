//! Pairwise intersection of shapes.
//!
//! Compound shapes are decomposed first (a multi-shape into its children, a
//! round rectangle into bands and corner ellipses). Anything involving a
//! path goes through the crossing engine. The remaining convex kinds reduce
//! to five primitives with closed-form tests, always evaluated in the same
//! argument order so that `a ∩ b` and `b ∩ a` take the same code path.

use crate::math::crossings_2d::SHAPE_INTERSECTS;
use crate::math::intersect_2d::{
    intersects_circle_circle, intersects_circle_ellipse, intersects_circle_rectangle, intersects_circle_segment,
    intersects_convex_polygon_circle, intersects_convex_polygon_convex_polygon, intersects_convex_polygon_ellipse,
    intersects_convex_polygon_rectangle, intersects_convex_polygon_segment, intersects_ellipse_ellipse,
    intersects_ellipse_rectangle, intersects_ellipse_segment, intersects_rectangle_rectangle,
    intersects_rectangle_segment, intersects_segment_segment_with_ends,
};
use crate::math::Point2;
use crate::path::crossings::{
    auto_closed_edges, crossings_from_circle, crossings_from_convex_polygon, crossings_from_edges,
    crossings_from_ellipse, crossings_from_rectangle, crossings_from_segment, CrossingMode,
};

use super::{Path, Shape2d, ShapeRef};

/// Whether the two shapes share at least one point.
pub(crate) fn intersects<'a>(a: ShapeRef<'a>, b: ShapeRef<'a>) -> bool {
    tracing::trace!(first = %a.kind(), second = %b.kind(), "intersection test");
    match (a, b) {
        (ShapeRef::MultiShape(multi), other) | (other, ShapeRef::MultiShape(multi)) => {
            multi.shapes().any(|child| intersects(child.as_shape_ref(), other))
        }
        (ShapeRef::RoundRectangle(round), other) | (other, ShapeRef::RoundRectangle(round)) => {
            let pieces = round.pieces();
            pieces.bands.iter().any(|band| intersects(ShapeRef::Rectangle(band), other))
                || pieces.corners.iter().any(|corner| intersects(ShapeRef::Ellipse(corner), other))
        }
        (ShapeRef::Path(path), other) | (other, ShapeRef::Path(path)) => path_intersects(path, other),
        (a, b) => match (Primitive::from_shape(a), Primitive::from_shape(b)) {
            (Some(p), Some(q)) => primitives_intersect(&p, &q),
            // Compound kinds never reach this point.
            _ => false,
        },
    }
}

/// Convex building blocks with closed-form pairwise tests.
enum Primitive {
    Segment(Point2, Point2),
    Rectangle(Point2, Point2),
    Circle(Point2, f64),
    Ellipse(Point2, f64, f64),
    ConvexPolygon(Vec<Point2>),
}

impl Primitive {
    fn from_shape(shape: ShapeRef<'_>) -> Option<Self> {
        let primitive = match shape {
            ShapeRef::Segment(s) => Self::Segment(*s.p1(), *s.p2()),
            ShapeRef::Rectangle(r) => Self::Rectangle(*r.min(), *r.max()),
            ShapeRef::Circle(c) => Self::Circle(*c.center(), c.radius()),
            ShapeRef::Ellipse(e) => {
                let (a, b) = e.semi_axes();
                Self::Ellipse(e.center(), a, b)
            }
            ShapeRef::Triangle(t) => Self::ConvexPolygon(t.vertices().to_vec()),
            ShapeRef::OrientedRectangle(r) => Self::ConvexPolygon(r.corners().to_vec()),
            ShapeRef::Parallelogram(p) => Self::ConvexPolygon(p.corners().to_vec()),
            ShapeRef::RoundRectangle(_) | ShapeRef::Path(_) | ShapeRef::MultiShape(_) => return None,
        };
        Some(primitive)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Segment(..) => 0,
            Self::Rectangle(..) => 1,
            Self::Circle(..) => 2,
            Self::Ellipse(..) => 3,
            Self::ConvexPolygon(_) => 4,
        }
    }
}

fn primitives_intersect(a: &Primitive, b: &Primitive) -> bool {
    use Primitive as P;

    if a.rank() > b.rank() {
        return primitives_intersect(b, a);
    }
    match (a, b) {
        (P::Segment(p, q), P::Segment(r, s)) => {
            intersects_segment_segment_with_ends(p.x, p.y, q.x, q.y, r.x, r.y, s.x, s.y)
        }
        (P::Segment(p, q), P::Rectangle(min, max)) => {
            intersects_rectangle_segment(min.x, min.y, max.x, max.y, p.x, p.y, q.x, q.y)
        }
        (P::Segment(p, q), P::Circle(c, r)) => intersects_circle_segment(c.x, c.y, *r, p.x, p.y, q.x, q.y),
        (P::Segment(p, q), P::Ellipse(c, ea, eb)) => {
            intersects_ellipse_segment(c.x, c.y, *ea, *eb, p.x, p.y, q.x, q.y)
        }
        (P::Segment(p, q), P::ConvexPolygon(v)) => intersects_convex_polygon_segment(v, p.x, p.y, q.x, q.y),

        (P::Rectangle(min, max), P::Rectangle(smin, smax)) => {
            intersects_rectangle_rectangle(min.x, min.y, max.x, max.y, smin.x, smin.y, smax.x, smax.y)
        }
        (P::Rectangle(min, max), P::Circle(c, r)) => {
            intersects_circle_rectangle(c.x, c.y, *r, min.x, min.y, max.x, max.y)
        }
        (P::Rectangle(min, max), P::Ellipse(c, ea, eb)) => {
            intersects_ellipse_rectangle(c.x, c.y, *ea, *eb, min.x, min.y, max.x, max.y)
        }
        (P::Rectangle(min, max), P::ConvexPolygon(v)) => {
            intersects_convex_polygon_rectangle(v, min.x, min.y, max.x, max.y)
        }

        (P::Circle(c1, r1), P::Circle(c2, r2)) => intersects_circle_circle(c1.x, c1.y, *r1, c2.x, c2.y, *r2),
        (P::Circle(c, r), P::Ellipse(e, ea, eb)) => intersects_circle_ellipse(c.x, c.y, *r, e.x, e.y, *ea, *eb),
        (P::Circle(c, r), P::ConvexPolygon(v)) => intersects_convex_polygon_circle(v, c.x, c.y, *r),

        // The ellipse test is not exactly symmetric in floating point; accept
        // contact found from either side.
        (P::Ellipse(c1, a1, b1), P::Ellipse(c2, a2, b2)) => {
            intersects_ellipse_ellipse(c1.x, c1.y, *a1, *b1, c2.x, c2.y, *a2, *b2)
                || intersects_ellipse_ellipse(c2.x, c2.y, *a2, *b2, c1.x, c1.y, *a1, *b1)
        }
        (P::Ellipse(c, ea, eb), P::ConvexPolygon(v)) => intersects_convex_polygon_ellipse(v, c.x, c.y, *ea, *eb),

        (P::ConvexPolygon(v), P::ConvexPolygon(w)) => intersects_convex_polygon_convex_polygon(v, w),

        // Ordered by rank above.
        _ => false,
    }
}

/// Path against any other shape.
///
/// The crossing engine finds contact with the outline and containment of the
/// other shape in the path's interior; the containment of the path in the
/// other shape is checked on the path's first point.
fn path_intersects(path: &Path, other: ShapeRef<'_>) -> bool {
    let mode = CrossingMode::AutoClose;
    let iter = path.iter(None);
    let crossings = match other {
        ShapeRef::Segment(s) => {
            let (p, q) = (s.p1(), s.p2());
            crossings_from_segment(iter, p.x, p.y, q.x, q.y, mode)
        }
        ShapeRef::Rectangle(r) => {
            let (min, max) = (r.min(), r.max());
            crossings_from_rectangle(iter, min.x, min.y, max.x, max.y, mode)
        }
        ShapeRef::Circle(c) => crossings_from_circle(iter, c.center().x, c.center().y, c.radius(), mode),
        ShapeRef::Ellipse(e) => {
            let center = e.center();
            let (a, b) = e.semi_axes();
            crossings_from_ellipse(iter, center.x, center.y, a, b, mode)
        }
        ShapeRef::Triangle(t) => crossings_from_convex_polygon(iter, t.vertices(), mode),
        ShapeRef::OrientedRectangle(r) => crossings_from_convex_polygon(iter, &r.corners(), mode),
        ShapeRef::Parallelogram(p) => crossings_from_convex_polygon(iter, &p.corners(), mode),
        ShapeRef::Path(q) => return path_path_crossing(path, q) || path_path_crossing(q, path),
        ShapeRef::RoundRectangle(_) | ShapeRef::MultiShape(_) => return intersects(other, ShapeRef::Path(path)),
    };
    if crossings == SHAPE_INTERSECTS || path.winding_rule().is_inside(crossings) {
        return true;
    }
    path.points().next().is_some_and(|start| other.as_shape().contains(&start))
}

/// Contact between the outlines, or `outline`'s first point inside `area`.
fn path_path_crossing(area: &Path, outline: &Path) -> bool {
    let Some(reference) = outline.points().next() else {
        return false;
    };
    let edges = auto_closed_edges(outline.iter(None));
    let crossings = crossings_from_edges(
        area.iter(None),
        &edges,
        &reference,
        CrossingMode::AutoClose,
    );
    crossings == SHAPE_INTERSECTS || area.winding_rule().is_inside(crossings)
}
