//! Crossing counts accumulated over whole paths.
//!
//! Each function flattens the iterated path, feeds every edge to the matching
//! per-edge primitive of [`crate::math::crossings_2d`], and stops at the
//! first [`SHAPE_INTERSECTS`].

use crate::factory::DefaultGeomFactory;
use crate::math::crossings_2d::{
    circle_crossings_for_segment, convex_polygon_crossings_for_segment, ellipse_crossings_for_segment,
    point_crossings_for_segment, rectangle_crossings_for_segment, rectangle_interior_crossings_for_segment,
    segment_crossings_for_segment, SHAPE_INTERSECTS,
};
use crate::math::distance_2d::distance_squared_segment_point;
use crate::math::intersect_2d::intersects_segment_segment_with_ends;
use crate::math::{Point2, TOLERANCE};

use super::{FlatteningParams, FlatteningPathIterator, PathElement, PathIterator};

/// How sub-paths that are not explicitly closed take part in the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossingMode {
    /// Only the drawn edges are counted.
    Standard,
    /// Each open sub-path is closed by a virtual edge back to its start.
    #[default]
    AutoClose,
    /// Open sub-paths only report direct contact; their crossings are dropped.
    SimpleIntersectionWhenNotPolygon,
}

/// Runs `edge` over every flattened edge of `iterator`.
///
/// Returns [`SHAPE_INTERSECTS`] as soon as one edge reports it.
pub fn compute_crossings<I, F>(iterator: I, mode: CrossingMode, mut edge: F) -> i32
where
    I: PathIterator,
    F: FnMut(i32, &Point2, &Point2) -> i32,
{
    let params = FlatteningParams::from_iterator(&iterator);
    let flat = FlatteningPathIterator::new(iterator, params, &DefaultGeomFactory);
    let mut total = 0i32;
    let mut sub = 0i32;
    let mut open = false;
    let mut start = Point2::origin();
    let mut current = Point2::origin();

    let finish = |total: i32, sub: i32, open: bool, current: &Point2, start: &Point2, edge: &mut F| -> i32 {
        if !open {
            return total.saturating_add(sub);
        }
        match mode {
            CrossingMode::Standard => total.saturating_add(sub),
            CrossingMode::AutoClose => {
                let closed = if current == start { sub } else { edge(sub, current, start) };
                if closed == SHAPE_INTERSECTS {
                    SHAPE_INTERSECTS
                } else {
                    total.saturating_add(closed)
                }
            }
            CrossingMode::SimpleIntersectionWhenNotPolygon => total,
        }
    };

    for element in flat {
        match element {
            PathElement::MoveTo { to } => {
                total = finish(total, sub, open, &current, &start, &mut edge);
                if total == SHAPE_INTERSECTS {
                    return SHAPE_INTERSECTS;
                }
                sub = 0;
                open = false;
                start = to;
                current = to;
            }
            PathElement::LineTo { from, to } => {
                sub = edge(sub, &from, &to);
                if sub == SHAPE_INTERSECTS {
                    return SHAPE_INTERSECTS;
                }
                open = true;
                current = to;
            }
            PathElement::Close { from, to } => {
                if from != to {
                    sub = edge(sub, &from, &to);
                    if sub == SHAPE_INTERSECTS {
                        return SHAPE_INTERSECTS;
                    }
                }
                total = total.saturating_add(sub);
                sub = 0;
                open = false;
                current = to;
            }
            // Flattening leaves no curves behind.
            PathElement::QuadTo { .. } | PathElement::CurveTo { .. } => {}
        }
    }
    finish(total, sub, open, &current, &start, &mut edge)
}

/// Crossings of the ray leaving `(px, py)` towards `+x`.
///
/// A point lying on an edge reports [`SHAPE_INTERSECTS`].
pub fn crossings_from_point<I: PathIterator>(iterator: I, px: f64, py: f64, mode: CrossingMode) -> i32 {
    let tolerance = TOLERANCE * TOLERANCE;
    compute_crossings(iterator, mode, |crossings, a, b| {
        if distance_squared_segment_point(a.x, a.y, b.x, b.y, px, py) <= tolerance {
            return SHAPE_INTERSECTS;
        }
        crossings + point_crossings_for_segment(px, py, a.x, a.y, b.x, b.y)
    })
}

/// Crossings of the segment `(x0, y0) -> (x1, y1)` against the path.
pub fn crossings_from_segment<I: PathIterator>(
    iterator: I,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    mode: CrossingMode,
) -> i32 {
    compute_crossings(iterator, mode, |crossings, a, b| {
        segment_crossings_for_segment(crossings, x0, y0, x1, y1, a.x, a.y, b.x, b.y)
    })
}

/// Crossings of the closed rectangle against the path.
pub fn crossings_from_rectangle<I: PathIterator>(
    iterator: I,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    mode: CrossingMode,
) -> i32 {
    compute_crossings(iterator, mode, |crossings, a, b| {
        rectangle_crossings_for_segment(crossings, rxmin, rymin, rxmax, rymax, a.x, a.y, b.x, b.y)
    })
}

/// Half-unit crossings of the rectangle's open interior against the path.
pub fn crossings_from_rectangle_interior<I: PathIterator>(
    iterator: I,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
    mode: CrossingMode,
) -> i32 {
    compute_crossings(iterator, mode, |crossings, a, b| {
        rectangle_interior_crossings_for_segment(crossings, rxmin, rymin, rxmax, rymax, a.x, a.y, b.x, b.y)
    })
}

/// Crossings of the closed disk against the path.
pub fn crossings_from_circle<I: PathIterator>(iterator: I, cx: f64, cy: f64, radius: f64, mode: CrossingMode) -> i32 {
    compute_crossings(iterator, mode, |crossings, a, b| {
        circle_crossings_for_segment(crossings, cx, cy, radius, a.x, a.y, b.x, b.y)
    })
}

/// Crossings of the solid ellipse against the path.
pub fn crossings_from_ellipse<I: PathIterator>(
    iterator: I,
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    mode: CrossingMode,
) -> i32 {
    compute_crossings(iterator, mode, |crossings, p, q| {
        ellipse_crossings_for_segment(crossings, cx, cy, a, b, p.x, p.y, q.x, q.y)
    })
}

/// Crossings of the closed convex polygon against the path.
pub fn crossings_from_convex_polygon<I: PathIterator>(iterator: I, vertices: &[Point2], mode: CrossingMode) -> i32 {
    compute_crossings(iterator, mode, |crossings, a, b| {
        convex_polygon_crossings_for_segment(crossings, vertices, a.x, a.y, b.x, b.y)
    })
}

/// Crossings of an outline, given by its drawn edges and one of its points,
/// against the path.
pub fn crossings_from_edges<I: PathIterator>(
    iterator: I,
    edges: &[(Point2, Point2)],
    reference: &Point2,
    mode: CrossingMode,
) -> i32 {
    compute_crossings(iterator, mode, |crossings, a, b| {
        let touches = edges
            .iter()
            .any(|(p, q)| intersects_segment_segment_with_ends(p.x, p.y, q.x, q.y, a.x, a.y, b.x, b.y));
        if touches {
            return SHAPE_INTERSECTS;
        }
        crossings + point_crossings_for_segment(reference.x, reference.y, a.x, a.y, b.x, b.y)
    })
}

/// Drawn edges of the flattened path, explicit closes included.
pub fn flattened_edges<I: PathIterator>(iterator: I) -> Vec<(Point2, Point2)> {
    let params = FlatteningParams::from_iterator(&iterator);
    FlatteningPathIterator::new(iterator, params, &DefaultGeomFactory)
        .filter_map(|element| match element {
            PathElement::LineTo { from, to } | PathElement::Close { from, to } => Some((from, to)),
            _ => None,
        })
        .collect()
}

/// Edges of the flattened path, with every open sub-path closed by an edge
/// back to its start. These bound the area [`CrossingMode::AutoClose`] counts.
pub fn auto_closed_edges<I: PathIterator>(iterator: I) -> Vec<(Point2, Point2)> {
    let params = FlatteningParams::from_iterator(&iterator);
    let mut edges = Vec::new();
    let mut start = Point2::origin();
    let mut current = Point2::origin();
    let mut open = false;
    for element in FlatteningPathIterator::new(iterator, params, &DefaultGeomFactory) {
        match element {
            PathElement::MoveTo { to } => {
                if open && current != start {
                    edges.push((current, start));
                }
                open = false;
                start = to;
                current = to;
            }
            PathElement::LineTo { from, to } => {
                edges.push((from, to));
                open = true;
                current = to;
            }
            PathElement::Close { from, to } => {
                edges.push((from, to));
                open = false;
                current = to;
            }
            PathElement::QuadTo { .. } | PathElement::CurveTo { .. } => {}
        }
    }
    if open && current != start {
        edges.push((current, start));
    }
    edges
}
