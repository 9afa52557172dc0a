use std::collections::VecDeque;

use crate::factory::GeomFactory;
use crate::math::bezier_2d::{cubic_flatness_squared, quad_flatness_squared, split_cubic, split_quad};
use crate::math::Point2;

use super::{PathElement, PathIterator, WindingRule};

/// Parameters controlling curve flattening.
#[derive(Debug, Clone, Copy)]
pub struct FlatteningParams {
    /// Maximum distance between a curve and its approximating segments.
    pub flatness: f64,
    /// Maximum recursive subdivision depth per curve.
    pub limit: u32,
}

impl Default for FlatteningParams {
    fn default() -> Self {
        Self {
            flatness: 0.1,
            limit: 10,
        }
    }
}

impl FlatteningParams {
    /// Parameters using the factory's spline approximation ratio.
    #[must_use]
    pub fn from_factory(factory: &dyn GeomFactory) -> Self {
        Self {
            flatness: factory.spline_approximation_ratio(),
            ..Self::default()
        }
    }

    /// Parameters using the flatness requested by `iterator`.
    #[must_use]
    pub fn from_iterator<I: PathIterator + ?Sized>(iterator: &I) -> Self {
        Self {
            flatness: iterator.spline_approximation_ratio(),
            ..Self::default()
        }
    }
}

/// Replaces every curve of the wrapped iterator by line segments.
///
/// Curves are subdivided at their midpoint until the control points lie
/// within the flatness of the chord, or until the depth limit is reached.
pub struct FlatteningPathIterator<'a, I> {
    source: I,
    params: FlatteningParams,
    factory: &'a dyn GeomFactory,
    pending: VecDeque<PathElement>,
}

enum Piece {
    Quad([Point2; 3]),
    Cubic([Point2; 4]),
}

impl<'a, I: PathIterator> FlatteningPathIterator<'a, I> {
    /// Wraps `source`.
    pub fn new(source: I, params: FlatteningParams, factory: &'a dyn GeomFactory) -> Self {
        Self {
            source,
            params,
            factory,
            pending: VecDeque::new(),
        }
    }

    fn subdivide(&mut self, piece: Piece) {
        let flatness_squared = self.params.flatness * self.params.flatness;
        let mut stack = vec![(piece, 0u32)];
        while let Some((piece, level)) = stack.pop() {
            let (flat, from, to) = match &piece {
                Piece::Quad([p0, p1, p2]) => (quad_flatness_squared(p0, p1, p2) <= flatness_squared, *p0, *p2),
                Piece::Cubic([p0, p1, p2, p3]) => {
                    (cubic_flatness_squared(p0, p1, p2, p3) <= flatness_squared, *p0, *p3)
                }
            };
            if flat || level >= self.params.limit {
                self.pending.push_back(self.factory.new_line_path_element(&from, &to));
                continue;
            }
            // Right half first so the left half is emitted first.
            match piece {
                Piece::Quad([p0, p1, p2]) => {
                    let (left, right) = split_quad(&p0, &p1, &p2);
                    stack.push((Piece::Quad(right), level + 1));
                    stack.push((Piece::Quad(left), level + 1));
                }
                Piece::Cubic([p0, p1, p2, p3]) => {
                    let (left, right) = split_cubic(&p0, &p1, &p2, &p3);
                    stack.push((Piece::Cubic(right), level + 1));
                    stack.push((Piece::Cubic(left), level + 1));
                }
            }
        }
    }
}

impl<I: PathIterator> Iterator for FlatteningPathIterator<'_, I> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        if let Some(element) = self.pending.pop_front() {
            return Some(element);
        }
        match self.source.next()? {
            PathElement::QuadTo { from, ctrl, to } => {
                self.subdivide(Piece::Quad([from, ctrl, to]));
                self.pending.pop_front()
            }
            PathElement::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                self.subdivide(Piece::Cubic([from, ctrl1, ctrl2, to]));
                self.pending.pop_front()
            }
            element => Some(element),
        }
    }
}

impl<I: PathIterator> PathIterator for FlatteningPathIterator<'_, I> {
    fn winding_rule(&self) -> WindingRule {
        self.source.winding_rule()
    }

    fn is_polyline(&self) -> bool {
        self.source.is_polyline()
    }

    fn is_curved(&self) -> bool {
        false
    }

    fn is_multi_parts(&self) -> bool {
        self.source.is_multi_parts()
    }

    fn is_polygon(&self) -> bool {
        self.source.is_polygon()
    }

    fn spline_approximation_ratio(&self) -> f64 {
        self.params.flatness
    }
}
