//! Path elements and the path iteration protocol.
//!
//! Every shape can be replayed as a lazy sequence of [`PathElement`]s, which
//! is how curves are flattened and how ray-casting containment works on
//! arbitrary outlines.

pub mod crossings;
mod flatten;
mod iterator;

pub use crossings::CrossingMode;
pub use flatten::{FlatteningParams, FlatteningPathIterator};
pub use iterator::{MultiPathIterator, ShapePathIterator, StoredPathIterator};
pub(crate) use iterator::{Command, PathFlags};

use std::fmt;

use crate::error::{PathError, Result};
use crate::factory::DEFAULT_SPLINE_APPROXIMATION_RATIO;
use crate::math::Point2;

/// Policy deciding the interior of a path from a crossing count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindingRule {
    /// Inside when the signed crossing count is not zero.
    #[default]
    NonZero,
    /// Inside when the crossing count is odd.
    EvenOdd,
}

impl WindingRule {
    /// Whether a full-unit crossing count denotes the interior.
    #[must_use]
    pub fn is_inside(self, crossings: i32) -> bool {
        match self {
            Self::NonZero => crossings != 0,
            Self::EvenOdd => crossings & 1 != 0,
        }
    }

    /// Whether a half-unit crossing count (two rays per query point) denotes the interior.
    #[must_use]
    pub fn is_inside_half_units(self, crossings: i32) -> bool {
        match self {
            Self::NonZero => crossings != 0,
            Self::EvenOdd => crossings & 2 != 0,
        }
    }
}

impl fmt::Display for WindingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonZero => write!(f, "non-zero"),
            Self::EvenOdd => write!(f, "even-odd"),
        }
    }
}

/// Kind of a [`PathElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathElementType {
    MoveTo,
    LineTo,
    QuadTo,
    CurveTo,
    Close,
}

/// One drawing command with absolute coordinates.
///
/// Drawing elements carry their start point so that each element can be
/// consumed on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    MoveTo {
        to: Point2,
    },
    LineTo {
        from: Point2,
        to: Point2,
    },
    QuadTo {
        from: Point2,
        ctrl: Point2,
        to: Point2,
    },
    CurveTo {
        from: Point2,
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
    },
    Close {
        from: Point2,
        to: Point2,
    },
}

impl PathElement {
    /// Returns the kind of this element.
    #[must_use]
    pub fn element_type(&self) -> PathElementType {
        match self {
            Self::MoveTo { .. } => PathElementType::MoveTo,
            Self::LineTo { .. } => PathElementType::LineTo,
            Self::QuadTo { .. } => PathElementType::QuadTo,
            Self::CurveTo { .. } => PathElementType::CurveTo,
            Self::Close { .. } => PathElementType::Close,
        }
    }

    /// Start point of a drawing element; `None` for a move-to.
    #[must_use]
    pub fn from_point(&self) -> Option<Point2> {
        match self {
            Self::MoveTo { .. } => None,
            Self::LineTo { from, .. }
            | Self::QuadTo { from, .. }
            | Self::CurveTo { from, .. }
            | Self::Close { from, .. } => Some(*from),
        }
    }

    /// End point of the element.
    #[must_use]
    pub fn to_point(&self) -> Point2 {
        match self {
            Self::MoveTo { to }
            | Self::LineTo { to, .. }
            | Self::QuadTo { to, .. }
            | Self::CurveTo { to, .. }
            | Self::Close { to, .. } => *to,
        }
    }

    /// All points of the element in drawing order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        match *self {
            Self::MoveTo { to } => vec![to],
            Self::LineTo { from, to } | Self::Close { from, to } => vec![from, to],
            Self::QuadTo { from, ctrl, to } => vec![from, ctrl, to],
            Self::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => vec![from, ctrl1, ctrl2, to],
        }
    }

    /// Whether the element is a quadratic or cubic curve.
    #[must_use]
    pub fn is_curved(&self) -> bool {
        matches!(self, Self::QuadTo { .. } | Self::CurveTo { .. })
    }

    /// Whether drawing this element leaves no mark: all its points coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let points = self.points();
        points.iter().all(|p| *p == points[0])
    }

    /// Whether the element draws something.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        !matches!(self, Self::MoveTo { .. }) && !self.is_empty()
    }
}

/// Lazy, single-pass sequence of path elements.
///
/// The winding rule and the shape flags are fixed for the whole sequence.
pub trait PathIterator: Iterator<Item = PathElement> {
    /// Winding rule of the iterated outline.
    fn winding_rule(&self) -> WindingRule;

    /// One move-to followed by line-to elements only.
    fn is_polyline(&self) -> bool;

    /// Contains at least one quadratic or cubic element.
    fn is_curved(&self) -> bool;

    /// Contains more than one sub-path.
    fn is_multi_parts(&self) -> bool;

    /// One closed sub-path made of line-to elements.
    fn is_polygon(&self) -> bool;

    /// Flatness used when the curves of this sequence are approximated by
    /// segments, as set by the factory that built the elements.
    fn spline_approximation_ratio(&self) -> f64 {
        DEFAULT_SPLINE_APPROXIMATION_RATIO
    }

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::IterationExhausted`] once the sequence is consumed.
    fn next_element(&mut self) -> Result<PathElement> {
        self.next().ok_or_else(|| {
            tracing::debug!("path iterator advanced past its end");
            PathError::IterationExhausted.into()
        })
    }
}

impl<I: PathIterator + ?Sized> PathIterator for Box<I> {
    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }

    fn is_polyline(&self) -> bool {
        (**self).is_polyline()
    }

    fn is_curved(&self) -> bool {
        (**self).is_curved()
    }

    fn is_multi_parts(&self) -> bool {
        (**self).is_multi_parts()
    }

    fn is_polygon(&self) -> bool {
        (**self).is_polygon()
    }

    fn spline_approximation_ratio(&self) -> f64 {
        (**self).spline_approximation_ratio()
    }
}

/// Path iterator able to replay its backing sequence from the start.
pub trait RestartablePathIterator: PathIterator {
    /// Returns a fresh iterator over the same elements, with the same transform.
    #[must_use]
    fn restart_iterations(&self) -> Self
    where
        Self: Sized;
}
