use std::borrow::Cow;

use crate::factory::{GeomFactory, DEFAULT_SPLINE_APPROXIMATION_RATIO};
use crate::math::{Point2, Transform2d};

use super::{PathElement, PathIterator, RestartablePathIterator, WindingRule};

/// Untransformed drawing command. Start points are implied by the previous
/// command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Command {
    Move(Point2),
    Line(Point2),
    Quad(Point2, Point2),
    Curve(Point2, Point2, Point2),
    Close,
}

impl Command {
    /// Points stored in the command, in drawing order.
    pub(crate) fn points(&self) -> Vec<Point2> {
        match *self {
            Self::Move(p) | Self::Line(p) => vec![p],
            Self::Quad(c, p) => vec![c, p],
            Self::Curve(c1, c2, p) => vec![c1, c2, p],
            Self::Close => Vec::new(),
        }
    }

    pub(crate) fn is_curved(&self) -> bool {
        matches!(self, Self::Quad(..) | Self::Curve(..))
    }

    /// Applies `f` to every stored point.
    pub(crate) fn map_points(&self, mut f: impl FnMut(&Point2) -> Point2) -> Self {
        match self {
            Self::Move(p) => Self::Move(f(p)),
            Self::Line(p) => Self::Line(f(p)),
            Self::Quad(c, p) => Self::Quad(f(c), f(p)),
            Self::Curve(c1, c2, p) => Self::Curve(f(c1), f(c2), f(p)),
            Self::Close => Self::Close,
        }
    }

    /// End point of the command, `None` for a close.
    pub(crate) fn end_point(&self) -> Option<Point2> {
        match self {
            Self::Move(p) | Self::Line(p) | Self::Quad(_, p) | Self::Curve(_, _, p) => Some(*p),
            Self::Close => None,
        }
    }
}

/// Shape flags derived from a command sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PathFlags {
    pub(crate) polyline: bool,
    pub(crate) curved: bool,
    pub(crate) multi_parts: bool,
    pub(crate) polygon: bool,
}

impl PathFlags {
    pub(crate) fn from_commands(commands: &[Command]) -> Self {
        let curved = commands.iter().any(Command::is_curved);
        // A move-to starts a sub-path only when something is drawn after it.
        let mut parts = 0usize;
        let mut pending_move = false;
        let mut closed = false;
        for command in commands {
            match command {
                Command::Move(_) => pending_move = true,
                _ => {
                    if pending_move {
                        parts += 1;
                        pending_move = false;
                    }
                    closed = matches!(command, Command::Close);
                }
            }
        }
        let multi_parts = parts > 1;
        let simple = !curved && !multi_parts && parts == 1;
        let has_close = commands.iter().any(|c| matches!(c, Command::Close));
        Self {
            polyline: simple && !has_close,
            curved,
            multi_parts,
            polygon: simple && closed,
        }
    }
}

/// Lazy iterator replaying a shape's commands, optionally transformed.
///
/// Each command is transformed once, when it is reached; the start point of
/// a drawing element reuses the already transformed end of its predecessor.
pub struct ShapePathIterator<'a> {
    commands: Cow<'a, [Command]>,
    index: usize,
    transform: Option<Transform2d>,
    factory: &'a dyn GeomFactory,
    winding_rule: WindingRule,
    flags: PathFlags,
    current: Point2,
    move_point: Point2,
}

impl<'a> ShapePathIterator<'a> {
    pub(crate) fn new(
        commands: Cow<'a, [Command]>,
        winding_rule: WindingRule,
        transform: Option<&Transform2d>,
        factory: &'a dyn GeomFactory,
    ) -> Self {
        let flags = PathFlags::from_commands(&commands);
        Self {
            commands,
            index: 0,
            transform: transform.filter(|t| !t.is_identity()).copied(),
            factory,
            winding_rule,
            flags,
            current: Point2::origin(),
            move_point: Point2::origin(),
        }
    }

    fn apply(&self, point: &Point2) -> Point2 {
        let point = match &self.transform {
            Some(t) => t.transform_point(point),
            None => *point,
        };
        self.factory.convert_point(&point)
    }
}

impl Iterator for ShapePathIterator<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let command = *self.commands.get(self.index)?;
        self.index += 1;
        let from = self.current;
        let element = match command {
            Command::Move(p) => {
                let to = self.apply(&p);
                self.move_point = to;
                self.factory.new_move_path_element(&to)
            }
            Command::Line(p) => {
                let to = self.apply(&p);
                self.factory.new_line_path_element(&from, &to)
            }
            Command::Quad(c, p) => {
                let ctrl = self.apply(&c);
                let to = self.apply(&p);
                self.factory.new_quad_path_element(&from, &ctrl, &to)
            }
            Command::Curve(c1, c2, p) => {
                let ctrl1 = self.apply(&c1);
                let ctrl2 = self.apply(&c2);
                let to = self.apply(&p);
                self.factory.new_curve_path_element(&from, &ctrl1, &ctrl2, &to)
            }
            Command::Close => self.factory.new_close_path_element(&from, &self.move_point),
        };
        self.current = element.to_point();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.commands.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl PathIterator for ShapePathIterator<'_> {
    fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    fn is_polyline(&self) -> bool {
        self.flags.polyline
    }

    fn is_curved(&self) -> bool {
        self.flags.curved
    }

    fn is_multi_parts(&self) -> bool {
        self.flags.multi_parts
    }

    fn is_polygon(&self) -> bool {
        self.flags.polygon
    }

    fn spline_approximation_ratio(&self) -> f64 {
        self.factory.spline_approximation_ratio()
    }
}

/// Restartable iterator over the elements stored in a path.
pub struct StoredPathIterator<'a> {
    inner: ShapePathIterator<'a>,
}

impl<'a> StoredPathIterator<'a> {
    pub(crate) fn new(
        commands: &'a [Command],
        winding_rule: WindingRule,
        transform: Option<&Transform2d>,
        factory: &'a dyn GeomFactory,
    ) -> Self {
        Self {
            inner: ShapePathIterator::new(Cow::Borrowed(commands), winding_rule, transform, factory),
        }
    }
}

impl Iterator for StoredPathIterator<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl PathIterator for StoredPathIterator<'_> {
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }

    fn is_polyline(&self) -> bool {
        self.inner.is_polyline()
    }

    fn is_curved(&self) -> bool {
        self.inner.is_curved()
    }

    fn is_multi_parts(&self) -> bool {
        self.inner.is_multi_parts()
    }

    fn is_polygon(&self) -> bool {
        self.inner.is_polygon()
    }

    fn spline_approximation_ratio(&self) -> f64 {
        self.inner.spline_approximation_ratio()
    }
}

impl RestartablePathIterator for StoredPathIterator<'_> {
    fn restart_iterations(&self) -> Self {
        let inner = &self.inner;
        Self {
            inner: ShapePathIterator {
                commands: inner.commands.clone(),
                index: 0,
                transform: inner.transform,
                factory: inner.factory,
                winding_rule: inner.winding_rule,
                flags: inner.flags,
                current: Point2::origin(),
                move_point: Point2::origin(),
            },
        }
    }
}

/// Concatenation of several path iterators under one winding rule.
pub struct MultiPathIterator<'a> {
    parts: Vec<Box<dyn PathIterator + 'a>>,
    current: usize,
    winding_rule: WindingRule,
    flags: PathFlags,
}

impl<'a> MultiPathIterator<'a> {
    #[must_use]
    pub fn new(parts: Vec<Box<dyn PathIterator + 'a>>, winding_rule: WindingRule) -> Self {
        let curved = parts.iter().any(|p| p.is_curved());
        let multi_parts = parts.len() > 1 || parts.iter().any(|p| p.is_multi_parts());
        let single = parts.len() == 1 && !multi_parts;
        let flags = PathFlags {
            polyline: single && parts.iter().all(|p| p.is_polyline()),
            curved,
            multi_parts,
            polygon: single && parts.iter().all(|p| p.is_polygon()),
        };
        Self {
            parts,
            current: 0,
            winding_rule,
            flags,
        }
    }
}

impl Iterator for MultiPathIterator<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        while let Some(part) = self.parts.get_mut(self.current) {
            if let Some(element) = part.next() {
                return Some(element);
            }
            self.current += 1;
        }
        None
    }
}

impl PathIterator for MultiPathIterator<'_> {
    fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    fn is_polyline(&self) -> bool {
        self.flags.polyline
    }

    fn is_curved(&self) -> bool {
        self.flags.curved
    }

    fn is_multi_parts(&self) -> bool {
        self.flags.multi_parts
    }

    fn is_polygon(&self) -> bool {
        self.flags.polygon
    }

    /// The finest ratio among the parts.
    fn spline_approximation_ratio(&self) -> f64 {
        self.parts
            .iter()
            .map(|part| part.spline_approximation_ratio())
            .reduce(f64::min)
            .unwrap_or(DEFAULT_SPLINE_APPROXIMATION_RATIO)
    }
}
