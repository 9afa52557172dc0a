//! Orientation predicates and clipping codes.
//!
//! Side tests return `1` when the point lies to the left of the directed line
//! (a counter-clockwise turn with the y-axis pointing up), `-1` when it lies to
//! the right, and `0` when it is on the line.

use super::{ulp, Point2};

/// Cohen–Sutherland code: the point is inside the rectangle.
pub const COHEN_SUTHERLAND_INSIDE: u8 = 0;
/// Cohen–Sutherland code: the point is left of the rectangle.
pub const COHEN_SUTHERLAND_LEFT: u8 = 1;
/// Cohen–Sutherland code: the point is right of the rectangle.
pub const COHEN_SUTHERLAND_RIGHT: u8 = 2;
/// Cohen–Sutherland code: the point is below the rectangle.
pub const COHEN_SUTHERLAND_BOTTOM: u8 = 4;
/// Cohen–Sutherland code: the point is above the rectangle.
pub const COHEN_SUTHERLAND_TOP: u8 = 8;

fn sign(value: f64, epsilon: f64) -> i32 {
    if value > epsilon {
        1
    } else if value < -epsilon {
        -1
    } else {
        0
    }
}

/// Side of `(px, py)` relative to the directed line `(x1, y1) -> (x2, y2)`,
/// snapping cross products within `epsilon` to zero.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn side_line_point_with_epsilon(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    px: f64,
    py: f64,
    epsilon: f64,
) -> i32 {
    let cross = (x2 - x1) * (py - y1) - (y2 - y1) * (px - x1);
    sign(cross, epsilon)
}

/// Side of `(px, py)` relative to the directed line `(x1, y1) -> (x2, y2)`.
///
/// The tolerance is the ULP of the cross product itself.
#[must_use]
pub fn side_line_point(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> i32 {
    let cross = (x2 - x1) * (py - y1) - (y2 - y1) * (px - x1);
    sign(cross, ulp(cross))
}

/// Counter-clockwise test of `(px, py)` against the segment `(x1, y1) -> (x2, y2)`.
///
/// Behaves like [`side_line_point_with_epsilon`] for points off the line. For
/// collinear points, returns `-1` when the point lies beyond the first end,
/// `1` when it lies beyond the second end and `0` when it is within the span.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn ccw(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64, epsilon: f64) -> i32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mut vx = px - x1;
    let mut vy = py - y1;
    let side = sign(dx * vy - dy * vx, epsilon);
    if side != 0 {
        return side;
    }
    let mut projection = vx * dx + vy * dy;
    if projection > 0.0 {
        vx -= dx;
        vy -= dy;
        projection = vx * dx + vy * dy;
        if projection < 0.0 {
            projection = 0.0;
        }
    }
    sign(projection, 0.0)
}

/// [`ccw`] on points with the default epsilon of zero.
#[must_use]
pub fn ccw_points(p1: &Point2, p2: &Point2, p: &Point2) -> i32 {
    ccw(p1.x, p1.y, p2.x, p2.y, p.x, p.y, 0.0)
}

/// Outcome of one half of the robust segment intersection test.
///
/// `No` is definitive. `Perhaps` has to be confirmed by running the test with
/// the two segments swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UncertainIntersection {
    No,
    Perhaps,
}

impl UncertainIntersection {
    pub(crate) fn is_possible(self) -> bool {
        matches!(self, Self::Perhaps)
    }
}

/// Computes the Cohen–Sutherland code of `(px, py)` for the rectangle
/// `[rxmin, rxmax] x [rymin, rymax]`. Points on the border are inside.
#[must_use]
pub fn cohen_sutherland_code(px: f64, py: f64, rxmin: f64, rymin: f64, rxmax: f64, rymax: f64) -> u8 {
    let mut code = COHEN_SUTHERLAND_INSIDE;
    if px < rxmin {
        code |= COHEN_SUTHERLAND_LEFT;
    } else if px > rxmax {
        code |= COHEN_SUTHERLAND_RIGHT;
    }
    if py < rymin {
        code |= COHEN_SUTHERLAND_BOTTOM;
    } else if py > rymax {
        code |= COHEN_SUTHERLAND_TOP;
    }
    code
}

/// Clips the segment `(x1, y1) -> (x2, y2)` to the rectangle with the
/// Cohen–Sutherland algorithm.
///
/// Returns the clipped segment, or `None` when the segment lies entirely
/// outside the rectangle.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn clip_segment_to_rectangle(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    rxmin: f64,
    rymin: f64,
    rxmax: f64,
    rymax: f64,
) -> Option<(Point2, Point2)> {
    let (mut ax, mut ay, mut bx, mut by) = (x1, y1, x2, y2);
    let mut code1 = cohen_sutherland_code(ax, ay, rxmin, rymin, rxmax, rymax);
    let mut code2 = cohen_sutherland_code(bx, by, rxmin, rymin, rxmax, rymax);

    // Each pass moves one end onto a border line, so four passes per end suffice.
    for _ in 0..8 {
        if code1 | code2 == COHEN_SUTHERLAND_INSIDE {
            return Some((Point2::new(ax, ay), Point2::new(bx, by)));
        }
        if code1 & code2 != COHEN_SUTHERLAND_INSIDE {
            return None;
        }
        let outside = if code1 == COHEN_SUTHERLAND_INSIDE { code2 } else { code1 };
        let (x, y) = if outside & COHEN_SUTHERLAND_TOP != 0 {
            (ax + (bx - ax) * (rymax - ay) / (by - ay), rymax)
        } else if outside & COHEN_SUTHERLAND_BOTTOM != 0 {
            (ax + (bx - ax) * (rymin - ay) / (by - ay), rymin)
        } else if outside & COHEN_SUTHERLAND_RIGHT != 0 {
            (rxmax, ay + (by - ay) * (rxmax - ax) / (bx - ax))
        } else {
            (rxmin, ay + (by - ay) * (rxmin - ax) / (bx - ax))
        };
        if outside == code1 {
            ax = x;
            ay = y;
            code1 = cohen_sutherland_code(ax, ay, rxmin, rymin, rxmax, rymax);
        } else {
            bx = x;
            by = y;
            code2 = cohen_sutherland_code(bx, by, rxmin, rymin, rxmax, rymax);
        }
    }
    // Rounding can leave an end a hair outside after the last pass.
    (code1 & code2 == COHEN_SUTHERLAND_INSIDE).then(|| {
        (
            Point2::new(ax.clamp(rxmin, rxmax), ay.clamp(rymin, rymax)),
            Point2::new(bx.clamp(rxmin, rxmax), by.clamp(rymin, rymax)),
        )
    })
}
