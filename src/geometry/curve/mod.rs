mod arc;
mod circle;
mod line;
mod line3d;

pub use arc::Arc;
pub use circle::{Circle, CircleIntersection};
pub use line::Line;
pub use line3d::Line3d;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// Projection of a point onto a segment's supporting line or circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Whether the foot lies strictly inside the segment, `0 < t < 1`.
    pub on_segment: bool,
    /// Signed lateral distance. For lines, positive on the right-hand side;
    /// for arcs, radial and positive outside the circle.
    pub distance: f64,
    /// Parameter of the foot on the segment.
    pub t: f64,
}

impl SegmentProjection {
    #[must_use]
    pub fn new(distance: f64, t: f64) -> Self {
        Self {
            on_segment: t > 0.0 && t < 1.0,
            distance,
            t,
        }
    }
}

/// Capabilities shared by the 2D segment kinds.
///
/// Parameters `t` run from `0` at [`Curve::p0`] to `1` at [`Curve::p1`].
/// "Right-hand side" is the side reached by turning the travel direction
/// by -90 degrees.
pub trait Curve {
    /// Start point, always equal to `lerp(0)`.
    fn p0(&self) -> Point2;

    /// End point, always equal to `lerp(1)`.
    fn p1(&self) -> Point2;

    /// Moves the start point, keeping the end point.
    fn move_p0_to(&mut self, p0: Point2);

    /// Moves the end point, keeping the start point.
    fn move_p1_to(&mut self, p1: Point2);

    /// Evaluates the segment at parameter `t`.
    fn lerp(&self, t: f64) -> Point2;

    fn length(&self) -> f64;

    /// Direction angle in the XY plane.
    fn angle(&self) -> f64;

    /// Perpendicular line at `t` on the right-hand side.
    fn normal(&self, t: f64) -> Line;

    /// Perpendicular line at `t` of length `size`; negative sizes go left.
    fn sized_normal(&self, t: f64, size: f64) -> Line;

    /// Unit tangent at `t`, pointing along the travel direction.
    fn tangent_unit_vector(&self, t: f64) -> Vector2;

    /// Tangent line of the given length at `t`.
    fn straight(&self, length: f64, t: f64) -> Line;

    /// Projects `pt` onto the supporting line or circle.
    fn point_sur_segment(&self, pt: &Point2) -> SegmentProjection;

    /// Step count for a target step length: `(dt, n)` with `n >= 1`.
    fn steps(&self, length: f64) -> (f64, usize) {
        step_count(self.length(), length)
    }

    /// Both endpoints.
    fn pts(&self) -> [Point2; 2] {
        [self.p0(), self.p1()]
    }
}

/// `n = max(1, round(span / target))`, `dt = 1 / n`.
///
/// Halves round to even, so a span of 2.5 targets takes 2 steps.
/// Non-positive or NaN targets give a single step.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn step_count(span: f64, target: f64) -> (f64, usize) {
    if target.is_nan() || target <= 0.0 {
        return (1.0, 1);
    }
    let n = (span / target).round_ties_even().max(1.0);
    if !n.is_finite() {
        return (1.0, 1);
    }
    (1.0 / n, n as usize)
}

/// A unit of a curve chain: either a straight line or a circular arc.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Line(Line),
    Arc(Arc),
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Segment::Line($s) => $body,
            Segment::Arc($s) => $body,
        }
    };
}

impl Segment {
    /// Returns the inner line, if this is a line.
    #[must_use]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line(line) => Some(line),
            Self::Arc(_) => None,
        }
    }

    /// Returns the inner arc, if this is an arc.
    #[must_use]
    pub fn as_arc(&self) -> Option<&Arc> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Line(_) => None,
        }
    }

    /// Returns an independent copy shifted to the right-hand side by `offset`.
    #[must_use]
    pub fn offset(&self, offset: f64) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.offset(offset)),
            Self::Arc(arc) => Self::Arc(arc.offset(offset)),
        }
    }

    /// Offsets this segment and joins it to the already joined `previous`.
    ///
    /// `previous` is mutated so its end meets the start of the returned
    /// segment. See [`crate::operations::offset::make_offset`].
    #[must_use]
    pub fn make_offset(&self, offset: f64, previous: Option<&mut Segment>) -> Self {
        crate::operations::offset::make_offset(self, offset, previous)
    }

    /// Signed angle between the end of `previous` and the start of this
    /// segment. Without a predecessor, the line angle or the arc start angle.
    #[must_use]
    pub fn delta_angle(&self, previous: Option<&Segment>) -> f64 {
        match self {
            Self::Line(line) => line.delta_angle(previous),
            Self::Arc(arc) => arc.delta_angle(previous),
        }
    }

    /// Screen-space drawing is left to the host renderer.
    ///
    /// # Errors
    ///
    /// Always returns [`GeometryError::Unsupported`].
    pub fn draw<C>(&self, _context: &mut C) -> Result<()> {
        Err(GeometryError::Unsupported("drawing").into())
    }
}

impl Curve for Segment {
    fn p0(&self) -> Point2 {
        dispatch!(self, s => s.p0())
    }

    fn p1(&self) -> Point2 {
        dispatch!(self, s => s.p1())
    }

    fn move_p0_to(&mut self, p0: Point2) {
        dispatch!(self, s => s.move_p0_to(p0));
    }

    fn move_p1_to(&mut self, p1: Point2) {
        dispatch!(self, s => s.move_p1_to(p1));
    }

    fn lerp(&self, t: f64) -> Point2 {
        dispatch!(self, s => s.lerp(t))
    }

    fn length(&self) -> f64 {
        dispatch!(self, s => s.length())
    }

    fn angle(&self) -> f64 {
        dispatch!(self, s => s.angle())
    }

    fn normal(&self, t: f64) -> Line {
        dispatch!(self, s => s.normal(t))
    }

    fn sized_normal(&self, t: f64, size: f64) -> Line {
        dispatch!(self, s => s.sized_normal(t, size))
    }

    fn tangent_unit_vector(&self, t: f64) -> Vector2 {
        dispatch!(self, s => s.tangent_unit_vector(t))
    }

    fn straight(&self, length: f64, t: f64) -> Line {
        dispatch!(self, s => s.straight(length, t))
    }

    fn point_sur_segment(&self, pt: &Point2) -> SegmentProjection {
        dispatch!(self, s => s.point_sur_segment(pt))
    }
}
