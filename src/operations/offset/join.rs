//! Joining independently offset segments.
//!
//! Every segment of a chain is offset on its own, then stitched to the
//! already joined predecessor so both share one end point. The four
//! `(previous, current)` kinds each have their own closed form:
//!
//! | previous | current | construction |
//! |----------|---------|--------------|
//! | line     | line    | line/line intersection |
//! | arc      | line    | circle of `previous` against the new line |
//! | line     | arc     | circle of the new arc against `previous` |
//! | arc      | arc     | circle/circle intersection |
//!
//! Degenerate joints never fail: the join either lands on the closest
//! point or is skipped, leaving the two segments apart.

use tracing::{debug, trace};

use crate::geometry::{Arc, Curve, Line, Segment};
use crate::math::arc_2d::sweep_between;
use crate::math::intersect_2d::{circle_circle_intersect_2d, line_line_intersect_2d, CircleCircle};
use crate::math::{polar_angle, signed_angle, unit_or_zero, Point2};

/// How a joint was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// No predecessor; the offset segment is returned as is.
    Unjoined,
    /// Both segments now meet at an exact intersection or touching point.
    Joined,
    /// The circle does not reach the line. The line end was moved to the
    /// foot of the circle center and the arc swept toward it, leaving a
    /// radial gap.
    Closest,
    /// Lines are parallel; nothing was changed.
    Parallel,
    /// The intersection lies past the end of the new line or before the
    /// start of the previous one; nothing was changed.
    Overshoot,
    /// The circles do not cross; nothing was changed.
    Disjoint,
}

impl JoinOutcome {
    /// Whether `previous.p1() == current.p0()` holds after the join.
    #[must_use]
    pub fn is_connected(self) -> bool {
        self == Self::Joined
    }
}

/// Offsets `current` by `offset` and joins the result to `previous`.
///
/// `previous` must already be joined to its own predecessor; chains are
/// therefore processed strictly from first to last segment. Both
/// `previous` and the returned segment may be modified.
#[must_use]
pub fn make_offset(current: &Segment, offset: f64, previous: Option<&mut Segment>) -> Segment {
    join_offset(current, offset, previous).0
}

/// Like [`make_offset`], also reporting how the joint was resolved.
#[must_use]
pub fn join_offset(
    current: &Segment,
    offset: f64,
    previous: Option<&mut Segment>,
) -> (Segment, JoinOutcome) {
    let mut joined = current.offset(offset);
    let Some(previous) = previous else {
        return (joined, JoinOutcome::Unjoined);
    };

    let outcome = match (previous, &mut joined) {
        (Segment::Line(prev), Segment::Line(line)) => line_after_line(prev, line),
        (Segment::Arc(prev), Segment::Line(line)) => line_after_arc(prev, line),
        (Segment::Line(prev), Segment::Arc(arc)) => arc_after_line(prev, arc),
        (Segment::Arc(prev), Segment::Arc(arc)) => arc_after_arc(prev, arc, &current.p0()),
    };

    if outcome.is_connected() {
        trace!(?outcome, p0 = ?joined.p0(), "offset joint resolved");
    } else {
        debug!(?outcome, offset, "offset joint left open");
    }
    (joined, outcome)
}

fn touch_or_gap(c: f64) -> JoinOutcome {
    if c < 0.0 {
        JoinOutcome::Closest
    } else {
        JoinOutcome::Joined
    }
}

/// Corner between two lines.
fn line_after_line(prev: &mut Line, line: &mut Line) -> JoinOutcome {
    let Some((t, u)) =
        line_line_intersect_2d(prev.origin(), prev.vector(), line.origin(), line.vector())
    else {
        return JoinOutcome::Parallel;
    };
    // Too sharp a corner: the offset lines cross outside both segments.
    if u > 1.0 || t < 0.0 {
        return JoinOutcome::Overshoot;
    }
    let p = prev.lerp(t);
    line.move_p0_to(p);
    prev.move_p1_to(p);
    JoinOutcome::Joined
}

/// Line leaving an arc. The arc keeps its center and start; only its sweep
/// changes.
fn line_after_arc(prev: &mut Arc, line: &mut Line) -> JoinOutcome {
    let foot = line.point_sur_segment(prev.center());
    let c = prev.circle().radius_sq() - foot.distance * foot.distance;
    let (p0, outcome) = if c <= 0.0 {
        (line.lerp(foot.t), touch_or_gap(c))
    } else {
        let step = unit_or_zero(line.vector()) * c.sqrt();
        let base = line.lerp(foot.t);
        // Center past the line start: keep the crossing behind the foot.
        let p0 = if foot.t > 0.0 { base - step } else { base + step };
        (p0, JoinOutcome::Joined)
    };

    let da = sweep_between(prev.center(), &prev.p0(), &p0, prev.ccw());
    prev.set_da(da);
    line.move_p0_to(p0);
    outcome
}

/// Arc leaving a line. The arc keeps its center and end; its start angle
/// and sweep are rebuilt from the joint.
fn arc_after_line(prev: &mut Line, arc: &mut Arc) -> JoinOutcome {
    let center = *arc.center();
    let foot = prev.point_sur_segment(&center);
    let c = arc.circle().radius_sq() - foot.distance * foot.distance;
    let (p0, outcome) = if c <= 0.0 {
        (prev.lerp(foot.t), touch_or_gap(c))
    } else {
        let step = unit_or_zero(prev.vector()) * c.sqrt();
        let base = prev.lerp(foot.t);
        // Center past the line end: the arc takes precedence.
        let p0 = if foot.t > 1.0 { base - step } else { base + step };
        (p0, JoinOutcome::Joined)
    };

    let end = arc.p1();
    let ccw = arc.ccw();
    arc.set_a0(polar_angle(&(p0 - center)));
    arc.set_da(sweep_between(&center, &p0, &end, ccw));
    prev.move_p1_to(p0);
    outcome
}

/// Joint between two arcs. `reference` is the start of the current arc
/// before offsetting; of two crossings, the one on its side of the line of
/// centers is kept.
///
/// Sweeps are taken as raw signed angles, without forcing them onto the
/// arcs' winding.
fn arc_after_arc(prev: &mut Arc, arc: &mut Arc, reference: &Point2) -> JoinOutcome {
    let prev_center = *prev.center();
    let center = *arc.center();
    let p0 = match circle_circle_intersect_2d(&prev_center, prev.radius(), &center, arc.radius()) {
        CircleCircle::Disjoint => return JoinOutcome::Disjoint,
        CircleCircle::Tangent(p) => p,
        CircleCircle::Crossing(left, right) => {
            let centers = Line::new(prev_center, center - prev_center);
            let d = centers.point_sur_segment(reference).distance;
            let d1 = centers.point_sur_segment(&left).distance;
            if (d1 > 0.0 && d < 0.0) || (d1 <= 0.0 && d > 0.0) {
                right
            } else {
                left
            }
        }
    };

    prev.set_da(signed_angle(&(prev.p0() - prev_center), &(p0 - prev_center)));

    let end = arc.p1();
    let u = p0 - center;
    arc.set_a0(polar_angle(&u));
    arc.set_da(signed_angle(&u, &(end - center)));
    JoinOutcome::Joined
}
