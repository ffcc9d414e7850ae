use tracing::trace;

use crate::geometry::{Curve, Segment};
use crate::math::{Point2, TOLERANCE};

use super::{Polyline, SamplingParams};

/// Samples a segment from `p0` to `p1`, both included.
///
/// Lines are split by step length. Arcs take whichever of the length and
/// angle resolutions gives more steps.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_segment(segment: &Segment, params: &SamplingParams) -> Vec<Point2> {
    let (dt, n) = match segment {
        Segment::Line(line) => line.steps(params.step_length()),
        Segment::Arc(arc) => {
            let by_length = arc.steps(params.step_length());
            let by_angle = arc.steps_by_angle(params.step_angle());
            if by_angle.1 > by_length.1 {
                by_angle
            } else {
                by_length
            }
        }
    };
    trace!(steps = n, "sampling segment");

    let mut points = Vec::with_capacity(n + 1);
    points.extend((0..n).map(|i| segment.lerp(dt * i as f64)));
    points.push(segment.lerp(1.0));
    points
}

/// Samples a joined chain into a single polyline.
///
/// Consecutive points closer than [`TOLERANCE`] are merged, so shared
/// joint points appear once.
#[must_use]
pub fn sample_chain(segments: &[Segment], params: &SamplingParams) -> Polyline {
    let mut points: Vec<Point2> = Vec::new();
    for segment in segments {
        for p in sample_segment(segment, params) {
            if points.last().is_some_and(|last| (p - *last).norm() < TOLERANCE) {
                continue;
            }
            points.push(p);
        }
    }
    Polyline { points }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, Line};
    use crate::math::Vector2;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn line_is_split_by_length() {
        let s = Segment::from(Line::new(Point2::origin(), Vector2::new(1.0, 0.0)));
        let params = SamplingParams::new(0.25, PI).unwrap();
        let pts = sample_segment(&s, &params);
        assert_eq!(pts.len(), 5);
        assert_abs_diff_eq!(pts[1], Point2::new(0.25, 0.0), epsilon = TOLERANCE);
        assert_eq!(pts[4], s.p1());
    }

    #[test]
    fn short_line_keeps_both_ends() {
        let s = Segment::from(Line::new(Point2::origin(), Vector2::new(0.01, 0.0)));
        let pts = sample_segment(&s, &SamplingParams::default());
        assert_eq!(pts, vec![s.p0(), s.p1()]);
    }

    #[test]
    fn small_arc_uses_angle_resolution() {
        // Length 0.157 gives 2 length steps; a quarter turn gives 8 angle steps.
        let s = Segment::from(Arc::new(Point2::origin(), 0.1, 0.0, FRAC_PI_2));
        let pts = sample_segment(&s, &SamplingParams::default());
        assert_eq!(pts.len(), 9);
        for p in &pts {
            assert_abs_diff_eq!(p.coords.norm(), 0.1, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn large_arc_uses_length_resolution() {
        // Length 10 * pi/2 ~ 15.7 gives 16 steps of 1.0.
        let s = Segment::from(Arc::new(Point2::origin(), 10.0, 0.0, FRAC_PI_2));
        let params = SamplingParams::new(1.0, PI / 16.0).unwrap();
        assert_eq!(sample_segment(&s, &params).len(), 17);
    }

    #[test]
    fn chain_merges_shared_joints() {
        let chain = [
            Segment::from(Line::new(Point2::origin(), Vector2::new(1.0, 0.0))),
            Segment::from(Line::new(Point2::new(1.0, 0.0), Vector2::new(0.0, 1.0))),
        ];
        let params = SamplingParams::new(0.5, PI).unwrap();
        let poly = sample_chain(&chain, &params);
        assert_eq!(poly.len(), 5);
        assert_abs_diff_eq!(poly.length(), 2.0, epsilon = TOLERANCE);
        assert_eq!(poly.points[2], Point2::new(1.0, 0.0));
    }

    #[test]
    fn empty_chain_gives_empty_polyline() {
        assert!(sample_chain(&[], &SamplingParams::default()).is_empty());
    }
}
