use super::{cross_2d, Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Only exactly parallel directions are rejected; nearly parallel lines
/// produce large but finite parameters.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = cross_2d(d1, d2);
    if cross == 0.0 {
        return None;
    }
    let dp = p2 - p1;
    let t = cross_2d(&dp, d2) / cross;
    let u = cross_2d(&dp, d1) / cross;
    Some((t, u))
}

/// Orthogonal projection of `pt` onto the infinite line `p + t * v`.
///
/// Returns `(distance, t)` where `distance` is the signed lateral distance,
/// positive on the right-hand side of `v`. A zero-length `v` projects onto
/// `p` with `t = 0`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn project_on_line_2d(p: &Point2, v: &Vector2, pt: &Point2) -> (f64, f64) {
    let len = v.norm();
    let dp = pt - p;
    if len == 0.0 {
        return (dp.norm(), 0.0);
    }
    let distance = -cross_2d(v, &dp) / len;
    let t = v.dot(&dp) / (len * len);
    (distance, t)
}

/// Result of intersecting two circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleCircle {
    /// The circles are disjoint or one contains the other.
    Disjoint,
    /// The circles touch from outside at one point.
    Tangent(Point2),
    /// Two crossing points, mirrored across the line of centers.
    ///
    /// The first lies on the left of the direction `c0 -> c1`.
    Crossing(Point2, Point2),
}

/// Intersection of the circles `(c0, r0)` and `(c1, r1)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn circle_circle_intersect_2d(c0: &Point2, r0: f64, c1: &Point2, r1: f64) -> CircleCircle {
    let dc = c1 - c0;
    let dist = dc.norm();
    let rs = r0 + r1;
    if dist > rs || dist < (r0 - r1).abs() || dist == 0.0 {
        return CircleCircle::Disjoint;
    }
    if dist == rs {
        return CircleCircle::Tangent(c0 + dc * (r0 / rs));
    }
    let a = (r0 * r0 - r1 * r1 + dist * dist) / (2.0 * dist);
    let h = (r0 * r0 - a * a).max(0.0).sqrt();
    let m = c0 + dc * (a / dist);
    let k = Vector2::new(-dc.y, dc.x) * (h / dist);
    CircleCircle::Crossing(m + k, m - k)
}
