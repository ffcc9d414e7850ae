/// 2D arc angle math.
///
/// Sweep convention: `da` is the signed angle from start to end.
/// - `da > 0`: counter-clockwise arc
/// - `da < 0`: clockwise arc
use std::f64::consts::TAU;

use super::{signed_angle, Point2, Vector2};

/// Forces a raw signed angle onto the side given by the winding.
///
/// A counter-clockwise arc needs a positive sweep and a clockwise arc a
/// negative one; a raw angle with the wrong sign goes the long way round.
#[must_use]
pub fn correct_sweep(da: f64, ccw: bool) -> f64 {
    if ccw {
        if da < 0.0 {
            return da + TAU;
        }
    } else if da > 0.0 {
        return da - TAU;
    }
    da
}

/// Sweep from `from` to `to` around `center`, following the given winding.
#[must_use]
pub fn sweep_between(center: &Point2, from: &Point2, to: &Point2, ccw: bool) -> f64 {
    correct_sweep(signed_angle(&(from - center), &(to - center)), ccw)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, a0: f64, da: f64, t: f64) -> Point2 {
    let a = a0 + t * da;
    center + Vector2::new(radius * a.cos(), radius * a.sin())
}

/// Unit tangent on an arc at parameter `t`, pointing in the direction of travel.
#[must_use]
pub fn arc_tangent_at(a0: f64, da: f64, t: f64) -> Vector2 {
    let a = a0 + t * da;
    let v = Vector2::new(a.sin(), -a.cos());
    if da > 0.0 {
        -v
    } else {
        v
    }
}
