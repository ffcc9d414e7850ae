//! Cross-section deformation at curve joints.
//!
//! A profile swept along a chain is sheared at each joint so neighbouring
//! sections meet along the miter without a gap.

use crate::math::{unit_or_zero, Vector2};

use super::Curve;

/// Direction and scale of a profile's X axis at parameter `t` of `current`.
///
/// Without `next`, this is the unit right-hand normal at `t` with scale 1.
/// With `next`, the joint between the end of `current` and the start of
/// `next` is used: the direction bisects both right-hand normals and the
/// scale `1 / cos(angle / 2)` stretches the section onto the miter.
#[must_use]
pub fn proj_xy(current: &impl Curve, t: f64, next: Option<&impl Curve>) -> (Vector2, f64) {
    let Some(next) = next else {
        return (unit_or_zero(current.normal(t).vector()), 1.0);
    };
    let v0 = unit_or_zero(current.normal(1.0).vector());
    let v1 = unit_or_zero(next.normal(0.0).vector());
    let c = v0.dot(&v1).clamp(-1.0, 1.0);
    let size = 1.0 / (0.5 * c.acos()).cos();
    (unit_or_zero(&(v0 + v1)), size)
}

/// Direction and scale of a profile's Y axis along the chain.
///
/// Sections stay vertical whatever the slope (`dz0`, `dz1`) of the
/// segments, which reads better on real mouldings than following the path.
#[must_use]
pub fn proj_z(_dz0: f64, _dz1: Option<f64>) -> (Vector2, f64) {
    (Vector2::y(), 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, Line};
    use crate::math::{Point2, TOLERANCE};
    use std::f64::consts::{FRAC_PI_2, SQRT_2};

    #[test]
    fn single_segment_uses_its_normal() {
        let l = Line::new(Point2::origin(), Vector2::new(3.0, 0.0));
        let (dir, size) = proj_xy(&l, 0.5, None::<&Line>);
        assert!((dir - Vector2::new(0.0, -1.0)).norm() < TOLERANCE);
        assert!((size - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn right_angle_joint_bisects_and_stretches() {
        let a = Line::new(Point2::origin(), Vector2::new(1.0, 0.0));
        let b = Line::new(Point2::new(1.0, 0.0), Vector2::new(0.0, 1.0));
        let (dir, size) = proj_xy(&a, 1.0, Some(&b));
        let expected = Vector2::new(1.0, -1.0) / SQRT_2;
        assert!((dir - expected).norm() < TOLERANCE, "dir={dir}");
        assert!((size - SQRT_2).abs() < 1e-9, "size={size}");
    }

    #[test]
    fn tangent_line_to_arc_has_unit_scale() {
        let l = Line::new(Point2::new(0.0, -1.0), Vector2::new(1.0, 0.0));
        let a = Arc::new(Point2::new(1.0, 0.0), 1.0, -FRAC_PI_2, FRAC_PI_2);
        let (dir, size) = proj_xy(&l, 1.0, Some(&a));
        // A left-turning arc has its right-hand normal pointing outward, here -Y.
        assert!((dir - Vector2::new(0.0, -1.0)).norm() < TOLERANCE, "dir={dir}");
        assert!((size - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn vertical_sections_ignore_slope() {
        assert_eq!(proj_z(3.0, Some(-1.0)), (Vector2::y(), 1.0));
        assert_eq!(proj_z(0.0, None), (Vector2::y(), 1.0));
    }
}
