pub mod arc_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 2x2 matrix, used for the rotate-and-scale of arc endpoints.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Squared direction length below which a line is treated as a point
/// when intersected with a circle.
pub const DEGENERATE_DIRECTION: f64 = 1e-7;

/// 2D cross product (z component of `u x v`).
#[must_use]
pub fn cross_2d(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Signed angle from `u` to `v` in `(-pi, pi]`, positive counter-clockwise.
#[must_use]
pub fn signed_angle(u: &Vector2, v: &Vector2) -> f64 {
    cross_2d(u, v).atan2(u.dot(v))
}

/// Right-hand perpendicular of `v` (rotated by -90 degrees), not normalized.
#[must_use]
pub fn right_perp(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Normalizes `v`, returning the zero vector for zero-length input
/// instead of propagating NaN.
#[must_use]
pub fn unit_or_zero(v: &Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}

/// 3D counterpart of [`unit_or_zero`].
#[must_use]
pub fn unit_or_zero_3d(v: &Vector3) -> Vector3 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros)
}

/// Angle of the vector `v` in `(-pi, pi]`.
#[must_use]
pub fn polar_angle(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn signed_angle_is_ccw_positive() {
        let x = Vector2::x();
        let y = Vector2::y();
        assert_abs_diff_eq!(signed_angle(&x, &y), FRAC_PI_2, epsilon = TOLERANCE);
        assert_abs_diff_eq!(signed_angle(&y, &x), -FRAC_PI_2, epsilon = TOLERANCE);
        assert_abs_diff_eq!(signed_angle(&x, &-x), PI, epsilon = TOLERANCE);
    }

    #[test]
    fn right_perp_points_right() {
        // Walking along +X, the right-hand side is -Y.
        assert_eq!(right_perp(&Vector2::x()), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn unit_of_zero_is_zero() {
        assert_eq!(unit_or_zero(&Vector2::zeros()), Vector2::zeros());
        assert_eq!(unit_or_zero_3d(&Vector3::zeros()), Vector3::zeros());
        assert_abs_diff_eq!(unit_or_zero(&Vector2::new(3.0, 4.0)).norm(), 1.0, epsilon = TOLERANCE);
    }
}
