use std::f64::consts::PI;

use crate::math::intersect_2d::{line_line_intersect_2d, project_on_line_2d};
use crate::math::{polar_angle, right_perp, signed_angle, unit_or_zero, Point2, Vector2};

use super::{Arc, Curve, SegmentProjection};

/// A 2D line segment stored as an origin and a vector.
///
/// `P(t) = p + t * v`, so `p0 = p` and `p1 = p + v`. Moving `p` through
/// [`Line::translate`] moves both ends; [`Curve::move_p0_to`] and
/// [`Curve::move_p1_to`] move only one.
///
/// ```text
///   p1
///   ^
///   | v
///   p0 == p
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p: Point2,
    v: Vector2,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            p: Point2::origin(),
            v: Vector2::zeros(),
        }
    }
}

impl Line {
    /// Creates a line from an origin and a size-and-direction vector.
    #[must_use]
    pub fn new(p: Point2, v: Vector2) -> Self {
        Self { p, v }
    }

    /// Creates a line running from `p0` to `p1`.
    #[must_use]
    pub fn from_points(p0: Point2, p1: Point2) -> Self {
        Self { p: p0, v: p1 - p0 }
    }

    /// Returns the origin of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.p
    }

    /// Returns the size-and-direction vector of the line.
    #[must_use]
    pub fn vector(&self) -> &Vector2 {
        &self.v
    }

    /// Angle of the right-hand perpendicular.
    #[must_use]
    pub fn angle_normal(&self) -> f64 {
        (-self.v.x).atan2(self.v.y)
    }

    /// Right-hand perpendicular of the direction, not normalized.
    ///
    /// ```text
    ///   p1
    ///   |--x
    ///   p0
    /// ```
    #[must_use]
    pub fn cross_z(&self) -> Vector2 {
        right_perp(&self.v)
    }

    /// Same line walked from `p0` in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p, -self.v)
    }

    /// Same segment walked from `p1` back to `p0`.
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self::new(self.p + self.v, -self.v)
    }

    /// Intersection with the infinite extension of `other`.
    ///
    /// Returns the point and its parameter on `self`, or `None` for parallel
    /// (including collinear) lines. The parameter is not clamped to `[0, 1]`.
    #[must_use]
    pub fn intersect(&self, other: &Line) -> Option<(Point2, f64)> {
        let (t, _) = line_line_intersect_2d(&self.p, &self.v, &other.p, &other.v)?;
        Some((self.lerp(t), t))
    }

    /// Returns a copy shifted to the right-hand side by `offset`.
    #[must_use]
    pub fn offset(&self, offset: f64) -> Self {
        Self::new(self.p + offset * unit_or_zero(&self.cross_z()), self.v)
    }

    /// Shifts this line to the right-hand side by `offset`.
    pub fn in_place_offset(&mut self, offset: f64) {
        self.p += offset * unit_or_zero(&self.cross_z());
    }

    /// Moves both ends by `delta`.
    pub fn translate(&mut self, delta: &Vector2) {
        self.p += *delta;
    }

    /// Builds an arc tangent to this line at `t`, so a line can hand over
    /// to a following arc.
    ///
    /// The center lies on the left for `da >= 0` and on the right for
    /// `da < 0`, at distance `radius`. The arc starts at `lerp(t)`.
    #[must_use]
    pub fn tangent_arc(&self, t: f64, da: f64, radius: f64) -> Arc {
        let p = self.lerp(t);
        let n = unit_or_zero(&self.cross_z());
        if da < 0.0 {
            Arc::new(p + radius * n, radius, self.angle_normal() + PI, da)
        } else {
            Arc::new(p - radius * n, radius, self.angle_normal(), da)
        }
    }

    /// Rotates the direction by `da` around `p0`.
    pub fn rotate(&mut self, da: f64) -> &mut Self {
        let (sn, cs) = da.sin_cos();
        let (x, y) = (self.v.x, self.v.y);
        self.v = Vector2::new(x * cs - y * sn, x * sn + y * cs);
        self
    }

    /// Rescales the line to `length`, keeping `p0` and the direction.
    pub fn scale(&mut self, length: f64) -> &mut Self {
        self.v = length * unit_or_zero(&self.v);
        self
    }

    /// Signed angle between the end of `previous` and the start of this line.
    #[must_use]
    pub fn delta_angle(&self, previous: Option<&impl Curve>) -> f64 {
        match previous {
            Some(prev) => signed_angle(&prev.tangent_unit_vector(1.0), &self.tangent_unit_vector(0.0)),
            None => self.angle(),
        }
    }
}

impl Curve for Line {
    fn p0(&self) -> Point2 {
        self.p
    }

    fn p1(&self) -> Point2 {
        self.p + self.v
    }

    fn move_p0_to(&mut self, p0: Point2) {
        let p1 = self.p1();
        self.p = p0;
        self.v = p1 - p0;
    }

    fn move_p1_to(&mut self, p1: Point2) {
        self.v = p1 - self.p;
    }

    fn lerp(&self, t: f64) -> Point2 {
        self.p + self.v * t
    }

    fn length(&self) -> f64 {
        self.v.norm()
    }

    fn angle(&self) -> f64 {
        polar_angle(&self.v)
    }

    fn normal(&self, t: f64) -> Line {
        Line::new(self.lerp(t), self.cross_z())
    }

    fn sized_normal(&self, t: f64, size: f64) -> Line {
        Line::new(self.lerp(t), size * unit_or_zero(&self.cross_z()))
    }

    fn tangent_unit_vector(&self, _t: f64) -> Vector2 {
        unit_or_zero(&self.v)
    }

    fn straight(&self, length: f64, t: f64) -> Line {
        Line::new(self.lerp(t), unit_or_zero(&self.v) * length)
    }

    fn point_sur_segment(&self, pt: &Point2) -> SegmentProjection {
        let (distance, t) = project_on_line_2d(&self.p, &self.v, pt);
        SegmentProjection::new(distance, t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn pt(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn endpoints_match_lerp() {
        let l = Line::new(pt(1.0, 2.0), Vector2::new(3.0, -1.0));
        assert_eq!(l.lerp(0.0), l.p0());
        assert_eq!(l.lerp(1.0), l.p1());
        assert_abs_diff_eq!(l.p1(), pt(4.0, 1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn moving_one_end_keeps_the_other() {
        let mut l = Line::from_points(pt(0.0, 0.0), pt(2.0, 2.0));
        assert_eq!(l.p1(), pt(2.0, 2.0));

        l.move_p0_to(pt(-1.0, 5.0));
        assert_abs_diff_eq!(l.p1(), pt(2.0, 2.0), epsilon = TOLERANCE);
        assert_eq!(l.p0(), pt(-1.0, 5.0));

        l.move_p1_to(pt(7.0, 7.0));
        assert_eq!(l.p0(), pt(-1.0, 5.0));
        assert_abs_diff_eq!(l.p1(), pt(7.0, 7.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(l.lerp(1.0), l.p1(), epsilon = TOLERANCE);
    }

    #[test]
    fn angles_and_right_perpendicular() {
        let l = Line::new(pt(0.0, 0.0), Vector2::new(0.0, 2.0));
        assert!((l.angle() - FRAC_PI_2).abs() < TOLERANCE);
        // Walking up, the right-hand side is +X.
        assert!(l.angle_normal().abs() < TOLERANCE);
        assert_eq!(l.cross_z(), Vector2::new(2.0, 0.0));
    }

    #[test]
    fn normals_lie_on_the_right() {
        let l = Line::new(pt(0.0, 0.0), Vector2::new(4.0, 0.0));
        let n = l.normal(0.5);
        assert_eq!(n.p0(), pt(2.0, 0.0));
        assert_eq!(*n.vector(), Vector2::new(0.0, -4.0));

        let s = l.sized_normal(1.0, 2.0);
        assert_abs_diff_eq!(s.p1(), pt(4.0, -2.0), epsilon = TOLERANCE);
        let left = l.sized_normal(0.0, -1.5);
        assert_abs_diff_eq!(left.p1(), pt(0.0, 1.5), epsilon = TOLERANCE);
    }

    #[test]
    fn perpendicular_unit_lines_cross_at_origin() {
        let a = Line::new(pt(-1.0, 0.0), Vector2::new(1.0, 0.0));
        let b = Line::new(pt(0.0, -1.0), Vector2::new(0.0, 1.0));
        let (p, t) = a.intersect(&b).unwrap();
        assert!((t - 1.0).abs() < TOLERANCE, "t={t}");
        assert_abs_diff_eq!(p, Point2::origin(), epsilon = TOLERANCE);
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = Line::new(pt(0.0, 0.0), Vector2::new(1.0, 1.0));
        let b = Line::new(pt(0.0, 1.0), Vector2::new(-2.0, -2.0));
        assert!(a.intersect(&b).is_none());
        // Collinear is reported as parallel too.
        let c = Line::new(pt(5.0, 5.0), Vector2::new(1.0, 1.0));
        assert!(a.intersect(&c).is_none());
    }

    #[test]
    fn zero_length_line_does_not_panic() {
        let z = Line::default();
        let other = Line::new(pt(0.0, -1.0), Vector2::new(0.0, 1.0));
        assert!(z.intersect(&other).is_none());
        assert!(z.angle().abs() < TOLERANCE);
        assert_eq!(z.offset(3.0), z);
        assert!(z.sized_normal(0.0, 2.0).length().abs() < TOLERANCE);
        let proj = z.point_sur_segment(&pt(1.0, 1.0));
        assert!(!proj.on_segment);
        assert!(proj.distance.is_finite());
    }

    #[test]
    fn point_projection_is_signed_right_positive() {
        let l = Line::new(pt(0.0, 0.0), Vector2::new(10.0, 0.0));
        let right = l.point_sur_segment(&pt(2.5, -2.0));
        assert!(right.on_segment);
        assert!((right.distance - 2.0).abs() < TOLERANCE);
        assert!((right.t - 0.25).abs() < TOLERANCE);

        let left_behind = l.point_sur_segment(&pt(-5.0, 1.0));
        assert!(!left_behind.on_segment);
        assert!((left_behind.distance + 1.0).abs() < TOLERANCE);
        assert!((left_behind.t + 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn offset_round_trips() {
        let l = Line::new(pt(1.0, 1.0), Vector2::new(3.0, 4.0));
        let o = l.offset(2.0);
        assert_abs_diff_eq!(o.p0(), pt(1.0 + 1.6, 1.0 - 1.2), epsilon = TOLERANCE);
        let back = o.offset(-2.0);
        assert_abs_diff_eq!(back.p0(), l.p0(), epsilon = TOLERANCE);
        assert_abs_diff_eq!(back.p1(), l.p1(), epsilon = TOLERANCE);

        let mut m = l.clone();
        m.in_place_offset(2.0);
        assert_eq!(m, o);
    }

    #[test]
    fn tangent_arc_starts_on_the_line() {
        let l = Line::new(pt(0.0, 0.0), Vector2::new(2.0, 0.0));
        let left = l.tangent_arc(1.0, FRAC_PI_2, 1.0);
        assert_abs_diff_eq!(*left.center(), pt(2.0, 1.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(left.p0(), pt(2.0, 0.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(left.p1(), pt(3.0, 1.0), epsilon = TOLERANCE);

        let right = l.tangent_arc(1.0, -FRAC_PI_2, 1.0);
        assert_abs_diff_eq!(*right.center(), pt(2.0, -1.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(right.p1(), pt(3.0, -1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn rotate_and_scale_keep_origin() {
        let mut l = Line::new(pt(1.0, 1.0), Vector2::new(2.0, 0.0));
        l.rotate(FRAC_PI_2).scale(5.0);
        assert_eq!(l.p0(), pt(1.0, 1.0));
        assert_abs_diff_eq!(l.p1(), pt(1.0, 6.0), epsilon = 1e-9);
    }

    #[test]
    fn translate_moves_both_ends() {
        let mut l = Line::new(pt(1.0, 1.0), Vector2::new(2.0, 0.0));
        l.translate(&Vector2::new(-1.0, 3.0));
        assert_eq!(l.p0(), pt(0.0, 4.0));
        assert_eq!(l.p1(), pt(2.0, 4.0));
        assert_eq!(*l.vector(), Vector2::new(2.0, 0.0));
    }

    #[test]
    fn reversed_and_opposite() {
        let l = Line::new(pt(1.0, 0.0), Vector2::new(1.0, 0.0));
        assert_eq!(l.reversed().p1(), pt(0.0, 0.0));
        let o = l.opposite();
        assert_eq!(o.p0(), l.p1());
        assert_eq!(o.p1(), l.p0());
        // Negating +X gives -0.0 for y, which reads as -pi.
        assert!((o.angle().abs() - PI).abs() < TOLERANCE);
    }

    #[test]
    fn delta_angle_between_lines() {
        let a = Line::new(pt(0.0, 0.0), Vector2::new(1.0, 0.0));
        let b = Line::new(pt(1.0, 0.0), Vector2::new(0.0, 3.0));
        assert!((b.delta_angle(Some(&a)) - FRAC_PI_2).abs() < TOLERANCE);
        assert!((b.delta_angle(None::<&Line>) - FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn steps_never_below_one() {
        let l = Line::new(pt(0.0, 0.0), Vector2::new(1.0, 0.0));
        assert_eq!(l.steps(0.25), (0.25, 4));
        assert_eq!(l.steps(10.0), (1.0, 1));
        assert_eq!(l.straight(2.0, 1.0).p1(), pt(3.0, 0.0));
    }
}
