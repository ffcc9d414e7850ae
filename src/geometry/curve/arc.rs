use crate::math::arc_2d::{arc_point_at, arc_tangent_at, sweep_between};
use crate::math::{polar_angle, signed_angle, unit_or_zero, Matrix2, Point2, Vector2};

use super::{Circle, Curve, Line, SegmentProjection};

/// A circular arc in the XY plane.
///
/// Defined by a supporting [`Circle`], a start angle `a0` and a signed
/// sweep `da` (radians). `da > 0` runs counter-clockwise, `da < 0`
/// clockwise. `a0 = 0` points along +X from the center.
///
/// `P(t) = c + r * (cos(a0 + t*da), sin(a0 + t*da))` for `t` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    circle: Circle,
    a0: f64,
    da: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the supporting circle
    /// * `radius` - Radius, expected non-negative
    /// * `a0` - Start angle in radians
    /// * `da` - Signed sweep in radians
    #[must_use]
    pub fn new(center: Point2, radius: f64, a0: f64, da: f64) -> Self {
        Self {
            circle: Circle::new(center, radius),
            a0,
            da,
        }
    }

    /// Creates an arc around `center` from `p0` to the ray through `p1`,
    /// turning in the given direction.
    ///
    /// The radius is taken from `p0`; `p1` only fixes the end angle.
    #[must_use]
    pub fn from_center_and_points(center: Point2, p0: &Point2, p1: &Point2, ccw: bool) -> Self {
        let radial = p0 - center;
        Self::new(
            center,
            radial.norm(),
            polar_angle(&radial),
            sweep_between(&center, p0, p1, ccw),
        )
    }

    /// Returns the supporting circle.
    #[must_use]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        self.circle.center()
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    /// Returns the start angle.
    #[must_use]
    pub fn a0(&self) -> f64 {
        self.a0
    }

    /// Returns the signed sweep.
    #[must_use]
    pub fn da(&self) -> f64 {
        self.da
    }

    /// Sets the start angle; the end point moves with it.
    pub fn set_a0(&mut self, a0: f64) {
        self.a0 = a0;
    }

    /// Sets the sweep; only the end point moves.
    pub fn set_da(&mut self, da: f64) {
        self.da = da;
    }

    /// Whether the arc runs counter-clockwise.
    #[must_use]
    pub fn ccw(&self) -> bool {
        self.da > 0.0
    }

    /// Returns a concentric copy shifted to the right-hand side by `offset`.
    ///
    /// Walking counter-clockwise the right-hand side is outward, so the
    /// radius grows; walking clockwise it shrinks.
    #[must_use]
    pub fn offset(&self, offset: f64) -> Self {
        let radius = if self.da > 0.0 {
            self.radius() + offset
        } else {
            self.radius() - offset
        };
        Self::new(*self.center(), radius, self.a0, self.da)
    }

    /// Tangent line at `t` of the given length, pointing along the arc.
    #[must_use]
    pub fn tangent(&self, t: f64, length: f64) -> Line {
        Line::new(self.lerp(t), arc_tangent_at(self.a0, self.da, t) * length)
    }

    /// Step count for a target angular step: `(dt, n)` with `n >= 1`.
    #[must_use]
    pub fn steps_by_angle(&self, step_angle: f64) -> (f64, usize) {
        super::step_count(self.da.abs(), step_angle)
    }

    /// Rotates the arc by `da` around its start point.
    pub fn rotate(&mut self, da: f64) -> &mut Self {
        let p0 = self.p0();
        let (sn, cs) = da.sin_cos();
        let rotation = Matrix2::new(cs, -sn, sn, cs);
        self.circle.set_center(p0 + rotation * (self.center() - p0));
        self.a0 += da;
        self
    }

    /// Signed angle between the end of `previous` and the start of this arc.
    #[must_use]
    pub fn delta_angle(&self, previous: Option<&impl Curve>) -> f64 {
        match previous {
            Some(prev) => signed_angle(&prev.tangent_unit_vector(1.0), &self.tangent_unit_vector(0.0)),
            None => self.a0,
        }
    }

    /// Rotation-and-scale taking `u` onto `v`, with the scale factor.
    #[allow(clippy::float_cmp)]
    fn rot_scale(u: &Vector2, v: &Vector2) -> Option<(f64, Matrix2)> {
        let len = u.norm();
        if len == 0.0 {
            return None;
        }
        let a = signed_angle(u, v);
        let scale = v.norm() / len;
        let (sa, ca) = a.sin_cos();
        Some((
            scale,
            Matrix2::new(scale * ca, -scale * sa, scale * sa, scale * ca),
        ))
    }

    /// Maps the arc through the similarity fixing `pivot` and sending `from`
    /// to `to`. The start angle is rebuilt from `start`, the new start point.
    fn similarity(&mut self, pivot: &Point2, from: &Point2, to: &Point2, start: StartPoint) {
        let Some((scale, m)) = Self::rot_scale(&(from - pivot), &(to - pivot)) else {
            return;
        };
        let center = pivot + m * (self.center() - pivot);
        self.circle.set_center(center);
        self.circle.set_radius(self.radius() * scale);
        let start = match start {
            StartPoint::Moved => *to,
            StartPoint::Fixed => *pivot,
        };
        self.a0 = polar_angle(&(start - center));
    }
}

#[derive(Clone, Copy)]
enum StartPoint {
    Moved,
    Fixed,
}

impl Curve for Arc {
    fn p0(&self) -> Point2 {
        self.lerp(0.0)
    }

    fn p1(&self) -> Point2 {
        self.lerp(1.0)
    }

    /// Rotates and scales the arc around `p1` so it starts at `p0`.
    /// The sweep is kept.
    fn move_p0_to(&mut self, p0: Point2) {
        let (old, pivot) = (self.p0(), self.p1());
        self.similarity(&pivot, &old, &p0, StartPoint::Moved);
    }

    /// Rotates and scales the arc around `p0` so it ends at `p1`.
    /// The sweep is kept.
    fn move_p1_to(&mut self, p1: Point2) {
        let (old, pivot) = (self.p1(), self.p0());
        self.similarity(&pivot, &old, &p1, StartPoint::Fixed);
    }

    fn lerp(&self, t: f64) -> Point2 {
        arc_point_at(self.center(), self.radius(), self.a0, self.da, t)
    }

    fn length(&self) -> f64 {
        self.radius() * self.da.abs()
    }

    /// Angle of the chord `p0 -> p1`.
    fn angle(&self) -> f64 {
        polar_angle(&(self.p1() - self.p0()))
    }

    /// Radial line at `t`, always on the right-hand side of the travel.
    fn normal(&self, t: f64) -> Line {
        let p = self.lerp(t);
        if self.da < 0.0 {
            Line::new(p, self.center() - p)
        } else {
            Line::new(p, p - self.center())
        }
    }

    fn sized_normal(&self, t: f64, size: f64) -> Line {
        let n = self.normal(t);
        Line::new(n.p0(), size * unit_or_zero(n.vector()))
    }

    fn tangent_unit_vector(&self, t: f64) -> Vector2 {
        arc_tangent_at(self.a0, self.da, t)
    }

    fn straight(&self, length: f64, t: f64) -> Line {
        self.tangent(t, length)
    }

    /// `distance` is radial, positive outside the circle.
    #[allow(clippy::float_cmp)]
    fn point_sur_segment(&self, pt: &Point2) -> SegmentProjection {
        let dp = pt - self.center();
        let distance = dp.norm() - self.radius();
        let t = if self.da == 0.0 {
            0.0
        } else {
            (polar_angle(&dp) - self.a0) / self.da
        };
        SegmentProjection::new(distance, t)
    }
}
