use crate::error::{GeometryError, Result};
use crate::math::{unit_or_zero_3d, Point2, Point3, Vector3};

use super::{Arc, SegmentProjection};

/// A 3D line segment, `P(t) = p + t * v`.
///
/// Normals and offsets are taken in the plane whose normal is `z_axis`.
/// Only evaluation, normals and offsetting are available; the planar
/// queries of [`super::Line`] report [`GeometryError::Unsupported`].
#[derive(Debug, Clone, PartialEq)]
pub struct Line3d {
    p: Point3,
    v: Vector3,
    z_axis: Vector3,
}

impl Default for Line3d {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::zeros())
    }
}

impl Line3d {
    /// Creates a line in the XY plane from an origin and a vector.
    #[must_use]
    pub fn new(p: Point3, v: Vector3) -> Self {
        Self {
            p,
            v,
            z_axis: Vector3::z(),
        }
    }

    /// Creates a line running from `p0` to `p1`.
    #[must_use]
    pub fn from_points(p0: Point3, p1: Point3) -> Self {
        Self::new(p0, p1 - p0)
    }

    /// Replaces the plane normal used for normals and offsets.
    #[must_use]
    pub fn with_z_axis(mut self, z_axis: Vector3) -> Self {
        self.z_axis = z_axis;
        self
    }

    /// Returns the plane normal.
    #[must_use]
    pub fn z_axis(&self) -> &Vector3 {
        &self.z_axis
    }

    /// Returns the size-and-direction vector.
    #[must_use]
    pub fn vector(&self) -> &Vector3 {
        &self.v
    }

    #[must_use]
    pub fn p0(&self) -> Point3 {
        self.p
    }

    #[must_use]
    pub fn p1(&self) -> Point3 {
        self.p + self.v
    }

    /// Moves the start point only.
    pub fn move_p0_to(&mut self, p0: Point3) {
        let p1 = self.p1();
        self.p = p0;
        self.v = p1 - p0;
    }

    /// Moves the end point only.
    pub fn move_p1_to(&mut self, p1: Point3) {
        self.v = p1 - self.p;
    }

    #[must_use]
    pub fn lerp(&self, t: f64) -> Point3 {
        self.p + self.v * t
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.v.norm()
    }

    /// Right-hand perpendicular in the XY plane, `v x Z`.
    #[must_use]
    pub fn cross_z(&self) -> Vector3 {
        self.v.cross(&Vector3::z())
    }

    /// Right-hand perpendicular in the plane of `z_axis`, `v x z_axis`.
    #[must_use]
    pub fn cross(&self) -> Vector3 {
        self.v.cross(&self.z_axis)
    }

    /// Perpendicular line at `t`, on the right-hand side.
    #[must_use]
    pub fn normal(&self, t: f64) -> Self {
        Self {
            p: self.lerp(t),
            v: self.cross(),
            z_axis: self.z_axis,
        }
    }

    /// Perpendicular line at `t` of length `size`, on the right when `size > 0`.
    #[must_use]
    pub fn sized_normal(&self, t: f64, size: f64) -> Self {
        Self {
            p: self.lerp(t),
            v: size * unit_or_zero_3d(&self.cross()),
            z_axis: self.z_axis,
        }
    }

    /// Returns a copy shifted to the right-hand side by `offset`.
    #[must_use]
    pub fn offset(&self, offset: f64) -> Self {
        Self {
            p: self.p + offset * unit_or_zero_3d(&self.cross()),
            v: self.v,
            z_axis: self.z_axis,
        }
    }

    /// # Errors
    ///
    /// Always returns [`GeometryError::Unsupported`].
    pub fn intersect(&self, _other: &Line3d) -> Result<(Point3, f64)> {
        Err(GeometryError::Unsupported("3d line intersection").into())
    }

    /// # Errors
    ///
    /// Always returns [`GeometryError::Unsupported`].
    pub fn point_sur_segment(&self, _pt: &Point2) -> Result<SegmentProjection> {
        Err(GeometryError::Unsupported("3d point projection").into())
    }

    /// # Errors
    ///
    /// Always returns [`GeometryError::Unsupported`].
    pub fn tangent_arc(&self, _t: f64, _da: f64, _radius: f64) -> Result<Arc> {
        Err(GeometryError::Unsupported("3d tangent arc").into())
    }
}
