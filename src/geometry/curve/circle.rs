use crate::math::{Point2, DEGENERATE_DIRECTION};

use super::{Curve, Line};

/// An infinite circle in the XY plane.
///
/// The radius is not validated; a negative radius gives meaningless but
/// finite results downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
    radius_sq: f64,
}

/// Outcome of [`Circle::intersect`].
///
/// When `found` is false, `point` is the closest point of the line to the
/// circle center and `t` its parameter on the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleIntersection {
    pub found: bool,
    pub point: Point2,
    pub t: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
        }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the squared radius.
    #[must_use]
    pub fn radius_sq(&self) -> f64 {
        self.radius_sq
    }

    pub(crate) fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    pub(crate) fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.radius_sq = radius * radius;
    }

    /// Intersects the circle with the infinite extension of `line`.
    ///
    /// Solves `|p + t*v - c|^2 = r^2`. Of two roots, the one with the
    /// smaller `|t|` wins, i.e. the one nearest the line origin in parameter
    /// space. A line that misses the circle, or has no direction, yields its
    /// closest point to the center with `found == false`.
    #[must_use]
    #[allow(clippy::float_cmp, clippy::many_single_char_names)]
    pub fn intersect(&self, line: &Line) -> CircleIntersection {
        let v = line.vector();
        let w = line.origin() - self.center;
        let a = v.dot(v);
        let b = 2.0 * w.dot(v);
        let c = w.dot(&w) - self.radius_sq;
        let d = b * b - 4.0 * a * c;

        if a <= DEGENERATE_DIRECTION || d < 0.0 {
            let foot = line.point_sur_segment(&self.center);
            return CircleIntersection {
                found: false,
                point: line.lerp(foot.t),
                t: foot.t,
            };
        }

        let t = if d == 0.0 {
            -b / (2.0 * a)
        } else {
            let dsq = d.sqrt();
            let t0 = (-b + dsq) / (2.0 * a);
            let t1 = (-b - dsq) / (2.0 * a);
            if t0.abs() < t1.abs() {
                t0
            } else {
                t1
            }
        };

        CircleIntersection {
            found: true,
            point: line.lerp(t),
            t,
        }
    }
}
