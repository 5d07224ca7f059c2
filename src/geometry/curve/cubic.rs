use crate::math::line_2d::point_on_line;
use crate::math::quadrature::integrate_unit;
use crate::math::{Point2, Vector2};

use super::Curve;

/// A cubic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub from: Point2,
    pub ctrl1: Point2,
    pub ctrl2: Point2,
    pub to: Point2,
}

impl CubicBezier {
    /// Creates a new curve.
    #[must_use]
    pub fn new(from: Point2, ctrl1: Point2, ctrl2: Point2, to: Point2) -> Self {
        Self {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Derivative `B'(t)`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector2 {
        let mt = 1.0 - t;
        (self.ctrl1 - self.from) * (3.0 * mt * mt)
            + (self.ctrl2 - self.ctrl1) * (6.0 * mt * t)
            + (self.to - self.ctrl2) * (3.0 * t * t)
    }
}

impl Curve for CubicBezier {
    fn start(&self) -> Point2 {
        self.from
    }

    fn end(&self) -> Point2 {
        self.to
    }

    fn point_at(&self, t: f64) -> Point2 {
        let q0 = point_on_line(self.from, self.ctrl1, t);
        let q1 = point_on_line(self.ctrl1, self.ctrl2, t);
        let q2 = point_on_line(self.ctrl2, self.to, t);
        let r0 = point_on_line(q0, q1, t);
        let r1 = point_on_line(q1, q2, t);
        point_on_line(r0, r1, t)
    }

    /// Gauss–Legendre estimate of the arc length.
    fn approx_length(&self) -> f64 {
        integrate_unit(|t| self.derivative(t).norm())
    }
}

/// Flattens a cubic Bézier into points at most `max_step_size` apart.
///
/// The end point is not included.
#[must_use]
pub fn flatten_cubic_bezier(
    p0: Point2,
    p1: Point2,
    p2: Point2,
    p3: Point2,
    max_step_size: f64,
) -> Vec<Point2> {
    CubicBezier::new(p0, p1, p2, p3).flatten(max_step_size)
}
