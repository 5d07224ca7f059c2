use crate::math::line_2d::point_on_line;
use crate::math::quadrature::integrate_unit_premapped;
use crate::math::Point2;

use super::Curve;

/// A quadratic Bézier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub from: Point2,
    pub ctrl: Point2,
    pub to: Point2,
}

impl QuadraticBezier {
    /// Creates a new curve.
    #[must_use]
    pub fn new(from: Point2, ctrl: Point2, to: Point2) -> Self {
        Self { from, ctrl, to }
    }

    /// Speed `|B'(t)|` of the parameterization.
    #[must_use]
    pub fn speed(&self, t: f64) -> f64 {
        let d = (self.ctrl - self.from) * (2.0 * (1.0 - t)) + (self.to - self.ctrl) * (2.0 * t);
        d.norm()
    }
}

impl Curve for QuadraticBezier {
    fn start(&self) -> Point2 {
        self.from
    }

    fn end(&self) -> Point2 {
        self.to
    }

    fn point_at(&self, t: f64) -> Point2 {
        let q0 = point_on_line(self.from, self.ctrl, t);
        let q1 = point_on_line(self.ctrl, self.to, t);
        point_on_line(q0, q1, t)
    }

    /// Gauss–Legendre estimate of the arc length.
    fn approx_length(&self) -> f64 {
        integrate_unit_premapped(|t| self.speed(t))
    }
}

/// Flattens a quadratic Bézier into points at most `max_step_size` apart.
///
/// The end point is not included.
#[must_use]
pub fn flatten_quadratic_bezier(p0: Point2, p1: Point2, p2: Point2, max_step_size: f64) -> Vec<Point2> {
    QuadraticBezier::new(p0, p1, p2).flatten(max_step_size)
}
