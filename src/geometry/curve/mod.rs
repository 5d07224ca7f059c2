mod arc;
mod cubic;
mod line;
mod quadratic;

pub use arc::{flatten_arc, EllipticalArc};
pub use cubic::{flatten_cubic_bezier, CubicBezier};
pub use line::{flatten_line, LineSegment};
pub use quadratic::{flatten_quadratic_bezier, QuadraticBezier};

use crate::math::Point2;
use crate::tessellation::flatten_curve;

/// A bounded planar curve parameterized over `t ∈ [0, 1]`.
pub trait Curve {
    /// The point at `t = 0`.
    fn start(&self) -> Point2;

    /// The point at `t = 1`.
    fn end(&self) -> Point2;

    /// Evaluates the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Cheap estimate of the curve length, used to size the length table.
    fn approx_length(&self) -> f64;

    /// Flattens the curve into points at most `max_step` apart.
    ///
    /// The first point is [`Curve::start`]; the end point is not included.
    fn flatten(&self, max_step: f64) -> Vec<Point2> {
        flatten_curve(
            |t| self.point_at(t),
            self.approx_length(),
            self.start(),
            max_step,
        )
    }
}
