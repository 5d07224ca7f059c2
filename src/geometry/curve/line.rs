use crate::math::line_2d::{linear_length, point_on_line};
use crate::math::Point2;
use crate::tessellation::step_count;

use super::Curve;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Point2,
    pub to: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(from: Point2, to: Point2) -> Self {
        Self { from, to }
    }
}

impl Curve for LineSegment {
    fn start(&self) -> Point2 {
        self.from
    }

    fn end(&self) -> Point2 {
        self.to
    }

    fn point_at(&self, t: f64) -> Point2 {
        point_on_line(self.from, self.to, t)
    }

    fn approx_length(&self) -> f64 {
        linear_length(self.from, self.to)
    }

    /// Splits the segment into `ceil(length / max_step)` equal parts.
    #[allow(clippy::cast_precision_loss)]
    fn flatten(&self, max_step: f64) -> Vec<Point2> {
        let steps = step_count(self.approx_length(), max_step);
        (0..steps)
            .map(|i| self.point_at(i as f64 / steps as f64))
            .collect()
    }
}

/// Flattens the segment `p0 → p1` into points at most `step_size` apart.
///
/// The end point is not included.
#[must_use]
pub fn flatten_line(p0: Point2, p1: Point2, step_size: f64) -> Vec<Point2> {
    LineSegment::new(p0, p1).flatten(step_size)
}
