use tracing::debug;

use crate::math::arc_2d::{ellipse_perimeter, svg_arc_to_ellipse, EllipseArc};
use crate::math::line_2d::{linear_length, point_on_line};
use crate::math::{Point2, TOLERANCE};
use crate::tessellation::flatten_curve;

use super::{Curve, LineSegment};

/// An elliptical arc described SVG-style by its endpoints.
///
/// Degenerate input follows the SVG rules: a zero radius turns the arc into
/// a straight segment, and coincident endpoints draw nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    from: Point2,
    to: Point2,
    ellipse: Option<EllipseArc>,
}

impl EllipticalArc {
    /// Creates an arc from SVG endpoint parameters.
    ///
    /// # Arguments
    ///
    /// * `from` - Start point
    /// * `radius_x`, `radius_y` - Requested radii (scaled up if too small)
    /// * `x_axis_rotation_deg` - Rotation of the ellipse x axis in degrees
    /// * `large_arc` - Pick the arc spanning more than 180 degrees
    /// * `sweep` - Pick the arc running towards increasing angles
    /// * `to` - End point
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_svg(
        from: Point2,
        radius_x: f64,
        radius_y: f64,
        x_axis_rotation_deg: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2,
    ) -> Self {
        let ellipse = if radius_x.abs() < TOLERANCE || radius_y.abs() < TOLERANCE {
            debug!(radius_x, radius_y, "zero arc radius, treating arc as a line");
            None
        } else {
            Some(svg_arc_to_ellipse(
                from,
                radius_x,
                radius_y,
                x_axis_rotation_deg,
                large_arc,
                sweep,
                to,
            ))
        };
        Self { from, to, ellipse }
    }

    /// The center parameterization, or `None` if the arc degenerated to a line.
    #[must_use]
    pub fn ellipse(&self) -> Option<&EllipseArc> {
        self.ellipse.as_ref()
    }

    fn is_empty(&self) -> bool {
        linear_length(self.from, self.to) < TOLERANCE
    }
}

impl Curve for EllipticalArc {
    fn start(&self) -> Point2 {
        self.from
    }

    fn end(&self) -> Point2 {
        self.to
    }

    fn point_at(&self, t: f64) -> Point2 {
        match &self.ellipse {
            Some(ellipse) => ellipse.point_at(t),
            None => point_on_line(self.from, self.to, t),
        }
    }

    /// Full perimeter of the effective ellipse; only sizes the length table.
    fn approx_length(&self) -> f64 {
        match &self.ellipse {
            Some(ellipse) => ellipse_perimeter(ellipse.radius_x, ellipse.radius_y),
            None => linear_length(self.from, self.to),
        }
    }

    fn flatten(&self, max_step: f64) -> Vec<Point2> {
        if self.is_empty() {
            return Vec::new();
        }
        match &self.ellipse {
            Some(ellipse) => flatten_curve(
                |t| ellipse.point_at(t),
                self.approx_length(),
                self.from,
                max_step,
            ),
            None => LineSegment::new(self.from, self.to).flatten(max_step),
        }
    }
}

/// Flattens an SVG arc into points at most `max_step_size` apart.
///
/// The end point is not included.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn flatten_arc(
    start: Point2,
    radius_x: f64,
    radius_y: f64,
    x_axis_rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
    end: Point2,
    max_step_size: f64,
) -> Vec<Point2> {
    EllipticalArc::from_svg(start, radius_x, radius_y, x_axis_rotation_deg, large_arc, sweep, end)
        .flatten(max_step_size)
}
