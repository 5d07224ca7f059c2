//! Elliptical arc math utilities.
//!
//! SVG describes an arc by its endpoints, radii, x-axis rotation and two
//! flags. Flattening needs the center parameterization instead:
//!
//! `P(θ) = center + R(rotation) · (rx·cos θ, ry·sin θ)` for
//! `θ ∈ [start_angle, end_angle]`.

use std::f64::consts::PI;

use super::{Point2, Vector2, TOLERANCE};

/// Center parameterization of an elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseArc {
    /// Center of the ellipse.
    pub center: Point2,
    /// Effective x radius, scaled up if the requested radii could not span the endpoints.
    pub radius_x: f64,
    /// Effective y radius, scaled by the same factor as `radius_x`.
    pub radius_y: f64,
    /// Rotation of the ellipse x axis in radians.
    pub rotation: f64,
    /// Parametric angle of the start point.
    pub start_angle: f64,
    /// `start_angle` plus the signed sweep.
    pub end_angle: f64,
    /// `true` when the sweep runs towards negative angles (sweep flag unset).
    pub counterclockwise: bool,
}

impl EllipseArc {
    /// Signed parametric sweep, negative for counterclockwise arcs.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Evaluates the arc at `t ∈ [0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = self.start_angle + t * self.sweep_angle();
        let local = Vector2::new(self.radius_x * angle.cos(), self.radius_y * angle.sin());
        let (sin_phi, cos_phi) = self.rotation.sin_cos();
        self.center
            + Vector2::new(
                local.x * cos_phi - local.y * sin_phi,
                local.x * sin_phi + local.y * cos_phi,
            )
    }
}

/// Converts an SVG endpoint arc to its center parameterization.
///
/// Negative radii are taken by absolute value. Radii too small to connect the
/// endpoints are scaled up uniformly. A radius below [`TOLERANCE`] has no
/// center parameterization; the result is then a finite, empty arc centered
/// on the chord midpoint, and callers draw a straight line instead.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::similar_names)]
pub fn svg_arc_to_ellipse(
    start: Point2,
    radius_x: f64,
    radius_y: f64,
    x_axis_rotation_deg: f64,
    large_arc: bool,
    sweep: bool,
    end: Point2,
) -> EllipseArc {
    let rotation = x_axis_rotation_deg.to_radians();
    let (sin_phi, cos_phi) = rotation.sin_cos();
    let mut rx = radius_x.abs();
    let mut ry = radius_y.abs();
    if rx < TOLERANCE || ry < TOLERANCE {
        return EllipseArc {
            center: Point2::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0),
            radius_x: rx,
            radius_y: ry,
            rotation,
            start_angle: 0.0,
            end_angle: 0.0,
            counterclockwise: !sweep,
        };
    }

    // Half chord in the ellipse-aligned frame.
    let half = (start - end) / 2.0;
    let x1p = cos_phi * half.x + sin_phi * half.y;
    let y1p = -sin_phi * half.x + cos_phi * half.y;

    let radii_check = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if radii_check > 1.0 {
        let scale = radii_check.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let x1p2 = x1p * x1p;
    let y1p2 = y1p * y1p;

    let numerator = rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2;
    let denominator = rx2 * y1p2 + ry2 * x1p2;
    let mut center_factor = if denominator > 0.0 {
        (numerator / denominator).max(0.0).sqrt()
    } else {
        0.0
    };
    if large_arc == sweep {
        center_factor = -center_factor;
    }

    let cxp = center_factor * (rx * y1p) / ry;
    let cyp = center_factor * -(ry * x1p) / rx;

    let mid = Point2::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
    let center = Point2::new(
        cos_phi * cxp - sin_phi * cyp + mid.x,
        sin_phi * cxp + cos_phi * cyp + mid.y,
    );

    let unit_start = Vector2::new((x1p - cxp) / rx, (y1p - cyp) / ry);
    let unit_end = Vector2::new((-x1p - cxp) / rx, (-y1p - cyp) / ry);

    let start_angle = vector_angle(&Vector2::x(), &unit_start);
    let mut sweep_angle = vector_angle(&unit_start, &unit_end);
    if !sweep && sweep_angle > 0.0 {
        sweep_angle -= 2.0 * PI;
    }
    if sweep && sweep_angle < 0.0 {
        sweep_angle += 2.0 * PI;
    }

    EllipseArc {
        center,
        radius_x: rx,
        radius_y: ry,
        rotation,
        start_angle,
        end_angle: start_angle + sweep_angle,
        counterclockwise: !sweep,
    }
}

/// Signed angle from `u` to `v`, in `[-π, π]`.
///
/// Returns `0.0` if either vector has zero length.
#[must_use]
pub fn vector_angle(u: &Vector2, v: &Vector2) -> f64 {
    let magnitude = (u.norm_squared() * v.norm_squared()).sqrt();
    if magnitude <= 0.0 {
        return 0.0;
    }
    let angle = (u.dot(v) / magnitude).clamp(-1.0, 1.0).acos();
    if u.perp(v) < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Ramanujan's second approximation of an ellipse perimeter.
#[must_use]
pub fn ellipse_perimeter(radius_x: f64, radius_y: f64) -> f64 {
    let a = radius_x.max(radius_y);
    let b = radius_x.min(radius_y);
    let sum = a + b;
    if sum <= 0.0 {
        return 0.0;
    }
    let h = (a - b).powi(2) / sum.powi(2);
    PI * sum * (1.0 + (3.0 * h) / (10.0 + (4.0 - 3.0 * h).sqrt()))
}
