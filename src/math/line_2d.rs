//! Scalar and point interpolation along straight lines.

use super::Point2;

/// Returns `p0 + t * (p1 - p0)`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate along the line.
#[must_use]
pub fn point_on_line(p0: Point2, p1: Point2, t: f64) -> Point2 {
    p0 + (p1 - p0) * t
}

/// Euclidean distance between two points.
#[must_use]
pub fn linear_length(p0: Point2, p1: Point2) -> f64 {
    (p1 - p0).norm()
}

/// Linear interpolation between two scalars.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the fraction at which `v` lies between `a` and `b`.
///
/// Returns `0.0` when the bracket is degenerate (`a == b`).
#[must_use]
#[allow(clippy::float_cmp)]
pub fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    if a == b {
        0.0
    } else {
        (v - a) / (b - a)
    }
}
