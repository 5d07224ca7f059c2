use tracing::{trace, warn};

use crate::math::Point2;

use super::LengthTable;

/// Length-table samples per estimated output step.
///
/// Chords underestimate arc length on curved spans, so the table is sampled
/// more densely than the output.
pub const OVERSAMPLING: f64 = 1.2;

/// Upper bound on the steps a single curve may be split into.
///
/// Larger counts come from step sizes far below the curve's scale; the curve
/// then yields no points rather than an allocation that cannot succeed.
pub const MAX_STEPS: usize = 1 << 24;

/// Number of steps of at most `max_step` needed to cover `length`.
///
/// Non-finite or non-positive ratios yield zero steps, as do counts above
/// [`MAX_STEPS`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn step_count(length: f64, max_step: f64) -> usize {
    let steps = (length / max_step).ceil();
    if !(steps.is_finite() && steps > 0.0) {
        return 0;
    }
    if steps > MAX_STEPS as f64 {
        warn!(length, max_step, "step count exceeds {MAX_STEPS}, emitting no points");
        return 0;
    }
    steps as usize
}

/// Flattens a parametric curve into points spaced evenly along its length.
///
/// `point_at` maps `t ∈ [0, 1]` onto the curve, `approx_length` sizes the
/// length table, and `start` must equal `point_at(0.0)`; it is emitted
/// verbatim as the first point.
///
/// Returns `ceil(L / max_step)` points, where `L` is the sampled length, at
/// equal arc-length intervals from `t = 0` up to but excluding `t = 1`.
/// Callers append the end point themselves. Curves needing more than
/// [`MAX_STEPS`] steps yield no points.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn flatten_curve<F>(point_at: F, approx_length: f64, start: Point2, max_step: f64) -> Vec<Point2>
where
    F: Fn(f64) -> Point2,
{
    let approx_steps = step_count(approx_length, max_step);
    let samples = (approx_steps as f64 * OVERSAMPLING).ceil() as usize;
    let table = LengthTable::build(&point_at, start, samples);

    let total_length = table.total_length();
    let steps = step_count(total_length, max_step);
    trace!(approx_length, samples, total_length, steps, "flattening curve");
    if steps == 0 {
        return Vec::new();
    }

    let step_size = total_length / steps as f64;
    let mut points = Vec::with_capacity(steps);
    points.push(start);
    points.extend((1..steps).map(|i| point_at(table.parameter_for_length(i as f64 * step_size))));
    points
}
