use crate::math::line_2d::{inverse_lerp, lerp, linear_length};
use crate::math::sorted_range::{find_range_indices, RangeIndices};
use crate::math::Point2;

/// Cumulative chord lengths of a curve sampled at uniform parameter steps.
///
/// Entry `i` is the polyline length from the start to the sample at
/// `t = i / samples`. The first entry is always `0.0` and the sequence is
/// non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthTable {
    lengths: Vec<f64>,
}

impl LengthTable {
    /// Samples `point_at` at `samples` uniform parameters in `(0, 1]`.
    ///
    /// `start` stands in for `point_at(0.0)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build<F>(point_at: F, start: Point2, samples: usize) -> Self
    where
        F: Fn(f64) -> Point2,
    {
        let mut lengths = Vec::with_capacity(samples.saturating_add(1));
        lengths.push(0.0);

        let mut length = 0.0;
        let mut prev = start;
        for i in 1..=samples {
            let point = point_at(i as f64 / samples as f64);
            length += linear_length(prev, point);
            lengths.push(length);
            prev = point;
        }

        Self { lengths }
    }

    /// Cumulative lengths, one per sample.
    #[must_use]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// The final cumulative length.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Curve parameter of the sample at `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn parameter_at(&self, index: usize) -> f64 {
        let last = self.lengths.len().saturating_sub(1);
        if last == 0 {
            0.0
        } else {
            index as f64 / last as f64
        }
    }

    /// Estimates the curve parameter at which the accumulated length reaches `length`.
    ///
    /// Interpolates the parameter linearly between the two bracketing samples.
    /// Lengths beyond either end of the table resolve to that end.
    #[must_use]
    pub fn parameter_for_length(&self, length: f64) -> f64 {
        let (lo, hi) = match find_range_indices(&self.lengths, length) {
            RangeIndices {
                lower: Some(lo),
                upper: Some(hi),
            } => (lo, hi),
            RangeIndices {
                lower: Some(i),
                upper: None,
            }
            | RangeIndices {
                lower: None,
                upper: Some(i),
            } => (i, i),
            RangeIndices {
                lower: None,
                upper: None,
            } => return 0.0,
        };

        let ratio = inverse_lerp(self.lengths[lo], self.lengths[hi], length);
        lerp(self.parameter_at(lo), self.parameter_at(hi), ratio)
    }
}
