mod flatten_curve;
mod length_table;

pub use flatten_curve::{flatten_curve, MAX_STEPS, OVERSAMPLING};
pub use length_table::LengthTable;

pub(crate) use flatten_curve::step_count;

use crate::error::{ParamsError, Result};
use crate::math::Point2;

/// Parameters controlling flattening density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenOptions {
    /// Maximum distance between consecutive output points.
    pub max_step_size: f64,
}

impl FlattenOptions {
    /// Creates options with the given maximum distance between output points.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_step_size` is not positive and finite.
    pub fn new(max_step_size: f64) -> Result<Self> {
        let options = Self { max_step_size };
        options.validate()?;
        Ok(options)
    }

    /// Checks that the step size is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::InvalidStepSize`] if the step size is not positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.max_step_size.is_finite() && self.max_step_size > 0.0 {
            Ok(())
        } else {
            Err(ParamsError::InvalidStepSize(self.max_step_size).into())
        }
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self { max_step_size: 1.0 }
    }
}

/// An open chain of points produced by flattening.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
