use std::f64::consts::PI;

use crate::error::{Result, TessellationError};

/// Sampling resolution for lines and arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    step_length: f64,
    step_angle: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            step_length: 0.1,
            step_angle: PI / 16.0,
        }
    }
}

impl SamplingParams {
    /// Creates sampling parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if either step is not a positive finite number.
    pub fn new(step_length: f64, step_angle: f64) -> Result<Self> {
        if !(step_length.is_finite() && step_length > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "step length must be positive, got {step_length}"
            ))
            .into());
        }
        if !(step_angle.is_finite() && step_angle > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "step angle must be positive, got {step_angle}"
            ))
            .into());
        }
        Ok(Self {
            step_length,
            step_angle,
        })
    }

    /// Target distance between consecutive samples.
    #[must_use]
    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Target angle between consecutive arc samples, in radians.
    #[must_use]
    pub fn step_angle(&self) -> f64 {
        self.step_angle
    }
}
