use serde::{Deserialize, Serialize};
use std::fmt;

/// Input validation failures for angles, radii and step counts.
///
/// Sliders keep values in range, but every computation that is reachable
/// programmatically checks again and reports the offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("step count {value} is outside the allowed range [{min}, {max}]")]
    StepsOutOfRange { value: usize, min: usize, max: usize },
}

/// Closed interval `[min, max]` accepted for one input (degrees for angles)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range of the general SO(3) sliders
    pub const FULL_TURN: InputRange = InputRange::new(-180.0, 180.0);

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Return `value` unchanged if it is finite and inside the range
    pub fn check(&self, field: &str, value: f64) -> Result<f64, InputError> {
        let value = check_finite(field, value)?;
        if !self.contains(value) {
            return Err(InputError::OutOfRange {
                field: field.to_string(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

impl fmt::Display for InputRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

pub fn check_finite(field: &str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field: field.to_string() })
    }
}
