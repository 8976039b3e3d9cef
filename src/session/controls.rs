use serde::{Deserialize, Serialize};
use crate::types::*;

/// One slider as the UI layer should draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl Slider {
    pub fn new(label: impl Into<String>, range: InputRange, default: f64, step: f64) -> Self {
        Self {
            label: label.into(),
            min: range.min,
            max: range.max,
            default,
            step,
        }
    }

    pub fn range(&self) -> InputRange {
        InputRange::new(self.min, self.max)
    }

    /// Nearest value a drag could produce: on the step grid from `min`, within bounds
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.range().clamp(value);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        // Re-derive from the step count so 0.1 increments don't drift
        let snapped = self.min + steps * self.step;
        let decimals = decimals_of(self.step);
        let factor = 10f64.powi(decimals);
        self.range().clamp((snapped * factor).round() / factor)
    }
}

/// Decimal places needed to print `step` exactly (up to 6)
fn decimals_of(step: f64) -> i32 {
    (0..=6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(6)
}

/// Values read from the sliders for one interaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Inputs {
    /// One angle in degrees
    Planar { angle: f64 },
    Circumduction { radius: f64, steps: usize },
    /// Euler angles in degrees about X, Y, Z
    Spatial { x: f64, y: f64, z: f64 },
}

impl Inputs {
    pub fn kind(&self) -> &'static str {
        match self {
            Inputs::Planar { .. } => "planar",
            Inputs::Circumduction { .. } => "circumduction",
            Inputs::Spatial { .. } => "spatial",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_integer_degrees() {
        let slider = Slider::new("Angle", InputRange::new(-20.0, 0.0), -20.0, 1.0);
        assert_eq!(slider.snap(-7.4), -7.0);
        assert_eq!(slider.snap(-25.0), -20.0);
        assert_eq!(slider.snap(3.0), 0.0);
    }

    #[test]
    fn test_snap_to_tenths() {
        let slider = Slider::new("Radius", InputRange::new(0.1, 1.5), 1.0, 0.1);
        assert_eq!(slider.snap(0.74), 0.7);
        assert_eq!(slider.snap(1.5), 1.5);
        assert_eq!(slider.snap(0.0), 0.1);
    }

    #[test]
    fn test_inputs_json_shape() {
        let json = serde_json::to_string(&Inputs::Circumduction { radius: 1.0, steps: 50 }).unwrap();
        assert_eq!(json, r#"{"mode":"circumduction","radius":1.0,"steps":50}"#);

        let parsed: Inputs = serde_json::from_str(r#"{"mode":"spatial","x":90,"y":0,"z":0}"#).unwrap();
        assert_eq!(parsed, Inputs::Spatial { x: 90.0, y: 0.0, z: 0.0 });
    }
}
