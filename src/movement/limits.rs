use serde::{Deserialize, Serialize};
use crate::types::*;
use crate::types::range::check_finite;
use crate::kinematics::PlanarRotation;
use crate::movement::Movement;

#[derive(Debug, thiserror::Error)]
pub enum LimitsError {
    #[error("Unit conversion error: {0}")]
    UnitError(#[from] UnitError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{movement} limits are inverted: min {min}° > max {max}°")]
    Inverted { movement: Movement, min: f64, max: f64 },

    #[error("{0} has no single-angle range of motion")]
    NotPlanar(Movement),
}

/// Range of motion of each planar wrist movement, in degrees.
///
/// Defaults follow the AAOS reference values. Deviation and extension
/// ranges sit on the negative side so each movement rotates away from the
/// neutral axis in its own direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MotionLimitsConfig", into = "MotionLimitsConfig")]
pub struct MotionLimits {
    pub radial_deviation: InputRange,
    pub ulnar_deviation: InputRange,
    pub flexion: InputRange,
    pub extension: InputRange,
}

impl Default for MotionLimits {
    fn default() -> Self {
        Self::aaos()
    }
}

impl MotionLimits {
    /// American Academy of Orthopaedic Surgeons reference ranges
    pub fn aaos() -> Self {
        Self {
            radial_deviation: InputRange::new(-20.0, 0.0),
            ulnar_deviation: InputRange::new(0.0, 30.0),
            flexion: InputRange::new(0.0, 80.0),
            extension: InputRange::new(-70.0, 0.0),
        }
    }

    /// Range for a planar movement, `None` for circumduction and general SO(3)
    pub fn range(&self, movement: Movement) -> Option<InputRange> {
        match movement {
            Movement::RadialDeviation => Some(self.radial_deviation),
            Movement::UlnarDeviation => Some(self.ulnar_deviation),
            Movement::Flexion => Some(self.flexion),
            Movement::Extension => Some(self.extension),
            Movement::Circumduction | Movement::GeneralRotation => None,
        }
    }

    /// Check `degrees` against the movement's range and build its rotation
    pub fn rotation(&self, movement: Movement, degrees: f64) -> Result<PlanarRotation, LimitsError> {
        let range = self.range(movement).ok_or(LimitsError::NotPlanar(movement))?;
        let degrees = range.check(movement.label(), degrees)?;
        Ok(PlanarRotation::new(deg(degrees)))
    }

    /// Every range must be finite with `min <= max`
    pub fn validate(&self) -> Result<(), LimitsError> {
        for movement in Movement::ALL.into_iter().filter(Movement::is_planar) {
            if let Some(range) = self.range(movement) {
                check_finite(movement.label(), range.min)?;
                check_finite(movement.label(), range.max)?;
                if range.min > range.max {
                    return Err(LimitsError::Inverted {
                        movement,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
        }
        Ok(())
    }
}

/// On-disk form of one range, with explicit units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeOfMotionConfig {
    pub min: AngleValue,
    pub max: AngleValue,
}

impl RangeOfMotionConfig {
    fn degrees(min: f64, max: f64) -> Self {
        Self {
            min: AngleValue::degrees(min),
            max: AngleValue::degrees(max),
        }
    }

    fn to_range(&self) -> Result<InputRange, UnitError> {
        Ok(InputRange::new(self.min.to_degrees()?, self.max.to_degrees()?))
    }
}

impl From<InputRange> for RangeOfMotionConfig {
    fn from(range: InputRange) -> Self {
        Self::degrees(range.min, range.max)
    }
}

/// On-disk form of [`MotionLimits`]; missing movements keep their AAOS range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionLimitsConfig {
    pub radial_deviation: RangeOfMotionConfig,
    pub ulnar_deviation: RangeOfMotionConfig,
    pub flexion: RangeOfMotionConfig,
    pub extension: RangeOfMotionConfig,
}

impl Default for MotionLimitsConfig {
    fn default() -> Self {
        MotionLimits::aaos().into()
    }
}

impl From<MotionLimits> for MotionLimitsConfig {
    fn from(limits: MotionLimits) -> Self {
        Self {
            radial_deviation: limits.radial_deviation.into(),
            ulnar_deviation: limits.ulnar_deviation.into(),
            flexion: limits.flexion.into(),
            extension: limits.extension.into(),
        }
    }
}

impl TryFrom<MotionLimitsConfig> for MotionLimits {
    type Error = LimitsError;

    fn try_from(config: MotionLimitsConfig) -> Result<Self, Self::Error> {
        let limits = Self {
            radial_deviation: config.radial_deviation.to_range()?,
            ulnar_deviation: config.ulnar_deviation.to_range()?,
            flexion: config.flexion.to_range()?,
            extension: config.extension.to_range()?,
        };
        limits.validate()?;
        Ok(limits)
    }
}
