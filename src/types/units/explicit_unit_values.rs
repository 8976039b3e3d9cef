use serde::{self, Deserialize, Serialize};
use uom::si::{angle::{degree, radian}, f64::Angle};
use std::marker::PhantomData;

/// A raw value paired with the unit it was written in (config files, JSON)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type AngleValue = WithUnit<Angle>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for WithUnit<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.unit == other.unit
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown angle unit: {0}")]
    UnknownAngleUnit(String),
}

enum AngleUnit {
    Degree,
    Radian,
}

fn parse_angle_unit(unit: &str) -> Option<AngleUnit> {
    match unit {
        "deg" | "Deg" | "DEG"
        | "degree" | "Degree" | "DEGREE"
        | "degrees" | "Degrees" | "DEGREES" | "°" => Some(AngleUnit::Degree),
        "rad" | "Rad" | "RAD"
        | "rads" | "Rads" | "RADS"
        | "radian" | "Radian" | "RADIAN"
        | "radians" | "Radians" | "RADIANS" => Some(AngleUnit::Radian),
        _ => None,
    }
}

impl WithUnit<Angle> {
    /// Shorthand for a value in degrees
    pub fn degrees(value: f64) -> Self {
        Self::new(value, "deg")
    }

    pub fn to_angle(&self) -> Result<Angle, UnitError> {
        match parse_angle_unit(&self.unit) {
            Some(AngleUnit::Degree) => Ok(Angle::new::<degree>(self.value)),
            Some(AngleUnit::Radian) => Ok(Angle::new::<radian>(self.value)),
            None => Err(UnitError::UnknownAngleUnit(self.unit.clone())),
        }
    }

    /// The value expressed in degrees, without a round trip through radians
    /// when it was already written in degrees.
    pub fn to_degrees(&self) -> Result<f64, UnitError> {
        match parse_angle_unit(&self.unit) {
            Some(AngleUnit::Degree) => Ok(self.value),
            Some(AngleUnit::Radian) => Ok(self.value.to_degrees()),
            None => Err(UnitError::UnknownAngleUnit(self.unit.clone())),
        }
    }

    pub fn from_angle(angle: Angle, unit: &str) -> Result<Self, UnitError> {
        let value = match parse_angle_unit(unit) {
            Some(AngleUnit::Degree) => angle.get::<degree>(),
            Some(AngleUnit::Radian) => angle.get::<radian>(),
            None => return Err(UnitError::UnknownAngleUnit(unit.to_string())),
        };

        Ok(Self::new(value, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_spellings() {
        for unit in ["deg", "Degrees", "°"] {
            let angle = AngleValue::new(30.0, unit).to_angle().unwrap();
            assert_relative_eq!(angle.get::<degree>(), 30.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_radians_to_degrees() {
        let value = AngleValue::new(std::f64::consts::FRAC_PI_2, "rad");
        assert_relative_eq!(value.to_degrees().unwrap(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_unit() {
        let err = AngleValue::new(1.0, "grad").to_angle().unwrap_err();
        assert!(matches!(err, UnitError::UnknownAngleUnit(ref u) if u == "grad"));
    }

    #[test]
    fn test_from_angle() {
        let value = AngleValue::from_angle(Angle::new::<degree>(180.0), "rad").unwrap();
        assert_relative_eq!(value.value, std::f64::consts::PI, epsilon = 1e-12);
        assert_eq!(value.unit, "rad");
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            min: AngleValue,
        }

        let parsed: Wrapper = toml::from_str("min = { value = -20.0, unit = \"deg\" }").unwrap();
        assert_eq!(parsed.min, AngleValue::degrees(-20.0));
    }
}
