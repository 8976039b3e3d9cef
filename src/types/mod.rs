pub mod range;
pub mod units;

pub use uom::si::f64::Angle;
pub use uom::si::angle::{degree, radian};

pub use range::{InputRange, InputError};
pub use units::{AngleValue, DisplayAngle, DisplayMatrix2, DisplayMatrix3, UnitError, WithUnit};

// Re-export nalgebra
pub use nalgebra as na;

/// Tolerance used when checking orthonormality and unit determinants
pub const ROTATION_TOLERANCE: f64 = 1e-9;

/// Build an [`Angle`] from degrees
#[inline]
pub fn deg(value: f64) -> Angle {
    Angle::new::<degree>(value)
}

/// Read an [`Angle`] back as degrees
#[inline]
pub fn to_degrees(angle: Angle) -> f64 {
    angle.get::<degree>()
}

/// Format a degree value for labels: at most six decimals, no trailing zeros
pub fn format_degrees(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(to_degrees(deg(30.0))), "30");
        assert_eq!(format_degrees(-0.0), "0");
        assert_eq!(format_degrees(12.5), "12.5");
        assert_eq!(format_degrees(-20.0), "-20");
    }
}
