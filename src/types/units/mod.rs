mod display;
mod explicit_unit_values;

pub use uom::si::f64::Angle;
pub use uom::si::angle::{degree, radian};

pub use display::{DisplayAngle, DisplayMatrix2, DisplayMatrix3};
pub use explicit_unit_values::{AngleValue, UnitError, WithUnit};
