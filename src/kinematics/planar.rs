use nalgebra as na;
use serde::{Deserialize, Serialize};
use crate::types::*;
use crate::types::range::check_finite;
use crate::kinematics::transforms::*;

/// A rotation in the plane (SO(2)) together with the angle it was built from
///
/// Radial/ulnar deviation and flexion/extension are all shown as one of these,
/// with the forearm axis starting along +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlanarRotationConfig")]
pub struct PlanarRotation {
    angle: Angle,
    matrix: na::Matrix2<f64>,
}

/// Serialized form read back: only the angle, the matrix is rebuilt from it
#[derive(Debug, Clone, Deserialize)]
struct PlanarRotationConfig {
    angle: Angle,
}

impl From<PlanarRotationConfig> for PlanarRotation {
    fn from(config: PlanarRotationConfig) -> Self {
        Self::new(config.angle)
    }
}

impl PlanarRotation {
    pub fn new(angle: Angle) -> Self {
        Self {
            angle,
            matrix: rotation_2d(angle),
        }
    }

    pub fn identity() -> Self {
        Self::new(deg(0.0))
    }

    /// Build from a raw angle in degrees, rejecting NaN and infinities
    pub fn from_degrees(degrees: f64) -> Result<Self, InputError> {
        let degrees = check_finite("angle", degrees)?;
        Ok(Self::new(deg(degrees)))
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn degrees(&self) -> f64 {
        to_degrees(self.angle)
    }

    pub fn matrix(&self) -> &na::Matrix2<f64> {
        &self.matrix
    }

    /// The unit vector drawn from the origin: the image of e1
    pub fn direction(&self) -> na::Vector2<f64> {
        self.matrix * na::Vector2::x()
    }

    pub fn apply(&self, v: &na::Vector2<f64>) -> na::Vector2<f64> {
        self.matrix * v
    }

    /// R(-θ)
    pub fn inverse(&self) -> Self {
        Self::new(-self.angle)
    }

    /// Rotate by `self`, then by `next`
    pub fn then(&self, next: &PlanarRotation) -> Self {
        Self {
            angle: self.angle + next.angle,
            matrix: next.matrix * self.matrix,
        }
    }
}

impl Default for PlanarRotation {
    fn default() -> Self {
        Self::identity()
    }
}
