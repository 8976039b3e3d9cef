use nalgebra as na;
use serde::{Deserialize, Serialize};
use crate::types::*;

/// Camera orientation for 3D figures.
///
/// Elevation is measured up from the XY plane, azimuth around +Z from +X,
/// the same convention as matplotlib's `view_init`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewAngleConfig", into = "ViewAngleConfig")]
pub struct ViewAngle {
    pub elevation: Angle,
    pub azimuth: Angle,
}

impl Default for ViewAngle {
    fn default() -> Self {
        Self::new(deg(20.0), deg(45.0))
    }
}

impl ViewAngle {
    pub fn new(elevation: Angle, azimuth: Angle) -> Self {
        Self { elevation, azimuth }
    }

    /// Unit vector from the scene towards the camera
    pub fn toward_viewer(&self) -> na::Vector3<f64> {
        let (se, ce) = self.elevation.get::<radian>().sin_cos();
        let (sa, ca) = self.azimuth.get::<radian>().sin_cos();
        na::Vector3::new(ce * ca, ce * sa, se)
    }

    /// Screen-right direction in world coordinates
    pub fn right(&self) -> na::Vector3<f64> {
        let (sa, ca) = self.azimuth.get::<radian>().sin_cos();
        na::Vector3::new(-sa, ca, 0.0)
    }

    /// Screen-up direction in world coordinates
    pub fn up(&self) -> na::Vector3<f64> {
        self.toward_viewer().cross(&self.right())
    }

    /// Orthographic projection onto the screen plane (x right, y up)
    pub fn project(&self, p: &na::Point3<f64>) -> na::Point2<f64> {
        na::Point2::new(p.coords.dot(&self.right()), p.coords.dot(&self.up()))
    }

    /// Larger is closer to the camera
    pub fn depth(&self, p: &na::Point3<f64>) -> f64 {
        p.coords.dot(&self.toward_viewer())
    }
}

/// On-disk form of [`ViewAngle`], in explicit units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewAngleConfig {
    pub elevation: AngleValue,
    pub azimuth: AngleValue,
}

impl From<ViewAngle> for ViewAngleConfig {
    fn from(view: ViewAngle) -> Self {
        Self {
            elevation: AngleValue::degrees(to_degrees(view.elevation)),
            azimuth: AngleValue::degrees(to_degrees(view.azimuth)),
        }
    }
}

impl TryFrom<ViewAngleConfig> for ViewAngle {
    type Error = UnitError;

    fn try_from(config: ViewAngleConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(config.elevation.to_angle()?, config.azimuth.to_angle()?))
    }
}
