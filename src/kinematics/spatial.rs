use nalgebra as na;
use serde::{Deserialize, Serialize};
use crate::types::*;
use crate::types::range::check_finite;
use crate::kinematics::transforms::*;

/// Three single-axis angles applied about fixed X, then Y, then Z
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerAngles {
    pub x: Angle,
    pub y: Angle,
    pub z: Angle,
}

impl EulerAngles {
    pub fn new(x: Angle, y: Angle, z: Angle) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(deg(0.0), deg(0.0), deg(0.0))
    }

    /// Any finite triple is accepted
    pub fn from_degrees(x: f64, y: f64, z: f64) -> Result<Self, InputError> {
        Ok(Self::new(
            deg(check_finite("x angle", x)?),
            deg(check_finite("y angle", y)?),
            deg(check_finite("z angle", z)?),
        ))
    }

    /// Same as [`EulerAngles::from_degrees`], restricted to the [-180°, 180°] slider range
    pub fn from_slider_degrees(x: f64, y: f64, z: f64) -> Result<Self, InputError> {
        let range = InputRange::FULL_TURN;
        Ok(Self::new(
            deg(range.check("x angle", x)?),
            deg(range.check("y angle", y)?),
            deg(range.check("z angle", z)?),
        ))
    }

    /// `[x, y, z]` in degrees
    pub fn degrees(&self) -> [f64; 3] {
        [to_degrees(self.x), to_degrees(self.y), to_degrees(self.z)]
    }
}

impl Default for EulerAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// A rotation in space (SO(3)) built from [`EulerAngles`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpatialRotationConfig")]
pub struct SpatialRotation {
    angles: EulerAngles,
    matrix: na::Matrix3<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct SpatialRotationConfig {
    angles: EulerAngles,
}

impl From<SpatialRotationConfig> for SpatialRotation {
    fn from(config: SpatialRotationConfig) -> Self {
        Self::new(config.angles)
    }
}

impl SpatialRotation {
    pub fn new(angles: EulerAngles) -> Self {
        Self {
            angles,
            matrix: euler_xyz(angles.x, angles.y, angles.z),
        }
    }

    pub fn identity() -> Self {
        Self::new(EulerAngles::zero())
    }

    pub fn angles(&self) -> &EulerAngles {
        &self.angles
    }

    pub fn matrix(&self) -> &na::Matrix3<f64> {
        &self.matrix
    }

    /// Single-axis matrices in the order they act: `[Rx, Ry, Rz]`
    pub fn factors(&self) -> [na::Matrix3<f64>; 3] {
        [
            rotation_x(self.angles.x),
            rotation_y(self.angles.y),
            rotation_z(self.angles.z),
        ]
    }

    /// Images of e1, e2, e3; these are the columns of the matrix
    pub fn basis_images(&self) -> [na::Vector3<f64>; 3] {
        [
            self.matrix * na::Vector3::x(),
            self.matrix * na::Vector3::y(),
            self.matrix * na::Vector3::z(),
        ]
    }

    pub fn apply(&self, v: &na::Vector3<f64>) -> na::Vector3<f64> {
        self.matrix * v
    }

    /// The inverse rotation, as a bare matrix (R^T).
    ///
    /// The inverse of an extrinsic xyz rotation is not an extrinsic xyz
    /// rotation with negated angles, so no [`EulerAngles`] are attached.
    pub fn inverse_matrix(&self) -> na::Matrix3<f64> {
        self.matrix.transpose()
    }
}

impl Default for SpatialRotation {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_angles_give_identity() {
        let r = SpatialRotation::identity();
        assert_relative_eq!(*r.matrix(), na::Matrix3::identity());
        for (image, axis) in r.basis_images().iter().zip([na::Vector3::x(), na::Vector3::y(), na::Vector3::z()]) {
            assert_relative_eq!(*image, axis);
        }
    }

    #[test]
    fn test_quarter_turn_about_x() {
        let r = SpatialRotation::new(EulerAngles::from_slider_degrees(90.0, 0.0, 0.0).unwrap());
        let expected = na::Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 0.0, -1.0,
            0.0, 1.0, 0.0,
        );
        assert_relative_eq!(*r.matrix(), expected, epsilon = 1e-12);

        let [ex, ey, ez] = r.basis_images();
        assert_relative_eq!(ex, na::Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(ey, na::Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(ez, na::Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_factors_reproduce_matrix() {
        let r = SpatialRotation::new(EulerAngles::from_degrees(25.0, -140.0, 75.0).unwrap());
        let [rx, ry, rz] = r.factors();
        assert_eq!(rz * ry * rx, *r.matrix());
    }

    #[test]
    fn test_basis_images_are_columns() {
        let r = SpatialRotation::new(EulerAngles::from_degrees(10.0, 20.0, 30.0).unwrap());
        for (i, image) in r.basis_images().iter().enumerate() {
            assert_eq!(*image, r.matrix().column(i).into_owned());
        }
    }

    #[test]
    fn test_inverse_undoes_rotation() {
        let r = SpatialRotation::new(EulerAngles::from_degrees(-60.0, 45.0, 170.0).unwrap());
        let v = na::Vector3::new(0.3, -1.2, 2.0);
        assert_relative_eq!(r.inverse_matrix() * r.apply(&v), v, epsilon = 1e-12);
    }

    #[test]
    fn test_slider_range_is_enforced() {
        let err = EulerAngles::from_slider_degrees(0.0, 181.0, 0.0).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { ref field, .. } if field == "y angle"));

        // Outside the sliders, any real angle still composes
        let wide = EulerAngles::from_degrees(0.0, 540.0, 0.0).unwrap();
        assert_relative_eq!(
            *SpatialRotation::new(wide).matrix(),
            rotation_y(deg(180.0)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deserialize_rebuilds_matrix_from_angles() {
        let r = SpatialRotation::new(EulerAngles::from_degrees(90.0, 0.0, 0.0).unwrap());
        let mut value = serde_json::to_value(r).unwrap();
        value["matrix"] = serde_json::json!([2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0]);

        let loaded: SpatialRotation = serde_json::from_value(value).unwrap();
        assert!(is_special_orthogonal_3(loaded.matrix(), ROTATION_TOLERANCE));
        assert_eq!(loaded, r);
    }

    #[test]
    fn test_degrees_round_trip() {
        let angles = EulerAngles::from_degrees(12.0, -34.0, 56.0).unwrap();
        let [x, y, z] = angles.degrees();
        assert_relative_eq!(x, 12.0, epsilon = 1e-9);
        assert_relative_eq!(y, -34.0, epsilon = 1e-9);
        assert_relative_eq!(z, 56.0, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn prop_spatial_rotation_is_special_orthogonal(
            x in -180.0f64..=180.0,
            y in -180.0f64..=180.0,
            z in -180.0f64..=180.0,
        ) {
            let r = SpatialRotation::new(EulerAngles::from_slider_degrees(x, y, z).unwrap());
            prop_assert!(is_special_orthogonal_3(r.matrix(), ROTATION_TOLERANCE));
            for image in r.basis_images() {
                prop_assert!((image.norm() - 1.0).abs() < 1e-12);
            }
        }
    }
}
