use nalgebra as na;
use crate::types::*;

/// Create a planar rotation matrix `[[cos θ, -sin θ], [sin θ, cos θ]]`
pub fn rotation_2d(angle: Angle) -> na::Matrix2<f64> {
    let theta = angle.get::<radian>();
    let c = theta.cos();
    let s = theta.sin();

    na::Matrix2::new(
        c, -s,
        s,  c,
    )
}

/// Create a rotation matrix around X axis
pub fn rotation_x(angle: Angle) -> na::Matrix3<f64> {
    let theta = angle.get::<radian>();
    let c = theta.cos();
    let s = theta.sin();

    na::Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c,  -s,
        0.0, s,   c,
    )
}

/// Create a rotation matrix around Y axis
pub fn rotation_y(angle: Angle) -> na::Matrix3<f64> {
    let theta = angle.get::<radian>();
    let c = theta.cos();
    let s = theta.sin();

    na::Matrix3::new(
        c,  0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

/// Create a rotation matrix around Z axis
pub fn rotation_z(angle: Angle) -> na::Matrix3<f64> {
    let theta = angle.get::<radian>();
    let c = theta.cos();
    let s = theta.sin();

    na::Matrix3::new(
        c,  -s, 0.0,
        s,   c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Rotate about the fixed X axis, then the fixed Y axis, then the fixed Z axis.
///
/// Extrinsic "xyz": the combined matrix is `Rz(z) * Ry(y) * Rx(x)`, so the
/// X rotation acts on a vector first.
pub fn euler_xyz(x: Angle, y: Angle, z: Angle) -> na::Matrix3<f64> {
    rotation_z(z) * rotation_y(y) * rotation_x(x)
}

/// True when `m * m^T` is the identity and `det(m)` is +1, within `tolerance`
pub fn is_special_orthogonal_2(m: &na::Matrix2<f64>, tolerance: f64) -> bool {
    let gram = m * m.transpose();
    (gram - na::Matrix2::identity()).amax() <= tolerance
        && (m.determinant() - 1.0).abs() <= tolerance
}

/// True when `m * m^T` is the identity and `det(m)` is +1, within `tolerance`
pub fn is_special_orthogonal_3(m: &na::Matrix3<f64>, tolerance: f64) -> bool {
    let gram = m * m.transpose();
    (gram - na::Matrix3::identity()).amax() <= tolerance
        && (m.determinant() - 1.0).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_zero_angle_is_identity() {
        assert_relative_eq!(rotation_2d(deg(0.0)), na::Matrix2::identity());
        assert_relative_eq!(euler_xyz(deg(0.0), deg(0.0), deg(0.0)), na::Matrix3::identity());
    }

    #[test]
    fn test_quarter_turn_2d() {
        let m = rotation_2d(deg(90.0));
        assert_relative_eq!(m, na::Matrix2::new(0.0, -1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_eighth_turn_2d() {
        let m = rotation_2d(deg(45.0));
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(m, na::Matrix2::new(h, -h, h, h), epsilon = 1e-12);
        assert_relative_eq!(m[(0, 0)], 0.707, epsilon = 1e-3);
    }

    #[test]
    fn test_euler_quarter_turn_about_x() {
        let m = euler_xyz(deg(90.0), deg(0.0), deg(0.0));
        let expected = na::Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 0.0, -1.0,
            0.0, 1.0, 0.0,
        );
        assert_relative_eq!(m, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_euler_order_is_x_then_y_then_z() {
        // e1 -> (x 90) e1 -> (y 90) -e3 -> (z 90) -e3
        let m = euler_xyz(deg(90.0), deg(90.0), deg(90.0));
        let image = m * na::Vector3::x();
        assert_relative_eq!(image, na::Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-12);

        // e2 -> (x 90) e3 -> (y 90) e1 -> (z 90) e2
        let image = m * na::Vector3::y();
        assert_relative_eq!(image, na::Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_matches_nalgebra_roll_pitch_yaw() {
        let (x, y, z) = (30.0_f64, -45.0_f64, 120.0_f64);
        let ours = euler_xyz(deg(x), deg(y), deg(z));
        let reference = na::Rotation3::from_euler_angles(x.to_radians(), y.to_radians(), z.to_radians());
        assert_relative_eq!(ours, *reference.matrix(), epsilon = 1e-12);
    }

    #[test]
    fn test_non_rotation_is_rejected() {
        let reflection = na::Matrix2::new(1.0, 0.0, 0.0, -1.0);
        assert!(!is_special_orthogonal_2(&reflection, ROTATION_TOLERANCE));

        let scaled = na::Matrix3::identity() * 2.0;
        assert!(!is_special_orthogonal_3(&scaled, ROTATION_TOLERANCE));
    }

    proptest! {
        #[test]
        fn prop_rotation_2d_is_special_orthogonal(theta in -720.0f64..720.0) {
            prop_assert!(is_special_orthogonal_2(&rotation_2d(deg(theta)), ROTATION_TOLERANCE));
        }

        #[test]
        fn prop_rotation_2d_inverse(theta in -360.0f64..360.0) {
            let product = rotation_2d(deg(theta)) * rotation_2d(deg(-theta));
            prop_assert!((product - na::Matrix2::identity()).amax() < 1e-12);
        }

        #[test]
        fn prop_euler_is_special_orthogonal(
            x in -180.0f64..=180.0,
            y in -180.0f64..=180.0,
            z in -180.0f64..=180.0,
        ) {
            prop_assert!(is_special_orthogonal_3(&euler_xyz(deg(x), deg(y), deg(z)), ROTATION_TOLERANCE));
        }
    }
}
