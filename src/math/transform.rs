use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
use serde::Serialize;

/// Local transform of a scene node: translation, XYZ Euler rotation (radians), scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub const fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Inverse-transpose of the upper 3x3, padded back to a Mat4 for GPU upload
pub fn normal_matrix(model: &Mat4) -> Mat4 {
    let m = Mat3::from_mat4(*model);
    Mat4::from_mat3(m.inverse().transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Transform::IDENTITY.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translation_applies_last() {
        let t = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::ZERO,
            scale: Vec3::splat(2.0),
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(approx(p, Vec3::new(3.0, 2.0, 3.0)));
    }

    #[test]
    fn test_plane_rotation_lays_flat() {
        // A +Z facing quad rotated -90 degrees about X faces up
        let t = Transform::IDENTITY.with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0));
        let n = t.matrix().transform_vector3(Vec3::Z);
        assert!(approx(n, Vec3::Y));
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let t = Transform::IDENTITY.with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0));
        let x = t.matrix().transform_vector3(Vec3::X);
        assert!(approx(x, Vec3::NEG_Z));
    }

    #[test]
    fn test_normal_matrix_undoes_nonuniform_scale() {
        let t = Transform {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::new(4.0, 1.0, 1.0),
        };
        let n = normal_matrix(&t.matrix()).transform_vector3(Vec3::new(1.0, 1.0, 0.0));
        assert!(approx(n, Vec3::new(0.25, 1.0, 0.0)));
    }
}
