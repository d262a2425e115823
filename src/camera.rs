use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::traits::{Button, Controller};
use crate::types::CameraUniform;

pub const DAMPING_FACTOR: f32 = 0.05;
pub const ZOOM_BASE: f32 = 0.95;
pub const MIN_DISTANCE: f32 = 0.5;
pub const MAX_DISTANCE: f32 = 500.0;
const POLAR_EPSILON: f32 = 1e-4;

/// Initial placement and lens of the scene camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 15.0),
            target: Vec3::ZERO,
            fov_y_degrees: 50.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Rotate / pan / dolly camera circling a target point
///
/// Drag input is accumulated into pending deltas that bleed into the
/// camera a fraction per frame, so motion eases out after release.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Polar angle measured from +Y
    pub phi: f32,
    /// Azimuth around +Y, zero looking down -Z from +Z
    pub theta: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_pan: Vec3,
    pending_scale: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        let offset = config.position - config.target;
        let radius = offset.length().max(MIN_DISTANCE);

        Self {
            target: config.target,
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_pan: Vec3::ZERO,
            pending_scale: 1.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                sin_phi * self.theta.sin(),
                self.phi.cos(),
                sin_phi * self.theta.cos(),
            ) * self.radius
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Queue a rotation from a pointer drag in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= std::f32::consts::TAU * dx / h;
        self.pending_phi -= std::f32::consts::TAU * dy / h;
    }

    /// Queue a pan so the scene follows the pointer
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let world_per_pixel = 2.0 * self.radius * (self.fov_y * 0.5).tan() / h;
        self.pending_pan += (-self.right() * dx + self.up() * dy) * world_per_pixel;
    }

    /// Dolly by a pixel-scaled amount; positive moves towards the target
    pub fn zoom(&mut self, delta: f32) {
        let factor = ZOOM_BASE.powf((delta * 0.01).abs());
        if delta > 0.0 {
            self.pending_scale *= factor;
        } else if delta < 0.0 {
            self.pending_scale /= factor;
        }
    }

    /// Feed one frame of controller input
    pub fn handle_input(&mut self, controller: &dyn Controller, viewport_height: f32) {
        let (dx, dy) = controller.pointer_delta();
        if controller.is_down(Button::MouseLeft) && !controller.is_down(Button::Shift) {
            self.rotate(dx, dy, viewport_height);
        } else if controller.is_down(Button::MouseRight)
            || (controller.is_down(Button::MouseLeft) && controller.is_down(Button::Shift))
        {
            self.pan(dx, dy, viewport_height);
        }
        if controller.is_down(Button::MouseMiddle) {
            self.zoom(-dy);
        }
        self.zoom(controller.scroll_delta());
    }

    /// Apply damped pending motion; call once per frame
    pub fn update(&mut self) {
        self.theta += self.pending_theta * DAMPING_FACTOR;
        self.phi = (self.phi + self.pending_phi * DAMPING_FACTOR)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
        self.target += self.pending_pan * DAMPING_FACTOR;
        self.radius = (self.radius * self.pending_scale).clamp(MIN_DISTANCE, MAX_DISTANCE);

        self.pending_theta *= 1.0 - DAMPING_FACTOR;
        self.pending_phi *= 1.0 - DAMPING_FACTOR;
        self.pending_pan *= 1.0 - DAMPING_FACTOR;
        self.pending_scale = 1.0;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection(aspect).to_cols_array_2d(),
            position: self.position().to_array(),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reproduces_config_position() {
        let config = CameraConfig::default();
        let camera = OrbitCamera::new(&config);

        assert!((camera.position() - config.position).length() < 1e-4);
        assert!((camera.radius - 325.0_f32.sqrt()).abs() < 1e-4);
        assert!(camera.theta.abs() < 1e-6);
        assert!((camera.fov_y - 50.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = OrbitCamera::new(&CameraConfig::default());
        let (f, r, u) = (camera.forward(), camera.right(), camera.up());

        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!(r.dot(u).abs() < 1e-5);
        assert!(u.y > 0.0);
    }

    #[test]
    fn test_update_without_input_is_stationary() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        let before = camera.position();
        for _ in 0..10 {
            camera.update();
        }
        assert!((camera.position() - before).length() < 1e-6);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let camera = OrbitCamera::new(&CameraConfig::default());
        let clip = camera.view_projection(16.0 / 9.0) * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;

        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
