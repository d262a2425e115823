use figure_lab::camera::{CameraConfig, OrbitCamera, DAMPING_FACTOR, MAX_DISTANCE, MIN_DISTANCE};
use figure_lab::traits::{Button, Controller};
use glam::Vec3;

/// Scripted input for one frame
#[derive(Default)]
struct MockController {
    down: Vec<Button>,
    pointer: (f32, f32),
    scroll: f32,
}

impl Controller for MockController {
    fn is_down(&self, button: Button) -> bool {
        self.down.contains(&button)
    }

    fn pointer_delta(&self) -> (f32, f32) {
        self.pointer
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll
    }
}

#[cfg(test)]
mod orbit_camera_tests {
    use super::*;

    const HEIGHT: f32 = 720.0;

    fn settle(camera: &mut OrbitCamera) {
        for _ in 0..400 {
            camera.update();
        }
    }

    #[test]
    fn test_left_drag_orbits_around_target() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        let radius = camera.radius;
        let input = MockController {
            down: vec![Button::MouseLeft],
            pointer: (120.0, 0.0),
            ..Default::default()
        };

        camera.handle_input(&input, HEIGHT);
        settle(&mut camera);

        assert!((camera.radius - radius).abs() < 1e-4);
        assert_eq!(camera.target, Vec3::ZERO);
        // Full drag lands: 2*pi*dx/h of azimuth, dragging right swings the camera left
        let expected = -std::f32::consts::TAU * 120.0 / HEIGHT;
        assert!((camera.theta - expected).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_eases_in_over_frames() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        camera.rotate(100.0, 0.0, HEIGHT);

        camera.update();
        let first = camera.theta;
        let total = -std::f32::consts::TAU * 100.0 / HEIGHT;
        assert!((first - total * DAMPING_FACTOR).abs() < 1e-5);

        camera.update();
        assert!(camera.theta.abs() > first.abs());
    }

    #[test]
    fn test_polar_angle_is_clamped() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        camera.rotate(0.0, 100_000.0, HEIGHT);
        settle(&mut camera);

        assert!(camera.phi > 0.0);
        assert!(camera.phi < std::f32::consts::PI);
        assert!(camera.position().is_finite());
    }

    #[test]
    fn test_right_drag_pans_target() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        let offset = camera.position() - camera.target;
        let input = MockController {
            down: vec![Button::MouseRight],
            pointer: (50.0, 0.0),
            ..Default::default()
        };

        camera.handle_input(&input, HEIGHT);
        settle(&mut camera);

        // Dragging right moves the scene right, so the target slides left
        assert!(camera.target.x < 0.0);
        assert!(camera.target.y.abs() < 1e-4);
        assert!(((camera.position() - camera.target) - offset).length() < 1e-3);
    }

    #[test]
    fn test_shift_left_drag_pans() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        let theta = camera.theta;
        let input = MockController {
            down: vec![Button::MouseLeft, Button::Shift],
            pointer: (0.0, 40.0),
            ..Default::default()
        };

        camera.handle_input(&input, HEIGHT);
        settle(&mut camera);

        assert_eq!(camera.theta, theta);
        assert!(camera.target.length() > 1e-3);
    }

    #[test]
    fn test_scroll_zooms_in_and_out() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        let radius = camera.radius;

        camera.handle_input(
            &MockController {
                scroll: 100.0,
                ..Default::default()
            },
            HEIGHT,
        );
        camera.update();
        assert!((camera.radius - radius * 0.95).abs() < 1e-4);

        camera.handle_input(
            &MockController {
                scroll: -100.0,
                ..Default::default()
            },
            HEIGHT,
        );
        camera.update();
        assert!((camera.radius - radius).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_is_bounded() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        for _ in 0..1000 {
            camera.zoom(500.0);
            camera.update();
        }
        assert_eq!(camera.radius, MIN_DISTANCE);

        for _ in 0..1000 {
            camera.zoom(-500.0);
            camera.update();
        }
        assert_eq!(camera.radius, MAX_DISTANCE);
    }

    #[test]
    fn test_idle_input_keeps_camera_still() {
        let mut camera = OrbitCamera::new(&CameraConfig::default());
        let position = camera.position();

        for _ in 0..60 {
            camera.handle_input(&MockController::default(), HEIGHT);
            camera.update();
        }

        assert!((camera.position() - position).length() < 1e-5);
    }
}
