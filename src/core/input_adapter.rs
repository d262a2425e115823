use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, Controller};

/// Pixels per scroll "line" reported by mouse wheels
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed: HashSet<Button>,
    /// Current cursor position (relative to window)
    cursor: Option<(f32, f32)>,
    /// Cursor movement since last reset
    pointer_delta: (f32, f32),
    /// Scroll since last reset, in pixels
    scroll_delta: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed buttons
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    self.on_key(keycode, event.state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_button(*button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.on_scroll(*delta);
            }
            WindowEvent::Focused(false) => {
                self.release_all();
            }
            _ => {}
        }
    }

    pub fn on_key(&mut self, keycode: KeyCode, state: ElementState) {
        if let Some(button) = Self::keycode_to_button(keycode) {
            self.set(button, state);
        }
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if let Some(button) = Self::mouse_button_to_button(button) {
            self.set(button, state);
        }
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((old_x, old_y)) = self.cursor {
            self.pointer_delta.0 += x - old_x;
            self.pointer_delta.1 += y - old_y;
        }
        self.cursor = Some((x, y));
    }

    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(_, y) => y * PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
    }

    /// Drop held buttons, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Clear per-frame motion, keeping held buttons
    pub fn reset_deltas(&mut self) {
        self.pointer_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    fn set(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(button);
            }
            ElementState::Released => {
                self.pressed.remove(&button);
            }
        }
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Middle => Some(Button::MouseMiddle),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn pointer_delta(&self) -> (f32, f32) {
        self.pointer_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_mouse_buttons_tracked() {
        let mut controller = WinitController::new();
        controller.on_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(controller.is_down(Button::MouseLeft));
        assert!(!controller.is_down(Button::MouseRight));

        controller.on_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!controller.is_down(Button::MouseLeft));
    }

    #[test]
    fn test_escape_and_shift_keys_tracked() {
        let mut controller = WinitController::new();
        controller.on_key(KeyCode::Escape, ElementState::Pressed);
        controller.on_key(KeyCode::ShiftRight, ElementState::Pressed);
        controller.on_key(KeyCode::KeyA, ElementState::Pressed);
        assert!(controller.is_down(Button::Escape));
        assert!(controller.is_down(Button::Shift));
        assert_eq!(controller.pressed.len(), 2);

        controller.on_key(KeyCode::ShiftRight, ElementState::Released);
        assert!(!controller.is_down(Button::Shift));
    }

    #[test]
    fn test_unmapped_mouse_button_ignored() {
        let mut controller = WinitController::new();
        controller.on_mouse_button(MouseButton::Back, ElementState::Pressed);
        assert!(controller.pressed.is_empty());
    }

    #[test]
    fn test_first_cursor_event_has_no_delta() {
        let mut controller = WinitController::new();
        controller.on_cursor_moved(100.0, 100.0);
        assert_eq!(controller.pointer_delta(), (0.0, 0.0));

        controller.on_cursor_moved(110.0, 95.0);
        controller.on_cursor_moved(115.0, 90.0);
        assert_eq!(controller.pointer_delta(), (15.0, -10.0));
    }

    #[test]
    fn test_reset_keeps_buttons() {
        let mut controller = WinitController::new();
        controller.on_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.on_cursor_moved(0.0, 0.0);
        controller.on_cursor_moved(5.0, 5.0);

        controller.reset_deltas();
        assert_eq!(controller.pointer_delta(), (0.0, 0.0));
        assert!(controller.is_down(Button::MouseRight));
    }

    #[test]
    fn test_wheel_lines_scale_to_pixels() {
        let mut controller = WinitController::new();
        controller.on_scroll(MouseScrollDelta::LineDelta(0.0, 2.0));
        controller.on_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -50.0)));
        assert_eq!(controller.scroll_delta(), 150.0);
    }

    #[test]
    fn test_focus_loss_releases_buttons() {
        let mut controller = WinitController::new();
        controller.on_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_event(&WindowEvent::Focused(false));
        assert!(!controller.is_down(Button::MouseLeft));
    }
}
