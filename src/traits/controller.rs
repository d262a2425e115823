/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MouseLeft,
    MouseMiddle,
    MouseRight,
    Shift,
    Escape,
}

/// Controller - button state plus pointer motion accumulated since the last frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Pointer movement in physical pixels since the last reset
    fn pointer_delta(&self) -> (f32, f32);

    /// Scroll in pixels since the last reset, positive when scrolling away from the user
    fn scroll_delta(&self) -> f32;
}
