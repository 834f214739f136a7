use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};

/// What the event loop should do in response to a window event. The game
/// engine never sees winit types; it is driven by explicit method calls
/// made from these actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    None,
    /// Left mouse press at the tracked cursor position, in window pixels.
    Click { x: f64, y: f64 },
    Restart,
    Exit,
    ScrollLeft,
    ScrollRight,
}

pub struct InputHandler {
    cursor_x: f64,
    cursor_y: f64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) -> InputAction {
        if button == MouseButton::Left && state == ElementState::Pressed {
            InputAction::Click {
                x: self.cursor_x,
                y: self.cursor_y,
            }
        } else {
            InputAction::None
        }
    }

    pub fn handle_keyboard_input(&mut self, input: &KeyboardInput) -> InputAction {
        if input.state != ElementState::Pressed {
            return InputAction::None;
        }
        match input.virtual_keycode {
            Some(VirtualKeyCode::Escape) => InputAction::Exit,
            Some(VirtualKeyCode::R) => InputAction::Restart,
            Some(VirtualKeyCode::Left) => InputAction::ScrollLeft,
            Some(VirtualKeyCode::Right) => InputAction::ScrollRight,
            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
