//! Keyboard and pointer handling outside the debug panel.

use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::Key;

use super::core::ExplorerApp;

/// Pixels of trackpad scroll that count as one wheel line.
const PIXELS_PER_LINE: f64 = 40.0;

/// Left-button drag tracking for camera rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pressed: bool,
    pub last: Option<(f64, f64)>,
}

impl PointerState {
    /// Record a cursor position; returns the movement since the previous
    /// position while the button is held.
    pub fn moved(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let delta = match (self.pressed, self.last) {
            (true, Some((lx, ly))) => Some(((x - lx) as f32, (y - ly) as f32)),
            _ => None,
        };
        self.last = Some((x, y));
        delta
    }
}

/// Whether a key event is the panel toggle (`H`, either case).
pub(super) fn is_panel_toggle(event: &KeyEvent) -> bool {
    if event.state != ElementState::Pressed || event.repeat {
        return false;
    }
    matches!(&event.logical_key, Key::Character(c) if c.eq_ignore_ascii_case("h"))
}

/// Wheel delta in lines, positive away from the user.
pub(super) fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
    }
}

impl ExplorerApp {
    pub(super) fn handle_keyboard_input(&mut self, event: &KeyEvent) {
        if is_panel_toggle(event) {
            self.panel.toggle();
        }
    }

    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button == MouseButton::Left {
            self.pointer.pressed = state == ElementState::Pressed;
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((dx, dy)) = self.pointer.moved(x, y) {
            self.camera.drag(dx, dy);
        }
    }

    pub(super) fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        self.camera.scroll(scroll_lines(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_only_reported_while_pressed() {
        let mut pointer = PointerState::default();
        assert_eq!(pointer.moved(10.0, 10.0), None);
        pointer.pressed = true;
        assert_eq!(pointer.moved(15.0, 7.0), Some((5.0, -3.0)));
        pointer.pressed = false;
        assert_eq!(pointer.moved(30.0, 30.0), None);
    }

    #[test]
    fn first_move_after_press_has_no_jump() {
        let mut pointer = PointerState {
            pressed: true,
            last: None,
        };
        assert_eq!(pointer.moved(100.0, 100.0), None);
        assert_eq!(pointer.moved(101.0, 100.0), Some((1.0, 0.0)));
    }

    #[test]
    fn scroll_units() {
        assert_eq!(scroll_lines(MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        let pixels = MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(0.0, -80.0));
        assert_eq!(scroll_lines(pixels), -2.0);
    }
}
