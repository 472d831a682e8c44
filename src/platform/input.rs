//! Window input → sandbox input events
//!
//! Subscribes to macroquad's raw miniquad event stream so presses and key
//! downs reach the dispatcher in the order they happened.

use glam::Vec2;
use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::input::{is_quit_requested, mouse_position, prevent_quit};
use macroquad::miniquad::{EventHandler, KeyCode, KeyMods, MouseButton};

use crate::settings::Key;
use crate::sim::{InputEvent, PointerButton};

/// Collects input events between frames
pub struct InputCollector {
    subscriber: usize,
    queue: Vec<InputEvent>,
}

impl InputCollector {
    /// Start collecting. Also takes over the window close button so the
    /// sandbox sees it as an event instead of the process exiting.
    pub fn new() -> Self {
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
            queue: Vec::new(),
        }
    }

    /// Events since the last call, oldest first
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let subscriber = self.subscriber;
        repeat_all_miniquad_input(self, subscriber);
        if is_quit_requested() {
            self.queue.push(InputEvent::CloseRequested);
        }
        std::mem::take(&mut self.queue)
    }

    /// Current pointer position in screen pixels
    pub fn pointer() -> Vec2 {
        let (x, y) = mouse_position();
        Vec2::new(x, y)
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for InputCollector {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn mouse_motion_event(&mut self, x: f32, y: f32) {
        self.queue.push(InputEvent::PointerMoved(Vec2::new(x, y)));
    }

    fn mouse_button_down_event(&mut self, button: MouseButton, x: f32, y: f32) {
        let button = match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Unknown => return,
        };
        self.queue.push(InputEvent::PointerPressed {
            button,
            position: Vec2::new(x, y),
        });
    }

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, repeat: bool) {
        if !repeat {
            self.queue.push(InputEvent::KeyPressed(key_from_keycode(keycode)));
        }
    }
}

/// Map a window-library key code onto a bindable key
pub fn key_from_keycode(keycode: KeyCode) -> Key {
    let letter = match keycode {
        KeyCode::Space => return Key::Space,
        KeyCode::Escape => return Key::Escape,
        KeyCode::Enter | KeyCode::KpEnter => return Key::Enter,
        KeyCode::A => 'A',
        KeyCode::B => 'B',
        KeyCode::C => 'C',
        KeyCode::D => 'D',
        KeyCode::E => 'E',
        KeyCode::F => 'F',
        KeyCode::G => 'G',
        KeyCode::H => 'H',
        KeyCode::I => 'I',
        KeyCode::J => 'J',
        KeyCode::K => 'K',
        KeyCode::L => 'L',
        KeyCode::M => 'M',
        KeyCode::N => 'N',
        KeyCode::O => 'O',
        KeyCode::P => 'P',
        KeyCode::Q => 'Q',
        KeyCode::R => 'R',
        KeyCode::S => 'S',
        KeyCode::T => 'T',
        KeyCode::U => 'U',
        KeyCode::V => 'V',
        KeyCode::W => 'W',
        KeyCode::X => 'X',
        KeyCode::Y => 'Y',
        KeyCode::Z => 'Z',
        _ => return Key::Other,
    };
    Key::Letter(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_map() {
        assert_eq!(key_from_keycode(KeyCode::Q), Key::Letter('Q'));
        assert_eq!(key_from_keycode(KeyCode::Space), Key::Space);
        assert_eq!(key_from_keycode(KeyCode::Escape), Key::Escape);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(key_from_keycode(KeyCode::F5), Key::Other);
        assert_eq!(key_from_keycode(KeyCode::LeftShift), Key::Other);
    }
}
