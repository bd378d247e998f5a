//! Keyboard input capability

use crate::sim::TickInput;

/// The two logical buttons the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
}

/// Anything that can report whether a key is held right now
pub trait InputSource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Held-key state fed by window key events
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    up: bool,
    down: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Release everything (window lost focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
        }
    }
}

impl InputSource for KeyboardState {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }
}

/// Sample the held keys for one tick
pub fn poll(source: &impl InputSource) -> TickInput {
    TickInput {
        up: source.is_key_down(Key::Up),
        down: source.is_key_down(Key::Down),
    }
}
