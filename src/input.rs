//! Keyboard state and the prey's movement intent.
//!
//! The simulation itself only consumes an intent vector. `Input` is the
//! small adapter a host uses to build that vector from held keys:
//!
//! | Keys | Intent |
//! |------|--------|
//! | Left / A | x = -1 |
//! | Right / D | x = +1 (wins over Left) |
//! | Up / W | y = +1 |
//! | Down / S | y = -1 (wins over Up) |
//!
//! With the `winit` feature enabled, [`Input::handle_event`] consumes
//! window events directly.
//!
//! ```ignore
//! input.press(KeyCode::Right);
//! input.press(KeyCode::W);
//! let report = sim.tick(dt, input.movement_intent(), arena);
//! ```

use glam::Vec2;
use std::collections::HashSet;

/// Keys the chase cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Other(u32),
}

#[cfg(feature = "winit")]
impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WinitKeyCode;
        match key {
            WinitKeyCode::ArrowUp => KeyCode::Up,
            WinitKeyCode::ArrowDown => KeyCode::Down,
            WinitKeyCode::ArrowLeft => KeyCode::Left,
            WinitKeyCode::ArrowRight => KeyCode::Right,
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyA => KeyCode::A,
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyD => KeyCode::D,
            _ => KeyCode::Other(key as u32),
        }
    }
}

/// Held-key tracking.
#[derive(Debug, Default, Clone)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is currently held down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Record a key going down. Repeats while held are harmless.
    pub fn press(&mut self, key: KeyCode) {
        self.keys_held.insert(key);
    }

    /// Record a key going up.
    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    fn any_held(&self, keys: [KeyCode; 2]) -> bool {
        keys.iter().any(|k| self.key_held(*k))
    }

    /// Raw movement intent from the held direction keys.
    ///
    /// Components are -1, 0 or +1 and the vector is not normalized; the
    /// prey normalizes it itself.
    pub fn movement_intent(&self) -> Vec2 {
        let mut intent = Vec2::ZERO;
        if self.any_held([KeyCode::Left, KeyCode::A]) {
            intent.x = -1.0;
        }
        if self.any_held([KeyCode::Right, KeyCode::D]) {
            intent.x = 1.0;
        }
        if self.any_held([KeyCode::Up, KeyCode::W]) {
            intent.y = 1.0;
        }
        if self.any_held([KeyCode::Down, KeyCode::S]) {
            intent.y = -1.0;
        }
        intent
    }

    /// Process a winit window event.
    #[cfg(feature = "winit")]
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) {
        use winit::event::{ElementState, WindowEvent};
        use winit::keyboard::PhysicalKey;

        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(code) = event.physical_key {
                let key = KeyCode::from(code);
                match event.state {
                    ElementState::Pressed => self.press(key),
                    ElementState::Released => self.release(key),
                }
            }
        }
    }
}
