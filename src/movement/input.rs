//! Movement domain: keyboard abstraction.
//!
//! The controller only sees [`Key`]s. Held state comes from an
//! [`InputSource`]; edges arrive as [`KeyEvent`]s.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Shift,
    Escape,
}

impl Key {
    pub fn key_code(self) -> KeyCode {
        match self {
            Key::Left => KeyCode::ArrowLeft,
            Key::Right => KeyCode::ArrowRight,
            Key::Up => KeyCode::ArrowUp,
            Key::Down => KeyCode::ArrowDown,
            Key::A => KeyCode::KeyA,
            Key::D => KeyCode::KeyD,
            Key::W => KeyCode::KeyW,
            Key::S => KeyCode::KeyS,
            Key::Shift => KeyCode::ShiftLeft,
            Key::Escape => KeyCode::Escape,
        }
    }

    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::ArrowLeft => Key::Left,
            KeyCode::ArrowRight => Key::Right,
            KeyCode::ArrowUp => Key::Up,
            KeyCode::ArrowDown => Key::Down,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyS => Key::S,
            KeyCode::ShiftLeft => Key::Shift,
            KeyCode::Escape => Key::Escape,
            _ => return None,
        };
        Some(key)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::A | Key::D)
    }

    pub fn is_up(self) -> bool {
        matches!(self, Key::Up | Key::W)
    }

    pub fn is_down(self) -> bool {
        matches!(self, Key::Down | Key::S)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Pressed,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Released,
        }
    }

    /// Translate a raw keyboard message. Auto-repeat and unmapped keys are
    /// dropped.
    pub fn from_keyboard(input: &KeyboardInput) -> Option<Self> {
        if input.repeat {
            return None;
        }
        let key = Key::from_key_code(input.key_code)?;
        let action = match input.state {
            ButtonState::Pressed => KeyAction::Pressed,
            ButtonState::Released => KeyAction::Released,
        };
        Some(Self { key, action })
    }
}

/// Level-triggered key state.
pub trait InputSource {
    fn is_held(&self, key: Key) -> bool;

    fn left_held(&self) -> bool {
        self.is_held(Key::Left) || self.is_held(Key::A)
    }

    fn right_held(&self) -> bool {
        self.is_held(Key::Right) || self.is_held(Key::D)
    }
}

impl InputSource for ButtonInput<KeyCode> {
    fn is_held(&self, key: Key) -> bool {
        self.pressed(key.key_code())
    }
}

/// Plain set of held keys, for headless stepping and tests.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys(HashSet<Key>);

impl HeldKeys {
    pub fn press(&mut self, key: Key) {
        self.0.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.0.remove(&key);
    }

    /// Keep held state in sync with an edge event.
    pub fn apply(&mut self, event: KeyEvent) {
        match event.action {
            KeyAction::Pressed => self.press(event.key),
            KeyAction::Released => self.release(event.key),
        }
    }
}

impl InputSource for HeldKeys {
    fn is_held(&self, key: Key) -> bool {
        self.0.contains(&key)
    }
}
