//! Movement domain: discrete key press/release handling.

use bevy::prelude::*;

use crate::level::Level;
use crate::movement::Player;
use crate::movement::input::{InputSource, Key, KeyAction, KeyEvent};
use crate::movement::state::{PlayerEvent, StateTag};

impl Player {
    /// React to one key edge. Rules run in order and each sees the state
    /// the previous rule left behind.
    pub fn handle_event(&mut self, event: KeyEvent, level: &Level, input: &impl InputSource) {
        match event.action {
            KeyAction::Pressed => self.on_press(event.key, level),
            KeyAction::Released => self.on_release(event.key, input),
        }
    }

    fn on_press(&mut self, key: Key, level: &Level) {
        if key.is_horizontal() && self.state.is(StateTag::Idle) {
            self.fire(PlayerEvent::StartRunning);
        }

        if (key.is_horizontal() || key.is_down()) && self.state.is(StateTag::Hooked) {
            if let Some(anchor) = self.active_hook.and_then(|i| level.hook(i)) {
                self.position = anchor.release_point();
            }
            debug!("Released hook at {:?}", self.position);
            self.fire(PlayerEvent::Jump);
        }

        if key.is_up() && self.state.is(StateTag::Hooked) {
            if let Some(anchor) = self.active_hook.and_then(|i| level.hook(i)) {
                self.position = anchor.swing_launch;
            }
            debug!("Swung off hook to {:?}", self.position);
            self.fire(PlayerEvent::Jump);
        }

        if key.is_up() && self.on_ground {
            self.fire(PlayerEvent::Jump);
            self.position.y -= self.tuning.jump_lift;
            self.velocity.y = -self.tuning.jump_velocity;
            self.on_ground = false;
        }

        if key == Key::Shift || key.is_down() {
            self.fire(PlayerEvent::StartSliding);
            self.slide_timer = 0.0;
        }
    }

    fn on_release(&mut self, key: Key, input: &impl InputSource) {
        let left_let_go = (key == Key::Left && !input.is_held(Key::Right))
            || (key == Key::A && !input.is_held(Key::D));
        let right_let_go = (key == Key::Right && !input.is_held(Key::Left))
            || (key == Key::D && !input.is_held(Key::A));

        if left_let_go && !self.state.is(StateTag::Jumping) {
            self.fire(PlayerEvent::Stop);
        }
        if right_let_go && !self.state.is(StateTag::Jumping) {
            self.fire(PlayerEvent::Stop);
        }
    }
}
