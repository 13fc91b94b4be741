//! Movement domain: the player controller component.

use bevy::prelude::*;

use crate::movement::MovementTuning;
use crate::movement::state::{PlayerEvent, PlayerState, StateTag};
use crate::sprites::FrameRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }
}

/// The player character. Owns its state machine and kinematics; nothing
/// else writes to these fields.
///
/// Position and velocity are in screen space, y pointing down.
#[derive(Component, Debug, Clone)]
pub struct Player {
    pub(super) state: PlayerState,
    pub(super) position: Vec2,
    pub(super) velocity: Vec2,
    pub(super) facing: Facing,
    pub(super) on_ground: bool,
    pub(super) able_to_jump: bool,
    pub(super) on_platform: bool,
    /// Seconds since the last slide request.
    pub(super) slide_timer: f32,
    /// Index into the level's hook anchors while hanging.
    pub(super) active_hook: Option<usize>,
    pub(super) tuning: MovementTuning,
}

impl Player {
    pub fn new(position: Vec2, tuning: MovementTuning) -> Self {
        Self {
            state: PlayerState::new(StateTag::Idle),
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            on_ground: false,
            able_to_jump: false,
            on_platform: false,
            slide_timer: 0.0,
            active_hook: None,
            tuning,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn state_tag(&self) -> StateTag {
        self.state.tag()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn able_to_jump(&self) -> bool {
        self.able_to_jump
    }

    pub fn on_platform(&self) -> bool {
        self.on_platform
    }

    pub fn slide_timer(&self) -> f32 {
        self.slide_timer
    }

    pub fn active_hook(&self) -> Option<usize> {
        self.active_hook
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// What the renderer should draw this frame.
    pub fn sprite_frame(&self) -> FrameRect {
        self.state.frame_rect(self.facing.is_right())
    }

    /// Route an event through the state machine. Leaving Hooked forgets
    /// the anchor.
    pub(super) fn fire(&mut self, event: PlayerEvent) -> bool {
        let changed = self.state.handle(event);
        if changed && !self.state.is(StateTag::Hooked) {
            self.active_hook = None;
        }
        changed
    }

    /// Land on a surface at height `surface`.
    pub(super) fn land(&mut self, surface: f32) {
        self.velocity.y = 0.0;
        self.position.y = surface;
        self.on_ground = true;
        self.able_to_jump = true;
        if self.velocity.x == 0.0 {
            self.fire(PlayerEvent::Stop);
        } else {
            self.fire(PlayerEvent::StartRunning);
        }
    }
}
