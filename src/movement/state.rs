//! Movement domain: the player's behavioral state machine.
//!
//! A state is a tag plus the animation clock it was entered with. Transitions
//! are a pure lookup on `(tag, event)`; anything a transition implies for
//! position or velocity is applied by the player, never by the state.

use bevy::prelude::*;

use crate::sprites::{Animation, FrameRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateTag {
    #[default]
    Idle,
    Running,
    Jumping,
    Sliding,
    Hooked,
}

impl StateTag {
    pub const ALL: [StateTag; 5] = [
        StateTag::Idle,
        StateTag::Running,
        StateTag::Jumping,
        StateTag::Sliding,
        StateTag::Hooked,
    ];

    /// Fresh animation for this state, clock at zero.
    pub fn animation(self) -> Animation {
        match self {
            StateTag::Idle => Animation::new(FrameRect::new(0, 0, 19, 34), 12, 12.0),
            StateTag::Running => Animation::new(FrameRect::new(0, 64, 21, 34), 8, 12.0),
            StateTag::Jumping => Animation::new(FrameRect::new(0, 229, 20, 36), 2, 1.0),
            StateTag::Sliding => Animation::new(FrameRect::new(0, 190, 19, 36), 2, 2.0),
            StateTag::Hooked => Animation::new(FrameRect::new(0, 118, 20, 50), 6, 6.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerEvent {
    StartRunning,
    Stop,
    Jump,
    StartSliding,
    Hook,
}

impl PlayerEvent {
    pub const ALL: [PlayerEvent; 5] = [
        PlayerEvent::StartRunning,
        PlayerEvent::Stop,
        PlayerEvent::Jump,
        PlayerEvent::StartSliding,
        PlayerEvent::Hook,
    ];
}

/// Transition table. `None` means the event is ignored in that state.
///
/// Sliding can only be entered from Running; the request is dropped while
/// idle, airborne or hooked.
pub fn transition(from: StateTag, event: PlayerEvent) -> Option<StateTag> {
    use PlayerEvent::*;
    use StateTag::*;

    match (from, event) {
        (Idle, StartRunning) => Some(Running),
        (Idle, Jump) => Some(Jumping),

        (Running, Stop) => Some(Idle),
        (Running, Jump) => Some(Jumping),
        (Running, StartSliding) => Some(Sliding),

        (Jumping, StartRunning) => Some(Running),
        (Jumping, Stop) => Some(Idle),
        (Jumping, Hook) => Some(Hooked),

        (Sliding, StartRunning) => Some(Running),
        (Sliding, Jump) => Some(Jumping),

        (Hooked, Jump) => Some(Jumping),

        _ => None,
    }
}

/// The current behavioral state and its animation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    tag: StateTag,
    animation: Animation,
}

impl PlayerState {
    pub fn new(tag: StateTag) -> Self {
        debug!("Entering {:?} state", tag);
        Self {
            tag,
            animation: tag.animation(),
        }
    }

    pub fn tag(&self) -> StateTag {
        self.tag
    }

    pub fn is(&self, tag: StateTag) -> bool {
        self.tag == tag
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    /// Apply `event`. On a defined edge the state is replaced wholesale,
    /// restarting its animation, and `true` is returned.
    pub fn handle(&mut self, event: PlayerEvent) -> bool {
        match transition(self.tag, event) {
            Some(next) => {
                *self = PlayerState::new(next);
                true
            }
            None => false,
        }
    }

    pub fn frame_rect(&self, facing_right: bool) -> FrameRect {
        self.animation.current_frame_rect(facing_right)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(StateTag::default())
    }
}
