//! Movement domain: player state machine, input and physics.

mod components;
mod controls;
pub mod input;
mod physics;
mod resources;
pub mod state;
mod systems;


pub use components::{Facing, Player};
pub use input::{HeldKeys, InputSource, Key, KeyAction, KeyEvent};
pub use resources::MovementTuning;
pub use state::{PlayerEvent, PlayerState, StateTag};

use bevy::prelude::*;

use crate::movement::systems::{apply_key_events, spawn_player, step_player};

/// Where the player appears at startup, in screen space.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(400.0, 400.0);

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(Startup, spawn_player)
            .add_systems(FixedUpdate, (apply_key_events, step_player).chain());
    }
}
