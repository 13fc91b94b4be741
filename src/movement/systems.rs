//! Movement domain: systems that drive the player each fixed step.

use bevy::ecs::message::MessageReader;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::core::STEP_HZ;
use crate::level::Level;
use crate::movement::input::KeyEvent;
use crate::movement::{MovementTuning, PLAYER_SPAWN, Player};

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    info!(
        "Spawning player at {:?}: run_speed={}, jump_velocity={}, gravity_step={}, jump height ~{:.0}px",
        PLAYER_SPAWN,
        tuning.run_speed,
        tuning.jump_velocity,
        tuning.gravity_step,
        tuning.jump_height(STEP_HZ as f32)
    );
    commands.spawn(Player::new(PLAYER_SPAWN, tuning.clone()));
}

/// Feed this step's key edges to the player, oldest first.
pub(crate) fn apply_key_events(
    mut keyboard_events: MessageReader<KeyboardInput>,
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Res<Level>,
    mut query: Query<&mut Player>,
) {
    let Ok(mut player) = query.single_mut() else {
        keyboard_events.clear();
        return;
    };

    for raw in keyboard_events.read() {
        if let Some(event) = KeyEvent::from_keyboard(raw) {
            player.handle_event(event, &level, &*keyboard);
        }
    }
}

pub(crate) fn step_player(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Res<Level>,
    mut query: Query<&mut Player>,
) {
    let dt = time.delta_secs();
    for mut player in &mut query {
        player.update(dt, &level, &*keyboard);
    }
}
