//! Debug domain: info readout.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::movement::Player;

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<&Player>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some(player), Ok(mut text)) = (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = player.position();
        let vel = player.velocity();
        **text = format!(
            "State: {:?}\nPos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nFacing: {:?}\nOn ground: {}\nCan jump: {}\nOn platform: {}\nSlide timer: {:.2}\nHook: {:?}",
            player.state_tag(),
            pos.x,
            pos.y,
            vel.x,
            vel.y,
            player.facing(),
            player.on_ground(),
            player.able_to_jump(),
            player.on_platform(),
            player.slide_timer(),
            player.active_hook()
        );
    }
}
