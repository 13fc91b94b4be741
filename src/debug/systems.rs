//! Debug domain: hotkeys and geometry gizmos.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::level::Level;
use crate::movement::Player;
use crate::sprites::screen_to_world;

/// F1 toggles the geometry overlay, F2 the info readout
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_geometry = !debug_state.show_geometry;
        info!("[DEBUG] Geometry overlay {}", on_off(debug_state.show_geometry));
    }
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_info = !debug_state.show_info;
        info!("[DEBUG] Info overlay {}", on_off(debug_state.show_info));
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Axis-aligned screen-space box as a world-space center and size
fn world_box(min: Vec2, max: Vec2) -> (Isometry2d, Vec2) {
    let a = screen_to_world(min);
    let b = screen_to_world(max);
    let center = (a + b) / 2.0;
    let size = (b - a).abs();
    (Isometry2d::from_translation(center), size)
}

pub(crate) fn draw_level_gizmos(
    mut gizmos: Gizmos,
    level: Res<Level>,
    players: Query<&Player>,
) {
    for rect in level.ground() {
        let (iso, size) = world_box(rect.a, rect.b);
        gizmos.rect_2d(iso, size, Color::srgb(0.9, 0.5, 0.2));
    }

    for platform in level.platforms() {
        gizmos.line_2d(
            screen_to_world(platform.a),
            screen_to_world(platform.b),
            Color::srgb(0.3, 0.9, 0.3),
        );
    }

    for anchor in level.hooks() {
        let (iso, size) = world_box(anchor.trigger.min, anchor.trigger.max);
        gizmos.rect_2d(iso, size, Color::srgb(0.3, 0.6, 1.0));
        gizmos.circle_2d(
            Isometry2d::from_translation(screen_to_world(anchor.snap)),
            4.0,
            Color::srgb(0.3, 0.6, 1.0),
        );
    }

    for player in &players {
        gizmos.circle_2d(
            Isometry2d::from_translation(screen_to_world(player.position())),
            3.0,
            Color::srgb(1.0, 1.0, 1.0),
        );
    }
}
