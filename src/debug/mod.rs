//! Debug overlays for level tuning (feature `dev-tools`).
//!
//! - F1: ground rects, platforms, hook zones and the player anchor
//! - F2: state and kinematics readout

mod state;
mod systems;
mod ui;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::systems::{draw_level_gizmos, handle_debug_hotkeys};
use crate::debug::ui::update_debug_info_overlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys)
            .add_systems(
                Update,
                draw_level_gizmos.run_if(|state: Res<DebugState>| state.show_geometry),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}
