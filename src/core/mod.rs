//! Core domain: window constants, fixed step and process lifecycle.

mod assets;
mod systems;

#[cfg(test)]
mod tests;

pub use assets::{MissingAssetsError, asset_root, verify_assets};

use bevy::prelude::*;

use crate::core::systems::{check_required_assets, exit_on_escape, setup_camera};

pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 900;
pub const WINDOW_TITLE: &str = "Player states";

/// Simulation steps per second.
pub const STEP_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(STEP_HZ))
            .add_systems(PreStartup, check_required_assets)
            .add_systems(Startup, setup_camera)
            .add_systems(Update, exit_on_escape);
    }
}
