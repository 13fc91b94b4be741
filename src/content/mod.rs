//! Content domain: data-driven tuning loaded at startup.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::{ContentLoadError, load_movement_tuning};

use bevy::prelude::*;

use crate::core::asset_root;
use crate::movement::MovementTuning;

/// Tuning files live under the asset root.
pub const DATA_DIR: &str = "data";
pub const MOVEMENT_FILE: &str = "movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning);
    }
}

/// Replace the default tuning with the data file, if it loads.
fn load_tuning(mut commands: Commands) {
    match load_movement_tuning(&asset_root().join(DATA_DIR)) {
        Ok(tuning) => {
            info!("Loaded movement tuning: {:?}", tuning);
            commands.insert_resource(tuning);
        }
        Err(e) => {
            warn!("{}, using default movement tuning", e);
            commands.insert_resource(MovementTuning::default());
        }
    }
}
