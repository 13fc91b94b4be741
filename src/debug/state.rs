//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking which debug overlays are visible
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Level geometry, hook zones and the player anchor drawn as gizmos
    pub show_geometry: bool,
    /// Text readout of the player's state and kinematics
    pub show_info: bool,
}
