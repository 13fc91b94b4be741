//! Core domain: window, camera and process lifecycle systems.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::assets::{REQUIRED_ASSETS, asset_root, verify_assets};
use crate::movement::Key;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// The sprite sheet and backdrop are mandatory; bail out before the first
/// step if either is missing.
pub(crate) fn check_required_assets(mut exit: MessageWriter<AppExit>) {
    match verify_assets(&asset_root(), &REQUIRED_ASSETS) {
        Ok(()) => info!("All {} required assets present", REQUIRED_ASSETS.len()),
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::from_code(1));
        }
    }
}

pub(crate) fn exit_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(Key::Escape.key_code()) {
        info!("Escape pressed, closing");
        exit.write(AppExit::Success);
    }
}
