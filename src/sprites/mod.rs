//! Sprites module: sprite sheet animation and drawing the player.
//!
//! The simulation runs in screen space (origin top-left, y down). Drawing
//! converts to world space with the camera centered on the window.

pub mod animation;

#[cfg(test)]
mod tests;

pub use animation::{Animation, FrameRect};

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::core::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::movement::Player;

pub const HERO_SHEET: &str = "hero.png";
pub const BACKGROUND: &str = "background.png";

/// Loaded texture handles.
#[derive(Resource, Debug, Default)]
pub struct SpriteSheets {
    pub hero: Handle<Image>,
    pub background: Handle<Image>,
}

/// Marker for the backdrop sprite.
#[derive(Component, Debug)]
pub struct Background;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteSheets>()
            .add_systems(Startup, (load_sprite_sheets, spawn_background).chain())
            .add_systems(Update, (attach_player_sprite, sync_player_sprite).chain());
    }
}

/// Convert a screen-space point into world space.
pub fn screen_to_world(point: Vec2) -> Vec2 {
    Vec2::new(
        point.x - WINDOW_WIDTH as f32 / 2.0,
        WINDOW_HEIGHT as f32 / 2.0 - point.y,
    )
}

fn load_sprite_sheets(mut sheets: ResMut<SpriteSheets>, asset_server: Res<AssetServer>) {
    sheets.hero = asset_server.load(HERO_SHEET);
    sheets.background = asset_server.load(BACKGROUND);
}

fn spawn_background(mut commands: Commands, sheets: Res<SpriteSheets>) {
    commands.spawn((
        Background,
        Sprite {
            image: sheets.background.clone(),
            custom_size: Some(Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

fn attach_player_sprite(
    mut commands: Commands,
    sheets: Res<SpriteSheets>,
    query: Query<(Entity, &Player), Added<Player>>,
) {
    for (entity, player) in &query {
        let position = screen_to_world(player.position());
        commands.entity(entity).insert((
            Sprite::from_image(sheets.hero.clone()),
            Anchor::BOTTOM_LEFT,
            Transform::from_xyz(position.x, position.y, 1.0)
                .with_scale(Vec3::splat(player.tuning().sprite_scale)),
        ));
    }
}

/// Draw the current state's frame at the player's committed position.
fn sync_player_sprite(mut query: Query<(&Player, &mut Sprite, &mut Transform)>) {
    for (player, mut sprite, mut transform) in &mut query {
        let (rect, flip_x) = player.sprite_frame().to_sprite_rect();
        sprite.rect = Some(rect);
        sprite.flip_x = flip_x;

        let position = screen_to_world(player.position());
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
