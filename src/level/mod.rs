//! Level domain: the static collision layout the player moves through.

mod geometry;
mod hooks;
#[cfg(test)]
mod tests;

pub use geometry::{GroundRect, Platform};
pub use hooks::HookAnchor;

use bevy::prelude::*;

use crate::core::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::movement::Facing;

/// Static level geometry. Built once at startup and never mutated.
///
/// List order is significant: ground rects are resolved first-match-wins,
/// platforms are all applied in order.
#[derive(Resource, Debug, Clone)]
pub struct Level {
    platforms: Vec<Platform>,
    ground: Vec<GroundRect>,
    hooks: Vec<HookAnchor>,
    width: f32,
    height: f32,
}

impl Level {
    pub fn new(
        platforms: Vec<Platform>,
        ground: Vec<GroundRect>,
        hooks: Vec<HookAnchor>,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            platforms,
            ground,
            hooks,
            width,
            height,
        }
    }

    /// The hand-placed layout that matches the background art.
    pub fn standard() -> Self {
        let w = WINDOW_WIDTH as f32;
        let h = WINDOW_HEIGHT as f32;

        let platforms = vec![
            Platform::new(Vec2::new(230.0, 140.0), Vec2::new(580.0, 140.0)),
            Platform::new(Vec2::new(180.0, 459.0), Vec2::new(310.0, 459.0)),
        ];

        let ground = vec![
            GroundRect::new(Vec2::new(-10.0, 460.0), Vec2::new(181.0, h)),
            GroundRect::new(Vec2::new(180.0, 700.0), Vec2::new(441.0, h)),
            GroundRect::new(Vec2::new(440.0, 770.0), Vec2::new(636.0, h)),
            GroundRect::new(Vec2::new(635.0, 700.0), Vec2::new(w, h)),
            GroundRect::new(Vec2::new(380.0, 142.0), Vec2::new(560.0, 350.0)),
        ];

        let hooks = vec![
            HookAnchor {
                trigger: Rect::new(315.0, 515.0, 345.0, 535.0),
                facing: Facing::Left,
                snap: Vec2::new(330.0, 525.0),
                release_offset: Vec2::new(0.0, 11.0),
                swing_launch: Vec2::new(290.0, 450.0),
            },
            HookAnchor {
                trigger: Rect::new(200.0, 225.0, 230.0, 240.0),
                facing: Facing::Right,
                snap: Vec2::new(220.0, 205.0),
                release_offset: Vec2::new(0.0, 36.0),
                swing_launch: Vec2::new(255.0, 130.0),
            },
        ];

        Self::new(platforms, ground, hooks, w, h)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn ground(&self) -> &[GroundRect] {
        &self.ground
    }

    pub fn hooks(&self) -> &[HookAnchor] {
        &self.hooks
    }

    pub fn hook(&self, index: usize) -> Option<&HookAnchor> {
        self.hooks.get(index)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::standard()
    }
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Level>()
            .add_systems(Startup, log_level_summary);
    }
}

fn log_level_summary(level: Res<Level>) {
    info!(
        "Level ready: {} platforms, {} ground rects, {} hook anchors ({}x{})",
        level.platforms().len(),
        level.ground().len(),
        level.hooks().len(),
        level.width(),
        level.height()
    );
}
