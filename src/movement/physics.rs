//! Movement domain: per-step integration and collision resolution.

use bevy::prelude::*;

use crate::level::Level;
use crate::movement::input::InputSource;
use crate::movement::state::{PlayerEvent, StateTag};
use crate::movement::{Facing, Player};

impl Player {
    /// Advance one step of `dt` seconds against `level`.
    pub fn update(&mut self, dt: f32, level: &Level, input: &impl InputSource) {
        self.state.update(dt);
        self.expire_slide();
        self.sample_input(input);
        self.try_hook(level);
        self.resolve_support(level);
        self.integrate(dt, level);
        self.clamp_to_bounds(level);
        self.slide_timer += dt;

        trace!(
            "Player at ({:.1}, {:.1}) vel ({:.1}, {:.1}) {:?}",
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
            self.state_tag()
        );
    }

    /// Velocity here is still the previous step's.
    fn expire_slide(&mut self) {
        if !self.state.is(StateTag::Sliding) {
            return;
        }
        if self.slide_timer > self.tuning.slide_expiry && self.velocity.x != 0.0 {
            self.fire(PlayerEvent::StartRunning);
        }
        if self.velocity.x == 0.0 {
            self.fire(PlayerEvent::StartRunning);
            self.fire(PlayerEvent::Stop);
        }
    }

    fn sample_input(&mut self, input: &impl InputSource) {
        self.velocity.x = 0.0;
        if self.state.is(StateTag::Hooked) {
            return;
        }
        if input.left_held() {
            self.velocity.x -= self.tuning.run_speed;
            self.facing = Facing::Left;
        }
        if input.right_held() {
            self.velocity.x += self.tuning.run_speed;
            self.facing = Facing::Right;
        }
    }

    fn try_hook(&mut self, level: &Level) {
        if !self.state.is(StateTag::Jumping) {
            return;
        }
        let hit = level
            .hooks()
            .iter()
            .position(|anchor| anchor.captures(self.position, self.facing));
        if let Some(index) = hit {
            self.fire(PlayerEvent::Hook);
            self.velocity.y = 0.0;
            self.position = level.hooks()[index].snap;
            self.active_hook = Some(index);
            debug!("Hooked onto anchor {} at {:?}", index, self.position);
        }
    }

    /// Gravity plus landing. Every platform is checked; ground rects stop at
    /// the first one that supports the player.
    fn resolve_support(&mut self, level: &Level) {
        let tolerance = self.tuning.platform_tolerance;
        for platform in level.platforms() {
            if platform.catches(self.position, self.velocity.y, tolerance) {
                self.land(platform.surface());
                self.on_platform = true;
            }
        }

        let hooked = self.state.is(StateTag::Hooked);
        for rect in level.ground() {
            if rect.supports(self.position) {
                self.land(rect.surface());
                break;
            }
            if rect.point_above(self.position) && !hooked {
                self.velocity.y += self.tuning.gravity_step;
            }
        }
    }

    /// Move, then undo this step's horizontal displacement for every ground
    /// rect the player ended up inside. Vertical overlap is left alone.
    fn integrate(&mut self, dt: f32, level: &Level) {
        self.position += self.velocity * dt;
        for rect in level.ground() {
            if rect.penetrated_by(self.position) {
                self.position.x -= self.velocity.x * dt;
            }
        }
    }

    fn clamp_to_bounds(&mut self, level: &Level) {
        let max_x = level.width() - self.tuning.sprite_clearance;
        if self.position.x > max_x {
            self.position.x = max_x;
        }
        if self.position.x < 0.0 {
            self.position.x = 0.0;
        }
    }
}
