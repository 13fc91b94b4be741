//! Movement domain: tuning constants.

use bevy::prelude::*;
use serde::Deserialize;

/// Player feel constants. Distances are screen pixels, time is seconds.
///
/// Loaded from `assets/data/movement.ron` when present; any field the file
/// leaves out keeps its default.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Downward speed added once per step while airborne over ground.
    pub gravity_step: f32,
    pub run_speed: f32,
    /// Upward launch speed of a jump.
    pub jump_velocity: f32,
    /// Immediate lift on jump so the ground check does not re-catch the
    /// player on the same step.
    pub jump_lift: f32,
    /// Seconds a moving slide lasts before turning back into a run.
    pub slide_expiry: f32,
    /// How far below a platform a falling player is still caught.
    pub platform_tolerance: f32,
    /// Space kept clear at the right edge of the level for the sprite.
    pub sprite_clearance: f32,
    pub sprite_scale: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity_step: 25.0,
            run_speed: 300.0,
            jump_velocity: 800.0,
            jump_lift: 30.0,
            slide_expiry: 1.0,
            platform_tolerance: 20.0,
            sprite_clearance: 70.0,
            sprite_scale: 3.0,
        }
    }
}

impl MovementTuning {
    /// Height of an undisturbed jump. Gravity is applied per step, so this
    /// depends on the step rate.
    ///
    /// Summed in closed form over the `ceil(jump_velocity / gravity_step)`
    /// rising steps.
    pub fn jump_height(&self, step_hz: f32) -> f32 {
        let lift = self.jump_lift as f64;
        let jump = self.jump_velocity as f64;
        let gravity = self.gravity_step as f64;
        if jump <= 0.0 {
            return self.jump_lift;
        }
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        let dt = 1.0 / step_hz as f64;
        let steps = (jump / gravity).ceil();
        let rise = steps * jump - gravity * steps * (steps + 1.0) / 2.0;
        (lift + rise * dt) as f32
    }
}
