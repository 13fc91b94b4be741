//! Level domain: grapple anchors.

use bevy::prelude::*;

use crate::movement::Facing;

/// A fixed grapple point. Jumping into `trigger` while facing `facing`
/// snaps the player onto `snap`, where it hangs until released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HookAnchor {
    /// Inclusive trigger zone.
    pub trigger: Rect,
    pub facing: Facing,
    pub snap: Vec2,
    /// Applied to the hanging position when letting go with a direction key.
    pub release_offset: Vec2,
    /// Absolute position the player is flung to when letting go with Up.
    pub swing_launch: Vec2,
}

impl HookAnchor {
    pub fn captures(&self, position: Vec2, facing: Facing) -> bool {
        self.facing == facing && self.trigger.contains(position)
    }

    pub fn release_point(&self) -> Vec2 {
        self.snap + self.release_offset
    }
}
