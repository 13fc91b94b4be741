//! Level domain: static collision shapes.
//!
//! All comparisons are in screen space (y grows downward) and are strict
//! unless noted, so a player resting exactly on a surface is neither inside
//! nor above it.

use bevy::prelude::*;

/// One-way horizontal segment, landable from above only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub a: Vec2,
    pub b: Vec2,
}

impl Platform {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Whether a falling point at `position` lands on this platform. The
    /// catch band reaches `tolerance` pixels below the segment.
    pub fn catches(&self, position: Vec2, velocity_y: f32, tolerance: f32) -> bool {
        position.y > self.a.y
            && position.y < self.b.y + tolerance
            && position.x < self.b.x
            && position.x > self.a.x
            && velocity_y > 0.0
    }

    pub fn surface(&self) -> f32 {
        self.a.y
    }
}

/// Solid region with `a` as the top-left corner and `b` as the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundRect {
    pub a: Vec2,
    pub b: Vec2,
}

impl GroundRect {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    fn spans_x(&self, x: f32) -> bool {
        x > self.a.x && x < self.b.x
    }

    /// Point has sunk below the top edge and should be snapped back onto it.
    pub fn supports(&self, position: Vec2) -> bool {
        position.y > self.a.y && position.y < self.b.y && self.spans_x(position.x)
    }

    /// Point is over the rect, above its top edge.
    pub fn point_above(&self, position: Vec2) -> bool {
        position.y < self.a.y && self.spans_x(position.x)
    }

    /// Point is inside the rect for horizontal pushback; the x span is
    /// inclusive here.
    pub fn penetrated_by(&self, position: Vec2) -> bool {
        position.x >= self.a.x
            && position.x <= self.b.x
            && position.y > self.a.y
            && position.y < self.b.y
    }

    pub fn surface(&self) -> f32 {
        self.a.y
    }
}
