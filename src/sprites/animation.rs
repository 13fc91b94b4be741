//! Animation clock and frame selection.
//!
//! Sprite sheets lay frames out horizontally: frame `n` of a strip starts
//! `n * width` pixels to the right of the strip origin. Each player state owns
//! one [`Animation`] and restarts it from zero on entry.

use bevy::prelude::*;

/// Sub-image of the sprite sheet, in texture pixels.
///
/// `width` is negative for a mirrored frame: sampling starts at `left` and
/// walks leftwards, which flips the frame horizontally in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl FrameRect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        self.width < 0
    }

    /// Normalize into a texture rect with positive extent plus a horizontal
    /// flip flag, which is how Bevy sprites express mirroring.
    pub fn to_sprite_rect(&self) -> (Rect, bool) {
        let (min_x, max_x) = if self.is_mirrored() {
            (self.left + self.width, self.left)
        } else {
            (self.left, self.left + self.width)
        };
        let rect = Rect::new(
            min_x as f32,
            self.top as f32,
            max_x as f32,
            (self.top + self.height) as f32,
        );
        (rect, self.is_mirrored())
    }
}

/// Looping frame animation over a horizontal strip.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frame: FrameRect,
    frame_count: u32,
    /// Frames per second.
    speed: f32,
    time: f32,
}

impl Animation {
    pub fn new(frame: FrameRect, frame_count: u32, speed: f32) -> Self {
        Self {
            frame,
            frame_count: frame_count.max(1),
            speed,
            time: 0.0,
        }
    }

    /// Length of one full loop in seconds.
    pub fn cycle_duration(&self) -> f32 {
        self.frame_count as f32 / self.speed
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Advance the clock, keeping it inside `[0, cycle_duration)`.
    pub fn update(&mut self, dt: f32) {
        let cycle = self.cycle_duration();
        self.time = (self.time + dt).rem_euclid(cycle);
        // rem_euclid can round up to exactly `cycle` for tiny negative inputs
        if self.time >= cycle {
            self.time = 0.0;
        }
    }

    pub fn frame_index(&self) -> u32 {
        (self.speed * self.time).floor() as u32 % self.frame_count
    }

    /// Texture rect of the current frame. Left-facing frames are mirrored by
    /// starting one frame further right with a negated width.
    pub fn current_frame_rect(&self, facing_right: bool) -> FrameRect {
        let index = self.frame_index() as i32;
        let width = self.frame.width;
        if facing_right {
            FrameRect {
                left: self.frame.left + index * width,
                ..self.frame
            }
        } else {
            FrameRect {
                left: self.frame.left + (index + 1) * width,
                width: -width,
                ..self.frame
            }
        }
    }
}
