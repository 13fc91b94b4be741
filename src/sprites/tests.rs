//! Sprites module: tests for animation timing and frame selection.

use bevy::prelude::*;

use super::{Animation, FrameRect, screen_to_world};

fn idle_strip() -> Animation {
    // 12 frames at 12 fps: one loop per second.
    Animation::new(FrameRect::new(0, 0, 19, 34), 12, 12.0)
}

#[test]
fn test_new_animation_starts_at_first_frame() {
    let anim = idle_strip();
    assert_eq!(anim.time(), 0.0);
    assert_eq!(anim.frame_index(), 0);
    assert_eq!(anim.cycle_duration(), 1.0);
}

#[test]
fn test_time_stays_within_cycle() {
    let mut anim = Animation::new(FrameRect::new(0, 229, 20, 36), 2, 1.0);
    let steps = [0.0, 0.3, 1.7, 2.0, 0.016, 5.5, 0.0, 1.99, 123.4];
    for dt in steps {
        anim.update(dt);
        assert!(
            anim.time() >= 0.0 && anim.time() < anim.cycle_duration(),
            "time {} escaped [0, {})",
            anim.time(),
            anim.cycle_duration()
        );
    }
}

#[test]
fn test_full_cycle_wraps_to_zero() {
    let mut anim = idle_strip();
    anim.update(1.0);
    assert_eq!(anim.time(), 0.0);
    assert_eq!(anim.frame_index(), 0);
}

#[test]
fn test_frame_index_follows_time() {
    let mut anim = idle_strip();
    anim.update(0.25);
    assert_eq!(anim.frame_index(), 3);
    anim.update(0.5);
    assert_eq!(anim.frame_index(), 9);
}

#[test]
fn test_right_facing_frame_rect() {
    let mut anim = idle_strip();
    anim.update(0.25);
    assert_eq!(anim.current_frame_rect(true), FrameRect::new(57, 0, 19, 34));
}

#[test]
fn test_left_facing_frame_rect_is_mirrored() {
    let mut anim = idle_strip();
    anim.update(0.25);
    let rect = anim.current_frame_rect(false);
    assert_eq!(rect, FrameRect::new(76, 0, -19, 34));
    assert!(rect.is_mirrored());
}

#[test]
fn test_frame_rect_keeps_strip_row() {
    let anim = Animation::new(FrameRect::new(0, 118, 20, 50), 6, 6.0);
    let rect = anim.current_frame_rect(true);
    assert_eq!(rect.top, 118);
    assert_eq!(rect.height, 50);
}

#[test]
fn test_mirrored_rect_covers_same_pixels() {
    let mut anim = idle_strip();
    anim.update(0.25);

    let (right, right_flip) = anim.current_frame_rect(true).to_sprite_rect();
    let (left, left_flip) = anim.current_frame_rect(false).to_sprite_rect();

    assert_eq!(right, left);
    assert_eq!(right, Rect::new(57.0, 0.0, 76.0, 34.0));
    assert!(!right_flip);
    assert!(left_flip);
}

#[test]
fn test_screen_to_world_flips_y_around_center() {
    assert_eq!(screen_to_world(Vec2::new(600.0, 450.0)), Vec2::ZERO);
    assert_eq!(
        screen_to_world(Vec2::new(0.0, 0.0)),
        Vec2::new(-600.0, 450.0)
    );
    assert_eq!(
        screen_to_world(Vec2::new(1200.0, 900.0)),
        Vec2::new(600.0, -450.0)
    );
}
