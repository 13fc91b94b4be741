//! Level domain: tests for layout and collision predicates.

use bevy::prelude::*;

use super::{GroundRect, Level, Platform};
use crate::movement::Facing;

// -----------------------------------------------------------------------------
// Standard layout
// -----------------------------------------------------------------------------

#[test]
fn test_standard_layout_counts() {
    let level = Level::standard();
    assert_eq!(level.platforms().len(), 2);
    assert_eq!(level.ground().len(), 5);
    assert_eq!(level.hooks().len(), 2);
    assert_eq!(level.width(), 1200.0);
    assert_eq!(level.height(), 900.0);
}

#[test]
fn test_standard_layout_keeps_insertion_order() {
    let level = Level::standard();
    assert_eq!(level.ground()[0].a, Vec2::new(-10.0, 460.0));
    assert_eq!(level.ground()[4].a, Vec2::new(380.0, 142.0));
    assert_eq!(level.platforms()[0].a, Vec2::new(230.0, 140.0));
}

#[test]
fn test_hook_anchors_are_mirrored_pair() {
    let level = Level::standard();
    let left = level.hook(0).unwrap();
    let right = level.hook(1).unwrap();

    assert_eq!(left.facing, Facing::Left);
    assert_eq!(right.facing, Facing::Right);
    assert_eq!(left.release_point(), Vec2::new(330.0, 536.0));
    assert_eq!(right.release_point(), Vec2::new(220.0, 241.0));
    assert!(level.hook(2).is_none());
}

// -----------------------------------------------------------------------------
// Ground rects
// -----------------------------------------------------------------------------

fn block() -> GroundRect {
    GroundRect::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0))
}

#[test]
fn test_ground_supports_only_strictly_inside() {
    let rect = block();
    assert!(rect.supports(Vec2::new(150.0, 150.0)));
    // Resting exactly on top is not inside.
    assert!(!rect.supports(Vec2::new(150.0, 100.0)));
    assert!(!rect.supports(Vec2::new(100.0, 150.0)));
    assert!(!rect.supports(Vec2::new(150.0, 200.0)));
}

#[test]
fn test_ground_point_above() {
    let rect = block();
    assert!(rect.point_above(Vec2::new(150.0, 50.0)));
    assert!(!rect.point_above(Vec2::new(150.0, 100.0)));
    assert!(!rect.point_above(Vec2::new(250.0, 50.0)));
}

#[test]
fn test_ground_penetration_uses_inclusive_x() {
    let rect = block();
    assert!(rect.penetrated_by(Vec2::new(100.0, 150.0)));
    assert!(rect.penetrated_by(Vec2::new(200.0, 150.0)));
    assert!(!rect.penetrated_by(Vec2::new(150.0, 100.0)));
    assert!(!rect.penetrated_by(Vec2::new(99.0, 150.0)));
}

// -----------------------------------------------------------------------------
// Platforms
// -----------------------------------------------------------------------------

#[test]
fn test_platform_catch_band() {
    let platform = Platform::new(Vec2::new(100.0, 300.0), Vec2::new(200.0, 300.0));
    assert!(platform.catches(Vec2::new(150.0, 310.0), 50.0, 20.0));
    assert!(platform.catches(Vec2::new(150.0, 319.0), 50.0, 20.0));
    assert!(!platform.catches(Vec2::new(150.0, 320.0), 50.0, 20.0));
    assert!(!platform.catches(Vec2::new(150.0, 300.0), 50.0, 20.0));
    assert!(!platform.catches(Vec2::new(250.0, 310.0), 50.0, 20.0));
}

#[test]
fn test_platform_is_one_way() {
    let platform = Platform::new(Vec2::new(100.0, 300.0), Vec2::new(200.0, 300.0));
    assert!(!platform.catches(Vec2::new(150.0, 310.0), 0.0, 20.0));
    assert!(!platform.catches(Vec2::new(150.0, 310.0), -50.0, 20.0));
}

// -----------------------------------------------------------------------------
// Hooks
// -----------------------------------------------------------------------------

#[test]
fn test_hook_zone_is_inclusive_and_facing_bound() {
    let level = Level::standard();
    let left = level.hook(0).unwrap();

    assert!(left.captures(Vec2::new(315.0, 515.0), Facing::Left));
    assert!(left.captures(Vec2::new(345.0, 535.0), Facing::Left));
    assert!(!left.captures(Vec2::new(346.0, 525.0), Facing::Left));
    assert!(!left.captures(Vec2::new(330.0, 525.0), Facing::Right));
}
