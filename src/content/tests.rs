//! Content domain: tests for tuning file parsing.

use std::path::Path;

use super::load_movement_tuning;
use super::loader::parse_ron;
use crate::movement::MovementTuning;

#[test]
fn test_parse_full_tuning() {
    let source = r#"(
        gravity_step: 30.0,
        run_speed: 250.0,
        jump_velocity: 900.0,
        jump_lift: 20.0,
        slide_expiry: 0.5,
        platform_tolerance: 10.0,
        sprite_clearance: 64.0,
        sprite_scale: 2.0,
    )"#;

    let tuning: MovementTuning = parse_ron(source, "inline").unwrap();
    assert_eq!(tuning.gravity_step, 30.0);
    assert_eq!(tuning.run_speed, 250.0);
    assert_eq!(tuning.jump_velocity, 900.0);
    assert_eq!(tuning.slide_expiry, 0.5);
    assert_eq!(tuning.sprite_scale, 2.0);
}

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning: MovementTuning = parse_ron("(run_speed: 420.0)", "inline").unwrap();
    let defaults = MovementTuning::default();

    assert_eq!(tuning.run_speed, 420.0);
    assert_eq!(tuning.gravity_step, defaults.gravity_step);
    assert_eq!(tuning.jump_velocity, defaults.jump_velocity);
}

#[test]
fn test_malformed_tuning_reports_file() {
    let err = parse_ron::<MovementTuning>("(run_speed: fast)", "movement.ron").unwrap_err();
    assert_eq!(err.file, "movement.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load movement.ron"));
}

#[test]
fn test_missing_tuning_file_is_io_error() {
    let err = load_movement_tuning(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_matches_defaults() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(super::DATA_DIR);
    let tuning = load_movement_tuning(&base).unwrap();
    assert_eq!(tuning, MovementTuning::default());
}
