//! Content domain: tests for tuning parsing and validation.

use super::validate_tuning;
use crate::locomotion::LocomotionTuning;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_tuning_file_parses_to_defaults() {
    let contents = include_str!("../../assets/data/tuning.ron");
    let loaded: LocomotionTuning = ron::from_str(contents).expect("shipped tuning should parse");
    let defaults = LocomotionTuning::default();

    assert_eq!(loaded.walk_speed, defaults.walk_speed);
    assert_eq!(loaded.sprint_speed, defaults.sprint_speed);
    assert_eq!(loaded.jump_force, defaults.jump_force);
    assert_eq!(loaded.gravity, defaults.gravity);
    assert_eq!(loaded.grace_time, defaults.grace_time);
    assert_eq!(loaded.jump_buffer_time, defaults.jump_buffer_time);
    assert_eq!(loaded.slide_speed, defaults.slide_speed);
    assert_eq!(loaded.slide_duration, defaults.slide_duration);
    assert_eq!(loaded.wall_run_speed, defaults.wall_run_speed);
    assert_eq!(loaded.wall_run_duration, defaults.wall_run_duration);
    assert_eq!(loaded.wall_jump_force, defaults.wall_jump_force);
    assert_eq!(loaded.ground_anchor_height, defaults.ground_anchor_height);
}

#[test]
fn test_partial_tuning_file_keeps_defaults_for_missing_fields() {
    let loaded: LocomotionTuning =
        ron::from_str("(walk_speed: 3.0)").expect("partial tuning should parse");

    assert_eq!(loaded.walk_speed, 3.0);
    assert_eq!(loaded.sprint_speed, LocomotionTuning::default().sprint_speed);
    assert_eq!(loaded.gravity, LocomotionTuning::default().gravity);
}

#[test]
fn test_malformed_tuning_file_is_an_error() {
    assert!(ron::from_str::<LocomotionTuning>("(walk_speed: fast)").is_err());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_validates_clean() {
    assert!(validate_tuning(&LocomotionTuning::default()).is_empty());
}

#[test]
fn test_negative_speed_is_flagged() {
    let tuning = LocomotionTuning {
        walk_speed: -1.0,
        ..Default::default()
    };
    let warnings = validate_tuning(&tuning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "walk_speed");
}

#[test]
fn test_wall_run_gravity_must_stay_below_gravity() {
    let tuning = LocomotionTuning {
        wall_run_gravity: 20.0,
        ..Default::default()
    };
    let warnings = validate_tuning(&tuning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "wall_run_gravity");
}

#[test]
fn test_out_of_range_slide_control_is_flagged() {
    let tuning = LocomotionTuning {
        slide_control_strength: 1.5,
        ..Default::default()
    };
    let warnings = validate_tuning(&tuning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "slide_control_strength");
}
