//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Tunable locomotion parameters. Defaults match the shipped
/// `assets/data/tuning.ron`; the file overrides them at startup.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    /// Coyote time: jump grace window after leaving the ground
    pub grace_time: f32,
    /// How long an early jump press is remembered before landing
    pub jump_buffer_time: f32,
    pub slide_speed: f32,
    pub slide_duration: f32,
    /// How much lateral input bleeds into the slide direction (0.0-1.0)
    pub slide_control_strength: f32,
    pub wall_run_speed: f32,
    pub wall_run_duration: f32,
    pub wall_jump_force: f32,
    /// Max distance of the lateral wall rays
    pub wall_check_distance: f32,
    /// Reduced gravity applied while wall-running, must stay below `gravity`
    pub wall_run_gravity: f32,
    /// Radius of the ground overlap sphere
    pub ground_check_distance: f32,
    /// Vertical offset of the ground probe anchor from the body origin
    pub ground_anchor_height: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.2,
            sprint_speed: 7.0,
            jump_force: 7.0,
            gravity: 9.81,
            grace_time: 0.2,
            jump_buffer_time: 0.2,
            slide_speed: 10.0,
            slide_duration: 1.0,
            slide_control_strength: 0.3,
            wall_run_speed: 6.0,
            wall_run_duration: 2.0,
            wall_jump_force: 10.0,
            wall_check_distance: 0.7,
            wall_run_gravity: 2.0,
            ground_check_distance: 0.3,
            ground_anchor_height: -0.9,
        }
    }
}

impl LocomotionTuning {
    /// World-space offset of the ground probe anchor.
    pub fn ground_anchor(&self) -> Vec3 {
        Vec3::new(0.0, self.ground_anchor_height, 0.0)
    }
}

/// Per-tick input snapshot. Written once per tick by the input system; the
/// controller never polls devices directly.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LocomotionInput {
    /// Move vector, magnitude clamped to 1 (x = strafe, y = forward)
    pub move_axis: Vec2,
    pub sprint_held: bool,
    /// Jump edge signal
    pub jump_pressed: bool,
    /// Slide edge signal
    pub slide_pressed: bool,
}
