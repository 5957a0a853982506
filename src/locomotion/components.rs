//! Locomotion domain: components, modes and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static world geometry: floors, platforms, runnable walls
    Terrain,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Active locomotion mode. `Sliding` and `WallRunning` carry the transient
/// data that is only meaningful while the mode is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionMode {
    Idle,
    Walking,
    Running,
    Jumping,
    Sliding {
        /// Flattened viewpoint forward captured at slide start
        direction: Vec3,
    },
    WallRunning {
        /// Normal of the contacted wall
        normal: Vec3,
    },
}

impl LocomotionMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            LocomotionMode::Idle => ModeKind::Idle,
            LocomotionMode::Walking => ModeKind::Walking,
            LocomotionMode::Running => ModeKind::Running,
            LocomotionMode::Jumping => ModeKind::Jumping,
            LocomotionMode::Sliding { .. } => ModeKind::Sliding,
            LocomotionMode::WallRunning { .. } => ModeKind::WallRunning,
        }
    }
}

/// Payload-free mode discriminant for animation/UI/telemetry consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Idle,
    Walking,
    Running,
    Jumping,
    Sliding,
    WallRunning,
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModeKind::Idle => "Idle",
            ModeKind::Walking => "Walking",
            ModeKind::Running => "Running",
            ModeKind::Jumping => "Jumping",
            ModeKind::Sliding => "Sliding",
            ModeKind::WallRunning => "WallRunning",
        };
        write!(f, "{}", name)
    }
}

/// Per-character controller state: mode, vertical velocity and the timer
/// bank. One instance per controlled character; nothing here is shared.
#[derive(Component, Debug)]
pub struct Locomotion {
    pub mode: LocomotionMode,
    /// Only the vertical component is integrated; horizontal motion is
    /// recomputed from input every tick.
    pub velocity: Vec3,
    /// Grounded state of the previous tick, for landing edges
    pub was_grounded: bool,
    /// Wall-run eligibility of the previous tick; re-entry requires the
    /// condition to lapse once after a timer expiry
    pub was_wall_eligible: bool,
    /// Coyote-time countdown, refilled every grounded tick
    pub grace_timer: f32,
    /// Jump input buffer countdown, refilled on the jump edge
    pub jump_buffer: f32,
    /// Remaining slide time, decays only while sliding
    pub slide_timer: f32,
    /// Remaining wall-run time, decays only while wall-running
    pub wall_run_timer: f32,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            mode: LocomotionMode::Idle,
            velocity: Vec3::ZERO,
            was_grounded: false,
            was_wall_eligible: false,
            grace_timer: 0.0,
            jump_buffer: 0.0,
            slide_timer: 0.0,
            wall_run_timer: 0.0,
        }
    }
}

/// Probe results for the current tick. A probe with no hit reports no
/// contact, so a missing collaborator fails open to airborne.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SurfaceContacts {
    pub grounded: bool,
    /// Unit normal of the wall on the viewpoint's left, if any
    pub wall_left: Option<Vec3>,
    /// Unit normal of the wall on the viewpoint's right, if any
    pub wall_right: Option<Vec3>,
}

impl SurfaceContacts {
    /// Normal of the contacted wall; the right wall wins when both rays hit.
    pub fn wall_normal(&self) -> Option<Vec3> {
        self.wall_right.or(self.wall_left)
    }
}
