//! Locomotion domain: the per-tick state machine and motion integrator.
//!
//! Everything here is pure with respect to the engine: the drive system
//! gathers the input snapshot, probe results and viewpoint basis, and the
//! controller turns them into a world-space displacement for the tick. Given
//! a fixed input/dt sequence the output is fully deterministic, which is what
//! the unit suite relies on.

use bevy::prelude::*;

use crate::locomotion::{Locomotion, LocomotionInput, LocomotionMode, LocomotionTuning, SurfaceContacts};

/// Residual downward velocity kept while grounded, so the body stays pressed
/// to the floor without accumulating fall speed.
pub(crate) const GROUNDED_FALL_CLAMP: f32 = -2.0;

/// Air-control fraction of walk speed while airborne.
pub(crate) const AIR_CONTROL: f32 = 0.8;

/// Horizontal push away from the wall on a wall jump, in units/s.
pub(crate) const WALL_KICK: f32 = 5.0;

/// Move-input magnitude below which directional input counts as none.
pub(crate) const INPUT_DEADZONE: f32 = 0.1;

/// Viewpoint orientation flattened to the horizontal plane. The camera is the
/// only orientation collaborator; input space maps through this basis.
#[derive(Debug, Clone, Copy)]
pub struct ViewBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl ViewBasis {
    pub fn new(forward: Vec3, right: Vec3) -> Self {
        Self {
            forward: Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero(),
            right: Vec3::new(right.x, 0.0, right.z).normalize_or_zero(),
        }
    }

    pub fn from_transform(transform: &Transform) -> Self {
        Self::new(transform.forward().into(), transform.right().into())
    }

    /// Map an input-space vector (x = strafe, y = forward) into world space.
    pub fn project(&self, axis: Vec2) -> Vec3 {
        self.forward * axis.y + self.right * axis.x
    }
}

impl Locomotion {
    /// Advance the controller by one tick and return the requested
    /// world-space displacement. Order within the tick: contact edges and
    /// grounded clamp, timer bank, transitions, per-mode horizontal motion,
    /// jump evaluation, gravity, vertical contribution.
    pub fn tick(
        &mut self,
        input: &LocomotionInput,
        contacts: &SurfaceContacts,
        view: &ViewBasis,
        tuning: &LocomotionTuning,
        dt: f32,
    ) -> Vec3 {
        let landed = contacts.grounded && !self.was_grounded;
        self.was_grounded = contacts.grounded;

        if contacts.grounded && self.velocity.y < 0.0 {
            self.velocity.y = GROUNDED_FALL_CLAMP;
        }

        // Landing after an airborne stretch always ends a slide. The
        // classifier below picks the grounded mode for this tick.
        if landed && matches!(self.mode, LocomotionMode::Sliding { .. }) {
            self.slide_timer = 0.0;
            self.mode = LocomotionMode::Idle;
        }

        self.update_timers(contacts.grounded, input.jump_pressed, tuning, dt);
        self.update_transitions(input, contacts, view, tuning);

        let mut displacement = self.horizontal_velocity(input, view, tuning) * dt;

        // Wall-running trades full gravity for a slow controlled fall.
        if matches!(self.mode, LocomotionMode::WallRunning { .. }) {
            self.velocity.y -= tuning.wall_run_gravity * dt;
        }

        displacement += self.apply_jump_and_gravity(contacts.grounded, tuning, dt);
        displacement + self.velocity * dt
    }

    fn update_timers(&mut self, grounded: bool, jump_edge: bool, tuning: &LocomotionTuning, dt: f32) {
        if jump_edge {
            self.jump_buffer = tuning.jump_buffer_time;
        }

        if grounded {
            self.grace_timer = tuning.grace_time;
        } else {
            self.grace_timer = (self.grace_timer - dt).max(0.0);
        }

        self.jump_buffer = (self.jump_buffer - dt).max(0.0);

        if matches!(self.mode, LocomotionMode::Sliding { .. }) {
            self.slide_timer -= dt;
            if self.slide_timer <= 0.0 {
                self.slide_timer = 0.0;
                // Hand back to the classifier this tick
                self.mode = LocomotionMode::Idle;
            }
        }

        if matches!(self.mode, LocomotionMode::WallRunning { .. }) {
            self.wall_run_timer -= dt;
            if self.wall_run_timer <= 0.0 {
                self.wall_run_timer = 0.0;
                self.mode = LocomotionMode::Jumping;
            }
        }
    }

    fn update_transitions(
        &mut self,
        input: &LocomotionInput,
        contacts: &SurfaceContacts,
        view: &ViewBasis,
        tuning: &LocomotionTuning,
    ) {
        let moving = input.move_axis.length() > INPUT_DEADZONE;

        // Wall-run entry is edge-triggered: after a timer expiry the
        // eligibility condition must lapse once before a new run can start.
        let eligible = !contacts.grounded && contacts.wall_normal().is_some() && moving;
        match (self.mode, contacts.wall_normal()) {
            (LocomotionMode::WallRunning { .. }, Some(normal)) if eligible => {
                // Keep the stored normal in step with the contact
                self.mode = LocomotionMode::WallRunning { normal };
            }
            (LocomotionMode::WallRunning { .. }, _) => {
                self.mode = LocomotionMode::Jumping;
            }
            (_, Some(normal)) if eligible && !self.was_wall_eligible => {
                self.mode = LocomotionMode::WallRunning { normal };
                self.wall_run_timer = tuning.wall_run_duration;
            }
            _ => {}
        }
        self.was_wall_eligible = eligible;

        // Slide entry; a request mid-slide is ignored
        if input.slide_pressed
            && contacts.grounded
            && moving
            && !matches!(self.mode, LocomotionMode::Sliding { .. })
        {
            self.mode = LocomotionMode::Sliding {
                direction: view.forward,
            };
            self.slide_timer = tuning.slide_duration;
        }

        // Generic classifier; the sticky modes and an airborne jump own
        // their own exits
        let sticky = matches!(
            self.mode,
            LocomotionMode::Sliding { .. } | LocomotionMode::WallRunning { .. }
        );
        let airborne_jump = self.mode == LocomotionMode::Jumping && !contacts.grounded;
        if !sticky && !airborne_jump {
            self.mode = if !contacts.grounded {
                LocomotionMode::Jumping
            } else if !moving {
                LocomotionMode::Idle
            } else if input.sprint_held {
                LocomotionMode::Running
            } else {
                LocomotionMode::Walking
            };
        }
    }

    /// Per-mode horizontal velocity, camera-relative.
    fn horizontal_velocity(
        &self,
        input: &LocomotionInput,
        view: &ViewBasis,
        tuning: &LocomotionTuning,
    ) -> Vec3 {
        match self.mode {
            LocomotionMode::Idle | LocomotionMode::Walking | LocomotionMode::Running => {
                let speed = if input.sprint_held {
                    tuning.sprint_speed
                } else {
                    tuning.walk_speed
                };
                view.project(input.move_axis) * speed
            }
            LocomotionMode::Jumping => {
                view.project(input.move_axis) * (tuning.walk_speed * AIR_CONTROL)
            }
            LocomotionMode::Sliding { direction } => {
                let steer = view.project(input.move_axis) * tuning.slide_control_strength;
                (direction + steer) * tuning.slide_speed
            }
            LocomotionMode::WallRunning { normal } => {
                let mut along = normal.cross(Vec3::Y);
                if along.dot(view.forward) < 0.0 {
                    along = -along;
                }
                along * tuning.wall_run_speed
            }
        }
    }

    /// Evaluate the buffered jump, then integrate gravity. Returns the extra
    /// displacement of a wall kick; the fresh jump impulse itself starts
    /// integrating next tick, so gravity skips the tick it fires.
    fn apply_jump_and_gravity(&mut self, grounded: bool, tuning: &LocomotionTuning, dt: f32) -> Vec3 {
        let mut kick = Vec3::ZERO;
        let mut jumped = false;

        if self.jump_buffer > 0.0
            && (self.grace_timer > 0.0 || matches!(self.mode, LocomotionMode::WallRunning { .. }))
        {
            if let LocomotionMode::WallRunning { normal } = self.mode {
                self.velocity.y = tuning.wall_jump_force;
                kick = (normal * WALL_KICK + Vec3::Y) * dt;
            } else {
                self.velocity.y = tuning.jump_force;
            }
            self.mode = LocomotionMode::Jumping;
            self.jump_buffer = 0.0;
            self.grace_timer = 0.0;
            jumped = true;
        }

        if !jumped && !grounded && !matches!(self.mode, LocomotionMode::WallRunning { .. }) {
            self.velocity.y -= tuning.gravity * dt;
        }

        kick
    }
}
