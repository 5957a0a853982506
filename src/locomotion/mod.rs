//! Locomotion domain: state machine, probes and plugin wiring.

mod bootstrap;
mod components;
pub(crate) mod controller;
mod events;
mod resources;
mod systems;


pub use components::{
    GameLayer, Locomotion, LocomotionMode, ModeKind, Player, SurfaceContacts,
};
pub use controller::ViewBasis;
pub use events::ModeChanged;
pub use resources::{LocomotionInput, LocomotionTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::locomotion::bootstrap::{spawn_player, spawn_test_course};
use crate::locomotion::systems::{drive_locomotion, probe_contacts, sample_input};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_message::<ModeChanged>()
            .add_systems(Startup, (spawn_player, spawn_test_course))
            .add_systems(
                Update,
                (sample_input, probe_contacts, drive_locomotion)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
