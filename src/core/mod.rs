//! Core domain: app flow states, rig validation and the viewpoint camera.

mod camera;
mod state;

pub use camera::ViewCamera;
pub use state::GameState;

use bevy::prelude::*;

use crate::locomotion::Player;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, (camera::spawn_view_rig, spawn_sun))
            .add_systems(Update, validate_rig.run_if(in_state(GameState::Boot)))
            .add_systems(
                Update,
                camera::orbit_view_rig.run_if(in_state(GameState::Run)),
            );
    }
}

fn spawn_sun(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// One-shot setup check: a missing collaborator is a fatal configuration
/// error, reported once, after which the controller never ticks.
fn validate_rig(
    camera: Query<(), With<ViewCamera>>,
    player: Query<(), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if camera.is_empty() {
        error!("No view camera bound; locomotion halted");
        next_state.set(GameState::Fault);
        return;
    }
    if player.is_empty() {
        error!("No player body bound; locomotion halted");
        next_state.set(GameState::Fault);
        return;
    }

    info!("Rig validated, entering run state");
    next_state.set(GameState::Run);
}
