//! Locomotion domain: the per-tick drive that feeds the controller and
//! hands its displacement to the physics body.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::ViewCamera;
use crate::locomotion::controller::ViewBasis;
use crate::locomotion::{
    Locomotion, LocomotionInput, LocomotionTuning, ModeChanged, Player, SurfaceContacts,
};

pub(crate) fn drive_locomotion(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    tuning: Res<LocomotionTuning>,
    camera: Query<&Transform, (With<ViewCamera>, Without<Player>)>,
    mut query: Query<(Entity, &SurfaceContacts, &mut Locomotion, &mut LinearVelocity), With<Player>>,
    mut mode_changes: MessageWriter<ModeChanged>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let Ok(cam) = camera.single() else {
        return;
    };
    let view = ViewBasis::from_transform(cam);

    for (entity, contacts, mut locomotion, mut velocity) in &mut query {
        let before = locomotion.mode.kind();
        let displacement = locomotion.tick(&input, contacts, &view, &tuning, dt);

        // The solver resolves the requested motion against the course
        // geometry, so the displacement goes out as a velocity.
        velocity.0 = displacement / dt;

        let after = locomotion.mode.kind();
        if after != before {
            debug!("Mode changed: {} -> {}", before, after);
            mode_changes.write(ModeChanged {
                entity,
                from: before,
                to: after,
            });
        }
    }
}
