//! Core domain: the orbit-follow view camera.
//!
//! The camera is the viewpoint collaborator: its flattened forward/right
//! basis is what the locomotion systems map input through.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::locomotion::Player;

const MOUSE_SENSITIVITY: f32 = 0.003;
const PITCH_LIMITS: (f32, f32) = (-1.2, 0.4);
const FOCUS_HEIGHT: f32 = 1.0;

#[derive(Component, Debug)]
pub struct ViewCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: -0.35,
            distance: 8.0,
        }
    }
}

pub(crate) fn spawn_view_rig(mut commands: Commands) {
    commands.spawn((
        ViewCamera::default(),
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn orbit_view_rig(
    mouse: Res<AccumulatedMouseMotion>,
    player: Query<&Transform, (With<Player>, Without<ViewCamera>)>,
    mut camera: Query<(&mut ViewCamera, &mut Transform), Without<Player>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let Ok((mut rig, mut transform)) = camera.single_mut() else {
        return;
    };

    rig.yaw -= mouse.delta.x * MOUSE_SENSITIVITY;
    rig.pitch =
        (rig.pitch - mouse.delta.y * MOUSE_SENSITIVITY).clamp(PITCH_LIMITS.0, PITCH_LIMITS.1);

    let focus = target.translation + Vec3::Y * FOCUS_HEIGHT;
    let rotation = Quat::from_euler(EulerRot::YXZ, rig.yaw, rig.pitch, 0.0);
    transform.translation = focus + rotation * Vec3::new(0.0, 0.0, rig.distance);
    transform.look_at(focus, Vec3::Y);
}
