//! Locomotion domain: keyboard sampling into the per-tick input snapshot.

use bevy::prelude::*;

use crate::locomotion::LocomotionInput;

pub(crate) fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<LocomotionInput>) {
    let mut axis = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        axis.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        axis.y += 1.0;
    }

    input.move_axis = clamp_axis(axis);
    input.sprint_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);
    input.slide_pressed = keyboard.just_pressed(KeyCode::ControlLeft);
}

/// Clamp the move vector to unit magnitude so diagonals don't outrun
/// cardinal directions.
pub(crate) fn clamp_axis(axis: Vec2) -> Vec2 {
    if axis.length_squared() > 1.0 {
        axis.normalize()
    } else {
        axis
    }
}
