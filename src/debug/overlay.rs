//! Debug domain: overlay panel showing controller internals.

use bevy::prelude::*;

use crate::debug::DebugState;
use crate::locomotion::{Locomotion, LocomotionInput, Player, SurfaceContacts};

/// Marker for the overlay root node
#[derive(Component, Debug)]
pub struct OverlayRoot;

/// Marker for the overlay text block
#[derive(Component, Debug)]
pub struct OverlayText;

pub(crate) fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            OverlayRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                top: Val::Px(12.0),
                padding: UiRect::all(Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.85)),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                OverlayText,
                Text::new("F1 to toggle"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

pub(crate) fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut root: Query<&mut Visibility, With<OverlayRoot>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.visible = !state.visible;
    }
    let Ok(mut visibility) = root.single_mut() else {
        return;
    };
    *visibility = if state.visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}

pub(crate) fn update_overlay(
    state: Res<DebugState>,
    input: Res<LocomotionInput>,
    player: Query<(&Locomotion, &SurfaceContacts), With<Player>>,
    mut text: Query<&mut Text, With<OverlayText>>,
) {
    if !state.visible {
        return;
    }
    let Ok((locomotion, contacts)) = player.single() else {
        return;
    };
    let Ok(mut text) = text.single_mut() else {
        return;
    };

    text.0 = format!(
        "Mode: {}\n\
         Grounded: {}  WallL: {}  WallR: {}\n\
         Velocity: ({:.2}, {:.2}, {:.2})\n\
         Input: ({:.2}, {:.2})  sprint: {}\n\
         Grace: {:.2}  Buffer: {:.2}  Slide: {:.2}  WallRun: {:.2}",
        locomotion.mode.kind(),
        contacts.grounded,
        contacts.wall_left.is_some(),
        contacts.wall_right.is_some(),
        locomotion.velocity.x,
        locomotion.velocity.y,
        locomotion.velocity.z,
        input.move_axis.x,
        input.move_axis.y,
        input.sprint_held,
        locomotion.grace_timer,
        locomotion.jump_buffer,
        locomotion.slide_timer,
        locomotion.wall_run_timer,
    );
}
