//! Debug domain: runtime locomotion inspection overlay.

mod overlay;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::locomotion::ModeChanged;

/// Resource tracking overlay visibility
#[derive(Resource, Debug)]
pub struct DebugState {
    pub visible: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, overlay::spawn_overlay)
            .add_systems(
                Update,
                (overlay::toggle_overlay, overlay::update_overlay, log_mode_changes),
            );
    }
}

fn log_mode_changes(mut changes: MessageReader<ModeChanged>) {
    for change in changes.read() {
        info!("{:?}: {} -> {}", change.entity, change.from, change.to);
    }
}
