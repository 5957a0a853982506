//! Locomotion domain: messages for mode observers.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

use crate::locomotion::ModeKind;

/// Emitted whenever a character's locomotion mode changes, for
/// animation/UI/telemetry consumers.
#[derive(Debug)]
pub struct ModeChanged {
    pub entity: Entity,
    pub from: ModeKind,
    pub to: ModeKind,
}

impl Message for ModeChanged {}
