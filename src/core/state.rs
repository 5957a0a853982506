//! Core domain: app flow states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Run,
    /// Fatal rig misconfiguration; nothing ticks here
    Fault,
}
