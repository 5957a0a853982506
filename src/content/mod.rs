//! Content domain: tuning file loading and validation.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::TuningLoadError;
pub use validation::{TuningWarning, validate_tuning};

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, loader::load_tuning);
    }
}
