//! Loader for the RON tuning file at startup.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::locomotion::LocomotionTuning;

use super::validation::validate_tuning;

pub(crate) const TUNING_PATH: &str = "assets/data/tuning.ron";

/// Error type for tuning-file loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Parse a RON tuning file into `LocomotionTuning`.
pub(crate) fn load_tuning_file(path: &Path) -> Result<LocomotionTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron::from_str(&contents).map_err(|e| TuningLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}

/// Startup system: replace the built-in tuning defaults with the shipped
/// file. A missing or malformed file is not fatal; the defaults stand.
pub(crate) fn load_tuning(mut tuning: ResMut<LocomotionTuning>) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            for warning in validate_tuning(&loaded) {
                warn!("{}", warning);
            }
            *tuning = loaded;
            info!("Loaded locomotion tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
        }
    }
}
