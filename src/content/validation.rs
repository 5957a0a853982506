//! Range validation for loaded tuning values.

use crate::locomotion::LocomotionTuning;

/// A validation finding with context about which value is suspect.
#[derive(Debug)]
pub struct TuningWarning {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for TuningWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tuning field '{}': {}", self.field, self.message)
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($warnings:expr, $tuning:expr, $field:ident) => {
        if $tuning.$field <= 0.0 {
            $warnings.push(TuningWarning {
                field: stringify!($field),
                message: format!("expected a positive value, got {}", $tuning.$field),
            });
        }
    };
}

/// Check loaded tuning values for out-of-range nonsense. Returns one
/// warning per finding, empty if everything is sane; never aborts.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<TuningWarning> {
    let mut warnings = Vec::new();

    check_positive!(warnings, tuning, walk_speed);
    check_positive!(warnings, tuning, sprint_speed);
    check_positive!(warnings, tuning, jump_force);
    check_positive!(warnings, tuning, gravity);
    check_positive!(warnings, tuning, slide_speed);
    check_positive!(warnings, tuning, slide_duration);
    check_positive!(warnings, tuning, wall_run_speed);
    check_positive!(warnings, tuning, wall_run_duration);
    check_positive!(warnings, tuning, wall_jump_force);
    check_positive!(warnings, tuning, wall_check_distance);
    check_positive!(warnings, tuning, wall_run_gravity);
    check_positive!(warnings, tuning, ground_check_distance);

    if tuning.grace_time < 0.0 {
        warnings.push(TuningWarning {
            field: "grace_time",
            message: format!("expected a non-negative value, got {}", tuning.grace_time),
        });
    }
    if tuning.jump_buffer_time < 0.0 {
        warnings.push(TuningWarning {
            field: "jump_buffer_time",
            message: format!(
                "expected a non-negative value, got {}",
                tuning.jump_buffer_time
            ),
        });
    }
    if tuning.wall_run_gravity >= tuning.gravity {
        warnings.push(TuningWarning {
            field: "wall_run_gravity",
            message: format!(
                "expected less than gravity ({}), got {}",
                tuning.gravity, tuning.wall_run_gravity
            ),
        });
    }
    if !(0.0..=1.0).contains(&tuning.slide_control_strength) {
        warnings.push(TuningWarning {
            field: "slide_control_strength",
            message: format!(
                "expected a value in 0.0..=1.0, got {}",
                tuning.slide_control_strength
            ),
        });
    }

    warnings
}
