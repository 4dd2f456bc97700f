//! Helper functions: error type and error arithmetic.

use case_format::LoadError;
use wake_solver::WakeError;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the validation harness.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read manifest {path}: {reason}")]
    Manifest { path: String, reason: String },

    #[error("invalid reference for case {case}: {reason}")]
    InvalidReference { case: String, reason: String },

    #[error("case {case} failed to load: {source}")]
    Load {
        case: String,
        #[source]
        source: LoadError,
    },

    #[error("case {case} failed to run: {source}")]
    Run {
        case: String,
        #[source]
        source: WakeError,
    },
}

// ── Error Arithmetic ────────────────────────────────────────────────────────

/// Signed error of `predicted` relative to `reference`, as a percentage.
pub fn percent_error(predicted: f64, reference: f64) -> f64 {
    (predicted - reference) / reference * 100.0
}

/// Drag area implied by a drag force at dynamic pressure `q`.
pub fn drag_area(drag: f64, dynamic_pressure: f64) -> f64 {
    drag / dynamic_pressure
}

/// Drag read from a quadratic fit `k·V²`.
pub fn fit_drag(fit_coefficient: f64, velocity: f64) -> f64 {
    fit_coefficient * velocity * velocity
}
