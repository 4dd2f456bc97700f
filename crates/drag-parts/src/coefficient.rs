//! Empirical drag coefficients and the per-kind defaults.

use serde::{Deserialize, Serialize};

/// A drag coefficient, optionally varying with Reynolds number.
///
/// Written in case files either as a bare number or as `{ "low": .., "high": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DragCoefficient {
    Constant(f64),
    /// `low + (high - low) * Re / span`, with `Re` held inside the configured
    /// range before evaluation.
    ReynoldsRange { low: f64, high: f64 },
}

impl DragCoefficient {
    /// Coefficient at Reynolds number `re`, given the `(low, high)` Reynolds
    /// range whose width sets the slope of a ranged coefficient.
    pub fn resolve(&self, re: f64, range: (f64, f64)) -> f64 {
        match *self {
            DragCoefficient::Constant(cd) => cd,
            DragCoefficient::ReynoldsRange { low, high } => {
                let span = range.1 - range.0;
                if span <= 0.0 {
                    return low;
                }
                let re = re.clamp(range.0, range.1);
                low + (high - low) * re / span
            }
        }
    }

    /// Reject non-finite or negative values.
    pub fn check(&self) -> Result<(), String> {
        let values = match *self {
            DragCoefficient::Constant(cd) => vec![cd],
            DragCoefficient::ReynoldsRange { low, high } => vec![low, high],
        };
        match values.into_iter().find(|v| !v.is_finite() || *v < 0.0) {
            Some(bad) => Err(format!("{bad} is not a finite non-negative value")),
            None => Ok(()),
        }
    }
}

/// Default drag coefficient for each part kind, used when a part carries none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultDrag {
    pub sphere: DragCoefficient,
    pub cylinder: DragCoefficient,
    pub cuboid: DragCoefficient,
    pub cone_capped_cylinder: DragCoefficient,
    pub disk: DragCoefficient,
}

impl Default for DefaultDrag {
    fn default() -> Self {
        Self {
            sphere: DragCoefficient::ReynoldsRange { low: 0.09, high: 0.18 },
            cylinder: DragCoefficient::ReynoldsRange { low: 0.3, high: 0.7 },
            cuboid: DragCoefficient::Constant(0.9),
            cone_capped_cylinder: DragCoefficient::ReynoldsRange { low: 0.3, high: 0.7 },
            disk: DragCoefficient::Constant(1.17),
        }
    }
}
