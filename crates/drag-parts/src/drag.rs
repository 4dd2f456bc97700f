//! Isolated drag inputs and the final wake-attenuated drag composition.

use serde::{Deserialize, Serialize};

use crate::coefficient::DefaultDrag;

/// Empirical constants the part model needs to derive geometry and base drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartSettings {
    /// Coefficient for a cylinder or cone-capped cylinder seen end-on.
    pub end_cap_drag_coefficient: f64,
    /// Flow-wise extent of a disk seen face-on (meters).
    pub disk_thickness: f64,
    /// Reynolds span across which ranged drag coefficients are interpolated.
    pub reynolds_range: (f64, f64),
    pub default_drag: DefaultDrag,
}

impl Default for PartSettings {
    fn default() -> Self {
        Self {
            end_cap_drag_coefficient: 0.9,
            disk_thickness: 0.005,
            reynolds_range: (0.7e6, 4.2e6),
            default_drag: DefaultDrag::default(),
        }
    }
}

/// Free-stream state seen by every part during one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnvironment {
    /// ½ρV² (Pa).
    pub dynamic_pressure: f64,
    pub reynolds_number: f64,
}

/// Skin-friction drag, capped so it never exceeds the part's base drag.
pub fn friction_drag(skin_friction_coefficient: f64, wet_area: f64, dynamic_pressure: f64, base_drag: f64) -> f64 {
    (skin_friction_coefficient * wet_area * dynamic_pressure).min(base_drag)
}

/// Final drag of a part: friction is unaffected by the wake, while the pressure
/// share `base - friction` scales with `wake_factor`.
///
/// An unshadowed part (`wake_factor == 1`) reports exactly its base drag.
pub fn compose_drag(base_drag: f64, friction_drag: f64, wake_factor: f64) -> f64 {
    base_drag - (1.0 - wake_factor) * (base_drag - friction_drag)
}
