use drag_parts::Axis;
use serde::{Deserialize, Serialize};

use crate::error::WakeError;

/// Uniform free-stream flow the assembly is exposed to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowConditions {
    /// Air density (kg/m³).
    pub density: f64,
    /// Free-stream speed (m/s).
    pub velocity: f64,
    pub flow_axis: Axis,
    /// When absent it is derived from the assembly length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reynolds_number: Option<f64>,
}

impl FlowConditions {
    pub fn new(density: f64, velocity: f64, flow_axis: Axis) -> Self {
        Self {
            density,
            velocity,
            flow_axis,
            reynolds_number: None,
        }
    }

    pub fn with_reynolds_number(mut self, reynolds_number: f64) -> Self {
        self.reynolds_number = Some(reynolds_number);
        self
    }

    /// Sea-level air (1.225 kg/m³) at the given speed.
    pub fn sea_level(velocity: f64, flow_axis: Axis) -> Self {
        Self::new(1.225, velocity, flow_axis)
    }

    pub fn validate(&self) -> Result<(), WakeError> {
        let invalid = |reason: String| Err(WakeError::InvalidFlow { reason });
        if !self.density.is_finite() || self.density <= 0.0 {
            return invalid(format!("density must be positive, got {}", self.density));
        }
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return invalid(format!("velocity must be positive, got {}", self.velocity));
        }
        if let Some(re) = self.reynolds_number {
            if !re.is_finite() || re < 0.0 {
                return invalid(format!("reynolds number must be non-negative, got {re}"));
            }
        }
        Ok(())
    }

    /// q = ½ρV² (Pa).
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.velocity * self.velocity
    }

    /// The supplied Reynolds number, or ρVL/μ for reference length `length`.
    pub fn reynolds(&self, length: f64, dynamic_viscosity: f64) -> f64 {
        self.reynolds_number
            .unwrap_or(self.density * self.velocity * length / dynamic_viscosity)
    }
}
