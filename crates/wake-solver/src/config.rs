//! Empirical constants for the wake accumulator.

use drag_parts::PartSettings;
use serde::{Deserialize, Serialize};

use crate::error::WakeError;

// ─── Retention Curve ────────────────────────────────────────────────────────

/// Piecewise-linear velocity recovery behind a body: retained fraction of the
/// free-stream velocity as a function of downstream distance in body lengths.
///
/// Serialized as a list of `[normalized_distance, retained_fraction]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct RetentionCurve {
    points: Vec<(f64, f64)>,
}

impl RetentionCurve {
    /// Build a curve from control points sorted by strictly increasing distance.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, WakeError> {
        let invalid = |reason: String| WakeError::InvalidConfig { reason };
        if points.len() < 2 {
            return Err(invalid(format!(
                "retention curve needs at least 2 control points, got {}",
                points.len()
            )));
        }
        for &(d, f) in &points {
            if !d.is_finite() || !f.is_finite() {
                return Err(invalid(format!("retention point ({d}, {f}) is not finite")));
            }
            if !(0.0..=1.0).contains(&f) {
                return Err(invalid(format!("retained fraction {f} is outside [0, 1]")));
            }
        }
        if let Some(w) = points.windows(2).find(|w| w[1].0 <= w[0].0) {
            return Err(invalid(format!(
                "retention distances must strictly increase ({} then {})",
                w[0].0, w[1].0
            )));
        }
        Ok(Self { points })
    }

    pub fn control_points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Distance covered by the table; lookups outside it are clamped.
    pub fn domain(&self) -> (f64, f64) {
        // `new` guarantees at least two points
        (self.points[0].0, self.points[self.points.len() - 1].0)
    }

    /// Retained fraction at `normalized_distance`, clamped to the end values
    /// outside the table.
    pub fn lookup(&self, normalized_distance: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if normalized_distance <= first.0 {
            return first.1;
        }
        if normalized_distance >= last.0 {
            return last.1;
        }
        let upper = self
            .points
            .iter()
            .position(|&(d, _)| d >= normalized_distance)
            .unwrap_or(self.points.len() - 1);
        let (d0, f0) = self.points[upper - 1];
        let (d1, f1) = self.points[upper];
        f0 + (f1 - f0) * (normalized_distance - d0) / (d1 - d0)
    }

    /// `samples` evenly spaced `(distance, fraction)` pairs across the table.
    pub fn sample(&self, samples: usize) -> Vec<(f64, f64)> {
        let (start, end) = self.domain();
        match samples {
            0 => Vec::new(),
            1 => vec![(start, self.lookup(start))],
            n => (0..n)
                .map(|i| {
                    let d = start + (end - start) * i as f64 / (n - 1) as f64;
                    (d, self.lookup(d))
                })
                .collect(),
        }
    }
}

impl Default for RetentionCurve {
    fn default() -> Self {
        Self {
            points: vec![(0.0, 0.0), (2.0, 0.80), (3.0, 0.85), (10.0, 0.93), (100.0, 1.0)],
        }
    }
}

impl TryFrom<Vec<(f64, f64)>> for RetentionCurve {
    type Error = WakeError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<RetentionCurve> for Vec<(f64, f64)> {
    fn from(curve: RetentionCurve) -> Self {
        curve.points
    }
}

// ─── Wake Configuration ─────────────────────────────────────────────────────

/// All empirical constants used by one accumulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WakeConfig {
    pub retention_curve: RetentionCurve,
    /// Skin-friction coefficient `Cf` applied to wetted area.
    pub skin_friction_coefficient: f64,
    /// Used to derive a Reynolds number when the flow does not give one (Pa·s).
    pub dynamic_viscosity: f64,
    #[serde(flatten)]
    pub parts: PartSettings,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            retention_curve: RetentionCurve::default(),
            skin_friction_coefficient: 0.003,
            dynamic_viscosity: 1.81e-5,
            parts: PartSettings::default(),
        }
    }
}

impl WakeConfig {
    /// Pure pressure drag: every part keeps its full base drag in the wake share.
    pub fn frictionless() -> Self {
        Self {
            skin_friction_coefficient: 0.0,
            ..Self::default()
        }
    }

    pub fn with_retention_curve(mut self, curve: RetentionCurve) -> Self {
        self.retention_curve = curve;
        self
    }

    pub fn validate(&self) -> Result<(), WakeError> {
        let invalid = |reason: String| Err(WakeError::InvalidConfig { reason });
        let c = &self.parts;

        if !self.skin_friction_coefficient.is_finite() || self.skin_friction_coefficient < 0.0 {
            return invalid(format!(
                "skin friction coefficient must be non-negative, got {}",
                self.skin_friction_coefficient
            ));
        }
        if !self.dynamic_viscosity.is_finite() || self.dynamic_viscosity <= 0.0 {
            return invalid(format!(
                "dynamic viscosity must be positive, got {}",
                self.dynamic_viscosity
            ));
        }
        if !c.end_cap_drag_coefficient.is_finite() || c.end_cap_drag_coefficient < 0.0 {
            return invalid(format!(
                "end cap drag coefficient must be non-negative, got {}",
                c.end_cap_drag_coefficient
            ));
        }
        if !c.disk_thickness.is_finite() || c.disk_thickness <= 0.0 {
            return invalid(format!("disk thickness must be positive, got {}", c.disk_thickness));
        }
        let (lo, hi) = c.reynolds_range;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return invalid(format!("reynolds range ({lo}, {hi}) must be increasing"));
        }
        let defaults = &c.default_drag;
        for (kind, cd) in [
            ("sphere", defaults.sphere),
            ("cylinder", defaults.cylinder),
            ("cuboid", defaults.cuboid),
            ("cone_capped_cylinder", defaults.cone_capped_cylinder),
            ("disk", defaults.disk),
        ] {
            if let Err(reason) = cd.check() {
                return invalid(format!("default {kind} drag coefficient: {reason}"));
            }
        }
        Ok(())
    }
}
