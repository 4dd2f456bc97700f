//! Sequential wake-interference accumulation over an assembly of parts.
//!
//! A run has two phases. First every part is reduced to an immutable
//! [`PartGeometry`]; then a [`WakeState`] per part is updated while walking
//! the parts from most upstream to most downstream. Only the wake states are
//! mutated, and they are indexed by the part's position in the assembly.

use drag_parts::{compose_drag, friction_drag, DragEnvironment, FlowFrame, Part, PartGeometry, PartSettings};
use nalgebra::Vector3;
use serde::Serialize;
use shadow_geometry::overlap;
use tracing::{debug, info, instrument, warn};

use crate::config::{RetentionCurve, WakeConfig};
use crate::error::WakeError;
use crate::flow::FlowConditions;
use crate::result::{AssemblyResult, PartResult};

/// A named set of parts in a uniform flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assembly {
    pub name: String,
    pub flow: FlowConditions,
    /// Insertion order; it only matters for breaking ordering ties.
    pub parts: Vec<Part>,
}

/// Mutable per-part state threaded through one accumulation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WakeState {
    pub slowdown: f64,
    pub wake_factor: f64,
    pub largest_overlap: f64,
    /// Index of the part whose shadow set the current state.
    pub shadowed_by: Option<usize>,
}

impl Default for WakeState {
    fn default() -> Self {
        Self {
            slowdown: 1.0,
            wake_factor: 1.0,
            largest_overlap: 0.0,
            shadowed_by: None,
        }
    }
}

impl Assembly {
    pub fn new(name: impl Into<String>, flow: FlowConditions) -> Self {
        Self {
            name: name.into(),
            flow,
            parts: Vec::new(),
        }
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn frame(&self) -> FlowFrame {
        FlowFrame::new(self.flow.flow_axis)
    }

    /// Distance from the most upstream to the most downstream point of any part.
    pub fn flow_length(&self, settings: &PartSettings) -> f64 {
        let frame = self.frame();
        let (lo, hi) = self.parts.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            let (up, down) = p.flow_extent(&frame, settings);
            let at = frame.along_flow(&p.position);
            (lo.min(at - up), hi.max(at + down))
        });
        if hi >= lo {
            hi - lo
        } else {
            0.0
        }
    }

    /// Compute every part's drag and the assembly totals.
    ///
    /// The assembly itself is not modified, so repeated runs give identical
    /// results.
    #[instrument(skip_all, fields(assembly = %self.name, parts = self.parts.len()))]
    pub fn run(&self, config: &WakeConfig) -> Result<AssemblyResult, WakeError> {
        if self.parts.is_empty() {
            return Err(WakeError::EmptyAssembly);
        }
        self.flow.validate()?;
        config.validate()?;
        for part in &self.parts {
            part.validate()?;
        }

        let frame = self.frame();
        let q = self.flow.dynamic_pressure();
        let reynolds_number = self
            .flow
            .reynolds(self.flow_length(&config.parts), config.dynamic_viscosity);
        let env = DragEnvironment {
            dynamic_pressure: q,
            reynolds_number,
        };

        let geometry = self
            .parts
            .iter()
            .map(|p| p.geometry(&frame, &config.parts, &env))
            .collect::<Result<Vec<_>, _>>()?;
        let order = shadow_order(&geometry);
        let states = propagate_wake(&self.parts, &geometry, &order, &config.retention_curve)?;

        let parts: Vec<PartResult> = self
            .parts
            .iter()
            .zip(&geometry)
            .zip(&states)
            .map(|((part, g), s)| {
                let friction = friction_drag(config.skin_friction_coefficient, g.wet_area, q, g.base_drag);
                PartResult {
                    name: part.name.clone(),
                    drag: compose_drag(g.base_drag, friction, s.wake_factor),
                    base_drag: g.base_drag,
                    friction_drag: friction,
                    wake_factor: s.wake_factor,
                    slowdown: s.slowdown,
                    largest_overlap: s.largest_overlap,
                    shadowed_by: s.shadowed_by.map(|i| self.parts[i].name.clone()),
                }
            })
            .collect();

        let total_drag: f64 = parts.iter().map(|p| p.drag).sum();
        let center_of_pressure = center_of_pressure(&self.parts, &parts, total_drag);
        let result = AssemblyResult {
            name: self.name.clone(),
            flow_axis: self.flow.flow_axis,
            dynamic_pressure: q,
            reynolds_number,
            total_drag,
            drag_area: total_drag / q,
            center_of_pressure,
            parts,
        };

        info!(
            total_drag = result.total_drag,
            drag_area = result.drag_area,
            shadowed = result.shadowed_count(),
            "assembly run complete"
        );
        Ok(result)
    }
}

/// Part indices sorted from most upstream to most downstream.
///
/// Keys are gathered into a plain array before sorting. The sort is stable,
/// so parts sharing an upstream coordinate keep their insertion order.
pub fn shadow_order(geometry: &[PartGeometry]) -> Vec<usize> {
    let keys: Vec<f64> = geometry.iter().map(|g| g.smallest_coordinate).collect();
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    order
}

/// Walk every upstream/downstream pair in `order` and let the largest shadow
/// on each part set its slowdown and wake factor.
///
/// An upstream part's own slowdown is final by the time it casts a shadow,
/// which carries the velocity deficit across chains of parts.
pub fn propagate_wake(
    parts: &[Part],
    geometry: &[PartGeometry],
    order: &[usize],
    curve: &RetentionCurve,
) -> Result<Vec<WakeState>, WakeError> {
    let mut states = vec![WakeState::default(); parts.len()];
    let (curve_start, _) = curve.domain();

    for (rank, &up) in order.iter().enumerate() {
        for &down in &order[rank + 1..] {
            let area = overlap(&geometry[up].silhouette, &geometry[down].silhouette).map_err(|source| {
                WakeError::UnsupportedIntersection {
                    upstream: parts[up].name.clone(),
                    downstream: parts[down].name.clone(),
                    source,
                }
            })?;
            // strictly greater: on ties the earlier upstream part keeps the shadow
            if area <= states[down].largest_overlap {
                continue;
            }

            let distance = geometry[down].flow_coordinate - geometry[up].flow_coordinate;
            let normalized = distance / geometry[up].characteristic_length;
            if normalized < curve_start {
                warn!(
                    upstream = %parts[up].name,
                    downstream = %parts[down].name,
                    normalized,
                    "downstream centre lies upstream of its shadow caster, clamping retention"
                );
            }
            let slowdown = states[up].slowdown * curve.lookup(normalized);
            let frontal = geometry[down].silhouette.area();
            let covered = area.min(frontal);
            let wake_factor = (slowdown * slowdown * covered + (frontal - covered)) / frontal;

            debug!(
                upstream = %parts[up].name,
                downstream = %parts[down].name,
                overlap = area,
                normalized,
                slowdown,
                wake_factor,
                "shadow assigned"
            );
            states[down] = WakeState {
                slowdown,
                wake_factor,
                largest_overlap: area,
                shadowed_by: Some(up),
            };
        }
    }
    Ok(states)
}

/// Drag-weighted position of every part that carries moment, divided by the
/// total drag of the assembly.
fn center_of_pressure(parts: &[Part], results: &[PartResult], total_drag: f64) -> Vector3<f64> {
    if total_drag <= 0.0 {
        return Vector3::zeros();
    }
    let moment = parts
        .iter()
        .zip(results)
        .filter(|(p, _)| !p.exclude_from_moment)
        .fold(Vector3::zeros(), |acc, (p, r)| acc + p.position * r.drag);
    moment / total_drag
}
