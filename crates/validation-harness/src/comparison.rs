//! Predicted drag measured against a reference value.

use serde::Serialize;
use wake_solver::AssemblyResult;

use crate::helpers::{drag_area, fit_drag, percent_error};

/// Error of a prediction against one reference quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorPair {
    pub predicted: f64,
    pub reference: f64,
    /// `predicted - reference`, in the quantity's unit.
    pub absolute: f64,
    pub percent: f64,
}

impl ErrorPair {
    pub fn new(predicted: f64, reference: f64) -> Self {
        Self {
            predicted,
            reference,
            absolute: predicted - reference,
            percent: percent_error(predicted, reference),
        }
    }
}

/// How one run compares with its measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragComparison {
    pub case: String,
    pub velocity: f64,
    /// Drag (N) against the measured drag.
    pub drag: ErrorPair,
    /// Drag area (m²) against the measured drag over the same dynamic pressure.
    pub drag_area: ErrorPair,
    /// Drag (N) against the quadratic fit, when one is given.
    pub fit: Option<ErrorPair>,
}

impl DragComparison {
    pub fn new(
        result: &AssemblyResult,
        velocity: f64,
        reference_drag: f64,
        fit_coefficient: Option<f64>,
    ) -> Self {
        let q = result.dynamic_pressure;
        Self {
            case: result.name.clone(),
            velocity,
            drag: ErrorPair::new(result.total_drag, reference_drag),
            drag_area: ErrorPair::new(result.drag_area, drag_area(reference_drag, q)),
            fit: fit_coefficient.map(|k| ErrorPair::new(result.total_drag, fit_drag(k, velocity))),
        }
    }
}
