use drag_parts::{DragCoefficient, Part, PartKind};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use wake_solver::{Assembly, FlowConditions, WakeConfig};

/// Format identifier written into every case file.
pub const CASE_FORMAT: &str = "wake-drag-case";

/// One part as written in a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    pub name: String,
    pub position: [f64; 3],
    pub shape: PartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_coefficient: Option<DragCoefficient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wet_area: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclude_from_moment: bool,
}

impl PartRecord {
    pub fn into_part(self) -> Part {
        Part {
            name: self.name,
            position: Vector3::from(self.position),
            kind: self.shape,
            drag_coefficient: self.drag_coefficient,
            wet_area: self.wet_area,
            exclude_from_moment: self.exclude_from_moment,
        }
    }
}

impl From<&Part> for PartRecord {
    fn from(part: &Part) -> Self {
        Self {
            name: part.name.clone(),
            position: part.position.into(),
            shape: part.kind,
            drag_coefficient: part.drag_coefficient,
            wet_area: part.wet_area,
            exclude_from_moment: part.exclude_from_moment,
        }
    }
}

/// The top-level case file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub format: String,
    pub version: u32,
    pub name: String,
    pub flow: FlowConditions,
    pub parts: Vec<PartRecord>,
    /// Overrides of the default empirical constants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<WakeConfig>,
}

/// A loaded case: the assembly and the configuration it should be run with.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub assembly: Assembly,
    pub config: WakeConfig,
}

impl Case {
    pub fn name(&self) -> &str {
        &self.assembly.name
    }
}
