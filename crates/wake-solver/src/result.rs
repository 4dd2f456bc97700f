use drag_parts::Axis;
use nalgebra::Vector3;
use serde::Serialize;

/// Outcome for one part, in the assembly's insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartResult {
    pub name: String,
    /// Final drag including wake attenuation (N).
    pub drag: f64,
    /// Isolated drag with no upstream shadow (N).
    pub base_drag: f64,
    pub friction_drag: f64,
    pub wake_factor: f64,
    /// Retained fraction of the free-stream velocity at this part.
    pub slowdown: f64,
    /// Area of the largest upstream shadow that fell on this part (m²).
    pub largest_overlap: f64,
    /// Name of the part whose shadow won, if any.
    pub shadowed_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyResult {
    pub name: String,
    pub flow_axis: Axis,
    pub dynamic_pressure: f64,
    pub reynolds_number: f64,
    /// Sum of every part's drag (N).
    pub total_drag: f64,
    /// `total_drag / q` (m²).
    pub drag_area: f64,
    /// Drag-weighted mean position of the parts that carry moment (m).
    pub center_of_pressure: Vector3<f64>,
    pub parts: Vec<PartResult>,
}

impl AssemblyResult {
    pub fn part(&self, name: &str) -> Option<&PartResult> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Number of parts sitting in some upstream shadow.
    pub fn shadowed_count(&self) -> usize {
        self.parts.iter().filter(|p| p.shadowed_by.is_some()).count()
    }
}
