use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use shadow_geometry::Point2d;

use crate::error::PartError;

/// One of the three body axes. Serialized as its index (0, 1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Component of `v` along this axis.
    pub fn component(self, v: &Vector3<f64>) -> f64 {
        v[self.index()]
    }

    /// The axis that is neither `a` nor `b`, if they differ.
    pub fn third(a: Axis, b: Axis) -> Option<Axis> {
        if a == b {
            return None;
        }
        Axis::ALL.into_iter().find(|&c| c != a && c != b)
    }
}

impl TryFrom<usize> for Axis {
    type Error = PartError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            other => Err(PartError::InvalidAxis(other)),
        }
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> usize {
        axis.index()
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// The flow axis together with the two axes spanning the projection plane.
///
/// Plane axes are kept in ascending order, so the first maps to the 2D x
/// coordinate and the second to y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowFrame {
    pub flow: Axis,
    pub plane: [Axis; 2],
}

impl FlowFrame {
    pub fn new(flow: Axis) -> Self {
        let plane = match flow {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        };
        Self { flow, plane }
    }

    /// Project a 3D position onto the plane perpendicular to the flow.
    pub fn project(&self, position: &Vector3<f64>) -> Point2d {
        Point2d::new(
            self.plane[0].component(position),
            self.plane[1].component(position),
        )
    }

    /// Coordinate of `position` along the flow axis.
    pub fn along_flow(&self, position: &Vector3<f64>) -> f64 {
        self.flow.component(position)
    }
}
