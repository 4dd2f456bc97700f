use shadow_geometry::GeometryError;

/// Errors raised while validating a part or deriving its flow-plane geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PartError {
    #[error("part '{name}' is degenerate: {reason}")]
    Degenerate { name: String, reason: String },

    #[error("axis index {0} is out of range (expected 0, 1 or 2)")]
    InvalidAxis(usize),

    #[error("part '{name}' has an invalid drag coefficient: {reason}")]
    InvalidCoefficient { name: String, reason: String },

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}
