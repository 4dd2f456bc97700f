use drag_parts::PartError;
use shadow_geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WakeError {
    #[error("cannot intersect the shadow of '{upstream}' with '{downstream}': {source}")]
    UnsupportedIntersection {
        upstream: String,
        downstream: String,
        #[source]
        source: GeometryError,
    },

    #[error("assembly has no parts")]
    EmptyAssembly,

    #[error("invalid flow conditions: {reason}")]
    InvalidFlow { reason: String },

    #[error("invalid wake configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Part(#[from] PartError),
}
