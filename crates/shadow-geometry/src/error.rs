/// Errors raised while building silhouettes or intersecting them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("degenerate {what}: {reason}")]
    Degenerate { what: &'static str, reason: String },

    #[error("unsupported shape intersection: {first} with {second}")]
    UnsupportedIntersection {
        first: &'static str,
        second: &'static str,
    },
}
