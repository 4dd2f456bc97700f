use drag_parts::PartError;

/// Errors during case file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("invalid part: {0}")]
    InvalidPart(#[from] PartError),

    #[error("duplicate part name '{0}'")]
    DuplicatePart(String),

    #[error("invalid flow conditions: {0}")]
    InvalidFlow(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors during case or result file writing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error("failed to write {path}: {reason}")]
    Io { path: String, reason: String },
}
