use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance stored at the top of every result file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Name of the case that was run.
    pub case: String,
    /// When the result was produced.
    pub created: DateTime<Utc>,
    /// Version of the tool that produced it.
    pub tool_version: String,
}

impl ResultMetadata {
    /// Metadata for `case` stamped with the current time.
    pub fn new(case: impl Into<String>) -> Self {
        Self {
            case: case.into(),
            created: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
