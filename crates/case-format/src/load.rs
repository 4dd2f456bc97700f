use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, instrument};
use wake_solver::{Assembly, WakeError};

use crate::case::{Case, CaseFile, CASE_FORMAT};
use crate::errors::LoadError;
use crate::save::FORMAT_VERSION;

/// Deserialize a case from a JSON string.
///
/// Validates the format identifier and version, every part, the flow
/// conditions and any embedded configuration.
pub fn load_case(json: &str) -> Result<Case, LoadError> {
    let raw: CaseFile = serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != CASE_FORMAT {
        return Err(LoadError::UnknownFormat(raw.format));
    }
    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    raw.flow.validate().map_err(|e| match e {
        WakeError::InvalidFlow { reason } => LoadError::InvalidFlow(reason),
        other => LoadError::InvalidFlow(other.to_string()),
    })?;

    let config = raw.config.unwrap_or_default();
    config.validate().map_err(|e| match e {
        WakeError::InvalidConfig { reason } => LoadError::InvalidConfig(reason),
        other => LoadError::InvalidConfig(other.to_string()),
    })?;

    let mut seen = HashSet::new();
    let mut assembly = Assembly::new(raw.name, raw.flow);
    for record in raw.parts {
        if !seen.insert(record.name.clone()) {
            return Err(LoadError::DuplicatePart(record.name));
        }
        let part = record.into_part();
        part.validate()?;
        assembly.push(part);
    }

    debug!(case = %assembly.name, parts = assembly.parts.len(), "case loaded");
    Ok(Case { assembly, config })
}

/// Read and deserialize a case file from disk.
#[instrument]
pub fn load_case_file(path: &Path) -> Result<Case, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_case(&json)
}
