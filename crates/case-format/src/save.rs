use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};
use wake_solver::AssemblyResult;

use crate::case::{Case, CaseFile, PartRecord, CASE_FORMAT};
use crate::errors::SaveError;
use crate::metadata::ResultMetadata;

/// Current file format version, shared by case and result files.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier written into every result file.
pub const RESULT_FORMAT: &str = "wake-drag-result";

/// The top-level result file structure.
#[derive(Debug, Clone, Serialize)]
pub struct ResultFile<'a> {
    pub format: &'static str,
    pub version: u32,
    pub metadata: ResultMetadata,
    #[serde(flatten)]
    pub result: &'a AssemblyResult,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, SaveError> {
    serde_json::to_string_pretty(value).map_err(|e| SaveError::Serialize(e.to_string()))
}

/// Serialize a case to a pretty-printed JSON string.
pub fn save_case(case: &Case) -> Result<String, SaveError> {
    let file = CaseFile {
        format: CASE_FORMAT.to_string(),
        version: FORMAT_VERSION,
        name: case.assembly.name.clone(),
        flow: case.assembly.flow,
        parts: case.assembly.parts.iter().map(PartRecord::from).collect(),
        config: Some(case.config.clone()),
    };
    to_json(&file)
}

/// Serialize a run result to a pretty-printed JSON string.
pub fn save_result(result: &AssemblyResult, metadata: &ResultMetadata) -> Result<String, SaveError> {
    let file = ResultFile {
        format: RESULT_FORMAT,
        version: FORMAT_VERSION,
        metadata: metadata.clone(),
        result,
    };
    to_json(&file)
}

/// Write a run result to `path`, stamped with fresh metadata.
#[instrument(skip(result), fields(case = %result.name))]
pub fn write_result_file(path: &Path, result: &AssemblyResult) -> Result<(), SaveError> {
    let json = save_result(result, &ResultMetadata::new(&result.name))?;
    std::fs::write(path, json).map_err(|e| SaveError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!(path = %path.display(), "result written");
    Ok(())
}
