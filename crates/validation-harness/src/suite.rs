//! Running a manifest's cases end to end.

use case_format::load_case_file;
use tracing::{info, instrument, warn};

use crate::comparison::DragComparison;
use crate::helpers::HarnessError;
use crate::manifest::{ValidationCase, ValidationManifest};
use crate::oracle::run_all_checks;
use crate::report::{CaseEntry, ValidationReport};

/// Load, run, compare and check a single case.
pub fn run_case(manifest: &ValidationManifest, case: &ValidationCase) -> Result<CaseEntry, HarnessError> {
    let path = manifest.case_path(case);
    let label = case.case.display().to_string();
    let loaded = load_case_file(&path).map_err(|source| HarnessError::Load {
        case: label.clone(),
        source,
    })?;
    let result = loaded
        .assembly
        .run(&loaded.config)
        .map_err(|source| HarnessError::Run { case: label, source })?;

    let comparison = DragComparison::new(
        &result,
        loaded.assembly.flow.velocity,
        case.reference_drag,
        manifest.fit_for(case),
    );
    let oracle_results = run_all_checks(&loaded.assembly, &loaded.config, &result);
    Ok(CaseEntry {
        comparison,
        oracle_results,
    })
}

/// Run every case of a manifest.
///
/// A case that fails to load or run is recorded in the report's error list
/// and the remaining cases still run.
#[instrument(skip_all, fields(suite = %manifest.name, cases = manifest.cases.len()))]
pub fn run_validation(manifest: &ValidationManifest) -> ValidationReport {
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    for case in &manifest.cases {
        match run_case(manifest, case) {
            Ok(entry) => {
                info!(
                    case = %entry.comparison.case,
                    drag = entry.comparison.drag.predicted,
                    error_percent = entry.comparison.drag.percent,
                    "validation case run"
                );
                entries.push(entry);
            }
            Err(e) => {
                warn!(case = %case.case.display(), error = %e, "validation case failed");
                errors.push((case.case.display().to_string(), e.to_string()));
            }
        }
    }

    ValidationReport {
        name: manifest.name.clone(),
        entries,
        errors,
    }
}
