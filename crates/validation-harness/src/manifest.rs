//! Validation manifests: which cases to run and what was measured for them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::helpers::HarnessError;

/// One case with its measured drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationCase {
    /// Path to the case file, relative to the manifest.
    pub case: PathBuf,
    /// Measured drag at the case's flow speed (N).
    pub reference_drag: f64,
    /// Overrides the manifest-wide fit coefficient for this case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_coefficient: Option<f64>,
}

/// A named list of validation cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationManifest {
    pub name: String,
    /// Coefficient `k` of a quadratic fit `drag ≈ k·V²` through the measurements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_coefficient: Option<f64>,
    pub cases: Vec<ValidationCase>,
    /// Directory case paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl ValidationManifest {
    /// Parse a manifest from JSON, resolving case paths against `base_dir`.
    pub fn from_json(json: &str, base_dir: impl Into<PathBuf>) -> Result<Self, HarnessError> {
        let mut manifest: ValidationManifest =
            serde_json::from_str(json).map_err(|e| HarnessError::Manifest {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        manifest.base_dir = base_dir.into();
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read a manifest file; case paths resolve against its directory.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let manifest_error = |reason: String| HarnessError::Manifest {
            path: path.display().to_string(),
            reason,
        };
        let json = std::fs::read_to_string(path).map_err(|e| manifest_error(e.to_string()))?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_json(&json, base_dir).map_err(|e| match e {
            HarnessError::Manifest { reason, .. } => manifest_error(reason),
            other => other,
        })
    }

    /// Location of a case file on disk.
    pub fn case_path(&self, case: &ValidationCase) -> PathBuf {
        self.base_dir.join(&case.case)
    }

    /// Fit coefficient in force for `case`, if any.
    pub fn fit_for(&self, case: &ValidationCase) -> Option<f64> {
        case.fit_coefficient.or(self.fit_coefficient)
    }

    /// Check that every reference value is usable.
    pub fn validate(&self) -> Result<(), HarnessError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if let Some(k) = self.fit_coefficient {
            if !positive(k) {
                return Err(HarnessError::InvalidReference {
                    case: self.name.clone(),
                    reason: format!("fit coefficient must be positive, got {k}"),
                });
            }
        }
        for case in &self.cases {
            let label = case.case.display().to_string();
            if !positive(case.reference_drag) {
                return Err(HarnessError::InvalidReference {
                    case: label,
                    reason: format!("reference drag must be positive, got {}", case.reference_drag),
                });
            }
            if let Some(k) = case.fit_coefficient {
                if !positive(k) {
                    return Err(HarnessError::InvalidReference {
                        case: label,
                        reason: format!("fit coefficient must be positive, got {k}"),
                    });
                }
            }
        }
        Ok(())
    }
}
