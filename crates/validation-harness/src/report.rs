//! Plain-text validation reports.

use std::fmt;

use crate::comparison::{DragComparison, ErrorPair};
use crate::oracle::OracleVerdict;

/// A complete validation report.
pub struct ValidationReport {
    pub name: String,
    pub entries: Vec<CaseEntry>,
    /// `(case, message)` for every case that failed to load or run.
    pub errors: Vec<(String, String)>,
}

/// The outcome of one case.
pub struct CaseEntry {
    pub comparison: DragComparison,
    pub oracle_results: Vec<OracleVerdict>,
}

impl CaseEntry {
    pub fn failed_oracles(&self) -> impl Iterator<Item = &OracleVerdict> {
        self.oracle_results.iter().filter(|v| !v.passed)
    }
}

impl ValidationReport {
    /// True when every case ran and every oracle passed.
    pub fn passed(&self) -> bool {
        self.errors.is_empty() && self.entries.iter().all(|e| e.failed_oracles().next().is_none())
    }

    /// Mean of the absolute drag errors in percent, over the cases that ran.
    pub fn mean_abs_drag_error_percent(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let sum: f64 = self.entries.iter().map(|e| e.comparison.drag.percent.abs()).sum();
        Some(sum / self.entries.len() as f64)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== Wake Drag Validation: {} ===\n\n", self.name));

        out.push_str(&format!(
            "Cases ({} run, {} errors):\n",
            self.entries.len(),
            self.errors.len(),
        ));
        for entry in &self.entries {
            let c = &entry.comparison;
            out.push_str(&format!("  \"{}\" at {:.2} m/s\n", c.case, c.velocity));
            out.push_str(&format!(
                "      Drag: {:.3} N (measured {:.3} N)\n",
                c.drag.predicted, c.drag.reference,
            ));
            out.push_str(&format!("      Drag error: {}\n", error_line(&c.drag, "N")));
            out.push_str(&format!("      Drag-area error: {}\n", error_line(&c.drag_area, "m²")));
            if let Some(fit) = &c.fit {
                out.push_str(&format!("      Fit-curve error: {}\n", error_line(fit, "N")));
            }

            let failed: Vec<&OracleVerdict> = entry.failed_oracles().collect();
            out.push_str(&format!(
                "      Oracles: {}/{} passed\n",
                entry.oracle_results.len() - failed.len(),
                entry.oracle_results.len(),
            ));
            for v in failed {
                out.push_str(&format!("        [FAIL] {}: {}\n", v.oracle_name, v.detail));
            }
        }

        if let Some(mean) = self.mean_abs_drag_error_percent() {
            out.push_str(&format!("\nMean absolute drag error: {:.1} %\n", mean));
        }

        if self.errors.is_empty() {
            out.push_str("\nErrors: none\n");
        } else {
            out.push_str(&format!("\nErrors ({}):\n", self.errors.len()));
            for (case, msg) in &self.errors {
                out.push_str(&format!("  {}: {}\n", case, msg));
            }
        }

        out
    }
}

fn error_line(error: &ErrorPair, unit: &str) -> String {
    format!("{:+.3} {} ({:+.1} %)", error.absolute, unit, error.percent)
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
