//! Validation of drag predictions against measured reference values.
//!
//! A manifest lists case files with the drag measured for each one. Every
//! case is run, compared with its reference and checked by a set of
//! oracles, and the outcome is gathered into a plain-text report.
//!
//! # Key Components
//!
//! - [`ValidationManifest`]: the list of cases and their reference drags
//! - [`comparison`]: predicted vs measured drag, drag area and fit curve
//! - [`oracle`]: invariant checks returning pass/fail verdicts
//! - [`report`]: the text report
//! - [`run_validation`]: runs a whole manifest

pub mod comparison;
pub mod helpers;
pub mod manifest;
pub mod oracle;
pub mod report;
pub mod suite;

pub use comparison::DragComparison;
pub use helpers::HarnessError;
pub use manifest::{ValidationCase, ValidationManifest};
pub use oracle::OracleVerdict;
pub use report::{CaseEntry, ValidationReport};
pub use suite::{run_case, run_validation};
