//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail instead of
//! panicking, so every failure of a suite can be collected in one pass.

use wake_solver::{Assembly, AssemblyResult, WakeConfig};

/// Relative slack allowed when comparing accumulated floating-point sums.
const SUM_TOLERANCE: f64 = 1e-9;

/// The result of a single oracle check.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

fn within(a: f64, b: f64) -> bool {
    (a - b).abs() <= SUM_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

// ── Accumulation Oracles ────────────────────────────────────────────────────

/// Check that the total drag is the sum of the part drags.
pub fn check_conservation(result: &AssemblyResult) -> OracleVerdict {
    let sum: f64 = result.parts.iter().map(|p| p.drag).sum();
    let diff = sum - result.total_drag;

    if within(sum, result.total_drag) {
        OracleVerdict::pass_val(
            "conservation",
            format!("sum of {} part drags = total {:.6} N", result.parts.len(), result.total_drag),
            diff,
        )
    } else {
        OracleVerdict::fail_val(
            "conservation",
            format!("sum of part drags {:.6} N != total {:.6} N", sum, result.total_drag),
            diff,
        )
    }
}

/// Check that every wake factor lies in [0, 1] and every drag between its
/// friction floor and its unshadowed value.
pub fn check_wake_bounds(result: &AssemblyResult) -> OracleVerdict {
    let mut violations = Vec::new();

    for p in &result.parts {
        if p.wake_factor < 0.0 || p.wake_factor > 1.0 + SUM_TOLERANCE {
            violations.push(format!("{}: wake factor {}", p.name, p.wake_factor));
        }
        let slack = SUM_TOLERANCE * p.base_drag.abs().max(1.0);
        if p.drag > p.base_drag + slack || p.drag < p.friction_drag - slack {
            violations.push(format!(
                "{}: drag {} outside [{}, {}]",
                p.name, p.drag, p.friction_drag, p.base_drag
            ));
        }
    }

    if violations.is_empty() {
        OracleVerdict::pass(
            "wake_bounds",
            format!("all {} parts within bounds", result.parts.len()),
        )
    } else {
        OracleVerdict::fail(
            "wake_bounds",
            format!(
                "{} violations: {:?}",
                violations.len(),
                &violations[..violations.len().min(5)]
            ),
        )
    }
}

/// Check that the reported drag area is the total drag over dynamic pressure.
pub fn check_drag_area(result: &AssemblyResult) -> OracleVerdict {
    let expected = result.total_drag / result.dynamic_pressure;

    if within(result.drag_area, expected) {
        OracleVerdict::pass_val(
            "drag_area",
            format!("drag area {:.6} m² = total / q", result.drag_area),
            result.drag_area,
        )
    } else {
        OracleVerdict::fail_val(
            "drag_area",
            format!("drag area {:.6} m² (expected {:.6})", result.drag_area, expected),
            result.drag_area,
        )
    }
}

/// Check that running the assembly again reproduces `result` exactly.
pub fn check_idempotence(assembly: &Assembly, config: &WakeConfig, result: &AssemblyResult) -> OracleVerdict {
    match assembly.run(config) {
        Ok(rerun) if rerun == *result => OracleVerdict::pass(
            "idempotence",
            "second run identical".to_string(),
        ),
        Ok(rerun) => OracleVerdict::fail_val(
            "idempotence",
            format!(
                "second run differs: total {:.6} N vs {:.6} N",
                rerun.total_drag, result.total_drag
            ),
            rerun.total_drag - result.total_drag,
        ),
        Err(e) => OracleVerdict::fail("idempotence", format!("second run failed: {e}")),
    }
}

// ── Composite ───────────────────────────────────────────────────────────────

/// Run all checks that need only the result.
pub fn run_result_checks(result: &AssemblyResult) -> Vec<OracleVerdict> {
    vec![
        check_conservation(result),
        check_wake_bounds(result),
        check_drag_area(result),
    ]
}

/// Run every check, including a repeat run of the assembly.
pub fn run_all_checks(assembly: &Assembly, config: &WakeConfig, result: &AssemblyResult) -> Vec<OracleVerdict> {
    let mut checks = run_result_checks(result);
    checks.push(check_idempotence(assembly, config, result));
    checks
}
