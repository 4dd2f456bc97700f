//! Text rendering of run results and retention curves.

use wake_solver::AssemblyResult;

/// Human-readable summary of one run.
pub fn summary(result: &AssemblyResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: flow along {}, q = {:.3} Pa, Re = {:.3e}\n",
        result.name, result.flow_axis, result.dynamic_pressure, result.reynolds_number,
    ));
    out.push_str(&format!(
        "  total drag {:.3} N, drag area {:.4} m², {} of {} parts shadowed\n",
        result.total_drag,
        result.drag_area,
        result.shadowed_count(),
        result.parts.len(),
    ));
    let cp = result.center_of_pressure;
    out.push_str(&format!(
        "  centre of pressure ({:.3}, {:.3}, {:.3}) m\n",
        cp.x, cp.y, cp.z
    ));

    for p in &result.parts {
        out.push_str(&format!(
            "  {:<16} drag {:>9.3} N  base {:>9.3} N  wake {:.3}",
            p.name, p.drag, p.base_drag, p.wake_factor
        ));
        if let Some(up) = &p.shadowed_by {
            out.push_str(&format!("  (behind {up}, slowdown {:.3})", p.slowdown));
        }
        out.push('\n');
    }
    out
}

/// `(normalized_distance, retained_fraction)` pairs as CSV with a header row.
pub fn curve_csv(points: &[(f64, f64)]) -> String {
    let mut out = String::from("normalized_distance,retained_fraction\n");
    for (d, f) in points {
        out.push_str(&format!("{d},{f}\n"));
    }
    out
}
