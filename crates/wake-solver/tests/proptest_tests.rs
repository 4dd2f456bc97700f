//! Property-based tests for accumulator invariants using the `proptest` crate.

use drag_parts::{Axis, Part, PartKind};
use nalgebra::Vector3;
use proptest::prelude::*;
use wake_solver::{Assembly, FlowConditions, WakeConfig};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// A sphere or cuboid somewhere in a 10 m box, as (position, kind).
fn arb_part() -> impl Strategy<Value = (Vector3<f64>, PartKind)> {
    let position = (0.0f64..10.0, -1.0f64..1.0, -1.0f64..1.0).prop_map(|(x, y, z)| Vector3::new(x, y, z));
    let kind = prop_oneof![
        (0.1f64..1.0).prop_map(|radius| PartKind::Sphere { radius }),
        (0.1f64..1.0, 0.1f64..1.0, 0.1f64..1.0).prop_map(|(x, y, z)| PartKind::Cuboid { dimensions: [x, y, z] }),
        (0.05f64..0.5, 0.2f64..2.0)
            .prop_map(|(radius, length)| PartKind::Cylinder { radius, length, axis: Axis::X }),
    ];
    (position, kind)
}

fn build(parts: &[(Vector3<f64>, PartKind)]) -> Assembly {
    let mut assembly = Assembly::new("prop", FlowConditions::sea_level(15.0, Axis::X));
    for (i, (position, kind)) in parts.iter().enumerate() {
        assembly.push(Part::new(format!("p{i}"), *position, *kind).unwrap());
    }
    assembly
}

fn downstream_wake(upstream_radius: f64, offset: (f64, f64), downstream_radius: f64) -> f64 {
    let upstream = Part::new("up", Vector3::zeros(), PartKind::Sphere { radius: upstream_radius }).unwrap();
    let downstream = Part::new(
        "down",
        Vector3::new(3.0, offset.0, offset.1),
        PartKind::Sphere { radius: downstream_radius },
    )
    .unwrap();
    let assembly = Assembly::new("mono", FlowConditions::sea_level(10.0, Axis::X))
        .with_part(upstream)
        .with_part(downstream);
    let result = assembly.run(&WakeConfig::default()).unwrap();
    result.parts[1].wake_factor
}

// ---------------------------------------------------------------------------
// 1. Conservation: the total is exactly the sum of part drags
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn total_drag_is_sum_of_parts(parts in prop::collection::vec(arb_part(), 1..8)) {
        let result = build(&parts).run(&WakeConfig::default()).unwrap();
        let sum: f64 = result.parts.iter().map(|p| p.drag).sum();
        prop_assert_eq!(sum, result.total_drag);
        prop_assert_eq!(result.parts.len(), parts.len());
    }
}

// ---------------------------------------------------------------------------
// 2. Wake factors and drags stay within their physical bounds
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn wake_factor_within_unit_interval(parts in prop::collection::vec(arb_part(), 1..8)) {
        let result = build(&parts).run(&WakeConfig::default()).unwrap();
        for p in &result.parts {
            prop_assert!(p.wake_factor >= 0.0 && p.wake_factor <= 1.0 + 1e-12,
                "{} has wake factor {}", p.name, p.wake_factor);
            prop_assert!(p.drag <= p.base_drag + 1e-12);
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Idempotence: a second run reproduces the first exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn repeated_runs_identical(parts in prop::collection::vec(arb_part(), 1..6)) {
        let assembly = build(&parts);
        let config = WakeConfig::default();
        prop_assert_eq!(assembly.run(&config).unwrap(), assembly.run(&config).unwrap());
    }
}

// ---------------------------------------------------------------------------
// 4. Monotonicity: a larger upstream body never raises the downstream wake factor
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn larger_upstream_shadow_never_raises_wake_factor(
        radius in 0.1f64..0.9,
        growth in 0.0f64..0.9,
        offset in (-0.8f64..0.8, -0.8f64..0.8),
        downstream_radius in 0.1f64..1.0,
    ) {
        let small = downstream_wake(radius, offset, downstream_radius);
        let large = downstream_wake(radius + growth, offset, downstream_radius);
        prop_assert!(large <= small + 1e-12,
            "wake factor rose from {} to {} as upstream radius grew", small, large);
    }
}
