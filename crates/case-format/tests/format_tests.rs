use case_format::{
    load_case, save_case, save_result, Case, LoadError, ResultMetadata, FORMAT_VERSION, RESULT_FORMAT,
};
use drag_parts::{Axis, DragCoefficient, Part, PartKind};
use nalgebra::Vector3;
use wake_solver::{Assembly, FlowConditions, WakeConfig};

// ── Helper Functions ─────────────────────────────────────────────────────

const SPHERE_PAIR: &str = include_str!("../../../data/cases/sphere-pair.json");
const TANDEM_POD: &str = include_str!("../../../data/cases/tandem-pod.json");

fn minimal_case(format: &str, version: u32, parts: &str) -> String {
    format!(
        r#"{{
            "format": "{format}",
            "version": {version},
            "name": "test",
            "flow": {{ "density": 1.225, "velocity": 10.0, "flow_axis": 0 }},
            "parts": {parts}
        }}"#
    )
}

fn sample_case() -> Case {
    let assembly = Assembly::new("sample", FlowConditions::sea_level(8.0, Axis::Z))
        .with_part(
            Part::new("ball", Vector3::new(0.0, 0.0, 0.0), PartKind::Sphere { radius: 0.2 })
                .unwrap()
                .with_drag_coefficient(DragCoefficient::ReynoldsRange { low: 0.1, high: 0.3 }),
        )
        .with_part(
            Part::new(
                "plate",
                Vector3::new(0.1, 0.0, 1.0),
                PartKind::Disk { radius: 0.3, plane: [Axis::X, Axis::Y] },
            )
            .unwrap()
            .with_wet_area(0.5)
            .excluded_from_moment(),
        );
    Case {
        assembly,
        config: WakeConfig::frictionless(),
    }
}

// ── Loading ──────────────────────────────────────────────────────────────

#[test]
fn test_load_sample_cases() {
    let pair = load_case(SPHERE_PAIR).unwrap();
    assert_eq!(pair.name(), "sphere-pair");
    assert_eq!(pair.assembly.parts.len(), 2);
    assert_eq!(pair.assembly.flow.reynolds_number, Some(1e6));
    assert_eq!(pair.config.skin_friction_coefficient, 0.0);

    let pod = load_case(TANDEM_POD).unwrap();
    assert_eq!(pod.assembly.parts.len(), 5);
    assert_eq!(pod.config, WakeConfig::default());
    let rotor = pod.assembly.parts.iter().find(|p| p.name == "rotor").unwrap();
    assert!(rotor.exclude_from_moment);
    assert_eq!(rotor.kind, PartKind::Disk { radius: 0.2, plane: [Axis::X, Axis::Y] });
}

#[test]
fn test_sample_cases_run() {
    for json in [SPHERE_PAIR, TANDEM_POD] {
        let case = load_case(json).unwrap();
        let result = case.assembly.run(&case.config).unwrap();
        assert!(result.total_drag > 0.0);
    }
}

#[test]
fn test_unknown_format_rejected() {
    let json = minimal_case("something-else", 1, "[]");
    assert!(matches!(load_case(&json), Err(LoadError::UnknownFormat(f)) if f == "something-else"));
}

#[test]
fn test_future_version_rejected() {
    let json = minimal_case("wake-drag-case", FORMAT_VERSION + 1, "[]");
    assert!(matches!(
        load_case(&json),
        Err(LoadError::FutureVersion { file_version, .. }) if file_version == FORMAT_VERSION + 1
    ));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(load_case("{ not json"), Err(LoadError::ParseError(_))));
}

#[test]
fn test_unknown_shape_rejected() {
    let parts = r#"[{ "name": "a", "position": [0, 0, 0], "shape": { "kind": "torus", "radius": 1 } }]"#;
    assert!(matches!(load_case(&minimal_case("wake-drag-case", 1, parts)), Err(LoadError::ParseError(_))));
}

#[test]
fn test_degenerate_part_rejected() {
    let parts = r#"[{ "name": "a", "position": [0, 0, 0], "shape": { "kind": "sphere", "radius": 0 } }]"#;
    assert!(matches!(
        load_case(&minimal_case("wake-drag-case", 1, parts)),
        Err(LoadError::InvalidPart(_))
    ));
}

#[test]
fn test_duplicate_names_rejected() {
    let parts = r#"[
        { "name": "a", "position": [0, 0, 0], "shape": { "kind": "sphere", "radius": 1 } },
        { "name": "a", "position": [5, 0, 0], "shape": { "kind": "sphere", "radius": 1 } }
    ]"#;
    assert!(matches!(
        load_case(&minimal_case("wake-drag-case", 1, parts)),
        Err(LoadError::DuplicatePart(name)) if name == "a"
    ));
}

#[test]
fn test_invalid_flow_rejected() {
    let json = r#"{
        "format": "wake-drag-case", "version": 1, "name": "still",
        "flow": { "density": 1.225, "velocity": -1.0, "flow_axis": 0 },
        "parts": []
    }"#;
    assert!(matches!(load_case(json), Err(LoadError::InvalidFlow(_))));
}

#[test]
fn test_invalid_config_rejected() {
    let json = r#"{
        "format": "wake-drag-case", "version": 1, "name": "bad-curve",
        "flow": { "density": 1.225, "velocity": 10.0, "flow_axis": 0 },
        "parts": [],
        "config": { "dynamic_viscosity": 0.0 }
    }"#;
    assert!(matches!(load_case(json), Err(LoadError::InvalidConfig(_))));
}

// ── Saving ───────────────────────────────────────────────────────────────

#[test]
fn test_case_save_load_preserves_assembly() {
    let case = sample_case();
    let json = save_case(&case).unwrap();
    let loaded = load_case(&json).unwrap();
    assert_eq!(loaded, case);
}

#[test]
fn test_result_file_layout() {
    let case = load_case(SPHERE_PAIR).unwrap();
    let result = case.assembly.run(&case.config).unwrap();
    let json = save_result(&result, &ResultMetadata::new(case.name())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["format"], RESULT_FORMAT);
    assert_eq!(value["version"], FORMAT_VERSION);
    assert_eq!(value["metadata"]["case"], "sphere-pair");
    assert!(value["metadata"]["created"].is_string());
    assert_eq!(value["total_drag"].as_f64().unwrap(), result.total_drag);
    assert_eq!(value["center_of_pressure"].as_array().unwrap().len(), 3);
    assert_eq!(value["parts"][1]["name"], "rear");
    assert_eq!(value["parts"][1]["shadowed_by"], "front");
    assert!(value["parts"][0]["shadowed_by"].is_null());
}
