//! FILENAME: mix/tests/test_mix_request.rs
//! PURPOSE: Pipeline tests: workbook -> table set -> request -> mix,
//! plus override behavior and the report projection.

mod common;

use common::load_reference_tables;
use mix::{
    compute_mix, report_lines, AggressivenessClass, ConcreteType, MaterialProperties, MixError,
    MixRequest, Overrides, PreparationCondition, ProjectInfo, SelectionCriteria,
};

fn sample_request() -> MixRequest {
    MixRequest {
        criteria: SelectionCriteria {
            concrete_type: ConcreteType::Reinforced,
            aggressiveness_class: AggressivenessClass::II,
            preparation_condition: PreparationCondition::A,
            max_aggregate_size: 19.0,
            slump_range: "40-60".to_string(),
            fineness_modulus: 2.35,
            small_gravel_pct: 50.0,
            water_cement_ratio: 0.45,
        },
        materials: MaterialProperties::default(),
        overrides: Overrides::default(),
    }
}

// ============================================================================
// FULL PIPELINE
// ============================================================================

#[test]
fn test_full_pipeline_resolves_and_computes() {
    let (_dir, _path, tables) = load_reference_tables();
    let outcome = compute_mix(&tables, &sample_request()).expect("compute mix");

    // Limits for reinforced / class II.
    assert_eq!(outcome.limits.max_water_cement_ratio, 0.60);
    assert_eq!(outcome.limits.min_strength_class, 25);
    assert_eq!(outcome.limits.min_cement_content, 280.0);

    // Sd for condition A and the derived target strength.
    assert_eq!(outcome.std_deviation, 4.0);
    assert!((outcome.target_strength - (25.0 + 1.65 * 4.0)).abs() < 1e-9);

    // Water from 19 mm / "40-60"; Vb from MF 2.35 -> nearest row 2.2.
    assert_eq!(outcome.water_content_liters, 195.0);
    assert_eq!(outcome.gravel_volume_fraction, 0.730);
    assert!(!outcome.ratio_exceeds_limit);

    // Closure: 195 L water at 1000 kg/m³; cement above the floor.
    let r = &outcome.result;
    assert!((r.water_mass - 195.0).abs() < 1e-9);
    assert!((r.cement_mass - 195.0 / 0.45).abs() < 1e-9);
    assert!(!r.sand_clamped);
    let total = r.cement_volume + r.water_volume + r.gravel_volume + r.sand_volume;
    assert!((total - 1.0).abs() < 1e-6);
}

#[test]
fn test_pipeline_is_deterministic() {
    let (_dir, _path, tables) = load_reference_tables();
    let request = sample_request();
    let a = compute_mix(&tables, &request).expect("first run");
    let b = compute_mix(&tables, &request).expect("second run");
    assert_eq!(a, b);
}

// ============================================================================
// LOOKUP MISSES AND OVERRIDES
// ============================================================================

#[test]
fn test_missing_slump_band_is_an_error() {
    let (_dir, _path, tables) = load_reference_tables();
    let mut request = sample_request();
    request.criteria.slump_range = "50-70".to_string();

    match compute_mix(&tables, &request) {
        Err(MixError::Lookup(err)) => assert_eq!(err.table, "water-consumption"),
        other => panic!("expected lookup error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_aggregate_size_is_an_error() {
    let (_dir, _path, tables) = load_reference_tables();
    let mut request = sample_request();
    request.criteria.max_aggregate_size = 21.0;

    assert!(matches!(
        compute_mix(&tables, &request),
        Err(MixError::Lookup(_))
    ));
}

#[test]
fn test_override_recovers_missing_lookup() {
    let (_dir, _path, tables) = load_reference_tables();
    let mut request = sample_request();
    request.criteria.slump_range = "50-70".to_string();
    request.overrides.water_content_liters = Some(200.0);

    let outcome = compute_mix(&tables, &request).expect("override should recover");
    assert_eq!(outcome.water_content_liters, 200.0);
    assert!((outcome.result.cement_mass - 200.0 / 0.45).abs() < 1e-9);
}

#[test]
fn test_overrides_bypass_table_values() {
    let (_dir, _path, tables) = load_reference_tables();
    let mut request = sample_request();
    request.overrides = Overrides {
        water_content_liters: Some(200.0),
        gravel_volume_fraction: Some(0.70),
        max_water_cement_ratio: Some(0.50),
        min_cement_content: Some(320.0),
        std_deviation: Some(5.5),
    };

    let outcome = compute_mix(&tables, &request).expect("compute mix");
    assert_eq!(outcome.water_content_liters, 200.0);
    assert_eq!(outcome.gravel_volume_fraction, 0.70);
    assert_eq!(outcome.limits.max_water_cement_ratio, 0.50);
    assert_eq!(outcome.limits.min_cement_content, 320.0);
    assert_eq!(outcome.std_deviation, 5.5);
}

#[test]
fn test_ratio_above_table_limit_is_flagged_not_rejected() {
    let (_dir, _path, tables) = load_reference_tables();
    let mut request = sample_request();
    request.criteria.water_cement_ratio = 0.70; // table limit is 0.60

    let outcome = compute_mix(&tables, &request).expect("compute mix");
    assert!(outcome.ratio_exceeds_limit);
    // 195/0.70 = 278.6 < 280: the cement floor takes over.
    assert_eq!(outcome.result.cement_mass, 280.0);
}

#[test]
fn test_invalid_materials_are_rejected() {
    let (_dir, _path, tables) = load_reference_tables();
    let mut request = sample_request();
    request.materials.sand_grain_density = -2650.0;

    assert!(matches!(
        compute_mix(&tables, &request),
        Err(MixError::Input(_))
    ));
}

// ============================================================================
// REPORT PROJECTION
// ============================================================================

#[test]
fn test_report_covers_every_result_field() {
    let (_dir, _path, tables) = load_reference_tables();
    let request = sample_request();
    let outcome = compute_mix(&tables, &request).expect("compute mix");

    let info = ProjectInfo {
        project: "Obra A - Laje".to_string(),
        technician: "Eng. Fulano".to_string(),
        usage: "Structural".to_string(),
        fabricated_at: "Site".to_string(),
    };
    let lines = report_lines(&info, &request, &outcome);

    // Identification leads the report.
    assert_eq!(lines[0].label, "Project");
    assert_eq!(lines[0].value, "Obra A - Laje");

    let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
    for expected in [
        "Concrete type",
        "Water/cement ratio",
        "Standard deviation Sd",
        "Target strength (28d)",
        "Cement",
        "Small gravel",
        "Large gravel",
        "Sand (dry)",
        "Water to add",
        "Cement volume",
        "Sand volume",
        "Sand to measure (bulked)",
    ] {
        assert!(labels.contains(&expected), "missing report line: {}", expected);
    }

    // Every line of a mass row carries its unit.
    let cement = lines.iter().find(|l| l.label == "Cement").unwrap();
    assert_eq!(cement.unit, "kg/m³");
    assert_eq!(cement.value, format!("{:.2}", outcome.result.cement_mass));

    // The closure status is observable in the projection.
    let closure = lines.iter().find(|l| l.label == "Volume closure").unwrap();
    assert_eq!(closure.value, "closed at 1.000 m³");
}

#[test]
fn test_request_serializes_with_default_overrides() {
    let request = sample_request();
    let json = serde_json::to_string(&request).expect("serialize");
    let back: MixRequest = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.criteria.slump_range, "40-60");
    assert_eq!(back.overrides, Overrides::default());

    // Overrides may be omitted entirely on the wire.
    let partial = serde_json::json!({
        "criteria": request.criteria,
        "materials": request.materials,
    });
    let without: MixRequest =
        serde_json::from_value(partial).expect("deserialize without overrides");
    assert_eq!(without.overrides, Overrides::default());
}
