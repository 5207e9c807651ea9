use clincalc_types::{Derived, LabPanel};

#[test]
fn default_panel_matches_field_table() {
    let panel = LabPanel::default();
    for (spec, value) in panel.field_values() {
        assert_eq!(value, spec.default, "default mismatch for '{}'", spec.name);
    }
}

#[test]
fn field_table_bounds_admit_their_own_defaults() {
    for spec in LabPanel::FIELDS {
        assert!(spec.default >= spec.min, "'{}' default below min", spec.name);
        if let Some(max) = spec.max {
            assert!(spec.default <= max, "'{}' default above max", spec.name);
        }
    }
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let panel: LabPanel = serde_json::from_str(r#"{"ph": 7.2, "paco2": 50.0}"#).unwrap();
    assert_eq!(panel.ph, 7.2);
    assert_eq!(panel.paco2, 50.0);
    assert_eq!(panel.hco3, 24.0);
    assert_eq!(panel.sodium, 140.0);
}

#[test]
fn panel_json_round_trips() {
    let panel = LabPanel { ph: 7.21, fio2: 0.4, ..LabPanel::default() };
    let json = serde_json::to_string(&panel).unwrap();
    let back: LabPanel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, panel);
}

#[test]
fn derived_serializes_with_status_tag() {
    let json = serde_json::to_string(&Derived::Value(16.0)).unwrap();
    assert_eq!(json, r#"{"status":"value","value":16.0}"#);

    let json = serde_json::to_string(&Derived::InsufficientData).unwrap();
    assert_eq!(json, r#"{"status":"insufficient_data"}"#);

    let back: Derived = serde_json::from_str(r#"{"status":"not_applicable"}"#).unwrap();
    assert_eq!(back, Derived::NotApplicable);
}

#[test]
fn derived_accessors() {
    assert_eq!(Derived::Value(3.5).value(), Some(3.5));
    assert_eq!(Derived::InsufficientData.value(), None);
    assert!(Derived::Value(0.0).is_value());
    assert!(!Derived::NotApplicable.is_value());
}
