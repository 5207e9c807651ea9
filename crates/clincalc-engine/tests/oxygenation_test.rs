use clincalc_engine::steps::oxygenation::{
    a_a_gradient, ards_severity, oxygen_content, pao2_fio2_ratio,
};
use clincalc_engine::{ArdsSeverity, Derived};

#[test]
fn pf_ratio_divides_raw_fio2() {
    assert_eq!(pao2_fio2_ratio(80.0, 0.4), Derived::Value(200.0));
}

#[test]
fn zero_fio2_yields_insufficient_data() {
    assert_eq!(pao2_fio2_ratio(80.0, 0.0), Derived::InsufficientData);
}

#[test]
fn ards_boundaries_match_threshold_directionality() {
    // 300 fails the strictly-greater "Not ARDS" test and stages as mild.
    assert_eq!(ards_severity(300.0), ArdsSeverity::Mild);
    assert_eq!(ards_severity(300.01), ArdsSeverity::NotArds);
    assert_eq!(ards_severity(201.0), ArdsSeverity::Mild);
    assert_eq!(ards_severity(200.99), ArdsSeverity::Moderate);
    assert_eq!(ards_severity(101.0), ArdsSeverity::Moderate);
    assert_eq!(ards_severity(100.0), ArdsSeverity::Severe);
}

#[test]
fn oxygen_content_matches_hand_calculation() {
    // 1.34 * 15 * 0.95 + 0.003 * 80
    let cao2 = oxygen_content(15.0, 95.0, 80.0).value().unwrap();
    assert!((cao2 - 19.335).abs() < 1e-9);
}

#[test]
fn oxygen_content_requires_hemoglobin_and_saturation() {
    assert_eq!(oxygen_content(0.0, 95.0, 80.0), Derived::InsufficientData);
    assert_eq!(oxygen_content(15.0, 0.0, 80.0), Derived::InsufficientData);
}

#[test]
fn a_a_gradient_normalizes_percentage_fio2() {
    // 21 percent and the 0.21 fraction describe the same gas mix.
    let from_percent = a_a_gradient(80.0, 21.0);
    let from_fraction = a_a_gradient(80.0, 0.21);
    assert!((from_percent - from_fraction).abs() < 1e-9);
}

#[test]
fn a_a_gradient_uses_fractions_as_entered() {
    // 0.21 * 760 - 80 / 0.8 - 80
    let gradient = a_a_gradient(80.0, 0.21);
    let expected = 0.21 * 760.0 - 100.0 - 80.0;
    assert!((gradient - expected).abs() < 1e-9);
}

#[test]
fn fio2_of_exactly_one_is_not_rescaled() {
    let gradient = a_a_gradient(80.0, 1.0);
    let expected = 760.0 - 100.0 - 80.0;
    assert!((gradient - expected).abs() < 1e-9);
}
