use clincalc_engine::{ClinicalCalcEngine, LabPanel, report};

#[test]
fn report_renders_two_decimal_values_with_units() {
    let assessment = ClinicalCalcEngine::new().evaluate(&LabPanel::default()).unwrap();
    let text = report::render(&assessment);

    assert!(text.contains("Acid-Base Status: Normal"));
    assert!(text.contains("Anion Gap: 16.00 mEq/L"));
    assert!(text.contains("AKI Status: AKI Detected"));
    assert!(text.contains("Winter's Formula Expected PaCO2: 44.00 mmHg"));
    assert!(text.contains("Expected Compensation: not applicable"));
    assert!(text.ends_with('\n'));
}

#[test]
fn report_marks_withheld_fields_instead_of_dropping_them() {
    let panel = LabPanel { fio2: 0.0, serum_sodium: 0.0, ..LabPanel::default() };
    let assessment = ClinicalCalcEngine::new().evaluate(&panel).unwrap();
    let text = report::render(&assessment);

    assert!(text.contains("PaO2/FiO2 Ratio: additional information needed"));
    assert!(
        text.contains("Fractional Excretion of Sodium (FENa): additional information needed")
    );
    // The severity and etiology lines only appear when their inputs do.
    assert!(!text.contains("ARDS Severity"));
    assert!(!text.contains("AKI Etiology"));
}

#[test]
fn report_lists_every_populated_field_once() {
    let assessment = ClinicalCalcEngine::new().evaluate(&LabPanel::default()).unwrap();
    let text = report::render(&assessment);
    assert_eq!(text.lines().count(), 17);
    assert_eq!(text.matches("MELD Score").count(), 1);
}
