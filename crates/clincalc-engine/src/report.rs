//! Text rendering of a completed assessment.
//!
//! One labeled line per populated output field, numerics formatted to two
//! decimal places. Guarded fields that were withheld render an explicit
//! marker line instead of disappearing.

use clincalc_types::{Assessment, Derived};

fn derived_line(label: &str, value: Derived, unit: &str) -> String {
    match value {
        Derived::Value(v) if unit.is_empty() => format!("{label}: {v:.2}"),
        Derived::Value(v) => format!("{label}: {v:.2} {unit}"),
        Derived::InsufficientData => format!("{label}: additional information needed"),
        Derived::NotApplicable => format!("{label}: not applicable"),
    }
}

/// Renders the assessment as labeled text, one field per line.
pub fn render(assessment: &Assessment) -> String {
    let mut lines = Vec::with_capacity(17);

    lines.push(format!("Acid-Base Status: {}", assessment.acid_base_status));
    lines.push(format!("Disturbance Type: {}", assessment.disturbance));
    lines.push(derived_line(
        "Expected Compensation",
        assessment.expected_compensation,
        "",
    ));
    lines.push(format!("Anion Gap: {:.2} mEq/L", assessment.anion_gap));
    lines.push(format!(
        "Calculated Osmolarity: {:.2} mOsm/L",
        assessment.calculated_osmolarity
    ));
    lines.push(format!("Osmolar Gap: {:.2}", assessment.osmolar_gap));
    lines.push(derived_line(
        "PaO2/FiO2 Ratio",
        assessment.pao2_fio2_ratio,
        "mmHg",
    ));
    if let Some(severity) = assessment.ards_severity {
        lines.push(format!("ARDS Severity: {severity}"));
    }
    lines.push(derived_line(
        "Total Oxygen Content (CaO2)",
        assessment.oxygen_content,
        "mL O2/dL",
    ));
    lines.push(format!("AKI Status: {}", assessment.aki_status));
    lines.push(derived_line(
        "Fractional Excretion of Sodium (FENa)",
        assessment.fena,
        "%",
    ));
    lines.push(derived_line(
        "BUN/Creatinine Ratio",
        assessment.bun_creatinine_ratio,
        "",
    ));
    if let Some(etiology) = assessment.aki_etiology {
        lines.push(format!("AKI Etiology: {etiology}"));
    }
    lines.push(format!("MELD Score: {:.2}", assessment.meld));
    lines.push(derived_line("MELD-Na Score", assessment.meld_na, ""));
    lines.push(format!("A-a Gradient: {:.2} mmHg", assessment.a_a_gradient));
    lines.push(format!(
        "Winter's Formula Expected PaCO2: {:.2} mmHg",
        assessment.winters_expected_paco2
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
