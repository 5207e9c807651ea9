//! Oxygenation Indices
//!
//! PaO2/FiO2 ratio with ARDS staging, total arterial oxygen content, and
//! the alveolar-arterial gradient.

use clincalc_types::{ArdsSeverity, Derived};

/// PaO2/FiO2 ratio, dividing by FiO2 exactly as entered. An FiO2 of zero
/// leaves the ratio undefined.
pub fn pao2_fio2_ratio(pao2: f64, fio2: f64) -> Derived {
    if fio2 > 0.0 {
        Derived::Value(pao2 / fio2)
    } else {
        Derived::InsufficientData
    }
}

/// Stages ARDS severity on the P/F ratio.
///
/// "Not ARDS" is the only strictly-greater test, so a ratio of exactly 300
/// falls through to mild; 201 and 101 land in mild and moderate via the
/// inclusive lower bounds.
pub fn ards_severity(ratio: f64) -> ArdsSeverity {
    if ratio > 300.0 {
        ArdsSeverity::NotArds
    } else if ratio >= 201.0 {
        ArdsSeverity::Mild
    } else if ratio >= 101.0 {
        ArdsSeverity::Moderate
    } else {
        ArdsSeverity::Severe
    }
}

/// Total arterial oxygen content (CaO2) in mL O2/dL. Requires hemoglobin
/// and SaO2; the dissolved-oxygen term uses PaO2.
pub fn oxygen_content(hemoglobin: f64, sao2: f64, pao2: f64) -> Derived {
    if hemoglobin > 0.0 && sao2 > 0.0 {
        Derived::Value(1.34 * hemoglobin * (sao2 / 100.0) + 0.003 * pao2)
    } else {
        Derived::InsufficientData
    }
}

/// Alveolar-arterial oxygen gradient in mmHg.
///
/// An FiO2 above 1 is read as a percentage and scaled to a fraction;
/// fractional entries pass through untouched, so 21 and 0.21 produce the
/// same gradient.
pub fn a_a_gradient(pao2: f64, fio2: f64) -> f64 {
    let fio2_fraction = if fio2 > 1.0 { fio2 / 100.0 } else { fio2 };
    let alveolar_po2 = fio2_fraction * 760.0 - pao2 / 0.8;
    alveolar_po2 - pao2
}
