//! AKI Screening and Etiology
//!
//! Creatinine-delta AKI screen, fractional excretion of sodium, and the
//! BUN/creatinine ratio that together suggest an etiology.

use clincalc_types::{AkiEtiology, AkiStatus, Derived};

/// A creatinine rise of more than 0.3 mg/dL over baseline flags AKI.
pub fn aki_status(baseline_creatinine: f64, current_creatinine: f64) -> AkiStatus {
    if current_creatinine - baseline_creatinine > 0.3 {
        AkiStatus::Detected
    } else {
        AkiStatus::NotDetected
    }
}

/// Fractional excretion of sodium as a percentage.
///
/// Zero serum sodium or zero urine creatinine would put a zero in the
/// denominator; either reads as insufficient data.
pub fn fena(
    urine_sodium: f64,
    current_creatinine: f64,
    urine_creatinine: f64,
    serum_sodium: f64,
) -> Derived {
    if serum_sodium > 0.0 && urine_creatinine > 0.0 {
        Derived::Value(urine_sodium * current_creatinine / (urine_creatinine * serum_sodium) * 100.0)
    } else {
        Derived::InsufficientData
    }
}

/// BUN-to-creatinine ratio; undefined at zero creatinine.
pub fn bun_creatinine_ratio(bun: f64, current_creatinine: f64) -> Derived {
    if current_creatinine > 0.0 {
        Derived::Value(bun / current_creatinine)
    } else {
        Derived::InsufficientData
    }
}

/// Suggests an AKI etiology from the BUN/Cr ratio and FENa. A ratio of
/// exactly 20 matches neither pattern and reads as indeterminate.
pub fn aki_etiology(bun_cr_ratio: f64, fena_percent: f64) -> AkiEtiology {
    if bun_cr_ratio > 20.0 && fena_percent < 1.0 {
        AkiEtiology::PreRenal
    } else if bun_cr_ratio < 20.0 && fena_percent > 2.0 {
        AkiEtiology::IntrinsicRenal
    } else {
        AkiEtiology::Indeterminate
    }
}
