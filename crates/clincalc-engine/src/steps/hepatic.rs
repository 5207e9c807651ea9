//! MELD and MELD-Na Scoring

use clincalc_types::Derived;

// MELD floors every logarithm argument at 1.0, which also keeps ln away
// from non-positive inputs.
fn floored_ln(value: f64) -> f64 {
    value.max(1.0).ln()
}

/// MELD score from creatinine, bilirubin and INR.
pub fn meld(creatinine: f64, bilirubin: f64, inr: f64) -> f64 {
    0.957 * floored_ln(creatinine)
        + 0.378 * floored_ln(bilirubin)
        + 1.120 * floored_ln(inr)
        + 0.6431
}

/// Sodium-adjusted MELD score.
///
/// The sodium term is applied exactly as entered, without clamping to the
/// conventional [125, 137] window. Zero sodium reads as insufficient data.
pub fn meld_na(meld: f64, sodium: f64) -> Derived {
    if sodium > 0.0 {
        Derived::Value(meld + 1.32 * (137.0 - sodium) - 0.033 * meld * (137.0 - sodium))
    } else {
        Derived::InsufficientData
    }
}
