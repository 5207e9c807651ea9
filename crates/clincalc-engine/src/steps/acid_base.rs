//! Acid-Base Interpretation
//!
//! Reads the overall status off the arterial pH, then classifies the
//! primary disturbance from PaCO2 and HCO3.

use clincalc_types::{AcidBaseStatus, Disturbance};

/// pH below 7.35 reads as acidemia, above 7.45 as alkalemia. The boundary
/// values themselves classify as normal.
pub fn classify_status(ph: f64) -> AcidBaseStatus {
    if ph < 7.35 {
        AcidBaseStatus::Acidemia
    } else if ph > 7.45 {
        AcidBaseStatus::Alkalemia
    } else {
        AcidBaseStatus::Normal
    }
}

/// Classifies the primary disturbance behind an abnormal status.
///
/// Within each branch the respiratory check precedes the metabolic check;
/// only the first matching condition fires, so a panel with PaCO2 > 45 and
/// HCO3 < 22 reads as respiratory acidosis.
pub fn classify_disturbance(status: AcidBaseStatus, paco2: f64, hco3: f64) -> Disturbance {
    match status {
        AcidBaseStatus::Acidemia => {
            if paco2 > 45.0 {
                Disturbance::RespiratoryAcidosis
            } else if hco3 < 22.0 {
                Disturbance::MetabolicAcidosis
            } else {
                Disturbance::Normal
            }
        }
        AcidBaseStatus::Alkalemia => {
            if paco2 < 35.0 {
                Disturbance::RespiratoryAlkalosis
            } else if hco3 > 26.0 {
                Disturbance::MetabolicAlkalosis
            } else {
                Disturbance::Normal
            }
        }
        AcidBaseStatus::Normal => Disturbance::Normal,
    }
}
