//! Expected Compensation
//!
//! One formula per disturbance type. Metabolic disturbances predict the
//! PaCO2 the lungs should settle at; respiratory disturbances predict the
//! HCO3 the kidneys should hold (acute rules).

use clincalc_types::{Derived, Disturbance};

/// Expected compensation for the classified disturbance. A normal
/// disturbance has no compensation target.
pub fn expected_compensation(disturbance: Disturbance, hco3: f64, paco2: f64) -> Derived {
    match disturbance {
        Disturbance::MetabolicAcidosis => Derived::Value(winters_expected_paco2(hco3)),
        Disturbance::RespiratoryAcidosis => Derived::Value(hco3 + (paco2 - 40.0) / 10.0),
        Disturbance::MetabolicAlkalosis => Derived::Value(40.0 + 0.6 * (hco3 - 24.0)),
        Disturbance::RespiratoryAlkalosis => Derived::Value(hco3 - 2.0 * (40.0 - paco2) / 10.0),
        Disturbance::Normal => Derived::NotApplicable,
    }
}

/// Winter's formula: the PaCO2 expected in compensated metabolic acidosis.
pub fn winters_expected_paco2(hco3: f64) -> f64 {
    1.5 * hco3 + 8.0
}
