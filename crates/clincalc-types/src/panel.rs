use serde::{Deserialize, Serialize};

/// Entry metadata for a single lab panel field: its serialized name, the
/// physiologic default substituted when a caller leaves the field unset, and
/// the accepted entry bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Field name as it appears in the serialized panel.
    pub name: &'static str,
    /// Default value used when the field is not supplied.
    pub default: f64,
    /// Minimum accepted value.
    pub min: f64,
    /// Maximum accepted value, where the field has one.
    pub max: Option<f64>,
}

/// A single patient's laboratory values, collected once and consumed by every
/// calculation step of a pass. The record is never mutated mid-pipeline.
///
/// All fields are non-negative; `ph` is additionally bounded at 14, and the
/// percentage fields (`fio2`, `sao2`, `spo2`) at 100. `fio2` may be entered
/// either as a fraction (0.21) or as a percentage (21); steps that require a
/// fraction normalize values above 1 themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabPanel {
    /// Arterial pH (normal range 7.35 - 7.45).
    pub ph: f64,
    /// Arterial CO2 tension in mmHg (normal range 35 - 45).
    pub paco2: f64,
    /// Serum bicarbonate in mmol/L (normal range 22 - 26).
    pub hco3: f64,
    /// Serum sodium in mmol/L, as drawn with the blood gas.
    pub sodium: f64,
    /// Serum chloride in mmol/L.
    pub chloride: f64,
    /// Serum albumin in g/dL.
    pub albumin: f64,
    /// Fraction of inspired oxygen; fraction or percentage, see type docs.
    pub fio2: f64,
    /// Arterial O2 tension in mmHg.
    pub pao2: f64,
    /// Measured serum osmolality in mOsm/kg.
    pub measured_osmolality: f64,
    /// Hemoglobin in g/dL.
    pub hemoglobin: f64,
    /// Arterial oxygen saturation in percent.
    pub sao2: f64,
    /// Pulse-oximetry saturation in percent. Collected for completeness; no
    /// calculation step currently consumes it.
    pub spo2: f64,
    /// Baseline serum creatinine in mg/dL.
    pub baseline_creatinine: f64,
    /// Current serum creatinine in mg/dL.
    pub current_creatinine: f64,
    /// Blood urea nitrogen in mg/dL.
    pub bun: f64,
    /// Urine sodium in mEq/L.
    pub urine_sodium: f64,
    /// Urine creatinine in mg/dL.
    pub urine_creatinine: f64,
    /// Serum sodium in mEq/L, drawn with the urine studies.
    pub serum_sodium: f64,
    /// Total bilirubin in mg/dL.
    pub bilirubin: f64,
    /// International normalized ratio.
    pub inr: f64,
}

impl Default for LabPanel {
    // Mirrors the defaults in `FIELDS`; panel_serde_test keeps them in sync.
    fn default() -> Self {
        Self {
            ph: 7.4,
            paco2: 40.0,
            hco3: 24.0,
            sodium: 140.0,
            chloride: 100.0,
            albumin: 4.0,
            fio2: 0.21,
            pao2: 80.0,
            measured_osmolality: 290.0,
            hemoglobin: 15.0,
            sao2: 95.0,
            spo2: 0.0,
            baseline_creatinine: 1.0,
            current_creatinine: 1.5,
            bun: 30.0,
            urine_sodium: 150.0,
            urine_creatinine: 50.0,
            serum_sodium: 140.0,
            bilirubin: 1.0,
            inr: 1.0,
        }
    }
}

impl LabPanel {
    /// Entry-validation hints for every panel field, in declaration order.
    /// Front ends use the defaults and bounds to pre-populate and validate
    /// input widgets; the engine enforces the same bounds before evaluating.
    pub const FIELDS: [FieldSpec; 20] = [
        FieldSpec { name: "ph", default: 7.4, min: 0.0, max: Some(14.0) },
        FieldSpec { name: "paco2", default: 40.0, min: 0.0, max: None },
        FieldSpec { name: "hco3", default: 24.0, min: 0.0, max: None },
        FieldSpec { name: "sodium", default: 140.0, min: 0.0, max: None },
        FieldSpec { name: "chloride", default: 100.0, min: 0.0, max: None },
        FieldSpec { name: "albumin", default: 4.0, min: 0.0, max: None },
        FieldSpec { name: "fio2", default: 0.21, min: 0.0, max: Some(100.0) },
        FieldSpec { name: "pao2", default: 80.0, min: 0.0, max: None },
        FieldSpec { name: "measured_osmolality", default: 290.0, min: 0.0, max: None },
        FieldSpec { name: "hemoglobin", default: 15.0, min: 0.0, max: None },
        FieldSpec { name: "sao2", default: 95.0, min: 0.0, max: Some(100.0) },
        FieldSpec { name: "spo2", default: 0.0, min: 0.0, max: Some(100.0) },
        FieldSpec { name: "baseline_creatinine", default: 1.0, min: 0.0, max: None },
        FieldSpec { name: "current_creatinine", default: 1.5, min: 0.0, max: None },
        FieldSpec { name: "bun", default: 30.0, min: 0.0, max: None },
        FieldSpec { name: "urine_sodium", default: 150.0, min: 0.0, max: None },
        FieldSpec { name: "urine_creatinine", default: 50.0, min: 0.0, max: None },
        FieldSpec { name: "serum_sodium", default: 140.0, min: 0.0, max: None },
        FieldSpec { name: "bilirubin", default: 1.0, min: 0.0, max: None },
        FieldSpec { name: "inr", default: 1.0, min: 0.0, max: None },
    ];

    /// Iterates the panel's fields paired with their entry metadata, in the
    /// same order as [`LabPanel::FIELDS`].
    pub fn field_values(&self) -> impl Iterator<Item = (FieldSpec, f64)> {
        Self::FIELDS.into_iter().zip([
            self.ph,
            self.paco2,
            self.hco3,
            self.sodium,
            self.chloride,
            self.albumin,
            self.fio2,
            self.pao2,
            self.measured_osmolality,
            self.hemoglobin,
            self.sao2,
            self.spo2,
            self.baseline_creatinine,
            self.current_creatinine,
            self.bun,
            self.urine_sodium,
            self.urine_creatinine,
            self.serum_sodium,
            self.bilirubin,
            self.inr,
        ])
    }
}
