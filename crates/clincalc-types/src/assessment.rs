use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived numeric output that a guard condition may withhold.
///
/// Guarded calculations never fault on a zero denominator or an
/// out-of-domain argument; they degrade to one of the marker variants and
/// leave the rest of the assessment untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Derived {
    /// Preconditions held; the calculation produced this value.
    Value(f64),
    /// A required input was zero or otherwise outside the formula's domain.
    InsufficientData,
    /// The calculation does not apply to this panel, e.g. compensation for
    /// a normal acid-base state.
    NotApplicable,
}

impl Derived {
    /// Returns the inner value when the calculation produced one.
    pub fn value(self) -> Option<f64> {
        match self {
            Derived::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the calculation produced a value.
    pub fn is_value(self) -> bool {
        matches!(self, Derived::Value(_))
    }
}

impl From<f64> for Derived {
    fn from(value: f64) -> Self {
        Derived::Value(value)
    }
}

impl fmt::Display for Derived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derived::Value(v) => write!(f, "{v:.2}"),
            Derived::InsufficientData => write!(f, "Insufficient data"),
            Derived::NotApplicable => write!(f, "Not applicable"),
        }
    }
}

/// Overall acid-base status read off the arterial pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcidBaseStatus {
    /// pH below 7.35.
    Acidemia,
    /// pH above 7.45.
    Alkalemia,
    /// pH within 7.35 - 7.45 inclusive.
    Normal,
}

impl fmt::Display for AcidBaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AcidBaseStatus::Acidemia => "Acidemia",
            AcidBaseStatus::Alkalemia => "Alkalemia",
            AcidBaseStatus::Normal => "Normal",
        };
        f.write_str(label)
    }
}

/// Primary acid-base disturbance behind an abnormal pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disturbance {
    /// Acidemia driven by CO2 retention (PaCO2 above 45).
    RespiratoryAcidosis,
    /// Acidemia driven by bicarbonate loss (HCO3 below 22).
    MetabolicAcidosis,
    /// Alkalemia driven by CO2 washout (PaCO2 below 35).
    RespiratoryAlkalosis,
    /// Alkalemia driven by bicarbonate excess (HCO3 above 26).
    MetabolicAlkalosis,
    /// No disturbance identified.
    Normal,
}

impl fmt::Display for Disturbance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Disturbance::RespiratoryAcidosis => "Respiratory Acidosis",
            Disturbance::MetabolicAcidosis => "Metabolic Acidosis",
            Disturbance::RespiratoryAlkalosis => "Respiratory Alkalosis",
            Disturbance::MetabolicAlkalosis => "Metabolic Alkalosis",
            Disturbance::Normal => "Normal",
        };
        f.write_str(label)
    }
}

/// ARDS severity staged on the PaO2/FiO2 ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArdsSeverity {
    /// Ratio strictly above 300.
    NotArds,
    /// Ratio 201 up to and including 300.
    Mild,
    /// Ratio 101 up to 201.
    Moderate,
    /// Ratio below 101.
    Severe,
}

impl fmt::Display for ArdsSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArdsSeverity::NotArds => "Not ARDS",
            ArdsSeverity::Mild => "Mild ARDS",
            ArdsSeverity::Moderate => "Moderate ARDS",
            ArdsSeverity::Severe => "Severe ARDS",
        };
        f.write_str(label)
    }
}

/// Acute kidney injury screen on the creatinine delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AkiStatus {
    /// Current creatinine rose more than 0.3 mg/dL over baseline.
    Detected,
    /// Creatinine delta within 0.3 mg/dL of baseline.
    NotDetected,
}

impl fmt::Display for AkiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AkiStatus::Detected => "AKI Detected",
            AkiStatus::NotDetected => "No AKI Detected",
        };
        f.write_str(label)
    }
}

/// Likely AKI etiology from the BUN/creatinine ratio and FENa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AkiEtiology {
    /// BUN/Cr above 20 with FENa below 1%.
    PreRenal,
    /// BUN/Cr below 20 with FENa above 2%.
    IntrinsicRenal,
    /// Neither pattern; needs clinical correlation.
    Indeterminate,
}

impl fmt::Display for AkiEtiology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AkiEtiology::PreRenal => "Likely Pre-Renal Etiology",
            AkiEtiology::IntrinsicRenal => "Likely Intrinsic Renal Etiology",
            AkiEtiology::Indeterminate => "Further evaluation needed",
        };
        f.write_str(label)
    }
}

/// Every derived value and classification produced by one calculation pass.
///
/// Produced fresh per pass; guarded fields carry their own
/// insufficient-data markers so one failed guard never blanks the rest of
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Acidemia / alkalemia / normal, from pH alone.
    pub acid_base_status: AcidBaseStatus,
    /// Primary disturbance behind the status.
    pub disturbance: Disturbance,
    /// Expected compensation for the disturbance: a PaCO2 for metabolic
    /// disturbances, an HCO3 for respiratory ones. Not applicable when the
    /// disturbance is normal.
    pub expected_compensation: Derived,
    /// Anion gap in mEq/L.
    pub anion_gap: f64,
    /// Serum osmolarity estimated from sodium, bicarbonate and chloride.
    pub calculated_osmolarity: f64,
    /// Measured minus calculated osmolarity.
    pub osmolar_gap: f64,
    /// PaO2/FiO2 ratio; insufficient data when FiO2 is zero.
    pub pao2_fio2_ratio: Derived,
    /// ARDS staging on the ratio; absent whenever the ratio is.
    pub ards_severity: Option<ArdsSeverity>,
    /// Total arterial oxygen content (CaO2) in mL O2/dL; needs hemoglobin
    /// and SaO2.
    pub oxygen_content: Derived,
    /// AKI screen on the creatinine delta.
    pub aki_status: AkiStatus,
    /// Fractional excretion of sodium in percent; needs serum sodium and
    /// urine creatinine.
    pub fena: Derived,
    /// BUN/creatinine ratio; needs a nonzero current creatinine.
    pub bun_creatinine_ratio: Derived,
    /// Likely AKI etiology; absent when FENa or the BUN/Cr ratio is.
    pub aki_etiology: Option<AkiEtiology>,
    /// MELD score, with sub-1.0 logarithm arguments floored per convention.
    pub meld: f64,
    /// Sodium-adjusted MELD; insufficient data when sodium is zero.
    pub meld_na: Derived,
    /// Alveolar-arterial oxygen gradient in mmHg.
    pub a_a_gradient: f64,
    /// Winter's formula expected PaCO2, reported independently of the
    /// compensation field.
    pub winters_expected_paco2: f64,
}
