use crate::error::EngineResult;
use crate::steps::{acid_base, compensation, gaps, hepatic, oxygenation, renal};
use crate::validate::validate_panel;
use clincalc_types::{Assessment, Derived, LabPanel};
use tracing::{debug, info, instrument};

/// Main engine for evaluating lab panels through the clinical pipeline.
///
/// The engine holds no state; every call is fully self-contained, so a
/// single instance may be shared freely across threads.
pub struct ClinicalCalcEngine;

impl Default for ClinicalCalcEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClinicalCalcEngine {
    /// Create a new engine instance.
    pub fn new() -> Self {
        Self
    }

    /// Runs every calculation step over the panel, in pipeline order, and
    /// returns the full assessment.
    ///
    /// Fails only when a field violates its entry bounds; for an in-bounds
    /// panel the guarded steps degrade to insufficient-data markers instead
    /// of failing, and all remaining fields still populate.
    #[instrument(skip(self, panel))]
    pub fn evaluate(&self, panel: &LabPanel) -> EngineResult<Assessment> {
        validate_panel(panel)?;

        let acid_base_status = acid_base::classify_status(panel.ph);
        let disturbance =
            acid_base::classify_disturbance(acid_base_status, panel.paco2, panel.hco3);
        debug!(%acid_base_status, %disturbance, "Classified acid-base state");

        let expected_compensation =
            compensation::expected_compensation(disturbance, panel.hco3, panel.paco2);

        let anion_gap = gaps::anion_gap(panel.sodium, panel.chloride, panel.hco3);
        let calculated_osmolarity =
            gaps::calculated_osmolarity(panel.sodium, panel.hco3, panel.chloride);
        let osmolar_gap = gaps::osmolar_gap(panel.measured_osmolality, calculated_osmolarity);

        let pao2_fio2_ratio = oxygenation::pao2_fio2_ratio(panel.pao2, panel.fio2);
        let ards_severity = pao2_fio2_ratio.value().map(oxygenation::ards_severity);
        let oxygen_content = oxygenation::oxygen_content(panel.hemoglobin, panel.sao2, panel.pao2);
        let a_a_gradient = oxygenation::a_a_gradient(panel.pao2, panel.fio2);

        let aki_status = renal::aki_status(panel.baseline_creatinine, panel.current_creatinine);
        let fena = renal::fena(
            panel.urine_sodium,
            panel.current_creatinine,
            panel.urine_creatinine,
            panel.serum_sodium,
        );
        let bun_creatinine_ratio = renal::bun_creatinine_ratio(panel.bun, panel.current_creatinine);
        let aki_etiology = match (fena, bun_creatinine_ratio) {
            (Derived::Value(fena_percent), Derived::Value(ratio)) => {
                Some(renal::aki_etiology(ratio, fena_percent))
            }
            _ => None,
        };

        let meld = hepatic::meld(panel.current_creatinine, panel.bilirubin, panel.inr);
        let meld_na = hepatic::meld_na(meld, panel.sodium);

        let winters_expected_paco2 = compensation::winters_expected_paco2(panel.hco3);

        info!(%acid_base_status, %disturbance, %aki_status, "Completed panel evaluation");

        Ok(Assessment {
            acid_base_status,
            disturbance,
            expected_compensation,
            anion_gap,
            calculated_osmolarity,
            osmolar_gap,
            pao2_fio2_ratio,
            ards_severity,
            oxygen_content,
            aki_status,
            fena,
            bun_creatinine_ratio,
            aki_etiology,
            meld,
            meld_na,
            a_a_gradient,
            winters_expected_paco2,
        })
    }
}
