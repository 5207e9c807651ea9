use clincalc_engine::steps::acid_base::classify_status;
use clincalc_engine::{AcidBaseStatus, ClinicalCalcEngine, LabPanel};
use proptest::prelude::*;

fn arb_panel() -> impl Strategy<Value = LabPanel> {
    (
        0.0f64..=14.0,  // ph
        0.0f64..200.0,  // paco2
        0.0f64..60.0,   // hco3
        0.0f64..200.0,  // sodium
        0.0f64..150.0,  // chloride
        0.0f64..=100.0, // fio2
        0.0f64..600.0,  // pao2
        0.0f64..30.0,   // hemoglobin
        0.0f64..=100.0, // sao2
        0.0f64..15.0,   // current_creatinine
    )
        .prop_map(
            |(ph, paco2, hco3, sodium, chloride, fio2, pao2, hemoglobin, sao2, current_creatinine)| {
                LabPanel {
                    ph,
                    paco2,
                    hco3,
                    sodium,
                    chloride,
                    fio2,
                    pao2,
                    hemoglobin,
                    sao2,
                    current_creatinine,
                    ..LabPanel::default()
                }
            },
        )
}

proptest! {
    #[test]
    fn ph_below_lower_bound_is_acidemia(ph in 0.0f64..7.35) {
        prop_assert_eq!(classify_status(ph), AcidBaseStatus::Acidemia);
    }

    #[test]
    fn ph_above_upper_bound_is_alkalemia(
        ph in (7.45f64..=14.0).prop_filter("strictly above 7.45", |p| *p > 7.45)
    ) {
        prop_assert_eq!(classify_status(ph), AcidBaseStatus::Alkalemia);
    }

    #[test]
    fn ph_within_band_is_normal(ph in 7.35f64..=7.45) {
        prop_assert_eq!(classify_status(ph), AcidBaseStatus::Normal);
    }

    #[test]
    fn in_bounds_panels_always_evaluate(panel in arb_panel()) {
        let engine = ClinicalCalcEngine::new();
        let first = engine.evaluate(&panel).unwrap();
        let second = engine.evaluate(&panel).unwrap();
        prop_assert_eq!(first, second);
    }
}
