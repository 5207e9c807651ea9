use clincalc_types::LabPanel;
use tracing::debug;

use crate::error::{ClinCalcError, EngineResult};

/// Checks every panel field against its entry bounds before any arithmetic
/// runs. The first violation is reported; a valid panel passes silently.
pub(crate) fn validate_panel(panel: &LabPanel) -> EngineResult<()> {
    for (spec, value) in panel.field_values() {
        if !value.is_finite() {
            return Err(ClinCalcError::NotFinite { field: spec.name });
        }
        let above_max = spec.max.is_some_and(|max| value > max);
        if value < spec.min || above_max {
            debug!(field = spec.name, value, "Rejecting out-of-range lab field");
            return Err(ClinCalcError::OutOfRange {
                field: spec.name,
                value,
                min: spec.min,
                max: spec.max,
            });
        }
    }
    Ok(())
}
