//! Structured error handling for the clinical calculation engine.
//!
//! The only failure mode is a panel field outside its documented entry
//! bounds; every in-bounds panel evaluates successfully, with guard
//! conditions downgrading individual outputs rather than erroring.

use thiserror::Error;

/// Error type for clinical calculation engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClinCalcError {
    /// A panel field lies outside its accepted entry range.
    #[error("lab field '{field}' = {value} is outside its accepted entry range")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: Option<f64>,
    },

    /// A panel field is NaN or infinite.
    #[error("lab field '{field}' is not a finite number")]
    NotFinite { field: &'static str },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, ClinCalcError>;
