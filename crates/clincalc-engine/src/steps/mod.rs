//! The ordered calculation steps of the clinical pipeline.

// Acid-base interpretation
pub mod acid_base;
pub mod compensation;

// Gap calculations
pub mod gaps;

// Oxygenation indices
pub mod oxygenation;

// Renal and hepatic scoring
pub mod hepatic;
pub mod renal;
