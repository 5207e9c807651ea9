//! Clincalc Types
//!
//! This crate defines the value types shared between the clinical calculation
//! engine and its callers: the immutable lab panel consumed by a calculation
//! pass, the assessment record it produces, and the classification labels.
//! Keeping them here eliminates circular dependencies between the engine and
//! any front-end crate.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod assessment;
mod panel;

pub use assessment::{
    AcidBaseStatus, AkiEtiology, AkiStatus, ArdsSeverity, Assessment, Derived, Disturbance,
};
pub use panel::{FieldSpec, LabPanel};
