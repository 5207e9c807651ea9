#![deny(warnings)]
//! The clinical calculation engine.
//!
//! This crate evaluates a [`LabPanel`] through a fixed, ordered pipeline of
//! closed-form clinical calculations: acid-base interpretation with expected
//! compensation, anion and osmolar gaps, oxygenation indices and ARDS
//! staging, AKI screening with FENa-based etiology, and MELD / MELD-Na liver
//! scoring. Each step is a pure function of the panel (and, for a few steps,
//! of an earlier step's classification); guarded steps degrade to
//! insufficient-data markers instead of faulting.

pub mod engine;
pub mod error;
pub mod report;
pub mod steps;
mod validate;

pub use engine::ClinicalCalcEngine;
pub use error::{ClinCalcError, EngineResult};

// Callers usually only need the engine crate in scope.
pub use clincalc_types::{
    AcidBaseStatus, AkiEtiology, AkiStatus, ArdsSeverity, Assessment, Derived, Disturbance,
    FieldSpec, LabPanel,
};
