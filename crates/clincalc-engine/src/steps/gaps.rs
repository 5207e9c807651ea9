//! Anion and Osmolar Gaps
//!
//! Both gaps are total functions of the panel; no guard is needed.

/// Anion gap in mEq/L.
pub fn anion_gap(sodium: f64, chloride: f64, hco3: f64) -> f64 {
    sodium - (chloride + hco3)
}

/// Serum osmolarity estimated from sodium, bicarbonate and chloride.
pub fn calculated_osmolarity(sodium: f64, hco3: f64, chloride: f64) -> f64 {
    2.0 * sodium + hco3 / 18.0 + chloride / 1.8
}

/// Measured osmolality minus the calculated osmolarity.
pub fn osmolar_gap(measured_osmolality: f64, calculated_osmolarity: f64) -> f64 {
    measured_osmolality - calculated_osmolarity
}
