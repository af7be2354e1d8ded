//! # Section Properties
//!
//! Flexural stiffness of the beam. Curvature is `M / (E·I)`, so slope and
//! deflection are scaled by `1 / (E·I)` after integration. The default
//! section has `E = I = 1`, which leaves results EI-normalised.
//!
//! ## Notation
//!
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia (second moment of area)
//! - `b` = Width of a rectangular section
//! - `d` = Depth of a rectangular section

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Material and section stiffness of a prismatic beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Modulus of elasticity E
    pub modulus: f64,
    /// Moment of inertia I
    pub inertia: f64,
}

impl Default for SectionProperties {
    fn default() -> Self {
        SectionProperties {
            modulus: 1.0,
            inertia: 1.0,
        }
    }
}

impl SectionProperties {
    /// Create section properties from E and I
    pub fn new(modulus: f64, inertia: f64) -> Self {
        SectionProperties { modulus, inertia }
    }

    /// Solid rectangular section bending about its strong axis.
    ///
    /// ```text
    ///     ┌─────────┐
    ///   d │ ════════│ ← neutral axis at d/2
    ///     └─────────┘
    ///          b
    /// ```
    ///
    /// I = bd³/12
    pub fn rectangular(modulus: f64, width: f64, depth: f64) -> Self {
        Self::new(modulus, width * depth.powi(3) / 12.0)
    }

    /// Flexural rigidity E·I
    pub fn flexural_rigidity(&self) -> f64 {
        self.modulus * self.inertia
    }

    /// Both E and I must be positive and finite
    pub fn validate(&self) -> BeamResult<()> {
        if !(self.modulus.is_finite() && self.modulus > 0.0) {
            return Err(BeamError::invalid_input(
                "modulus",
                self.modulus.to_string(),
                "Modulus of elasticity must be positive",
            ));
        }
        if !(self.inertia.is_finite() && self.inertia > 0.0) {
            return Err(BeamError::invalid_input(
                "inertia",
                self.inertia.to_string(),
                "Moment of inertia must be positive",
            ));
        }
        Ok(())
    }
}
