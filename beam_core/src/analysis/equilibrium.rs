//! Static equilibrium residuals of a solved beam
//!
//! ```text
//! force:  ΣR + ΣP
//! moment: Σ R·x + ΣMr + Σ P·a + Σ m      (about x = 0)
//! ```
//!
//! Both vanish for a correctly solved beam. Unset reactions count as zero.

use serde::{Deserialize, Serialize};

use crate::loads::Load;
use crate::supports::Support;

/// Force and moment residuals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResidual {
    pub force: f64,
    pub moment: f64,
}

impl EquilibriumResidual {
    /// True when both residuals are within `tolerance`
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        self.force.abs() <= tolerance && self.moment.abs() <= tolerance
    }
}

/// Residuals of the reactions currently stored on `supports` against `loads`
pub fn check_equilibrium(supports: &[Support], loads: &[Load]) -> EquilibriumResidual {
    let mut force: f64 = loads.iter().map(Load::force).sum();
    let mut moment: f64 = loads.iter().map(Load::moment_about_origin).sum();

    for support in supports {
        let reaction = support.reaction_force.unwrap_or(0.0);
        force += reaction;
        moment += reaction * support.position + support.reaction_moment.unwrap_or(0.0);
    }

    EquilibriumResidual { force, moment }
}
