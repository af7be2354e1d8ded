//! Static determinacy classification
//!
//! A straight beam has three in-plane equilibrium equations. Each support
//! supplies reaction components (roller 1, pin 2, fixed 3); comparing their
//! total `r` with 3 decides whether equilibrium alone can solve the beam.

use serde::{Deserialize, Serialize};

use crate::supports::{Support, SupportKind};

/// Number of in-plane equilibrium equations available
const EQUILIBRIUM_EQUATIONS: u32 = 3;

/// Outcome of the determinacy count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Determinacy {
    /// Too few (or only roller) restraints - the beam can move as a rigid body
    Mechanism,
    /// Equilibrium equations alone give the reactions
    Determinate,
    /// Compatibility equations are needed in addition to equilibrium
    Indeterminate,
}

impl std::fmt::Display for Determinacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Determinacy::Mechanism => "Mechanism",
            Determinacy::Determinate => "Determinate",
            Determinacy::Indeterminate => "Indeterminate",
        };
        write!(f, "{}", name)
    }
}

/// Classification together with the counts it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterminacyReport {
    /// Resulting classification
    pub classification: Determinacy,
    /// Total reaction components `r`
    pub reaction_count: u32,
    /// Number of roller supports
    pub rollers: u32,
    /// Number of pinned supports
    pub pins: u32,
    /// Number of fixed supports
    pub fixed: u32,
}

impl DeterminacyReport {
    /// Degree of static indeterminacy `r − 3` (zero unless indeterminate)
    pub fn degree(&self) -> u32 {
        match self.classification {
            Determinacy::Indeterminate => self.reaction_count - EQUILIBRIUM_EQUATIONS,
            _ => 0,
        }
    }
}

/// Classify a support arrangement.
///
/// - `r < 3`, or exactly three rollers and nothing else → Mechanism
/// - `r == 3` → Determinate
/// - `r > 3` → Indeterminate
pub fn classify(supports: &[Support]) -> DeterminacyReport {
    let (mut rollers, mut pins, mut fixed) = (0, 0, 0);
    for support in supports {
        match support.kind {
            SupportKind::Roller => rollers += 1,
            SupportKind::Pin => pins += 1,
            SupportKind::Fixed => fixed += 1,
        }
    }
    let reaction_count: u32 = supports.iter().map(|s| s.kind.reaction_components()).sum();

    let classification = if reaction_count < EQUILIBRIUM_EQUATIONS || (rollers == 3 && pins == 0 && fixed == 0) {
        Determinacy::Mechanism
    } else if reaction_count == EQUILIBRIUM_EQUATIONS {
        Determinacy::Determinate
    } else {
        Determinacy::Indeterminate
    };

    DeterminacyReport {
        classification,
        reaction_count,
        rollers,
        pins,
        fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_rollers_is_mechanism() {
        let report = classify(&[Support::roller(0.0), Support::roller(5.0)]);
        assert_eq!(report.classification, Determinacy::Mechanism);
        assert_eq!(report.reaction_count, 2);
    }

    #[test]
    fn test_three_rollers_is_mechanism() {
        let report = classify(&[Support::roller(0.0), Support::roller(2.0), Support::roller(5.0)]);
        assert_eq!(report.classification, Determinacy::Mechanism);
        assert_eq!(report.reaction_count, 3);
    }

    #[test]
    fn test_no_supports_is_mechanism() {
        assert_eq!(classify(&[]).classification, Determinacy::Mechanism);
    }

    #[test]
    fn test_pin_roller_is_determinate() {
        let report = classify(&[Support::pin(0.0), Support::roller(5.0)]);
        assert_eq!(report.classification, Determinacy::Determinate);
        assert_eq!(report.reaction_count, 3);
        assert_eq!(report.degree(), 0);
    }

    #[test]
    fn test_single_fixed_is_determinate() {
        let report = classify(&[Support::fixed(0.0)]);
        assert_eq!(report.classification, Determinacy::Determinate);
        assert_eq!(report.reaction_count, 3);
    }

    #[test]
    fn test_pin_and_two_rollers_is_indeterminate() {
        let report = classify(&[Support::pin(0.0), Support::roller(4.0), Support::roller(8.0)]);
        assert_eq!(report.classification, Determinacy::Indeterminate);
        assert_eq!(report.reaction_count, 4);
        assert_eq!(report.degree(), 1);
        assert_eq!((report.rollers, report.pins, report.fixed), (2, 1, 0));
    }

    #[test]
    fn test_fixed_fixed_degree() {
        let report = classify(&[Support::fixed(0.0), Support::fixed(6.0)]);
        assert_eq!(report.classification, Determinacy::Indeterminate);
        assert_eq!(report.degree(), 3);
    }
}
