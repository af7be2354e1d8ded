//! # Supports
//!
//! Boundary conditions along the beam. Each support restrains vertical
//! displacement; a fixed support also restrains rotation. Reaction fields
//! start unset and are written by the solver only.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Support condition at a point on the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupportKind {
    /// Pinned/hinged support - restrains vertical (and horizontal) displacement
    ///
    /// Contributes 2 reaction components.
    Pin,

    /// Roller support - restrains vertical displacement only
    ///
    /// Contributes 1 reaction component.
    Roller,

    /// Fixed (built-in) support - restrains displacement and rotation
    ///
    /// Contributes 3 reaction components and a moment reaction.
    Fixed,
}

impl SupportKind {
    /// All support kinds
    pub const ALL: [SupportKind; 3] = [SupportKind::Pin, SupportKind::Roller, SupportKind::Fixed];

    /// Number of reaction components used in the determinacy count
    pub fn reaction_components(&self) -> u32 {
        match self {
            SupportKind::Roller => 1,
            SupportKind::Pin => 2,
            SupportKind::Fixed => 3,
        }
    }

    /// Returns true if this support restrains rotation
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    /// Input code ("PIN", "ROLLER", "FIXED")
    pub fn code(&self) -> &'static str {
        match self {
            SupportKind::Pin => "PIN",
            SupportKind::Roller => "ROLLER",
            SupportKind::Fixed => "FIXED",
        }
    }
}

impl FromStr for SupportKind {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIN" => Ok(SupportKind::Pin),
            "ROLLER" => Ok(SupportKind::Roller),
            "FIXED" => Ok(SupportKind::Fixed),
            other => Err(BeamError::invalid_kind("support", other)),
        }
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A support at a position along the beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Distance from the left end of the beam
    pub position: f64,
    /// Support condition
    pub kind: SupportKind,
    /// Vertical reaction (upward positive), set by analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_force: Option<f64>,
    /// Moment reaction (counter-clockwise positive), set by analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_moment: Option<f64>,
}

impl Support {
    /// Create a support with unset reactions
    pub fn new(position: f64, kind: SupportKind) -> Self {
        Support {
            position,
            kind,
            reaction_force: None,
            reaction_moment: None,
        }
    }

    /// Create a support from an input code such as `"PIN"`.
    ///
    /// Fails with [`BeamError::InvalidKind`] for anything other than
    /// `PIN`, `ROLLER` or `FIXED`.
    pub fn parse(position: f64, kind: &str) -> BeamResult<Self> {
        Ok(Self::new(position, kind.parse()?))
    }

    /// Pinned support at `position`
    pub fn pin(position: f64) -> Self {
        Self::new(position, SupportKind::Pin)
    }

    /// Roller support at `position`
    pub fn roller(position: f64) -> Self {
        Self::new(position, SupportKind::Roller)
    }

    /// Fixed support at `position`
    pub fn fixed(position: f64) -> Self {
        Self::new(position, SupportKind::Fixed)
    }

    /// Clear both reaction fields before an independent analysis
    pub fn clear_reactions(&mut self) {
        self.reaction_force = None;
        self.reaction_moment = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_kinds() {
        for kind in SupportKind::ALL {
            let support = Support::parse(10.4, kind.code()).unwrap();
            assert_eq!(support.position, 10.4);
            assert_eq!(support.kind, kind);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = Support::parse(10.4, "OTHER").unwrap_err();
        assert_eq!(err, BeamError::invalid_kind("support", "OTHER"));
    }

    #[test]
    fn test_reaction_components() {
        assert_eq!(SupportKind::Roller.reaction_components(), 1);
        assert_eq!(SupportKind::Pin.reaction_components(), 2);
        assert_eq!(SupportKind::Fixed.reaction_components(), 3);
        assert!(SupportKind::Fixed.restrains_rotation());
        assert!(!SupportKind::Pin.restrains_rotation());
    }

    #[test]
    fn test_reactions_start_unset() {
        let mut support = Support::roller(10.4);
        assert_eq!(support.reaction_force, None);
        assert_eq!(support.reaction_moment, None);

        support.reaction_force = Some(-20.4);
        support.reaction_moment = Some(2.4);
        assert_eq!(support.reaction_force, Some(-20.4));

        support.clear_reactions();
        assert_eq!(support.reaction_force, None);
        assert_eq!(support.reaction_moment, None);
    }

    #[test]
    fn test_serialization() {
        let support = Support::fixed(2.0);
        let json = serde_json::to_string(&support).unwrap();
        assert_eq!(json, r#"{"position":2.0,"kind":"FIXED"}"#);

        let parsed: Support = serde_json::from_str(r#"{"position":0.0,"kind":"ROLLER"}"#).unwrap();
        assert_eq!(parsed, Support::roller(0.0));
    }
}
