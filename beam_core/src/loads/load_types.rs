//! Load kind definitions
//!
//! Every applied action has one of four kinds. Point forces and point
//! moments resolve to closed-form singularity terms; the distributed kinds
//! are accepted on input but rejected by the solver.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BeamError;

/// Kind of applied action
///
/// # Example
/// ```
/// use beam_core::loads::LoadKind;
///
/// let kind: LoadKind = "MOMENT".parse().unwrap();
/// assert_eq!(kind, LoadKind::Moment);
/// assert!("BLAST".parse::<LoadKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadKind {
    /// Concentrated force (upward positive)
    Point,
    /// Concentrated couple (counter-clockwise positive)
    Moment,
    /// Uniformly distributed load
    Uniform,
    /// Linearly varying (triangular) distributed load
    Triangle,
}

impl LoadKind {
    /// All load kinds in input order
    pub const ALL: [LoadKind; 4] = [
        LoadKind::Point,
        LoadKind::Moment,
        LoadKind::Uniform,
        LoadKind::Triangle,
    ];

    /// Input code ("POINT", "MOMENT", "UNIFORM", "TRIANGLE")
    pub fn code(&self) -> &'static str {
        match self {
            LoadKind::Point => "POINT",
            LoadKind::Moment => "MOMENT",
            LoadKind::Uniform => "UNIFORM",
            LoadKind::Triangle => "TRIANGLE",
        }
    }

    /// Whether the solver can express this load in closed form
    pub fn has_closed_form(&self) -> bool {
        matches!(self, LoadKind::Point | LoadKind::Moment)
    }
}

impl FromStr for LoadKind {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POINT" => Ok(LoadKind::Point),
            "MOMENT" => Ok(LoadKind::Moment),
            "UNIFORM" => Ok(LoadKind::Uniform),
            "TRIANGLE" => Ok(LoadKind::Triangle),
            other => Err(BeamError::invalid_kind("load", other)),
        }
    }
}

impl std::fmt::Display for LoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
