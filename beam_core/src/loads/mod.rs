//! # Loads
//!
//! Applied actions on the beam. Magnitudes follow an upward-positive
//! convention for forces and a counter-clockwise-positive convention for
//! couples, the same convention used for support reactions.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::{Load, LoadKind};
//!
//! let load = Load::point(3.0, -10.0);
//! assert_eq!(load.kind, LoadKind::Point);
//!
//! let parsed = Load::parse(1.5, "MOMENT", 4.0).unwrap();
//! assert_eq!(parsed, Load::moment(1.5, 4.0));
//! ```

pub mod load_types;

use serde::{Deserialize, Serialize};

use crate::errors::BeamResult;

pub use load_types::LoadKind;

/// A single action applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Distance from the left end of the beam
    pub position: f64,
    /// Kind of action
    pub kind: LoadKind,
    /// Force (upward positive) or couple (counter-clockwise positive)
    pub magnitude: f64,
}

impl Load {
    /// Create a load of any kind
    pub fn new(position: f64, kind: LoadKind, magnitude: f64) -> Self {
        Load {
            position,
            kind,
            magnitude,
        }
    }

    /// Create a load from an input code such as `"POINT"`.
    ///
    /// Fails with `InvalidKind` for unrecognised codes.
    pub fn parse(position: f64, kind: &str, magnitude: f64) -> BeamResult<Self> {
        Ok(Self::new(position, kind.parse()?, magnitude))
    }

    /// Concentrated force
    pub fn point(position: f64, magnitude: f64) -> Self {
        Self::new(position, LoadKind::Point, magnitude)
    }

    /// Concentrated couple
    pub fn moment(position: f64, magnitude: f64) -> Self {
        Self::new(position, LoadKind::Moment, magnitude)
    }

    /// Net vertical force contributed to equilibrium
    pub fn force(&self) -> f64 {
        match self.kind {
            LoadKind::Point => self.magnitude,
            _ => 0.0,
        }
    }

    /// Moment about the origin contributed to equilibrium.
    ///
    /// A force contributes `magnitude·position`; a couple contributes its
    /// magnitude wherever it acts.
    pub fn moment_about_origin(&self) -> f64 {
        match self.kind {
            LoadKind::Point => self.magnitude * self.position,
            LoadKind::Moment => self.magnitude,
            _ => 0.0,
        }
    }
}
