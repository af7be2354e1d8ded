//! Beam analysis pipeline
//!
//! [`BeamSolver`] holds one beam (span, supports, loads, section) and runs the
//! pipeline on [`BeamSolver::analyse`]:
//!
//! ```text
//! classify ──┬── Mechanism      → nothing to solve
//!            ├── Determinate    → closed-form reactions   (determinate)
//!            └── Indeterminate  → force method            (force_method)
//!                                   │
//!            reactions written back into the supports,
//!            bending moment / slope / deflection term lists stored
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::analysis::{BeamSolver, Determinacy};
//! use beam_core::loads::Load;
//! use beam_core::supports::Support;
//!
//! let mut solver = BeamSolver::new();
//! solver.initialise(
//!     vec![Support::pin(0.0), Support::roller(5.0)],
//!     vec![Load::point(3.0, 1.0)],
//!     5.0,
//! );
//! assert_eq!(solver.analyse().unwrap(), Determinacy::Determinate);
//! assert_eq!(solver.bending_moment_equation().len(), 3);
//! ```

pub mod determinacy;
pub mod determinate;
pub mod equilibrium;
pub mod force_method;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use determinacy::{classify, Determinacy, DeterminacyReport};
pub use equilibrium::{check_equilibrium, EquilibriumResidual};
pub use force_method::{Redundant, RedundantAction};

use crate::errors::BeamResult;
use crate::loads::Load;
use crate::math::linalg::DEFAULT_SINGULAR_TOLERANCE;
use crate::section::SectionProperties;
use crate::singularity::{format_terms, SingularityFunction};
use crate::supports::Support;

/// Numerical options for an analysis run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Residual above which the equilibrium check logs a warning
    pub equilibrium_tolerance: f64,
    /// Relative pivot size below which the flexibility matrix is singular
    pub singular_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            equilibrium_tolerance: 1e-6,
            singular_tolerance: DEFAULT_SINGULAR_TOLERANCE,
        }
    }
}

impl AnalysisOptions {
    /// Set the equilibrium residual tolerance
    pub fn with_equilibrium_tolerance(mut self, tolerance: f64) -> Self {
        self.equilibrium_tolerance = tolerance;
        self
    }

    /// Set the singular-matrix pivot tolerance
    pub fn with_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.singular_tolerance = tolerance;
        self
    }
}

/// Serializable snapshot of a solver after analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub span: f64,
    pub determinacy: Option<DeterminacyReport>,
    pub supports: Vec<Support>,
    pub loads: Vec<Load>,
    /// Released restraints (indeterminate beams only)
    pub redundants: Vec<Redundant>,
    pub bending_moment: Vec<SingularityFunction>,
    pub slope: Vec<SingularityFunction>,
    pub deflection: Vec<SingularityFunction>,
    /// Equation text of the three lists, in the same order
    pub bending_moment_text: String,
    pub slope_text: String,
    pub deflection_text: String,
    pub equilibrium: Option<EquilibriumResidual>,
}

/// Beam model plus the results of its most recent analysis
#[derive(Debug, Clone, Default)]
pub struct BeamSolver {
    span: f64,
    supports: Vec<Support>,
    loads: Vec<Load>,
    section: SectionProperties,
    options: AnalysisOptions,
    determinacy: Option<DeterminacyReport>,
    redundants: Vec<Redundant>,
    bending_moment: Vec<SingularityFunction>,
    slope: Vec<SingularityFunction>,
    deflection: Vec<SingularityFunction>,
}

impl BeamSolver {
    /// Empty solver with unit section properties and default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given section properties for slope and deflection
    pub fn with_section(mut self, section: SectionProperties) -> Self {
        self.section = section;
        self
    }

    /// Use the given numerical options
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the beam model. Previous results are discarded.
    pub fn initialise(&mut self, supports: Vec<Support>, loads: Vec<Load>, span: f64) {
        self.supports = supports;
        self.loads = loads;
        self.span = span;
        self.reset_analysis();
    }

    /// Forget the classification and equation lists.
    ///
    /// Reactions stored on the supports are kept; see
    /// [`BeamSolver::clear_reactions`].
    pub fn reset_analysis(&mut self) {
        self.determinacy = None;
        self.redundants.clear();
        self.bending_moment.clear();
        self.slope.clear();
        self.deflection.clear();
    }

    /// Unset every support reaction
    pub fn clear_reactions(&mut self) {
        self.supports.iter_mut().for_each(Support::clear_reactions);
    }

    /// Classify the current support set without solving
    pub fn check_determinacy(&self) -> DeterminacyReport {
        classify(&self.supports)
    }

    /// Run the analysis.
    ///
    /// On success the reactions are written into the supports and the three
    /// equation lists replaced. A mechanism is reported, not treated as an
    /// error: its lists stay empty and no reaction is written. On error
    /// nothing is written.
    pub fn analyse(&mut self) -> BeamResult<Determinacy> {
        self.reset_analysis();
        self.section.validate()?;

        let report = classify(&self.supports);
        debug!(
            "classified {} supports: {} (r = {})",
            self.supports.len(),
            report.classification,
            report.reaction_count
        );

        match report.classification {
            Determinacy::Mechanism => {
                warn!(
                    "beam is a mechanism (r = {}, {} rollers); no reactions computed",
                    report.reaction_count, report.rollers
                );
            }
            Determinacy::Determinate => {
                let solution = determinate::solve(&self.supports, &self.loads, &self.section)?;
                self.write_reactions(&solution.reactions.forces, &solution.reactions.moments);
                self.bending_moment = solution.bending_moment;
                self.slope = solution.slope;
                self.deflection = solution.deflection;
            }
            Determinacy::Indeterminate => {
                let solution =
                    force_method::solve(&self.supports, &self.loads, self.span, &self.section, &self.options)?;
                self.write_reactions(&solution.support_forces, &solution.support_moments);
                self.redundants = solution.decomposition.redundants;
                self.bending_moment = solution.bending_moment;
                self.slope = solution.slope;
                self.deflection = solution.deflection;
            }
        }

        if report.classification != Determinacy::Mechanism {
            let residual = check_equilibrium(&self.supports, &self.loads);
            if !residual.is_balanced(self.options.equilibrium_tolerance) {
                warn!(
                    "equilibrium residual above tolerance: force {:e}, moment {:e}",
                    residual.force, residual.moment
                );
            }
        }

        self.determinacy = Some(report);
        Ok(report.classification)
    }

    fn write_reactions(&mut self, forces: &[f64], moments: &[f64]) {
        for ((support, &force), &moment) in self.supports.iter_mut().zip(forces).zip(moments) {
            support.reaction_force = Some(force);
            support.reaction_moment = Some(moment);
        }
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Classification of the last successful analysis
    pub fn classification(&self) -> Option<Determinacy> {
        self.determinacy.map(|report| report.classification)
    }

    pub fn determinacy_report(&self) -> Option<&DeterminacyReport> {
        self.determinacy.as_ref()
    }

    /// Redundants released by the last indeterminate analysis
    pub fn redundants(&self) -> &[Redundant] {
        &self.redundants
    }

    /// Bending moment M(x) from the last analysis.
    ///
    /// A reaction couple Mr at a fixed support xₛ enters with opposite signs
    /// on the two paths. Determinate beams publish the step (−Mr)·⟨x−xₛ⟩⁰, so
    /// a cantilever's M(0) equals −Mr. Indeterminate beams publish the
    /// free-body diagram with (+Mr)·⟨x−xₛ⟩⁰, the form the compatibility
    /// integrals are built from. Deflection is unaffected by the choice on
    /// the determinate path because its end conditions are fitted to it.
    pub fn bending_moment_equation(&self) -> &[SingularityFunction] {
        &self.bending_moment
    }

    pub fn slope_equation(&self) -> &[SingularityFunction] {
        &self.slope
    }

    pub fn deflection_equation(&self) -> &[SingularityFunction] {
        &self.deflection
    }

    /// Snapshot of the model and its results, ready for JSON output
    pub fn report(&self) -> AnalysisReport {
        let equilibrium = match self.classification() {
            Some(Determinacy::Determinate) | Some(Determinacy::Indeterminate) => {
                Some(check_equilibrium(&self.supports, &self.loads))
            }
            _ => None,
        };

        AnalysisReport {
            span: self.span,
            determinacy: self.determinacy,
            supports: self.supports.clone(),
            loads: self.loads.clone(),
            redundants: self.redundants.clone(),
            bending_moment: self.bending_moment.clone(),
            slope: self.slope.clone(),
            deflection: self.deflection.clone(),
            bending_moment_text: format_terms(&self.bending_moment),
            slope_text: format_terms(&self.slope),
            deflection_text: format_terms(&self.deflection),
            equilibrium,
        }
    }
}
