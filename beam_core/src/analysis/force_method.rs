//! Force method (unit-load / virtual work) for statically indeterminate beams
//!
//! ## Procedure
//!
//! 1. Release supports until a determinate *primary* structure remains: a
//!    cantilever from the first fixed support, otherwise the first two
//!    non-fixed supports.
//! 2. Every released restraint becomes a *redundant* `Xᵢ`: a vertical force
//!    at each released support, plus a couple at released fixed supports.
//! 3. Moment diagrams on the primary: `M₀` under the real loads, `Mᵢ` under a
//!    unit action in place of redundant `i`.
//! 4. Compatibility: released displacements must vanish,
//!
//! ```text
//!     Σⱼ Dᵢⱼ·Xⱼ = −Bᵢ      Dᵢⱼ = ∫₀ᴸ Mᵢ·Mⱼ dx      Bᵢ = ∫₀ᴸ M₀·Mᵢ dx
//! ```
//!
//! 5. Superpose `M = M₀ + Σ Xᵢ·Mᵢ` and integrate for slope and deflection
//!    with the primary's boundary conditions.
//!
//! `EI` is constant along the span, so it cancels from the compatibility
//! equations and only scales the final deflection.

use log::debug;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use super::determinate::{self, BoundaryType, Reactions};
use super::AnalysisOptions;
use crate::errors::{BeamError, BeamResult};
use crate::loads::Load;
use crate::math::{self, integrate_product, solve_dense};
use crate::section::SectionProperties;
use crate::singularity::SingularityFunction;
use crate::supports::{Support, SupportKind};

/// Restraint released at a redundant support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RedundantAction {
    /// Vertical reaction force
    Force,
    /// Reaction couple (fixed supports only)
    Moment,
}

/// One released restraint, tied to the support it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Redundant {
    /// Index into the beam's support list
    pub support_index: usize,
    /// Which reaction component is released
    pub action: RedundantAction,
    /// Position of the support
    pub position: f64,
}

impl Redundant {
    /// Unit action standing in for this redundant on the primary structure
    pub fn unit_load(&self) -> Load {
        match self.action {
            RedundantAction::Force => Load::point(self.position, 1.0),
            RedundantAction::Moment => Load::moment(self.position, 1.0),
        }
    }
}

/// Split of a support set into a determinate primary and its redundants
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Indices of the supports kept in the primary structure
    pub primary: Vec<usize>,
    /// Boundary conditions of the primary structure
    pub boundary: BoundaryType,
    /// Released restraints, in support order
    pub redundants: Vec<Redundant>,
}

impl Decomposition {
    /// Copies of the primary supports with their reactions cleared
    pub fn primary_supports(&self, supports: &[Support]) -> Vec<Support> {
        self.primary
            .iter()
            .map(|&index| Support::new(supports[index].position, supports[index].kind))
            .collect()
    }
}

/// Choose the primary structure and list the redundants.
pub fn decompose(supports: &[Support]) -> BeamResult<Decomposition> {
    let primary = match supports.iter().position(|s| s.kind == SupportKind::Fixed) {
        Some(fixed) => vec![fixed],
        None => {
            let pair: Vec<usize> = supports
                .iter()
                .enumerate()
                .filter(|(_, s)| s.kind != SupportKind::Fixed)
                .map(|(index, _)| index)
                .take(2)
                .collect();
            if pair.len() < 2 {
                return Err(BeamError::unsupported(
                    "no determinate primary structure: need a fixed support or two pin/roller supports",
                ));
            }
            pair
        }
    };

    let primary_supports: Vec<Support> = primary.iter().map(|&i| supports[i].clone()).collect();
    let boundary = BoundaryType::for_supports(&primary_supports)?;

    let mut redundants = Vec::new();
    for (index, support) in supports.iter().enumerate() {
        if primary.contains(&index) {
            continue;
        }
        redundants.push(Redundant {
            support_index: index,
            action: RedundantAction::Force,
            position: support.position,
        });
        if support.kind.restrains_rotation() {
            redundants.push(Redundant {
                support_index: index,
                action: RedundantAction::Moment,
                position: support.position,
            });
        }
    }

    Ok(Decomposition {
        primary,
        boundary,
        redundants,
    })
}

/// Result of a force-method analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ForceMethodSolution {
    pub decomposition: Decomposition,
    /// Solved redundant values, aligned with `decomposition.redundants`
    pub redundant_values: Vec<f64>,
    /// Flexibility matrix `D`
    pub flexibility: DMatrix<f64>,
    /// Load displacement vector `B`
    pub load_vector: DVector<f64>,
    /// Final reaction force of every support, in support order
    pub support_forces: Vec<f64>,
    /// Final reaction couple of every support (zero for pins and rollers)
    pub support_moments: Vec<f64>,
    pub bending_moment: Vec<SingularityFunction>,
    pub slope: Vec<SingularityFunction>,
    pub deflection: Vec<SingularityFunction>,
}

/// Analyse an indeterminate beam by the force method.
///
/// Pure: the supports are not modified. Fails with
/// [`BeamError::InvalidInput`] when a support or load lies outside
/// `[0, span]`, and with [`BeamError::SingularSystem`] when the compatibility equations have no
/// unique solution (e.g. two supports at the same position).
pub fn solve(
    supports: &[Support],
    loads: &[Load],
    span: f64,
    section: &SectionProperties,
    options: &AnalysisOptions,
) -> BeamResult<ForceMethodSolution> {
    if !(span > 0.0 && span.is_finite()) {
        return Err(BeamError::invalid_input(
            "span",
            span.to_string(),
            "Span must be positive to integrate over",
        ));
    }
    // Integration runs over [0, span]; anything outside it would be ignored
    let positions = supports
        .iter()
        .enumerate()
        .map(|(i, s)| (format!("supports[{}].position", i), s.position))
        .chain(loads.iter().enumerate().map(|(i, l)| (format!("loads[{}].position", i), l.position)));
    for (field, position) in positions {
        if !(position.is_finite() && (0.0..=span).contains(&position)) {
            return Err(BeamError::invalid_input(
                field,
                position.to_string(),
                format!("Position must lie within the span [0, {}]", span),
            ));
        }
    }

    let decomposition = decompose(supports)?;
    let primary = decomposition.primary_supports(supports);
    debug!(
        "force method: primary supports {:?} ({:?}), {} redundants",
        decomposition.primary,
        decomposition.boundary,
        decomposition.redundants.len()
    );

    // Primary structure under the real loads
    let primary_reactions = determinate::solve_reactions(&primary, loads)?;
    let primary_moment = determinate::free_body_moment(&primary, &primary_reactions, loads);

    // Primary structure under each unit action
    let mut unit_reactions = Vec::with_capacity(decomposition.redundants.len());
    let mut unit_moments = Vec::with_capacity(decomposition.redundants.len());
    for redundant in &decomposition.redundants {
        let unit = [redundant.unit_load()];
        let reactions = determinate::solve_reactions(&primary, &unit)?;
        unit_moments.push(determinate::free_body_moment(&primary, &reactions, &unit));
        unit_reactions.push(reactions);
    }

    let flexibility = flexibility_matrix(&unit_moments, span);
    let load_vector = load_vector(&primary_moment, &unit_moments, span);
    debug!("flexibility matrix {}x{}: {:?}", flexibility.nrows(), flexibility.ncols(), flexibility.as_slice());

    let rhs = -load_vector.clone();
    let redundant_values = solve_dense(&flexibility, &rhs, options.singular_tolerance)?;
    let redundant_values: Vec<f64> = redundant_values.iter().copied().collect();
    debug!("redundants solved: {:?}", redundant_values);

    let (support_forces, support_moments) = superpose_reactions(
        supports.len(),
        &decomposition,
        &primary_reactions,
        &unit_reactions,
        &redundant_values,
    );

    let bending_moment = unit_moments
        .iter()
        .zip(&redundant_values)
        .fold(primary_moment, |total, (unit, &value)| {
            math::merge(&total, &math::scaled(unit, value))
        });
    let deflection = determinate::deflection(&bending_moment, decomposition.boundary, section)?;
    let slope = determinate::slope(&deflection);

    Ok(ForceMethodSolution {
        decomposition,
        redundant_values,
        flexibility,
        load_vector,
        support_forces,
        support_moments,
        bending_moment,
        slope,
        deflection,
    })
}

/// `Dᵢⱼ = ∫₀ᴸ Mᵢ·Mⱼ dx`, every entry integrated on its own
pub fn flexibility_matrix(unit_moments: &[Vec<SingularityFunction>], span: f64) -> DMatrix<f64> {
    let size = unit_moments.len();
    DMatrix::from_fn(size, size, |i, j| {
        integrate_product(&unit_moments[i], &unit_moments[j], 0.0, span)
    })
}

/// `Bᵢ = ∫₀ᴸ M₀·Mᵢ dx`
pub fn load_vector(
    primary_moment: &[SingularityFunction],
    unit_moments: &[Vec<SingularityFunction>],
    span: f64,
) -> DVector<f64> {
    DVector::from_iterator(
        unit_moments.len(),
        unit_moments
            .iter()
            .map(|unit| integrate_product(primary_moment, unit, 0.0, span)),
    )
}

/// Final reactions: redundants take their solved value, primary supports
/// take `R₀ + Σ Xᵢ·Rᵢ`.
fn superpose_reactions(
    support_count: usize,
    decomposition: &Decomposition,
    primary_reactions: &Reactions,
    unit_reactions: &[Reactions],
    values: &[f64],
) -> (Vec<f64>, Vec<f64>) {
    let mut forces = vec![0.0; support_count];
    let mut moments = vec![0.0; support_count];

    for (slot, &index) in decomposition.primary.iter().enumerate() {
        forces[index] = primary_reactions.forces[slot]
            + unit_reactions
                .iter()
                .zip(values)
                .map(|(unit, x)| x * unit.forces[slot])
                .sum::<f64>();
        moments[index] = primary_reactions.moments[slot]
            + unit_reactions
                .iter()
                .zip(values)
                .map(|(unit, x)| x * unit.moments[slot])
                .sum::<f64>();
    }

    for (redundant, &value) in decomposition.redundants.iter().zip(values) {
        match redundant.action {
            RedundantAction::Force => forces[redundant.support_index] = value,
            RedundantAction::Moment => moments[redundant.support_index] = value,
        }
    }

    (forces, moments)
}
