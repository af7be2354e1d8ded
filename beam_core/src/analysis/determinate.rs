//! Closed-form solution of statically determinate beams
//!
//! Two arrangements have closed forms:
//!
//! ```text
//!  Two supports (pin + roller)          One support (fixed / cantilever)
//!
//!        P                                         P
//!        ↓                                 ▌       ↓
//!    ────┬────────────                     ▌───────┬────
//!    △                 ○                   ▌
//!   R1                 R2                 R, Mr
//! ```
//!
//! ## Sign Convention
//!
//! - Forces and reactions: upward positive
//! - Couples and reaction moments: counter-clockwise positive
//! - Equilibrium: `ΣR + ΣP = 0` and `Σ R·x + ΣMr + Σ P·a + Σ m = 0`
//!
//! The moment diagram is built term by term: a force `F` at `a` contributes
//! `(−F)·⟨x−a⟩¹`, an applied couple `m` contributes `m·⟨x−a⟩⁰`.

use log::debug;

use crate::errors::{BeamError, BeamResult};
use crate::loads::{Load, LoadKind};
use crate::math::{self, BoundaryCondition};
use crate::section::SectionProperties;
use crate::singularity::{SingularityFunction, LIKE_TERM_TOLERANCE};
use crate::supports::Support;

/// Reactions of a determinate arrangement, index-aligned with its supports
#[derive(Debug, Clone, PartialEq)]
pub struct Reactions {
    /// Vertical reaction of each support (upward positive)
    pub forces: Vec<f64>,
    /// Moment reaction of each support (counter-clockwise positive)
    pub moments: Vec<f64>,
}

/// Boundary conditions used to fix the deflection integration constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryType {
    /// Built-in end: zero slope and zero deflection at `position`
    Cantilever { position: f64 },
    /// Zero deflection at two points
    TwoPoint { first: f64, second: f64 },
}

impl BoundaryType {
    /// Boundary type matching a determinate support arrangement
    pub fn for_supports(supports: &[Support]) -> BeamResult<Self> {
        match supports {
            [only] => Ok(BoundaryType::Cantilever {
                position: only.position,
            }),
            [first, second] => Ok(BoundaryType::TwoPoint {
                first: first.position,
                second: second.position,
            }),
            _ => Err(unsupported_count(supports.len())),
        }
    }
}

/// Full determinate solution
#[derive(Debug, Clone, PartialEq)]
pub struct DeterminateSolution {
    pub reactions: Reactions,
    pub bending_moment: Vec<SingularityFunction>,
    pub slope: Vec<SingularityFunction>,
    pub deflection: Vec<SingularityFunction>,
}

/// Solve a determinate beam: reactions, moment, slope and deflection.
pub fn solve(
    supports: &[Support],
    loads: &[Load],
    section: &SectionProperties,
) -> BeamResult<DeterminateSolution> {
    let reactions = solve_reactions(supports, loads)?;
    let bending_moment = bending_moment(supports, &reactions, loads);
    let boundary = BoundaryType::for_supports(supports)?;
    let deflection = deflection(&bending_moment, boundary, section)?;
    let slope = slope(&deflection);

    debug!(
        "determinate solve: forces {:?}, moments {:?}, {} moment terms",
        reactions.forces,
        reactions.moments,
        bending_moment.len()
    );

    Ok(DeterminateSolution {
        reactions,
        bending_moment,
        slope,
        deflection,
    })
}

/// Reactions from force and moment equilibrium.
///
/// With `ΣF` the sum of applied forces and `ΣM` their moment about the
/// origin (couples included at face value):
///
/// - two supports: `R1 = (x2·ΣF − ΣM)/(x1 − x2)`, `R2 = −R1 − ΣF`, no moments
/// - one support: `R = −ΣF`, `Mr = −R·x0 − ΣM`
///
/// Returns fresh values; the supports themselves are not modified.
pub fn solve_reactions(supports: &[Support], loads: &[Load]) -> BeamResult<Reactions> {
    ensure_closed_form(loads)?;

    let total_force: f64 = loads.iter().map(Load::force).sum();
    let total_moment: f64 = loads.iter().map(Load::moment_about_origin).sum();

    match supports {
        [fixed] => {
            let force = -total_force;
            let moment = -force * fixed.position - total_moment;
            Ok(Reactions {
                forces: vec![force],
                moments: vec![moment],
            })
        }
        [first, second] => {
            let (x1, x2) = (first.position, second.position);
            if (x1 - x2).abs() < LIKE_TERM_TOLERANCE {
                return Err(BeamError::unsupported(format!(
                    "two supports at the same position ({})",
                    x1
                )));
            }
            let r1 = (x2 * total_force - total_moment) / (x1 - x2);
            let r2 = -r1 - total_force;
            Ok(Reactions {
                forces: vec![r1, r2],
                moments: vec![0.0, 0.0],
            })
        }
        _ => Err(unsupported_count(supports.len())),
    }
}

/// Bending-moment terms of a solved determinate beam.
///
/// Each support contributes `(−R)·⟨x−xₛ⟩¹` and a reaction-moment step
/// `(−Mr)·⟨x−xₛ⟩⁰`; each load contributes its own term. The list is
/// simplified.
pub fn bending_moment(
    supports: &[Support],
    reactions: &Reactions,
    loads: &[Load],
) -> Vec<SingularityFunction> {
    moment_terms(supports, reactions, loads, -1.0)
}

/// Self-equilibrated moment diagram of a solved determinate beam.
///
/// Same as [`bending_moment`] except that reaction moments enter as
/// `(+Mr)·⟨x−xₛ⟩⁰`, matching the couple convention of the equilibrium
/// equations, so the diagram returns to zero past the last action. The two
/// agree whenever every reaction moment is zero.
pub fn free_body_moment(
    supports: &[Support],
    reactions: &Reactions,
    loads: &[Load],
) -> Vec<SingularityFunction> {
    moment_terms(supports, reactions, loads, 1.0)
}

fn moment_terms(
    supports: &[Support],
    reactions: &Reactions,
    loads: &[Load],
    reaction_moment_sign: f64,
) -> Vec<SingularityFunction> {
    let mut terms = Vec::with_capacity(2 * supports.len() + loads.len());

    for ((support, force), moment) in supports
        .iter()
        .zip(&reactions.forces)
        .zip(&reactions.moments)
    {
        terms.push(SingularityFunction::new(support.position, -force, 1));
        terms.push(SingularityFunction::new(
            support.position,
            reaction_moment_sign * moment,
            0,
        ));
    }

    for load in loads {
        match load.kind {
            LoadKind::Point => terms.push(SingularityFunction::new(load.position, -load.magnitude, 1)),
            LoadKind::Moment => terms.push(SingularityFunction::new(load.position, load.magnitude, 0)),
            // Rejected by solve_reactions
            LoadKind::Uniform | LoadKind::Triangle => {}
        }
    }

    math::simplify(&terms)
}

/// Deflection from a moment diagram.
///
/// The moment list is integrated twice with the constants fixed by
/// `boundary`, then negated (the moment sign convention gives the negative
/// of the physical deflection) and divided by `E·I`.
pub fn deflection(
    moment: &[SingularityFunction],
    boundary: BoundaryType,
    section: &SectionProperties,
) -> BeamResult<Vec<SingularityFunction>> {
    let integrated = match boundary {
        BoundaryType::Cantilever { position } => math::double_integrate_one_constant(
            moment,
            BoundaryCondition::zero_at(position),
            BoundaryCondition::zero_at(position),
        ),
        BoundaryType::TwoPoint { first, second } => math::double_integrate_two_constants(
            moment,
            BoundaryCondition::zero_at(first),
            BoundaryCondition::zero_at(second),
        )?,
    };

    let factor = -1.0 / section.flexural_rigidity();
    Ok(math::simplify(&math::scaled(&integrated, factor)))
}

/// Slope as the derivative of the deflection list
pub fn slope(deflection: &[SingularityFunction]) -> Vec<SingularityFunction> {
    math::simplify(&math::differentiate(deflection))
}

fn ensure_closed_form(loads: &[Load]) -> BeamResult<()> {
    match loads.iter().find(|load| !load.kind.has_closed_form()) {
        Some(load) => Err(BeamError::unsupported(format!(
            "{} load at {} has no closed-form terms",
            load.kind, load.position
        ))),
        None => Ok(()),
    }
}

fn unsupported_count(count: usize) -> BeamError {
    BeamError::unsupported(format!(
        "determinate solver handles one or two supports, got {}",
        count
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::evaluate;
    use approx::assert_abs_diff_eq;

    fn simply_supported() -> Vec<Support> {
        vec![Support::pin(0.0), Support::roller(5.0)]
    }

    #[test]
    fn test_two_support_reactions() {
        let reactions = solve_reactions(&simply_supported(), &[Load::point(3.0, 1.0)]).unwrap();
        assert_abs_diff_eq!(reactions.forces[0], -0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(reactions.forces[1], -0.6, epsilon = 1e-12);
        assert_eq!(reactions.moments, vec![0.0, 0.0]);
    }

    #[test]
    fn test_cantilever_reactions() {
        let reactions = solve_reactions(&[Support::fixed(0.0)], &[Load::point(3.0, 1.0)]).unwrap();
        assert_eq!(reactions.forces, vec![-1.0]);
        assert_eq!(reactions.moments, vec![-3.0]);
    }

    #[test]
    fn test_applied_couple_on_simple_span() {
        // Couple m = 2 on a 4-long span: reactions form a balancing couple
        let supports = vec![Support::pin(0.0), Support::roller(4.0)];
        let loads = [Load::moment(1.0, 2.0)];
        let reactions = solve_reactions(&supports, &loads).unwrap();
        assert_abs_diff_eq!(reactions.forces[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(reactions.forces[1], -0.5, epsilon = 1e-12);

        // Diagram closes to zero beyond the last action
        let moment = bending_moment(&supports, &reactions, &loads);
        assert_abs_diff_eq!(evaluate(&moment, 4.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evaluate(&moment, 6.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reactions_are_not_written_to_supports() {
        let supports = simply_supported();
        solve_reactions(&supports, &[Load::point(3.0, 1.0)]).unwrap();
        assert!(supports.iter().all(|s| s.reaction_force.is_none()));
    }

    #[test]
    fn test_unsupported_support_counts() {
        let loads = [Load::point(1.0, 1.0)];
        assert!(solve_reactions(&[], &loads).is_err());
        let three = [Support::pin(0.0), Support::roller(1.0), Support::roller(2.0)];
        let err = solve_reactions(&three, &loads).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_coincident_supports_rejected() {
        let supports = [Support::pin(2.0), Support::roller(2.0)];
        assert!(solve_reactions(&supports, &[Load::point(1.0, 1.0)]).is_err());
    }

    #[test]
    fn test_distributed_load_rejected() {
        let loads = [Load::new(1.0, LoadKind::Uniform, -2.0)];
        let err = solve_reactions(&simply_supported(), &loads).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_CONFIGURATION");
    }

    #[test]
    fn test_free_body_moment_closes_for_cantilever() {
        let supports = [Support::fixed(0.0)];
        let loads = [Load::point(3.0, 1.0)];
        let reactions = solve_reactions(&supports, &loads).unwrap();

        let diagram = free_body_moment(&supports, &reactions, &loads);
        assert_abs_diff_eq!(evaluate(&diagram, 0.0), -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evaluate(&diagram, 4.0), 0.0, epsilon = 1e-12);

        let published = bending_moment(&supports, &reactions, &loads);
        assert_abs_diff_eq!(evaluate(&published, 0.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_section_scales_deflection() {
        let supports = simply_supported();
        let loads = [Load::point(3.0, 1.0)];
        let unit = solve(&supports, &loads, &SectionProperties::default()).unwrap();
        let stiff = solve(&supports, &loads, &SectionProperties::new(4.0, 2.5)).unwrap();

        for x in [1.0, 2.5, 3.0, 4.0] {
            assert_abs_diff_eq!(
                evaluate(&stiff.deflection, x),
                evaluate(&unit.deflection, x) / 10.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_slope_is_derivative_of_deflection() {
        let solution = solve(&simply_supported(), &[Load::point(3.0, 1.0)], &SectionProperties::default()).unwrap();
        let h = 1e-6;
        for x in [0.5, 2.0, 4.0] {
            let numeric = (evaluate(&solution.deflection, x + h) - evaluate(&solution.deflection, x - h)) / (2.0 * h);
            assert_abs_diff_eq!(evaluate(&solution.slope, x), numeric, epsilon = 1e-6);
        }
    }
}
