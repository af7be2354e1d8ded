//! Integration of singularity-function lists
//!
//! Integrating `k⟨x−a⟩ⁿ` keeps the domain start: `∫ k⟨x−a⟩ⁿ dx = k/(n+1)·⟨x−a⟩ⁿ⁺¹`.
//! Integration constants are appended as terms starting at `x = 0`, so they
//! are active over the whole beam:
//!
//! - one constant → `c·⟨x−0⟩⁰`
//! - two constants → `c1·⟨x−0⟩¹ + c2·⟨x−0⟩⁰`
//!
//! The constants are fixed by boundary conditions: known values of the
//! integrated function at given positions.

use serde::{Deserialize, Serialize};

use super::evaluate;
use crate::errors::{BeamError, BeamResult};
use crate::singularity::{SingularityFunction, LIKE_TERM_TOLERANCE};

/// A known value of a function at a position, e.g. zero deflection at a support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCondition {
    /// Position along the beam
    pub position: f64,
    /// Required function value there
    pub value: f64,
}

impl BoundaryCondition {
    /// Create a boundary condition `f(position) = value`
    pub fn new(position: f64, value: f64) -> Self {
        BoundaryCondition { position, value }
    }

    /// `f(position) = 0`
    pub fn zero_at(position: f64) -> Self {
        Self::new(position, 0.0)
    }
}

impl From<(f64, f64)> for BoundaryCondition {
    fn from((position, value): (f64, f64)) -> Self {
        Self::new(position, value)
    }
}

/// Indefinite integral of one term (no constant)
pub fn integrate(term: &SingularityFunction) -> SingularityFunction {
    let power = term.exponent + 1;
    SingularityFunction::new(term.domain_start, term.scale / power as f64, power)
}

/// Indefinite integral of every term (no constant)
pub fn integrate_list(terms: &[SingularityFunction]) -> Vec<SingularityFunction> {
    terms.iter().map(integrate).collect()
}

/// Two-fold indefinite integral of one term: `k/((n+1)(n+2))·⟨x−a⟩ⁿ⁺²`
pub fn double_integrate(term: &SingularityFunction) -> SingularityFunction {
    integrate(&integrate(term))
}

/// Two-fold indefinite integral of every term (no constants)
pub fn double_integrate_list(terms: &[SingularityFunction]) -> Vec<SingularityFunction> {
    terms.iter().map(double_integrate).collect()
}

/// Integrate once and append the constant that satisfies `bc` exactly.
///
/// `c = bc.value − I(bc.position)` where `I` is the indefinite integral.
pub fn integrate_with_constant(
    terms: &[SingularityFunction],
    bc: BoundaryCondition,
) -> Vec<SingularityFunction> {
    let mut integrated = integrate_list(terms);
    let constant = bc.value - evaluate(&integrated, bc.position);
    integrated.push(SingularityFunction::constant(constant));
    integrated
}

/// Integrate twice and solve for `c1·x + c2` so the result passes through
/// both boundary conditions.
///
/// With `I` the two-fold indefinite integral:
///
/// ```text
/// c1 = ((y2 − y1) + (I(x1) − I(x2))) / (x2 − x1)
/// c2 = y1 − I(x1) − c1·x1
/// ```
///
/// Used for two displacement conditions, e.g. a simply supported span.
/// Fails if both conditions sit at the same position.
pub fn double_integrate_two_constants(
    terms: &[SingularityFunction],
    bc1: BoundaryCondition,
    bc2: BoundaryCondition,
) -> BeamResult<Vec<SingularityFunction>> {
    let (x1, y1) = (bc1.position, bc1.value);
    let (x2, y2) = (bc2.position, bc2.value);

    if (x2 - x1).abs() < LIKE_TERM_TOLERANCE {
        return Err(BeamError::invalid_input(
            "boundary_conditions",
            format!("x1 = {}, x2 = {}", x1, x2),
            "Boundary conditions must be at distinct positions",
        ));
    }

    let mut integrated = double_integrate_list(terms);
    let i1 = evaluate(&integrated, x1);
    let i2 = evaluate(&integrated, x2);

    let c1 = ((y2 - y1) + (i1 - i2)) / (x2 - x1);
    let c2 = y1 - i1 - c1 * x1;

    integrated.push(SingularityFunction::new(0.0, c1, 1));
    integrated.push(SingularityFunction::constant(c2));
    Ok(integrated)
}

/// Integrate twice, fixing the first constant with `slope_bc` and the second
/// with `value_bc`.
///
/// Used where one point fixes both rotation and position, e.g. the built-in
/// end of a cantilever with both conditions `(x0, 0)`.
pub fn double_integrate_one_constant(
    terms: &[SingularityFunction],
    slope_bc: BoundaryCondition,
    value_bc: BoundaryCondition,
) -> Vec<SingularityFunction> {
    let slope = integrate_with_constant(terms, slope_bc);
    integrate_with_constant(&slope, value_bc)
}
