//! # Analysis Math
//!
//! Operations on lists of [`SingularityFunction`] terms. A list is an
//! additive representation of one function of position: its value at `x`
//! is the sum of every term's value at `x`, regardless of order.
//!
//! ## Modules
//!
//! - [`integration`] - indefinite integrals and boundary-condition constants
//! - [`quadrature`] - Gauss-Legendre integration of products of term lists
//! - [`linalg`] - dense linear solve for the flexibility equations
//!
//! ## Example
//!
//! ```rust
//! use beam_core::math::{evaluate, simplify};
//! use beam_core::singularity::SingularityFunction;
//!
//! // 0.5<x-3> - <x-5>^2 + 2<x-7>^3
//! let terms = vec![
//!     SingularityFunction::new(3.0, 0.5, 1),
//!     SingularityFunction::new(5.0, -1.0, 2),
//!     SingularityFunction::new(7.0, 2.0, 3),
//! ];
//! assert_eq!(evaluate(&terms, 5.5), 1.0);
//! assert_eq!(simplify(&terms).len(), 3);
//! ```

pub mod integration;
pub mod linalg;
pub mod quadrature;

use crate::errors::{BeamError, BeamResult};
use crate::singularity::SingularityFunction;

pub use integration::{
    double_integrate, double_integrate_list, double_integrate_one_constant,
    double_integrate_two_constants, integrate, integrate_list, integrate_with_constant,
    BoundaryCondition,
};
pub use linalg::solve_dense;
pub use quadrature::{integrate_product, GAUSS_LEGENDRE_5};

/// Add two like terms.
///
/// Fails with [`BeamError::IncompatibleTerm`] if the domain starts or
/// exponents differ.
pub fn add(a: &SingularityFunction, b: &SingularityFunction) -> BeamResult<SingularityFunction> {
    if !a.is_like(b) {
        return Err(BeamError::incompatible_term(a.to_string(), b.to_string()));
    }
    Ok(SingularityFunction::new(
        a.domain_start,
        a.scale + b.scale,
        a.exponent,
    ))
}

/// Sum of every term evaluated at `x`
pub fn evaluate(terms: &[SingularityFunction], x: f64) -> f64 {
    terms.iter().map(|term| term.evaluate(x)).sum()
}

/// Merge like terms and drop zero terms.
///
/// Each group of like terms collapses onto its first occurrence, so the
/// surviving order follows first appearance. The result never has more
/// terms than the input and simplifying it again changes nothing.
pub fn simplify(terms: &[SingularityFunction]) -> Vec<SingularityFunction> {
    let mut merged: Vec<SingularityFunction> = Vec::with_capacity(terms.len());

    for term in terms.iter().filter(|t| !t.is_zero()) {
        match merged.iter_mut().find(|m| m.is_like(term)) {
            Some(existing) => existing.scale += term.scale,
            None => merged.push(*term),
        }
    }

    merged.retain(|term| !term.is_zero());
    merged
}

/// Superpose two functions: the union of both term lists, simplified.
pub fn merge(a: &[SingularityFunction], b: &[SingularityFunction]) -> Vec<SingularityFunction> {
    let combined: Vec<SingularityFunction> = a.iter().chain(b.iter()).copied().collect();
    simplify(&combined)
}

/// Multiply the whole function by `factor`
pub fn scaled(terms: &[SingularityFunction], factor: f64) -> Vec<SingularityFunction> {
    terms.iter().map(|term| term.scaled(factor)).collect()
}

/// Derivative with respect to x.
///
/// `d/dx k⟨x−a⟩ⁿ = k·n⟨x−a⟩ⁿ⁻¹`; steps vanish (the impulse at `a` is not
/// represented).
pub fn differentiate(terms: &[SingularityFunction]) -> Vec<SingularityFunction> {
    terms
        .iter()
        .filter(|term| term.exponent > 0)
        .map(|term| {
            SingularityFunction::new(
                term.domain_start,
                term.scale * term.exponent as f64,
                term.exponent - 1,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn same_term(a: &SingularityFunction, b: &SingularityFunction) -> bool {
        a.is_like(b) && (a.scale - b.scale).abs() < 1e-6
    }

    fn contains(terms: &[SingularityFunction], expected: &SingularityFunction) -> bool {
        terms.iter().any(|t| same_term(t, expected))
    }

    #[test]
    fn test_add_like_terms() {
        let a = SingularityFunction::new(3.0, 0.5, 1);
        let b = SingularityFunction::new(3.0, -1.0, 1);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.domain_start, 3.0);
        assert_eq!(sum.scale, -0.5);
        assert_eq!(sum.exponent, 1);
    }

    #[test]
    fn test_add_rejects_unlike_terms() {
        let a = SingularityFunction::new(3.0, 0.5, 1);
        let other_domain = SingularityFunction::new(4.0, -1.0, 1);
        let other_exponent = SingularityFunction::new(3.0, 2.0, 2);

        for (left, right) in [(&a, &other_domain), (&a, &other_exponent), (&other_domain, &other_exponent)] {
            let err = add(left, right).unwrap_err();
            assert_eq!(err.error_code(), "INCOMPATIBLE_TERM");
        }
    }

    #[test]
    fn test_add_within_tolerance() {
        let a = SingularityFunction::new(2.0, 1.25, 3);
        let b = SingularityFunction::new(2.0 + 1e-7, 0.75, 3);
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.scale, 2.0);
        assert_eq!(sum.domain_start, 2.0);
    }

    #[test]
    fn test_evaluate_list() {
        let terms = vec![
            SingularityFunction::new(3.0, 0.5, 1),
            SingularityFunction::new(5.0, -1.0, 2),
            SingularityFunction::new(7.0, 2.0, 3),
        ];
        assert_eq!(evaluate(&terms, 5.5), 1.0);
    }

    #[test]
    fn test_evaluate_below_every_domain_start() {
        let terms = vec![
            SingularityFunction::new(1.0, 3.0, 0),
            SingularityFunction::new(2.0, -4.0, 1),
            SingularityFunction::new(6.0, 9.0, 4),
        ];
        assert_eq!(evaluate(&terms, 0.999), 0.0);
        assert_eq!(evaluate(&terms, -10.0), 0.0);
        assert_eq!(evaluate(&[], 3.0), 0.0);
    }

    #[test]
    fn test_simplify() {
        let terms = vec![
            SingularityFunction::new(3.0, 1.0, 2),
            SingularityFunction::new(2.0, 2.0, 1),
            SingularityFunction::new(2.0, 0.0, 4),
            SingularityFunction::new(2.0, -4.5, 1),
            SingularityFunction::new(4.0, 1.0, 2),
        ];

        let simplified = simplify(&terms);

        assert_eq!(simplified.len(), 3);
        assert!(contains(&simplified, &SingularityFunction::new(3.0, 1.0, 2)));
        assert!(contains(&simplified, &SingularityFunction::new(2.0, -2.5, 1)));
        assert!(contains(&simplified, &SingularityFunction::new(4.0, 1.0, 2)));
    }

    #[test]
    fn test_simplify_drops_cancelled_terms() {
        let terms = vec![
            SingularityFunction::new(1.0, 2.0, 1),
            SingularityFunction::new(1.0, -2.0, 1),
        ];
        assert!(simplify(&terms).is_empty());
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let terms = vec![
            SingularityFunction::new(0.0, 0.4, 1),
            SingularityFunction::new(5.0, 0.6, 1),
            SingularityFunction::new(0.0, 0.0, 0),
            SingularityFunction::new(3.0, -1.0, 1),
            SingularityFunction::new(0.0, 0.1, 1),
            SingularityFunction::new(5.0, 0.6, 0),
        ];
        let once = simplify(&terms);
        let twice = simplify(&once);

        assert!(once.len() <= terms.len());
        assert_eq!(once.len(), twice.len());
        for term in &once {
            assert!(contains(&twice, term));
        }
        for x in [0.0, 2.5, 3.0, 4.9, 5.0, 7.0] {
            assert_abs_diff_eq!(evaluate(&terms, x), evaluate(&once, x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_merge_is_union() {
        let a = vec![
            SingularityFunction::new(0.0, 1.0, 1),
            SingularityFunction::new(3.0, -1.0, 1),
        ];
        let b = vec![
            SingularityFunction::new(0.0, 0.5, 1),
            SingularityFunction::new(4.0, 2.0, 0),
        ];

        let merged = merge(&a, &b);

        assert_eq!(merged.len(), 3);
        assert!(contains(&merged, &SingularityFunction::new(0.0, 1.5, 1)));
        assert!(contains(&merged, &SingularityFunction::new(3.0, -1.0, 1)));
        assert!(contains(&merged, &SingularityFunction::new(4.0, 2.0, 0)));
        for x in [0.0, 1.0, 3.5, 4.0, 8.0] {
            assert_abs_diff_eq!(evaluate(&merged, x), evaluate(&a, x) + evaluate(&b, x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_merge_with_empty_keeps_other_side() {
        let a = vec![SingularityFunction::new(1.0, 2.0, 2)];
        assert_eq!(merge(&a, &[]), a);
        assert_eq!(merge(&[], &a), a);
    }

    #[test]
    fn test_scaled() {
        let terms = vec![SingularityFunction::new(1.0, 2.0, 2), SingularityFunction::new(0.0, -3.0, 0)];
        let negated = scaled(&terms, -1.0);
        assert_eq!(negated[0].scale, -2.0);
        assert_eq!(negated[1].scale, 3.0);
    }

    #[test]
    fn test_differentiate() {
        let terms = vec![
            SingularityFunction::new(3.0, 1.0 / 3.0, 3),
            SingularityFunction::new(2.0, 4.0, 1),
            SingularityFunction::constant(7.0),
        ];
        let derivative = differentiate(&terms);
        assert_eq!(derivative.len(), 2);
        assert!(contains(&derivative, &SingularityFunction::new(3.0, 1.0, 2)));
        assert!(contains(&derivative, &SingularityFunction::new(2.0, 4.0, 0)));
    }
}
