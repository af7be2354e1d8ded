//! Gauss-Legendre quadrature of term-list products
//!
//! The virtual-work integral `∫ f·g dx` over the span is only piecewise
//! smooth: every domain start is a kink (or jump) in one of the factors. The
//! span is therefore cut at every domain start and the 5-point rule applied
//! to each piece, where the integrand is a single polynomial. The 5-point
//! rule is exact up to degree 9, which covers products of moment diagrams.

use super::evaluate;
use crate::singularity::{SingularityFunction, LIKE_TERM_TOLERANCE};

/// 5-point Gauss-Legendre abscissae and weights on `[-1, 1]`
pub const GAUSS_LEGENDRE_5: [(f64, f64); 5] = [
    (-0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
    (-0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.0, 0.568_888_888_888_888_9),
    (0.538_469_310_105_683_1, 0.478_628_670_499_366_5),
    (0.906_179_845_938_664_0, 0.236_926_885_056_189_1),
];

/// `∫ f(x)·g(x) dx` over `[start, end]`.
pub fn integrate_product(
    f: &[SingularityFunction],
    g: &[SingularityFunction],
    start: f64,
    end: f64,
) -> f64 {
    breakpoints(f, g, start, end)
        .windows(2)
        .map(|piece| {
            let (a, b) = (piece[0], piece[1]);
            let half_width = 0.5 * (b - a);
            let midpoint = 0.5 * (a + b);
            GAUSS_LEGENDRE_5
                .iter()
                .map(|&(xi, weight)| {
                    let x = midpoint + half_width * xi;
                    weight * evaluate(f, x) * evaluate(g, x)
                })
                .sum::<f64>()
                * half_width
        })
        .sum()
}

/// Sorted, de-duplicated partition of `[start, end]` at every domain start
/// of either function that falls strictly inside the interval.
fn breakpoints(f: &[SingularityFunction], g: &[SingularityFunction], start: f64, end: f64) -> Vec<f64> {
    let mut points = vec![start, end];
    points.extend(
        f.iter()
            .chain(g.iter())
            .map(|term| term.domain_start)
            .filter(|&x| x > start && x < end),
    );
    points.sort_by(|a, b| a.total_cmp(b));
    points.dedup_by(|a, b| (*a - *b).abs() < LIKE_TERM_TOLERANCE);
    points
}
