//! # Singularity Functions
//!
//! A singularity function `k·⟨x−a⟩ⁿ` is zero for `x < a` and `k·(x−a)ⁿ` from
//! `a` onwards. Shear, moment, slope and deflection of a beam under point
//! actions are all finite sums of these terms, so a `Vec<SingularityFunction>`
//! is the closed-form representation used throughout the engine.
//!
//! ```text
//!   n = 0 (step)        n = 1 (ramp)        n = 2
//!        ┌────               ╱                   │
//!        │                  ╱                   ╱
//!   ─────┘             ────╱              ─────╯
//!        a                 a                   a
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::singularity::SingularityFunction;
//!
//! // 2.5<x-3>^2
//! let term = SingularityFunction::new(3.0, 2.5, 2);
//! assert_eq!(term.evaluate(1.0), 0.0);
//! assert_eq!(term.evaluate(5.0), 10.0);
//! assert_eq!(term.to_string(), "2.5<x-3>^2");
//! ```

use serde::{Deserialize, Serialize};

/// Tolerance on `domain_start` when deciding whether two terms are like terms
pub const LIKE_TERM_TOLERANCE: f64 = 1e-6;

/// Significant figures used when rendering equation text
const DISPLAY_SIG_FIGS: i32 = 5;

/// A single term `scale·⟨x − domain_start⟩^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingularityFunction {
    /// Position `a` where the term switches on
    pub domain_start: f64,
    /// Coefficient `k`
    pub scale: f64,
    /// Power `n` (0 = step, 1 = ramp, ...)
    pub exponent: u32,
}

impl SingularityFunction {
    /// Create a new term `scale·⟨x − domain_start⟩^exponent`
    pub fn new(domain_start: f64, scale: f64, exponent: u32) -> Self {
        SingularityFunction {
            domain_start,
            scale,
            exponent,
        }
    }

    /// A plain constant `c` (i.e. `c·⟨x−0⟩⁰`)
    pub fn constant(value: f64) -> Self {
        Self::new(0.0, value, 0)
    }

    /// Evaluate at position `x`.
    ///
    /// At `x == domain_start` this returns `scale` for a step and `0` for any
    /// positive exponent.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x < self.domain_start {
            return 0.0;
        }
        if self.exponent == 0 {
            return self.scale;
        }
        self.scale * (x - self.domain_start).powi(self.exponent as i32)
    }

    /// True when `other` has the same domain start (within
    /// [`LIKE_TERM_TOLERANCE`]) and the same exponent.
    pub fn is_like(&self, other: &SingularityFunction) -> bool {
        self.exponent == other.exponent
            && (self.domain_start - other.domain_start).abs() < LIKE_TERM_TOLERANCE
    }

    /// True when the term contributes nothing
    pub fn is_zero(&self) -> bool {
        self.scale == 0.0
    }

    /// Same term with its scale multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.domain_start, self.scale * factor, self.exponent)
    }
}

impl std::fmt::Display for SingularityFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == 0.0 {
            return write!(f, "0");
        }

        if self.exponent == 0 && self.domain_start == 0.0 {
            return write!(f, "{}", format_significant(self.scale, DISPLAY_SIG_FIGS));
        }

        let scale = if self.scale == 1.0 {
            String::new()
        } else if self.scale == -1.0 {
            "-".to_string()
        } else {
            format_significant(self.scale, DISPLAY_SIG_FIGS)
        };

        let base = if self.domain_start == 0.0 {
            "x".to_string()
        } else if self.domain_start > 0.0 {
            format!("<x-{}>", format_significant(self.domain_start, DISPLAY_SIG_FIGS))
        } else {
            format!("<x+{}>", format_significant(-self.domain_start, DISPLAY_SIG_FIGS))
        };

        if self.exponent == 1 {
            write!(f, "{}{}", scale, base)
        } else {
            write!(f, "{}{}^{}", scale, base, self.exponent)
        }
    }
}

/// Render a whole term list as one equation, e.g. `0.4x + 0.6<x-5> - <x-3>`.
///
/// An empty list renders as `0`.
pub fn format_terms(terms: &[SingularityFunction]) -> String {
    let mut text = String::new();
    for term in terms.iter().filter(|t| !t.is_zero()) {
        let rendered = term.to_string();
        if text.is_empty() {
            text = rendered;
        } else if let Some(rest) = rendered.strip_prefix('-') {
            text.push_str(" - ");
            text.push_str(rest);
        } else {
            text.push_str(" + ");
            text.push_str(&rendered);
        }
    }
    if text.is_empty() {
        text.push('0');
    }
    text
}

/// Round to `digits` significant figures and drop trailing zeros.
fn format_significant(value: f64, digits: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", if value == 0.0 { 0.0 } else { value });
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    let factor = 10f64.powi(digits - 1 - magnitude);
    let rounded = (value * factor).round() / factor;

    let text = format!("{:.*}", decimals, rounded);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_round_trip() {
        let term = SingularityFunction::new(1.0, 2.0, 3);
        assert_eq!(term.domain_start, 1.0);
        assert_eq!(term.scale, 2.0);
        assert_eq!(term.exponent, 3);
    }

    #[test]
    fn test_evaluate() {
        let term = SingularityFunction::new(3.4, -2.0, 3);
        assert_eq!(term.evaluate(0.0), 0.0);
        assert_eq!(term.evaluate(3.4), 0.0);
        assert_eq!(term.evaluate(6.8), -2.0 * (6.8f64 - 3.4).powi(3));
    }

    #[test]
    fn test_step_is_on_at_domain_start() {
        let step = SingularityFunction::new(2.0, 7.5, 0);
        assert_eq!(step.evaluate(1.999), 0.0);
        assert_eq!(step.evaluate(2.0), 7.5);
        assert_eq!(step.evaluate(10.0), 7.5);
    }

    #[test]
    fn test_like_terms() {
        let a = SingularityFunction::new(3.0, 1.0, 2);
        assert!(a.is_like(&SingularityFunction::new(3.0 + 5e-7, -4.0, 2)));
        assert!(!a.is_like(&SingularityFunction::new(3.1, 1.0, 2)));
        assert!(!a.is_like(&SingularityFunction::new(3.0, 1.0, 1)));
    }

    #[test]
    fn test_text_zero_and_constant() {
        assert_eq!(SingularityFunction::new(2834.0, 0.0, 23).to_string(), "0");
        assert_eq!(SingularityFunction::constant(42.0).to_string(), "42");
    }

    #[test]
    fn test_text_general_case() {
        assert_eq!(SingularityFunction::new(23.0, 2.5, 4).to_string(), "2.5<x-23>^4");
        assert_eq!(SingularityFunction::new(-23.0, -2.5, 4).to_string(), "-2.5<x+23>^4");
        assert_eq!(SingularityFunction::new(0.0, 2.5, 1).to_string(), "2.5x");
        assert_eq!(SingularityFunction::new(0.0, 1.0, 3).to_string(), "x^3");
    }

    #[test]
    fn test_text_unit_scale() {
        assert_eq!(SingularityFunction::new(1.0, 1.0, 1).to_string(), "<x-1>");
        assert_eq!(SingularityFunction::new(1.0, -1.0, 1).to_string(), "-<x-1>");
    }

    #[test]
    fn test_text_significant_figures() {
        assert_eq!(SingularityFunction::new(0.0, 1.0 / 3.0, 3).to_string(), "0.33333x^3");
        assert_eq!(SingularityFunction::constant(123456.0).to_string(), "123460");
    }

    #[test]
    fn test_format_terms() {
        let terms = vec![
            SingularityFunction::new(0.0, 0.4, 1),
            SingularityFunction::new(5.0, 0.6, 1),
            SingularityFunction::new(3.0, -1.0, 1),
        ];
        assert_eq!(format_terms(&terms), "0.4x + 0.6<x-5> - <x-3>");
        assert_eq!(format_terms(&[]), "0");
    }

    #[test]
    fn test_serialization() {
        let term = SingularityFunction::new(3.0, -0.5, 2);
        let json = serde_json::to_string(&term).unwrap();
        let parsed: SingularityFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, term);
    }
}
