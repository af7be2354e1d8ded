//! # beam_core - Beam Analysis Engine
//!
//! `beam_core` computes reactions, bending moment, slope and deflection of a
//! straight beam under point loads and couples. Results are closed-form lists
//! of singularity functions `k·⟨x−a⟩ⁿ`, so they can be evaluated anywhere
//! along the span or rendered as equation text.
//!
//! ## Design Philosophy
//!
//! - **Closed form**: every result is a term list, not a sampled curve
//! - **JSON-First**: inputs, results and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Pure steps**: the solvers return values; only [`BeamSolver`] writes
//!   reactions back into the supports
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{BeamSolver, Determinacy, Load, Support};
//! use beam_core::singularity::format_terms;
//!
//! let mut solver = BeamSolver::new();
//! solver.initialise(
//!     vec![Support::pin(0.0), Support::roller(4.0), Support::roller(8.0)],
//!     vec![Load::point(2.0, -1.0)],
//!     8.0,
//! );
//!
//! assert_eq!(solver.analyse().unwrap(), Determinacy::Indeterminate);
//! println!("M(x) = {}", format_terms(solver.bending_moment_equation()));
//! ```
//!
//! ## Modules
//!
//! - [`singularity`] - The `k·⟨x−a⟩ⁿ` term type and its equation text
//! - [`math`] - Term-list algebra, integration, quadrature, linear solve
//! - [`supports`] / [`loads`] - Beam model records
//! - [`section`] - Flexural stiffness E·I
//! - [`analysis`] - Determinacy, determinate and force-method solvers
//! - [`input`] - JSON beam documents and report output
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod errors;
pub mod input;
pub mod loads;
pub mod math;
pub mod section;
pub mod singularity;
pub mod supports;

// Re-export commonly used types at crate root for convenience
pub use analysis::{AnalysisOptions, AnalysisReport, BeamSolver, Determinacy};
pub use errors::{BeamError, BeamResult};
pub use input::{load_beam_input, save_report, BeamInput};
pub use loads::{Load, LoadKind};
pub use section::SectionProperties;
pub use singularity::SingularityFunction;
pub use supports::{Support, SupportKind};
