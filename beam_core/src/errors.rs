//! # Error Types
//!
//! Structured error types for beam_core. Every failure is raised where it is
//! detected and propagated to the caller of [`BeamSolver::analyse`]; nothing
//! is retried, since the computation is deterministic.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_span(span: f64) -> BeamResult<()> {
//!     if span <= 0.0 {
//!         return Err(BeamError::invalid_input(
//!             "span",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```
//!
//! [`BeamSolver::analyse`]: crate::analysis::BeamSolver::analyse

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// A support or load kind string is not one of the enumerated values
    #[error("Invalid {category} kind: '{value}'")]
    InvalidKind { category: String, value: String },

    /// Two singularity functions with different domain start or exponent were added
    #[error("Incompatible terms: cannot add {left} and {right}")]
    IncompatibleTerm { left: String, right: String },

    /// The flexibility matrix of an indeterminate beam is not invertible
    #[error("Singular flexibility matrix ({size}x{size}) - redundant supports are degenerate")]
    SingularSystem { size: usize },

    /// The determinate solver has no closed form for this arrangement
    #[error("Unsupported configuration: {reason}")]
    UnsupportedConfiguration { reason: String },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error while reading a beam description
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl BeamError {
    /// Create an InvalidKind error
    pub fn invalid_kind(category: impl Into<String>, value: impl Into<String>) -> Self {
        BeamError::InvalidKind {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Create an IncompatibleTerm error
    pub fn incompatible_term(left: impl Into<String>, right: impl Into<String>) -> Self {
        BeamError::IncompatibleTerm {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported(reason: impl Into<String>) -> Self {
        BeamError::UnsupportedConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidKind { .. } => "INVALID_KIND",
            BeamError::IncompatibleTerm { .. } => "INCOMPATIBLE_TERM",
            BeamError::SingularSystem { .. } => "SINGULAR_SYSTEM",
            BeamError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::FileError { .. } => "FILE_ERROR",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BeamError::invalid_kind("support", "HINGE");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidKind\""));
        let roundtrip: BeamError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BeamError::SingularSystem { size: 2 }.error_code(), "SINGULAR_SYSTEM");
        assert_eq!(BeamError::unsupported("three supports").error_code(), "UNSUPPORTED_CONFIGURATION");
        assert_eq!(BeamError::incompatible_term("a", "b").error_code(), "INCOMPATIBLE_TERM");
    }

    #[test]
    fn test_error_display() {
        let error = BeamError::invalid_kind("load", "POINTY");
        assert_eq!(error.to_string(), "Invalid load kind: 'POINTY'");
    }
}
