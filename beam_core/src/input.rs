//! # Beam Input Documents
//!
//! A beam is described as JSON:
//!
//! ```json
//! {
//!   "label": "Simply supported",
//!   "span": 5.0,
//!   "supports": [
//!     { "position": 0.0, "kind": "PIN" },
//!     { "position": 5.0, "kind": "ROLLER" }
//!   ],
//!   "loads": [
//!     { "position": 3.0, "kind": "POINT", "magnitude": 1.0 }
//!   ],
//!   "section": { "modulus": 200000.0, "inertia": 8.0e6 }
//! }
//! ```
//!
//! `label` and `section` are optional. Kind codes are resolved through
//! [`Support::parse`] and [`Load::parse`], so an unknown code fails with
//! `InvalidKind` rather than a JSON error. Reports are written back with
//! [`save_report`], which writes to a `.tmp` file and renames it into place.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisReport, BeamSolver};
use crate::errors::{BeamError, BeamResult};
use crate::loads::Load;
use crate::section::SectionProperties;
use crate::supports::Support;

/// A complete beam model as read from a document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamInput {
    /// Optional user label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Beam length, supports and loads lie in `[0, span]`
    pub span: f64,
    pub supports: Vec<Support>,
    #[serde(default)]
    pub loads: Vec<Load>,
    /// Unit E and I when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionProperties>,
}

impl BeamInput {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> BeamResult<Self> {
        let document: BeamDocument = serde_json::from_str(json).map_err(|e| BeamError::SerializationError {
            reason: format!("Invalid beam JSON: {}", e),
        })?;
        let input = document.into_input()?;
        input.validate()?;
        Ok(input)
    }

    /// Check the model is well-formed before analysis.
    pub fn validate(&self) -> BeamResult<()> {
        if !(self.span.is_finite() && self.span > 0.0) {
            return Err(BeamError::invalid_input(
                "span",
                self.span.to_string(),
                "Span must be positive",
            ));
        }

        for (i, support) in self.supports.iter().enumerate() {
            self.check_position(&format!("supports[{}].position", i), support.position)?;
        }

        for (i, load) in self.loads.iter().enumerate() {
            self.check_position(&format!("loads[{}].position", i), load.position)?;
            if !load.magnitude.is_finite() {
                return Err(BeamError::invalid_input(
                    format!("loads[{}].magnitude", i),
                    load.magnitude.to_string(),
                    "Magnitude must be a finite number",
                ));
            }
        }

        if let Some(section) = &self.section {
            section.validate()?;
        }

        Ok(())
    }

    fn check_position(&self, field: &str, position: f64) -> BeamResult<()> {
        if position.is_finite() && (0.0..=self.span).contains(&position) {
            Ok(())
        } else {
            Err(BeamError::invalid_input(
                field,
                position.to_string(),
                format!("Position must lie within the span [0, {}]", self.span),
            ))
        }
    }

    /// Solver loaded with this model, ready for `analyse()`
    pub fn into_solver(self) -> BeamSolver {
        let mut solver = BeamSolver::new().with_section(self.section.unwrap_or_default());
        solver.initialise(self.supports, self.loads, self.span);
        solver
    }
}

/// Load and validate a beam document from disk.
///
/// # Errors
///
/// * `FileError` - the file could not be opened or read
/// * `SerializationError` - the contents are not a valid beam document
/// * `InvalidKind` - a support or load kind code is not recognised
/// * `InvalidInput` - the model fails [`BeamInput::validate`]
pub fn load_beam_input(path: &Path) -> BeamResult<BeamInput> {
    let mut file = File::open(path)
        .map_err(|e| BeamError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| BeamError::file_error("read", path.display().to_string(), e.to_string()))?;

    let document: BeamDocument = serde_json::from_str(&contents).map_err(|e| BeamError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    let input = document.into_input()?;
    input.validate()?;
    Ok(input)
}

/// On-disk form of [`BeamInput`], with kinds still as raw codes
#[derive(Debug, Deserialize)]
struct BeamDocument {
    #[serde(default)]
    label: Option<String>,
    span: f64,
    supports: Vec<SupportRecord>,
    #[serde(default)]
    loads: Vec<LoadRecord>,
    #[serde(default)]
    section: Option<SectionProperties>,
}

#[derive(Debug, Deserialize)]
struct SupportRecord {
    position: f64,
    kind: String,
}

#[derive(Debug, Deserialize)]
struct LoadRecord {
    position: f64,
    kind: String,
    magnitude: f64,
}

impl BeamDocument {
    fn into_input(self) -> BeamResult<BeamInput> {
        let supports = self
            .supports
            .iter()
            .map(|record| Support::parse(record.position, &record.kind))
            .collect::<BeamResult<Vec<_>>>()?;
        let loads = self
            .loads
            .iter()
            .map(|record| Load::parse(record.position, &record.kind, record.magnitude))
            .collect::<BeamResult<Vec<_>>>()?;

        Ok(BeamInput {
            label: self.label,
            span: self.span,
            supports,
            loads,
            section: self.section,
        })
    }
}

/// Write an analysis report as pretty JSON.
///
/// The report goes to `<path>.tmp` first and is renamed over `path` once
/// fully written, so a failed write never leaves a truncated file behind.
pub fn save_report(report: &AnalysisReport, path: &Path) -> BeamResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| BeamError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = temp_path_for(path);
    {
        let mut file = File::create(&tmp_path).map_err(|e| {
            BeamError::file_error("create", tmp_path.display().to_string(), e.to_string())
        })?;
        file.write_all(json.as_bytes()).map_err(|e| {
            BeamError::file_error("write", tmp_path.display().to_string(), e.to_string())
        })?;
        file.sync_all().map_err(|e| {
            BeamError::file_error("sync", tmp_path.display().to_string(), e.to_string())
        })?;
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        BeamError::file_error("rename", path.display().to_string(), e.to_string())
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
