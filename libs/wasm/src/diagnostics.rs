//! WASM-compatible diagnostic types.
//!
//! Row-count mismatches become warnings tied to their row; fatal parse,
//! layout and wireframe failures become a single error.

use config::constants::ConfigError;
use serde::Serialize;
use stitch_mesh::MeshError;
use stitch_parser::{PatternError, RowValidation};
use wasm_bindgen::prelude::*;

/// Diagnostic severity for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const diag = list.get(0);
/// // console.log(diag.row(), diag.message());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<u32>,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Returns the row the diagnostic refers to, if any.
    pub fn row(&self) -> Option<u32> {
        self.row
    }
}

impl Diagnostic {
    /// An error not tied to any row.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            row: None,
        }
    }

    /// A warning for a row whose count does not add up.
    ///
    /// Returns `None` for valid rows.
    pub fn from_row(validation: &RowValidation) -> Option<Self> {
        if validation.is_valid {
            return None;
        }
        let detail = validation
            .message
            .clone()
            .unwrap_or_else(|| "stitch count mismatch".to_string());
        Some(Self {
            severity: Severity::Warning,
            message: format!("row {}: {detail}", validation.row),
            row: Some(validation.row),
        })
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "error: {}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

impl From<PatternError> for Diagnostic {
    fn from(error: PatternError) -> Self {
        Self::error(error.to_string())
    }
}

impl From<MeshError> for Diagnostic {
    fn from(error: MeshError) -> Self {
        Self::error(error.to_string())
    }
}

impl From<ConfigError> for Diagnostic {
    fn from(error: ConfigError) -> Self {
        Self::error(error.to_string())
    }
}

/// Warnings for every invalid row, in row order.
pub fn row_diagnostics(rows: &[RowValidation]) -> Vec<Diagnostic> {
    rows.iter().filter_map(Diagnostic::from_row).collect()
}

/// A collection of diagnostics.
#[wasm_bindgen]
pub struct DiagnosticList {
    diagnostics: Vec<Diagnostic>,
}

#[wasm_bindgen]
impl DiagnosticList {
    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns a diagnostic by index.
    pub fn get(&self, index: usize) -> Option<Diagnostic> {
        self.diagnostics.get(index).cloned()
    }

    /// True when any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}

impl DiagnosticList {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
