use thiserror::Error;

use tablespec_core::TypeMappingError;

/// Severity level for suite validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured suite validation issue with location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error issue.
    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Add a warning issue.
    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }
}

/// Suite-processing errors that are not per-record issues.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// The document projection is missing a required field.
    #[error("document is missing required field `{field}`")]
    MissingField { field: &'static str },
    /// A type mapping failed for a specific column.
    #[error("column `{column}`: {source}")]
    Mapping {
        column: String,
        source: TypeMappingError,
    },
    /// The suite JSON Schema could not be compiled.
    #[error("schema error: {0}")]
    Schema(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for suite operations.
pub type Result<T> = std::result::Result<T, SuiteError>;

/// Diagnostic for a single expectation record that could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionIssue {
    /// Index of the record in the input suite.
    pub index: usize,
    /// Raw expectation type when one was present.
    pub expectation_type: Option<String>,
    pub message: String,
}
