//! Common types shared between request and response.

use serde::{Deserialize, Serialize};

/// A diagnostic raised while building a model (error, warning, or info).
///
/// Issues never change the structure of the model; they are reported to the
/// operator alongside a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Severity level
    pub severity: Severity,

    /// Machine-readable issue code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Optional: table the issue relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    /// Optional: column the issue relates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl Issue {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            table: None,
            column: None,
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Summary statistics for a built model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of classes (one per table)
    pub class_count: usize,

    /// Number of attributes across all classes (one per column)
    pub attribute_count: usize,

    /// Columns whose source type is flagged as a large/opaque value
    pub large_column_count: usize,

    /// Number of attributes tagged with the `uuid` key marker
    pub key_attribute_count: usize,
}

/// Machine-readable issue codes.
pub mod issue_codes {
    /// A column's source type is a large or opaque value (json, arrays, timestamps, ...).
    pub const LARGE_VALUE_COLUMN: &str = "LARGE_VALUE_COLUMN";
    /// A table produced no columns; its class is emitted empty.
    pub const EMPTY_TABLE: &str = "EMPTY_TABLE";
}
