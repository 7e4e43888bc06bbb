//! Error types for model building.
//!
//! # Error Handling Strategy
//!
//! - [`TypeMappingError`] and [`ModelError`]: fatal. A column whose type has
//!   no mapping aborts the whole build; no partially built class is returned.
//!   [`BuildError`] pairs the failure with the issues found before it.
//!
//! - [`crate::types::Issue`]: non-fatal diagnostics (large-value columns,
//!   empty tables) collected alongside a successful build.

use thiserror::Error;

use crate::types::Issue;

/// A catalog type name with no entry in the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no UML type mapping for source type '{source_type_name}'")]
pub struct TypeMappingError {
    source_type_name: String,
}

impl TypeMappingError {
    pub fn new(source_type_name: impl Into<String>) -> Self {
        Self {
            source_type_name: source_type_name.into(),
        }
    }

    pub fn source_type_name(&self) -> &str {
        &self.source_type_name
    }
}

/// Errors that abort a model build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// `column` is qualified as `schema.table.column`.
    #[error("column {column} has unmapped type '{source_type}'")]
    UnmappedType { column: String, source_type: String },
}

/// A failed build together with the issues collected up to the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct BuildError {
    pub error: ModelError,
    pub issues: Vec<Issue>,
}
