//! Types for the schema-to-model transformation.
//!
//! Request types describe the relational schema handed to the builder
//! (tables and their columns, as reported by a catalog). Response types
//! describe the assembled UML model tree and the diagnostics collected
//! while building it.

mod common;
mod request;
mod response;

// Re-export all public types
pub use common::{issue_codes, Issue, Severity, Summary};
pub use request::{ColumnRecord, TableRecord};
pub use response::{
    Attribute, AttributeKey, BuildResult, Class, ElementId, Model, ModelElement, TypeKind,
    TypeRef, Visibility,
};
