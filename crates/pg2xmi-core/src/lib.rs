pub mod builder;
pub mod error;
pub mod id;
pub mod type_map;
pub mod types;

// Re-export main types and functions
pub use builder::{build_model, ModelBuilder};
pub use error::{BuildError, ModelError, TypeMappingError};
pub use id::{generate_element_id, IdGenerator, UuidGenerator};
pub use type_map::{resolve, PrimitiveType, TypeMapping, TYPE_MAPPINGS};

// Re-export types explicitly
pub use types::{
    // Issue codes
    issue_codes,
    Attribute,
    AttributeKey,
    BuildResult,
    Class,
    // Request types
    ColumnRecord,
    ElementId,
    Issue,
    // Response types
    Model,
    ModelElement,
    Severity,
    Summary,
    TableRecord,
    TypeKind,
    TypeRef,
    Visibility,
};
