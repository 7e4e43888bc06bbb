//! Catalog type names to UML/Ecore primitive types.
//!
//! The mapping is a closed table keyed by the exact type name that
//! PostgreSQL reports in `information_schema.columns.data_type`. Lookup is
//! case-sensitive: `ARRAY` and `USER-DEFINED` are upper case in the catalog,
//! everything else is lower case.

use serde::{Deserialize, Serialize};

use crate::error::TypeMappingError;

macro_rules! uml_library {
    () => {
        "pathmap://UML_LIBRARIES/UMLPrimitiveTypes.library.uml"
    };
}

macro_rules! ecore_library {
    () => {
        "pathmap://UML_LIBRARIES/EcorePrimitiveTypes.library.uml"
    };
}

const UML_LIBRARY: &str = uml_library!();
const ECORE_LIBRARY: &str = ecore_library!();

/// Primitive types available in the UML and Ecore library documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    String,
    Integer,
    Boolean,
    EDate,
    EFloat,
}

impl PrimitiveType {
    /// Full `href` of the type inside its library document.
    pub const fn href(&self) -> &'static str {
        match self {
            PrimitiveType::String => concat!(uml_library!(), "#String"),
            PrimitiveType::Integer => concat!(uml_library!(), "#Integer"),
            PrimitiveType::Boolean => concat!(uml_library!(), "#Boolean"),
            PrimitiveType::EDate => concat!(ecore_library!(), "#EDate"),
            PrimitiveType::EFloat => concat!(ecore_library!(), "#EFloat"),
        }
    }

    /// URI of the library document defining this type.
    pub const fn library(&self) -> &'static str {
        match self {
            PrimitiveType::String | PrimitiveType::Integer | PrimitiveType::Boolean => UML_LIBRARY,
            PrimitiveType::EDate | PrimitiveType::EFloat => ECORE_LIBRARY,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "String",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::EDate => "EDate",
            PrimitiveType::EFloat => "EFloat",
        }
    }
}

/// One row of the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub source_type_name: &'static str,
    pub target: PrimitiveType,
    /// Large or opaque values are reported to the operator; the model is unaffected.
    pub is_large: bool,
    /// Identifier-like columns get the `key="uuid"` marker.
    pub is_identifier: bool,
}

impl TypeMapping {
    const fn new(
        source_type_name: &'static str,
        target: PrimitiveType,
        is_large: bool,
        is_identifier: bool,
    ) -> Self {
        Self {
            source_type_name,
            target,
            is_large,
            is_identifier,
        }
    }

    /// `href` of the target primitive.
    pub const fn target_type_ref(&self) -> &'static str {
        self.target.href()
    }
}

/// Every catalog type name the builder understands.
pub const TYPE_MAPPINGS: [TypeMapping; 15] = [
    TypeMapping::new("ARRAY", PrimitiveType::String, true, false),
    TypeMapping::new("USER-DEFINED", PrimitiveType::String, true, false),
    TypeMapping::new("bigint", PrimitiveType::Integer, false, false),
    TypeMapping::new("boolean", PrimitiveType::Boolean, false, false),
    TypeMapping::new("character varying", PrimitiveType::String, false, false),
    TypeMapping::new("date", PrimitiveType::EDate, false, false),
    TypeMapping::new("double precision", PrimitiveType::EFloat, false, false),
    TypeMapping::new("integer", PrimitiveType::Integer, false, false),
    TypeMapping::new("jsonb", PrimitiveType::String, true, false),
    TypeMapping::new("name", PrimitiveType::String, true, false),
    TypeMapping::new("numeric", PrimitiveType::EFloat, false, false),
    TypeMapping::new("text", PrimitiveType::String, false, false),
    TypeMapping::new("timestamp with time zone", PrimitiveType::EDate, true, false),
    TypeMapping::new("timestamp without time zone", PrimitiveType::EDate, true, false),
    TypeMapping::new("uuid", PrimitiveType::String, false, true),
];

/// Look up the mapping for a catalog type name.
///
/// # Errors
///
/// Returns [`TypeMappingError`] when the name is not in [`TYPE_MAPPINGS`].
pub fn resolve(source_type_name: &str) -> Result<TypeMapping, TypeMappingError> {
    TYPE_MAPPINGS
        .iter()
        .find(|mapping| mapping.source_type_name == source_type_name)
        .copied()
        .ok_or_else(|| TypeMappingError::new(source_type_name))
}
