//! The assembled UML model tree.
//!
//! The tree is strictly owned: a [`Model`] owns its [`Class`]es in table
//! order, and each class owns its [`Attribute`]s in column ordinal order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::{Issue, Summary};
use crate::type_map::PrimitiveType;

/// The result of building a model from a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    /// The model tree
    pub model: Model,

    /// Diagnostics raised while building, in column processing order
    pub issues: Vec<Issue>,

    /// Summary statistics
    pub summary: Summary,
}

/// Opaque identifier of a model element.
///
/// Identifiers are generated fresh for every element and carry no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root of the tree: one UML model per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ElementId,
    pub name: String,
    #[serde(default)]
    pub classes: Vec<Class>,
}

/// A UML class, one per table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: ElementId,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A UML owned attribute, one per column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub id: ElementId,
    pub name: String,
    pub visibility: Visibility,
    pub is_unique: bool,
    /// Identity-role marker for identifier-like columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<AttributeKey>,
    pub type_ref: TypeRef,
    /// The catalog type name the attribute was mapped from
    pub source_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    Uuid,
}

impl AttributeKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Uuid => "uuid",
        }
    }
}

/// A typed reference from an attribute to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub primitive: PrimitiveType,
}

impl TypeRef {
    pub const fn primitive(primitive: PrimitiveType) -> Self {
        Self {
            kind: TypeKind::PrimitiveType,
            primitive,
        }
    }

    /// URI of the referenced type in its library document.
    pub const fn href(&self) -> &'static str {
        self.primitive.href()
    }
}

/// The metaclass of a referenced type. Columns only ever map to primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    #[serde(rename = "uml:PrimitiveType")]
    PrimitiveType,
}

impl TypeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeKind::PrimitiveType => "uml:PrimitiveType",
        }
    }
}

/// A borrowed view of any node in the tree.
#[derive(Debug, Clone, Copy)]
pub enum ModelElement<'a> {
    Model(&'a Model),
    Class(&'a Class),
    Attribute(&'a Attribute),
}

impl<'a> ModelElement<'a> {
    pub fn id(&self) -> &'a ElementId {
        match self {
            ModelElement::Model(m) => &m.id,
            ModelElement::Class(c) => &c.id,
            ModelElement::Attribute(a) => &a.id,
        }
    }
}

impl Model {
    /// Every element in document order: the model, then each class followed
    /// by its attributes.
    pub fn elements(&self) -> Vec<ModelElement<'_>> {
        let mut elements = vec![ModelElement::Model(self)];
        for class in &self.classes {
            elements.push(ModelElement::Class(class));
            elements.extend(class.attributes.iter().map(ModelElement::Attribute));
        }
        elements
    }

    pub fn attribute_count(&self) -> usize {
        self.classes.iter().map(|c| c.attributes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> Model {
        Model {
            id: ElementId::new("m"),
            name: "demo".to_string(),
            classes: vec![Class {
                id: ElementId::new("c1"),
                name: "users".to_string(),
                attributes: vec![Attribute {
                    id: ElementId::new("a1"),
                    name: "id".to_string(),
                    visibility: Visibility::Public,
                    is_unique: false,
                    key: Some(AttributeKey::Uuid),
                    type_ref: TypeRef::primitive(PrimitiveType::String),
                    source_type: "uuid".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_elements_in_document_order() {
        let model = sample_model();
        let ids: Vec<&str> = model.elements().iter().map(|e| e.id().as_str()).collect();
        assert_eq!(ids, vec!["m", "c1", "a1"]);
        assert_eq!(model.attribute_count(), 1);
    }

    #[test]
    fn test_model_serialization() {
        let json = serde_json::to_string(&sample_model()).unwrap();
        assert!(json.contains("\"typeRef\":{\"kind\":\"uml:PrimitiveType\""));
        assert!(json.contains("\"key\":\"uuid\""));
        assert!(json.contains("\"isUnique\":false"));

        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back.classes[0].attributes[0].key, Some(AttributeKey::Uuid));
    }
}
