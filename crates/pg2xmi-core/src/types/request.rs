//! Input records describing a relational schema.
//!
//! These mirror the shape of `information_schema.columns`: the builder only
//! reads them, it never talks to a database itself.

use serde::{Deserialize, Serialize};

/// A table and its columns, as reported by a schema catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    /// Schema the table lives in; only used to qualify diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    /// Columns, expected in ordinal order
    #[serde(default)]
    pub columns: Vec<ColumnRecord>,
}

impl TableRecord {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnRecord>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            columns,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// `schema.table` when the schema is known, otherwise the bare table name.
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A single column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRecord {
    pub name: String,
    /// 1-based position of the column within its table
    pub ordinal_position: u32,
    #[serde(default = "default_nullable")]
    pub is_nullable: bool,
    /// Type name exactly as the catalog reports it (e.g. `character varying`)
    pub source_type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_default: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnRecord {
    /// A nullable column with no length limit or default.
    pub fn new(
        name: impl Into<String>,
        ordinal_position: u32,
        source_type_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ordinal_position,
            is_nullable: true,
            source_type_name: source_type_name.into(),
            max_length: None,
            column_default: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let table = TableRecord::new("users", Vec::new());
        assert_eq!(table.qualified_name(), "users");
        assert_eq!(table.with_schema("public").qualified_name(), "public.users");
    }

    #[test]
    fn test_column_record_deserialization_defaults() {
        let column: ColumnRecord = serde_json::from_str(
            r#"{"name":"email","ordinalPosition":2,"sourceTypeName":"character varying"}"#,
        )
        .unwrap();
        assert!(column.is_nullable);
        assert_eq!(column.max_length, None);
        assert_eq!(column, ColumnRecord::new("email", 2, "character varying"));
    }
}
