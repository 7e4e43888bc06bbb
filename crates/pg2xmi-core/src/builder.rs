use crate::error::{BuildError, ModelError};
use crate::id::{IdGenerator, UuidGenerator};
use crate::type_map::{self, TypeMapping};
use crate::types::*;
#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

/// Main entry point: build a model from tables using random identifiers.
///
/// Classes appear in the order of `tables`; attributes in ascending ordinal
/// position.
pub fn build_model(name: &str, tables: &[TableRecord]) -> Result<BuildResult, BuildError> {
    ModelBuilder::new().build(name, tables)
}

/// Assembles the model tree from schema records.
pub struct ModelBuilder<G = UuidGenerator> {
    ids: G,
    issues: Vec<Issue>,
    summary: Summary,
}

impl ModelBuilder<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl Default for ModelBuilder<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ModelBuilder<G> {
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            ids,
            issues: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Build the model. Fails on the first column whose type has no mapping;
    /// the error keeps the issues reported before that column.
    pub fn build(mut self, name: &str, tables: &[TableRecord]) -> Result<BuildResult, BuildError> {
        #[cfg(feature = "tracing")]
        let _span = info_span!("build_model", model = name, table_count = tables.len()).entered();

        let mut model = Model {
            id: self.ids.next_id(),
            name: name.to_string(),
            classes: Vec::with_capacity(tables.len()),
        };

        for table in tables {
            match self.build_class(table) {
                Ok(class) => model.classes.push(class),
                Err(error) => {
                    return Err(BuildError {
                        error,
                        issues: std::mem::take(&mut self.issues),
                    })
                }
            }
        }

        self.summary.class_count = model.classes.len();
        self.summary.attribute_count = model.attribute_count();

        Ok(BuildResult {
            model,
            issues: self.issues,
            summary: self.summary,
        })
    }

    fn build_class(&mut self, table: &TableRecord) -> Result<Class, ModelError> {
        let mut class = Class {
            id: self.ids.next_id(),
            name: table.name.clone(),
            attributes: Vec::with_capacity(table.columns.len()),
        };

        if table.columns.is_empty() {
            self.issues.push(
                Issue::warning(
                    issue_codes::EMPTY_TABLE,
                    format!("{} has no columns", table.qualified_name()),
                )
                .with_table(&table.name),
            );
        }

        let mut columns: Vec<&ColumnRecord> = table.columns.iter().collect();
        columns.sort_by_key(|column| column.ordinal_position);

        for column in columns {
            let mapping = type_map::resolve(&column.source_type_name).map_err(|_| {
                ModelError::UnmappedType {
                    column: format!("{}.{}", table.qualified_name(), column.name),
                    source_type: column.source_type_name.clone(),
                }
            })?;

            if mapping.is_large {
                self.report_large_column(table, column);
            }

            class.attributes.push(self.build_attribute(column, &mapping));
        }

        #[cfg(feature = "tracing")]
        debug!(
            table = %table.qualified_name(),
            attributes = class.attributes.len(),
            "class built"
        );

        Ok(class)
    }

    fn build_attribute(&mut self, column: &ColumnRecord, mapping: &TypeMapping) -> Attribute {
        let key = if mapping.is_identifier {
            self.summary.key_attribute_count += 1;
            Some(AttributeKey::Uuid)
        } else {
            None
        };

        Attribute {
            id: self.ids.next_id(),
            name: column.name.clone(),
            visibility: Visibility::Public,
            is_unique: false,
            key,
            type_ref: TypeRef::primitive(mapping.target),
            source_type: column.source_type_name.clone(),
        }
    }

    fn report_large_column(&mut self, table: &TableRecord, column: &ColumnRecord) {
        self.summary.large_column_count += 1;
        self.issues.push(
            Issue::info(
                issue_codes::LARGE_VALUE_COLUMN,
                format!(
                    "{}.{} = {}",
                    table.qualified_name(),
                    column.name,
                    column.source_type_name
                ),
            )
            .with_table(&table.name)
            .with_column(&column.name),
        );
    }
}
