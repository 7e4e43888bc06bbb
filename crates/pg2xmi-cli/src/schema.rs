//! Schema catalog read from DDL files.
//!
//! Parses `CREATE TABLE` statements offline and reports tables and columns
//! the way PostgreSQL's `information_schema.columns` would, so DDL and live
//! databases produce the same model.

use pg2xmi_core::ColumnRecord;
use sqlparser::ast::{
    ColumnDef, ColumnOption, DataType, Expr, Ident, ObjectName, Statement, TableConstraint,
};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::Parser;
use std::path::Path;

use crate::metadata::{CatalogError, SchemaCatalog};

/// Schema assumed for tables declared without one.
const DEFAULT_SCHEMA: &str = "public";

/// A catalog built from the `CREATE TABLE` statements of a DDL script.
/// Other statements are ignored.
#[derive(Debug, Default)]
pub struct DdlCatalog {
    tables: Vec<DdlTable>,
}

#[derive(Debug)]
struct DdlTable {
    schema: String,
    name: String,
    columns: Vec<ColumnRecord>,
}

impl DdlCatalog {
    /// Load a catalog from a DDL file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let sql = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&sql)
    }

    /// Parse DDL text using the PostgreSQL dialect.
    pub fn parse(sql: &str) -> Result<Self, CatalogError> {
        let statements = Parser::parse_sql(&PostgreSqlDialect {}, sql)
            .map_err(|e| CatalogError::Ddl(e.to_string()))?;

        let mut catalog = Self::default();
        for statement in statements {
            if let Statement::CreateTable(create) = statement {
                let (schema, name) = split_table_name(&create.name);
                let primary_key = primary_key_columns(&create.constraints);
                let columns = create
                    .columns
                    .iter()
                    .enumerate()
                    .map(|(index, column)| {
                        let mut record = column_record(column, index + 1);
                        if primary_key.contains(&record.name) {
                            record.is_nullable = false;
                        }
                        record
                    })
                    .collect();
                catalog.insert(DdlTable {
                    schema,
                    name,
                    columns,
                });
            }
        }
        Ok(catalog)
    }

    /// A later definition of the same table replaces the earlier one but
    /// keeps its position.
    fn insert(&mut self, table: DdlTable) {
        match self
            .tables
            .iter_mut()
            .find(|t| t.schema == table.schema && t.name == table.name)
        {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }
}

impl SchemaCatalog for DdlCatalog {
    fn list_tables(&self, schema: &str) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .tables
            .iter()
            .filter(|t| t.schema == schema)
            .map(|t| t.name.clone())
            .collect())
    }

    fn list_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnRecord>, CatalogError> {
        Ok(self
            .tables
            .iter()
            .find(|t| t.schema == schema && t.name == table)
            .map(|t| t.columns.clone())
            .unwrap_or_default())
    }
}

fn split_table_name(name: &ObjectName) -> (String, String) {
    let mut parts: Vec<String> = name
        .0
        .iter()
        .map(|part| normalize_identifier(&part.to_string()))
        .collect();
    let table = parts.pop().unwrap_or_default();
    let schema = parts.pop().unwrap_or_else(|| DEFAULT_SCHEMA.to_string());
    (schema, table)
}

/// Unquoted identifiers fold to lower case; quoted ones keep their case.
fn normalize_identifier(raw: &str) -> String {
    match raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.replace("\"\"", "\""),
        None => raw.to_lowercase(),
    }
}

fn ident_name(ident: &Ident) -> String {
    if ident.quote_style.is_some() {
        ident.value.clone()
    } else {
        ident.value.to_lowercase()
    }
}

fn column_record(column: &ColumnDef, ordinal: usize) -> ColumnRecord {
    let (type_name, max_length) = catalog_type(&column.data_type);
    let mut record = ColumnRecord::new(
        ident_name(&column.name),
        u32::try_from(ordinal).unwrap_or(u32::MAX),
        type_name,
    );
    record.max_length = max_length;

    for option in &column.options {
        match &option.option {
            ColumnOption::NotNull => record.is_nullable = false,
            ColumnOption::Default(expr) => record.column_default = Some(expr.to_string()),
            ColumnOption::Unique { is_primary, .. } if *is_primary => record.is_nullable = false,
            _ => {}
        }
    }
    record
}

/// Columns named by a table-level `PRIMARY KEY (...)` constraint.
fn primary_key_columns(constraints: &[TableConstraint]) -> Vec<String> {
    constraints
        .iter()
        .filter_map(|constraint| match constraint {
            TableConstraint::PrimaryKey { columns, .. } => Some(columns),
            _ => None,
        })
        .flatten()
        .map(|index_column| match &index_column.column.expr {
            Expr::Identifier(ident) => ident_name(ident),
            other => normalize_identifier(&other.to_string()),
        })
        .collect()
}

/// The `information_schema.columns.data_type` name of a declared type, plus
/// its length limit for character types.
fn catalog_type(data_type: &DataType) -> (String, Option<u32>) {
    let rendered = data_type.to_string().to_lowercase();
    if rendered.ends_with("[]") || rendered.starts_with("array") {
        return ("ARRAY".to_string(), None);
    }

    let (base, args) = split_type_args(&rendered);
    match canonical_type_name(&base) {
        Some(name) => {
            let max_length = if name == "character varying" || name == "character" {
                args.as_deref()
                    .and_then(|args| args.split(',').next())
                    .and_then(|len| len.trim().parse().ok())
            } else {
                None
            };
            (name.to_string(), max_length)
        }
        None if matches!(data_type, DataType::Custom(..)) => ("USER-DEFINED".to_string(), None),
        None => (base, None),
    }
}

/// Split `timestamp(3) with time zone` into `timestamp with time zone` and `3`.
fn split_type_args(rendered: &str) -> (String, Option<String>) {
    let (base, args) = match (rendered.find('('), rendered.find(')')) {
        (Some(open), Some(close)) if open < close => (
            format!("{}{}", &rendered[..open], &rendered[close + 1..]),
            Some(rendered[open + 1..close].to_string()),
        ),
        _ => (rendered.to_string(), None),
    };
    (base.split_whitespace().collect::<Vec<_>>().join(" "), args)
}

fn canonical_type_name(base: &str) -> Option<&'static str> {
    let name = match base {
        "int" | "int4" | "integer" | "serial" | "serial4" => "integer",
        "bigint" | "int8" | "bigserial" | "serial8" => "bigint",
        "smallint" | "int2" | "smallserial" | "serial2" => "smallint",
        "bool" | "boolean" => "boolean",
        "varchar" | "character varying" | "char varying" => "character varying",
        "char" | "character" | "bpchar" => "character",
        "text" => "text",
        "double precision" | "double" | "float8" | "float" => "double precision",
        "real" | "float4" => "real",
        "numeric" | "decimal" | "dec" => "numeric",
        "timestamptz" | "timestamp with time zone" => "timestamp with time zone",
        "timestamp" | "timestamp without time zone" => "timestamp without time zone",
        "timetz" | "time with time zone" => "time with time zone",
        "time" | "time without time zone" => "time without time zone",
        "date" => "date",
        "uuid" => "uuid",
        "json" => "json",
        "jsonb" => "jsonb",
        "name" => "name",
        "bytea" => "bytea",
        "money" => "money",
        "inet" => "inet",
        "cidr" => "cidr",
        "interval" => "interval",
        "xml" => "xml",
        "oid" => "oid",
        "tsvector" => "tsvector",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(catalog: &DdlCatalog, schema: &str, table: &str) -> Vec<ColumnRecord> {
        catalog.list_columns(schema, table).unwrap()
    }

    fn types(catalog: &DdlCatalog, table: &str) -> Vec<String> {
        columns(catalog, "public", table)
            .into_iter()
            .map(|c| c.source_type_name)
            .collect()
    }

    #[test]
    fn test_parse_simple_ddl() {
        let catalog = DdlCatalog::parse(
            "CREATE TABLE users (id UUID PRIMARY KEY, email VARCHAR(255) NOT NULL, bio TEXT);",
        )
        .unwrap();

        assert_eq!(catalog.list_tables("public").unwrap(), vec!["users"]);
        let cols = columns(&catalog, "public", "users");
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].name, "id");
        assert_eq!(cols[0].ordinal_position, 1);
        assert_eq!(cols[0].source_type_name, "uuid");
        assert!(!cols[0].is_nullable);
        assert_eq!(cols[1].source_type_name, "character varying");
        assert_eq!(cols[1].max_length, Some(255));
        assert!(!cols[1].is_nullable);
        assert_eq!(cols[2].ordinal_position, 3);
        assert!(cols[2].is_nullable);
    }

    #[test]
    fn test_parse_multiple_tables_keeps_declaration_order() {
        let catalog = DdlCatalog::parse(
            "CREATE TABLE zeta (id INT);
             CREATE INDEX zeta_id ON zeta (id);
             CREATE TABLE alpha (id INT);",
        )
        .unwrap();
        assert_eq!(catalog.list_tables("public").unwrap(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_schema_qualified_tables() {
        let catalog = DdlCatalog::parse(
            "CREATE TABLE sales.orders (id BIGINT);
             CREATE TABLE customers (id BIGINT);",
        )
        .unwrap();
        assert_eq!(catalog.list_tables("sales").unwrap(), vec!["orders"]);
        assert_eq!(catalog.list_tables("public").unwrap(), vec!["customers"]);
        assert!(columns(&catalog, "public", "orders").is_empty());
    }

    #[test]
    fn test_identifier_case_folding() {
        let catalog =
            DdlCatalog::parse(r#"CREATE TABLE "Audit"."LogEntry" ("EventId" INT, Payload JSONB);"#)
                .unwrap();
        assert_eq!(catalog.list_tables("Audit").unwrap(), vec!["LogEntry"]);
        let names: Vec<String> = columns(&catalog, "Audit", "LogEntry")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["EventId", "payload"]);
    }

    #[test]
    fn test_type_normalization() {
        let catalog = DdlCatalog::parse(
            "CREATE TABLE t (
                a SERIAL,
                b INT8,
                c BOOL,
                d FLOAT8,
                e NUMERIC(10, 2),
                f TIMESTAMPTZ,
                g TIMESTAMP,
                h INTEGER[],
                i DATE,
                j CHAR(3),
                k REAL,
                l JSONB
            );",
        )
        .unwrap();
        assert_eq!(
            types(&catalog, "t"),
            vec![
                "integer",
                "bigint",
                "boolean",
                "double precision",
                "numeric",
                "timestamp with time zone",
                "timestamp without time zone",
                "ARRAY",
                "date",
                "character",
                "real",
                "jsonb",
            ]
        );
        assert_eq!(columns(&catalog, "public", "t")[9].max_length, Some(3));
    }

    #[test]
    fn test_custom_types_are_user_defined() {
        let catalog = DdlCatalog::parse("CREATE TABLE t (m mood, c MONEY);").unwrap();
        assert_eq!(types(&catalog, "t"), vec!["USER-DEFINED", "money"]);
    }

    #[test]
    fn test_primary_key_columns_are_not_nullable() {
        let catalog = DdlCatalog::parse(
            r#"CREATE TABLE memberships (
                org_id BIGINT,
                "UserId" UUID,
                role TEXT UNIQUE,
                PRIMARY KEY (org_id, "UserId")
            );
            CREATE TABLE tags (id INT PRIMARY KEY, label TEXT);"#,
        )
        .unwrap();

        let nullable: Vec<bool> = columns(&catalog, "public", "memberships")
            .iter()
            .map(|c| c.is_nullable)
            .collect();
        assert_eq!(nullable, vec![false, false, true]);

        let nullable: Vec<bool> = columns(&catalog, "public", "tags")
            .iter()
            .map(|c| c.is_nullable)
            .collect();
        assert_eq!(nullable, vec![false, true]);
    }

    #[test]
    fn test_column_default() {
        let catalog =
            DdlCatalog::parse("CREATE TABLE t (n INT DEFAULT 0, s TEXT NOT NULL DEFAULT 'x');")
                .unwrap();
        let cols = columns(&catalog, "public", "t");
        assert_eq!(cols[0].column_default.as_deref(), Some("0"));
        assert_eq!(cols[1].column_default.as_deref(), Some("'x'"));
        assert!(!cols[1].is_nullable);
    }

    #[test]
    fn test_redefinition_replaces_columns() {
        let catalog = DdlCatalog::parse(
            "CREATE TABLE a (x INT);
             CREATE TABLE b (y INT);
             CREATE TABLE a (z TEXT);",
        )
        .unwrap();
        assert_eq!(catalog.list_tables("public").unwrap(), vec!["a", "b"]);
        assert_eq!(columns(&catalog, "public", "a")[0].name, "z");
    }

    #[test]
    fn test_parse_invalid_ddl_returns_error() {
        let err = DdlCatalog::parse("CREATE TABLE (").unwrap_err();
        assert!(matches!(err, CatalogError::Ddl(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = DdlCatalog::from_file(Path::new("/nonexistent/schema.sql")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_split_type_args() {
        assert_eq!(
            split_type_args("timestamp(3) with time zone"),
            ("timestamp with time zone".to_string(), Some("3".to_string()))
        );
        assert_eq!(split_type_args("text"), ("text".to_string(), None));
    }
}
