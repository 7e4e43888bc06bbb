//! Schema catalog trait for database schema introspection.

use pg2xmi_core::ColumnRecord;

use super::CatalogError;

/// A read-only view of a database's table and column metadata.
///
/// Implementations query system catalogs (e.g., information_schema) or parse
/// DDL; they never modify the source database.
pub trait SchemaCatalog {
    /// Distinct table names in `schema`, in whatever order the catalog
    /// returns them.
    fn list_tables(&self, schema: &str) -> Result<Vec<String>, CatalogError>;

    /// Columns of `schema.table` ordered by ordinal position. An unknown
    /// table yields no columns.
    fn list_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnRecord>, CatalogError>;
}
