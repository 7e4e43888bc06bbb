//! Schema catalogs that supply tables and columns to the model builder.
//!
//! The live PostgreSQL catalog is a CLI-only feature behind
//! `metadata-provider`. The DDL-based catalog in [`crate::schema`] is always
//! available and needs no database.

mod provider;
#[cfg(feature = "metadata-provider")]
mod sqlx_provider;

pub use provider::SchemaCatalog;
#[cfg(feature = "metadata-provider")]
pub use sqlx_provider::{is_postgres_url, PgCatalog};

use pg2xmi_core::TableRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a schema catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedUrl(String),

    #[error("Failed to connect to database: {0}")]
    Connection(String),

    #[error("Catalog query failed: {0}")]
    Query(String),

    #[error("Failed to parse schema DDL: {0}")]
    Ddl(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whether a connection URL carries a user name or password, which may end
/// up in shell history.
pub fn url_has_credentials(url: &str) -> bool {
    url.split_once("://")
        .map(|(_, rest)| rest.split('/').next().unwrap_or_default())
        .is_some_and(|authority| authority.contains('@'))
}

/// Read the tables to convert, with their columns, from `catalog`.
///
/// An explicit `tables` list is used as given. Otherwise every table in
/// `schema` is read in catalog order, or by name when `sort` is set.
pub fn collect_tables(
    catalog: &dyn SchemaCatalog,
    schema: &str,
    tables: &[String],
    sort: bool,
) -> Result<Vec<TableRecord>, CatalogError> {
    let names = if tables.is_empty() {
        let mut names = catalog.list_tables(schema)?;
        if sort {
            names.sort();
        }
        names
    } else {
        tables.to_vec()
    };

    names
        .into_iter()
        .map(|name| {
            let columns = catalog.list_columns(schema, &name)?;
            Ok(TableRecord::new(name, columns).with_schema(schema))
        })
        .collect()
}
