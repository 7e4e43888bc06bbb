//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// pg2xmi - PostgreSQL schema to UML/XMI converter
#[derive(Parser, Debug)]
#[command(name = "pg2xmi")]
#[command(about = "Convert database tables into a UML/XMI model", long_about = None)]
#[command(version)]
pub struct Args {
    /// Database connection URL for live schema introspection
    /// (e.g., postgres://user@host/db)
    #[cfg(feature = "metadata-provider")]
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// DDL file of CREATE TABLE statements to read the schema from instead of a database
    #[arg(long, value_name = "FILE")]
    pub ddl: Option<PathBuf>,

    /// Schema whose tables are converted
    #[arg(short, long, default_value = "public")]
    pub schema: String,

    /// Comma-separated list of tables to convert (default: every table in the schema)
    #[arg(short, long, value_delimiter = ',', value_name = "TABLES")]
    pub tables: Vec<String>,

    /// Output name; the artifact is written to <OUTPUT>.xmi (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Model name (defaults to the output name)
    #[arg(long, value_name = "NAME")]
    pub model_name: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "xmi", value_enum)]
    pub format: OutputFormat,

    /// Sort discovered tables by name instead of keeping catalog order
    #[arg(long)]
    pub sort: bool,

    /// Suppress diagnostics on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// XMI 2.1 UML model
    Xmi,
    /// Model tree, diagnostics and summary as JSON
    Json,
}

impl Args {
    /// Where the schema comes from. A database URL wins over a DDL file.
    pub fn source(&self) -> Option<SchemaSource> {
        #[cfg(feature = "metadata-provider")]
        if let Some(url) = &self.url {
            return Some(SchemaSource::Database(url.clone()));
        }

        self.ddl.clone().map(SchemaSource::Ddl)
    }

    pub fn export_format(&self) -> pg2xmi_export::ExportFormat {
        match self.format {
            OutputFormat::Xmi => pg2xmi_export::ExportFormat::Xmi,
            OutputFormat::Json => pg2xmi_export::ExportFormat::Json {
                compact: self.compact,
            },
        }
    }
}

/// A catalog to read tables and columns from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Database(String),
    Ddl(PathBuf),
}
