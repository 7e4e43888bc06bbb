//! pg2xmi CLI - PostgreSQL schema to UML/XMI converter

use pg2xmi_cli::cli::{Args, SchemaSource};
use pg2xmi_cli::metadata::{self, SchemaCatalog};
use pg2xmi_cli::output::{format_summary, print_issues};
use pg2xmi_cli::schema::DdlCatalog;

use anyhow::{Context, Result};
use clap::Parser;
use pg2xmi_core::build_model;
use pg2xmi_export::{export, write_atomic, ExportNaming};
use std::io::{self, Write};
use std::process::ExitCode;

/// Conversion failed (catalog, type mapping, or output error).
const EXIT_FAILURE: u8 = 1;
/// Invalid invocation (no schema source given).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(source) = args.source() else {
        eprintln!("pg2xmi: error: no schema source given (use --url or --ddl)");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    };

    match run(&args, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pg2xmi: error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &Args, source: &SchemaSource) -> Result<()> {
    let tables = {
        let catalog = open_catalog(source, args.quiet)?;
        metadata::collect_tables(catalog.as_ref(), &args.schema, &args.tables, args.sort)
            .context("Failed to read schema catalog")?
    };

    let naming = args
        .output
        .as_ref()
        .map(ExportNaming::new)
        .unwrap_or_default();
    let naming = match &args.model_name {
        Some(name) => naming.with_model_name(name),
        None => naming,
    };

    let result = match build_model(naming.model_name(), &tables) {
        Ok(result) => result,
        Err(failure) => {
            print_issues(&failure.issues, args.quiet);
            return Err(failure.error.into());
        }
    };
    let format = args.export_format();
    let content = export(&result, format).context("Failed to serialize model")?;

    print_issues(&result.issues, args.quiet);

    let destination = match &args.output {
        Some(_) => {
            let path = naming.path(format);
            write_atomic(&path, content.as_bytes())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(path)
        }
        None => {
            write_stdout(&content)?;
            None
        }
    };

    if !args.quiet {
        eprintln!("{}", format_summary(&result.summary, destination.as_deref()));
    }
    Ok(())
}

/// Open the catalog named by `source`. The catalog is read-only and is
/// closed when dropped.
fn open_catalog(source: &SchemaSource, quiet: bool) -> Result<Box<dyn SchemaCatalog>> {
    match source {
        SchemaSource::Ddl(path) => {
            let catalog = DdlCatalog::from_file(path).context("Failed to load schema")?;
            Ok(Box::new(catalog))
        }
        #[cfg(feature = "metadata-provider")]
        SchemaSource::Database(url) => {
            if !quiet && metadata::url_has_credentials(url) {
                eprintln!(
                    "pg2xmi: warning: Database credentials in --url may be logged in shell history. \
                     Consider using environment variables or a .pgpass file instead."
                );
            }
            let catalog = metadata::PgCatalog::connect(url)?;
            Ok(Box::new(catalog))
        }
        #[cfg(not(feature = "metadata-provider"))]
        SchemaSource::Database(_) => {
            let _ = quiet;
            anyhow::bail!("pg2xmi was built without database support (feature `metadata-provider`)")
        }
    }
}

fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    if !content.ends_with('\n') {
        writeln!(stdout).context("Failed to write to stdout")?;
    }
    Ok(())
}
