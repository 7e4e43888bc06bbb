//! Serialization of pg2xmi models.
//!
//! Renders a built model as an XMI 2.1 document (the primary artifact) or as
//! JSON, and writes artifacts to disk without ever leaving a truncated file.

mod error;
mod json;
mod naming;
mod writer;
mod xmi;

pub use error::ExportError;
pub use json::export_json;
pub use naming::ExportNaming;
pub use writer::write_atomic;
pub use xmi::{escape_xml, export_xmi, write_class, write_footer, write_header, write_xmi};

use pg2xmi_core::BuildResult;

/// Supported artifact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// XMI 2.1 / UML document
    Xmi,
    /// The build result as JSON
    Json { compact: bool },
}

impl ExportFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xmi => "xmi",
            ExportFormat::Json { .. } => "json",
        }
    }
}

/// Render a build result in the given format.
pub fn export(result: &BuildResult, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Xmi => Ok(export_xmi(&result.model)),
        ExportFormat::Json { compact } => export_json(result, compact),
    }
}
