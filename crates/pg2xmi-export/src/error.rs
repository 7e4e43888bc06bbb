//! Error types for the export crate.

use thiserror::Error;

/// Errors that can occur while rendering or writing an artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Serialization(e.to_string())
    }
}

impl From<tempfile::PersistError> for ExportError {
    fn from(e: tempfile::PersistError) -> Self {
        ExportError::Io(e.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_becomes_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ExportError::from(json_err);
        assert!(matches!(err, ExportError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error: "));
    }
}
