use std::path::{Path, PathBuf};

use crate::ExportFormat;

const DEFAULT_MODEL_NAME: &str = "model";

/// Derives the model name and artifact path from the operator's output name.
#[derive(Debug, Clone)]
pub struct ExportNaming {
    base: PathBuf,
    model_name: String,
}

impl ExportNaming {
    /// `base` is the output name without extension, e.g. `out/shop`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        let model_name = base
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::trim)
            .filter(|stem| !stem.is_empty())
            .unwrap_or(DEFAULT_MODEL_NAME)
            .to_string();
        Self { base, model_name }
    }

    /// Override the model name derived from the output name.
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.model_name = name;
        }
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The artifact path: the base name with the format's extension, which is
    /// only appended when the base does not already carry it.
    pub fn path(&self, format: ExportFormat) -> PathBuf {
        let extension = format.extension();
        if has_extension(&self.base, extension) {
            self.base.clone()
        } else {
            let mut name = self.base.clone().into_os_string();
            name.push(".");
            name.push(extension);
            PathBuf::from(name)
        }
    }
}

impl Default for ExportNaming {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_NAME)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
