use pg2xmi_core::BuildResult;

use crate::ExportError;

pub fn export_json(result: &BuildResult, compact: bool) -> Result<String, ExportError> {
    if compact {
        Ok(serde_json::to_string(result)?)
    } else {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
