//! Artifact writing.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::ExportError;

/// Write `content` to `path`, replacing any existing file only once the new
/// content has been written completely.
///
/// The data goes to a temporary file in the destination directory which is
/// then renamed over `path`. On failure the temporary file is removed and
/// `path` is left untouched.
///
/// A replaced file keeps its permissions. A new file gets the same mode a
/// plain create would give it under the process umask.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|metadata| metadata.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The mode is passed to open(2), which applies the umask.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
