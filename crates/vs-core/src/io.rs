//! File helpers

use crate::error::{Result, VideoshopError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Hidden sibling used while writing `path`: `dir/.name.ext.tmp`
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write `content` to `path` atomically (write to temp, then rename)
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path(path);
    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Clean up temp file on failure
        let _ = fs::remove_file(&temp_path);
        VideoshopError::from(e).with_context(format!("Failed to replace {}", path.display()))
    })
}
