// ABOUTME: Writes generated code to a file on disk
// ABOUTME: Shared by the generator and the history viewer download actions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// File name used when exporting from the generator
pub const GENERATOR_EXPORT_NAME: &str = "GenUI-Code.html";

/// Stem used when exporting a saved component; the framework picks the extension
pub const HISTORY_EXPORT_STEM: &str = "Generated-Component";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No code to download")]
    NothingToExport,

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `code` to `dir/file_name`, creating `dir` if needed
///
/// Existing files are overwritten.
pub fn write_code_file(dir: &Path, file_name: &str, code: &str) -> Result<PathBuf, ExportError> {
    if code.trim().is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let path = dir.join(file_name);
    let write = || -> io::Result<()> {
        fs::create_dir_all(dir)?;
        fs::write(&path, code)
    };
    write().map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = code.len(), "exported code");
    Ok(path)
}
