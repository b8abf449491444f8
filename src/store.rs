// store.rs - Whole-file reads and writes of `.rte` documents

use crate::error::{Result, RteError};
use log::info;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCUMENT_EXTENSION: &str = "rte";

pub fn open(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| RteError::from_io(e, path))
}

/// Write `bytes` to `path`, appending `.rte` first if it is missing.
/// Returns the path actually written.
///
/// The write is not atomic: a crash part way through can leave a truncated file.
pub fn save(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let target = with_document_extension(path);
    fs::write(&target, bytes).map_err(|e| RteError::from_io(e, &target))?;
    info!("Saving at: {}", target.display());
    Ok(target)
}

pub fn with_document_extension(path: &Path) -> PathBuf {
    let suffix = format!(".{}", DOCUMENT_EXTENSION);
    if path.as_os_str().to_string_lossy().ends_with(&suffix) {
        return path.to_path_buf();
    }
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(&suffix);
    PathBuf::from(raw)
}
