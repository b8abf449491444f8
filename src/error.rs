// error.rs - Error types for the rte core

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for rte operations
pub type Result<T> = std::result::Result<T, RteError>;

#[derive(Debug, Error)]
pub enum RteError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("Disk full while writing {}", .0.display())]
    DiskFull(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("No text selected")]
    NoSelection,

    #[error("No file path to save to")]
    NoFilePath,

    #[error("Invalid config: {0}")]
    Config(String),
}

impl RteError {
    /// Classify a filesystem error raised while touching `path`
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => RteError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => RteError::AccessDenied(path.to_path_buf()),
            io::ErrorKind::StorageFull => RteError::DiskFull(path.to_path_buf()),
            _ => RteError::Io(err),
        }
    }
}
