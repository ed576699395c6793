// src/error.rs
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every way a sprint analysis can fail.
///
/// Decoding failures never appear here: invalid UTF-8 triggers the Latin-1
/// fallback inside the loader instead.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Sprint data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Expected CSV file, got: {extension}")]
    InvalidFormat { path: PathBuf, extension: String },

    #[error("File path traversal detected. Please use paths within the working directory.")]
    PathViolation { path: PathBuf, root: PathBuf },

    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Failed to parse CSV file: {0}")]
    Parse(String),

    #[error("Permission denied accessing file: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error: {0}")]
    Io(io::Error),
}

// Inner errors are rendered in the messages above and must not also be
// reported as `source()`.
impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl ReportError {
    /// Maps an I/O failure on `path` onto the taxonomy, keeping the path for
    /// the kinds that carry one.
    #[inline]
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                Self::NotFound(path.to_path_buf())
            }
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
