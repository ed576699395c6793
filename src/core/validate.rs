// src/core/validate.rs
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::utils::{display_extension, has_extension};

pub const EXPECTED_EXTENSION: &str = "csv";

/// Resolves `path` and checks that it names an existing `.csv` file inside
/// `allowed_root`.
///
/// The checks run in a fixed order and stop at the first failure: existence,
/// then extension, then containment. Symlinks are followed before the
/// containment check, so a link inside the root pointing outside it is
/// rejected.
///
/// # Errors
///
/// * [`ReportError::NotFound`] if the path does not exist
/// * [`ReportError::InvalidFormat`] if the extension is not `csv` (any case)
/// * [`ReportError::PathViolation`] if the resolved path escapes `allowed_root`
/// * [`ReportError::PermissionDenied`] / [`ReportError::Io`] if resolution fails
///   for another reason
pub fn resolve_input_path(path: &Path, allowed_root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let resolved = fs::canonicalize(path).map_err(|err| ReportError::from_io(&absolute, err))?;
    debug!(input = %path.display(), resolved = %resolved.display(), "resolved input path");

    if !has_extension(&resolved, EXPECTED_EXTENSION) {
        return Err(ReportError::InvalidFormat {
            extension: display_extension(&resolved),
            path: resolved,
        });
    }

    let root = fs::canonicalize(allowed_root)?;
    if !resolved.starts_with(&root) {
        return Err(ReportError::PathViolation {
            path: resolved,
            root,
        });
    }

    Ok(resolved)
}
