//! Filesystem operations
//!
//! Thin wrappers around std::fs that carry path context and distinguish
//! permission failures from other IO errors.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::RepoError;

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), RepoError> {
    fs::write(path, content).map_err(|e| translate(path, &e))
}

/// Remove a file; a file that is already gone is not an error
pub fn remove_file(path: &Path) -> Result<(), RepoError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(translate(path, &e)),
    }
}

/// Whether the path exists and its permission bits allow writing
pub fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}

/// Whether a tracked file could be removed
///
/// The file itself must be writable if it exists (permission is checked,
/// not existence) and its containing directory must be writable, since
/// unlinking mutates the directory.
pub fn can_remove(path: &Path) -> bool {
    let file_ok = !path.exists() || is_writable(path);
    let dir_ok = path.parent().is_some_and(is_writable);
    file_ok && dir_ok
}

fn translate(path: &Path, error: &std::io::Error) -> RepoError {
    if error.kind() == ErrorKind::PermissionDenied {
        RepoError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        RepoError::Io {
            path: path.to_path_buf(),
            error: error.to_string(),
        }
    }
}
