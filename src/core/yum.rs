//! Yum repository definition file lifecycle
//!
//! Creates `.repo` files pointing at the rgsyn rpm repository and removes
//! them again. Every created file is tracked in the configuration so the
//! whole set can be undone later; the tracked list is persisted after each
//! mutation.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{ClientConfig, ConfigStore};
use crate::error::RepoError;
use crate::infra::filesystem;

/// Deterministic repository name for a host and OS identifier
///
/// Strips a leading `http://` (only that scheme, matching the service's
/// convention), replaces `/` with `-`, and prefixes `rgsyn-`.
pub fn repo_name(host: &str, op_sys: &str) -> String {
    let sanitized = host
        .strip_prefix("http://")
        .unwrap_or(host)
        .replace('/', "-");
    format!("rgsyn-{sanitized}-{op_sys}")
}

/// Verbatim content of a repository definition file
pub fn repo_file_content(name: &str, host: &str, op_sys: &str) -> String {
    format!("[{name}]\nname={name}\nbaseurl={host}/rpm_repo/{op_sys}/\nenabled=1\n")
}

/// Create the repository definition file for `op_sys`
///
/// Idempotent: an existing file at the derived path is left untouched and
/// the call returns `Ok(false)`. On creation the path is appended to the
/// tracked list and persisted, and the call returns `Ok(true)`. A write
/// denied by the filesystem fails with [`RepoError::PermissionDenied`]
/// without registering anything.
pub fn setup(
    config: &mut ClientConfig,
    store: &dyn ConfigStore,
    repos_dir: &Path,
    host: &str,
    op_sys: &str,
) -> Result<bool, RepoError> {
    let name = repo_name(host, op_sys);
    let path = repo_file_path(repos_dir, &name);

    if path.exists() {
        return Ok(false);
    }

    filesystem::write_file(&path, &repo_file_content(&name, host, op_sys))?;
    config.yum_files.push(path.clone());
    store.save(config)?;

    info!(path = %path.display(), "created repository definition file");
    Ok(true)
}

/// Remove every tracked repository definition file
///
/// All-or-nothing: every tracked file and its containing directory must be
/// removable before anything is deleted; one failing check aborts the
/// whole operation with [`RepoError::PermissionDenied`] and removes
/// nothing. Returns `Ok(true)` iff the tracked list was non-empty before
/// the call. The list is cleared and persisted regardless of how many
/// files still existed on disk.
pub fn undo(config: &mut ClientConfig, store: &dyn ConfigStore) -> Result<bool, RepoError> {
    for file in &config.yum_files {
        if !filesystem::can_remove(file) {
            return Err(RepoError::PermissionDenied { path: file.clone() });
        }
    }

    for file in &config.yum_files {
        filesystem::remove_file(file)?;
        info!(path = %file.display(), "removed repository definition file");
    }

    let removed_any = !config.yum_files.is_empty();
    config.yum_files.clear();
    store.save(config)?;
    Ok(removed_any)
}

/// `.repo` path for a derived repository name
pub fn repo_file_path(repos_dir: &Path, name: &str) -> PathBuf {
    repos_dir.join(format!("{name}.repo"))
}
