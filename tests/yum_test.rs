//! Integration tests for the repository file manager
//!
//! Idempotent setup, all-or-nothing undo, and write-through tracking of
//! created files.

use rgsyn::config::{ConfigStore, TomlStore};
use rgsyn::core::Rgsyn;
use rgsyn::error::{RepoError, RgsynError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn client(temp: &TempDir, repos_dir: &Path) -> Rgsyn {
    let mut client = Rgsyn::open(temp.path().join("config.toml"))
        .unwrap()
        .with_repos_dir(repos_dir);
    client.set_host(Some("http://example.com:4567")).unwrap();
    client
}

/// Test: setup creates exactly one file with the deterministic content
#[test]
fn test_setup_creates_repo_file() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("yum.repos.d");
    fs::create_dir(&repos_dir).unwrap();

    let mut client = client(&temp, &repos_dir);
    assert!(client.yum_setup("centos7").unwrap());

    let expected = repos_dir.join("rgsyn-example.com:4567-centos7.repo");
    assert!(expected.exists());
    assert_eq!(
        fs::read_to_string(&expected).unwrap(),
        "[rgsyn-example.com:4567-centos7]\n\
         name=rgsyn-example.com:4567-centos7\n\
         baseurl=http://example.com:4567/rpm_repo/centos7/\n\
         enabled=1\n"
    );

    // Tracked in memory and on disk.
    assert_eq!(client.config().yum_files, vec![expected.clone()]);
    let saved = TomlStore::new(temp.path().join("config.toml")).load().unwrap();
    assert_eq!(saved.yum_files, vec![expected]);
}

/// Test: setup never overwrites, the second call is a no-op returning false
#[test]
fn test_setup_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("yum.repos.d");
    fs::create_dir(&repos_dir).unwrap();

    let mut client = client(&temp, &repos_dir);
    assert!(client.yum_setup("centos7").unwrap());
    assert!(!client.yum_setup("centos7").unwrap());

    assert_eq!(fs::read_dir(&repos_dir).unwrap().count(), 1);
    assert_eq!(client.config().yum_files.len(), 1);
}

/// Test: undo removes every tracked file and clears the list
#[test]
fn test_undo_removes_all_tracked_files() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("yum.repos.d");
    fs::create_dir(&repos_dir).unwrap();

    let mut client = client(&temp, &repos_dir);
    client.yum_setup("centos7").unwrap();
    client.yum_setup("f19").unwrap();
    assert_eq!(client.config().yum_files.len(), 2);

    assert!(client.yum_undo().unwrap());
    assert!(client.config().yum_files.is_empty());
    assert_eq!(fs::read_dir(&repos_dir).unwrap().count(), 0);

    // The cleared list is persisted.
    let saved = TomlStore::new(temp.path().join("config.toml")).load().unwrap();
    assert!(saved.yum_files.is_empty());
}

/// Test: undo on an empty tracked list reports nothing to undo
#[test]
fn test_undo_empty_list_returns_false() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("yum.repos.d");
    fs::create_dir(&repos_dir).unwrap();

    let mut client = client(&temp, &repos_dir);
    assert!(!client.yum_undo().unwrap());
}

/// Test: undo checks permission, not existence — a manually deleted file
/// does not fail the operation
#[test]
fn test_undo_tolerates_missing_tracked_file() {
    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("yum.repos.d");
    fs::create_dir(&repos_dir).unwrap();

    let mut client = client(&temp, &repos_dir);
    client.yum_setup("centos7").unwrap();
    fs::remove_file(&client.config().yum_files[0]).unwrap();

    assert!(client.yum_undo().unwrap());
    assert!(client.config().yum_files.is_empty());
}

/// Test: one unremovable file aborts the whole undo, leaving every file
/// (including removable ones) untouched and still tracked
#[cfg(unix)]
#[test]
fn test_undo_is_all_or_nothing() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let writable_dir = temp.path().join("writable");
    let locked_dir = temp.path().join("locked");
    fs::create_dir(&writable_dir).unwrap();
    fs::create_dir(&locked_dir).unwrap();

    let config_path = temp.path().join("config.toml");
    {
        let mut first = Rgsyn::open(&config_path)
            .unwrap()
            .with_repos_dir(&writable_dir);
        first.set_host(Some("http://example.com")).unwrap();
        first.yum_setup("centos7").unwrap();
    }
    let mut client = Rgsyn::open(&config_path)
        .unwrap()
        .with_repos_dir(&locked_dir);
    client.yum_setup("f19").unwrap();
    assert_eq!(client.config().yum_files.len(), 2);

    fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o555)).unwrap();

    let result = client.yum_undo();
    assert!(matches!(
        result,
        Err(RgsynError::Repo(RepoError::PermissionDenied { .. }))
    ));

    // Nothing was removed and everything stays tracked.
    assert!(writable_dir.join("rgsyn-example.com-centos7.repo").exists());
    assert!(locked_dir.join("rgsyn-example.com-f19.repo").exists());
    assert_eq!(client.config().yum_files.len(), 2);
    let saved = TomlStore::new(&config_path).load().unwrap();
    assert_eq!(saved.yum_files.len(), 2);

    fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();
}

/// Test: a write denied by the filesystem registers nothing
#[cfg(unix)]
#[test]
fn test_setup_permission_denied_registers_nothing() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let repos_dir = temp.path().join("yum.repos.d");
    fs::create_dir(&repos_dir).unwrap();
    fs::set_permissions(&repos_dir, fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits do not bind root; nothing to verify there.
    if fs::write(repos_dir.join("probe"), "x").is_ok() {
        fs::set_permissions(&repos_dir, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut client = client(&temp, &repos_dir);
    let result = client.yum_setup("centos7");

    assert!(matches!(
        result,
        Err(RgsynError::Repo(RepoError::PermissionDenied { .. }))
    ));
    assert!(client.config().yum_files.is_empty());
    let saved = TomlStore::new(temp.path().join("config.toml")).load().unwrap();
    assert!(saved.yum_files.is_empty());

    fs::set_permissions(&repos_dir, fs::Permissions::from_mode(0o755)).unwrap();
}
