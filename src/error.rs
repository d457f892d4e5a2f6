//! Error types for the rgsyn client
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Transport and response interpretation errors
#[derive(Error, Debug)]
pub enum RemoteError {
    /// No host configured; raised before any network I/O
    #[error("No host specified. Configure a host before talking to the service")]
    HostNotSpecified,

    /// Transport failure or non-2xx status (other than the data-bearing 300)
    #[error("Bad response from service: {message}")]
    BadResponse { message: String },

    /// Response body declared as JSON but failed to decode
    #[error("Failed to parse response body as JSON: {error}")]
    ResponseParse { error: String },
}

/// Configuration storage errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Malformed persisted configuration
    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: PathBuf, error: String },

    /// Failed to write config file
    #[error("Failed to write config file '{path}': {error}")]
    Write { path: PathBuf, error: String },
}

/// Repository definition file errors
#[derive(Error, Debug)]
pub enum RepoError {
    /// Filesystem write/delete denied
    #[error("Permission denied for '{path}'")]
    PermissionDenied { path: PathBuf },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// Config persistence error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Top-level rgsyn client error type
#[derive(Error, Debug)]
pub enum RgsynError {
    /// Remote error
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Repository file error
    #[error("Repository file error: {0}")]
    Repo(#[from] RepoError),
}
