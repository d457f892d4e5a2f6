//! Client configuration
//!
//! The persisted state of one rgsyn client: the configured host, the
//! username, and the list of repository definition files this client has
//! created and can undo. Persistence goes through the [`store`] module.

pub mod defaults;
pub mod store;

pub use store::{ConfigStore, MemoryStore, TomlStore};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted client configuration
///
/// `yum_files` is the source of truth for undo: it contains exactly the
/// repository files this client has created and not yet removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the rgsyn service, stored without a trailing slash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Username for authenticated calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Repository definition files created by this client
    #[serde(default)]
    pub yum_files: Vec<PathBuf>,
}

impl ClientConfig {
    /// Set the host, stripping one trailing `/` if present
    ///
    /// `http://x/` normalizes to `http://x`.
    pub fn set_host(&mut self, value: Option<&str>) {
        self.host = value.map(|v| v.strip_suffix('/').unwrap_or(v).to_string());
    }

    /// Set the username as-is
    pub fn set_username(&mut self, value: Option<&str>) {
        self.username = value.map(ToString::to_string);
    }
}
