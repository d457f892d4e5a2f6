//! Configuration storage port
//!
//! Persistence is an injected capability: the client talks to a
//! [`ConfigStore`] so tests can substitute an in-memory store for the
//! file-backed one.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::defaults::{APP_NAME, CONFIG_FILE};
use crate::config::ClientConfig;
use crate::error::ConfigError;

/// Storage port for [`ClientConfig`]
///
/// Every state-changing client operation saves through this port
/// immediately (write-through, no buffering).
pub trait ConfigStore {
    /// Load the configuration, producing an empty one if storage is absent
    fn load(&self) -> Result<ClientConfig, ConfigError>;

    /// Serialize the full configuration and overwrite the storage
    fn save(&self, config: &ClientConfig) -> Result<(), ConfigError>;
}

/// File-backed store persisting the configuration as a TOML document
#[derive(Debug, Clone)]
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for TomlStore {
    fn load(&self) -> Result<ClientConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::Read {
            path: self.path.clone(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            error: e.to_string(),
        })
    }

    fn save(&self, config: &ClientConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                error: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(config).map_err(|e| ConfigError::Write {
            path: self.path.clone(),
            error: e.to_string(),
        })?;

        fs::write(&self.path, content).map_err(|e| ConfigError::Write {
            path: self.path.clone(),
            error: e.to_string(),
        })
    }
}

/// In-memory store for unit tests
///
/// Clones share the same slot, so a test can keep one handle and observe
/// what the client persisted through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<ClientConfig>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the last saved configuration, if any
    pub fn saved(&self) -> Option<ClientConfig> {
        self.slot.borrow().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<ClientConfig, ConfigError> {
        Ok(self.slot.borrow().clone().unwrap_or_default())
    }

    fn save(&self, config: &ClientConfig) -> Result<(), ConfigError> {
        *self.slot.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

/// Default config file path: `<platform config dir>/rgsyn/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".config").join(APP_NAME))
                .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
        })
        .join(CONFIG_FILE)
}
