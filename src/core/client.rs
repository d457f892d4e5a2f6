//! Client facade
//!
//! [`Rgsyn`] owns the configuration, persists every mutation through its
//! storage port, and delegates to the transport and repository file
//! modules. Errors from all components unify into
//! [`RgsynError`](crate::error::RgsynError) at this surface.

use std::path::{Path, PathBuf};

use reqwest::Method;

use crate::config::defaults::YUM_REPOS_DIR;
use crate::config::{ClientConfig, ConfigStore, TomlStore};
use crate::core::yum;
use crate::error::{ConfigError, RemoteError, RgsynError};
use crate::remote::{host_valid, Body, Credentials, RemoteClient};

/// Client for one rgsyn service instance
pub struct Rgsyn {
    config: ClientConfig,
    store: Box<dyn ConfigStore>,
    http: reqwest::Client,
    repos_dir: PathBuf,
}

impl Rgsyn {
    /// Create a client loading its configuration through the given store
    pub fn new(store: Box<dyn ConfigStore>) -> Result<Self, ConfigError> {
        let config = store.load()?;
        Ok(Self {
            config,
            store,
            http: reqwest::Client::new(),
            repos_dir: PathBuf::from(YUM_REPOS_DIR),
        })
    }

    /// Create a client backed by a TOML config file at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::new(Box::new(TomlStore::new(path.into())))
    }

    /// Override the repository definition directory
    ///
    /// Defaults to `/etc/yum.repos.d`.
    #[must_use]
    pub fn with_repos_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.repos_dir = dir.into();
        self
    }

    /// Get the configured host
    pub fn host(&self) -> Option<&str> {
        self.config.host.as_deref()
    }

    /// Get the configured username
    pub fn username(&self) -> Option<&str> {
        self.config.username.as_deref()
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the repository definition directory
    pub fn repos_dir(&self) -> &Path {
        &self.repos_dir
    }

    /// Set the host (one trailing `/` stripped) and persist
    pub fn set_host(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        self.config.set_host(value);
        self.store.save(&self.config)
    }

    /// Set the username as-is and persist
    pub fn set_username(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        self.config.set_username(value);
        self.store.save(&self.config)
    }

    /// Issue one request against the configured host
    ///
    /// See [`RemoteClient::talk`] for the transport contract.
    pub async fn talk(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        credentials: Option<&Credentials>,
    ) -> Result<Body, RgsynError> {
        Ok(self.remote().talk(method, path, params, credentials).await?)
    }

    /// Check whether the configured host is a valid rgsyn instance
    pub async fn host_valid(&self) -> Result<bool, RgsynError> {
        Ok(host_valid(&self.remote()).await?)
    }

    /// Create the repository definition file for `op_sys`
    ///
    /// Returns `Ok(false)` when the file already exists. Fails with
    /// `HostNotSpecified` before touching the filesystem when no host is
    /// configured.
    pub fn yum_setup(&mut self, op_sys: &str) -> Result<bool, RgsynError> {
        let host = self
            .config
            .host
            .clone()
            .ok_or(RemoteError::HostNotSpecified)?;
        Ok(yum::setup(
            &mut self.config,
            self.store.as_ref(),
            &self.repos_dir,
            &host,
            op_sys,
        )?)
    }

    /// Remove every tracked repository definition file
    ///
    /// Returns `Ok(true)` iff there was anything to undo.
    pub fn yum_undo(&mut self) -> Result<bool, RgsynError> {
        Ok(yum::undo(&mut self.config, self.store.as_ref())?)
    }

    fn remote(&self) -> RemoteClient {
        RemoteClient::with_client(self.http.clone(), self.config.host.clone())
    }
}
