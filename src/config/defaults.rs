//! Service constants

/// Value of the `name` field a valid rgsyn instance reports on `info`
pub const SERVICE_NAME: &str = "rgsyn";

/// Fixed yum repository definition directory
pub const YUM_REPOS_DIR: &str = "/etc/yum.repos.d";

/// Config file name inside the platform config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Application name used in directory paths
pub const APP_NAME: &str = "rgsyn";
