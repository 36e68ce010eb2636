//! Configuration management for etsy3.

mod settings;

pub use settings::{ApiConfig, Config, CredentialsConfig, LoggingConfig, OAuthConfig};

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Prefix for environment overrides, e.g. `ETSY3__OAUTH__CLIENT_ID`.
pub const ENV_PREFIX: &str = "ETSY3";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "etsy3", "etsy3")
        .ok_or_else(|| Error::config("Could not determine a home directory"))
}

/// Directory holding `config.toml`.
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Default configuration file, falling back to `./config.toml` when no home
/// directory is known.
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Default directory for rolling log files.
pub fn log_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().join("logs"))
}
