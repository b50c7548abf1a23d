//! Resolve the effective configuration from `folio.toml` and the environment.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::load_config;
use crate::domain::{AppError, FolioConfig};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";
/// Environment variable overriding the GitHub account.
pub const ACCOUNT_ENV: &str = "GITHUB_USERNAME";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Config file location: `FOLIO_CONFIG` if set, else `folio.toml` under `root`.
pub fn config_path(root: &Path) -> PathBuf {
    match env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => root.join(path.trim()),
        _ => root.join(DEFAULT_CONFIG_FILE),
    }
}

/// Load the config for `root` and apply environment overrides.
pub fn resolve_config(root: &Path) -> Result<FolioConfig, AppError> {
    let path = config_path(root);
    debug!(path = %path.display(), "Loading configuration");
    let mut config = load_config(&path)?;

    if let Ok(account) = env::var(ACCOUNT_ENV)
        && !account.trim().is_empty()
    {
        config.github.account = account.trim().to_string();
        config.validate()?;
    }
    Ok(config)
}
