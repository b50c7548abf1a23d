//! Folio configuration loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, FolioConfig};

/// Load `folio.toml` from `path`, falling back to defaults when it is absent.
pub fn load_config(path: &Path) -> Result<FolioConfig, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(FolioConfig::default()),
        Err(err) => Err(AppError::config_error(format!(
            "Failed to read config {}: {}",
            path.display(),
            err
        ))),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<FolioConfig, AppError> {
    let config: FolioConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
