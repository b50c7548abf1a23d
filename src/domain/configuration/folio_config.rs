//! Folio configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Account used when neither the environment nor `folio.toml` names one.
pub const DEFAULT_ACCOUNT: &str = "jaygit";

/// GitHub caps `per_page` for repository listings at this value.
const MAX_PER_PAGE: u32 = 100;

/// Configuration loaded from `folio.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// GitHub API configuration.
    #[serde(default)]
    pub github: GitHubConfig,
    /// Input and output file locations.
    #[serde(default)]
    pub paths: PathsConfig,
}

impl FolioConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.github.validate()?;
        self.paths.validate()?;
        Ok(())
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    /// Account whose profile and repositories are shown.
    #[serde(default = "default_account")]
    pub account: String,
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Page size for the repository listing.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            account: default_account(),
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            per_page: default_per_page(),
        }
    }
}

impl GitHubConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.account.trim().is_empty() {
            return Err(AppError::InvalidConfig("account must not be empty".to_string()));
        }
        if !self.account.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(AppError::InvalidConfig(format!(
                "account '{}' may only contain ASCII letters, digits and '-'",
                self.account
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(AppError::InvalidConfig(format!(
                "per_page must be between 1 and {MAX_PER_PAGE}"
            )));
        }
        Ok(())
    }
}

fn default_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com/").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

/// File locations, relative to the working directory unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Curated projects config read by `render` and rewritten by `sync`.
    #[serde(default = "default_projects_config")]
    pub projects_config: PathBuf,
    /// Rendered portfolio page.
    #[serde(default = "default_page_output")]
    pub page_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { projects_config: default_projects_config(), page_output: default_page_output() }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.projects_config.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("projects_config must not be empty".to_string()));
        }
        if self.page_output.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("page_output must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_projects_config() -> PathBuf {
    PathBuf::from("projects-config.yaml")
}

fn default_page_output() -> PathBuf {
    PathBuf::from("index.html")
}
