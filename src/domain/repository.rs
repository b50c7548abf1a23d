//! Live GitHub account data.

use serde::{Deserialize, Serialize};

/// One repository as returned by the GitHub repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "html_url", default)]
    pub url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,
    #[serde(rename = "forks_count", default)]
    pub forks: u64,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
}

/// Public profile of the account shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub html_url: String,
}

impl UserProfile {
    /// Profile shown when the live profile cannot be fetched.
    pub fn placeholder(account: &str) -> Self {
        Self {
            login: account.to_string(),
            name: None,
            avatar_url: format!("https://github.com/{account}.png"),
            bio: None,
            html_url: format!("https://github.com/{account}"),
        }
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}
