//! Project records stored in the curated projects config.

use std::fmt::{self, Display};

use crate::domain::icon::icon_for;
use crate::domain::repository::RepositorySummary;

/// Language written for repositories GitHub could not detect one for.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Display grouping for a repository.
///
/// Stored values other than `training` and `project` are kept as `Other` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    Training,
    Project,
    Other(String),
}

impl Classification {
    pub fn parse(value: &str) -> Self {
        match value {
            "training" => Classification::Training,
            "project" => Classification::Project,
            other => Classification::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Classification::Training => "training",
            Classification::Project => "project",
            Classification::Other(value) => value,
        }
    }

    pub fn is_training(&self) -> bool {
        matches!(self, Classification::Training)
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the projects config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Repository name; the merge key within a config.
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Explicit classification; `None` means the caller auto-classifies.
    pub classification: Option<Classification>,
    pub icon: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub topics: Vec<String>,
    /// Raw timestamp text, only used for ordering.
    pub updated_at: Option<String>,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Build a record from a live repository, leaving classification unset.
    ///
    /// The icon is always derived from the name.
    pub fn from_repository(repo: &RepositorySummary) -> Self {
        Self {
            name: repo.name.clone(),
            description: Some(repo.description.clone().unwrap_or_default()),
            url: Some(repo.url.clone()),
            classification: None,
            icon: Some(icon_for(&repo.name).to_string()),
            language: Some(repo.language.clone().unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string())),
            stars: repo.stars,
            forks: repo.forks,
            topics: repo.topics.clone(),
            updated_at: repo.updated_at.clone(),
        }
    }
}
