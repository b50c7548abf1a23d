pub mod classifier;
pub mod configuration;
pub mod dialect;
pub mod error;
pub mod icon;
pub mod language;
pub mod project;
pub mod repository;

pub use classifier::{
    ClassificationSubject, TRAINING_KEYWORDS, classify, classify_record, classify_repository,
};
pub use configuration::{FolioConfig, GitHubConfig, PathsConfig};
pub use dialect::{parse_projects, write_projects};
pub use error::AppError;
pub use icon::{ICON_TOKENS, icon_for};
pub use language::language_color;
pub use project::{Classification, ProjectRecord, UNKNOWN_LANGUAGE};
pub use repository::{RepositorySummary, UserProfile};
