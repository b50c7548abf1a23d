pub mod folio_config;
pub mod loader;

pub use folio_config::{DEFAULT_ACCOUNT, FolioConfig, GitHubConfig, PathsConfig};
pub use loader::{load_config, parse_config_content};
