use crate::domain::FolioConfig;
use crate::ports::{ConfigStore, GitHub};

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GitHub, S: ConfigStore> {
    config: FolioConfig,
    github: G,
    store: S,
}

impl<G: GitHub, S: ConfigStore> AppContext<G, S> {
    /// Create a new application context.
    pub fn new(config: FolioConfig, github: G, store: S) -> Self {
        Self { config, github, store }
    }

    /// Get a reference to the GitHub client.
    pub fn github(&self) -> &G {
        &self.github
    }

    /// Get a reference to the projects config store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Account whose data is fetched.
    pub fn account(&self) -> &str {
        &self.config.github.account
    }
}
