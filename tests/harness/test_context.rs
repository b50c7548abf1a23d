//! Shared testing harness for `folio` integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated working directory for CLI and library exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `folio` binary in the work directory.
    ///
    /// Account and config overrides from the outer environment are removed.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("Failed to locate folio binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("GITHUB_USERNAME")
            .env_remove("FOLIO_CONFIG")
            .env("RUST_LOG", "info");
        cmd
    }

    /// Write a `folio.toml` pointing the GitHub client at `api_url`.
    pub(crate) fn write_folio_config(&self, api_url: &str, account: &str) {
        fs::write(self.work_dir.join("folio.toml"), folio_config_toml(api_url, account))
            .expect("Failed to write folio.toml");
    }

    /// Path to the projects config in the work directory.
    pub(crate) fn projects_config_path(&self) -> PathBuf {
        self.work_dir.join("projects-config.yaml")
    }

    pub(crate) fn write_projects_config(&self, content: &str) {
        fs::write(self.projects_config_path(), content).expect("Failed to write projects config");
    }

    pub(crate) fn read_projects_config(&self) -> String {
        fs::read_to_string(self.projects_config_path()).expect("Projects config should exist")
    }

    /// Path to the default rendered page.
    pub(crate) fn page_path(&self) -> PathBuf {
        self.work_dir.join("index.html")
    }

    pub(crate) fn read_page(&self) -> String {
        fs::read_to_string(self.page_path()).expect("Rendered page should exist")
    }
}

/// `folio.toml` content for a mock API server.
pub(crate) fn folio_config_toml(api_url: &str, account: &str) -> String {
    format!(
        r#"[github]
account = "{account}"
api_url = "{api_url}"
timeout_secs = 5
"#
    )
}
