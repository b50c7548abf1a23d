//! API Facade for the application.
//!
//! Glues configuration, adapters and command execution together. The `_at`
//! variants resolve `folio.toml` and relative paths against an explicit root
//! instead of the current directory.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::adapters::{FileConfigStore, FilePageSink, HttpGitHubClient};
use crate::app::commands::{render, sync};
use crate::app::{AppContext, config};
use crate::domain::FolioConfig;

pub use crate::app::commands::render::{ProjectSource, RenderOutcome};
pub use crate::app::commands::sync::SyncOutcome;
pub use crate::domain::AppError;

/// Create an `AppContext` backed by the GitHub REST API and the filesystem.
fn create_context(
    root: &Path,
    config: FolioConfig,
) -> Result<AppContext<HttpGitHubClient, FileConfigStore>, AppError> {
    let github = HttpGitHubClient::new(&config.github)?;
    let store = FileConfigStore::new(root.join(&config.paths.projects_config));
    Ok(AppContext::new(config, github, store))
}

/// Refresh the projects config in the current directory.
pub fn sync() -> Result<SyncOutcome, AppError> {
    sync_at(std::env::current_dir()?)
}

/// Refresh the projects config under `root`.
pub fn sync_at(root: impl Into<PathBuf>) -> Result<SyncOutcome, AppError> {
    let root = root.into();
    let config = config::resolve_config(&root)?;
    sync_with(&root, config)
}

/// Refresh the projects config under `root` with an already resolved config.
pub fn sync_with(root: &Path, config: FolioConfig) -> Result<SyncOutcome, AppError> {
    let ctx = create_context(root, config)?;
    sync::execute(&ctx, Utc::now())
}

/// Render the portfolio page in the current directory.
///
/// `output` overrides the configured page location.
pub fn render(output: Option<PathBuf>) -> Result<RenderOutcome, AppError> {
    render_at(std::env::current_dir()?, output)
}

/// Render the portfolio page under `root`.
pub fn render_at(
    root: impl Into<PathBuf>,
    output: Option<PathBuf>,
) -> Result<RenderOutcome, AppError> {
    let root = root.into();
    let config = config::resolve_config(&root)?;
    render_with(&root, config, output)
}

/// Render the portfolio page under `root` with an already resolved config.
pub fn render_with(
    root: &Path,
    config: FolioConfig,
    output: Option<PathBuf>,
) -> Result<RenderOutcome, AppError> {
    let page = root.join(output.as_ref().unwrap_or(&config.paths.page_output));
    let ctx = create_context(root, config)?;
    render::execute(&ctx, &FilePageSink::new(page), Utc::now())
}
