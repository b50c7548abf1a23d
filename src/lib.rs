//! folio: keep a GitHub portfolio page and its curated projects config in sync.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, ProjectSource, RenderOutcome, SyncOutcome, render, render_at, render_with, sync,
    sync_at, sync_with,
};
pub use domain::{
    Classification, FolioConfig, ProjectRecord, RepositorySummary, classify, icon_for,
    parse_projects, write_projects,
};
