//! Refresh the stored projects config from the live repository listing.
//!
//! Manually set classifications survive a sync; every other field, icons
//! included, is rebuilt from the live data.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, Classification, ProjectRecord, RepositorySummary, classify_repository,
    parse_projects, write_projects,
};
use crate::ports::{ConfigStore, GitHub};

/// Summary of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Where the config was written.
    pub location: String,
    pub total: usize,
    pub training: usize,
    pub projects: usize,
    /// Classifications carried over from the previous config.
    pub preserved: usize,
}

/// Records produced by a merge, plus how many classifications were carried over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedProjects {
    pub records: Vec<ProjectRecord>,
    pub preserved: usize,
}

/// Fetch, merge and write. Nothing is written when the fetch fails.
pub fn execute<G: GitHub, S: ConfigStore>(
    ctx: &AppContext<G, S>,
    now: DateTime<Utc>,
) -> Result<SyncOutcome, AppError> {
    info!(account = ctx.account(), "Fetching repositories from GitHub");
    let live = ctx.github().list_repositories(ctx.account())?;

    let previous = load_previous(ctx.store());
    let merged = merge_projects(&live, previous.as_deref());
    info!(public = merged.records.len(), fetched = live.len(), "Found public repositories");

    let content = write_projects(&merged.records, now);
    ctx.store().write_config(&content)?;

    let training = merged
        .records
        .iter()
        .filter(|r| r.classification.as_ref().is_some_and(Classification::is_training))
        .count();
    let projects = merged
        .records
        .iter()
        .filter(|r| r.classification == Some(Classification::Project))
        .count();

    Ok(SyncOutcome {
        location: ctx.store().location(),
        total: merged.records.len(),
        training,
        projects,
        preserved: merged.preserved,
    })
}

/// Parse the stored config, treating any read failure as "no previous config".
pub fn load_previous<S: ConfigStore>(store: &S) -> Option<Vec<ProjectRecord>> {
    match store.read_config() {
        Ok(text) => Some(parse_projects(&text)),
        Err(err) => {
            warn!(location = %store.location(), error = %err, "No usable existing config, starting fresh");
            None
        }
    }
}

/// Merge live repositories with the previous records.
///
/// Private repositories are dropped. A previous explicit classification wins
/// over auto-detection; on duplicate previous names the last one counts. The
/// result is ordered by `updated_at`, newest first, with missing or
/// unparseable timestamps last.
pub fn merge_projects(
    live: &[RepositorySummary],
    previous: Option<&[ProjectRecord]>,
) -> MergedProjects {
    let known: HashMap<&str, &ProjectRecord> = previous
        .unwrap_or_default()
        .iter()
        .map(|record| (record.name.as_str(), record))
        .collect();

    let mut preserved = 0;
    let mut records: Vec<ProjectRecord> = live
        .iter()
        .filter(|repo| !repo.private)
        .map(|repo| {
            let mut record = ProjectRecord::from_repository(repo);
            let stored = known.get(repo.name.as_str()).and_then(|prev| prev.classification.as_ref());
            record.classification = Some(match stored {
                Some(stored) => {
                    preserved += 1;
                    stored.clone()
                }
                None => classify_repository(repo),
            });
            record
        })
        .collect();

    records.sort_by_key(|record| Reverse(updated_at_key(record)));

    MergedProjects { records, preserved }
}

fn updated_at_key(record: &ProjectRecord) -> Option<DateTime<FixedOffset>> {
    record.updated_at.as_deref().and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
}
