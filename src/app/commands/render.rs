//! Build the portfolio page from the stored config, or the live listing when
//! the config has nothing to offer.

use std::cmp::Reverse;

use chrono::{DateTime, Datelike, Utc};
use tracing::{info, warn};

use crate::adapters::page_template::{
    CardView, PortfolioView, ProfileView, SectionView, render_portfolio,
};
use crate::app::AppContext;
use crate::domain::{
    AppError, ProjectRecord, UserProfile, classify_record, classify_repository,
    parse_projects,
};
use crate::ports::{ConfigStore, GitHub, PageSink};

/// Message shown in place of the sections when no repositories are available.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load repositories";

/// Where the rendered records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSource {
    StoredConfig,
    LiveApi,
    Unavailable,
}

/// Summary of one render run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Where the page was written.
    pub location: String,
    pub source: ProjectSource,
    pub training: usize,
    pub projects: usize,
}

pub fn execute<G: GitHub, S: ConfigStore, P: PageSink>(
    ctx: &AppContext<G, S>,
    sink: &P,
    now: DateTime<Utc>,
) -> Result<RenderOutcome, AppError> {
    let profile = match ctx.github().user_profile(ctx.account()) {
        Ok(profile) => profile,
        Err(err) => {
            warn!(account = ctx.account(), error = %err, "Profile unavailable, using placeholder");
            UserProfile::placeholder(ctx.account())
        }
    };

    let (source, records) = load_projects(ctx);
    let (training, projects): (Vec<&ProjectRecord>, Vec<&ProjectRecord>) =
        records.iter().partition(|record| classify_record(record).is_training());
    info!(?source, training = training.len(), projects = projects.len(), "Rendering portfolio");

    let view = PortfolioView {
        profile: ProfileView::from(&profile),
        sections: vec![
            section("projects", "Projects", &projects),
            section("training", "Training", &training),
        ],
        error: (source == ProjectSource::Unavailable).then(|| UNAVAILABLE_MESSAGE.to_string()),
        year: now.year(),
    };
    let html = render_portfolio(&view)?;
    sink.write_page(&html)?;

    Ok(RenderOutcome {
        location: sink.location(),
        source,
        training: training.len(),
        projects: projects.len(),
    })
}

/// Stored records when there are any, otherwise the account's public non-fork
/// repositories ordered by stars.
pub fn load_projects<G: GitHub, S: ConfigStore>(
    ctx: &AppContext<G, S>,
) -> (ProjectSource, Vec<ProjectRecord>) {
    match ctx.store().read_config() {
        Ok(text) => {
            let records = parse_projects(&text);
            if !records.is_empty() {
                return (ProjectSource::StoredConfig, records);
            }
            info!(location = %ctx.store().location(), "Projects config is empty, using live data");
        }
        Err(err) => {
            warn!(location = %ctx.store().location(), error = %err, "Projects config unreadable, using live data");
        }
    }

    let mut repos = match ctx.github().list_repositories(ctx.account()) {
        Ok(repos) => repos,
        Err(err) => {
            warn!(account = ctx.account(), error = %err, "Repositories unavailable");
            return (ProjectSource::Unavailable, Vec::new());
        }
    };
    repos.retain(|repo| !repo.fork && !repo.private);
    if repos.is_empty() {
        return (ProjectSource::Unavailable, Vec::new());
    }
    repos.sort_by_key(|repo| Reverse(repo.stars));

    let records = repos
        .iter()
        .map(|repo| ProjectRecord {
            classification: Some(classify_repository(repo)),
            ..ProjectRecord::from_repository(repo)
        })
        .collect();
    (ProjectSource::LiveApi, records)
}

fn section(id: &'static str, title: &'static str, records: &[&ProjectRecord]) -> SectionView {
    SectionView { id, title, cards: records.iter().map(|record| CardView::from(*record)).collect() }
}
