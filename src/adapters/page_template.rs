//! Portfolio page rendering with the embedded HTML template.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::{AppError, ProjectRecord, UserProfile, language_color};

static PAGE_ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/page");

const PAGE_TEMPLATE: &str = "portfolio.html";

/// Cards show at most this many topic tags.
pub const MAX_CARD_TOPICS: usize = 5;

/// Everything the page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub profile: ProfileView,
    pub sections: Vec<SectionView>,
    /// Replaces the sections with an error banner when set.
    pub error: Option<String>,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub html_url: String,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.display_name().to_string(),
            avatar_url: profile.avatar_url.clone(),
            bio: profile.bio.clone().filter(|bio| !bio.trim().is_empty()),
            html_url: profile.html_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub id: &'static str,
    pub title: &'static str,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub language: Option<String>,
    pub language_color: &'static str,
    pub stars: u64,
    pub forks: u64,
    pub topics: Vec<String>,
}

impl From<&ProjectRecord> for CardView {
    fn from(record: &ProjectRecord) -> Self {
        let language = record.language.clone().filter(|language| !language.is_empty());
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            description: record.description.clone().filter(|d| !d.trim().is_empty()),
            icon: record.icon.clone(),
            language_color: language.as_deref().map_or("", language_color),
            language,
            stars: record.stars,
            forks: record.forks,
            topics: record.topics.iter().take(MAX_CARD_TOPICS).cloned().collect(),
        }
    }
}

/// Render the page to HTML. All values are HTML-escaped.
pub fn render_portfolio(view: &PortfolioView) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    for file in PAGE_ASSETS_DIR.files() {
        let name = file.path().to_str().ok_or_else(|| {
            AppError::RenderFailed(format!(
                "Page asset has a non UTF-8 name: {}",
                file.path().to_string_lossy()
            ))
        })?;
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::RenderFailed(format!("Page asset is not UTF-8: {}", name))
        })?;
        env.add_template(name, content).map_err(|err| {
            AppError::RenderFailed(format!("Failed to load page asset {}: {}", name, err))
        })?;
    }

    env.get_template(PAGE_TEMPLATE)
        .map_err(|err| AppError::RenderFailed(format!("Failed to access page template: {}", err)))?
        .render(view)
        .map_err(|err| AppError::RenderFailed(format!("Failed to render page template: {}", err)))
}
