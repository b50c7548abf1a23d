//! Training-versus-project heuristics.

use crate::domain::project::{Classification, ProjectRecord};
use crate::domain::repository::RepositorySummary;

/// Substrings that mark a repository as learning material.
pub const TRAINING_KEYWORDS: [&str; 15] = [
    "tutorial", "course", "learning", "practice", "exercise", "training", "workshop", "lesson",
    "bootcamp", "skill", "learn", "study", "example", "sample", "demo",
];

/// The fields classification looks at, borrowed from a record or a live repository.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationSubject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub topics: &'a [String],
    pub fork: bool,
    pub stars: u64,
    /// Explicit classification; returned as-is when present.
    pub stored: Option<&'a Classification>,
}

impl<'a> From<&'a ProjectRecord> for ClassificationSubject<'a> {
    fn from(record: &'a ProjectRecord) -> Self {
        Self {
            name: &record.name,
            description: record.description.as_deref(),
            topics: &record.topics,
            // Stored records carry no fork flag.
            fork: false,
            stars: record.stars,
            stored: record.classification.as_ref(),
        }
    }
}

impl<'a> From<&'a RepositorySummary> for ClassificationSubject<'a> {
    fn from(repo: &'a RepositorySummary) -> Self {
        Self {
            name: &repo.name,
            description: repo.description.as_deref(),
            topics: &repo.topics,
            fork: repo.fork,
            stars: repo.stars,
            stored: None,
        }
    }
}

/// Classify a repository. First matching rule wins:
///
/// 1. explicit stored classification
/// 2. keyword in the name
/// 3. keyword in the description
/// 4. keyword in any topic
/// 5. fork with no stars and no description
/// 6. otherwise `project`
pub fn classify(subject: &ClassificationSubject<'_>) -> Classification {
    if let Some(stored) = subject.stored {
        return stored.clone();
    }

    if mentions_training(subject.name) {
        return Classification::Training;
    }

    if subject.description.is_some_and(mentions_training) {
        return Classification::Training;
    }

    if subject.topics.iter().any(|topic| mentions_training(topic)) {
        return Classification::Training;
    }

    let undescribed = subject.description.is_none_or(str::is_empty);
    if subject.fork && subject.stars == 0 && undescribed {
        return Classification::Training;
    }

    Classification::Project
}

/// Classify a record, honoring its stored classification.
pub fn classify_record(record: &ProjectRecord) -> Classification {
    classify(&ClassificationSubject::from(record))
}

/// Classify a live repository from its metadata alone.
pub fn classify_repository(repo: &RepositorySummary) -> Classification {
    classify(&ClassificationSubject::from(repo))
}

fn mentions_training(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TRAINING_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}
