use crate::domain::RepositorySummary;

/// A public, non-fork repository with no stars and a plain description.
pub fn repository(name: &str, updated_at: &str) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        description: Some(format!("{name} repository")),
        url: format!("https://github.com/octo/{name}"),
        language: Some("Rust".to_string()),
        updated_at: Some(updated_at.to_string()),
        ..RepositorySummary::default()
    }
}
