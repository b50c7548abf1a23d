//! GitHub account data port definition.

use crate::domain::{AppError, RepositorySummary, UserProfile};

/// Port for reading an account's live data.
///
/// Each call is a single request; implementations do not retry.
pub trait GitHub {
    /// List the account's repositories.
    fn list_repositories(&self, account: &str) -> Result<Vec<RepositorySummary>, AppError>;

    /// Fetch the account's public profile.
    fn user_profile(&self, account: &str) -> Result<UserProfile, AppError>;
}
