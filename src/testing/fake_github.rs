use std::cell::Cell;

use crate::domain::{AppError, RepositorySummary, UserProfile};
use crate::ports::GitHub;

/// Canned GitHub responses. `None` simulates a failed request.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeGitHub {
    pub repositories: Option<Vec<RepositorySummary>>,
    pub profile: Option<UserProfile>,
    pub repository_calls: Cell<usize>,
    pub profile_calls: Cell<usize>,
}

#[allow(dead_code)]
impl FakeGitHub {
    pub fn with_repositories(repositories: Vec<RepositorySummary>) -> Self {
        Self { repositories: Some(repositories), ..Self::default() }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}

impl GitHub for FakeGitHub {
    fn list_repositories(&self, account: &str) -> Result<Vec<RepositorySummary>, AppError> {
        self.repository_calls.set(self.repository_calls.get() + 1);
        self.repositories.clone().ok_or_else(|| AppError::FetchFailed {
            what: "repositories".into(),
            details: format!("fake GitHub has no repositories for {account}"),
        })
    }

    fn user_profile(&self, account: &str) -> Result<UserProfile, AppError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile.clone().ok_or_else(|| AppError::HttpStatus {
            what: format!("user profile for {account}"),
            status: 404,
        })
    }
}
