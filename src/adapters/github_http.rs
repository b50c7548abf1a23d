//! GitHub REST client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, GitHubConfig, RepositorySummary, UserProfile};
use crate::ports::GitHub;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct HttpGitHubClient {
    api_url: Url,
    per_page: u32,
    client: Client,
}

impl HttpGitHubClient {
    /// Create a new HTTP client from the GitHub configuration.
    pub fn new(config: &GitHubConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let mut api_url = config.api_url.clone();
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        Ok(Self { api_url, per_page: config.per_page, client })
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!("API URL cannot be a base: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, AppError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, concat!("folio/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .map_err(|e| AppError::FetchFailed { what: what.to_string(), details: e.to_string() })?;

        let response = Self::check_status(response, what)?;
        response
            .json()
            .map_err(|e| AppError::ParseError { what: what.to_string(), details: e.to_string() })
    }

    fn check_status(response: Response, what: &str) -> Result<Response, AppError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(AppError::HttpStatus { what: what.to_string(), status: status.as_u16() })
        }
    }
}

impl GitHub for HttpGitHubClient {
    fn list_repositories(&self, account: &str) -> Result<Vec<RepositorySummary>, AppError> {
        let mut url = self.endpoint(&["users", account, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.per_page.to_string());

        self.get_json(url, "repositories")
    }

    fn user_profile(&self, account: &str) -> Result<UserProfile, AppError> {
        let url = self.endpoint(&["users", account])?;
        self.get_json(url, "user profile")
    }
}
