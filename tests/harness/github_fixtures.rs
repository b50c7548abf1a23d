//! Canned GitHub API payloads.

use mockito::{Matcher, Mock, Server};

pub(crate) const REPOS_JSON: &str = r#"[
    {
        "name": "folio",
        "description": "Portfolio page builder",
        "html_url": "https://github.com/octo/folio",
        "language": "Rust",
        "stargazers_count": 12,
        "forks_count": 2,
        "topics": ["cli", "portfolio"],
        "updated_at": "2026-10-01T10:00:00Z",
        "fork": false,
        "private": false
    },
    {
        "name": "react-demo",
        "description": "Trying out hooks",
        "html_url": "https://github.com/octo/react-demo",
        "language": "JavaScript",
        "stargazers_count": 0,
        "forks_count": 0,
        "topics": [],
        "updated_at": "2026-09-01T10:00:00Z",
        "fork": false,
        "private": false
    },
    {
        "name": "upstream-copy",
        "description": null,
        "html_url": "https://github.com/octo/upstream-copy",
        "language": null,
        "stargazers_count": 0,
        "forks_count": 0,
        "updated_at": "2026-08-01T10:00:00Z",
        "fork": true,
        "private": false
    },
    {
        "name": "secret",
        "description": "Private notes",
        "html_url": "https://github.com/octo/secret",
        "updated_at": "2026-10-10T10:00:00Z",
        "fork": false,
        "private": true
    }
]"#;

pub(crate) const PROFILE_JSON: &str = r#"{
    "login": "octo",
    "name": "Octo Cat",
    "avatar_url": "https://avatars.example.com/octo",
    "bio": "Builds things",
    "html_url": "https://github.com/octo"
}"#;

/// Mock the repository listing for `account`.
pub(crate) fn mock_repositories(server: &mut Server, account: &str) -> Mock {
    server
        .mock("GET", format!("/users/{account}/repos").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REPOS_JSON)
        .create()
}

/// Mock the profile for `account`.
pub(crate) fn mock_profile(server: &mut Server, account: &str) -> Mock {
    server
        .mock("GET", format!("/users/{account}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PROFILE_JSON)
        .create()
}
