pub mod filesystem;
pub mod github_http;
pub mod page_template;

pub use filesystem::{FileConfigStore, FilePageSink};
pub use github_http::HttpGitHubClient;
pub use page_template::render_portfolio;
