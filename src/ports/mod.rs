mod config_store;
mod github;
mod page_sink;

pub use config_store::ConfigStore;
pub use github::GitHub;
pub use page_sink::PageSink;
