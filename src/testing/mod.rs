mod fake_github;
mod memory_config_store;
mod memory_page_sink;
mod repositories;

pub use fake_github::FakeGitHub;
pub use memory_config_store::MemoryConfigStore;
pub use memory_page_sink::MemoryPageSink;
pub use repositories::repository;
