use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{ConfigStore, PageSink};

/// Projects config stored as a single file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for FileConfigStore {
    fn read_config(&self) -> Result<String, AppError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn write_config(&self, content: &str) -> Result<(), AppError> {
        write_text(&self.path, content)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Rendered page written to a file.
#[derive(Debug, Clone)]
pub struct FilePageSink {
    path: PathBuf,
}

impl FilePageSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSink for FilePageSink {
    fn write_page(&self, html: &str) -> Result<(), AppError> {
        write_text(&self.path, html)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write the whole file, creating parent directories as needed.
fn write_text(path: &Path, content: &str) -> Result<(), AppError> {
    let wrap = |source| AppError::WriteFailed { path: path.display().to_string(), source };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, content).map_err(wrap)
}
