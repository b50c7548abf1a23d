use std::cell::RefCell;
use std::io;

use crate::domain::AppError;
use crate::ports::ConfigStore;

/// In-memory config store. `content == None` reads as a missing file.
#[derive(Default)]
#[allow(dead_code)]
pub struct MemoryConfigStore {
    pub content: RefCell<Option<String>>,
    pub writes: RefCell<usize>,
    pub fail_writes: bool,
}

#[allow(dead_code)]
impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self { content: RefCell::new(Some(content.to_string())), ..Self::default() }
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read_config(&self) -> Result<String, AppError> {
        self.content
            .borrow()
            .clone()
            .ok_or_else(|| AppError::Io(io::Error::new(io::ErrorKind::NotFound, "no config")))
    }

    fn write_config(&self, content: &str) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::WriteFailed {
                path: self.location(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.writes.borrow_mut() += 1;
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://projects-config.yaml".to_string()
    }
}
