use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::PageSink;

/// Captures the rendered page.
#[derive(Default)]
pub struct MemoryPageSink {
    pub html: RefCell<Option<String>>,
}

impl MemoryPageSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone().unwrap_or_default()
    }
}

impl PageSink for MemoryPageSink {
    fn write_page(&self, html: &str) -> Result<(), AppError> {
        *self.html.borrow_mut() = Some(html.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory://index.html".to_string()
    }
}
