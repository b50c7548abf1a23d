use crate::domain::AppError;

/// Port receiving the rendered portfolio page.
pub trait PageSink {
    fn write_page(&self, html: &str) -> Result<(), AppError>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}
