use crate::domain::AppError;

/// Port for the stored projects config text.
pub trait ConfigStore {
    /// Read the stored config. Callers treat failures as "no previous config".
    fn read_config(&self) -> Result<String, AppError>;

    /// Replace the stored config.
    fn write_config(&self, content: &str) -> Result<(), AppError>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}
