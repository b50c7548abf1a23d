use std::io;

use thiserror::Error;

/// Library-wide error type for folio operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Request to the live API did not produce a response.
    #[error("Failed to fetch {what}: {details}")]
    FetchFailed { what: String, details: String },

    /// Live API answered with a non-success status.
    #[error("Failed to fetch {what}: HTTP {status}")]
    HttpStatus { what: String, status: u16 },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Page template could not be loaded or rendered.
    #[error("Failed to render page: {0}")]
    RenderFailed(String),

    /// Output file could not be written.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// True for failures that came from talking to the live API.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, AppError::FetchFailed { .. } | AppError::HttpStatus { .. })
    }

    /// Closest `io::ErrorKind` for the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::WriteFailed { source: err, .. } => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::HttpStatus { status: 404, .. } => io::ErrorKind::NotFound,
            AppError::FetchFailed { .. } | AppError::HttpStatus { .. } => {
                io::ErrorKind::ConnectionAborted
            }
            AppError::RenderFailed(_) => io::ErrorKind::Other,
        }
    }
}
