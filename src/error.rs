use thiserror::Error;

/// Errors that can occur while converting an export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to read the export file or write a recipe file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A duration string did not match the ISO-8601 subset grammar
    #[error("Invalid ISO-8601 duration: {0}")]
    InvalidDuration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
