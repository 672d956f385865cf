//! Harness error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// Config file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON of the expected shape, or a request body failed to encode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client could not be built
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<tracing_subscriber::filter::ParseError> for HarnessError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        HarnessError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
