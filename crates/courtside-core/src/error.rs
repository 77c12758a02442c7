use thiserror::Error;

/// Top-level error type for the Courtside system.
///
/// Each variant wraps a subsystem-specific failure. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for
/// CourtsideError` so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourtsideError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("News feed error: {0}")]
    Feed(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CourtsideError {
    fn from(err: toml::de::Error) -> Self {
        CourtsideError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CourtsideError {
    fn from(err: toml::ser::Error) -> Self {
        CourtsideError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CourtsideError {
    fn from(err: serde_json::Error) -> Self {
        CourtsideError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Courtside operations.
pub type Result<T> = std::result::Result<T, CourtsideError>;
