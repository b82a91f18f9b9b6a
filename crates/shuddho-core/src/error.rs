use thiserror::Error;

/// Top-level error type for the Shuddho system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for ShuddhoError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShuddhoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Suggestion service error: {0}")]
    Suggest(String),

    #[error("Document ingestion error: {0}")]
    Ingest(String),

    #[error("Dictation error: {0}")]
    Dictation(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ShuddhoError {
    fn from(err: toml::de::Error) -> Self {
        ShuddhoError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ShuddhoError {
    fn from(err: toml::ser::Error) -> Self {
        ShuddhoError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ShuddhoError {
    fn from(err: serde_json::Error) -> Self {
        ShuddhoError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Shuddho operations.
pub type Result<T> = std::result::Result<T, ShuddhoError>;
