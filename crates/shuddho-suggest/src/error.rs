//! Error types for the suggestion-service client.

use shuddho_core::ShuddhoError;

/// Errors from the suggestion service.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("suggestion service is not configured: {0}")]
    NotConfigured(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("malformed response envelope: {0}")]
    MalformedResponse(String),
}

impl From<SuggestError> for ShuddhoError {
    fn from(err: SuggestError) -> Self {
        match err {
            SuggestError::NotConfigured(msg) => ShuddhoError::Config(msg),
            other => ShuddhoError::Suggest(other.to_string()),
        }
    }
}
