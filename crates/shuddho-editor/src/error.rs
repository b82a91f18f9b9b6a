//! Error types for the editor session.

use shuddho_core::ShuddhoError;
use shuddho_ingest::IngestError;

/// Errors from editor-session operations.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("document error: {0}")]
    Ingest(#[from] IngestError),
    #[error("dictation error: {0}")]
    Dictation(String),
    #[error("editor error: {0}")]
    Other(String),
}

impl From<ShuddhoError> for EditorError {
    fn from(err: ShuddhoError) -> Self {
        match err {
            ShuddhoError::Clipboard(msg) => EditorError::Clipboard(msg),
            ShuddhoError::Dictation(msg) => EditorError::Dictation(msg),
            other => EditorError::Other(other.to_string()),
        }
    }
}

impl From<EditorError> for ShuddhoError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::Clipboard(msg) => ShuddhoError::Clipboard(msg),
            EditorError::Dictation(msg) => ShuddhoError::Dictation(msg),
            EditorError::Ingest(inner) => inner.into(),
            EditorError::Other(msg) => ShuddhoError::Editor(msg),
        }
    }
}
