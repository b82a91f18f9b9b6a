//! Error types for document ingestion.

use shuddho_core::ShuddhoError;

/// Errors from the document ingestion adapter.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("unsupported file type: .{0} (expected .txt, .rtf, or .docx)")]
    UnsupportedFormat(String),
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("file exceeds the {limit} byte limit ({size} bytes)")]
    TooLarge { size: u64, limit: u64 },
    #[error("docx converter unavailable: {0}")]
    ConverterUnavailable(String),
    #[error("docx conversion failed: {0}")]
    Convert(String),
}

impl From<IngestError> for ShuddhoError {
    fn from(err: IngestError) -> Self {
        ShuddhoError::Ingest(err.to_string())
    }
}
