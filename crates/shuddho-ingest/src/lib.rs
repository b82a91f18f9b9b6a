//! Document Ingestion Adapter.
//!
//! Converts an uploaded document into plain text, dispatching on the file
//! extension: `.txt` is decoded directly, `.rtf` gets a best-effort markup
//! strip, and `.docx` is delegated to an external converter. Anything else
//! fails with an unsupported-format error, leaving the document text
//! unchanged upstream.

pub mod docx;
pub mod error;
pub mod rtf;

use std::path::Path;

pub use docx::{DocxConverter, PandocConverter};
pub use error::IngestError;
pub use rtf::strip_rtf;

/// Parse a document file into plain text.
///
/// The extension comparison is case-insensitive. `max_file_bytes` guards
/// against accidentally loading huge files into the editor; pass
/// `u64::MAX` to disable the check.
pub async fn parse_document(
    path: &Path,
    converter: &dyn DocxConverter,
    max_file_bytes: u64,
) -> Result<String, IngestError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let size = tokio::fs::metadata(path).await?.len();
    if size > max_file_bytes {
        return Err(IngestError::TooLarge {
            size,
            limit: max_file_bytes,
        });
    }

    tracing::info!(path = %path.display(), extension = %extension, "Parsing document");

    match extension.as_str() {
        "txt" => Ok(tokio::fs::read_to_string(path).await?),
        "rtf" => {
            let raw = tokio::fs::read_to_string(path).await?;
            Ok(strip_rtf(&raw))
        }
        "docx" => converter.extract_text(path).await,
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeConverter {
        result: Result<String, String>,
    }

    #[async_trait]
    impl DocxConverter for FakeConverter {
        async fn extract_text(&self, _path: &Path) -> Result<String, IngestError> {
            self.result
                .clone()
                .map_err(IngestError::Convert)
        }
    }

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_parse_txt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.txt", "আমি ভালো আছি");
        let converter = FakeConverter {
            result: Ok(String::new()),
        };
        let text = parse_document(&path, &converter, u64::MAX).await.unwrap();
        assert_eq!(text, "আমি ভালো আছি");
    }

    #[tokio::test]
    async fn test_parse_txt_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.TXT", "text");
        let converter = FakeConverter {
            result: Ok(String::new()),
        };
        let text = parse_document(&path, &converter, u64::MAX).await.unwrap();
        assert_eq!(text, "text");
    }

    #[tokio::test]
    async fn test_parse_rtf_strips_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.rtf", r"{\rtf1 plain words}");
        let converter = FakeConverter {
            result: Ok(String::new()),
        };
        let text = parse_document(&path, &converter, u64::MAX).await.unwrap();
        assert_eq!(text, "plain words");
    }

    #[tokio::test]
    async fn test_parse_docx_delegates_to_converter() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.docx", "binary-ish");
        let converter = FakeConverter {
            result: Ok("converted text".to_string()),
        };
        let text = parse_document(&path, &converter, u64::MAX).await.unwrap();
        assert_eq!(text, "converted text");
    }

    #[tokio::test]
    async fn test_parse_docx_converter_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.docx", "binary-ish");
        let converter = FakeConverter {
            result: Err("corrupt archive".to_string()),
        };
        let err = parse_document(&path, &converter, u64::MAX)
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Convert(_)));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.pdf", "%PDF-");
        let converter = FakeConverter {
            result: Ok(String::new()),
        };
        let err = parse_document(&path, &converter, u64::MAX)
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ext) if ext == "pdf"));
    }

    #[tokio::test]
    async fn test_missing_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "README", "no extension");
        let converter = FakeConverter {
            result: Ok(String::new()),
        };
        let err = parse_document(&path, &converter, u64::MAX)
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ext) if ext.is_empty()));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let converter = FakeConverter {
            result: Ok(String::new()),
        };
        let err = parse_document(Path::new("/nonexistent/doc.txt"), &converter, u64::MAX)
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Read(_)));
    }

    #[tokio::test]
    async fn test_file_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.txt", "0123456789");
        let converter = FakeConverter {
            result: Ok(String::new()),
        };
        let err = parse_document(&path, &converter, 5).await.unwrap_err();
        assert!(matches!(err, IngestError::TooLarge { size: 10, limit: 5 }));
    }
}
