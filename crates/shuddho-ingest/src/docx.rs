//! External docx-to-text conversion.
//!
//! Office documents are not parsed in-process; extraction is delegated to an
//! external converter behind the [`DocxConverter`] trait. The production
//! implementation shells out to `pandoc`. A converter that is missing or
//! fails reports a descriptive error instead of silently producing empty
//! text.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::IngestError;

/// Collaborator contract for extracting raw text from a .docx file.
#[async_trait]
pub trait DocxConverter: Send + Sync {
    /// Extract the plain text content of the document at `path`.
    async fn extract_text(&self, path: &Path) -> Result<String, IngestError>;
}

/// Converts .docx files by invoking an external `pandoc`-compatible program.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: String,
}

impl PandocConverter {
    /// Create a converter that invokes `program` (normally `pandoc`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Probe whether the external program is installed and runnable.
    pub async fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocxConverter for PandocConverter {
    async fn extract_text(&self, path: &Path) -> Result<String, IngestError> {
        let output = Command::new(&self.program)
            .arg("--from=docx")
            .arg("--to=plain")
            .arg(path)
            .output()
            .await
            .map_err(|e| {
                IngestError::ConverterUnavailable(format!(
                    "could not run '{}': {} (is it installed?)",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(IngestError::Convert(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::info!(
            path = %path.display(),
            chars = text.len(),
            "Extracted text from docx"
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_converter_reports_unavailable() {
        let converter = PandocConverter::new("definitely-not-a-real-program");
        let err = converter
            .extract_text(Path::new("document.docx"))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::ConverterUnavailable(_)));
        assert!(err.to_string().contains("definitely-not-a-real-program"));
    }

    #[tokio::test]
    async fn test_missing_converter_probe() {
        let converter = PandocConverter::new("definitely-not-a-real-program");
        assert!(!converter.is_available().await);
    }

    #[tokio::test]
    async fn test_failing_converter_reports_convert_error() {
        // `false` exists on any Unix and always exits non-zero.
        let converter = PandocConverter::new("false");
        let result = converter.extract_text(Path::new("document.docx")).await;
        match result {
            Err(IngestError::Convert(_)) => {}
            Err(IngestError::ConverterUnavailable(_)) => {
                // Acceptable on platforms without `false` in PATH.
            }
            other => panic!("Expected conversion failure, got {:?}", other),
        }
    }
}
