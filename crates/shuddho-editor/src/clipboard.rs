//! Clipboard adapter.
//!
//! The editor copies the fully corrected text to the system clipboard on
//! request. Failures are surfaced to the user rather than silently
//! swallowed; a failed copy changes no editor state.

use crate::error::EditorError;

/// Collaborator contract for writing text to a clipboard.
pub trait Clipboard: Send {
    /// Place `text` on the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), EditorError>;
}

/// System clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open a handle to the system clipboard.
    ///
    /// Fails on headless environments without a clipboard service.
    pub fn new() -> Result<Self, EditorError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| EditorError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), EditorError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| EditorError::Clipboard(e.to_string()))?;
        tracing::info!(text_len = text.len(), "Copied corrected text to clipboard");
        Ok(())
    }
}

/// In-memory clipboard for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    /// The last written text, if any.
    pub contents: Option<String>,
    /// When set, every write fails, for exercising the error path.
    pub fail: bool,
}

impl MemoryClipboard {
    /// Create an empty in-memory clipboard.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), EditorError> {
        if self.fail {
            return Err(EditorError::Clipboard(
                "clipboard unavailable".to_string(),
            ));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_stores_text() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_text("আমি ভাল আছি").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("আমি ভাল আছি"));
    }

    #[test]
    fn test_memory_clipboard_overwrites() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_clipboard_failure() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::new()
        };
        let err = clipboard.write_text("text").unwrap_err();
        assert!(matches!(err, EditorError::Clipboard(_)));
        assert!(clipboard.contents.is_none());
    }
}
