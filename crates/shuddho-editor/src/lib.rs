//! Editor session orchestration.
//!
//! Ties the proof core, suggestion client, ingestion adapter, and dictation
//! bridge together around the single document-text value. One session exists
//! per editing surface; every mutation replaces the text wholesale and runs
//! to completion before the next event is handled.

pub mod clipboard;
pub mod error;
pub mod hover;
pub mod session;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use error::EditorError;
pub use hover::{DismissToken, HoverController};
pub use session::EditorSession;
