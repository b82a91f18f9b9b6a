//! Dictation bridge for the Shuddho editor.
//!
//! Wraps a platform speech-capture stream as a simple Idle <-> Listening
//! toggle. While listening, each incremental transcript update replaces
//! everything dictated since listening began, merged onto a snapshot of the
//! pre-dictation text. Thread-safe state management via `Arc<Mutex<>>`.

pub mod bridge;
pub mod state;

pub use bridge::{DictationBridge, SpeechRecognizer, TranscriptEvent, UnsupportedRecognizer};
pub use state::{DictationState, StateMachine};
