//! Dictation bridge adapting a platform speech-capture stream.
//!
//! On start, the bridge snapshots the pre-dictation document text and mints
//! a session. Each transcript update emits the snapshot plus the whole
//! transcript-so-far: the transcript *replaces* everything dictated since
//! listening began, it is never accumulated turn by turn. Events that arrive
//! after stop, or that carry a stale session id, are ignored.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use shuddho_core::ShuddhoError;

use crate::state::{DictationState, StateMachine};

/// One incremental transcript update from the platform recognizer.
#[derive(Debug, Clone)]
pub struct TranscriptEvent {
    /// The session this update belongs to.
    pub session_id: Uuid,
    /// Everything recognized since the session started.
    pub transcript: String,
    /// Whether the recognizer considers this segment final.
    pub is_final: bool,
}

/// Narrow interface over the platform speech-capture capability.
///
/// Availability is detected once at startup; when the platform has no
/// recognizer, an [`UnsupportedRecognizer`] is injected and the dictation
/// control is hidden instead of branching on capability checks throughout
/// the UI layer.
pub trait SpeechRecognizer: Send + Sync {
    /// Whether the platform capability exists at all.
    fn is_available(&self) -> bool;
    /// Begin streaming transcripts.
    fn start(&self) -> Result<(), ShuddhoError>;
    /// Stop the stream. Idempotent.
    fn stop(&self);
}

/// Stand-in recognizer for platforms without speech capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&self) -> Result<(), ShuddhoError> {
        Err(ShuddhoError::Dictation(
            "speech recognition is not available on this platform".to_string(),
        ))
    }

    fn stop(&self) {}
}

/// Data tracked for one listening session.
#[derive(Debug, Clone)]
struct DictationSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    snapshot: String,
}

impl DictationSession {
    fn new(snapshot: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            snapshot: snapshot.to_string(),
        }
    }
}

/// Merge the transcript-so-far onto the pre-dictation snapshot.
///
/// A single-space separator is inserted only when both sides carry
/// non-whitespace content and the snapshot does not already end in
/// whitespace, so repeated updates never stack separators.
pub fn merge_transcript(snapshot: &str, transcript: &str) -> String {
    let needs_separator = !snapshot.trim().is_empty()
        && !transcript.trim().is_empty()
        && !snapshot.ends_with(char::is_whitespace);
    if needs_separator {
        format!("{} {}", snapshot, transcript)
    } else {
        format!("{}{}", snapshot, transcript)
    }
}

/// Idle <-> Listening toggle over a platform recognizer.
pub struct DictationBridge {
    state: StateMachine,
    session: Mutex<Option<DictationSession>>,
    recognizer: Box<dyn SpeechRecognizer>,
}

impl std::fmt::Debug for DictationBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictationBridge")
            .field("state", &self.state)
            .field("supported", &self.recognizer.is_available())
            .finish()
    }
}

impl DictationBridge {
    /// Create a bridge over the given recognizer.
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            state: StateMachine::new(),
            session: Mutex::new(None),
            recognizer,
        }
    }

    /// Create a bridge for a platform without speech capture.
    pub fn unsupported() -> Self {
        Self::new(Box::new(UnsupportedRecognizer))
    }

    /// Whether dictation is available at all. When `false`, the dictation
    /// control is hidden and the rest of the system functions without it.
    pub fn is_supported(&self) -> bool {
        self.recognizer.is_available()
    }

    /// Returns the current state.
    pub fn current_state(&self) -> DictationState {
        self.state.current()
    }

    /// Whether a listening session is in progress.
    pub fn is_listening(&self) -> bool {
        self.state.current() == DictationState::Listening
    }

    /// Start listening, snapshotting `current_text`.
    ///
    /// Returns the new session id. Fails if the recognizer is unavailable,
    /// already listening, or refuses to start.
    pub fn start(&self, current_text: &str) -> Result<Uuid, ShuddhoError> {
        if !self.recognizer.is_available() {
            return Err(ShuddhoError::Dictation(
                "speech recognition is not available on this platform".to_string(),
            ));
        }
        self.state.transition(DictationState::Listening)?;

        if let Err(e) = self.recognizer.start() {
            self.state.reset();
            return Err(e);
        }

        let session = DictationSession::new(current_text);
        let id = session.id;
        tracing::info!(
            session_id = %id,
            started_at = %session.started_at,
            snapshot_len = session.snapshot.len(),
            "Dictation session started"
        );

        let mut guard = self
            .session
            .lock()
            .map_err(|e| ShuddhoError::Dictation(format!("Session mutex poisoned: {}", e)))?;
        *guard = Some(session);
        Ok(id)
    }

    /// Apply a transcript update, returning the new document text.
    ///
    /// Returns `None` for events arriving while idle or carrying a stale
    /// session id; such events are ignored rather than erroring.
    pub fn transcript_update(&self, event: &TranscriptEvent) -> Option<String> {
        if !self.is_listening() {
            tracing::debug!(session_id = %event.session_id, "Ignoring transcript while idle");
            return None;
        }
        let guard = self.session.lock().ok()?;
        match guard.as_ref() {
            Some(session) if session.id == event.session_id => {
                Some(merge_transcript(&session.snapshot, &event.transcript))
            }
            _ => {
                tracing::debug!(session_id = %event.session_id, "Ignoring stale transcript event");
                None
            }
        }
    }

    /// Stop listening (user-initiated). The last emitted text stands.
    pub fn stop(&self) -> Result<(), ShuddhoError> {
        self.recognizer.stop();
        self.state.transition(DictationState::Idle)?;
        let mut guard = self
            .session
            .lock()
            .map_err(|e| ShuddhoError::Dictation(format!("Session mutex poisoned: {}", e)))?;
        if let Some(session) = guard.take() {
            tracing::info!(session_id = %session.id, "Dictation session stopped");
        }
        Ok(())
    }

    /// Handle platform-initiated termination (silence timeout, stream
    /// error). Never fatal to the rest of the session.
    pub fn platform_ended(&self) {
        self.state.reset();
        if let Ok(mut guard) = self.session.lock() {
            if let Some(session) = guard.take() {
                tracing::warn!(session_id = %session.id, "Dictation ended by platform");
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
