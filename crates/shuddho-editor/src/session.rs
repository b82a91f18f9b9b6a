//! Editor session: the single owner of the document text.
//!
//! One correction cycle: text -> suggestion check -> filter against the
//! dictionary -> annotate for rendering; accepting or bulk-applying
//! corrections produces new text, which feeds the next cycle. All proof
//! operations are synchronous; only the suggestion check, document loading,
//! and dictation stream suspend.

use std::path::Path;
use std::time::Duration;

use uuid::Uuid;

use shuddho_core::{Correction, Segment};
use shuddho_dictation::{DictationBridge, TranscriptEvent};
use shuddho_ingest::DocxConverter;
use shuddho_proof::{annotate, apply_all, apply_one, Dictionary, FilterCache};
use shuddho_suggest::SuggestionService;

use crate::clipboard::Clipboard;
use crate::error::EditorError;
use crate::hover::HoverController;

/// A proofreading session over one document.
pub struct EditorSession {
    text: String,
    corrections: Vec<Correction>,
    dictionary: Dictionary,
    filter_cache: FilterCache,
    hover: HoverController,
    suggest: Option<Box<dyn SuggestionService>>,
    dictation: DictationBridge,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a session with no suggestion service (disabled state) and no
    /// dictation support.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            corrections: Vec::new(),
            dictionary: Dictionary::new(),
            filter_cache: FilterCache::new(),
            hover: HoverController::default(),
            suggest: None,
            dictation: DictationBridge::unsupported(),
        }
    }

    /// Attach a suggestion service, enabling correction-dependent actions.
    pub fn with_suggest(mut self, service: Box<dyn SuggestionService>) -> Self {
        self.suggest = Some(service);
        self
    }

    /// Attach a dictation bridge.
    pub fn with_dictation(mut self, bridge: DictationBridge) -> Self {
        self.dictation = bridge;
        self
    }

    /// Seed the ignore-dictionary (normally loaded from disk).
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Override the hover dismiss grace delay.
    pub fn with_hover_delay(mut self, delay: Duration) -> Self {
        self.hover = HoverController::new(delay);
        self
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Whether the suggestion service is configured. When `false`, the
    /// session is in the disabled state: checks are no-ops and the text is
    /// rendered without highlighting.
    pub fn is_enabled(&self) -> bool {
        self.suggest.is_some()
    }

    /// The current document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The latest unfiltered corrections.
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    /// The ignore-dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The hover/popover controller.
    pub fn hover(&mut self) -> &mut HoverController {
        &mut self.hover
    }

    /// The dictation bridge.
    pub fn dictation(&self) -> &DictationBridge {
        &self.dictation
    }

    // =========================================================================
    // Text mutation
    // =========================================================================

    /// Replace the document text wholesale (keystroke, import, dictation).
    ///
    /// Existing corrections are kept; the annotator tolerates phrases that
    /// no longer occur, and stale accepts are no-ops.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Load a document file into the session, replacing the text.
    ///
    /// On any ingestion error the text is left unchanged and the error is
    /// surfaced to the caller.
    pub async fn load_document(
        &mut self,
        path: &Path,
        converter: &dyn DocxConverter,
        max_file_bytes: u64,
    ) -> Result<(), EditorError> {
        let text = shuddho_ingest::parse_document(path, converter, max_file_bytes).await?;
        self.set_text(text);
        Ok(())
    }

    // =========================================================================
    // Correction cycle
    // =========================================================================

    /// Ask the suggestion service to check the current text.
    ///
    /// In the disabled state this is a no-op. A transient service failure
    /// clears the corrections and never touches the text; the response may
    /// be stale relative to concurrent edits, which downstream operations
    /// tolerate by construction.
    pub async fn run_check(&mut self) {
        let Some(service) = &self.suggest else {
            tracing::debug!("Suggestion service not configured; skipping check");
            return;
        };
        match service.check(&self.text).await {
            Ok(corrections) => {
                tracing::info!(count = corrections.len(), "Corrections received");
                self.corrections = corrections;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Suggestion check failed; treating corrections as empty");
                self.corrections.clear();
            }
        }
    }

    /// The corrections that survive the ignore-dictionary, memoized.
    pub fn filtered(&mut self) -> Vec<Correction> {
        self.filter_cache
            .filtered(&self.corrections, &self.dictionary)
            .to_vec()
    }

    /// The annotated rendering of the current text.
    ///
    /// In the disabled state this is the identity: one plain run, no
    /// highlighting, no popovers.
    pub fn rendered(&mut self) -> Vec<Segment> {
        if !self.is_enabled() {
            return vec![Segment::Plain(self.text.clone())];
        }
        let filtered = self.filtered();
        annotate(&self.text, &filtered)
    }

    /// Accept one correction: replace the first occurrence of its phrase.
    ///
    /// Stale corrections (phrase absent) are a no-op. Closes any open
    /// popover.
    pub fn apply(&mut self, correction: &Correction) {
        self.text = apply_one(&self.text, correction);
        self.hover.dismiss();
    }

    /// Accept the correction shown in the open popover, if any.
    pub fn accept_active(&mut self) -> bool {
        match self.hover.active().cloned() {
            Some(active) => {
                self.apply(&active.correction);
                true
            }
            None => false,
        }
    }

    /// Apply every filtered correction at once, longest phrase first.
    ///
    /// Clears the active-correction state: spans are recomputed against the
    /// new text on the next render.
    pub fn fix_all(&mut self) {
        let filtered = self.filtered();
        self.text = apply_all(&self.text, &filtered);
        self.hover.dismiss();
    }

    /// The fully corrected text, without mutating the document.
    pub fn corrected_text(&mut self) -> String {
        let filtered = self.filtered();
        apply_all(&self.text, &filtered)
    }

    /// Copy the fully corrected text to a clipboard.
    ///
    /// A clipboard failure is surfaced to the caller and changes no state.
    pub fn copy_corrected(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), EditorError> {
        let corrected = self.corrected_text();
        clipboard.write_text(&corrected)
    }

    /// Dismiss the open popover without applying anything.
    pub fn ignore_active(&mut self) {
        self.hover.dismiss();
    }

    /// Add a phrase to the ignore-dictionary. Returns whether it was new.
    pub fn add_to_dictionary(&mut self, word: impl Into<String>) -> bool {
        self.dictionary.add(word)
    }

    /// Add the active popover's flagged phrase to the dictionary and close
    /// the popover. Returns the phrase that was added.
    pub fn add_active_to_dictionary(&mut self) -> Option<String> {
        let word = self
            .hover
            .active()
            .map(|active| active.correction.incorrect.clone())?;
        self.dictionary.add(word.clone());
        self.hover.dismiss();
        Some(word)
    }

    // =========================================================================
    // Dictation
    // =========================================================================

    /// Start dictation, snapshotting the current text.
    pub fn start_dictation(&mut self) -> Result<Uuid, EditorError> {
        Ok(self.dictation.start(&self.text)?)
    }

    /// Apply an incremental transcript event, replacing the document text.
    ///
    /// Returns `false` for late or stale events, which leave the text
    /// untouched.
    pub fn apply_transcript(&mut self, event: &TranscriptEvent) -> bool {
        match self.dictation.transcript_update(event) {
            Some(text) => {
                self.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Stop dictation. The last emitted text stands.
    pub fn stop_dictation(&mut self) -> Result<(), EditorError> {
        Ok(self.dictation.stop()?)
    }
}
