//! Core data model for the proofreading engine.
//!
//! A [`Correction`] is one suggested fix produced by the suggestion service.
//! The annotator partitions document text into [`Segment`]s for rendering,
//! and the hover controller tracks an [`ActiveCorrection`] while a flagged
//! span's popover is open.

use serde::{Deserialize, Serialize};

/// One suggested fix for a flagged phrase.
///
/// Immutable once received from the suggestion service. No uniqueness
/// invariant holds across a response: multiple corrections may carry
/// duplicate or overlapping `incorrect` phrases, and downstream consumers
/// must tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Correction {
    /// The flagged phrase, verbatim from the original text.
    pub incorrect: String,
    /// The proposed replacement for the flagged phrase.
    pub correct: String,
    /// Human-readable rationale for the correction.
    pub explanation: String,
}

impl Correction {
    /// Convenience constructor, mainly for tests and fixtures.
    pub fn new(
        incorrect: impl Into<String>,
        correct: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            incorrect: incorrect.into(),
            correct: correct.into(),
            explanation: explanation.into(),
        }
    }
}

/// One piece of the annotated-text partition.
///
/// The annotator splits document text into an alternating sequence of plain
/// runs and flagged spans. Concatenating `text()` over all segments in order
/// reconstructs the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A run of text with no matched correction.
    Plain(String),
    /// A region matching a correction's `incorrect` phrase.
    Flagged {
        /// The correction that matched this span. When several corrections
        /// share the same phrase, the first one in filtered order wins.
        correction: Correction,
        /// Zero-based occurrence index, assigned left to right over the
        /// rendered text (not over the correction list).
        index: usize,
    },
}

impl Segment {
    /// The literal text content of this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) => text,
            Segment::Flagged { correction, .. } => &correction.incorrect,
        }
    }

    /// Whether this segment is a flagged span.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Segment::Flagged { .. })
    }
}

/// Screen position of a popover, relative to the annotated-text container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopoverPosition {
    /// Offset from the top of the container, in pixels.
    pub top: f32,
    /// Offset from the left of the container, in pixels.
    pub left: f32,
}

/// Ephemeral hover state: the flagged span whose popover is currently open.
///
/// `index` correlates a pointer event back to a specific rendered span; it is
/// the span's occurrence index among all currently-rendered flagged spans.
/// Destroyed on dismiss, on accept, or when the dismiss timer fires.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCorrection {
    /// The correction shown in the popover.
    pub correction: Correction,
    /// Occurrence index of the hovered span among rendered flagged spans.
    pub index: usize,
    /// Where the popover is placed, just below the hovered span.
    pub position: PopoverPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_new() {
        let c = Correction::new("ভালো", "ভাল", "বানান ভুল");
        assert_eq!(c.incorrect, "ভালো");
        assert_eq!(c.correct, "ভাল");
        assert_eq!(c.explanation, "বানান ভুল");
    }

    #[test]
    fn test_correction_serde_round_trip() {
        let c = Correction::new("কি", "কী", "ব্যাকরণগত ত্রুটি");
        let json = serde_json::to_string(&c).unwrap();
        let back: Correction = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn test_correction_deserialize_from_service_shape() {
        let json = r#"{"incorrect":"ভালো","correct":"ভাল","explanation":"spelling"}"#;
        let c: Correction = serde_json::from_str(json).unwrap();
        assert_eq!(c.incorrect, "ভালো");
        assert_eq!(c.correct, "ভাল");
    }

    #[test]
    fn test_segment_text_plain() {
        let s = Segment::Plain("আমি ".to_string());
        assert_eq!(s.text(), "আমি ");
        assert!(!s.is_flagged());
    }

    #[test]
    fn test_segment_text_flagged() {
        let s = Segment::Flagged {
            correction: Correction::new("ভালো", "ভাল", ""),
            index: 0,
        };
        assert_eq!(s.text(), "ভালো");
        assert!(s.is_flagged());
    }

    #[test]
    fn test_popover_position_default() {
        let p = PopoverPosition::default();
        assert_eq!(p.top, 0.0);
        assert_eq!(p.left, 0.0);
    }

    #[test]
    fn test_active_correction_holds_span_identity() {
        let active = ActiveCorrection {
            correction: Correction::new("কি", "কী", ""),
            index: 2,
            position: PopoverPosition { top: 14.0, left: 3.5 },
        };
        assert_eq!(active.index, 2);
        assert_eq!(active.correction.correct, "কী");
    }
}
