//! Text Annotator.
//!
//! Partitions document text into plain runs and flagged spans by matching
//! the filtered corrections' `incorrect` phrases literally against the text.
//! The partition is lossless: concatenating segment text in order
//! reconstructs the input exactly.

use regex::Regex;

use shuddho_core::{Correction, Segment};

/// Split `text` into rendered segments.
///
/// Each correction's phrase is escaped for literal matching and joined into
/// a single alternation, so matches are found in one left-to-right scan and
/// never overlap. Occurrence indices are assigned left to right over the
/// rendered text, starting at 0; when several corrections share a phrase,
/// the first one in `corrections` order wins for every occurrence.
///
/// Total over its inputs: empty correction lists, zero-length phrases, and
/// phrases absent from the text all degrade to plain runs, never errors.
pub fn annotate(text: &str, corrections: &[Correction]) -> Vec<Segment> {
    let phrases: Vec<String> = corrections
        .iter()
        .filter(|c| !c.incorrect.is_empty())
        .map(|c| regex::escape(&c.incorrect))
        .collect();
    if phrases.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let regex = match Regex::new(&phrases.join("|")) {
        Ok(regex) => regex,
        Err(e) => {
            // Escaped literals should always compile; degrade to identity.
            tracing::warn!(error = %e, "Annotation pattern failed to compile");
            return vec![Segment::Plain(text.to_string())];
        }
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut occurrence = 0;

    for m in regex.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment::Plain(text[cursor..m.start()].to_string()));
        }
        match corrections.iter().find(|c| c.incorrect == m.as_str()) {
            Some(correction) => {
                segments.push(Segment::Flagged {
                    correction: correction.clone(),
                    index: occurrence,
                });
                occurrence += 1;
            }
            // Unreachable in practice: every match equals some phrase.
            None => segments.push(Segment::Plain(m.as_str().to_string())),
        }
        cursor = m.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }
    if segments.is_empty() {
        segments.push(Segment::Plain(String::new()));
    }
    segments
}
