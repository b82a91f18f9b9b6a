//! Reconciliation Engine.
//!
//! Produces corrected text by literal substitution of flagged phrases.
//! `apply_one` accepts a single suggestion; `apply_all` bulk-applies every
//! filtered correction, longest phrase first so a short phrase embedded in a
//! longer flagged phrase cannot corrupt the longer match.
//!
//! Substitution is textual, not semantic. If two corrections' phrases
//! overlap in content, the second substitution acts on the already-modified
//! text and may no longer find its target; that is accepted behavior of the
//! literal-phrase suggestion model, not a defect.

use shuddho_core::Correction;

/// Replace the first literal occurrence of `correction.incorrect` in `text`
/// with `correction.correct`.
///
/// A stale suggestion whose phrase no longer occurs in the text is a no-op,
/// not an error. The input is never mutated.
pub fn apply_one(text: &str, correction: &Correction) -> String {
    if correction.incorrect.is_empty() {
        return text.to_string();
    }
    text.replacen(&correction.incorrect, &correction.correct, 1)
}

/// Apply every correction to `text`, replacing all occurrences of each
/// phrase, in descending phrase-length order.
///
/// The sort is stable, so corrections with equal-length phrases keep their
/// filtered order. Zero-length phrases are skipped.
pub fn apply_all(text: &str, corrections: &[Correction]) -> String {
    let mut ordered: Vec<&Correction> = corrections
        .iter()
        .filter(|c| !c.incorrect.is_empty())
        .collect();
    ordered.sort_by(|a, b| b.incorrect.len().cmp(&a.incorrect.len()));

    let mut result = text.to_string();
    for correction in ordered {
        result = result.replace(&correction.incorrect, &correction.correct);
    }
    result
}
