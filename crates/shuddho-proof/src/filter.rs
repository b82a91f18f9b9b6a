//! Correction Filter.
//!
//! Removes corrections whose flagged phrase the user has added to the
//! ignore-dictionary. The filter is a pure function with stable ordering;
//! [`FilterCache`] memoizes it on the (corrections, dictionary) pair so the
//! annotator does not re-filter on every render.

use shuddho_core::Correction;

use crate::dictionary::Dictionary;

/// Return the subset of `corrections` whose `incorrect` phrase is not in
/// `dictionary`, preserving input order.
pub fn filter_corrections(corrections: &[Correction], dictionary: &Dictionary) -> Vec<Correction> {
    corrections
        .iter()
        .filter(|c| !dictionary.contains(&c.incorrect))
        .cloned()
        .collect()
}

/// Memoized view of [`filter_corrections`].
///
/// Recomputes only when the correction list changes or the dictionary grows.
/// The dictionary is append-only within a session, so its length is a valid
/// version stamp.
#[derive(Debug, Default)]
pub struct FilterCache {
    corrections: Vec<Correction>,
    dictionary_len: usize,
    filtered: Vec<Correction>,
    primed: bool,
}

impl FilterCache {
    /// Create an empty, unprimed cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the filtered corrections, recomputing if either input changed
    /// since the last call.
    pub fn filtered(&mut self, corrections: &[Correction], dictionary: &Dictionary) -> &[Correction] {
        let stale = !self.primed
            || self.corrections != corrections
            || self.dictionary_len != dictionary.len();
        if stale {
            tracing::debug!(
                corrections = corrections.len(),
                dictionary = dictionary.len(),
                "Recomputing filtered corrections"
            );
            self.corrections = corrections.to_vec();
            self.dictionary_len = dictionary.len();
            self.filtered = filter_corrections(corrections, dictionary);
            self.primed = true;
        }
        &self.filtered
    }
}
