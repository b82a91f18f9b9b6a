//! User-maintained ignore-dictionary.
//!
//! An ordered list of phrases the user has chosen to permanently ignore.
//! Membership is exact string equality against a correction's `incorrect`
//! field. The dictionary only grows within a session; persistence is a flat
//! JSON array next to the rest of the application data.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use shuddho_core::error::Result;

/// Append-only ignore-list suppressing specific flagged phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from an existing word list, deduplicating while
    /// preserving first-seen order.
    pub fn from_words(words: Vec<String>) -> Self {
        let mut dict = Self::new();
        for word in words {
            dict.add(word);
        }
        dict
    }

    /// Append a word to the dictionary.
    ///
    /// Empty words and duplicates are ignored. Returns `true` if the word
    /// was actually added.
    pub fn add(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if word.is_empty() || self.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Exact-match membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// The words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Load a dictionary from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let words: Vec<String> = serde_json::from_str(&content)?;
        Ok(Self::from_words(words))
    }

    /// Load a dictionary, falling back to an empty one if the file does not
    /// exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dict) => dict,
            Err(_) => Self::new(),
        }
    }

    /// Save the dictionary to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.words)?;
        std::fs::write(path, content)?;
        info!(words = self.words.len(), "Dictionary saved to {}", path.display());
        Ok(())
    }
}
