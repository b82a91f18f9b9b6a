//! Heuristic RTF markup stripper.
//!
//! Removes control words, group delimiters, and collapses whitespace. This
//! is explicitly not a full RTF parser; it is sufficient for pulling raw
//! text out of simple documents and may leave residual artifacts on complex
//! ones (embedded objects, hex-escaped non-ASCII runs).

use std::sync::LazyLock;

use regex::Regex;

static CONTROL_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-z0-9_'-]+ ?").expect("Invalid control-word regex"));

static GROUP_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{}]").expect("Invalid group-delimiter regex"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Strip RTF markup from `input`, returning best-effort plain text.
pub fn strip_rtf(input: &str) -> String {
    let text = CONTROL_WORDS.replace_all(input, "");
    let text = GROUP_DELIMITERS.replace_all(&text, "");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}
