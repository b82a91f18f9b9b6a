//! Lenient parsing of the model's correction list.
//!
//! The model is asked for a JSON array of `{incorrect, correct, explanation}`
//! objects. Individual malformed items are dropped rather than failing the
//! whole response; a body that is not a well-formed array degrades to an
//! empty correction list with a warning.

use shuddho_core::Correction;

/// Parse the JSON text returned by the model into corrections.
///
/// Items missing any of the three string fields are filtered out. A body
/// that cannot be parsed, or that parses to something other than an array,
/// yields an empty list, never an error; the document text is not at risk
/// either way.
pub fn parse_corrections(json_text: &str) -> Vec<Correction> {
    let trimmed = json_text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let value: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse correction response as JSON");
            return Vec::new();
        }
    };

    let items = match value.as_array() {
        Some(items) => items,
        None => {
            tracing::warn!("Correction response is not a JSON array");
            return Vec::new();
        }
    };

    let total = items.len();
    let corrections: Vec<Correction> = items
        .iter()
        .filter_map(|item| serde_json::from_value::<Correction>(item.clone()).ok())
        .collect();

    if corrections.len() < total {
        tracing::warn!(
            dropped = total - corrections.len(),
            kept = corrections.len(),
            "Dropped malformed correction items"
        );
    }
    corrections
}
