//! HTTP client for the generative-language suggestion service.
//!
//! One `SuggestClient` is built from configuration at startup and handed to
//! the editor session. A missing API key fails construction with a
//! configuration error; the session then runs in a disabled state where all
//! correction-dependent actions are no-ops.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use shuddho_core::config::SuggestConfig;
use shuddho_core::Correction;

use crate::error::SuggestError;
use crate::parse::parse_corrections;

/// System instruction steering the model toward structured proofreading.
const SYSTEM_INSTRUCTION: &str = "You are an expert Bengali proofreader. Examine the given Bengali \
     text for spelling mistakes, grammatical errors, and awkward word \
     choices. Report each error as an object with the exact flagged phrase \
     from the original text, the corrected version, and a brief explanation \
     in Bengali of why the original was wrong. Only report genuine errors; \
     if the text is already correct, return an empty array.";

/// Collaborator contract consumed by the editor session.
///
/// The production implementation is [`SuggestClient`]; tests inject fakes.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Check `text` for errors, returning suggested corrections.
    async fn check(&self, text: &str) -> Result<Vec<Correction>, SuggestError>;
}

/// Session object holding the initialized service handle.
///
/// Passed explicitly to every call site rather than read from ambient state,
/// so initialization order is visible and fakes slot in cleanly.
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
}

impl SuggestClient {
    /// Build a client from configuration.
    ///
    /// Fails with [`SuggestError::NotConfigured`] when the API key is empty.
    pub fn from_config(config: &SuggestConfig) -> Result<Self, SuggestError> {
        if config.api_key.trim().is_empty() {
            return Err(SuggestError::NotConfigured(
                "API key is missing; set [suggest] api_key in the config".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    fn build_request(&self, text: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!(
                        "Please check the following Bengali text for errors: \"{}\"",
                        text
                    ),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: correction_schema(),
            },
        }
    }
}

#[async_trait]
impl SuggestionService for SuggestClient {
    async fn check(&self, text: &str) -> Result<Vec<Correction>, SuggestError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.build_request(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Suggestion request rejected");
            return Err(SuggestError::Status(status.as_u16()));
        }

        let envelope: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::MalformedResponse(e.to_string()))?;

        let json_text = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        let corrections = parse_corrections(&json_text);
        tracing::info!(
            text_len = text.len(),
            corrections = corrections.len(),
            "Suggestion check completed"
        );
        Ok(corrections)
    }
}

/// The response schema forces the model to emit a JSON array of correction
/// objects. Field descriptions are in Bengali, matching the proofreading
/// domain.
fn correction_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "incorrect": {
                    "type": "STRING",
                    "description": "মূল লেখা থেকে নেওয়া সঠিক ভুল শব্দটি বা বাক্যাংশ।"
                },
                "correct": {
                    "type": "STRING",
                    "description": "ভুল শব্দ বা বাক্যাংশের জন্য প্রস্তাবিত সঠিক সংস্করণ।"
                },
                "explanation": {
                    "type": "STRING",
                    "description": "মূল লেখাটি কেন ভুল ছিল তার একটি সংক্ষিপ্ত ব্যাখ্যা (যেমন, বানান ভুল, ব্যাকরণগত ত্রুটি)।"
                }
            },
            "required": ["incorrect", "correct", "explanation"]
        }
    })
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> SuggestConfig {
        SuggestConfig {
            api_key: "test-key".to_string(),
            ..SuggestConfig::default()
        }
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let err = SuggestClient::from_config(&SuggestConfig::default()).unwrap_err();
        assert!(matches!(err, SuggestError::NotConfigured(_)));
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_from_config_rejects_whitespace_key() {
        let config = SuggestConfig {
            api_key: "   ".to_string(),
            ..SuggestConfig::default()
        };
        assert!(SuggestClient::from_config(&config).is_err());
    }

    #[test]
    fn test_generate_url_shape() {
        let client = SuggestClient::from_config(&config_with_key()).unwrap();
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_generate_url_strips_trailing_slash() {
        let config = SuggestConfig {
            api_key: "k".to_string(),
            endpoint: "https://example.test/".to_string(),
            ..SuggestConfig::default()
        };
        let client = SuggestClient::from_config(&config).unwrap();
        assert!(client
            .generate_url()
            .starts_with("https://example.test/v1beta/"));
    }

    #[test]
    fn test_request_body_shape() {
        let client = SuggestClient::from_config(&config_with_key()).unwrap();
        let request = client.build_request("আমি ভালো আছি");
        let json = serde_json::to_value(&request).unwrap();

        assert!(json["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("আমি ভালো আছি"));
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "ARRAY");
        let temperature = json["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_blank_text_skips_request() {
        let client = SuggestClient::from_config(&config_with_key()).unwrap();
        // No server is reachable in tests; a request would error out.
        assert!(client.check("   \n ").await.unwrap().is_empty());
        assert!(client.check("").await.unwrap().is_empty());
    }

    #[test]
    fn test_envelope_deserializes_without_candidates() {
        let envelope: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(envelope.candidates.is_empty());
    }

    #[test]
    fn test_envelope_deserializes_full_shape() {
        let body = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "[]"}]}
            }]
        }"#;
        let envelope: GenerateResponse = serde_json::from_str(body).unwrap();
        let text = envelope.candidates[0].content.as_ref().unwrap().parts[0]
            .text
            .clone();
        assert_eq!(text, "[]");
    }
}
