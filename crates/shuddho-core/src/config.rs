use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, ShuddhoError};

/// Top-level configuration for the Shuddho application.
///
/// Loaded from `~/.shuddho/config.toml` by default. Each section corresponds
/// to one subsystem or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShuddhoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub dictation: DictationConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

impl ShuddhoConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ShuddhoConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ShuddhoError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory for the persisted ignore-dictionary.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.shuddho/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Suggestion-service (language model) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// API key for the suggestion service. Empty means the service is not
    /// configured and correction-dependent actions are disabled.
    pub api_key: String,
    /// Base endpoint of the generative-language API.
    pub endpoint: String,
    /// Model identifier passed to the generate call.
    pub model: String,
    /// Sampling temperature. Kept low so responses stay deterministic.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            timeout_secs: 60,
        }
    }
}

/// Editor interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grace delay before a popover dismisses after the pointer leaves its
    /// span, in milliseconds. Long enough to move the pointer from the span
    /// into the popover.
    pub hover_dismiss_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hover_dismiss_ms: 200,
        }
    }
}

/// Dictation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictationConfig {
    /// Whether dictation is enabled when the platform supports it.
    pub enabled: bool,
    /// BCP-47 language tag passed to the speech recognizer.
    pub language: String,
}

impl Default for DictationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: "bn-BD".to_string(),
        }
    }
}

/// Document ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// External program used to convert .docx documents to plain text.
    pub docx_converter: String,
    /// Maximum accepted document size in bytes.
    pub max_file_bytes: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            docx_converter: "pandoc".to_string(),
            max_file_bytes: 10 * 1024 * 1024,
        }
    }
}
