//! CLI argument definitions for the Shuddho application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shuddho — a Bengali proofreading engine.
#[derive(Parser, Debug)]
#[command(name = "shuddho", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Suggestion-service API key.
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a document and list suggested corrections.
    Check {
        /// Document to check (.txt, .rtf, or .docx), or - for stdin.
        file: PathBuf,
    },
    /// Apply every suggested correction and emit the corrected text.
    Fix {
        /// Document to fix (.txt, .rtf, or .docx), or - for stdin.
        file: PathBuf,

        /// Write the corrected text here instead of stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Also place the corrected text on the system clipboard.
        #[arg(long = "copy")]
        copy: bool,
    },
    /// Manage the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file.
    Init,
    /// Print the effective configuration.
    Show,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SHUDDHO_CONFIG env var > ~/.shuddho/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SHUDDHO_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the suggestion-service API key.
    ///
    /// Priority: --api-key flag > SHUDDHO_API_KEY > GEMINI_API_KEY > config
    /// file value. An empty result means the service stays unconfigured.
    pub fn resolve_api_key(&self, config_key: &str) -> String {
        if let Some(ref key) = self.api_key {
            return key.clone();
        }
        if let Ok(key) = std::env::var("SHUDDHO_API_KEY") {
            if !key.is_empty() {
                return key;
            }
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                return key;
            }
        }
        config_key.to_string()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".shuddho").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".shuddho").join("config.toml");
    }
    PathBuf::from("config.toml")
}
