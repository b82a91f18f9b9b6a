//! Shuddho application binary - composition root.
//!
//! Ties together all Shuddho crates into a single executable:
//! 1. Load configuration from TOML
//! 2. Build the suggestion client (or stay in the disabled state)
//! 3. Load the ignore-dictionary from the data directory
//! 4. Run the requested subcommand: check, fix, or config

mod cli;

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::io::AsyncReadExt;

use shuddho_core::ShuddhoConfig;
use shuddho_editor::{Clipboard, EditorSession, SystemClipboard};
use shuddho_ingest::PandocConverter;
use shuddho_proof::Dictionary;
use shuddho_suggest::SuggestClient;

use cli::{CliArgs, Command, ConfigAction};

/// Expand ~ to home directory in a path string.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    if data_dir.starts_with("~/") || data_dir.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(&data_dir[2..])
    } else {
        PathBuf::from(data_dir)
    }
}

/// Build a proofreading session from the effective configuration.
fn build_session(config: &ShuddhoConfig, dictionary: Dictionary) -> EditorSession {
    let mut session = EditorSession::new()
        .with_dictionary(dictionary)
        .with_hover_delay(std::time::Duration::from_millis(
            config.editor.hover_dismiss_ms,
        ));

    match SuggestClient::from_config(&config.suggest) {
        Ok(client) => {
            session = session.with_suggest(Box::new(client));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Suggestion service unavailable; checks are disabled");
            eprintln!("No API key configured — run `shuddho config init` and set suggest.api_key.");
        }
    }
    session
}

/// Whether the file argument names stdin rather than a document path.
fn is_stdin(file: &Path) -> bool {
    file == Path::new("-")
}

/// Read all remaining input from an async reader into a string.
async fn read_text<R: AsyncReadExt + Unpin>(mut reader: R) -> Result<String, std::io::Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text).await?;
    Ok(text)
}

/// Load the input into the session: stdin when `file` is `-`, otherwise a
/// document file through the ingestion adapter.
async fn load_into(
    session: &mut EditorSession,
    config: &ShuddhoConfig,
    file: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    if is_stdin(file) {
        let text = read_text(tokio::io::stdin()).await?;
        tracing::info!(chars = text.len(), "Read document text from stdin");
        session.set_text(text);
        return Ok(());
    }

    let converter = PandocConverter::new(config.ingest.docx_converter.as_str());
    if file.extension().and_then(|e| e.to_str()) == Some("docx") && !converter.is_available().await
    {
        tracing::warn!(
            program = %config.ingest.docx_converter,
            "Docx converter not found on PATH"
        );
    }
    session
        .load_document(file, &converter, config.ingest.max_file_bytes)
        .await?;
    Ok(())
}

async fn run_check(
    config: &ShuddhoConfig,
    dictionary: Dictionary,
    file: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = build_session(config, dictionary);
    load_into(&mut session, config, file).await?;

    if !session.is_enabled() {
        return Err("cannot check without a configured suggestion service".into());
    }

    session.run_check().await;
    let filtered = session.filtered();
    if filtered.is_empty() {
        println!("No corrections suggested.");
        return Ok(());
    }

    println!("{} correction(s):", filtered.len());
    for correction in &filtered {
        println!(
            "  {} -> {}  ({})",
            correction.incorrect, correction.correct, correction.explanation
        );
    }
    Ok(())
}

async fn run_fix(
    config: &ShuddhoConfig,
    dictionary: Dictionary,
    file: &PathBuf,
    output: Option<&PathBuf>,
    copy: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = build_session(config, dictionary);
    load_into(&mut session, config, file).await?;

    if !session.is_enabled() {
        return Err("cannot fix without a configured suggestion service".into());
    }

    session.run_check().await;
    session.fix_all();

    match output {
        Some(path) => {
            tokio::fs::write(path, session.text()).await?;
            tracing::info!(path = %path.display(), "Corrected text written");
        }
        None => println!("{}", session.text()),
    }

    if copy {
        let mut clipboard = SystemClipboard::new()?;
        clipboard.write_text(session.text())?;
        eprintln!("Corrected text copied to clipboard.");
    }
    Ok(())
}

/// Copy of the configuration safe to print: the API key is masked.
fn redact_secrets(config: &ShuddhoConfig) -> ShuddhoConfig {
    let mut redacted = config.clone();
    if !redacted.suggest.api_key.is_empty() {
        redacted.suggest.api_key = "<redacted>".to_string();
    }
    redacted
}

fn run_config(
    config: &ShuddhoConfig,
    path: &PathBuf,
    action: &ConfigAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Init => {
            if path.exists() {
                return Err(format!("config file already exists: {}", path.display()).into());
            }
            ShuddhoConfig::default().save(path)?;
            println!("Wrote default configuration to {}", path.display());
        }
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&redact_secrets(config))?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let mut config = ShuddhoConfig::load_or_default(&config_path);
    config.suggest.api_key = args.resolve_api_key(&config.suggest.api_key);
    config.general.log_level = args.resolve_log_level(&config.general.log_level);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.general.log_level.clone())),
        )
        .init();

    tracing::info!("Starting Shuddho v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = resolve_data_dir(&config.general.data_dir);
    let dictionary_path = data_dir.join("dictionary.json");
    let dictionary = Dictionary::load_or_default(&dictionary_path);
    tracing::debug!(
        path = %dictionary_path.display(),
        words = dictionary.len(),
        "Ignore-dictionary loaded"
    );

    match &args.command {
        Command::Check { file } => run_check(&config, dictionary, file).await,
        Command::Fix { file, output, copy } => {
            run_fix(&config, dictionary, file, output.as_ref(), *copy).await
        }
        Command::Config { action } => run_config(&config, &config_path, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_names_stdin() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("doc.txt")));
        assert!(!is_stdin(Path::new("./-")));
    }

    #[tokio::test]
    async fn test_read_text_from_reader() {
        let input: &[u8] = "আমি ভালো আছি\n".as_bytes();
        let text = read_text(input).await.unwrap();
        assert_eq!(text, "আমি ভালো আছি\n");
    }

    #[tokio::test]
    async fn test_stdin_text_replaces_session_text() {
        // "-" has no extension; it must never reach the extension dispatch.
        assert!(is_stdin(Path::new("-")));

        let mut session = EditorSession::new();
        session.set_text("আগের লেখা");
        let text = read_text("কিভাবে যাবে?".as_bytes()).await.unwrap();
        session.set_text(text);
        assert_eq!(session.text(), "কিভাবে যাবে?");
    }

    #[test]
    fn test_redact_masks_api_key() {
        let mut config = ShuddhoConfig::default();
        config.suggest.api_key = "secret-key".to_string();

        let shown = redact_secrets(&config);
        assert_eq!(shown.suggest.api_key, "<redacted>");
        // Nothing else changes, and the original keeps the real key.
        assert_eq!(shown.suggest.model, config.suggest.model);
        assert_eq!(config.suggest.api_key, "secret-key");

        let rendered = toml::to_string_pretty(&shown).unwrap();
        assert!(!rendered.contains("secret-key"));
    }

    #[test]
    fn test_redact_leaves_empty_key_empty() {
        let shown = redact_secrets(&ShuddhoConfig::default());
        assert!(shown.suggest.api_key.is_empty());
    }

    #[test]
    fn test_resolve_data_dir_expands_home() {
        if let Ok(home) = std::env::var("HOME") {
            let resolved = resolve_data_dir("~/.shuddho/data");
            assert_eq!(resolved, PathBuf::from(home).join(".shuddho/data"));
        }
        assert_eq!(resolve_data_dir("/abs/path"), PathBuf::from("/abs/path"));
    }
}
