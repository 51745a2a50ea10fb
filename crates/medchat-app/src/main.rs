mod app;
mod cli;
mod input;
mod terminal;
mod voice;

use medchat_config::schema::LogLevel;
use medchat_config::MedchatConfig;
use tracing_subscriber::EnvFilter;

use crate::app::ChatApp;
use crate::terminal::TerminalSurface;
use crate::voice::SpeechCapture;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            (
                key.trim(),
                value.trim().trim_matches('"').trim_matches('\''),
            )
        })
        .collect()
}

/// CLI directive first, then `RUST_LOG`, then the configured level.
fn log_filter(cli_directive: Option<&str>, level: LogLevel) -> EnvFilter {
    let fallback = || EnvFilter::new(format!("medchat={}", level.as_filter()));
    match cli_directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| fallback()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    }
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    // Loaded before logging so the configured level applies; the outcome
    // is logged once the subscriber is up.
    let loaded = medchat_config::load_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|config| config.logging.level)
        .unwrap_or_default();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(args.log_level.as_deref(), level))
        .init();

    tracing::info!("medchat v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        MedchatConfig::default()
    });
    tracing::info!(model = %config.backend.model, "Config loaded");

    let session = match app::build_session(&config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to start chat session: {e}");
            std::process::exit(1);
        }
    };
    let speech = SpeechCapture::from_config(&config.speech);
    let mut chat = ChatApp::new(session, speech, TerminalSurface::stdout());

    match args.prompt {
        Some(prompt) => chat.run_once(&prompt).await,
        None => chat.run().await,
    }
    tracing::info!("Shutdown complete");
}
