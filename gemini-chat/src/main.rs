//! Gemini Chat - command-line front end for a `generateContent` endpoint.
//!
//! Reads `GEMINI_API_URL` and `GEMINI_API_KEY` (optionally from `.env`),
//! sends each message through `gemini-client` and prints the reply, or a
//! fixed apology when the call fails.

use anyhow::{Context, Result};
use clap::Parser;
use gemini_client::{ClientConfig, GeminiClient};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod chat;
mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed flags
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if is_missing_dotenv(&e) => debug!("No .env file found"),
        Err(e) => warn!("Error loading .env file: {}", e),
    }

    let mut config = ClientConfig::from_env().context("Invalid client configuration")?;
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    debug!("Resolved config: {:?}", config);

    match cli.command {
        Commands::Config { json } => commands::handle_config(&config, json),
        Commands::Ask { prompt, json } => {
            let client = GeminiClient::new(config).context("Failed to build HTTP client")?;
            commands::handle_ask(&client, &prompt.join(" "), json).await
        }
        Commands::Chat => {
            let client = GeminiClient::new(config).context("Failed to build HTTP client")?;
            commands::handle_chat(&client).await
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{}'", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))
}

fn is_missing_dotenv(err: &dotenvy::Error) -> bool {
    matches!(err, dotenvy::Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_found_counts_as_missing_dotenv() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(is_missing_dotenv(&missing));

        let unreadable =
            dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!is_missing_dotenv(&unreadable));

        let malformed = dotenvy::Error::LineParse("KEY VALUE".to_string(), 4);
        assert!(!is_missing_dotenv(&malformed));
    }
}
