// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! BugSnap - AI insect identification from your terminal.
//!
//! This is the binary entry point for the BugSnap CLI.

mod app;
mod guides;
mod render;
mod shell;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use crate::app::{App, IdentifyState};
use bugsnap_capture::read_image_file;
use bugsnap_gemini::GeminiIdentifier;
use bugsnap_history::HistoryStore;

/// BugSnap - Snap a photo, identify the insect, learn what to do about it.
#[derive(Parser, Debug)]
#[command(name = "bugsnap", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch the interactive shell (the default).
    Shell,
    /// Identify the insect in a single image file and exit.
    Identify {
        /// Path to the image file.
        image: String,
        /// Print the raw identification record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show or clear the identification history.
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
    /// Print a static reference guide.
    Guide {
        #[arg(value_enum)]
        topic: GuideTopic,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List past identifications, newest first.
    List,
    /// Delete all history.
    Clear,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GuideTopic {
    /// Bite & sting safety guide.
    Safety,
    /// Eco-friendly garden solutions.
    Garden,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match bugsnap_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            bugsnap_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Identify { image, json }) => run_identify(&config, &image, json).await,
        Some(Commands::History { action }) => run_history(&config, action).await,
        Some(Commands::Guide { topic }) => {
            match topic {
                GuideTopic::Safety => println!("{}", guides::SAFETY_GUIDE),
                GuideTopic::Garden => println!("{}", guides::GARDEN_SOLUTIONS),
            }
            Ok(())
        }
        Some(Commands::Shell) | None => shell::run_shell(config).await,
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Logs to stderr; `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One-shot identification: read the file, call the model, print the card.
async fn run_identify(
    config: &bugsnap_config::BugsnapConfig,
    image_path: &str,
    json: bool,
) -> Result<(), bugsnap_core::BugsnapError> {
    let provider = GeminiIdentifier::new(config).inspect_err(|_| {
        eprintln!(
            "error: Gemini API key required. Set gemini.api_key in bugsnap.toml or the GEMINI_API_KEY env var."
        );
    })?;
    let store = HistoryStore::new(&config.history.path);
    let mut app = App::load(provider, store).await;

    let image = read_image_file(image_path).await?;
    app.submit(image).await?;

    if let IdentifyState::Result { record, .. } = app.identify_state() {
        if json {
            let body = serde_json::to_string_pretty(record)
                .map_err(|e| bugsnap_core::BugsnapError::Internal(e.to_string()))?;
            println!("{body}");
        } else {
            print!("{}", render::result_card(record));
        }
    }
    Ok(())
}

async fn run_history(
    config: &bugsnap_config::BugsnapConfig,
    action: Option<HistoryAction>,
) -> Result<(), bugsnap_core::BugsnapError> {
    let store = HistoryStore::new(&config.history.path);
    match action {
        Some(HistoryAction::Clear) => {
            store.save(&[]).await?;
            println!("{}", "history cleared".dimmed());
        }
        Some(HistoryAction::List) | None => {
            let entries = store.load().await;
            println!("{}", render::history_list(&entries));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        super::Cli::command().debug_assert();
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = bugsnap_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.app.name, "bugsnap");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }
}
