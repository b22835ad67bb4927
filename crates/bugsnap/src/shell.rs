// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `bugsnap shell` command implementation.
//!
//! Launches an interactive REPL with a colored prompt and readline history.
//! Bare input is treated as an image path to identify; slash commands switch
//! views, drive the camera, and manage history.

use bugsnap_capture::{CameraSession, CommandCamera, read_image_file};
use bugsnap_config::BugsnapConfig;
use bugsnap_core::{BugsnapError, IdentifyProvider};
use bugsnap_gemini::GeminiIdentifier;
use bugsnap_history::HistoryStore;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::app::{App, AppView, IdentifyState};
use crate::{guides, render};

/// Runs the interactive REPL.
pub async fn run_shell(config: BugsnapConfig) -> Result<(), BugsnapError> {
    let provider = GeminiIdentifier::new(&config).inspect_err(|_| {
        eprintln!(
            "error: Gemini API key required. Set gemini.api_key in bugsnap.toml or the GEMINI_API_KEY env var."
        );
    })?;
    let store = HistoryStore::new(&config.history.path);
    let mut app = App::load(provider, store).await;
    let mut camera = CameraSession::new(CommandCamera::new(config.camera.capture_command.clone()));

    let mut rl = DefaultEditor::new()
        .map_err(|e| BugsnapError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", render::home_screen());

    let prompt = format!("{}> ", "bugsnap".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Err(e) = handle_line(&mut app, &mut camera, &mut rl, trimmed).await {
                    match &e {
                        // Camera problems are recoverable; keep them close
                        // to the capture prompt rather than alarming.
                        BugsnapError::Camera { message } => {
                            eprintln!("{}", message.yellow());
                            eprintln!("{}", "Try identifying from an image file instead.".dimmed());
                        }
                        _ => {
                            eprintln!("{}: {e}", "error".red());
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    camera.cancel().await;
    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Dispatches one line of input.
async fn handle_line<P: IdentifyProvider>(
    app: &mut App<P>,
    camera: &mut CameraSession<CommandCamera>,
    rl: &mut DefaultEditor,
    input: &str,
) -> Result<(), BugsnapError> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (input, ""),
    };

    match command {
        "/help" => println!("{}", render::help_screen()),
        "/identify" => {
            if rest.is_empty() {
                println!("usage: /identify <image-path>");
            } else {
                identify_file(app, rest).await?;
            }
        }
        "/camera" => camera_flow(app, camera, rl).await?,
        "/history" => {
            app.change_view(AppView::History);
            println!("{}", render::history_list(app.history()));
        }
        "/select" => {
            let index: usize = rest.parse().map_err(|_| {
                BugsnapError::Internal("usage: /select <number from /history>".into())
            })?;
            let id = app
                .history()
                .get(index.wrapping_sub(1))
                .map(|e| e.id.clone())
                .ok_or_else(|| BugsnapError::Internal(format!("no history entry {index}")))?;
            app.select_history_entry(&id);
            show_result(app);
        }
        "/clear" => {
            app.clear_history().await?;
            println!("{}", "history cleared".dimmed());
        }
        "/safety" => {
            app.change_view(AppView::SafetyGuide);
            println!("{}", guides::SAFETY_GUIDE);
        }
        "/garden" => {
            app.change_view(AppView::GardenSolutions);
            println!("{}", guides::GARDEN_SOLUTIONS);
        }
        "/reset" => {
            app.reset();
            println!("Ready for the next bug. Type an image path to identify.");
        }
        _ if command.starts_with('/') => {
            println!("unknown command {command}, try {}", "/help".yellow());
        }
        // Bare input is an image path.
        _ => identify_file(app, input).await?,
    }

    Ok(())
}

/// Reads an image file and runs one identification.
async fn identify_file<P: IdentifyProvider>(
    app: &mut App<P>,
    path: &str,
) -> Result<(), BugsnapError> {
    app.change_view(AppView::Identify);
    let image = read_image_file(path).await?;

    println!("{}", "Analyzing your bug...".dimmed());
    app.submit(image).await?;
    show_result(app);
    Ok(())
}

/// Opens the camera, waits for the user, captures or cancels.
async fn camera_flow<P: IdentifyProvider>(
    app: &mut App<P>,
    camera: &mut CameraSession<CommandCamera>,
    rl: &mut DefaultEditor,
) -> Result<(), BugsnapError> {
    app.change_view(AppView::Identify);
    camera.open().await?;

    loop {
        let facing = camera.facing().as_str();
        let answer = rl.readline(&format!(
            "camera ({facing}) ready: [Enter] capture, [f] flip, [c] cancel> "
        ));

        match answer.as_deref().map(str::trim) {
            Ok("") => {
                let image = camera.capture().await?;
                println!("{}", "Analyzing your bug...".dimmed());
                app.submit(image).await?;
                show_result(app);
                return Ok(());
            }
            Ok("f") => {
                // Reopen with the other camera.
                camera.cancel().await;
                camera.toggle_facing();
                camera.open().await?;
            }
            Ok(_) | Err(_) => {
                camera.cancel().await;
                println!("{}", "camera closed".dimmed());
                return Ok(());
            }
        }
    }
}

/// Prints the current result card, if one is on display.
fn show_result<P: IdentifyProvider>(app: &App<P>) {
    match app.identify_state() {
        IdentifyState::Result { record, .. } => {
            print!("{}", render::result_card(record));
        }
        state => debug!(?state, "no result to show"),
    }
}
