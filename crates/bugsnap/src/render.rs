// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of identification results, history, and the home
//! screen. Pure formatting: every function returns a `String` so it can be
//! asserted on directly.

use bugsnap_core::{HistoryEntry, InsectRecord};
use chrono::{DateTime, Local};
use colored::Colorize;

/// Renders a full result card for an identified insect.
pub fn result_card(record: &InsectRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}  {}\n",
        record.common_name.bold(),
        record.scientific_name.italic().dimmed()
    ));

    let mut badges = Vec::new();
    if record.is_pest {
        badges.push("PEST".red().bold().to_string());
    }
    // Substring match on purpose: the model writes free-form toxicity text.
    if record.toxicity_flagged() {
        badges.push("TOXIC".yellow().bold().to_string());
    }
    if !badges.is_empty() {
        out.push_str(&format!("[{}]\n", badges.join("] [")));
    }
    out.push('\n');

    section(&mut out, "Description", &record.description);
    section(&mut out, "Habitat", &record.habitat);
    section(&mut out, "Behavior", &record.behavior);
    section(&mut out, "Toxicity & Safety", &record.toxicity);
    for tip in &record.safety_tips {
        out.push_str(&format!("  {} {tip}\n", "!".red()));
    }

    out.push('\n');
    if record.is_pest {
        out.push_str(&format!("{}\n", "Pest Control Solutions".bold()));
        if record.pest_solutions.is_empty() {
            out.push_str("  No specific solutions found.\n");
        } else {
            for (i, solution) in record.pest_solutions.iter().enumerate() {
                out.push_str(&format!("  {}. {solution}\n", i + 1));
            }
        }
        out.push_str(&format!(
            "{}\n",
            "Always prioritize eco-friendly and humane methods when dealing with pests.".dimmed()
        ));
    } else {
        out.push_str(&format!("{}\n", "Ecological Benefit".bold()));
        out.push_str(
            "  This insect is generally beneficial or harmless to your garden. It may\n  \
             help with pollination or controlling other pest populations.\n",
        );
        out.push_str(&format!("  {}\n", "Gardener's Friend".green()));
    }

    out
}

fn section(out: &mut String, title: &str, body: &str) {
    out.push_str(&format!("{}\n  {body}\n", title.bold()));
}

/// Renders the history view, newest entries first.
pub fn history_list(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", "No identifications yet. Snap a bug to get started!".dimmed());
    }

    let mut out = format!("{}\n", "Identification History".bold());
    for (i, entry) in entries.iter().enumerate() {
        let when = format_timestamp(entry.timestamp);
        let mut marks = String::new();
        if entry.data.is_pest {
            marks.push_str(&format!(" {}", "[PEST]".red()));
        }
        out.push_str(&format!(
            "  {}. {} {} {}{}\n",
            i + 1,
            entry.data.common_name.bold(),
            entry.data.scientific_name.italic().dimmed(),
            when.dimmed(),
            marks,
        ));
    }
    out
}

fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

/// Renders the home screen shown when the shell starts.
pub fn home_screen() -> String {
    format!(
        "{}\n{}\n\nType an image path to identify an insect, or {} for commands.\n",
        "BugSnap".bold().green(),
        "Snap. Identify. Learn.".dimmed(),
        "/help".yellow()
    )
}

/// Renders the command reference.
pub fn help_screen() -> String {
    let lines: &[(&str, &str)] = &[
        ("<path>", "identify the insect in an image file"),
        ("/identify <path>", "same, works from any view"),
        ("/camera", "open the camera and capture a frame"),
        ("/history", "show past identifications"),
        ("/select <n>", "re-open history entry n"),
        ("/clear", "delete all history"),
        ("/safety", "bite & sting safety guide"),
        ("/garden", "eco-friendly garden solutions"),
        ("/reset", "back to the capture prompt"),
        ("/quit", "exit"),
    ];
    let mut out = format!("{}\n", "Commands".bold());
    for (cmd, desc) in lines {
        out.push_str(&format!("  {:<18} {desc}\n", cmd.yellow()));
    }
    out
}
