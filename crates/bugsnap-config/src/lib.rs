// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for BugSnap.
//!
//! TOML files merged across the XDG hierarchy with `BUGSNAP_*` env
//! overrides, strict models (`deny_unknown_fields`), semantic validation
//! that collects every failure, and miette diagnostics with source spans
//! and typo suggestions.
//!
//! ```no_run
//! let config = bugsnap_config::load_and_validate().expect("config errors");
//! println!("model: {}", config.gemini.model);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::BugsnapConfig;

/// Loads from the XDG hierarchy plus env overrides, then validates.
///
/// Deserialization failures come back as rich diagnostics with spans into
/// the file that caused them; validation failures are collected in full
/// rather than reported one at a time.
pub fn load_and_validate() -> Result<BugsnapConfig, Vec<ConfigError>> {
    checked(loader::load_config(), loader::toml_sources())
}

/// Loads from a TOML string only. Used by tests and one-off tooling.
pub fn load_and_validate_str(toml: &str) -> Result<BugsnapConfig, Vec<ConfigError>> {
    let sources = vec![("<inline>".to_string(), toml.to_string())];
    checked(loader::load_config_from_str(toml), sources)
}

fn checked(
    loaded: Result<BugsnapConfig, figment::Error>,
    sources: Vec<(String, String)>,
) -> Result<BugsnapConfig, Vec<ConfigError>> {
    let config = loaded.map_err(|e| diagnostic::describe(e, &sources))?;
    validation::validate_config(&config)?;
    Ok(config)
}
