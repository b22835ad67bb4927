// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading via figment.
//!
//! Merge order, later overriding earlier: compiled defaults, then the TOML
//! files from [`config_files`], then `BUGSNAP_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error; consumed immediately by the diagnostic bridge

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::BugsnapConfig;

/// Config sections, used to map `BUGSNAP_<SECTION>_<KEY>` env vars onto
/// dotted figment paths without splitting key names on `_`.
const SECTIONS: &[&str] = &["app", "gemini", "history", "camera"];

/// The TOML files consulted, lowest precedence first: system-wide, XDG
/// user config, then the working directory.
pub fn config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from("/etc/bugsnap/bugsnap.toml")];
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join("bugsnap/bugsnap.toml"));
    }
    files.push(PathBuf::from("bugsnap.toml"));
    files
}

/// Loads configuration from the full hierarchy plus env overrides.
pub fn load_config() -> Result<BugsnapConfig, figment::Error> {
    let mut figment = Figment::from(Serialized::defaults(BugsnapConfig::default()));
    for file in config_files() {
        figment = figment.merge(Toml::file(file));
    }
    figment.merge(env_overrides()).extract()
}

/// Loads configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml: &str) -> Result<BugsnapConfig, figment::Error> {
    Figment::from(Serialized::defaults(BugsnapConfig::default()))
        .merge(Toml::string(toml))
        .extract()
}

/// Loads configuration from one explicit file plus env overrides.
pub fn load_config_from_path(path: &Path) -> Result<BugsnapConfig, figment::Error> {
    Figment::from(Serialized::defaults(BugsnapConfig::default()))
        .merge(Toml::file(path))
        .merge(env_overrides())
        .extract()
}

/// Reads whichever config files exist, for diagnostic source spans.
pub fn toml_sources() -> Vec<(String, String)> {
    config_files()
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}

/// `BUGSNAP_GEMINI_API_KEY` becomes `gemini.api_key`. Mapping against the
/// known section names keeps underscores inside key names intact, which a
/// blanket split on `_` would destroy.
fn env_overrides() -> Env {
    Env::prefixed("BUGSNAP_").map(|key| {
        let name = key.as_str();
        for section in SECTIONS {
            if let Some(rest) = name.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
                return format!("{section}.{rest}").into();
            }
        }
        name.to_string().into()
    })
}
