// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics.
//!
//! Bridges figment's deserialization errors into miette reports. Unknown
//! keys get a source span pointing into the offending TOML plus a "did you
//! mean" suggestion from Jaro-Winkler similarity; type mismatches and
//! validation failures render as plain messages.

use miette::{Diagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// How close a declared key has to be before it is offered as a
/// correction. 0.75 catches `api_kye` and `capture_comand` while staying
/// quiet for unrelated garbage.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// One reportable configuration problem.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key no config section declares.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(code(bugsnap::config::unknown_key), help("{help}"))]
    UnknownKey {
        key: String,
        /// Closest declared key, when one is similar enough.
        suggestion: Option<String>,
        help: String,
        #[label("not a recognized key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value that does not deserialize into the declared field type.
    #[error("invalid value for `{key}`: {detail}")]
    #[diagnostic(code(bugsnap::config::invalid_value))]
    InvalidValue { key: String, detail: String },

    /// A semantic constraint violation caught after deserialization.
    #[error("{message}")]
    #[diagnostic(code(bugsnap::config::validation))]
    Validation { message: String },

    /// Anything figment reports that has no dedicated shape above.
    #[error("configuration error: {0}")]
    #[diagnostic(code(bugsnap::config::other))]
    Other(String),
}

/// Turns a figment error (which may bundle several problems) into
/// diagnostics.
///
/// Every bugsnap key carries a compiled default, so the deserialization
/// failures left to report are unknown fields and type mismatches.
pub fn describe(err: figment::Error, sources: &[(String, String)]) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|e| match &e.kind {
            Kind::UnknownField(field, known) => unknown_key(field, known, &e.path, sources),
            Kind::InvalidType(actual, expected) => ConfigError::InvalidValue {
                key: e.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
            },
            _ => ConfigError::Other(e.to_string()),
        })
        .collect()
}

fn unknown_key(
    field: &str,
    known: &[&str],
    path: &[String],
    sources: &[(String, String)],
) -> ConfigError {
    let suggestion = closest(field, known);
    let help = match &suggestion {
        Some(s) => format!("did you mean `{s}`? valid keys: {}", known.join(", ")),
        None => format!("valid keys: {}", known.join(", ")),
    };

    let section = path.first().map(String::as_str);
    let (span, src) = match locate(field, section, sources) {
        Some((span, src)) => (Some(span), Some(src)),
        None => (None, None),
    };

    ConfigError::UnknownKey {
        key: field.to_string(),
        suggestion,
        help,
        span,
        src,
    }
}

/// Finds the offending key in whichever TOML source actually contains it.
fn locate(
    field: &str,
    section: Option<&str>,
    sources: &[(String, String)],
) -> Option<(SourceSpan, NamedSource<String>)> {
    sources.iter().find_map(|(name, content)| {
        key_offset(content, section, field).map(|offset| {
            (
                SourceSpan::new(offset.into(), field.len()),
                NamedSource::new(name, content.clone()),
            )
        })
    })
}

/// Byte offset of `key` at the start of a line under `[section]`, or in
/// the top-level table when `section` is `None`. The key must be followed
/// by `=`, so values that merely contain the text never match.
fn key_offset(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let start = match section {
        Some(s) => {
            let header = format!("[{s}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut offset = start;
    for line in content[start..].lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len() + 1;
    }
    None
}

/// Best fuzzy match for an unknown key among the declared ones.
fn closest(unknown: &str, known: &[&str]) -> Option<String> {
    known
        .iter()
        .map(|k| (strsim::jaro_winkler(unknown, k), *k))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, k)| k.to_string())
}

/// Renders diagnostics to stderr with miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut out = String::new();
        if handler.render_report(&mut out, error).is_ok() {
            eprint!("{out}");
        } else {
            eprintln!("error: {error}");
        }
    }
}
