// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for BugSnap.

use thiserror::Error;

/// The primary error type used across all BugSnap crates.
#[derive(Debug, Error)]
pub enum BugsnapError {
    /// Configuration errors (invalid TOML, missing required fields, missing API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// Image capture errors (unreadable file, frame grab failure).
    #[error("capture error: {message}")]
    Capture {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Camera unavailable: permission denied, no device, or no backend configured.
    ///
    /// Recoverable; shown inline near the capture prompt, never fatal.
    #[error("camera unavailable: {message}")]
    Camera { message: String },

    /// Identification failed, for any reason.
    ///
    /// Transport, API, and response-parse failures all collapse into this
    /// variant. The user-facing message stays generic; the concrete cause
    /// is retained in `source` for logging.
    #[error("identification failed: {message}")]
    Identification {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// History store write errors. Decode errors on load are never raised.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BugsnapError {
    /// Builds the collapsed identification error with the standard
    /// user-facing message, keeping `cause` for logs.
    pub fn identification(
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Identification {
            message: "failed to identify the insect, please try a clearer image".into(),
            source: Some(cause.into()),
        }
    }
}
