// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for the remote identification endpoint.

use async_trait::async_trait;

use crate::error::BugsnapError;
use crate::types::InsectRecord;

/// The seam between the view controller and the remote model.
///
/// One implementation talks to Gemini; tests substitute a mock with queued
/// outcomes. Every failure mode of the remote call collapses into
/// [`BugsnapError::Identification`].
#[async_trait]
pub trait IdentifyProvider: Send + Sync {
    /// Human-readable provider name, for logs.
    fn name(&self) -> &str;

    /// Identifies the insect in one captured image.
    ///
    /// `image` is a base64 data URI (a bare payload is also accepted).
    /// Resolves exactly once; no retry, no partial result.
    async fn identify(&self, image: &str) -> Result<InsectRecord, BugsnapError>;
}
