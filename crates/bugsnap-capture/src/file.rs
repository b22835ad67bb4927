// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-based image capture.

use std::path::Path;

use bugsnap_core::{BugsnapError, datauri};
use tracing::debug;

/// Reads an image file and returns it as a base64 data URI.
///
/// The MIME type is sniffed from the file's magic bytes, falling back to
/// JPEG for anything unrecognized.
pub async fn read_image_file(path: impl AsRef<Path>) -> Result<String, BugsnapError> {
    let path = path.as_ref();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| BugsnapError::Capture {
            message: format!("could not read image file {}", path.display()),
            source: Some(Box::new(e)),
        })?;

    if bytes.is_empty() {
        return Err(BugsnapError::Capture {
            message: format!("image file {} is empty", path.display()),
            source: None,
        });
    }

    let mime = datauri::sniff_mime(&bytes);
    debug!(path = %path.display(), mime, len = bytes.len(), "image file read");

    Ok(datauri::encode(mime, &bytes))
}
