// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data-URI helpers.
//!
//! Captured images travel through the app as self-describing data URIs
//! (`data:<mime>;base64,<payload>`), the same representation the history
//! slot persists.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encodes raw image bytes as a base64 data URI.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Returns the base64 payload of a data URI.
///
/// If no `data:...,` header is present the input is returned unchanged,
/// so already-stripped payloads pass through.
pub fn payload(uri: &str) -> &str {
    match uri.split_once(',') {
        Some((_, rest)) => rest,
        None => uri,
    }
}

/// Extracts the MIME type from a data URI header, if present.
pub fn mime(uri: &str) -> Option<&str> {
    let rest = uri.strip_prefix("data:")?;
    let header = rest.split_once(',')?.0;
    Some(header.split(';').next().unwrap_or(header))
}

/// Guesses the MIME type of encoded image bytes from magic numbers.
///
/// Defaults to JPEG, which is what the model request assumes anyway.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/jpeg"
    }
}
