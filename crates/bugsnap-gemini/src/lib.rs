// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini identification client for BugSnap.
//!
//! This crate implements [`IdentifyProvider`] for the Gemini
//! `generateContent` API with a fixed structured-output schema: one inline
//! image in, one `InsectRecord` out.

pub mod client;
pub mod types;

use async_trait::async_trait;
use bugsnap_config::BugsnapConfig;
use bugsnap_core::{BugsnapError, IdentifyProvider, InsectRecord, datauri};
use tracing::{info, warn};

use crate::client::GeminiClient;
use crate::types::{
    Content, GenerateContentRequest, GenerationConfig, Part, insect_response_schema,
};

/// The fixed instruction sent alongside every image.
const INSTRUCTION: &str = "Identify this insect. If it is not an insect or bug, \
    return 'Unknown' for names but still try to describe it.";

/// Gemini-backed [`IdentifyProvider`].
///
/// API key resolution order: config -> `GEMINI_API_KEY` env var -> error.
/// The key is resolved at construction so a missing credential fails fast
/// at startup rather than surfacing as an identify-time error.
pub struct GeminiIdentifier {
    client: GeminiClient,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiIdentifier {
    /// Creates a new Gemini identifier from the given configuration.
    pub fn new(config: &BugsnapConfig) -> Result<Self, BugsnapError> {
        let api_key = resolve_api_key(&config.gemini.api_key)?;
        let client = GeminiClient::new(api_key, config.gemini.model.clone())?;

        info!(model = %config.gemini.model, "Gemini identifier initialized");

        Ok(Self {
            client,
            temperature: config.gemini.temperature,
            max_output_tokens: config.gemini.max_output_tokens,
        })
    }

    /// Creates an identifier with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: GeminiClient) -> Self {
        Self {
            client,
            temperature: 0.4,
            max_output_tokens: 2048,
        }
    }

    /// Builds the single-turn request: inline image plus the fixed
    /// instruction, with the strict nine-field response schema.
    fn to_request(&self, image: &str) -> GenerateContentRequest {
        let mime = datauri::mime(image).unwrap_or("image/jpeg").to_string();
        let payload = datauri::payload(image).to_string();

        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::inline(mime, payload), Part::text(INSTRUCTION)],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".into(),
                response_schema: insect_response_schema(),
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl IdentifyProvider for GeminiIdentifier {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn identify(&self, image: &str) -> Result<InsectRecord, BugsnapError> {
        let request = self.to_request(image);

        let response = self.client.generate(&request).await.map_err(|e| {
            warn!(error = %e, "identification request failed");
            collapse(e)
        })?;

        let text = response.first_text().ok_or_else(|| {
            warn!("identification response carried no text part");
            BugsnapError::identification("no response text from model")
        })?;

        serde_json::from_str::<InsectRecord>(text).map_err(|e| {
            warn!(error = %e, "model response did not match the record schema");
            BugsnapError::identification(e)
        })
    }
}

/// Collapses a client error into the single user-facing identification
/// error, keeping the original as the logged cause.
fn collapse(err: BugsnapError) -> BugsnapError {
    BugsnapError::identification(err.to_string())
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, BugsnapError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("GEMINI_API_KEY").map_err(|_| {
        BugsnapError::Config(
            "Gemini API key not found. Set gemini.api_key in config or GEMINI_API_KEY environment variable.".into(),
        )
    })
}
