// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Gemini `generateContent` API.
//!
//! Only the slice of the API this app uses: one inline image part, one text
//! part, and a structured-output generation config.

use serde::{Deserialize, Serialize};

/// A `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// One content turn; this app always sends a single user turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One part of a content turn: either inline binary data or text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            inline_data: None,
            text: Some(text.into()),
        }
    }
}

/// Base64 image payload with its MIME type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Generation settings: structured JSON output against a fixed schema,
/// with a low temperature for this classification-like task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// A `generateContent` response body.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// The first text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub status: String,
    pub message: String,
}

/// The fixed response contract: the model must return a JSON object with
/// exactly the nine `InsectRecord` fields.
pub fn insect_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "commonName": { "type": "STRING", "description": "Common name of the insect" },
            "scientificName": { "type": "STRING", "description": "Scientific name of the insect" },
            "description": { "type": "STRING", "description": "A brief, 2-sentence description of the insect." },
            "toxicity": { "type": "STRING", "description": "Toxicity level (e.g., Non-toxic, Mildly toxic, Highly toxic) and bite/sting info." },
            "habitat": { "type": "STRING", "description": "Typical habitat where this insect is found." },
            "behavior": { "type": "STRING", "description": "Key behavioral traits (e.g., solitary, swarming, nocturnal)." },
            "isPest": { "type": "BOOLEAN", "description": "True if generally considered a garden or household pest." },
            "pestSolutions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3 eco-friendly pest control solutions if it is a pest, otherwise empty."
            },
            "safetyTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Safety tips if the insect is dangerous or venomous."
            }
        },
        "required": [
            "commonName", "scientificName", "description", "toxicity",
            "habitat", "behavior", "isPest", "pestSolutions", "safetyTips"
        ]
    })
}
