// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the BugSnap workspace.
//!
//! `InsectRecord` mirrors the JSON shape the model is contracted to return
//! and `HistoryEntry` mirrors the persisted history slot, so both use
//! camelCase field names on the wire.

use serde::{Deserialize, Serialize};

/// The structured result of one identification call.
///
/// All nine fields are required when deserializing a model response; a
/// missing field is a schema violation, never silently defaulted. Name
/// fields carry the "Unknown" sentinel when the subject is not an insect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsectRecord {
    pub common_name: String,
    pub scientific_name: String,
    pub description: String,
    /// Free text, no enumerated levels. See [`InsectRecord::toxicity_flagged`].
    pub toxicity: String,
    pub habitat: String,
    pub behavior: String,
    /// Drives the remediation branch of the result view.
    pub is_pest: bool,
    /// Populated when `is_pest` is true, by model convention only.
    pub pest_solutions: Vec<String>,
    /// May be empty when the insect poses no hazard.
    pub safety_tips: Vec<String>,
}

impl InsectRecord {
    /// Whether the toxicity text warrants the warning badge.
    ///
    /// Case-insensitive substring match on "toxic". "Non-toxic" matches
    /// too; long-standing behavior, kept as-is.
    pub fn toxicity_flagged(&self) -> bool {
        self.toxicity.to_lowercase().contains("toxic")
    }
}

/// One persisted past identification.
///
/// Immutable once created; destroyed only by a full history clear. The
/// serialized field names are frozen, so an existing history slot parses
/// unchanged across releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Capture time in milliseconds, rendered as a string. Unique under a
    /// sane clock; not cryptographically guaranteed.
    pub id: String,
    /// Capture instant, milliseconds since epoch.
    pub timestamp: i64,
    /// The captured image as a data URI.
    #[serde(rename = "imageUrl")]
    pub image: String,
    pub data: InsectRecord,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(image: String, data: InsectRecord) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: now.to_string(),
            timestamp: now,
            image,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(toxicity: &str) -> InsectRecord {
        InsectRecord {
            common_name: "Seven-spot Ladybird".into(),
            scientific_name: "Coccinella septempunctata".into(),
            description: "A small red beetle with seven black spots.".into(),
            toxicity: toxicity.into(),
            habitat: "Gardens and meadows".into(),
            behavior: "Diurnal aphid predator".into(),
            is_pest: false,
            pest_solutions: vec![],
            safety_tips: vec![],
        }
    }

    #[test]
    fn toxicity_badge_matches_substring_case_insensitive() {
        assert!(record("Mildly TOXIC if ingested").toxicity_flagged());
        assert!(record("Highly toxic").toxicity_flagged());
        // Known quirk: "Non-toxic" also matches the substring.
        assert!(record("Non-toxic").toxicity_flagged());
        assert!(!record("Harmless").toxicity_flagged());
    }

    #[test]
    fn record_roundtrips_with_camel_case_wire_names() {
        let json = serde_json::to_value(record("Harmless")).unwrap();
        assert!(json.get("commonName").is_some());
        assert!(json.get("isPest").is_some());
        assert!(json.get("pestSolutions").is_some());
        let back: InsectRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record("Harmless"));
    }

    #[test]
    fn record_with_missing_field_fails_to_parse() {
        // No silent defaults: dropping a required field must be an error.
        let mut json = serde_json::to_value(record("Harmless")).unwrap();
        json.as_object_mut().unwrap().remove("habitat");
        assert!(serde_json::from_value::<InsectRecord>(json).is_err());
    }

    #[test]
    fn history_entry_id_matches_timestamp() {
        let entry = HistoryEntry::new("data:image/jpeg;base64,AA==".into(), record("Harmless"));
        assert_eq!(entry.id, entry.timestamp.to_string());
    }

    #[test]
    fn history_entry_serializes_image_as_image_url() {
        let entry = HistoryEntry::new("data:image/png;base64,AA==".into(), record("Harmless"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["imageUrl"], "data:image/png;base64,AA==");
    }
}
