// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent identification history for BugSnap.
//!
//! The history lives in one JSON slot: a single file holding the full
//! entry array, newest first. There is no versioning and no migration; a
//! shape change invalidates old data, which reads back as empty history.

use std::path::{Path, PathBuf};

use bugsnap_core::{BugsnapError, HistoryEntry};
use tracing::{debug, warn};

/// File-backed store for the identification history.
///
/// Every mutation of the in-memory history is mirrored wholesale through
/// [`HistoryStore::save`]; there are no per-entry updates.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store backed by the given slot path. Nothing is read or
    /// written until [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the slot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the history slot.
    ///
    /// A missing file is an empty history. A file that cannot be read or
    /// does not parse as the expected shape is also an empty history; the
    /// decode error is logged and never raised to the caller.
    pub async fn load(&self) -> Vec<HistoryEntry> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history slot yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read history slot, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<HistoryEntry>>(&bytes) {
            Ok(entries) => {
                debug!(count = entries.len(), "history loaded");
                entries
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history slot did not parse, treating as empty");
                Vec::new()
            }
        }
    }

    /// Serializes the full sequence and overwrites the slot.
    ///
    /// The array is written to a sibling temp file and renamed into place,
    /// so a crash mid-write never leaves a half-written slot. Parent
    /// directories are created on demand.
    pub async fn save(&self, entries: &[HistoryEntry]) -> Result<(), BugsnapError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| BugsnapError::Storage { source: Box::new(e) })?;
        }

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| BugsnapError::Storage { source: Box::new(e) })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|e| BugsnapError::Storage { source: Box::new(e) })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| BugsnapError::Storage { source: Box::new(e) })?;

        debug!(count = entries.len(), path = %self.path.display(), "history saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugsnap_core::InsectRecord;

    fn sample_record(name: &str) -> InsectRecord {
        InsectRecord {
            common_name: name.into(),
            scientific_name: "Testus insectus".into(),
            description: "A test insect.".into(),
            toxicity: "Non-toxic".into(),
            habitat: "Test fixtures".into(),
            behavior: "Deterministic".into(),
            is_pest: false,
            pest_solutions: vec![],
            safety_tips: vec![],
        }
    }

    fn entries(n: usize) -> Vec<HistoryEntry> {
        (0..n)
            .map(|i| HistoryEntry {
                id: format!("{}", 1700000000000u64 + i as u64),
                timestamp: 1_700_000_000_000 + i as i64,
                image: "data:image/jpeg;base64,AA==".into(),
                data: sample_record(&format!("Bug {i}")),
            })
            .collect()
    }

    #[tokio::test]
    async fn missing_slot_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        let original = entries(3);
        store.save(&original).await.unwrap();
        assert_eq!(store.load().await, original);
    }

    #[tokio::test]
    async fn save_of_load_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        store.save(&entries(2)).await.unwrap();

        let loaded = store.load().await;
        store.save(&loaded).await.unwrap();
        assert_eq!(store.load().await, loaded);
    }

    #[tokio::test]
    async fn corrupt_slot_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, b"{ not json ]").unwrap();
        let store = HistoryStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn wrong_shape_loads_as_empty() {
        // Valid JSON, wrong shape: entries missing required record fields.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, br#"[{"id": "1", "timestamp": 1}]"#).unwrap();
        let store = HistoryStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("nested/deep/history.json"));
        store.save(&entries(1)).await.unwrap();
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_whole_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        store.save(&entries(5)).await.unwrap();
        store.save(&[]).await.unwrap();
        assert!(store.load().await.is_empty());
    }
}
