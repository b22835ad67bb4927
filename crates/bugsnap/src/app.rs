// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application state and the identification flow.
//!
//! `App` owns the current view, the identify sub-state, and the in-memory
//! history mirror of the persisted slot. Every history mutation is written
//! through to the [`HistoryStore`] before the operation returns.

use bugsnap_core::{BugsnapError, HistoryEntry, IdentifyProvider, InsectRecord};
use bugsnap_history::HistoryStore;
use tracing::{debug, info, warn};

/// Top-level view. Switching views never loses identify progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Identify,
    History,
    SafetyGuide,
    GardenSolutions,
}

/// State of the identify flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IdentifyState {
    /// Waiting for an image.
    #[default]
    Idle,
    /// One identification in flight; further submits are ignored.
    Loading,
    /// A result is on display.
    Result {
        record: InsectRecord,
        image: String,
    },
}

/// The application controller.
pub struct App<P: IdentifyProvider> {
    provider: P,
    store: HistoryStore,
    history: Vec<HistoryEntry>,
    view: AppView,
    identify: IdentifyState,
}

impl<P: IdentifyProvider> App<P> {
    /// Creates the app and restores the persisted history, newest first.
    pub async fn load(provider: P, store: HistoryStore) -> Self {
        let history = store.load().await;
        info!(entries = history.len(), provider = provider.name(), "app ready");
        Self {
            provider,
            store,
            history,
            view: AppView::default(),
            identify: IdentifyState::default(),
        }
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn identify_state(&self) -> &IdentifyState {
        &self.identify
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Switches the active view. The identify sub-state is untouched, so a
    /// result or an in-flight identification survives the round trip.
    pub fn change_view(&mut self, view: AppView) {
        self.view = view;
    }

    /// Returns to the capture prompt, discarding any displayed result.
    /// An in-flight identification is never interrupted.
    pub fn reset(&mut self) {
        if self.identify != IdentifyState::Loading {
            self.identify = IdentifyState::Idle;
        }
        self.view = AppView::Identify;
    }

    /// Enters the loading state. Returns false when an identification is
    /// already in flight; the caller must then drop the submission.
    fn begin_submit(&mut self) -> bool {
        if self.identify == IdentifyState::Loading {
            debug!("submit ignored, identification already in flight");
            return false;
        }
        self.identify = IdentifyState::Loading;
        true
    }

    /// Leaves the loading state: result on success, back to idle on failure.
    fn finish_submit(&mut self, outcome: Option<(InsectRecord, String)>) {
        self.identify = match outcome {
            Some((record, image)) => IdentifyState::Result { record, image },
            None => IdentifyState::Idle,
        };
    }

    /// Submits an image (as a data URI) for identification.
    ///
    /// On success the result is displayed and a new history entry is
    /// prepended and persisted before this returns. On failure the flow
    /// rolls back to idle and history is untouched. A submit while one is
    /// already loading is dropped without reaching the provider.
    pub async fn submit(&mut self, image: String) -> Result<(), BugsnapError> {
        if !self.begin_submit() {
            return Ok(());
        }

        match self.provider.identify(&image).await {
            Ok(record) => {
                let entry = HistoryEntry::new(image.clone(), record.clone());
                self.history.insert(0, entry);
                if let Err(e) = self.store.save(&self.history).await {
                    // The result is still shown; only persistence failed.
                    warn!(error = %e, "failed to persist history");
                }
                self.finish_submit(Some((record, image)));
                Ok(())
            }
            Err(e) => {
                self.finish_submit(None);
                Err(e)
            }
        }
    }

    /// Re-opens a past result by entry id. No provider call is made.
    /// Returns false when no entry matches.
    pub fn select_history_entry(&mut self, id: &str) -> bool {
        let Some(entry) = self.history.iter().find(|e| e.id == id) else {
            return false;
        };
        self.identify = IdentifyState::Result {
            record: entry.data.clone(),
            image: entry.image.clone(),
        };
        self.view = AppView::Identify;
        true
    }

    /// Drops the full history and persists the empty slot immediately.
    pub async fn clear_history(&mut self) -> Result<(), BugsnapError> {
        self.history.clear();
        self.store.save(&self.history).await?;
        info!("history cleared");
        Ok(())
    }
}
