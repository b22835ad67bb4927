// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock identification provider for deterministic testing.
//!
//! `MockIdentifier` implements `IdentifyProvider` with pre-configured
//! outcomes, enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use bugsnap_core::{BugsnapError, IdentifyProvider, InsectRecord};

/// Outcome queued on a [`MockIdentifier`].
pub enum MockOutcome {
    Record(InsectRecord),
    Failure(String),
}

/// A mock identifier that returns pre-configured outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty, a
/// default [`sample_record`] is returned. Every call is counted, so tests
/// can assert that an operation did or did not reach the provider.
pub struct MockIdentifier {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<AtomicUsize>,
}

impl MockIdentifier {
    /// Create a new mock identifier with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock identifier pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Queue a successful identification.
    pub async fn add_record(&self, record: InsectRecord) {
        self.outcomes.lock().await.push_back(MockOutcome::Record(record));
    }

    /// Queue a failed identification.
    pub async fn add_failure(&self, message: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(MockOutcome::Failure(message.into()));
    }

    /// Number of `identify` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentifyProvider for MockIdentifier {
    fn name(&self) -> &str {
        "mock-identifier"
    }

    async fn identify(&self, _image: &str) -> Result<InsectRecord, BugsnapError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcomes.lock().await.pop_front() {
            Some(MockOutcome::Record(record)) => Ok(record),
            Some(MockOutcome::Failure(message)) => Err(BugsnapError::identification(message)),
            None => Ok(sample_record("Mock Bug")),
        }
    }
}

/// A fully-populated non-pest record for tests.
pub fn sample_record(name: &str) -> InsectRecord {
    InsectRecord {
        common_name: name.into(),
        scientific_name: "Testus insectus".into(),
        description: "A small, well-behaved test insect.".into(),
        toxicity: "Non-toxic".into(),
        habitat: "Test fixtures".into(),
        behavior: "Deterministic".into(),
        is_pest: false,
        pest_solutions: vec![],
        safety_tips: vec![],
    }
}

/// A pest record with solutions, for exercising the pest branches.
pub fn pest_record(name: &str) -> InsectRecord {
    InsectRecord {
        common_name: name.into(),
        scientific_name: "Pestus horribilis".into(),
        description: "Chews through everything it finds.".into(),
        toxicity: "Mildly toxic, avoid handling".into(),
        habitat: "Gardens and greenhouses".into(),
        behavior: "Swarming, nocturnal".into(),
        is_pest: true,
        pest_solutions: vec![
            "Introduce ladybugs".into(),
            "Neem oil spray".into(),
            "Sticky traps".into(),
        ],
        safety_tips: vec!["Wash hands after contact".into()],
    }
}
