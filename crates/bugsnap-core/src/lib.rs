// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for BugSnap.
//!
//! Defines the shared error type, the domain model (identification records
//! and history entries), data-URI helpers, and the provider trait the
//! identification client implements.

pub mod datauri;
pub mod error;
pub mod provider;
pub mod types;

pub use error::BugsnapError;
pub use provider::IdentifyProvider;
pub use types::{HistoryEntry, InsectRecord};
