// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tagsync-core: Shared data model for tagsync
//!
//! This crate holds the pieces of the sync engine that never touch the network:
//! annotations, their fingerprints, remote issue snapshots, the issue cache used
//! for duplicate detection, and the per-tracker credential state.

pub mod annotation;
pub mod body;
pub mod cache;
pub mod error;
pub mod fingerprint;
pub mod issue;
pub mod tracker;

pub use annotation::Annotation;
pub use cache::{IssueCache, Partition, ScanHit, ScanReport};
pub use error::{Error, Result};
pub use fingerprint::Fingerprint;
pub use issue::{IssueStatus, RemoteIssue};
pub use tracker::{TrackerKind, TrackerState, Validity};
