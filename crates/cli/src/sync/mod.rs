// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Annotation sync against a remote issue tracker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌─────────────┐
//! │ SyncEngine  │────►│ RemoteBackend  │────►│  Transport  │────► tracker
//! │ (one batch) │◄────│ (gitlab/github)│◄────│   (trait)   │◄────
//! └─────────────┘     └────────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ SyncReport  │  (per-annotation outcomes)
//! └─────────────┘
//! ```
//!
//! # Features
//!
//! - One listing per run fills the open and closed partitions
//! - Per-annotation failures never abort the batch
//! - Dry-run mode scans without posting
//! - Injectable transport trait for testing

mod engine;
mod transport;

pub use engine::{AnnotationResult, ItemOutcome, SyncEngine, SyncOptions, SyncReport, SyncState};
pub use transport::{
    parse_body, redact, Auth, HttpRequest, HttpResponse, HttpTransport, Method, Transport,
    TransportError, TransportResult,
};

#[cfg(test)]
pub(crate) mod test_helpers;
