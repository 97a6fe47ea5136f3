// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One sync run: validate, fetch, then post each annotation.
//!
//! ```text
//! UNVALIDATED ──token?──► FETCHING ──200(×pages)──► READY ──► POSTING(×N) ──► DONE
//!      │                     │  └──transport error or too many pages──► FETCH_FAILED
//!      └──no token──► SKIPPED└──non-200──► INVALID
//! ```
//!
//! INVALID and FETCH_FAILED are terminal: nothing is posted. From READY every
//! annotation is processed on its own, so one rejected post does not stop the
//! rest of the batch.

use std::fmt;

use tagsync_core::{Annotation, Fingerprint, TrackerState};

use super::transport::{HttpTransport, Transport};
use crate::remote::{FetchOutcome, PostOutcome, RemoteBackend, PAGE_SIZE};

/// Where a run ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Unvalidated,
    Fetching,
    Ready,
    Posting,
    Done,
    /// No token configured; nothing was sent.
    Skipped,
    /// The tracker refused the listing; setup must be re-run.
    Invalid,
    /// The listing did not complete, or was too long to read in full.
    FetchFailed,
}

impl SyncState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Unvalidated => "unvalidated",
            SyncState::Fetching => "fetching",
            SyncState::Ready => "ready",
            SyncState::Posting => "posting",
            SyncState::Done => "done",
            SyncState::Skipped => "skipped",
            SyncState::Invalid => "invalid",
            SyncState::FetchFailed => "fetch failed",
        }
    }

    /// True for the end states that mean the batch never ran.
    pub fn is_failure(&self) -> bool {
        matches!(self, SyncState::Invalid | SyncState::FetchFailed)
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to one annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Posted { number: Option<u64> },
    Duplicate,
    /// Dry run: not on the tracker, would have been posted.
    WouldPost,
    Rejected { status: u16, message: String },
    Failed { reason: String },
}

impl ItemOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ItemOutcome::Rejected { .. } | ItemOutcome::Failed { .. })
    }
}

impl From<PostOutcome> for ItemOutcome {
    fn from(outcome: PostOutcome) -> Self {
        match outcome {
            PostOutcome::Posted { number } => ItemOutcome::Posted { number },
            PostOutcome::Duplicate => ItemOutcome::Duplicate,
            PostOutcome::NotRun => ItemOutcome::Failed {
                reason: "not run".to_string(),
            },
            PostOutcome::Rejected { status, message } => ItemOutcome::Rejected { status, message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationResult {
    pub fingerprint: Fingerprint,
    pub path: String,
    pub line: u32,
    pub title: String,
    pub outcome: ItemOutcome,
}

impl AnnotationResult {
    fn new(annotation: &Annotation, fingerprint: Fingerprint, outcome: ItemOutcome) -> Self {
        AnnotationResult {
            fingerprint,
            path: annotation.path.clone(),
            line: annotation.line,
            title: annotation.title.clone(),
            outcome,
        }
    }
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub state: SyncState,
    /// Outcome of the listing, if one was attempted and completed.
    pub fetch: Option<FetchOutcome>,
    /// Transport error that ended the fetch, if any.
    pub error: Option<String>,
    pub results: Vec<AnnotationResult>,
}

impl SyncReport {
    fn new() -> Self {
        SyncReport {
            state: SyncState::Unvalidated,
            fetch: None,
            error: None,
            results: Vec::new(),
        }
    }

    fn count(&self, f: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| f(&r.outcome)).count()
    }

    pub fn posted(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Posted { .. }))
    }

    pub fn duplicates(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Duplicate))
    }

    pub fn would_post(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::WouldPost))
    }

    pub fn failed(&self) -> usize {
        self.count(ItemOutcome::is_failure)
    }

    pub fn is_success(&self) -> bool {
        !self.state.is_failure() && self.failed() == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Fetch and scan, but never post.
    pub dry_run: bool,
}

/// Runs annotation batches against one backend.
pub struct SyncEngine<T: Transport = HttpTransport> {
    backend: Box<dyn RemoteBackend>,
    transport: T,
    options: SyncOptions,
}

impl<T: Transport> SyncEngine<T> {
    pub fn new(backend: Box<dyn RemoteBackend>, transport: T, options: SyncOptions) -> Self {
        SyncEngine {
            backend,
            transport,
            options,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Syncs `annotations` and returns what happened to each.
    ///
    /// `state` is updated in place: validity and fetch time after the
    /// listing, and the issue cache as posts succeed.
    pub fn run(&self, state: &mut TrackerState, annotations: &[Annotation]) -> SyncReport {
        let mut report = SyncReport::new();
        let kind = self.backend.kind();

        if !state.has_token() {
            tracing::info!(tracker = %kind, "no token configured, skipping sync");
            report.state = SyncState::Skipped;
            return report;
        }

        report.state = SyncState::Fetching;
        match self.backend.fetch_issues(&self.transport, state) {
            Ok(outcome @ FetchOutcome::Fetched { .. }) => {
                report.fetch = Some(outcome);
                report.state = SyncState::Ready;
            }
            Ok(FetchOutcome::NotRun) => {
                report.fetch = Some(FetchOutcome::NotRun);
                report.state = SyncState::Skipped;
                return report;
            }
            Ok(outcome @ FetchOutcome::Rejected { .. }) => {
                report.fetch = Some(outcome);
                report.state = SyncState::Invalid;
                return report;
            }
            Ok(FetchOutcome::Truncated { pages }) => {
                report.fetch = Some(FetchOutcome::Truncated { pages });
                report.error = Some(format!(
                    "issue listing has more than {} pages of {}",
                    pages, PAGE_SIZE
                ));
                report.state = SyncState::FetchFailed;
                return report;
            }
            Err(e) => {
                tracing::warn!(tracker = %kind, error = %e, "fetching issues failed");
                report.error = Some(e.to_string());
                report.state = SyncState::FetchFailed;
                return report;
            }
        }

        report.state = SyncState::Posting;
        let mut planned: Vec<Fingerprint> = Vec::new();
        for annotation in annotations {
            let fingerprint = annotation.fingerprint();
            let outcome = if self.options.dry_run {
                if state.issues.scan(&fingerprint).is_duplicate() || planned.contains(&fingerprint)
                {
                    ItemOutcome::Duplicate
                } else {
                    planned.push(fingerprint.clone());
                    ItemOutcome::WouldPost
                }
            } else {
                match self.backend.post_issue(&self.transport, annotation, state) {
                    Ok(outcome) => outcome.into(),
                    Err(e) => {
                        tracing::warn!(%fingerprint, error = %e, "posting issue failed");
                        ItemOutcome::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            };
            report
                .results
                .push(AnnotationResult::new(annotation, fingerprint, outcome));
        }

        report.state = SyncState::Done;
        tracing::info!(
            tracker = %kind,
            posted = report.posted(),
            duplicates = report.duplicates(),
            failed = report.failed(),
            dry_run = self.options.dry_run,
            "sync finished"
        );
        report
    }
}
