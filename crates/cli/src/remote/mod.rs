// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote tracker backends.
//!
//! Every tracker implements the same three operations: `setup`,
//! `fetch_issues`, and `post_issue`. The wire details (URL shape, where the
//! token goes, JSON field names) are the only thing a backend provides; the
//! precondition checks, status handling, and dedup scan are shared by the
//! provided trait methods.
//!
//! ```text
//! ┌────────────┐     ┌───────────────┐     ┌─────────────┐
//! │ SyncEngine │────►│ RemoteBackend │────►│  Transport  │────► tracker
//! └────────────┘     │ gitlab/github │◄────│   (trait)   │◄────
//!                    └───────┬───────┘     └─────────────┘
//!                            ▼
//!                      IssueCache (open / closed)
//! ```

mod github;
mod gitlab;

pub use github::GitHubBackend;
pub use gitlab::GitLabBackend;

use chrono::Utc;
use serde_json::Value;
use tagsync_core::{body, Annotation, IssueStatus, RemoteIssue, TrackerKind, TrackerState};

use crate::error::Result;
use crate::sync::{HttpRequest, Transport, TransportResult};

/// Label added to every posted issue unless configured otherwise.
pub const DEFAULT_MARKER_LABEL: &str = "tagsync";

/// Issues requested per listing page.
pub const PAGE_SIZE: usize = 100;

/// Listing pages read before giving up on a project.
pub const MAX_PAGES: u32 = 100;

/// Credentials supplied to [`RemoteBackend::setup`].
#[derive(Debug, Clone, Default)]
pub struct SetupInput {
    /// Host override; the backend default is used when `None`.
    pub host: Option<String>,
    pub project: String,
    pub token: String,
    pub secure: bool,
}

/// Structured body of a create-issue request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuePayload {
    pub title: String,
    pub labels: Vec<String>,
    pub body: String,
}

/// Result of [`RemoteBackend::fetch_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Listing retrieved; the cache now holds this many issues per partition.
    Fetched { open: usize, closed: usize },
    /// No token configured, nothing was sent.
    NotRun,
    /// The tracker answered with something other than 200.
    Rejected { status: u16, message: String },
    /// Every page up to [`MAX_PAGES`] was full; the cache was left unpopulated.
    Truncated { pages: u32 },
}

/// Result of [`RemoteBackend::post_issue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// Issue created (201).
    Posted { number: Option<u64> },
    /// Fingerprint already present on the tracker; nothing was sent.
    Duplicate,
    /// No token configured, or the issue list was never fetched; nothing was sent.
    NotRun,
    /// The tracker answered with something other than 201.
    Rejected { status: u16, message: String },
}

/// One tracker's implementation of the setup/fetch/post contract.
pub trait RemoteBackend {
    fn kind(&self) -> TrackerKind;

    /// Host used when setup is given none.
    fn default_host(&self) -> &'static str;

    /// Label marking issues as created by this tool.
    fn marker_label(&self) -> &str;

    /// Validates a project identifier and returns its canonical form.
    fn normalize_project(&self, project: &str) -> Result<String>;

    /// Request for one page (1-based) of all issues, open and closed.
    fn list_request(&self, state: &TrackerState, page: u32) -> HttpRequest;

    /// Request creating one issue.
    fn create_request(&self, state: &TrackerState, payload: &IssuePayload) -> HttpRequest;

    /// Converts one element of the listing. `None` skips it.
    fn parse_issue(&self, value: &Value) -> Option<RemoteIssue>;

    /// Stores new credentials. Never touches the network.
    fn setup(&self, state: &mut TrackerState, input: SetupInput) -> Result<()> {
        let project = self.normalize_project(&input.project)?;
        let host = input
            .host
            .map(|h| h.trim().trim_end_matches('/').to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| self.default_host().to_string());
        tracing::debug!(tracker = %self.kind(), %host, %project, "updating credentials");
        state.reset_credentials(host, project, input.token.trim().to_string(), input.secure);
        Ok(())
    }

    /// Retrieves every issue of the project into `state.issues`.
    ///
    /// Pages are read in order until one comes back with fewer than
    /// [`PAGE_SIZE`] entries. Both partitions come from the same listing, so
    /// `open` is always as fresh as `closed` before anything is posted. If
    /// [`MAX_PAGES`] full pages are read the listing is incomplete: the cache
    /// is cleared so nothing can be posted against it.
    fn fetch_issues(
        &self,
        transport: &dyn Transport,
        state: &mut TrackerState,
    ) -> TransportResult<FetchOutcome> {
        if !state.has_token() {
            tracing::debug!(tracker = %self.kind(), "no token, not fetching issues");
            return Ok(FetchOutcome::NotRun);
        }

        let mut issues: Vec<RemoteIssue> = Vec::new();
        let mut skipped = 0;
        let mut page = 1;
        loop {
            let response = transport.send(&self.list_request(state, page))?;
            if response.status != 200 {
                tracing::warn!(
                    tracker = %self.kind(),
                    status = response.status,
                    message = %response.message,
                    page,
                    "unable to access remote, credentials may be invalid"
                );
                state.mark_invalid();
                return Ok(FetchOutcome::Rejected {
                    status: response.status,
                    message: response.message,
                });
            }

            let Some(items) = response.body.as_array() else {
                tracing::warn!(tracker = %self.kind(), page, "issue listing is not a JSON array");
                state.mark_invalid();
                return Ok(FetchOutcome::Rejected {
                    status: response.status,
                    message: "unexpected response body".to_string(),
                });
            };

            let before = issues.len();
            issues.extend(items.iter().filter_map(|v| self.parse_issue(v)));
            skipped += items.len() - (issues.len() - before);
            if items.len() < PAGE_SIZE {
                break;
            }
            if page == MAX_PAGES {
                tracing::warn!(
                    tracker = %self.kind(),
                    pages = page,
                    "issue listing has more pages than allowed, not posting"
                );
                state.issues.clear();
                return Ok(FetchOutcome::Truncated { pages: page });
            }
            page += 1;
        }

        if skipped > 0 {
            tracing::debug!(
                tracker = %self.kind(),
                skipped,
                "skipped listing entries that are not issues"
            );
        }
        state.issues.replace(issues);
        state.mark_valid(Utc::now());

        let open = state.issues.open().len();
        let closed = state.issues.closed().len();
        tracing::info!(
            tracker = %self.kind(),
            open,
            closed,
            tracked = state.issues.tracked_count(),
            "fetched remote issues"
        );
        Ok(FetchOutcome::Fetched { open, closed })
    }

    /// Posts an issue for `annotation` unless its fingerprint is already known.
    ///
    /// Requires a successful [`fetch_issues`](Self::fetch_issues) first: with
    /// an unpopulated cache nothing is posted. A duplicate returns
    /// [`PostOutcome::Duplicate`] without any request. On
    /// success the new issue is added to the open partition, so posting the
    /// same annotation again in this run is also a duplicate.
    fn post_issue(
        &self,
        transport: &dyn Transport,
        annotation: &Annotation,
        state: &mut TrackerState,
    ) -> TransportResult<PostOutcome> {
        if !state.has_token() {
            tracing::debug!(tracker = %self.kind(), "no token, not posting");
            return Ok(PostOutcome::NotRun);
        }
        if !state.issues.is_populated() {
            tracing::debug!(tracker = %self.kind(), "issue list not fetched, not posting");
            return Ok(PostOutcome::NotRun);
        }

        let fingerprint = annotation.fingerprint();
        let scan = state.issues.scan(&fingerprint);
        if let Some(hit) = scan.hit {
            if let Some(existing) = state.issues.get(hit) {
                tracing::debug!(
                    %fingerprint,
                    partition = %hit.partition,
                    title = %existing.title,
                    "found in existing issue, not posting"
                );
            }
            return Ok(PostOutcome::Duplicate);
        }
        tracing::debug!(%fingerprint, inspected = scan.inspected, "not found, posting");

        let payload = IssuePayload {
            title: annotation.issue_title(),
            labels: vec![annotation.tag.clone(), self.marker_label().to_string()],
            body: body::render(annotation, &fingerprint),
        };
        let response = transport.send(&self.create_request(state, &payload))?;
        if response.status != 201 {
            tracing::warn!(
                tracker = %self.kind(),
                status = response.status,
                message = %response.message,
                "post unsuccessful even though the issue listing was readable"
            );
            return Ok(PostOutcome::Rejected {
                status: response.status,
                message: response.message,
            });
        }

        let number = self.parse_issue(&response.body).and_then(|issue| issue.number);
        let posted =
            RemoteIssue::new(payload.title, payload.body, IssueStatus::Open).with_number(number);
        state.issues.push(posted);
        Ok(PostOutcome::Posted { number })
    }
}

/// Selects the backend for a configured tracker.
pub fn backend_for(kind: TrackerKind, marker_label: &str) -> Box<dyn RemoteBackend> {
    match kind {
        TrackerKind::GitLab => Box::new(GitLabBackend::new(marker_label)),
        TrackerKind::GitHub => Box::new(GitHubBackend::new(marker_label)),
    }
}

/// Reads an issue number that trackers send either as a number or a string.
fn json_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
