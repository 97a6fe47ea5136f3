// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::path::Path;

use tagsync_core::{Annotation, TrackerKind};

use crate::colors::{self, Mark};
use crate::config::{find_work_dir, lock_path, Config};
use crate::env;
use crate::error::{Error, Result};
use crate::input;
use crate::remote::{backend_for, FetchOutcome};
use crate::sync::{
    AnnotationResult, HttpTransport, ItemOutcome, SyncEngine, SyncOptions, SyncReport, SyncState,
    Transport,
};

pub fn run(input: Option<String>, dry_run: bool) -> Result<()> {
    let work_dir = find_work_dir()?;
    let _lock = acquire_lock(&work_dir)?;
    let mut config = Config::load(&work_dir)?;
    let kind = config.active_tracker()?;

    let annotations = input::load(input.as_deref())?;
    let transport = HttpTransport::new(&config.http)?;
    let report = execute(
        &mut config,
        kind,
        transport,
        &annotations,
        SyncOptions { dry_run },
        env::token_override(),
    )?;
    config.save(&work_dir)?;

    for line in render_report(kind, &report, colors::should_colorize()) {
        println!("{}", line);
    }
    check(kind, &report)
}

/// Holds the sync lock until dropped.
fn acquire_lock(work_dir: &Path) -> Result<fs::File> {
    use fs2::FileExt;

    let path = lock_path(work_dir);
    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    file.try_lock_exclusive()
        .map_err(|_| Error::SyncInProgress(work_dir.display().to_string()))?;
    Ok(file)
}

/// Runs one batch for `kind` and records validity and fetch time in `config`.
///
/// `token_override` is used for this run only and never written back.
pub(crate) fn execute<T: Transport>(
    config: &mut Config,
    kind: TrackerKind,
    transport: T,
    annotations: &[Annotation],
    options: SyncOptions,
    token_override: Option<String>,
) -> Result<SyncReport> {
    let mut state = config
        .tracker_state(kind)
        .cloned()
        .ok_or_else(|| Error::TrackerNotSetUp {
            tracker: kind.to_string(),
        })?;
    if let Some(token) = token_override {
        tracing::debug!(tracker = %kind, "using token from environment");
        state.token = token;
    }

    let engine = SyncEngine::new(backend_for(kind, &config.marker_label), transport, options);
    let report = engine.run(&mut state, annotations);

    let stored = config.tracker_state_mut(kind);
    stored.valid = state.valid;
    stored.last_fetched = state.last_fetched;
    Ok(report)
}

fn location(result: &AnnotationResult) -> String {
    format!("{} ({}:{})", result.title, result.path, result.line)
}

pub(crate) fn render_result(result: &AnnotationResult, color: bool) -> String {
    let (mark, text) = match &result.outcome {
        ItemOutcome::Posted { number: Some(n) } => {
            (Mark::Ok, format!("posted #{}: {}", n, location(result)))
        }
        ItemOutcome::Posted { number: None } => {
            (Mark::Ok, format!("posted: {}", location(result)))
        }
        ItemOutcome::WouldPost => (Mark::Ok, format!("would post: {}", location(result))),
        ItemOutcome::Duplicate => {
            (Mark::Skip, format!("already tracked: {}", location(result)))
        }
        ItemOutcome::Rejected { status, message } => (
            Mark::Fail,
            format!("rejected ({} {}): {}", status, message, location(result)),
        ),
        ItemOutcome::Failed { reason } => {
            (Mark::Fail, format!("failed ({}): {}", reason, location(result)))
        }
    };
    colors::status_line_with(mark, &text, color)
}

pub(crate) fn render_report(kind: TrackerKind, report: &SyncReport, color: bool) -> Vec<String> {
    match report.state {
        SyncState::Skipped => {
            return vec![colors::status_line_with(
                Mark::Skip,
                &format!("no token for {}, nothing synced", kind),
                color,
            )]
        }
        SyncState::Invalid => {
            let detail = match &report.fetch {
                Some(FetchOutcome::Rejected { status, message }) => {
                    format!(" ({} {})", status, message)
                }
                _ => String::new(),
            };
            return vec![colors::status_line_with(
                Mark::Fail,
                &format!("{} did not accept the credentials{}", kind, detail),
                color,
            )];
        }
        SyncState::FetchFailed => {
            return vec![colors::status_line_with(
                Mark::Fail,
                &format!(
                    "could not fetch issues from {}: {}",
                    kind,
                    report.error.as_deref().unwrap_or("unknown error")
                ),
                color,
            )];
        }
        _ => {}
    }

    let mut lines: Vec<String> = report
        .results
        .iter()
        .map(|r| render_result(r, color))
        .collect();
    let summary = if report.would_post() > 0 {
        format!(
            "{} would be posted, {} already tracked",
            report.would_post(),
            report.duplicates()
        )
    } else {
        format!(
            "{} posted, {} already tracked, {} failed",
            report.posted(),
            report.duplicates(),
            report.failed()
        )
    };
    let mark = if report.is_success() { Mark::Ok } else { Mark::Fail };
    lines.push(colors::status_line_with(mark, &summary, color));
    lines
}

/// Turns the end state into the command's exit status.
pub(crate) fn check(kind: TrackerKind, report: &SyncReport) -> Result<()> {
    match report.state {
        SyncState::Invalid => {
            let (status, message) = match &report.fetch {
                Some(FetchOutcome::Rejected { status, message }) => (*status, message.clone()),
                _ => (0, String::new()),
            };
            Err(Error::CredentialsRejected {
                tracker: kind.to_string(),
                status,
                message,
            })
        }
        SyncState::FetchFailed => Err(Error::FetchFailed {
            tracker: kind.to_string(),
            reason: report.error.clone().unwrap_or_default(),
        }),
        _ if !report.is_success() => Err(Error::PartialSyncFailure {
            posted: report.posted(),
            failed: report.failed(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
