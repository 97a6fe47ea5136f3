// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::TransportError;

/// All possible errors that can occur in the tagsync library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'tagsync init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no tracker configured\n  hint: run 'tagsync setup gitlab' or 'tagsync setup github'")]
    NoTracker,

    #[error("{tracker} is not set up\n  hint: run 'tagsync setup {tracker}'")]
    TrackerNotSetUp { tracker: String },

    #[error("invalid project '{project}' for {tracker}\n  hint: {hint}")]
    InvalidProject {
        tracker: &'static str,
        project: String,
        hint: &'static str,
    },

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("line {line}: {reason}")]
    ParseLineError { line: usize, reason: String },

    #[error("another sync is already running against {0}")]
    SyncInProgress(String),

    #[error(
        "credentials rejected by {tracker} ({status} {message})\n  \
         hint: run 'tagsync setup {tracker}' to update them"
    )]
    CredentialsRejected {
        tracker: String,
        status: u16,
        message: String,
    },

    #[error("could not fetch issues from {tracker}: {reason}")]
    FetchFailed { tracker: String, reason: String },

    #[error("sync finished with failures: {posted} posted, {failed} failed")]
    PartialSyncFailure { posted: usize, failed: usize },

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Core(#[from] tagsync_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for tagsync operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
