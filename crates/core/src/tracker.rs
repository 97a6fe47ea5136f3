// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-tracker credential state.
//!
//! A [`TrackerState`] is owned by the configuration layer and persisted as a
//! TOML table. The sync engine only ever touches `valid`, `last_fetched`, and
//! the in-memory issue cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cache::IssueCache;

/// Supported remote trackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerKind {
    GitLab,
    GitHub,
}

impl TrackerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerKind::GitLab => "gitlab",
            TrackerKind::GitHub => "github",
        }
    }
}

impl fmt::Display for TrackerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the stored credentials were accepted by the tracker last time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    Invalid,
    /// Credentials changed (or never used) since the last fetch.
    #[default]
    Unchecked,
}

impl Validity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::Valid => "valid",
            Validity::Invalid => "invalid",
            Validity::Unchecked => "unchecked",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Credentials and cached remote state for one tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    /// Host name (optionally with port), without scheme.
    #[serde(default)]
    pub host: String,
    /// Project identifier: numeric id or `group/name` on GitLab, `owner/repo` on GitHub.
    #[serde(default)]
    pub project: String,
    /// Access token. Empty means "not set up"; nothing talks to the network.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Use https (true) or plain http (false).
    #[serde(default = "default_secure")]
    pub secure: bool,
    #[serde(default)]
    pub valid: Validity,
    /// Time of the last successful issue fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fetched: Option<DateTime<Utc>>,
    /// Issues from the last fetch. Rebuilt every run, never persisted.
    #[serde(skip)]
    pub issues: IssueCache,
}

fn default_secure() -> bool {
    true
}

impl Default for TrackerState {
    fn default() -> Self {
        TrackerState {
            host: String::new(),
            project: String::new(),
            token: String::new(),
            secure: default_secure(),
            valid: Validity::Unchecked,
            last_fetched: None,
            issues: IssueCache::new(),
        }
    }
}

impl TrackerState {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Overwrites host, project, and token and forgets everything learned
    /// with the previous credentials.
    pub fn reset_credentials(
        &mut self,
        host: String,
        project: String,
        token: String,
        secure: bool,
    ) {
        self.host = host;
        self.project = project;
        self.token = token;
        self.secure = secure;
        self.valid = Validity::Unchecked;
        self.last_fetched = None;
        self.issues.clear();
    }

    pub fn mark_valid(&mut self, at: DateTime<Utc>) {
        self.valid = Validity::Valid;
        self.last_fetched = Some(at);
    }

    pub fn mark_invalid(&mut self) {
        self.valid = Validity::Invalid;
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
