// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshots of issues that already exist on a remote tracker.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::fingerprint::Fingerprint;

/// Open/closed state of a remote issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    Closed,
}

impl IssueStatus {
    /// Returns the string representation used in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An issue as retrieved from (or just posted to) a tracker.
///
/// Never mutated locally; the cache only ever appends new snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteIssue {
    /// Tracker-side issue number (`iid` on GitLab, `number` on GitHub).
    #[serde(default)]
    pub number: Option<u64>,
    pub title: String,
    /// Free-text body. Trackers return `null` for an empty body.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    pub status: IssueStatus,
}

impl RemoteIssue {
    pub fn new(title: impl Into<String>, body: impl Into<String>, status: IssueStatus) -> Self {
        RemoteIssue {
            number: None,
            title: title.into(),
            body: body.into(),
            status,
        }
    }

    /// Sets the tracker-assigned number, if the tracker reported one.
    pub fn with_number(mut self, number: Option<u64>) -> Self {
        self.number = number;
        self
    }

    /// Returns true if the body contains the fingerprint anywhere.
    ///
    /// Plain substring search: this is what makes issues posted by any earlier
    /// version of the body format still count as duplicates.
    pub fn mentions(&self, fingerprint: &Fingerprint) -> bool {
        self.body.contains(fingerprint.as_str())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
