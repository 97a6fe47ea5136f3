// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The open/closed split of remote issues used for duplicate detection.

use std::fmt;

use crate::body;
use crate::fingerprint::Fingerprint;
use crate::issue::{IssueStatus, RemoteIssue};

/// Which half of the cache an issue lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Open,
    Closed,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Open => write!(f, "open"),
            Partition::Closed => write!(f, "closed"),
        }
    }
}

/// Location of the first issue whose body mentions a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHit {
    pub partition: Partition,
    pub index: usize,
}

/// Result of a dedup scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub hit: Option<ScanHit>,
    /// Number of issues examined before the scan stopped.
    pub inspected: usize,
}

impl ScanReport {
    pub fn is_duplicate(&self) -> bool {
        self.hit.is_some()
    }
}

/// Remote issues for one tracker, kept in fetch order.
///
/// Only meaningful after a successful fetch; [`IssueCache::is_populated`]
/// tells the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCache {
    open: Vec<RemoteIssue>,
    closed: Vec<RemoteIssue>,
    populated: bool,
}

impl IssueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole cache with a fresh listing, partitioning by status.
    pub fn replace<I>(&mut self, issues: I)
    where
        I: IntoIterator<Item = RemoteIssue>,
    {
        self.open.clear();
        self.closed.clear();
        for issue in issues {
            self.push(issue);
        }
        self.populated = true;
    }

    /// Appends one issue to the partition matching its status.
    pub fn push(&mut self, issue: RemoteIssue) {
        match issue.status {
            IssueStatus::Open => self.open.push(issue),
            IssueStatus::Closed => self.closed.push(issue),
        }
    }

    /// Drops all issues and marks the cache as not yet fetched.
    pub fn clear(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.populated = false;
    }

    pub fn open(&self) -> &[RemoteIssue] {
        &self.open
    }

    pub fn closed(&self) -> &[RemoteIssue] {
        &self.closed
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn len(&self) -> usize {
        self.open.len() + self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty()
    }

    /// Number of issues whose body carries a fingerprint header.
    pub fn tracked_count(&self) -> usize {
        self.open
            .iter()
            .chain(&self.closed)
            .filter(|issue| body::parse_fingerprint(&issue.body).is_some())
            .count()
    }

    /// Looks for an issue already carrying `fingerprint`.
    ///
    /// Scans `open` then `closed`, each in insertion order, and stops at the
    /// first body containing the fingerprint.
    pub fn scan(&self, fingerprint: &Fingerprint) -> ScanReport {
        let mut inspected = 0;
        for (partition, issues) in [
            (Partition::Open, &self.open),
            (Partition::Closed, &self.closed),
        ] {
            for (index, issue) in issues.iter().enumerate() {
                inspected += 1;
                if issue.mentions(fingerprint) {
                    return ScanReport {
                        hit: Some(ScanHit { partition, index }),
                        inspected,
                    };
                }
            }
        }
        ScanReport {
            hit: None,
            inspected,
        }
    }

    /// Returns the issue a scan hit points at.
    pub fn get(&self, hit: ScanHit) -> Option<&RemoteIssue> {
        match hit.partition {
            Partition::Open => self.open.get(hit.index),
            Partition::Closed => self.closed.get(hit.index),
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
