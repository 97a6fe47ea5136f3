// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    open = { IssueStatus::Open, "open" },
    closed = { IssueStatus::Closed, "closed" },
)]
fn status_display(status: IssueStatus, expected: &str) {
    assert_eq!(status.as_str(), expected);
    assert_eq!(status.to_string(), expected);
}

#[test]
fn mentions_is_substring_match() {
    let issue = RemoteIssue::new(
        "t",
        "__md5__ : abc123def\n\ncontext",
        IssueStatus::Open,
    );
    assert!(issue.mentions(&Fingerprint::from_raw("abc123")));
    assert!(issue.mentions(&Fingerprint::from_raw("abc123def")));
    assert!(!issue.mentions(&Fingerprint::from_raw("abc124")));
}

#[test]
fn null_body_deserializes_as_empty() {
    let issue: RemoteIssue =
        serde_json::from_str(r#"{"title":"t","body":null,"status":"open"}"#).unwrap();
    assert_eq!(issue.body, "");
    assert!(issue.number.is_none());
}

#[test]
fn missing_body_deserializes_as_empty() {
    let issue: RemoteIssue =
        serde_json::from_str(r#"{"number":3,"title":"t","status":"closed"}"#).unwrap();
    assert_eq!(issue.body, "");
    assert_eq!(issue.number, Some(3));
}

#[test]
fn with_number_sets_number() {
    let issue = RemoteIssue::new("t", "b", IssueStatus::Open).with_number(Some(12));
    assert_eq!(issue.number, Some(12));
    let issue = issue.with_number(None);
    assert_eq!(issue.number, None);
}
