// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn sample() -> Annotation {
    Annotation::new(
        "todo",
        "src/net.rs",
        42,
        vec!["// [todo] - retry on timeout".to_string(), "fn connect() {".to_string()],
        "retry on timeout",
    )
}

#[test]
fn issue_title_includes_path() {
    assert_eq!(sample().issue_title(), "retry on timeout [src/net.rs]");
}

#[test]
fn from_json_reads_all_fields() {
    let json = r#"{"tag":"review","path":"lib/a.rb","line":7,"context":["x","y"],"title":"check this"}"#;
    let annotation = Annotation::from_json(json).unwrap();
    assert_eq!(annotation.tag, "review");
    assert_eq!(annotation.path, "lib/a.rb");
    assert_eq!(annotation.line, 7);
    assert_eq!(annotation.context, vec!["x", "y"]);
    assert_eq!(annotation.title, "check this");
}

#[test]
fn from_json_context_defaults_to_empty() {
    let json = r#"{"tag":"todo","path":"a.rs","line":1,"title":"t"}"#;
    let annotation = Annotation::from_json(json).unwrap();
    assert!(annotation.context.is_empty());
}

#[test]
fn from_json_rejects_malformed() {
    let err = Annotation::from_json("{not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[parameterized(
    empty_tag = { r#"{"tag":" ","path":"a.rs","line":1,"title":"t"}"#, "tag" },
    empty_path = { r#"{"tag":"todo","path":"","line":1,"title":"t"}"#, "path" },
    empty_title = { r#"{"tag":"todo","path":"a.rs","line":1,"title":""}"#, "title" },
)]
fn from_json_rejects_blank_fields(json: &str, field: &str) {
    let err = Annotation::from_json(json).unwrap_err();
    assert!(matches!(err, Error::InvalidAnnotation(_)));
    assert!(err.to_string().contains(field));
}

#[test]
fn fingerprint_matches_free_function() {
    let annotation = sample();
    assert_eq!(annotation.fingerprint(), Fingerprint::of(&annotation));
}
