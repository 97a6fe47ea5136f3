// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn annotation() -> Annotation {
    Annotation::new(
        "review",
        "lib/parser.rs",
        88,
        vec![
            "    // [review] - is this quadratic?".to_string(),
            "    for a in xs {".to_string(),
        ],
        "is this quadratic?",
    )
}

#[test]
fn render_produces_exact_layout() {
    let fp = Fingerprint::from_raw("abc123");
    let body = render(&annotation(), &fp);
    assert_eq!(
        body,
        "__filename__ : lib/parser.rs\n\
         __line #__ : 88\n\
         __tag__ : review\n\
         __md5__ : abc123\n\
         \n    // [review] - is this quadratic?\n    for a in xs {\n"
    );
}

#[test]
fn render_without_context_ends_after_blank_line() {
    let mut a = annotation();
    a.context.clear();
    let body = render(&a, &Fingerprint::from_raw("f00"));
    assert!(body.ends_with("__md5__ : f00\n\n"));
}

#[test]
fn rendered_body_contains_fingerprint() {
    let a = annotation();
    let fp = a.fingerprint();
    assert!(render(&a, &fp).contains(fp.as_str()));
}

#[test]
fn parse_fingerprint_reads_header() {
    let a = annotation();
    let fp = a.fingerprint();
    assert_eq!(parse_fingerprint(&render(&a, &fp)), Some(fp));
}

#[test]
fn parse_fingerprint_ignores_context_lines() {
    let body = "__filename__ : a\n\n__md5__ : sneaky\n";
    assert_eq!(parse_fingerprint(body), None);
}

#[test]
fn parse_fingerprint_none_for_foreign_body() {
    assert_eq!(parse_fingerprint("Steps to reproduce:\n1. run it"), None);
    assert_eq!(parse_fingerprint(""), None);
}
