// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing tests for the `sync` command.

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[parameterized(
    defaults = { &["tagsync", "sync"], None, false },
    long_input = { &["tagsync", "sync", "--input", "a.jsonl"], Some("a.jsonl"), false },
    short_input = { &["tagsync", "sync", "-i", "-"], Some("-"), false },
    dry_run = { &["tagsync", "sync", "--dry-run"], None, true },
    both = { &["tagsync", "sync", "-i", "a.jsonl", "--dry-run"], Some("a.jsonl"), true },
)]
fn sync_args(args: &[&str], expected_input: Option<&str>, expected_dry_run: bool) {
    match parse(args).unwrap().command {
        Command::Sync { input, dry_run } => {
            assert_eq!(input.as_deref(), expected_input);
            assert_eq!(dry_run, expected_dry_run);
        }
        other => panic!("expected sync, got {:?}", other),
    }
}

#[test]
fn sync_rejects_positional() {
    assert!(parse(&["tagsync", "sync", "a.jsonl"]).is_err());
}
