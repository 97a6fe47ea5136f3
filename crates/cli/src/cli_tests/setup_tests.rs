// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing tests for the `setup` command.

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn all_flags() {
    let cli = parse(&[
        "tagsync",
        "setup",
        "gitlab",
        "--host",
        "gitlab.example.com",
        "--project",
        "group/app",
        "--token",
        "secret",
        "--insecure",
    ])
    .unwrap();
    match cli.command {
        Command::Setup {
            tracker,
            host,
            project,
            token,
            insecure,
        } => {
            assert_eq!(tracker, TrackerArg::Gitlab);
            assert_eq!(host.as_deref(), Some("gitlab.example.com"));
            assert_eq!(project.as_deref(), Some("group/app"));
            assert_eq!(token.as_deref(), Some("secret"));
            assert!(insecure);
        }
        other => panic!("expected setup, got {:?}", other),
    }
}

#[test]
fn flags_are_optional() {
    let cli = parse(&["tagsync", "setup", "github"]).unwrap();
    match cli.command {
        Command::Setup {
            tracker,
            host,
            project,
            token,
            insecure,
        } => {
            assert_eq!(tracker, TrackerArg::Github);
            assert!(host.is_none() && project.is_none() && token.is_none());
            assert!(!insecure);
        }
        other => panic!("expected setup, got {:?}", other),
    }
}

#[parameterized(
    short_project = { &["tagsync", "setup", "github", "-p", "a/b"] },
    short_token = { &["tagsync", "setup", "github", "-t", "tok"] },
)]
fn short_flags(args: &[&str]) {
    assert!(parse(args).is_ok());
}

#[parameterized(
    unknown_tracker = { &["tagsync", "setup", "bitbucket"] },
    missing_tracker = { &["tagsync", "setup"] },
    blank_token = { &["tagsync", "setup", "gitlab", "--token", "  "] },
    blank_project = { &["tagsync", "setup", "gitlab", "--project", ""] },
)]
fn rejected(args: &[&str]) {
    assert!(parse(args).is_err());
}

#[parameterized(
    gitlab = { TrackerArg::Gitlab, TrackerKind::GitLab },
    github = { TrackerArg::Github, TrackerKind::GitHub },
)]
fn tracker_arg_maps_to_kind(arg: TrackerArg, kind: TrackerKind) {
    assert_eq!(TrackerKind::from(arg), kind);
}
