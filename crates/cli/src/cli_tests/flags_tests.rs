// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Global flags and the argument-less commands.

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[parameterized(
    none = { &["tagsync", "status"], 0 },
    one = { &["tagsync", "-v", "status"], 1 },
    stacked = { &["tagsync", "-vv", "status"], 2 },
    after_subcommand = { &["tagsync", "status", "-v", "--verbose"], 2 },
)]
fn verbose_counts(args: &[&str], expected: u8) {
    assert_eq!(parse(args).unwrap().verbose, expected);
}

#[parameterized(
    short = { &["tagsync", "-C", "/tmp/x", "status"] },
    long = { &["tagsync", "--directory", "/tmp/x", "status"] },
    after_subcommand = { &["tagsync", "status", "-C", "/tmp/x"] },
)]
fn directory_flag(args: &[&str]) {
    assert_eq!(parse(args).unwrap().directory.as_deref(), Some("/tmp/x"));
}

#[test]
fn init_with_path() {
    let cli = parse(&["tagsync", "init", "--path", "repo"]).unwrap();
    assert!(matches!(cli.command, Command::Init { path: Some(ref p) } if p == "repo"));
}

#[test]
fn init_without_path() {
    let cli = parse(&["tagsync", "init"]).unwrap();
    assert!(matches!(cli.command, Command::Init { path: None }));
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_shells(shell: &str) {
    let cli = parse(&["tagsync", "completion", shell]).unwrap();
    assert!(matches!(cli.command, Command::Completion { .. }));
}

#[test]
fn completion_rejects_unknown_shell() {
    assert!(parse(&["tagsync", "completion", "tcsh"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(parse(&["tagsync"]).is_err());
}
