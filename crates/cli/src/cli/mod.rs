// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tagsync_core::TrackerKind;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser, Debug)]
#[command(name = "tagsync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Post tagged source annotations to an issue tracker, once")]
#[command(
    long_about = "Post tagged source annotations to an issue tracker, once.\n\n\
    Each annotation carries a fingerprint in the issue body. Before posting, every \
    open and closed issue of the project is scanned for it, so re-running a sync \
    never creates duplicates."
)]
pub struct Cli {
    /// Run as if tagsync was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// More log output (repeat for more)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Tracker named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrackerArg {
    Gitlab,
    Github,
}

impl From<TrackerArg> for TrackerKind {
    fn from(arg: TrackerArg) -> Self {
        match arg {
            TrackerArg::Gitlab => TrackerKind::GitLab,
            TrackerArg::Github => TrackerKind::GitHub,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create .tagsync/ with a default config
    #[command(after_help = "\
Examples:
  tagsync init                 Initialize in the current directory
  tagsync init --path repo     Initialize in ./repo")]
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Store tracker credentials and make that tracker active
    #[command(after_help = "\
Examples:
  tagsync setup gitlab --project 42 --token glpat-xxx
  tagsync setup gitlab --host gitlab.example.com --project group/app
  tagsync setup github --project acme/widgets --token ghp_xxx

Anything not given as a flag is asked for on stdin.")]
    Setup {
        #[arg(value_enum)]
        tracker: TrackerArg,

        /// Host without scheme (default: gitlab.com / api.github.com)
        #[arg(long, value_parser = non_empty_string)]
        host: Option<String>,

        /// Project id or path (GitLab) or owner/repo (GitHub)
        #[arg(long, short, value_parser = non_empty_string)]
        project: Option<String>,

        /// Access token
        #[arg(long, short, value_parser = non_empty_string)]
        token: Option<String>,

        /// Use plain http instead of https
        #[arg(long)]
        insecure: bool,
    },

    /// Post annotations that are not on the tracker yet
    #[command(after_help = "\
Input is JSON lines, one annotation per line:
  {\"tag\":\"todo\",\"path\":\"src/lib.rs\",\"line\":12,\"context\":[\"...\"],\"title\":\"...\"}

Examples:
  tagsync sync --input todos.jsonl
  extract-todos | tagsync sync
  tagsync sync -i todos.jsonl --dry-run")]
    Sync {
        /// JSONL file to read, or - for stdin (default: stdin)
        #[arg(long, short, value_name = "FILE")]
        input: Option<String>,

        /// Fetch and compare, but post nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the active tracker and its credential state
    Status,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  tagsync completion bash > ~/.local/share/bash-completion/completions/tagsync
  tagsync completion zsh > ~/.zfunc/_tagsync")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
