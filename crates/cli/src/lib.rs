// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tagsync - post tagged source annotations to an issue tracker, once.
//!
//! This crate provides the `tagsync` CLI: credential setup, the sync engine,
//! and the GitLab and GitHub backends. Issue identity lives in the issue body
//! as a fingerprint, so nothing but the tracker itself needs to be persisted
//! between runs.
//!
//! # Main Components
//!
//! - [`sync::SyncEngine`] - validate, fetch, dedup scan, post
//! - [`remote::RemoteBackend`] - per-tracker wire details
//! - [`sync::Transport`] - one HTTP request per call, injectable for tests
//! - [`Config`] - `.tagsync/config.toml` with credentials and settings
//!
//! # Usage
//!
//! ```rust,ignore
//! use tagsync::remote::backend_for;
//! use tagsync::sync::{HttpTransport, SyncEngine, SyncOptions};
//!
//! let work_dir = tagsync::find_work_dir()?;
//! let mut config = tagsync::Config::load(&work_dir)?;
//! let kind = config.active_tracker()?;
//! let engine = SyncEngine::new(
//!     backend_for(kind, &config.marker_label),
//!     HttpTransport::new(&config.http)?,
//!     SyncOptions::default(),
//! );
//! let report = engine.run(config.tracker_state_mut(kind), &annotations);
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod input;
pub mod logging;
pub mod remote;
pub mod sync;

pub use cli::{Cli, Command, TrackerArg};
pub use config::{find_work_dir, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use crate::commands::setup::SetupFlags;
use crate::logging::{LogConfig, LogSettings};

/// Resolves the log filter for this process.
///
/// Uses the `[log]` table of the nearest config when there is one.
pub fn log_config(verbose: u8) -> LogConfig {
    let settings = find_work_dir()
        .and_then(|work_dir| Config::load(&work_dir))
        .map(|config| config.log)
        .unwrap_or_else(|_| LogSettings::default());
    LogConfig::resolve(&settings, verbose, env::rust_log())
}

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path } => commands::init::run(path),
        Command::Setup {
            tracker,
            host,
            project,
            token,
            insecure,
        } => commands::setup::run(
            tracker,
            SetupFlags {
                host,
                project,
                token,
                insecure,
            },
        ),
        Command::Sync { input, dry_run } => commands::sync::run(input, dry_run),
        Command::Status => commands::status::run(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "tagsync", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
