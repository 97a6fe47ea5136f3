// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, BufRead, Write};

use tagsync_core::TrackerKind;

use super::open_config;
use crate::cli::TrackerArg;
use crate::colors;
use crate::config::Config;
use crate::env;
use crate::error::{Error, Result};
use crate::remote::{backend_for, RemoteBackend, SetupInput};

/// Values given as flags; anything `None` is asked for.
#[derive(Debug, Clone, Default)]
pub struct SetupFlags {
    pub host: Option<String>,
    pub project: Option<String>,
    pub token: Option<String>,
    pub insecure: bool,
}

pub fn run(tracker: TrackerArg, flags: SetupFlags) -> Result<()> {
    let (mut config, work_dir) = open_config()?;
    let kind = TrackerKind::from(tracker);
    let backend = backend_for(kind, &config.marker_label);

    let stdin = io::stdin();
    let input = collect_input(
        backend.as_ref(),
        flags,
        env::token_override().is_some(),
        &mut stdin.lock(),
        &mut io::stderr(),
    )?;
    let has_token = !input.token.is_empty();
    apply(&mut config, kind, input)?;
    config.save(&work_dir)?;

    if let Some(state) = config.tracker_state(kind) {
        println!(
            "{}",
            colors::ok(&format!(
                "{} set up for project {} at {}",
                kind, state.project, state.host
            ))
        );
    }
    if !has_token {
        println!(
            "{}",
            colors::skip("no token stored; sync will use $TAGSYNC_TOKEN")
        );
    }
    Ok(())
}

/// Fills in missing values by prompting on `writer` and reading `reader`.
///
/// A blank host falls back to the tracker default. With `env_token` set a
/// missing token is left empty instead of asked for.
pub(crate) fn collect_input<R: BufRead, W: Write>(
    backend: &dyn RemoteBackend,
    flags: SetupFlags,
    env_token: bool,
    reader: &mut R,
    writer: &mut W,
) -> Result<SetupInput> {
    let host = match flags.host {
        Some(host) => Some(host),
        None => prompt(
            reader,
            writer,
            &format!("{} host [{}]", backend.kind(), backend.default_host()),
        )?,
    };
    let project = match flags.project {
        Some(project) => project,
        None => prompt(reader, writer, "project")?
            .ok_or(Error::FieldRequired { field: "project" })?,
    };
    let token = match flags.token {
        Some(token) => token,
        None if env_token => String::new(),
        None => prompt(reader, writer, "token")?.ok_or(Error::FieldRequired { field: "token" })?,
    };
    Ok(SetupInput {
        host,
        project,
        token,
        secure: !flags.insecure,
    })
}

fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(writer, "{}: ", label)?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let value = line.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

/// Stores the credentials for `kind` and makes it the active tracker.
pub(crate) fn apply(config: &mut Config, kind: TrackerKind, input: SetupInput) -> Result<()> {
    let backend = backend_for(kind, &config.marker_label);
    backend.setup(config.tracker_state_mut(kind), input)?;
    config.tracker = Some(kind);
    Ok(())
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
