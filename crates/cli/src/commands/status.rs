// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::open_config;
use crate::colors;
use crate::config::Config;
use crate::env;
use crate::error::Result;

pub fn run() -> Result<()> {
    let (config, _) = open_config()?;
    let lines = render(
        &config,
        env::token_override().is_some(),
        colors::should_colorize(),
    );
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn field(label: &str, value: impl std::fmt::Display, color: bool) -> String {
    format!("{} {}", colors::header_with(&format!("{:<12}", label), color), value)
}

/// One line per field of the active tracker.
pub(crate) fn render(config: &Config, env_token: bool, color: bool) -> Vec<String> {
    let Some(kind) = config.tracker else {
        return vec![
            field("tracker:", "none", color),
            "hint: run 'tagsync setup gitlab' or 'tagsync setup github'".to_string(),
        ];
    };
    let mut lines = vec![field("tracker:", kind, color)];
    let Some(state) = config.tracker_state(kind) else {
        lines.push(format!("hint: run 'tagsync setup {}'", kind));
        return lines;
    };

    let scheme = if state.secure { "https" } else { "http" };
    let token = match (env_token, state.has_token()) {
        (true, _) => "set (TAGSYNC_TOKEN)",
        (false, true) => "set",
        (false, false) => "not set",
    };
    let last_fetched = state
        .last_fetched
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    lines.push(field("host:", format!("{}://{}", scheme, state.host), color));
    lines.push(field("project:", &state.project, color));
    lines.push(field("token:", token, color));
    lines.push(field("credentials:", state.valid, color));
    lines.push(field("last fetch:", last_fetched, color));
    lines.push(field("label:", &config.marker_label, color));
    lines
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
