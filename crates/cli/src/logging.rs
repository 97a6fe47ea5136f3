// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log filter resolution and subscriber setup.
//!
//! The filter is built once at startup from, in increasing precedence:
//! the `[log]` table in config, `-v` flags, and `RUST_LOG`. Component
//! overrides name a module path relative to the crate
//! (`remote::gitlab = "debug"` becomes `tagsync::remote::gitlab=debug`).

use std::collections::BTreeMap;
use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

const CRATE_TARGET: &str = "tagsync";
const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// The `[log]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default level for everything (default: "warn").
    #[serde(default = "default_level")]
    pub level: String,
    /// Per-component level overrides, keyed by module path.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, String>,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_level(),
            components: BTreeMap::new(),
        }
    }
}

impl LogSettings {
    /// Rejects level names the filter would not understand.
    pub fn validate(&self) -> Result<()> {
        let levels = std::iter::once(("level", &self.level))
            .chain(self.components.iter().map(|(k, v)| (k.as_str(), v)));
        for (name, level) in levels {
            if !is_level(level) {
                return Err(Error::Config(format!(
                    "invalid log level '{}' for {}: expected one of {}",
                    level,
                    name,
                    LEVELS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn is_level(level: &str) -> bool {
    LEVELS.contains(&level.to_ascii_lowercase().as_str())
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// `(target, level)` pairs applied on top of `level`.
    pub component_levels: Vec<(String, String)>,
    /// Raw `RUST_LOG` directives; replace everything else when present.
    pub env_directives: Option<String>,
}

impl LogConfig {
    pub fn resolve(settings: &LogSettings, verbose: u8, rust_log: Option<String>) -> Self {
        let level = match verbose {
            0 => settings.level.to_ascii_lowercase(),
            1 => raise(&settings.level, "info"),
            2 => raise(&settings.level, "debug"),
            _ => "trace".to_string(),
        };
        let component_levels = settings
            .components
            .iter()
            .map(|(component, level)| (component_target(component), level.to_ascii_lowercase()))
            .collect();
        LogConfig {
            level,
            component_levels,
            env_directives: rust_log.filter(|v| !v.trim().is_empty()),
        }
    }

    /// Directive string for [`EnvFilter`].
    pub fn directives(&self) -> String {
        if let Some(env) = &self.env_directives {
            return env.clone();
        }
        std::iter::once(self.level.clone())
            .chain(
                self.component_levels
                    .iter()
                    .map(|(target, level)| format!("{}={}", target, level)),
            )
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// The more verbose of two levels.
fn raise(current: &str, floor: &str) -> String {
    let rank = |l: &str| LEVELS.iter().position(|x| x.eq_ignore_ascii_case(l));
    match (rank(current), rank(floor)) {
        (Some(c), Some(f)) if c > f => current.to_ascii_lowercase(),
        _ => floor.to_string(),
    }
}

fn component_target(component: &str) -> String {
    let component = component.trim().trim_start_matches("::");
    if component == CRATE_TARGET
        || component.starts_with("tagsync::")
        || component.starts_with("tagsync_core")
    {
        component.to_string()
    } else {
        format!("{}::{}", CRATE_TARGET, component)
    }
}

/// Installs the global subscriber writing to stderr.
///
/// Unparseable directives fall back to `warn`. Calling this twice is a no-op.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_new(config.directives()).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
