// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.tagsync/config.toml` and includes:
//! - `tracker`: the active backend (`gitlab` or `github`)
//! - `marker_label`: label added to every posted issue
//! - `[gitlab]` / `[github]`: credentials and last known validity per tracker
//! - `[http]`: request timeouts
//! - `[log]`: default log level and per-component overrides

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tagsync_core::{TrackerKind, TrackerState};

use crate::error::{Error, Result};
use crate::logging::LogSettings;
use crate::remote::DEFAULT_MARKER_LABEL;

pub const WORK_DIR_NAME: &str = ".tagsync";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCK_FILE_NAME: &str = "sync.lock";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.tagsync/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tracker used by `sync`. Set by `setup`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerKind>,
    #[serde(default = "default_marker_label")]
    pub marker_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<TrackerState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<TrackerState>,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub log: LogSettings,
}

fn default_marker_label() -> String {
    DEFAULT_MARKER_LABEL.to_string()
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Max time to establish a connection, in seconds (default: 10).
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Max time for a whole request, in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpSettings {
    fn default() -> Self {
        HttpSettings {
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tracker: None,
            marker_label: default_marker_label(),
            gitlab: None,
            github: None,
            http: HttpSettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.tagsync/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.marker_label.trim().is_empty() {
            return Err(Error::Config("marker_label must not be empty".to_string()));
        }
        config.log.validate()?;
        Ok(config)
    }

    /// Saves configuration to the given `.tagsync/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// The tracker `sync` talks to.
    pub fn active_tracker(&self) -> Result<TrackerKind> {
        self.tracker.ok_or(Error::NoTracker)
    }

    pub fn tracker_state(&self, kind: TrackerKind) -> Option<&TrackerState> {
        match kind {
            TrackerKind::GitLab => self.gitlab.as_ref(),
            TrackerKind::GitHub => self.github.as_ref(),
        }
    }

    /// State for `kind`, created empty if the tracker was never set up.
    pub fn tracker_state_mut(&mut self, kind: TrackerKind) -> &mut TrackerState {
        let slot = match kind {
            TrackerKind::GitLab => &mut self.gitlab,
            TrackerKind::GitHub => &mut self.github,
        };
        slot.get_or_insert_with(TrackerState::default)
    }
}

/// Find the .tagsync directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    find_work_dir_from(&current)
}

/// Find the .tagsync directory by walking up from `start`
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Initialize a new .tagsync directory at the given path
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    Config::default().save(&work_dir)?;
    write_gitignore(&work_dir)?;

    Ok(work_dir)
}

/// Path of the advisory lock held while `sync` runs.
pub fn lock_path(work_dir: &Path) -> PathBuf {
    work_dir.join(LOCK_FILE_NAME)
}

/// Write a .gitignore file to the work directory.
///
/// The config holds access tokens, so it is never committed.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let content = format!(
        "# Credentials\n{}\n\n# Runtime state\n{}\n",
        CONFIG_FILE_NAME, LOCK_FILE_NAME
    );
    fs::write(work_dir.join(GITIGNORE_FILE_NAME), content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
