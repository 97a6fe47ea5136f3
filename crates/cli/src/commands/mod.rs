// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod setup;
pub mod status;
pub mod sync;

use std::path::PathBuf;

use crate::config::{find_work_dir, Config};
use crate::error::Result;

/// Helper to load the config from the current context.
pub fn open_config() -> Result<(Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    Ok((config, work_dir))
}
