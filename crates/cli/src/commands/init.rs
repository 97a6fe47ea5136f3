// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::colors;
use crate::config::init_work_dir;
use crate::error::Result;

pub fn run(path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path)?;
    println!("{}", colors::ok(&format!("initialized {}", work_dir.display())));
    println!("next: tagsync setup gitlab|github");
    Ok(())
}

pub(crate) fn run_impl(target_path: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(target_path)?;
    let work_dir = init_work_dir(target_path)?;
    tracing::debug!(work_dir = %work_dir.display(), "initialized");
    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
